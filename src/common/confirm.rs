// src/common/confirm.rs

pub const DELETE_CONFIRMATION: &str = "Tem certeza que deseja excluir este registro?";

pub const RESET_CONFIRMATION: &str = "ATENÇÃO: Esta ação apagará TODOS os dados do sistema \
     (Clientes, Financeiro, Histórico). Esta ação é irreversível.";

pub fn import_confirmation(source: &str) -> String {
    format!("Deseja restaurar o backup a partir de \"{source}\"? Os dados atuais serão sobrescritos.")
}

/// Pergunta de sim/não feita ao usuário antes de ações destrutivas.
/// Recusar aborta a operação sem alterar nada e sem erro.
pub trait Confirm {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

// Resposta fixa (ex: modo não interativo)
#[derive(Debug, Clone, Copy)]
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}
