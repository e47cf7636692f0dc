// src/common/sequence.rs

// Séries de identificadores exibidos ao usuário
pub const TICKET_PREFIX: &str = "";
pub const SCHEDULE_PREFIX: &str = "SERV ";
pub const INSTALLATION_PREFIX: &str = "INST ";

const DISPLAY_ID_WIDTH: usize = 2;

/// Número embutido no id ("INST 05" -> 5). Sufixo inválido ou que não cabe
/// em `u32` conta como 0.
pub fn display_number(display_id: &str, prefix: &str) -> u32 {
    display_id
        .strip_prefix(prefix)
        .unwrap_or(display_id)
        .trim()
        .parse()
        .unwrap_or(0)
}

pub fn format_display_id(prefix: &str, number: u64) -> String {
    format!("{prefix}{number:0width$}", width = DISPLAY_ID_WIDTH)
}

/// Próximo id da série: maior número existente + 1.
pub fn next_display_id<'a, I>(existing: I, prefix: &str) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let max = existing
        .into_iter()
        .map(|id| display_number(id, prefix))
        .max()
        .unwrap_or(0);
    format_display_id(prefix, u64::from(max) + 1)
}

/// Contador monotônico de uma série.
///
/// É semeado uma única vez a partir dos registros existentes; depois disso só
/// avança, então excluir o registro mais recente não faz o id ser reutilizado.
/// O contador é `u64` e os sufixos lidos são `u32`, então o incremento não estoura.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplaySequence {
    prefix: &'static str,
    last: u64,
}

impl DisplaySequence {
    pub fn seeded<'a, I>(prefix: &'static str, existing: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let last = existing
            .into_iter()
            .map(|id| u64::from(display_number(id, prefix)))
            .max()
            .unwrap_or(0);
        Self { prefix, last }
    }

    /// O id que o formulário mostra antes de salvar.
    pub fn peek(&self) -> String {
        format_display_id(self.prefix, self.last + 1)
    }

    pub fn allocate(&mut self) -> String {
        self.last += 1;
        format_display_id(self.prefix, self.last)
    }

    /// Avança o contador se o id observado for maior (ex: registros importados).
    pub fn observe(&mut self, display_id: &str) {
        self.last = self.last.max(u64::from(display_number(display_id, self.prefix)));
    }

    pub fn reset(&mut self) {
        self.last = 0;
    }
}
