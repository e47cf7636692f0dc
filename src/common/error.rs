// src/common/error.rs

use std::collections::HashMap;

use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// Buscas que não encontram o registro e confirmações recusadas NÃO são erros.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Erro de validação")]
    ValidationError(#[from] validator::ValidationErrors),

    #[error("Preencha o comentário")]
    EmptyFeedbackComment,

    #[error("Frase de confirmação incorreta")]
    ResetPhraseMismatch,

    #[error("Arquivo de backup inválido: {0}")]
    BackupFormat(#[from] serde_json::Error),

    #[error("Backup de outro sistema ou versão: {0}")]
    UnsupportedBackup(String),

    #[error("Erro de E/S no backup: {0}")]
    BackupIo(#[from] std::io::Error),

    #[error("Configuração inválida: {0}")]
    InvalidConfig(String),
}

impl AppError {
    /// Mensagens de validação agrupadas por campo (ex: `{"name": ["required"]}`).
    pub fn validation_details(&self) -> HashMap<String, Vec<String>> {
        let mut details = HashMap::new();
        if let AppError::ValidationError(errors) = self {
            for (field, field_errors) in errors.field_errors() {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                details.insert(field.to_string(), messages);
            }
        }
        details
    }
}
