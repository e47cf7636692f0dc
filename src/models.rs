// src/models.rs

use serde::{Deserialize, Deserializer};
use validator::ValidationError;

pub mod clients;
pub mod dashboard;
pub mod finance;
pub mod homologations;
pub mod installations;
pub mod schedules;
pub mod settings;
pub mod teams;
pub mod tickets;

/// Edição parcial de um registro: os campos presentes no patch vencem,
/// os ausentes mantêm o valor atual.
pub trait Patch<T> {
    fn merge_into(self, current: &T) -> T;
}

/// Campo anulável de um patch: ausente mantém o valor atual, `null` limpa.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

// Quando a opção "Outros" é escolhida o texto livre passa a ser obrigatório.
pub(crate) fn required_other_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        let mut err = ValidationError::new("required");
        err.message = Some("Informe o valor para a opção \"Outros\"".into());
        return Err(err);
    }
    Ok(())
}
