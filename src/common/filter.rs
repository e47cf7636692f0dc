// src/common/filter.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Critério de filtragem de uma listagem.
/// Critérios diferentes combinam com AND; dentro da busca textual vale OR.
pub trait Criteria<T> {
    fn matches(&self, record: &T) -> bool;
}

/// Aplica o critério mantendo a ordem original dos registros.
pub fn apply<T: Clone, C: Criteria<T>>(records: &[T], criteria: &C) -> Vec<T> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Busca sem diferenciar maiúsculas/minúsculas em qualquer um dos campos.
/// Termo vazio casa com tudo.
pub fn matches_search(term: &str, fields: &[&str]) -> bool {
    if term.is_empty() {
        return true;
    }
    let needle = term.to_lowercase();
    fields
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

/// Filtro de igualdade: `None` é curinga.
pub fn matches_exact<T: PartialEq + ?Sized>(filter: Option<&T>, value: &T) -> bool {
    filter.is_none_or(|expected| expected == value)
}

/// Intervalo fechado de datas. Limite ausente = aberto daquele lado.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    pub fn is_unbounded(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Um registro sem data nunca passa por um limite definido.
    pub fn contains(&self, date: Option<NaiveDate>) -> bool {
        let after_start = match (self.start, date) {
            (None, _) => true,
            (Some(start), Some(date)) => date >= start,
            (Some(_), None) => false,
        };
        let before_end = match (self.end, date) {
            (None, _) => true,
            (Some(end), Some(date)) => date <= end,
            (Some(_), None) => false,
        };
        after_start && before_end
    }
}
