// src/models/finance.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::filter::DateRange;
use crate::db::store::Record;
use crate::models::Patch;

// --- Despesas / Reembolsos ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecord {
    pub id: String,
    pub date: NaiveDate,
    pub team_id: String,
    pub team_name: String,
    pub description: String,
    pub value: Decimal,
}

impl Record for FinancialRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewFinancialRecord {
    pub date: NaiveDate,

    #[validate(length(min = 1, message = "required"))]
    pub team_id: String,
    pub team_name: String,

    #[validate(length(min = 1, message = "required"))]
    pub description: String,

    pub value: Decimal,
}

impl NewFinancialRecord {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today,
            team_id: String::new(),
            team_name: String::new(),
            description: String::new(),
            value: Decimal::ZERO,
        }
    }

    pub fn into_record(self, id: String) -> FinancialRecord {
        FinancialRecord {
            id,
            date: self.date,
            team_id: self.team_id,
            team_name: self.team_name,
            description: self.description,
            value: self.value,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct FinancialRecordPatch {
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "required"))]
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub description: Option<String>,
    pub value: Option<Decimal>,
}

impl Patch<FinancialRecord> for FinancialRecordPatch {
    fn merge_into(self, current: &FinancialRecord) -> FinancialRecord {
        FinancialRecord {
            id: current.id.clone(),
            date: self.date.unwrap_or(current.date),
            team_id: self.team_id.unwrap_or_else(|| current.team_id.clone()),
            team_name: self.team_name.unwrap_or_else(|| current.team_name.clone()),
            description: self.description.unwrap_or_else(|| current.description.clone()),
            value: self.value.unwrap_or(current.value),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FinancialFilter {
    pub team_id: Option<String>,
    pub period: DateRange,
}

// --- Pagamento de Equipes ---

#[derive(Debug, Clone, Default)]
pub struct TeamPaymentFilter {
    // Trecho do nome da equipe
    pub team: String,
    pub period: DateRange,
}
