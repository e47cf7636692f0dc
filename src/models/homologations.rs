// src/models/homologations.rs

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::store::Record;
use crate::models::Patch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum HomologationStatus {
    #[default]
    #[serde(rename = "Aguardando")]
    Waiting,
    #[serde(rename = "Agendada")]
    Scheduled,
    #[serde(rename = "Homologado")]
    Approved,
}

impl HomologationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            HomologationStatus::Waiting => "Aguardando",
            HomologationStatus::Scheduled => "Agendada",
            HomologationStatus::Approved => "Homologado",
        }
    }
}

impl fmt::Display for HomologationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Homologation {
    pub id: String,
    pub client_id: String,
    pub client_name: String,
    pub installation_completion_date: NaiveDate,
    // Entrada no contrato (Sim/Não)
    pub entered_contract: bool,
    pub status: HomologationStatus,
}

impl Record for Homologation {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewHomologation {
    #[validate(length(min = 1, message = "required"))]
    pub client_id: String,
    pub client_name: String,
    // Vazio até o cliente ser selecionado; na criação cai para "hoje"
    pub installation_completion_date: Option<NaiveDate>,
    pub entered_contract: bool,
    pub status: HomologationStatus,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct HomologationPatch {
    #[validate(length(min = 1, message = "required"))]
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub installation_completion_date: Option<NaiveDate>,
    pub entered_contract: Option<bool>,
    pub status: Option<HomologationStatus>,
}

impl Patch<Homologation> for HomologationPatch {
    fn merge_into(self, current: &Homologation) -> Homologation {
        Homologation {
            id: current.id.clone(),
            client_id: self.client_id.unwrap_or_else(|| current.client_id.clone()),
            client_name: self.client_name.unwrap_or_else(|| current.client_name.clone()),
            installation_completion_date: self
                .installation_completion_date
                .unwrap_or(current.installation_completion_date),
            entered_contract: self.entered_contract.unwrap_or(current.entered_contract),
            status: self.status.unwrap_or(current.status),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HomologationFilter {
    pub search: String,
    pub status: Option<HomologationStatus>,
    pub entered_contract: Option<bool>,
}
