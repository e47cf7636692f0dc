// src/models/clients.rs

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::db::store::Record;
use crate::models::{nullable, required_other_text, Patch};

// Time responsável pela venda. "Outros" carrega o nome digitado à mão.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Salesperson {
    #[default]
    Isa,
    Lays,
    Yasmin,
    Roberta,
    Pedro,
    Emanoel,
    Edmir,
    #[serde(rename = "Outros")]
    Other(String),
}

impl Salesperson {
    /// Compara apenas a variante: `Other("a")` e `Other("b")` são do mesmo tipo.
    pub fn same_kind(&self, other: &Salesperson) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

impl fmt::Display for Salesperson {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Salesperson::Isa => "Isa",
            Salesperson::Lays => "Lays",
            Salesperson::Yasmin => "Yasmin",
            Salesperson::Roberta => "Roberta",
            Salesperson::Pedro => "Pedro",
            Salesperson::Emanoel => "Emanoel",
            Salesperson::Edmir => "Edmir",
            Salesperson::Other(name) => name.as_str(),
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InstallStatus {
    #[default]
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Em Andamento")]
    InProgress,
    #[serde(rename = "Concluída")]
    Completed,
    #[serde(rename = "Cancelada")]
    Cancelled,
}

impl InstallStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InstallStatus::Pending => "Pendente",
            InstallStatus::InProgress => "Em Andamento",
            InstallStatus::Completed => "Concluída",
            InstallStatus::Cancelled => "Cancelada",
        }
    }
}

impl fmt::Display for InstallStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- CLIENTE ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub address: String,
    pub phone: String,
    pub salesperson: Salesperson,
    pub panel_qty: u32,
    pub power_kwp: Decimal,
    pub contract_date: Option<NaiveDate>,
    pub observation: String,
    pub install_status: InstallStatus,
    pub assigned_team: Option<String>,
    // Usado pela homologação para pré-preencher a data de conclusão
    pub installation_completion_date: Option<NaiveDate>,
}

impl Record for Client {
    fn id(&self) -> &str {
        &self.id
    }
}

// Dados do formulário "Novo Cliente"
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewClient {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,

    #[validate(length(min = 1, message = "required"))]
    pub address: String,

    #[validate(length(min = 1, message = "required"))]
    pub phone: String,

    #[validate(custom(function = "validate_salesperson"))]
    pub salesperson: Salesperson,

    pub panel_qty: u32,
    pub power_kwp: Decimal,
    pub contract_date: Option<NaiveDate>,
    #[serde(default)]
    pub observation: String,
    pub install_status: InstallStatus,
    pub assigned_team: Option<String>,
    pub installation_completion_date: Option<NaiveDate>,
}

impl NewClient {
    pub fn into_client(self, id: String) -> Client {
        Client {
            id,
            name: self.name,
            address: self.address,
            phone: self.phone,
            salesperson: self.salesperson,
            panel_qty: self.panel_qty,
            power_kwp: self.power_kwp,
            contract_date: self.contract_date,
            observation: self.observation,
            install_status: self.install_status,
            assigned_team: self.assigned_team,
            installation_completion_date: self.installation_completion_date,
        }
    }
}

fn validate_salesperson(salesperson: &Salesperson) -> Result<(), ValidationError> {
    match salesperson {
        Salesperson::Other(name) => required_other_text(name),
        _ => Ok(()),
    }
}

// Edição parcial: só os campos presentes sobrescrevem o registro.
// Nos campos anuláveis, `Some(None)` limpa o valor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ClientPatch {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub address: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub phone: Option<String>,
    #[validate(custom(function = "validate_salesperson"))]
    pub salesperson: Option<Salesperson>,
    pub panel_qty: Option<u32>,
    pub power_kwp: Option<Decimal>,
    #[serde(default, deserialize_with = "nullable")]
    pub contract_date: Option<Option<NaiveDate>>,
    pub observation: Option<String>,
    pub install_status: Option<InstallStatus>,
    #[serde(default, deserialize_with = "nullable")]
    pub assigned_team: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub installation_completion_date: Option<Option<NaiveDate>>,
}

impl Patch<Client> for ClientPatch {
    fn merge_into(self, current: &Client) -> Client {
        Client {
            id: current.id.clone(),
            name: self.name.unwrap_or_else(|| current.name.clone()),
            address: self.address.unwrap_or_else(|| current.address.clone()),
            phone: self.phone.unwrap_or_else(|| current.phone.clone()),
            salesperson: self.salesperson.unwrap_or_else(|| current.salesperson.clone()),
            panel_qty: self.panel_qty.unwrap_or(current.panel_qty),
            power_kwp: self.power_kwp.unwrap_or(current.power_kwp),
            contract_date: self.contract_date.unwrap_or(current.contract_date),
            observation: self.observation.unwrap_or_else(|| current.observation.clone()),
            install_status: self.install_status.unwrap_or(current.install_status),
            assigned_team: self
                .assigned_team
                .unwrap_or_else(|| current.assigned_team.clone()),
            installation_completion_date: self
                .installation_completion_date
                .unwrap_or(current.installation_completion_date),
        }
    }
}

// --- FILTRO AVANÇADO ---

#[derive(Debug, Clone, Default)]
pub struct ClientFilter {
    pub search: String,
    pub status: Option<InstallStatus>,
    pub salesperson: Option<Salesperson>,
    pub contract_period: crate::common::filter::DateRange,
}

/// Prazos contratuais exibidos na listagem (60 e 90 dias após o contrato).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDeadlines {
    pub first: String,
    pub second: String,
}
