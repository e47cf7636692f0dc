// src/models/tickets.rs

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::db::store::Record;
use crate::models::{nullable, required_other_text, Patch};

// --- ENUMS ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServiceStatus {
    #[default]
    #[serde(rename = "A Resolver")]
    Open,
    #[serde(rename = "Resolvendo")]
    InProgress,
    #[serde(rename = "Resolvido")]
    Resolved,
}

impl ServiceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ServiceStatus::Open => "A Resolver",
            ServiceStatus::InProgress => "Resolvendo",
            ServiceStatus::Resolved => "Resolvido",
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Attendant {
    #[default]
    Rafael,
    Bruna,
    Clara,
    #[serde(rename = "Júlio")]
    Julio,
    #[serde(rename = "Outros")]
    Other(String),
}

impl fmt::Display for Attendant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Attendant::Rafael => "Rafael",
            Attendant::Bruna => "Bruna",
            Attendant::Clara => "Clara",
            Attendant::Julio => "Júlio",
            Attendant::Other(name) => name.as_str(),
        };
        f.write_str(label)
    }
}

// --- ATENDIMENTO ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicket {
    pub id: String,
    // "01", "02"...
    pub display_id: String,
    pub date: NaiveDate,
    pub client_id: String,
    pub client_name: String,
    pub client_address: String,
    pub salesperson: String,
    pub issue: String,
    pub status: ServiceStatus,
    pub attendant: Attendant,
    pub finished_date: Option<NaiveDate>,
}

impl Record for ServiceTicket {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceTicket {
    pub date: NaiveDate,

    #[validate(length(min = 1, message = "required"))]
    pub client_id: String,
    pub client_name: String,
    pub client_address: String,
    pub salesperson: String,

    #[validate(length(min = 1, message = "required"))]
    pub issue: String,

    pub status: ServiceStatus,

    #[validate(custom(function = "validate_attendant"))]
    pub attendant: Attendant,

    pub finished_date: Option<NaiveDate>,
}

impl NewServiceTicket {
    /// Rascunho com os valores padrão do formulário.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            date: today,
            client_id: String::new(),
            client_name: String::new(),
            client_address: String::new(),
            salesperson: String::new(),
            issue: String::new(),
            status: ServiceStatus::Open,
            attendant: Attendant::Rafael,
            finished_date: None,
        }
    }

    pub fn into_ticket(self, id: String, display_id: String) -> ServiceTicket {
        ServiceTicket {
            id,
            display_id,
            date: self.date,
            client_id: self.client_id,
            client_name: self.client_name,
            client_address: self.client_address,
            salesperson: self.salesperson,
            issue: self.issue,
            status: self.status,
            attendant: self.attendant,
            finished_date: self.finished_date,
        }
    }
}

fn validate_attendant(attendant: &Attendant) -> Result<(), ValidationError> {
    match attendant {
        Attendant::Other(name) => required_other_text(name),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketPatch {
    pub date: Option<NaiveDate>,
    #[validate(length(min = 1, message = "required"))]
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub client_address: Option<String>,
    pub salesperson: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub issue: Option<String>,
    pub status: Option<ServiceStatus>,
    #[validate(custom(function = "validate_attendant"))]
    pub attendant: Option<Attendant>,
    #[serde(default, deserialize_with = "nullable")]
    pub finished_date: Option<Option<NaiveDate>>,
}

impl Patch<ServiceTicket> for ServiceTicketPatch {
    fn merge_into(self, current: &ServiceTicket) -> ServiceTicket {
        ServiceTicket {
            id: current.id.clone(),
            display_id: current.display_id.clone(),
            date: self.date.unwrap_or(current.date),
            client_id: self.client_id.unwrap_or_else(|| current.client_id.clone()),
            client_name: self.client_name.unwrap_or_else(|| current.client_name.clone()),
            client_address: self
                .client_address
                .unwrap_or_else(|| current.client_address.clone()),
            salesperson: self.salesperson.unwrap_or_else(|| current.salesperson.clone()),
            issue: self.issue.unwrap_or_else(|| current.issue.clone()),
            status: self.status.unwrap_or(current.status),
            attendant: self.attendant.unwrap_or_else(|| current.attendant.clone()),
            finished_date: self.finished_date.unwrap_or(current.finished_date),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServiceTicketFilter {
    pub search: String,
    pub status: Option<ServiceStatus>,
}
