// src/models/schedules.rs

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::db::store::Record;
use crate::models::{required_other_text, Patch};

// --- ENUMS ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServiceType {
    #[default]
    #[serde(rename = "Configuração do Inversor")]
    InverterSetup,
    #[serde(rename = "Verificar Geração")]
    GenerationCheck,
    #[serde(rename = "Inspeção")]
    Inspection,
    #[serde(rename = "Telhado / Infiltração")]
    RoofLeak,
    #[serde(rename = "Falha do Sistema")]
    SystemFailure,
    #[serde(rename = "Passar Cartão")]
    CardPayment,
    #[serde(rename = "Outros")]
    Other(String),
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceType::InverterSetup => "Configuração do Inversor",
            ServiceType::GenerationCheck => "Verificar Geração",
            ServiceType::Inspection => "Inspeção",
            ServiceType::RoofLeak => "Telhado / Infiltração",
            ServiceType::SystemFailure => "Falha do Sistema",
            ServiceType::CardPayment => "Passar Cartão",
            ServiceType::Other(description) => description.as_str(),
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ServicePriority {
    #[default]
    #[serde(rename = "Pequena")]
    Low,
    #[serde(rename = "Média")]
    Medium,
    #[serde(rename = "Alta")]
    High,
    #[serde(rename = "Urgente")]
    Urgent,
}

impl ServicePriority {
    pub fn label(&self) -> &'static str {
        match self {
            ServicePriority::Low => "Pequena",
            ServicePriority::Medium => "Média",
            ServicePriority::High => "Alta",
            ServicePriority::Urgent => "Urgente",
        }
    }
}

impl fmt::Display for ServicePriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Compartilhado entre agendamentos e instalações
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ScheduleStatus {
    #[default]
    #[serde(rename = "Pendente")]
    Pending,
    #[serde(rename = "Em Andamento")]
    InProgress,
    #[serde(rename = "Resolvido")]
    Resolved,
}

impl ScheduleStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ScheduleStatus::Pending => "Pendente",
            ScheduleStatus::InProgress => "Em Andamento",
            ScheduleStatus::Resolved => "Resolvido",
        }
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- AGENDAMENTO ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSchedule {
    pub id: String,
    // "SERV 01"
    pub display_id: String,
    pub client_id: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_address: String,
    pub salesperson: String,
    pub service_type: ServiceType,
    pub description: String,
    pub assigned_team: String,
    pub priority: ServicePriority,
    pub scheduled_date: NaiveDate,
    pub cost: Decimal,
    pub status: ScheduleStatus,
    pub observation: String,
}

impl Record for ServiceSchedule {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceSchedule {
    #[validate(length(min = 1, message = "required"))]
    pub client_id: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_address: String,
    pub salesperson: String,

    #[validate(custom(function = "validate_service_type"))]
    pub service_type: ServiceType,

    #[validate(length(min = 1, message = "required"))]
    pub description: String,

    pub assigned_team: String,
    pub priority: ServicePriority,
    pub scheduled_date: NaiveDate,
    pub cost: Decimal,
    pub status: ScheduleStatus,
    #[serde(default)]
    pub observation: String,
}

impl NewServiceSchedule {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            client_id: String::new(),
            client_name: String::new(),
            client_phone: String::new(),
            client_address: String::new(),
            salesperson: String::new(),
            service_type: ServiceType::InverterSetup,
            description: String::new(),
            assigned_team: String::new(),
            priority: ServicePriority::Low,
            scheduled_date: today,
            cost: Decimal::ZERO,
            status: ScheduleStatus::Pending,
            observation: String::new(),
        }
    }

    pub fn into_schedule(self, id: String, display_id: String) -> ServiceSchedule {
        ServiceSchedule {
            id,
            display_id,
            client_id: self.client_id,
            client_name: self.client_name,
            client_phone: self.client_phone,
            client_address: self.client_address,
            salesperson: self.salesperson,
            service_type: self.service_type,
            description: self.description,
            assigned_team: self.assigned_team,
            priority: self.priority,
            scheduled_date: self.scheduled_date,
            cost: self.cost,
            status: self.status,
            observation: self.observation,
        }
    }
}

fn validate_service_type(service_type: &ServiceType) -> Result<(), ValidationError> {
    match service_type {
        ServiceType::Other(description) => required_other_text(description),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ServiceSchedulePatch {
    #[validate(length(min = 1, message = "required"))]
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub client_address: Option<String>,
    pub salesperson: Option<String>,
    #[validate(custom(function = "validate_service_type"))]
    pub service_type: Option<ServiceType>,
    #[validate(length(min = 1, message = "required"))]
    pub description: Option<String>,
    pub assigned_team: Option<String>,
    pub priority: Option<ServicePriority>,
    pub scheduled_date: Option<NaiveDate>,
    pub cost: Option<Decimal>,
    pub status: Option<ScheduleStatus>,
    pub observation: Option<String>,
}

impl Patch<ServiceSchedule> for ServiceSchedulePatch {
    fn merge_into(self, current: &ServiceSchedule) -> ServiceSchedule {
        ServiceSchedule {
            id: current.id.clone(),
            display_id: current.display_id.clone(),
            client_id: self.client_id.unwrap_or_else(|| current.client_id.clone()),
            client_name: self.client_name.unwrap_or_else(|| current.client_name.clone()),
            client_phone: self.client_phone.unwrap_or_else(|| current.client_phone.clone()),
            client_address: self
                .client_address
                .unwrap_or_else(|| current.client_address.clone()),
            salesperson: self.salesperson.unwrap_or_else(|| current.salesperson.clone()),
            service_type: self.service_type.unwrap_or_else(|| current.service_type.clone()),
            description: self.description.unwrap_or_else(|| current.description.clone()),
            assigned_team: self.assigned_team.unwrap_or_else(|| current.assigned_team.clone()),
            priority: self.priority.unwrap_or(current.priority),
            scheduled_date: self.scheduled_date.unwrap_or(current.scheduled_date),
            cost: self.cost.unwrap_or(current.cost),
            status: self.status.unwrap_or(current.status),
            observation: self.observation.unwrap_or_else(|| current.observation.clone()),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServiceScheduleFilter {
    pub search: String,
    pub priority: Option<ServicePriority>,
    pub status: Option<ScheduleStatus>,
}
