// src/models/settings.rs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::models::{
    clients::Client, finance::FinancialRecord, homologations::Homologation,
    installations::Installation, schedules::ServiceSchedule, teams::Team,
    tickets::ServiceTicket,
};

pub const BACKUP_SYSTEM: &str = "SolarFlow";
pub const BACKUP_VERSION: &str = "1.0";

// Frase que o usuário precisa digitar para zerar o sistema
pub const RESET_PHRASE: &str = "ZERAR SISTEMA";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupPolicy {
    pub auto_backup: bool,
    // Hora do dia (0-23) do backup automático
    pub backup_hour: u32,
    pub last_backup: Option<NaiveDateTime>,
}

impl Default for BackupPolicy {
    fn default() -> Self {
        Self {
            auto_backup: true,
            backup_hour: 9,
            last_backup: None,
        }
    }
}

/// Todas as coleções do sistema, na ordem de exibição.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupData {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub tickets: Vec<ServiceTicket>,
    #[serde(default)]
    pub schedules: Vec<ServiceSchedule>,
    #[serde(default)]
    pub installations: Vec<Installation>,
    #[serde(default)]
    pub homologations: Vec<Homologation>,
    #[serde(default)]
    pub financial_records: Vec<FinancialRecord>,
    #[serde(default)]
    pub team_payments: Vec<Installation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BackupDocument {
    pub system: String,
    pub version: String,
    pub exported_at: NaiveDateTime,
    pub modules: Vec<String>,
    pub data: BackupData,
}
