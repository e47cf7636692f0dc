// src/models/installations.rs

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::calc::total_installation_cost;
use crate::db::store::Record;
use crate::models::schedules::ScheduleStatus;
use crate::models::{nullable, Patch};

/// Valores de mão de obra por placa oferecidos no formulário (R$).
pub const LABOR_PRICE_OPTIONS: [u32; 4] = [0, 50, 60, 70];
pub const DEFAULT_LABOR_PRICE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GridConnectionType {
    #[default]
    #[serde(rename = "Monofásico")]
    SinglePhase,
    #[serde(rename = "Bifásico")]
    TwoPhase,
    #[serde(rename = "Trifásico")]
    ThreePhase,
}

impl GridConnectionType {
    pub fn label(&self) -> &'static str {
        match self {
            GridConnectionType::SinglePhase => "Monofásico",
            GridConnectionType::TwoPhase => "Bifásico",
            GridConnectionType::ThreePhase => "Trifásico",
        }
    }
}

impl fmt::Display for GridConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// --- INSTALAÇÃO ---

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Installation {
    pub id: String,
    // "INST 01"
    pub display_id: String,
    pub client_id: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_address: String,
    pub team_id: String,
    pub team_name: String,

    // Sistema (vem do cliente)
    pub panel_qty: u32,
    pub power_kwp: Decimal,

    // Dados elétricos
    pub grid_type: GridConnectionType,
    pub breaker_standard_amp: String,
    pub breaker_inverter_amp: String,

    pub labor_price_per_panel: Decimal,
    pub total_cost: Decimal,

    pub scheduled_date: NaiveDate,
    pub completion_date: Option<NaiveDate>,
    pub status: ScheduleStatus,
}

impl Record for Installation {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewInstallation {
    #[validate(length(min = 1, message = "required"))]
    pub client_id: String,
    pub client_name: String,
    pub client_phone: String,
    pub client_address: String,

    #[validate(length(min = 1, message = "required"))]
    pub team_id: String,
    pub team_name: String,

    pub panel_qty: u32,
    pub power_kwp: Decimal,
    pub grid_type: GridConnectionType,
    pub breaker_standard_amp: String,
    pub breaker_inverter_amp: String,
    pub labor_price_per_panel: Decimal,
    pub total_cost: Decimal,
    pub scheduled_date: NaiveDate,
    pub completion_date: Option<NaiveDate>,
    pub status: ScheduleStatus,
}

impl NewInstallation {
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            client_id: String::new(),
            client_name: String::new(),
            client_phone: String::new(),
            client_address: String::new(),
            team_id: String::new(),
            team_name: String::new(),
            panel_qty: 0,
            power_kwp: Decimal::ZERO,
            grid_type: GridConnectionType::SinglePhase,
            breaker_standard_amp: String::new(),
            breaker_inverter_amp: String::new(),
            labor_price_per_panel: Decimal::from(DEFAULT_LABOR_PRICE),
            total_cost: Decimal::ZERO,
            scheduled_date: today,
            completion_date: None,
            status: ScheduleStatus::Pending,
        }
    }

    /// Troca o valor da mão de obra e recalcula o custo total.
    pub fn set_labor_price(&mut self, price: Decimal) {
        self.labor_price_per_panel = price;
        self.recalculate_total();
    }

    pub fn set_panel_qty(&mut self, panel_qty: u32) {
        self.panel_qty = panel_qty;
        self.recalculate_total();
    }

    pub fn recalculate_total(&mut self) {
        self.total_cost = total_installation_cost(self.panel_qty, self.labor_price_per_panel);
    }

    pub fn into_installation(self, id: String, display_id: String) -> Installation {
        Installation {
            id,
            display_id,
            client_id: self.client_id,
            client_name: self.client_name,
            client_phone: self.client_phone,
            client_address: self.client_address,
            team_id: self.team_id,
            team_name: self.team_name,
            panel_qty: self.panel_qty,
            power_kwp: self.power_kwp,
            grid_type: self.grid_type,
            breaker_standard_amp: self.breaker_standard_amp,
            breaker_inverter_amp: self.breaker_inverter_amp,
            labor_price_per_panel: self.labor_price_per_panel,
            total_cost: total_installation_cost(self.panel_qty, self.labor_price_per_panel),
            scheduled_date: self.scheduled_date,
            completion_date: self.completion_date,
            status: self.status,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InstallationPatch {
    #[validate(length(min = 1, message = "required"))]
    pub client_id: Option<String>,
    pub client_name: Option<String>,
    pub client_phone: Option<String>,
    pub client_address: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub panel_qty: Option<u32>,
    pub power_kwp: Option<Decimal>,
    pub grid_type: Option<GridConnectionType>,
    pub breaker_standard_amp: Option<String>,
    pub breaker_inverter_amp: Option<String>,
    pub labor_price_per_panel: Option<Decimal>,
    pub scheduled_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "nullable")]
    pub completion_date: Option<Option<NaiveDate>>,
    pub status: Option<ScheduleStatus>,
}

impl Patch<Installation> for InstallationPatch {
    // O custo total nunca vem do patch: é sempre derivado.
    fn merge_into(self, current: &Installation) -> Installation {
        let panel_qty = self.panel_qty.unwrap_or(current.panel_qty);
        let labor_price_per_panel = self
            .labor_price_per_panel
            .unwrap_or(current.labor_price_per_panel);

        Installation {
            id: current.id.clone(),
            display_id: current.display_id.clone(),
            client_id: self.client_id.unwrap_or_else(|| current.client_id.clone()),
            client_name: self.client_name.unwrap_or_else(|| current.client_name.clone()),
            client_phone: self.client_phone.unwrap_or_else(|| current.client_phone.clone()),
            client_address: self
                .client_address
                .unwrap_or_else(|| current.client_address.clone()),
            team_id: self.team_id.unwrap_or_else(|| current.team_id.clone()),
            team_name: self.team_name.unwrap_or_else(|| current.team_name.clone()),
            panel_qty,
            power_kwp: self.power_kwp.unwrap_or(current.power_kwp),
            grid_type: self.grid_type.unwrap_or(current.grid_type),
            breaker_standard_amp: self
                .breaker_standard_amp
                .unwrap_or_else(|| current.breaker_standard_amp.clone()),
            breaker_inverter_amp: self
                .breaker_inverter_amp
                .unwrap_or_else(|| current.breaker_inverter_amp.clone()),
            labor_price_per_panel,
            total_cost: total_installation_cost(panel_qty, labor_price_per_panel),
            scheduled_date: self.scheduled_date.unwrap_or(current.scheduled_date),
            completion_date: self.completion_date.unwrap_or(current.completion_date),
            status: self.status.unwrap_or(current.status),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct InstallationFilter {
    pub search: String,
    pub status: Option<ScheduleStatus>,
    pub team_id: Option<String>,
}
