// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;

use crate::common::filter::DateRange;

// Filtro avançado do topo do dashboard
#[derive(Debug, Clone, Default)]
pub struct DashboardFilter {
    // Aplicado sobre a data de conclusão das instalações
    pub period: DateRange,
    // Trecho do nome da equipe ("Alpha", "Beta"...)
    pub team: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopTeam {
    pub name: String,
    pub panels: u32,
}

// Uma fatia dos gráficos de pizza
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCount {
    pub name: String,
    pub value: usize,
}

// Uma barra do gráfico de desempenho
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPerformance {
    pub name: String,
    pub panels: u32,
    pub satisfaction: f64,
}

// Os cards do topo + dados dos gráficos
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_clients: usize,
    pub completed_installs: usize,
    pub total_panels: u32,
    pub total_labor_cost: Decimal,
    pub top_team: Option<TopTeam>,
    pub satisfaction: f64,
    pub team_performance: Vec<TeamPerformance>,
    pub services_by_status: Vec<StatusCount>,
    pub homologations_by_status: Vec<StatusCount>,
}
