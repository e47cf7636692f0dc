// src/services/autofill.rs

// Ao escolher um cliente ou uma equipe no formulário, copiamos um subconjunto
// fixo de campos para o rascunho. É uma fotografia: se o cliente mudar depois,
// o registro continua com os dados do momento da seleção.

use crate::models::{
    clients::Client,
    finance::NewFinancialRecord,
    homologations::NewHomologation,
    installations::NewInstallation,
    schedules::NewServiceSchedule,
    teams::Team,
    tickets::NewServiceTicket,
};

pub trait ClientLinked {
    fn link_client(&mut self, client: &Client);
}

pub trait TeamLinked {
    fn link_team(&mut self, team: &Team);
}

/// Preenche o rascunho a partir do cliente `client_id`.
/// Id desconhecido devolve o rascunho intacto (não é erro).
pub fn resolve_client<D: ClientLinked>(mut draft: D, client_id: &str, clients: &[Client]) -> D {
    match clients.iter().find(|c| c.id == client_id) {
        Some(client) => draft.link_client(client),
        None => tracing::debug!("Cliente '{}' não encontrado; rascunho mantido", client_id),
    }
    draft
}

pub fn resolve_team<D: TeamLinked>(mut draft: D, team_id: &str, teams: &[Team]) -> D {
    match teams.iter().find(|t| t.id == team_id) {
        Some(team) => draft.link_team(team),
        None => tracing::debug!("Equipe '{}' não encontrada; rascunho mantido", team_id),
    }
    draft
}

// --- CLIENTE ---

impl ClientLinked for NewServiceTicket {
    fn link_client(&mut self, client: &Client) {
        self.client_id = client.id.clone();
        self.client_name = client.name.clone();
        self.client_address = client.address.clone();
        self.salesperson = client.salesperson.to_string();
    }
}

impl ClientLinked for NewServiceSchedule {
    fn link_client(&mut self, client: &Client) {
        self.client_id = client.id.clone();
        self.client_name = client.name.clone();
        self.client_address = client.address.clone();
        self.client_phone = client.phone.clone();
        self.salesperson = client.salesperson.to_string();
    }
}

impl ClientLinked for NewInstallation {
    // Além do contato, traz o sistema vendido e recalcula o custo.
    fn link_client(&mut self, client: &Client) {
        self.client_id = client.id.clone();
        self.client_name = client.name.clone();
        self.client_address = client.address.clone();
        self.client_phone = client.phone.clone();
        self.power_kwp = client.power_kwp;
        self.set_panel_qty(client.panel_qty);
    }
}

impl ClientLinked for NewHomologation {
    fn link_client(&mut self, client: &Client) {
        self.client_id = client.id.clone();
        self.client_name = client.name.clone();
        self.installation_completion_date = client.installation_completion_date;
    }
}

// --- EQUIPE ---

impl TeamLinked for NewInstallation {
    fn link_team(&mut self, team: &Team) {
        self.team_id = team.id.clone();
        self.team_name = team.leader_name.clone();
    }
}

impl TeamLinked for NewFinancialRecord {
    fn link_team(&mut self, team: &Team) {
        self.team_id = team.id.clone();
        self.team_name = team.leader_name.clone();
    }
}
