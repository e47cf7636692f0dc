// src/services/installation_service.rs

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    common::{
        clock::SharedClock,
        confirm::Confirm,
        error::AppError,
        filter::{apply, matches_exact, matches_search, Criteria},
        format::{format_currency, format_date},
        sequence::{DisplaySequence, INSTALLATION_PREFIX},
    },
    db::InMemoryRepository,
    models::{
        clients::Client,
        installations::{Installation, InstallationFilter, InstallationPatch, NewInstallation},
        schedules::ScheduleStatus,
        teams::Team,
        Patch,
    },
    services::{
        autofill::{resolve_client, resolve_team},
        confirmed_delete, new_record_id,
    },
};

impl Criteria<Installation> for InstallationFilter {
    fn matches(&self, installation: &Installation) -> bool {
        matches_search(
            &self.search,
            &[&installation.client_name, &installation.display_id],
        ) && matches_exact(self.status.as_ref(), &installation.status)
            && matches_exact(self.team_id.as_deref(), installation.team_id.as_str())
    }
}

#[derive(Clone)]
pub struct InstallationService {
    repo: InMemoryRepository<Installation>,
    sequence: DisplaySequence,
    clock: SharedClock,
}

impl InstallationService {
    pub fn new(initial: Vec<Installation>, clock: SharedClock) -> Self {
        let sequence = seed_sequence(&initial);
        Self {
            repo: InMemoryRepository::new(initial),
            sequence,
            clock,
        }
    }

    pub fn records(&self) -> &[Installation] {
        self.repo.list()
    }

    pub fn find(&self, id: &str) -> Option<&Installation> {
        self.repo.find(id)
    }

    pub fn list(&self, filter: &InstallationFilter) -> Vec<Installation> {
        apply(self.repo.list(), filter)
    }

    pub fn next_display_id(&self) -> String {
        self.sequence.peek()
    }

    pub fn new_draft(&self) -> NewInstallation {
        NewInstallation::blank(self.clock.today())
    }

    /// Traz contato, placas e potência do cliente e recalcula o custo.
    pub fn select_client(&self, draft: NewInstallation, client_id: &str, clients: &[Client]) -> NewInstallation {
        resolve_client(draft, client_id, clients)
    }

    pub fn select_team(&self, draft: NewInstallation, team_id: &str, teams: &[Team]) -> NewInstallation {
        resolve_team(draft, team_id, teams)
    }

    pub fn create(&mut self, draft: NewInstallation) -> Result<Installation, AppError> {
        draft.validate()?;

        let mut installation = draft.into_installation(new_record_id(), self.sequence.allocate());
        installation.completion_date =
            completion_for(installation.status, installation.completion_date, self.clock.today());

        tracing::info!(
            "Instalação {} agendada: {} placas para '{}' com a equipe '{}'",
            installation.display_id,
            installation.panel_qty,
            installation.client_name,
            installation.team_name
        );
        Ok(self.repo.insert(installation))
    }

    pub fn update(&mut self, id: &str, patch: InstallationPatch) -> Result<Option<Installation>, AppError> {
        patch.validate()?;

        let today = self.clock.today();
        Ok(self.repo.update_with(id, |current| {
            let mut installation = patch.merge_into(current);
            installation.completion_date =
                completion_for(installation.status, installation.completion_date, today);
            installation
        }))
    }

    pub fn change_status(&mut self, id: &str, status: ScheduleStatus) -> Option<Installation> {
        let today = self.clock.today();
        let updated = self.repo.update_with(id, |current| Installation {
            status,
            completion_date: (status == ScheduleStatus::Resolved).then_some(today),
            ..current.clone()
        });
        if let Some(installation) = &updated {
            tracing::info!("Instalação {} agora está '{}'", installation.display_id, status);
        }
        updated
    }

    pub fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        confirmed_delete(&mut self.repo, id, confirm, "instalação")
    }

    pub fn share_text(installation: &Installation) -> String {
        [
            "*INSTALAÇÃO AGENDADA*".to_string(),
            format!("🆔 *{}*", installation.display_id),
            format!("📅 Data: {}", format_date(installation.scheduled_date)),
            format!("👤 Cliente: {}", installation.client_name),
            format!("📍 Endereço: {}", installation.client_address),
            format!("📞 Tel: {}", installation.client_phone),
            String::new(),
            format!("👷 Equipe: {}", installation.team_name),
            format!(
                "📊 Sistema: {} Placas ({} kWp)",
                installation.panel_qty,
                installation.power_kwp.normalize()
            ),
            format!("⚡ Padrão: {}", installation.grid_type),
            format!(
                "🔌 Disjuntores: Padrão {}A / Inversor {}A",
                installation.breaker_standard_amp, installation.breaker_inverter_amp
            ),
            String::new(),
            format!(
                "💰 Mão de Obra: R$ {}/placa",
                installation.labor_price_per_panel.normalize()
            ),
            format!("💵 Custo Total: {}", format_currency(installation.total_cost)),
            format!("🚧 Status: {}", installation.status),
        ]
        .join("\n")
    }

    pub fn restore(&mut self, records: Vec<Installation>) {
        self.sequence = seed_sequence(&records);
        self.repo.replace_all(records);
    }

    pub fn clear(&mut self) {
        self.sequence.reset();
        self.repo.clear();
    }
}

fn completion_for(status: ScheduleStatus, supplied: Option<NaiveDate>, today: NaiveDate) -> Option<NaiveDate> {
    match status {
        ScheduleStatus::Resolved => Some(supplied.unwrap_or(today)),
        _ => None,
    }
}

fn seed_sequence(records: &[Installation]) -> DisplaySequence {
    DisplaySequence::seeded(INSTALLATION_PREFIX, records.iter().map(|i| i.display_id.as_str()))
}
