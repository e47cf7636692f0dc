// src/services/schedule_service.rs

use validator::Validate;

use crate::{
    common::{
        clock::SharedClock,
        confirm::Confirm,
        error::AppError,
        filter::{apply, matches_exact, matches_search, Criteria},
        format::{format_currency, format_date, EMPTY_PLACEHOLDER},
        sequence::{DisplaySequence, SCHEDULE_PREFIX},
    },
    db::InMemoryRepository,
    models::{
        clients::Client,
        schedules::{
            NewServiceSchedule, ScheduleStatus, ServiceSchedule, ServiceScheduleFilter,
            ServiceSchedulePatch,
        },
        Patch,
    },
    services::{autofill::resolve_client, confirmed_delete, new_record_id},
};

impl Criteria<ServiceSchedule> for ServiceScheduleFilter {
    fn matches(&self, schedule: &ServiceSchedule) -> bool {
        matches_search(&self.search, &[&schedule.client_name, &schedule.display_id])
            && matches_exact(self.priority.as_ref(), &schedule.priority)
            && matches_exact(self.status.as_ref(), &schedule.status)
    }
}

#[derive(Clone)]
pub struct ScheduleService {
    repo: InMemoryRepository<ServiceSchedule>,
    sequence: DisplaySequence,
    clock: SharedClock,
}

impl ScheduleService {
    pub fn new(initial: Vec<ServiceSchedule>, clock: SharedClock) -> Self {
        let sequence = seed_sequence(&initial);
        Self {
            repo: InMemoryRepository::new(initial),
            sequence,
            clock,
        }
    }

    pub fn records(&self) -> &[ServiceSchedule] {
        self.repo.list()
    }

    pub fn find(&self, id: &str) -> Option<&ServiceSchedule> {
        self.repo.find(id)
    }

    pub fn list(&self, filter: &ServiceScheduleFilter) -> Vec<ServiceSchedule> {
        apply(self.repo.list(), filter)
    }

    pub fn next_display_id(&self) -> String {
        self.sequence.peek()
    }

    pub fn new_draft(&self) -> NewServiceSchedule {
        NewServiceSchedule::blank(self.clock.today())
    }

    pub fn select_client(
        &self,
        draft: NewServiceSchedule,
        client_id: &str,
        clients: &[Client],
    ) -> NewServiceSchedule {
        resolve_client(draft, client_id, clients)
    }

    pub fn create(&mut self, draft: NewServiceSchedule) -> Result<ServiceSchedule, AppError> {
        draft.validate()?;

        let schedule = draft.into_schedule(new_record_id(), self.sequence.allocate());
        tracing::info!(
            "Serviço {} agendado para {} ({})",
            schedule.display_id,
            format_date(schedule.scheduled_date),
            schedule.client_name
        );
        Ok(self.repo.insert(schedule))
    }

    pub fn update(&mut self, id: &str, patch: ServiceSchedulePatch) -> Result<Option<ServiceSchedule>, AppError> {
        patch.validate()?;
        Ok(self.repo.update_with(id, |current| patch.merge_into(current)))
    }

    // Agendamentos não têm data de conclusão: só o status muda.
    pub fn change_status(&mut self, id: &str, status: ScheduleStatus) -> Option<ServiceSchedule> {
        self.repo.update_with(id, |current| ServiceSchedule {
            status,
            ..current.clone()
        })
    }

    pub fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        confirmed_delete(&mut self.repo, id, confirm, "agendamento")
    }

    /// Resumo em texto para enviar à equipe por mensagem.
    pub fn share_text(schedule: &ServiceSchedule) -> String {
        let team = if schedule.assigned_team.is_empty() {
            "Não definida"
        } else {
            schedule.assigned_team.as_str()
        };
        let observation = if schedule.observation.is_empty() {
            EMPTY_PLACEHOLDER
        } else {
            schedule.observation.as_str()
        };

        [
            "*AGENDAMENTO DE SERVIÇO*".to_string(),
            format!("🆔 *{}*", schedule.display_id),
            format!("📅 Data: {}", format_date(schedule.scheduled_date)),
            format!("👤 Cliente: {}", schedule.client_name),
            format!("📍 Endereço: {}", schedule.client_address),
            format!("📞 Tel: {}", schedule.client_phone),
            format!("👨‍💼 Vendedor: {}", schedule.salesperson),
            String::new(),
            format!("🔧 Serviço: {}", schedule.service_type),
            format!("📝 Detalhes: {}", schedule.description),
            format!("👷 Equipe: {team}"),
            format!("⚠️ Prioridade: {}", schedule.priority),
            format!("💰 Valor: {}", format_currency(schedule.cost)),
            format!("📊 Status: {}", schedule.status),
            String::new(),
            format!("ℹ️ Obs: {observation}"),
        ]
        .join("\n")
    }

    pub fn restore(&mut self, records: Vec<ServiceSchedule>) {
        self.sequence = seed_sequence(&records);
        self.repo.replace_all(records);
    }

    pub fn clear(&mut self) {
        self.sequence.reset();
        self.repo.clear();
    }
}

fn seed_sequence(records: &[ServiceSchedule]) -> DisplaySequence {
    DisplaySequence::seeded(SCHEDULE_PREFIX, records.iter().map(|s| s.display_id.as_str()))
}
