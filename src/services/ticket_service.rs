// src/services/ticket_service.rs

use chrono::NaiveDate;
use validator::Validate;

use crate::{
    common::{
        clock::SharedClock,
        confirm::Confirm,
        error::AppError,
        filter::{apply, matches_exact, matches_search, Criteria},
        sequence::{DisplaySequence, TICKET_PREFIX},
    },
    db::InMemoryRepository,
    models::{
        clients::Client,
        tickets::{NewServiceTicket, ServiceStatus, ServiceTicket, ServiceTicketFilter, ServiceTicketPatch},
        Patch,
    },
    services::{autofill::resolve_client, confirmed_delete, new_record_id},
};

impl Criteria<ServiceTicket> for ServiceTicketFilter {
    fn matches(&self, ticket: &ServiceTicket) -> bool {
        matches_search(&self.search, &[&ticket.client_name])
            && matches_exact(self.status.as_ref(), &ticket.status)
    }
}

/// Atendimentos de pós-venda ("Serviços").
#[derive(Clone)]
pub struct TicketService {
    repo: InMemoryRepository<ServiceTicket>,
    sequence: DisplaySequence,
    clock: SharedClock,
}

impl TicketService {
    pub fn new(initial: Vec<ServiceTicket>, clock: SharedClock) -> Self {
        let sequence = seed_sequence(&initial);
        Self {
            repo: InMemoryRepository::new(initial),
            sequence,
            clock,
        }
    }

    pub fn records(&self) -> &[ServiceTicket] {
        self.repo.list()
    }

    pub fn find(&self, id: &str) -> Option<&ServiceTicket> {
        self.repo.find(id)
    }

    pub fn list(&self, filter: &ServiceTicketFilter) -> Vec<ServiceTicket> {
        apply(self.repo.list(), filter)
    }

    /// Id que o próximo atendimento vai receber.
    pub fn next_display_id(&self) -> String {
        self.sequence.peek()
    }

    pub fn new_draft(&self) -> NewServiceTicket {
        NewServiceTicket::blank(self.clock.today())
    }

    pub fn select_client(&self, draft: NewServiceTicket, client_id: &str, clients: &[Client]) -> NewServiceTicket {
        resolve_client(draft, client_id, clients)
    }

    pub fn create(&mut self, draft: NewServiceTicket) -> Result<ServiceTicket, AppError> {
        draft.validate()?;

        let display_id = self.sequence.allocate();
        let mut ticket = draft.into_ticket(new_record_id(), display_id);
        ticket.finished_date = stamp_if_resolved(ticket.status, ticket.finished_date, self.clock.today());

        tracing::info!("Atendimento {} aberto para '{}'", ticket.display_id, ticket.client_name);
        Ok(self.repo.insert(ticket))
    }

    pub fn update(&mut self, id: &str, patch: ServiceTicketPatch) -> Result<Option<ServiceTicket>, AppError> {
        patch.validate()?;

        let today = self.clock.today();
        Ok(self.repo.update_with(id, |current| {
            let mut ticket = patch.merge_into(current);
            ticket.finished_date = stamp_if_resolved(ticket.status, ticket.finished_date, today);
            ticket
        }))
    }

    /// Troca rápida de status pela listagem. "Resolvido" sempre carimba hoje;
    /// qualquer outro status limpa a data de finalização.
    pub fn change_status(&mut self, id: &str, status: ServiceStatus) -> Option<ServiceTicket> {
        let today = self.clock.today();
        let updated = self.repo.update_with(id, |current| ServiceTicket {
            status,
            finished_date: (status == ServiceStatus::Resolved).then_some(today),
            ..current.clone()
        });
        if let Some(ticket) = &updated {
            tracing::info!("Atendimento {} agora está '{}'", ticket.display_id, status);
        }
        updated
    }

    pub fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        confirmed_delete(&mut self.repo, id, confirm, "atendimento")
    }

    pub fn restore(&mut self, records: Vec<ServiceTicket>) {
        self.sequence = seed_sequence(&records);
        self.repo.replace_all(records);
    }

    pub fn clear(&mut self) {
        self.sequence.reset();
        self.repo.clear();
    }
}

// "Resolvido" mantém a data informada ou usa hoje; os demais status não têm data
fn stamp_if_resolved(
    status: ServiceStatus,
    supplied: Option<NaiveDate>,
    today: NaiveDate,
) -> Option<NaiveDate> {
    match status {
        ServiceStatus::Resolved => Some(supplied.unwrap_or(today)),
        _ => None,
    }
}

fn seed_sequence(records: &[ServiceTicket]) -> DisplaySequence {
    DisplaySequence::seeded(TICKET_PREFIX, records.iter().map(|t| t.display_id.as_str()))
}
