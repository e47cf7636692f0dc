pub mod autofill;
pub mod client_service;
pub use client_service::ClientService;
pub mod team_service;
pub use team_service::TeamService;
pub mod ticket_service;
pub use ticket_service::TicketService;
pub mod schedule_service;
pub use schedule_service::ScheduleService;
pub mod installation_service;
pub use installation_service::InstallationService;
pub mod homologation_service;
pub use homologation_service::HomologationService;
pub mod finance_service;
pub use finance_service::FinanceService;
pub mod payment_service;
pub use payment_service::PaymentService;
pub mod dashboard_service;
pub use dashboard_service::DashboardService;
pub mod settings_service;
pub use settings_service::SettingsService;

use uuid::Uuid;

use crate::common::confirm::{Confirm, DELETE_CONFIRMATION};
use crate::db::{InMemoryRepository, Record};

// Id interno de um registro novo
pub(crate) fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Exclusão com a pergunta padrão. Recusa ou id inexistente devolvem `false`
/// e deixam a coleção como estava.
pub(crate) fn confirmed_delete<T: Record + Clone>(
    repo: &mut InMemoryRepository<T>,
    id: &str,
    confirm: &dyn Confirm,
    kind: &str,
) -> bool {
    if !confirm.confirm(DELETE_CONFIRMATION) {
        tracing::debug!("Exclusão de {} '{}' cancelada pelo usuário", kind, id);
        return false;
    }

    let removed = repo.remove(id);
    if removed {
        tracing::info!("Registro de {} '{}' excluído", kind, id);
    } else {
        tracing::debug!("Nenhum {} com id '{}' para excluir", kind, id);
    }
    removed
}
