// src/services/homologation_service.rs

use validator::Validate;

use crate::{
    common::{
        clock::SharedClock,
        confirm::Confirm,
        error::AppError,
        filter::{apply, matches_exact, matches_search, Criteria},
    },
    db::InMemoryRepository,
    models::{
        clients::Client,
        homologations::{
            Homologation, HomologationFilter, HomologationPatch, HomologationStatus,
            NewHomologation,
        },
        Patch,
    },
    services::{autofill::resolve_client, confirmed_delete, new_record_id},
};

impl Criteria<Homologation> for HomologationFilter {
    fn matches(&self, homologation: &Homologation) -> bool {
        matches_search(&self.search, &[&homologation.client_name])
            && matches_exact(self.status.as_ref(), &homologation.status)
            && matches_exact(self.entered_contract.as_ref(), &homologation.entered_contract)
    }
}

#[derive(Clone)]
pub struct HomologationService {
    repo: InMemoryRepository<Homologation>,
    clock: SharedClock,
}

impl HomologationService {
    pub fn new(initial: Vec<Homologation>, clock: SharedClock) -> Self {
        Self {
            repo: InMemoryRepository::new(initial),
            clock,
        }
    }

    pub fn records(&self) -> &[Homologation] {
        self.repo.list()
    }

    pub fn find(&self, id: &str) -> Option<&Homologation> {
        self.repo.find(id)
    }

    pub fn list(&self, filter: &HomologationFilter) -> Vec<Homologation> {
        apply(self.repo.list(), filter)
    }

    pub fn select_client(&self, draft: NewHomologation, client_id: &str, clients: &[Client]) -> NewHomologation {
        resolve_client(draft, client_id, clients)
    }

    /// Sem data de conclusão informada (cliente sem instalação concluída),
    /// o registro é criado com a data de hoje.
    pub fn create(&mut self, draft: NewHomologation) -> Result<Homologation, AppError> {
        draft.validate()?;

        let homologation = Homologation {
            id: new_record_id(),
            client_id: draft.client_id,
            client_name: draft.client_name,
            installation_completion_date: draft
                .installation_completion_date
                .unwrap_or_else(|| self.clock.today()),
            entered_contract: draft.entered_contract,
            status: draft.status,
        };
        tracing::info!("Homologação aberta para '{}'", homologation.client_name);
        Ok(self.repo.insert(homologation))
    }

    pub fn update(&mut self, id: &str, patch: HomologationPatch) -> Result<Option<Homologation>, AppError> {
        patch.validate()?;
        Ok(self.repo.update_with(id, |current| patch.merge_into(current)))
    }

    pub fn change_status(&mut self, id: &str, status: HomologationStatus) -> Option<Homologation> {
        self.repo.update_with(id, |current| Homologation {
            status,
            ..current.clone()
        })
    }

    // Alterna "Entrada no contrato" entre Sim e Não
    pub fn toggle_contract_entry(&mut self, id: &str) -> Option<Homologation> {
        self.repo.update_with(id, |current| Homologation {
            entered_contract: !current.entered_contract,
            ..current.clone()
        })
    }

    pub fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        confirmed_delete(&mut self.repo, id, confirm, "homologação")
    }

    pub fn restore(&mut self, records: Vec<Homologation>) {
        self.repo.replace_all(records);
    }

    pub fn clear(&mut self) {
        self.repo.clear();
    }
}
