// src/services/client_service.rs

use validator::Validate;

use crate::{
    common::{
        calc::{contractual_deadline, FIRST_DEADLINE_DAYS, SECOND_DEADLINE_DAYS},
        confirm::Confirm,
        error::AppError,
        filter::{apply, matches_search, Criteria},
    },
    db::InMemoryRepository,
    models::{
        clients::{Client, ClientFilter, ClientPatch, ContractDeadlines, InstallStatus, NewClient},
        Patch,
    },
    services::{confirmed_delete, new_record_id},
};

// Equipe atribuída quando a instalação é marcada como concluída sem equipe
pub const AUTO_ASSIGNED_TEAM: &str = "Equipe Padrão (Auto)";

impl Criteria<Client> for ClientFilter {
    fn matches(&self, client: &Client) -> bool {
        let matches_status = self.status.is_none_or(|s| s == client.install_status);
        let matches_sales = self
            .salesperson
            .as_ref()
            .is_none_or(|s| s.same_kind(&client.salesperson));

        matches_search(&self.search, &[&client.name, &client.address])
            && matches_status
            && matches_sales
            && self.contract_period.contains(client.contract_date)
    }
}

#[derive(Debug, Clone)]
pub struct ClientService {
    repo: InMemoryRepository<Client>,
}

impl ClientService {
    pub fn new(initial: Vec<Client>) -> Self {
        Self {
            repo: InMemoryRepository::new(initial),
        }
    }

    pub fn records(&self) -> &[Client] {
        self.repo.list()
    }

    pub fn find(&self, id: &str) -> Option<&Client> {
        self.repo.find(id)
    }

    pub fn list(&self, filter: &ClientFilter) -> Vec<Client> {
        apply(self.repo.list(), filter)
    }

    pub fn create(&mut self, draft: NewClient) -> Result<Client, AppError> {
        draft.validate()?;

        let client = with_auto_team(draft.into_client(new_record_id()));
        tracing::info!("Cliente '{}' cadastrado ({})", client.name, client.id);
        Ok(self.repo.insert(client))
    }

    /// Mescla o patch no cliente. `None` se o id não existir.
    /// Edição com as mesmas regras do cadastro. Id desconhecido devolve `Ok(None)`.
    pub fn update(&mut self, id: &str, patch: ClientPatch) -> Result<Option<Client>, AppError> {
        patch.validate()?;

        let updated = self
            .repo
            .update_with(id, |current| with_auto_team(patch.merge_into(current)));
        if updated.is_none() {
            tracing::debug!("Cliente '{}' não encontrado para edição", id);
        }
        Ok(updated)
    }

    pub fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        confirmed_delete(&mut self.repo, id, confirm, "cliente")
    }

    /// Prazos de 60 e 90 dias a partir do contrato ("-" sem data).
    pub fn deadlines(client: &Client) -> ContractDeadlines {
        ContractDeadlines {
            first: contractual_deadline(client.contract_date, FIRST_DEADLINE_DAYS),
            second: contractual_deadline(client.contract_date, SECOND_DEADLINE_DAYS),
        }
    }

    pub fn restore(&mut self, records: Vec<Client>) {
        self.repo.replace_all(records);
    }

    pub fn clear(&mut self) {
        self.repo.clear();
    }
}

fn with_auto_team(mut client: Client) -> Client {
    if client.install_status == InstallStatus::Completed && client.assigned_team.is_none() {
        client.assigned_team = Some(AUTO_ASSIGNED_TEAM.to_string());
    }
    client
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::confirm::Answer;
    use crate::common::filter::DateRange;
    use crate::db::seed;
    use crate::models::clients::Salesperson;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn service() -> ClientService {
        ClientService::new(seed::clients())
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn draft(name: &str) -> NewClient {
        NewClient {
            name: name.into(),
            address: "Rua Nova, 10".into(),
            phone: "(11) 90000-0000".into(),
            panel_qty: 10,
            power_kwp: Decimal::new(55, 1),
            contract_date: Some(day(2024, 2, 1)),
            ..Default::default()
        }
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let svc = service();
        let listed = svc.list(&ClientFilter::default());
        assert_eq!(listed, svc.records());
    }

    #[test]
    fn search_matches_name_or_address() {
        let svc = service();
        let by_address = svc.list(&ClientFilter { search: "PAULISTA".into(), ..Default::default() });
        assert_eq!(by_address.len(), 1);
        assert_eq!(by_address[0].name, "Ana Souza");

        let by_name = svc.list(&ClientFilter { search: "carlos".into(), ..Default::default() });
        assert_eq!(by_name[0].id, "1");
    }

    #[test]
    fn status_salesperson_and_period_combine_with_and() {
        let svc = service();
        let filter = ClientFilter {
            status: Some(InstallStatus::InProgress),
            salesperson: Some(Salesperson::Lays),
            contract_period: DateRange::new(Some(day(2023, 10, 20)), None),
            ..Default::default()
        };
        let listed = svc.list(&filter);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Roberto Justus");
    }

    #[test]
    fn other_salesperson_filter_matches_any_free_text() {
        let mut svc = service();
        let mut new = draft("Paula Lima");
        new.salesperson = Salesperson::Other("Marina".into());
        svc.create(new).unwrap();

        let filter = ClientFilter {
            salesperson: Some(Salesperson::Other(String::new())),
            ..Default::default()
        };
        let listed = svc.list(&filter);
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].name, "Paula Lima");
    }

    #[test]
    fn clients_without_contract_date_fall_out_of_a_bounded_period() {
        let mut svc = service();
        let mut new = draft("Sem Contrato");
        new.contract_date = None;
        svc.create(new).unwrap();

        let filter = ClientFilter {
            contract_period: DateRange::new(None, Some(day(2030, 1, 1))),
            ..Default::default()
        };
        assert!(svc.list(&filter).iter().all(|c| c.name != "Sem Contrato"));
        assert_eq!(svc.list(&ClientFilter::default()).len(), 4);
    }

    #[test]
    fn create_appends_with_fresh_id() {
        let mut svc = service();
        let created = svc.create(draft("Bruno Costa")).unwrap();
        assert!(!created.id.is_empty());
        assert_eq!(svc.records().last(), Some(&created));
        assert_eq!(svc.records().len(), 4);
    }

    #[test]
    fn completed_without_team_gets_the_default_team() {
        let mut svc = service();
        let mut new = draft("Bruno Costa");
        new.install_status = InstallStatus::Completed;
        let created = svc.create(new).unwrap();
        assert_eq!(created.assigned_team.as_deref(), Some(AUTO_ASSIGNED_TEAM));
    }

    #[test]
    fn required_fields_are_enforced() {
        let mut svc = service();
        let err = svc.create(NewClient::default()).unwrap_err();
        let details = err.validation_details();
        assert!(details.contains_key("name"));
        assert!(details.contains_key("address"));
        assert!(details.contains_key("phone"));
        assert_eq!(svc.records().len(), 3);
    }

    #[test]
    fn other_salesperson_requires_text() {
        let mut svc = service();
        let mut new = draft("Bruno Costa");
        new.salesperson = Salesperson::Other("  ".into());
        let err = svc.create(new).unwrap_err();
        assert!(err.validation_details().contains_key("salesperson"));
    }

    #[test]
    fn update_merges_and_keeps_position() {
        let mut svc = service();
        let patch = ClientPatch {
            phone: Some("(11) 95555-4444".into()),
            ..Default::default()
        };
        let updated = svc.update("2", patch).unwrap().unwrap();
        assert_eq!(updated.phone, "(11) 95555-4444");
        assert_eq!(updated.name, "Ana Souza");
        assert_eq!(svc.records()[1], updated);
    }

    #[test]
    fn update_can_clear_the_contract_date() {
        let mut svc = service();
        assert_eq!(svc.find("1").unwrap().contract_date, Some(day(2023, 10, 1)));

        let patch = ClientPatch { contract_date: Some(None), ..Default::default() };
        let updated = svc.update("1", patch).unwrap().unwrap();
        assert_eq!(updated.contract_date, None);
        assert_eq!(ClientService::deadlines(&updated).first, "-");

        // sem o campo, a data atual é mantida
        let patch = ClientPatch { contract_date: Some(Some(day(2024, 1, 5))), ..Default::default() };
        svc.update("1", patch).unwrap();
        let updated = svc.update("1", ClientPatch::default()).unwrap().unwrap();
        assert_eq!(updated.contract_date, Some(day(2024, 1, 5)));
    }

    #[test]
    fn update_applies_the_same_rules_as_create() {
        let mut svc = service();
        let before = svc.records().to_vec();
        let patch = ClientPatch {
            name: Some(String::new()),
            salesperson: Some(Salesperson::Other(String::new())),
            ..Default::default()
        };
        let err = svc.update("1", patch).unwrap_err();
        assert_eq!(err.validation_details().len(), 2);
        assert_eq!(svc.records(), before.as_slice());
    }

    #[test]
    fn null_in_json_clears_and_missing_keeps() {
        let patch: ClientPatch = serde_json::from_str(r#"{"contractDate": null}"#).unwrap();
        assert_eq!(patch.contract_date, Some(None));
        assert_eq!(patch.assigned_team, None);
    }

    #[test]
    fn update_of_unknown_id_changes_nothing() {
        let mut svc = service();
        let before = svc.records().to_vec();
        assert!(svc.update("nope", ClientPatch::default()).unwrap().is_none());
        assert_eq!(svc.records(), before.as_slice());
    }

    #[test]
    fn delete_needs_confirmation() {
        let mut svc = service();
        assert!(!svc.delete("2", &Answer(false)));
        assert_eq!(svc.records().len(), 3);

        assert!(svc.delete("2", &Answer(true)));
        let ids: Vec<_> = svc.records().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);

        assert!(!svc.delete("2", &Answer(true)));
        assert_eq!(svc.records().len(), 2);
    }

    #[test]
    fn deadlines_are_sixty_and_ninety_days_out() {
        let svc = service();
        let deadlines = ClientService::deadlines(svc.find("1").unwrap());
        assert_eq!(deadlines.first, "30/11/2023");
        assert_eq!(deadlines.second, "30/12/2023");
    }
}
