// src/services/finance_service.rs

use rust_decimal::Decimal;
use validator::Validate;

use crate::{
    common::{
        clock::SharedClock,
        confirm::Confirm,
        error::AppError,
        filter::{apply, matches_exact, Criteria},
        format::format_currency,
    },
    db::InMemoryRepository,
    models::{
        finance::{FinancialFilter, FinancialRecord, FinancialRecordPatch, NewFinancialRecord},
        teams::Team,
        Patch,
    },
    services::{autofill::resolve_team, confirmed_delete, new_record_id},
};

impl Criteria<FinancialRecord> for FinancialFilter {
    fn matches(&self, record: &FinancialRecord) -> bool {
        matches_exact(self.team_id.as_deref(), record.team_id.as_str())
            && self.period.contains(Some(record.date))
    }
}

/// Despesas e reembolsos lançados para as equipes.
#[derive(Clone)]
pub struct FinanceService {
    repo: InMemoryRepository<FinancialRecord>,
    clock: SharedClock,
}

impl FinanceService {
    pub fn new(initial: Vec<FinancialRecord>, clock: SharedClock) -> Self {
        Self {
            repo: InMemoryRepository::new(initial),
            clock,
        }
    }

    pub fn records(&self) -> &[FinancialRecord] {
        self.repo.list()
    }

    pub fn find(&self, id: &str) -> Option<&FinancialRecord> {
        self.repo.find(id)
    }

    pub fn list(&self, filter: &FinancialFilter) -> Vec<FinancialRecord> {
        apply(self.repo.list(), filter)
    }

    pub fn total(records: &[FinancialRecord]) -> Decimal {
        records.iter().map(|r| r.value).sum()
    }

    pub fn new_draft(&self) -> NewFinancialRecord {
        NewFinancialRecord::blank(self.clock.today())
    }

    pub fn select_team(&self, draft: NewFinancialRecord, team_id: &str, teams: &[Team]) -> NewFinancialRecord {
        resolve_team(draft, team_id, teams)
    }

    pub fn create(&mut self, draft: NewFinancialRecord) -> Result<FinancialRecord, AppError> {
        draft.validate()?;

        let record = draft.into_record(new_record_id());
        tracing::info!(
            "Lançamento de {} para '{}': {}",
            format_currency(record.value),
            record.team_name,
            record.description
        );
        Ok(self.repo.insert(record))
    }

    pub fn update(&mut self, id: &str, patch: FinancialRecordPatch) -> Result<Option<FinancialRecord>, AppError> {
        patch.validate()?;
        Ok(self.repo.update_with(id, |current| patch.merge_into(current)))
    }

    pub fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        confirmed_delete(&mut self.repo, id, confirm, "lançamento financeiro")
    }

    pub fn restore(&mut self, records: Vec<FinancialRecord>) {
        self.repo.replace_all(records);
    }

    pub fn clear(&mut self) {
        self.repo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::common::clock::FixedClock;
    use crate::common::filter::DateRange;
    use crate::db::seed;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn service() -> FinanceService {
        FinanceService::new(seed::financial_records(), Arc::new(FixedClock::at_date(day(2023, 10, 30))))
    }

    #[test]
    fn total_of_everything() {
        let svc = service();
        let all = svc.list(&FinancialFilter::default());
        assert_eq!(FinanceService::total(&all), Decimal::new(19550, 2));
        assert_eq!(format_currency(FinanceService::total(&all)), "R$ 195.50");
    }

    #[test]
    fn filter_by_team_and_period() {
        let svc = service();
        let alpha = svc.list(&FinancialFilter {
            team_id: Some("t1".into()),
            ..Default::default()
        });
        assert_eq!(FinanceService::total(&alpha), Decimal::new(150, 0));

        let late = svc.list(&FinancialFilter {
            period: DateRange::new(Some(day(2023, 10, 21)), Some(day(2023, 10, 21))),
            ..Default::default()
        });
        assert_eq!(late.len(), 1);
        assert_eq!(late[0].team_name, "Marcos Santos (Beta)");
    }

    #[test]
    fn empty_selection_totals_zero() {
        assert_eq!(FinanceService::total(&[]), Decimal::ZERO);
    }

    #[test]
    fn team_selection_and_create() {
        let mut svc = service();
        let mut draft = svc.select_team(svc.new_draft(), "t3", &seed::teams());
        draft.description = "Almoço da equipe".into();
        draft.value = Decimal::new(8990, 2);

        let created = svc.create(draft).unwrap();
        assert_eq!(created.team_name, "Júlio Cesar (Gamma)");
        assert_eq!(created.date, day(2023, 10, 30));
        assert_eq!(svc.records().len(), 3);
    }

    #[test]
    fn description_and_team_are_required() {
        let mut svc = service();
        let draft = svc.new_draft();
        assert_eq!(svc.create(draft).unwrap_err().validation_details().len(), 2);
    }

    #[test]
    fn update_changes_only_the_value() {
        let mut svc = service();
        let patch = FinancialRecordPatch {
            value: Some(Decimal::new(175, 0)),
            ..Default::default()
        };
        let updated = svc.update("1", patch).unwrap().unwrap();
        assert_eq!(updated.value, Decimal::new(175, 0));
        assert_eq!(updated.description, "Reembolso Combustível - Obra Rua Flores");
    }
}
