// src/services/payment_service.rs

// Relatório de pagamento das equipes: cada instalação concluída é uma linha
// a pagar (placas × mão de obra).

use rust_decimal::Decimal;

use crate::{
    common::{
        confirm::Confirm,
        filter::{apply, Criteria},
        format::{format_decimal_comma, format_optional_date},
    },
    db::InMemoryRepository,
    models::{finance::TeamPaymentFilter, installations::Installation},
    services::confirmed_delete,
};

pub const PAYMENT_CSV_HEADER: &str =
    "Data Conclusao;Equipe;Cliente;Endereco;Qtd Placas;Potencia kWp;Valor Total";

impl Criteria<Installation> for TeamPaymentFilter {
    // Trecho do nome da equipe, sensível a maiúsculas como na tela original
    fn matches(&self, payment: &Installation) -> bool {
        (self.team.is_empty() || payment.team_name.contains(&self.team))
            && self.period.contains(payment.completion_date)
    }
}

#[derive(Debug, Clone)]
pub struct PaymentService {
    repo: InMemoryRepository<Installation>,
}

impl PaymentService {
    pub fn new(initial: Vec<Installation>) -> Self {
        Self {
            repo: InMemoryRepository::new(initial),
        }
    }

    pub fn records(&self) -> &[Installation] {
        self.repo.list()
    }

    pub fn list(&self, filter: &TeamPaymentFilter) -> Vec<Installation> {
        apply(self.repo.list(), filter)
    }

    pub fn total(payments: &[Installation]) -> Decimal {
        payments.iter().map(|p| p.total_cost).sum()
    }

    pub fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        confirmed_delete(&mut self.repo, id, confirm, "pagamento")
    }

    /// Planilha separada por ";" com o endereço entre aspas e valores com vírgula.
    pub fn export_csv(payments: &[Installation]) -> String {
        let mut lines = Vec::with_capacity(payments.len() + 1);
        lines.push(PAYMENT_CSV_HEADER.to_string());
        lines.extend(payments.iter().map(|p| {
            [
                format_optional_date(p.completion_date),
                p.team_name.clone(),
                p.client_name.clone(),
                format!("\"{}\"", p.client_address),
                p.panel_qty.to_string(),
                p.power_kwp.normalize().to_string(),
                format_decimal_comma(p.total_cost),
            ]
            .join(";")
        }));
        lines.join("\n")
    }

    pub fn restore(&mut self, records: Vec<Installation>) {
        self.repo.replace_all(records);
    }

    pub fn clear(&mut self) {
        self.repo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::common::confirm::Answer;
    use crate::common::filter::DateRange;
    use crate::db::seed;

    fn service() -> PaymentService {
        PaymentService::new(seed::team_payments())
    }

    #[test]
    fn total_covers_every_payment() {
        let svc = service();
        let all = svc.list(&TeamPaymentFilter::default());
        assert_eq!(all.len(), 3);
        assert_eq!(PaymentService::total(&all), Decimal::new(5600, 0));
    }

    #[test]
    fn team_substring_and_period() {
        let svc = service();
        let alpha = svc.list(&TeamPaymentFilter { team: "Alpha".into(), ..Default::default() });
        assert_eq!(PaymentService::total(&alpha), Decimal::new(1600, 0));

        let mid_october = svc.list(&TeamPaymentFilter {
            period: DateRange::new(NaiveDate::from_ymd_opt(2023, 10, 12), NaiveDate::from_ymd_opt(2023, 10, 20)),
            ..Default::default()
        });
        assert_eq!(mid_october.len(), 1);
        assert_eq!(mid_october[0].display_id, "INST 08");
    }

    #[test]
    fn csv_quotes_address_and_uses_comma_decimals() {
        let svc = service();
        let beta = svc.list(&TeamPaymentFilter { team: "Beta".into(), ..Default::default() });
        let csv = PaymentService::export_csv(&beta);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], PAYMENT_CSV_HEADER);
        assert_eq!(
            lines[1],
            "18/10/2023;Marcos Santos (Beta);Empresa XYZ;\"Av. Industrial, 500\";100;55;4000,00"
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn empty_report_is_just_the_header() {
        assert_eq!(PaymentService::export_csv(&[]), PAYMENT_CSV_HEADER);
    }

    #[test]
    fn confirmed_delete_drops_the_line() {
        let mut svc = service();
        assert!(!svc.delete("102", &Answer(false)));
        assert!(svc.delete("102", &Answer(true)));
        let all = svc.list(&TeamPaymentFilter::default());
        assert_eq!(PaymentService::total(&all), Decimal::new(1600, 0));
    }
}
