// src/common/calc.rs

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;

use crate::common::format::{format_date, parse_iso_date, EMPTY_PLACEHOLDER};
use crate::models::teams::TeamFeedback;

// Prazos contratuais contados a partir da data do contrato
pub const FIRST_DEADLINE_DAYS: u64 = 60;
pub const SECOND_DEADLINE_DAYS: u64 = 90;

/// Custo total da instalação = placas × mão de obra por placa.
/// Sem arredondamento aqui; só na exibição.
pub fn total_installation_cost(panel_qty: u32, labor_price_per_panel: Decimal) -> Decimal {
    Decimal::from(panel_qty) * labor_price_per_panel
}

/// Data do contrato + N dias corridos, já formatada (DD/MM/YYYY).
///
/// A soma é feita sobre a data de calendário, então não existe o deslocamento
/// de fuso de "meia-noite UTC" nem a correção de +1 dia que ele exigiria.
pub fn contractual_deadline(contract_date: Option<NaiveDate>, days: u64) -> String {
    contract_date
        .and_then(|date| date.checked_add_days(Days::new(days)))
        .map(format_date)
        .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
}

/// Mesma regra, partindo do texto ISO do formulário ("" ou inválido -> "-").
pub fn contractual_deadline_from_iso(contract_date: &str, days: u64) -> String {
    contractual_deadline(parse_iso_date(contract_date), days)
}

/// Média das avaliações (1 a 5) com uma casa decimal. Sem avaliações = 0.
pub fn satisfaction_score(feedbacks: &[TeamFeedback]) -> f64 {
    if feedbacks.is_empty() {
        return 0.0;
    }
    let total: u32 = feedbacks.iter().map(|f| u32::from(f.level.score())).sum();
    let mean = f64::from(total) / feedbacks.len() as f64;
    (mean * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::format::format_score;
    use crate::models::teams::SatisfactionLevel;

    fn feedback(level: SatisfactionLevel) -> TeamFeedback {
        TeamFeedback {
            id: "f".into(),
            date: NaiveDate::from_ymd_opt(2023, 10, 10).unwrap(),
            comment: "ok".into(),
            level,
        }
    }

    #[test]
    fn total_cost_is_panels_times_labor() {
        assert_eq!(total_installation_cost(12, Decimal::new(50, 0)), Decimal::new(600, 0));
        assert_eq!(total_installation_cost(0, Decimal::new(70, 0)), Decimal::ZERO);
        assert_eq!(total_installation_cost(3, Decimal::new(3333, 2)), Decimal::new(9999, 2));
    }

    #[test]
    fn total_cost_is_stable_under_recomputation() {
        let first = total_installation_cost(24, Decimal::new(605, 1));
        let second = total_installation_cost(24, Decimal::new(605, 1));
        assert_eq!(first, second);
    }

    #[test]
    fn deadlines_follow_the_contract_date() {
        assert_eq!(contractual_deadline_from_iso("2023-10-01", FIRST_DEADLINE_DAYS), "30/11/2023");
        assert_eq!(contractual_deadline_from_iso("2023-10-01", SECOND_DEADLINE_DAYS), "30/12/2023");
        assert_eq!(contractual_deadline_from_iso("2023-12-15", FIRST_DEADLINE_DAYS), "13/02/2024");
    }

    #[test]
    fn empty_or_invalid_contract_date_yields_placeholder() {
        assert_eq!(contractual_deadline_from_iso("", FIRST_DEADLINE_DAYS), "-");
        assert_eq!(contractual_deadline_from_iso("amanhã", SECOND_DEADLINE_DAYS), "-");
        assert_eq!(contractual_deadline(None, FIRST_DEADLINE_DAYS), "-");
    }

    #[test]
    fn satisfaction_is_the_mean_of_levels() {
        let feedbacks = [
            feedback(SatisfactionLevel::VerySatisfied),
            feedback(SatisfactionLevel::Neutral),
        ];
        assert_eq!(format_score(satisfaction_score(&feedbacks)), "4.0");
    }

    #[test]
    fn satisfaction_rounds_to_one_decimal() {
        let feedbacks = [
            feedback(SatisfactionLevel::VerySatisfied),
            feedback(SatisfactionLevel::VerySatisfied),
            feedback(SatisfactionLevel::Satisfied),
        ];
        assert_eq!(satisfaction_score(&feedbacks), 4.7);
    }

    #[test]
    fn no_feedback_means_zero() {
        assert_eq!(satisfaction_score(&[]), 0.0);
    }
}
