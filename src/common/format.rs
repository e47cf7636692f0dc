// src/common/format.rs

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

// Marcador para datas vazias ou inválidas
pub const EMPTY_PLACEHOLDER: &str = "-";

// Data no formato brasileiro: DD/MM/YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

pub fn format_optional_date(date: Option<NaiveDate>) -> String {
    date.map(format_date)
        .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
}

/// Lê uma data ISO ("YYYY-MM-DD"). Texto vazio ou inválido vira `None`.
pub fn parse_iso_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

fn two_places(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// "R$ 600.00"
pub fn format_currency(value: Decimal) -> String {
    format!("R$ {:.2}", two_places(value))
}

// "600,00" (planilhas em pt-BR)
pub fn format_decimal_comma(value: Decimal) -> String {
    format!("{:.2}", two_places(value)).replace('.', ",")
}

// "6,60 kWp"
pub fn format_kwp(value: Decimal) -> String {
    format!("{} kWp", format_decimal_comma(value))
}

// "4.0"
pub fn format_score(score: f64) -> String {
    format!("{score:.1}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_use_brazilian_order() {
        let date = NaiveDate::from_ymd_opt(2023, 11, 5).unwrap();
        assert_eq!(format_date(date), "05/11/2023");
        assert_eq!(format_optional_date(None), "-");
    }

    #[test]
    fn parse_rejects_empty_and_garbage() {
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("31/12/2023"), None);
        assert_eq!(parse_iso_date("2023-12-31"), NaiveDate::from_ymd_opt(2023, 12, 31));
    }

    #[test]
    fn money_is_rounded_only_for_display() {
        assert_eq!(format_currency(Decimal::new(600, 0)), "R$ 600.00");
        assert_eq!(format_currency(Decimal::new(45_5, 1)), "R$ 45.50");
        assert_eq!(format_currency(Decimal::new(1_005, 3)), "R$ 1.01");
        assert_eq!(format_decimal_comma(Decimal::new(4000, 0)), "4000,00");
        assert_eq!(format_kwp(Decimal::new(66, 1)), "6,60 kWp");
    }

    #[test]
    fn score_has_one_decimal() {
        assert_eq!(format_score(4.0), "4.0");
        assert_eq!(format_score(4.666), "4.7");
    }
}
