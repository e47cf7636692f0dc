//! Estado de teste com relógio parado e dados de demonstração
#![allow(dead_code)]

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use solarflow::common::clock::FixedClock;
use solarflow::config::{AppConfig, AppState};

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

pub fn at_hour(hour: u32) -> NaiveDateTime {
    today().and_time(NaiveTime::from_hms_opt(hour, 30, 0).unwrap())
}

/// Estado semeado, com o relógio parado em `today()` às `hour`:30.
pub fn seeded_state_at(hour: u32) -> AppState {
    AppState::new(&AppConfig::default(), Arc::new(FixedClock(at_hour(hour))))
}

pub fn seeded_state() -> AppState {
    seeded_state_at(10)
}

pub fn empty_state() -> AppState {
    let config = AppConfig {
        seed_demo_data: false,
        ..AppConfig::default()
    };
    AppState::new(&config, Arc::new(FixedClock(at_hour(10))))
}
