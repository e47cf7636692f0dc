//! Backup, restauração e reset do sistema

use std::fs;

use solarflow::{
    common::{
        confirm::{Answer, RESET_CONFIRMATION},
        error::AppError,
    },
    models::settings::{BackupData, BackupDocument, RESET_PHRASE},
    services::SettingsService,
};

mod common;

#[test]
fn backup_file_round_trips_into_an_empty_system() {
    let mut source = common::seeded_state();
    let dir = tempfile::tempdir().unwrap();

    let path = source.write_backup_file(dir.path()).unwrap();
    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "backup_sistema_completo_2024-03-15.json"
    );
    assert_eq!(source.settings.policy().last_backup, Some(common::at_hour(10)));

    let json = fs::read_to_string(&path).unwrap();
    let document: BackupDocument = serde_json::from_str(&json).unwrap();
    assert_eq!(document.system, "SolarFlow");
    assert_eq!(document.version, "1.0");
    assert_eq!(document.modules.len(), 8);

    let mut target = common::empty_state();
    assert!(target.clients.records().is_empty());
    assert!(target.import_backup(&json, "backup.json", &Answer(true)).unwrap());
    assert_eq!(target.snapshot(), source.snapshot());
}

#[test]
fn imported_sequences_continue_after_the_highest_id() {
    let source = common::seeded_state();
    let json = source.export_backup_json().unwrap();

    let mut target = common::empty_state();
    assert_eq!(target.installations.next_display_id(), "INST 01");
    target.import_backup(&json, "backup.json", &Answer(true)).unwrap();

    assert_eq!(target.installations.next_display_id(), "INST 02");
    assert_eq!(target.schedules.next_display_id(), "SERV 02");
    assert_eq!(target.tickets.next_display_id(), "03");
}

#[test]
fn imported_ids_at_the_top_of_the_range_keep_counting() {
    let source = common::seeded_state();
    let mut document: serde_json::Value =
        serde_json::from_str(&source.export_backup_json().unwrap()).unwrap();
    document["data"]["installations"][0]["displayId"] = "INST 4294967295".into();

    let mut target = common::empty_state();
    let json = document.to_string();
    assert!(target.import_backup(&json, "backup.json", &Answer(true)).unwrap());
    assert_eq!(target.installations.next_display_id(), "INST 4294967296");
}

#[test]
fn broken_backup_is_an_error_and_changes_nothing() {
    let mut state = common::seeded_state();
    let before = state.snapshot();

    let err = state
        .import_backup("{\"system\": \"SolarFlow\"", "quebrado.json", &Answer(true))
        .unwrap_err();
    assert!(matches!(err, AppError::BackupFormat(_)));

    let foreign = r#"{"system":"OutroSistema","version":"1.0","exportedAt":"2024-01-01T00:00:00","modules":[],"data":{}}"#;
    let err = state.import_backup(foreign, "outro.json", &Answer(true)).unwrap_err();
    assert!(matches!(err, AppError::UnsupportedBackup(_)));

    assert_eq!(state.snapshot(), before);
}

#[test]
fn declined_import_keeps_current_data() {
    let mut state = common::seeded_state();
    let empty = common::empty_state().export_backup_json().unwrap();

    let before = state.snapshot();
    assert!(!state.import_backup(&empty, "vazio.json", &Answer(false)).unwrap());
    assert_eq!(state.snapshot(), before);

    assert!(state.import_backup(&empty, "vazio.json", &Answer(true)).unwrap());
    assert!(state.teams.records().is_empty());
}

#[test]
fn reset_needs_confirmation_and_the_exact_phrase() {
    let mut state = common::seeded_state();
    let before = state.snapshot();

    assert!(!state.reset(&Answer(false), RESET_PHRASE).unwrap());
    assert_eq!(state.snapshot(), before);

    let err = state.reset(&Answer(true), "zerar").unwrap_err();
    assert!(matches!(err, AppError::ResetPhraseMismatch));
    assert_eq!(state.snapshot(), before);

    let prompt = |message: &str| message == RESET_CONFIRMATION;
    assert!(state.reset(&prompt, "ZERAR SISTEMA").unwrap());
    assert_eq!(state.snapshot(), BackupData::default());
    assert_eq!(state.installations.next_display_id(), "INST 01");
}

#[test]
fn auto_backup_waits_for_the_configured_hour() {
    let dir = tempfile::tempdir().unwrap();

    let mut early = common::seeded_state_at(8);
    assert_eq!(early.run_auto_backup(dir.path()).unwrap(), None);

    let mut on_time = common::seeded_state_at(9);
    let written = on_time.run_auto_backup(dir.path()).unwrap();
    assert!(written.is_some_and(|p| p.exists()));
    // Já feito hoje
    assert_eq!(on_time.run_auto_backup(dir.path()).unwrap(), None);
}

#[test]
fn summary_csv_covers_every_module() {
    let state = common::seeded_state();
    let csv = state.export_csv();
    for kind in [
        "Cliente;",
        "Equipe;",
        "Atendimento;",
        "Agendamento;",
        "Instalação;",
        "Homologação;",
        "Financeiro;",
        "Pagamento Equipe;",
    ] {
        assert!(csv.lines().any(|l| l.starts_with(kind)), "faltou {kind}");
    }
    assert!(csv.starts_with(solarflow::services::settings_service::SUMMARY_CSV_HEADER));
    assert_eq!(
        SettingsService::backup_file_name(common::today()),
        "backup_sistema_completo_2024-03-15.json"
    );
}
