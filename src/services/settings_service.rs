// src/services/settings_service.rs

use chrono::{NaiveDate, NaiveDateTime, Timelike};
use rust_decimal::Decimal;

use crate::{
    common::{clock::SharedClock, error::AppError, format::EMPTY_PLACEHOLDER},
    models::settings::{
        BackupData, BackupDocument, BackupPolicy, BACKUP_SYSTEM, BACKUP_VERSION, RESET_PHRASE,
    },
};

pub const SUMMARY_CSV_HEADER: &str = "Tipo;ID;Nome;Data;Status;Valor";

// Nomes das coleções gravadas no backup, na ordem do documento
pub const BACKUP_MODULES: [&str; 8] = [
    "clients",
    "teams",
    "tickets",
    "schedules",
    "installations",
    "homologations",
    "financialRecords",
    "teamPayments",
];

#[derive(Clone)]
pub struct SettingsService {
    policy: BackupPolicy,
    clock: SharedClock,
}

impl SettingsService {
    pub fn new(policy: BackupPolicy, clock: SharedClock) -> Self {
        Self { policy, clock }
    }

    pub fn policy(&self) -> &BackupPolicy {
        &self.policy
    }

    pub fn set_auto_backup(&mut self, enabled: bool) {
        tracing::info!(
            "Backup automático {}",
            if enabled { "ativado" } else { "desativado" }
        );
        self.policy.auto_backup = enabled;
    }

    pub fn set_backup_hour(&mut self, hour: u32) -> Result<(), AppError> {
        if hour > 23 {
            return Err(AppError::InvalidConfig(format!(
                "hora do backup deve estar entre 0 e 23, recebido {hour}"
            )));
        }
        self.policy.backup_hour = hour;
        Ok(())
    }

    /// O backup automático roda uma vez por dia, a partir da hora configurada.
    pub fn is_backup_due(&self, now: NaiveDateTime) -> bool {
        if !self.policy.auto_backup || now.hour() < self.policy.backup_hour {
            return false;
        }
        self.policy
            .last_backup
            .is_none_or(|last| last.date() < now.date())
    }

    pub fn mark_backup(&mut self, at: NaiveDateTime) {
        self.policy.last_backup = Some(at);
    }

    /// Documento de backup com todas as coleções, carimbado com "agora".
    pub fn build_backup(&self, data: BackupData) -> BackupDocument {
        BackupDocument {
            system: BACKUP_SYSTEM.to_string(),
            version: BACKUP_VERSION.to_string(),
            exported_at: self.clock.now(),
            modules: BACKUP_MODULES.iter().map(|m| m.to_string()).collect(),
            data,
        }
    }

    pub fn to_json(document: &BackupDocument) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(document)?)
    }

    /// Lê e confere um backup. Nada é aplicado aqui.
    pub fn parse_backup(json: &str) -> Result<BackupDocument, AppError> {
        let document: BackupDocument = serde_json::from_str(json)?;
        if document.system != BACKUP_SYSTEM || document.version != BACKUP_VERSION {
            return Err(AppError::UnsupportedBackup(format!(
                "{} {}",
                document.system, document.version
            )));
        }
        Ok(document)
    }

    pub fn backup_file_name(date: NaiveDate) -> String {
        format!("backup_sistema_completo_{}.json", date.format("%Y-%m-%d"))
    }

    pub fn check_reset_phrase(typed: &str) -> Result<(), AppError> {
        if typed != RESET_PHRASE {
            tracing::warn!("Reset recusado: frase de confirmação incorreta");
            return Err(AppError::ResetPhraseMismatch);
        }
        Ok(())
    }

    /// Resumo de todos os módulos em uma planilha (uma linha por registro).
    pub fn export_csv(data: &BackupData) -> String {
        let mut rows: Vec<[String; 6]> = Vec::new();

        rows.extend(data.clients.iter().map(|c| {
            row(
                "Cliente",
                &c.id,
                &c.name,
                iso(c.contract_date),
                c.install_status.label(),
                None,
            )
        }));
        rows.extend(data.teams.iter().map(|t| {
            row("Equipe", &t.id, &t.leader_name, iso(None), "Ativo", None)
        }));
        rows.extend(data.tickets.iter().map(|t| {
            row(
                "Atendimento",
                &t.display_id,
                &t.client_name,
                iso(Some(t.date)),
                t.status.label(),
                None,
            )
        }));
        rows.extend(data.schedules.iter().map(|s| {
            row(
                "Agendamento",
                &s.display_id,
                &s.client_name,
                iso(Some(s.scheduled_date)),
                s.status.label(),
                Some(s.cost),
            )
        }));
        rows.extend(data.installations.iter().map(|i| {
            row(
                "Instalação",
                &i.display_id,
                &i.client_name,
                iso(Some(i.scheduled_date)),
                i.status.label(),
                Some(i.total_cost),
            )
        }));
        rows.extend(data.homologations.iter().map(|h| {
            row(
                "Homologação",
                &h.id,
                &h.client_name,
                iso(Some(h.installation_completion_date)),
                h.status.label(),
                None,
            )
        }));
        rows.extend(data.financial_records.iter().map(|f| {
            row(
                "Financeiro",
                &f.id,
                &f.description,
                iso(Some(f.date)),
                "Pago",
                Some(f.value),
            )
        }));
        rows.extend(data.team_payments.iter().map(|p| {
            row(
                "Pagamento Equipe",
                &p.display_id,
                &p.team_name,
                iso(p.completion_date),
                p.status.label(),
                Some(p.total_cost),
            )
        }));

        std::iter::once(SUMMARY_CSV_HEADER.to_string())
            .chain(rows.iter().map(|r| r.join(";")))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn iso(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
}

fn row(kind: &str, id: &str, name: &str, date: String, status: &str, value: Option<Decimal>) -> [String; 6] {
    [
        kind.to_string(),
        id.to_string(),
        name.to_string(),
        date,
        status.to_string(),
        value
            .map(|v| format!("{:.2}", v.round_dp(2)))
            .unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveTime;
    use rust_decimal::Decimal;

    use crate::common::clock::FixedClock;
    use crate::db::seed;

    fn at(date: (i32, u32, u32), hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .unwrap()
            .and_time(NaiveTime::from_hms_opt(hour, 0, 0).unwrap())
    }

    fn service() -> SettingsService {
        SettingsService::new(
            BackupPolicy::default(),
            Arc::new(FixedClock(at((2024, 6, 1), 10))),
        )
    }

    #[test]
    fn backup_is_due_once_a_day_after_the_hour() {
        let mut svc = service();
        assert!(!svc.is_backup_due(at((2024, 6, 1), 8)));
        assert!(svc.is_backup_due(at((2024, 6, 1), 9)));

        svc.mark_backup(at((2024, 6, 1), 9));
        assert!(!svc.is_backup_due(at((2024, 6, 1), 18)));
        assert!(svc.is_backup_due(at((2024, 6, 2), 9)));
    }

    #[test]
    fn disabled_auto_backup_is_never_due() {
        let mut svc = service();
        svc.set_auto_backup(false);
        assert!(!svc.is_backup_due(at((2024, 6, 1), 23)));
    }

    #[test]
    fn backup_hour_is_bounded() {
        let mut svc = service();
        assert!(matches!(svc.set_backup_hour(24), Err(AppError::InvalidConfig(_))));
        svc.set_backup_hour(20).unwrap();
        assert_eq!(svc.policy().backup_hour, 20);
    }

    #[test]
    fn backup_document_survives_json() {
        let svc = service();
        let document = svc.build_backup(seed::demo_data());
        assert_eq!(document.exported_at, at((2024, 6, 1), 10));

        let json = SettingsService::to_json(&document).unwrap();
        assert!(json.contains("\"system\": \"SolarFlow\""));
        assert!(json.contains("\"exportedAt\""));
        assert_eq!(SettingsService::parse_backup(&json).unwrap(), document);
    }

    #[test]
    fn foreign_or_broken_backups_are_rejected() {
        assert!(matches!(
            SettingsService::parse_backup("{ not json"),
            Err(AppError::BackupFormat(_))
        ));

        let svc = service();
        let mut document = svc.build_backup(BackupData::default());
        document.version = "2.0".into();
        let json = SettingsService::to_json(&document).unwrap();
        assert!(matches!(
            SettingsService::parse_backup(&json),
            Err(AppError::UnsupportedBackup(_))
        ));
    }

    #[test]
    fn file_name_carries_the_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            SettingsService::backup_file_name(date),
            "backup_sistema_completo_2024-06-01.json"
        );
    }

    #[test]
    fn reset_phrase_must_match() {
        assert!(SettingsService::check_reset_phrase("ZERAR SISTEMA").is_ok());
        assert!(matches!(
            SettingsService::check_reset_phrase("zerar sistema"),
            Err(AppError::ResetPhraseMismatch)
        ));
        // comparação exata, sem aparar espaços
        assert!(matches!(
            SettingsService::check_reset_phrase(" ZERAR SISTEMA "),
            Err(AppError::ResetPhraseMismatch)
        ));
    }

    #[test]
    fn money_is_written_as_a_plain_json_number() {
        let svc = service();
        let mut data = seed::demo_data();
        data.financial_records[0].value = Decimal::new(123456, 2);

        let json = SettingsService::to_json(&svc.build_backup(data)).unwrap();
        assert!(json.contains("\"value\": 1234.56"));

        let parsed = SettingsService::parse_backup(&json).unwrap();
        assert_eq!(parsed.data.financial_records[0].value, Decimal::new(123456, 2));
    }

    #[test]
    fn summary_csv_has_one_line_per_record() {
        let data = seed::demo_data();
        let csv = SettingsService::export_csv(&data);
        let lines: Vec<_> = csv.lines().collect();

        assert_eq!(lines[0], SUMMARY_CSV_HEADER);
        assert_eq!(lines[1], "Cliente;1;Carlos Oliveira;2023-10-01;Concluída;-");
        assert!(lines.contains(&"Instalação;INST 01;Carlos Oliveira;2023-10-10;Resolvido;600.00"));
        assert!(lines.contains(&"Equipe;t1;Roberto Silva (Alpha);-;Ativo;-"));
        // 3 clientes, 3 equipes, 2 atendimentos, 1 agendamento, 1 instalação,
        // 1 homologação, 2 lançamentos e 3 pagamentos
        assert_eq!(lines.len(), 1 + 16);
    }
}
