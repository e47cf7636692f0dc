// src/config.rs

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{
    common::{
        clock::SharedClock,
        confirm::{import_confirmation, Confirm, RESET_CONFIRMATION},
        error::AppError,
    },
    db::seed,
    models::{
        dashboard::{DashboardFilter, DashboardStats},
        settings::{BackupData, BackupPolicy},
    },
    services::{
        dashboard_service::DashboardSources, ClientService, DashboardService, FinanceService,
        HomologationService, InstallationService, PaymentService, ScheduleService,
        SettingsService, TeamService, TicketService,
    },
};

/// Configuração lida do ambiente (`.env` incluído).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    // Carrega os dados de demonstração na inicialização
    pub seed_demo_data: bool,
    pub auto_backup: bool,
    pub backup_hour: u32,
    pub backup_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let policy = BackupPolicy::default();
        Self {
            seed_demo_data: true,
            auto_backup: policy.auto_backup,
            backup_hour: policy.backup_hour,
            backup_dir: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Monta a configuração a partir de qualquer fonte de variáveis.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let seed_demo_data = match lookup("SOLARFLOW_SEED") {
            Some(raw) => parse_flag("SOLARFLOW_SEED", &raw)?,
            None => defaults.seed_demo_data,
        };
        let auto_backup = match lookup("SOLARFLOW_AUTO_BACKUP") {
            Some(raw) => parse_flag("SOLARFLOW_AUTO_BACKUP", &raw)?,
            None => defaults.auto_backup,
        };
        let backup_hour = match lookup("SOLARFLOW_BACKUP_HOUR") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|hour| *hour < 24)
                .ok_or_else(|| {
                    AppError::InvalidConfig(format!("SOLARFLOW_BACKUP_HOUR inválida: '{raw}'"))
                })?,
            None => defaults.backup_hour,
        };
        let backup_dir = lookup("SOLARFLOW_BACKUP_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            seed_demo_data,
            auto_backup,
            backup_hour,
            backup_dir,
        })
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool, AppError> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "sim" | "yes" => Ok(true),
        "0" | "false" | "nao" | "não" | "no" => Ok(false),
        _ => Err(AppError::InvalidConfig(format!("{key} inválida: '{raw}'"))),
    }
}

/// Todos os módulos do console, cada um dono da sua coleção.
#[derive(Clone)]
pub struct AppState {
    pub clock: SharedClock,
    pub clients: ClientService,
    pub teams: TeamService,
    pub tickets: TicketService,
    pub schedules: ScheduleService,
    pub installations: InstallationService,
    pub homologations: HomologationService,
    pub finance: FinanceService,
    pub payments: PaymentService,
    pub settings: SettingsService,
}

impl AppState {
    pub fn new(config: &AppConfig, clock: SharedClock) -> Self {
        let data = if config.seed_demo_data {
            seed::demo_data()
        } else {
            BackupData::default()
        };
        let policy = BackupPolicy {
            auto_backup: config.auto_backup,
            backup_hour: config.backup_hour,
            last_backup: None,
        };

        let state = Self::from_data(data, policy, clock);
        tracing::info!(
            "✅ Estado carregado: {} clientes, {} equipes, {} instalações",
            state.clients.records().len(),
            state.teams.records().len(),
            state.installations.records().len()
        );
        state
    }

    pub fn from_data(data: BackupData, policy: BackupPolicy, clock: SharedClock) -> Self {
        Self {
            clients: ClientService::new(data.clients),
            teams: TeamService::new(data.teams, clock.clone()),
            tickets: TicketService::new(data.tickets, clock.clone()),
            schedules: ScheduleService::new(data.schedules, clock.clone()),
            installations: InstallationService::new(data.installations, clock.clone()),
            homologations: HomologationService::new(data.homologations, clock.clone()),
            finance: FinanceService::new(data.financial_records, clock.clone()),
            payments: PaymentService::new(data.team_payments),
            settings: SettingsService::new(policy, clock.clone()),
            clock,
        }
    }

    /// Cópia de todas as coleções atuais.
    pub fn snapshot(&self) -> BackupData {
        BackupData {
            clients: self.clients.records().to_vec(),
            teams: self.teams.records().to_vec(),
            tickets: self.tickets.records().to_vec(),
            schedules: self.schedules.records().to_vec(),
            installations: self.installations.records().to_vec(),
            homologations: self.homologations.records().to_vec(),
            financial_records: self.finance.records().to_vec(),
            team_payments: self.payments.records().to_vec(),
        }
    }

    pub fn dashboard(&self, filter: &DashboardFilter) -> DashboardStats {
        let sources = DashboardSources {
            clients: self.clients.records(),
            teams: self.teams.records(),
            installations: self.installations.records(),
            tickets: self.tickets.records(),
            homologations: self.homologations.records(),
        };
        DashboardService::summary(sources, filter)
    }

    pub fn export_backup_json(&self) -> Result<String, AppError> {
        let document = self.settings.build_backup(self.snapshot());
        SettingsService::to_json(&document)
    }

    /// Grava o backup em `dir` e registra o horário do último backup.
    pub fn write_backup_file(&mut self, dir: &Path) -> Result<PathBuf, AppError> {
        let json = self.export_backup_json()?;
        fs::create_dir_all(dir)?;

        let path = dir.join(SettingsService::backup_file_name(self.clock.today()));
        fs::write(&path, json)?;
        self.settings.mark_backup(self.clock.now());

        tracing::info!("💾 Backup salvo em {}", path.display());
        Ok(path)
    }

    /// Executa o backup automático se estiver no horário. `None` = nada a fazer.
    pub fn run_auto_backup(&mut self, dir: &Path) -> Result<Option<PathBuf>, AppError> {
        if !self.settings.is_backup_due(self.clock.now()) {
            return Ok(None);
        }
        tracing::info!("Iniciando backup automático...");
        self.write_backup_file(dir).map(Some)
    }

    /// Restaura um backup. O arquivo é validado antes da confirmação; erro ou
    /// recusa deixam o sistema intacto. `Ok(true)` quando os dados foram trocados.
    pub fn import_backup(&mut self, json: &str, source: &str, confirm: &dyn Confirm) -> Result<bool, AppError> {
        let document = SettingsService::parse_backup(json)?;

        if !confirm.confirm(&import_confirmation(source)) {
            tracing::debug!("Importação de '{}' cancelada", source);
            return Ok(false);
        }

        let data = document.data;
        self.clients.restore(data.clients);
        self.teams.restore(data.teams);
        self.tickets.restore(data.tickets);
        self.schedules.restore(data.schedules);
        self.installations.restore(data.installations);
        self.homologations.restore(data.homologations);
        self.finance.restore(data.financial_records);
        self.payments.restore(data.team_payments);

        tracing::info!(
            "Backup '{}' restaurado (exportado em {})",
            source,
            document.exported_at
        );
        Ok(true)
    }

    /// Apaga todos os dados. Exige a confirmação e a frase digitada.
    pub fn reset(&mut self, confirm: &dyn Confirm, typed_phrase: &str) -> Result<bool, AppError> {
        if !confirm.confirm(RESET_CONFIRMATION) {
            return Ok(false);
        }
        SettingsService::check_reset_phrase(typed_phrase)?;

        self.clients.clear();
        self.teams.clear();
        self.tickets.clear();
        self.schedules.clear();
        self.installations.clear();
        self.homologations.clear();
        self.finance.clear();
        self.payments.clear();

        tracing::info!("Sistema zerado");
        Ok(true)
    }

    pub fn export_csv(&self) -> String {
        SettingsService::export_csv(&self.snapshot())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.seed_demo_data);
        assert_eq!(config.backup_hour, 9);
    }

    #[test]
    fn reads_every_variable() {
        let config = AppConfig::from_lookup(lookup(&[
            ("SOLARFLOW_SEED", "false"),
            ("SOLARFLOW_AUTO_BACKUP", "0"),
            ("SOLARFLOW_BACKUP_HOUR", "21"),
            ("SOLARFLOW_BACKUP_DIR", "/tmp/solar"),
        ]))
        .unwrap();
        assert!(!config.seed_demo_data);
        assert!(!config.auto_backup);
        assert_eq!(config.backup_hour, 21);
        assert_eq!(config.backup_dir, Some(PathBuf::from("/tmp/solar")));
    }

    #[test]
    fn invalid_values_are_errors() {
        let err = AppConfig::from_lookup(lookup(&[("SOLARFLOW_BACKUP_HOUR", "25")])).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));

        let err = AppConfig::from_lookup(lookup(&[("SOLARFLOW_SEED", "talvez")])).unwrap_err();
        assert!(matches!(err, AppError::InvalidConfig(_)));
    }
}
