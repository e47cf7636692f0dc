//src/main.rs

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use solarflow::{
    common::{
        clock::SystemClock,
        format::{format_currency, format_score},
    },
    config::{AppConfig, AppState},
    models::{dashboard::DashboardFilter, finance::TeamPaymentFilter},
    services::PaymentService,
};

fn main() -> anyhow::Result<()> {
    // Inicializa o logger; RUST_LOG controla o nível (padrão: info)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .compact()
        .init();

    let config = AppConfig::from_env()?;
    let mut app_state = AppState::new(&config, Arc::new(SystemClock));

    let stats = app_state.dashboard(&DashboardFilter::default());
    tracing::info!(
        "📊 {} clientes | {} instalações concluídas | {} placas | mão de obra {}",
        stats.total_clients,
        stats.completed_installs,
        stats.total_panels,
        format_currency(stats.total_labor_cost)
    );
    if let Some(top) = &stats.top_team {
        tracing::info!("🏆 Equipe destaque: {} ({} placas)", top.name, top.panels);
    }
    tracing::info!("⭐ Satisfação média: {}", format_score(stats.satisfaction));

    let payments = app_state.payments.list(&TeamPaymentFilter::default());
    tracing::info!(
        "💵 Total a pagar às equipes: {}",
        format_currency(PaymentService::total(&payments))
    );
    println!("{}", PaymentService::export_csv(&payments));

    match &config.backup_dir {
        Some(dir) => {
            if let Some(path) = app_state.run_auto_backup(dir)? {
                tracing::info!("Backup automático concluído: {}", path.display());
            }
        }
        None => tracing::debug!("SOLARFLOW_BACKUP_DIR não definido; backup automático ignorado"),
    }

    Ok(())
}
