// src/services/dashboard_service.rs

use rust_decimal::Decimal;

use crate::{
    common::calc::satisfaction_score,
    models::{
        clients::Client,
        dashboard::{DashboardFilter, DashboardStats, StatusCount, TeamPerformance, TopTeam},
        homologations::{Homologation, HomologationStatus},
        installations::Installation,
        schedules::ScheduleStatus,
        teams::Team,
        tickets::{ServiceStatus, ServiceTicket},
    },
};

/// As coleções lidas pelo dashboard, emprestadas dos serviços.
#[derive(Debug, Clone, Copy)]
pub struct DashboardSources<'a> {
    pub clients: &'a [Client],
    pub teams: &'a [Team],
    pub installations: &'a [Installation],
    pub tickets: &'a [ServiceTicket],
    pub homologations: &'a [Homologation],
}

pub struct DashboardService;

impl DashboardService {
    pub fn summary(sources: DashboardSources<'_>, filter: &DashboardFilter) -> DashboardStats {
        // Instalações concluídas dentro do período e da equipe escolhidos
        let completed: Vec<&Installation> = sources
            .installations
            .iter()
            .filter(|i| i.status == ScheduleStatus::Resolved)
            .filter(|i| filter.team.is_empty() || i.team_name.contains(&filter.team))
            .filter(|i| filter.period.contains(i.completion_date))
            .collect();

        let total_panels: u32 = completed.iter().map(|i| i.panel_qty).sum();
        let total_labor_cost: Decimal = completed.iter().map(|i| i.total_cost).sum();

        let team_performance: Vec<TeamPerformance> = sources
            .teams
            .iter()
            .filter(|t| filter.team.is_empty() || t.leader_name.contains(&filter.team))
            .map(|team| TeamPerformance {
                name: team.leader_name.clone(),
                panels: completed
                    .iter()
                    .filter(|i| i.team_id == team.id)
                    .map(|i| i.panel_qty)
                    .sum(),
                satisfaction: satisfaction_score(&team.feedbacks),
            })
            .collect();

        // Empate: vence a primeira equipe da lista
        let top_team = team_performance
            .iter()
            .filter(|t| t.panels > 0)
            .fold(None::<&TeamPerformance>, |best, t| match best {
                Some(b) if b.panels >= t.panels => Some(b),
                _ => Some(t),
            })
            .map(|t| TopTeam {
                name: t.name.clone(),
                panels: t.panels,
            });

        let rated: Vec<f64> = team_performance
            .iter()
            .filter(|t| t.satisfaction > 0.0)
            .map(|t| t.satisfaction)
            .collect();
        let satisfaction = if rated.is_empty() {
            0.0
        } else {
            let mean = rated.iter().sum::<f64>() / rated.len() as f64;
            (mean * 10.0).round() / 10.0
        };

        tracing::debug!(
            "Dashboard: {} instalações concluídas, {} placas",
            completed.len(),
            total_panels
        );

        DashboardStats {
            total_clients: sources.clients.len(),
            completed_installs: completed.len(),
            total_panels,
            total_labor_cost,
            top_team,
            satisfaction,
            team_performance,
            services_by_status: ticket_breakdown(sources.tickets),
            homologations_by_status: homologation_breakdown(sources.homologations),
        }
    }
}

fn ticket_breakdown(tickets: &[ServiceTicket]) -> Vec<StatusCount> {
    [ServiceStatus::Open, ServiceStatus::InProgress, ServiceStatus::Resolved]
        .into_iter()
        .map(|status| StatusCount {
            name: status.label().to_string(),
            value: tickets.iter().filter(|t| t.status == status).count(),
        })
        .collect()
}

fn homologation_breakdown(homologations: &[Homologation]) -> Vec<StatusCount> {
    [
        HomologationStatus::Waiting,
        HomologationStatus::Scheduled,
        HomologationStatus::Approved,
    ]
    .into_iter()
    .map(|status| StatusCount {
        name: status.label().to_string(),
        value: homologations.iter().filter(|h| h.status == status).count(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::common::filter::DateRange;
    use crate::db::seed;

    struct Fixture {
        clients: Vec<Client>,
        teams: Vec<Team>,
        installations: Vec<Installation>,
        tickets: Vec<ServiceTicket>,
        homologations: Vec<Homologation>,
    }

    impl Fixture {
        // Usa as linhas de pagamento como histórico de instalações concluídas
        fn seeded() -> Self {
            let mut installations = seed::installations();
            installations.extend(seed::team_payments());
            Self {
                clients: seed::clients(),
                teams: seed::teams(),
                installations,
                tickets: seed::tickets(),
                homologations: seed::homologations(),
            }
        }

        fn sources(&self) -> DashboardSources<'_> {
            DashboardSources {
                clients: &self.clients,
                teams: &self.teams,
                installations: &self.installations,
                tickets: &self.tickets,
                homologations: &self.homologations,
            }
        }
    }

    #[test]
    fn cards_add_up_completed_installations() {
        let fixture = Fixture::seeded();
        let stats = DashboardService::summary(fixture.sources(), &DashboardFilter::default());

        assert_eq!(stats.total_clients, 3);
        assert_eq!(stats.completed_installs, 4);
        assert_eq!(stats.total_panels, 144);
        assert_eq!(stats.total_labor_cost, Decimal::new(6200, 0));
        assert_eq!(
            stats.top_team,
            Some(TopTeam { name: "Marcos Santos (Beta)".into(), panels: 100 })
        );
        assert_eq!(stats.satisfaction, 4.3);
    }

    #[test]
    fn breakdowns_follow_status_order() {
        let fixture = Fixture::seeded();
        let stats = DashboardService::summary(fixture.sources(), &DashboardFilter::default());

        let services: Vec<_> = stats.services_by_status.iter().map(|s| (s.name.as_str(), s.value)).collect();
        assert_eq!(services, [("A Resolver", 1), ("Resolvendo", 0), ("Resolvido", 1)]);

        let homologations: Vec<_> = stats.homologations_by_status.iter().map(|s| s.value).collect();
        assert_eq!(homologations, [0, 0, 1]);
    }

    #[test]
    fn team_and_period_narrow_the_cards() {
        let fixture = Fixture::seeded();
        let filter = DashboardFilter {
            team: "Alpha".into(),
            period: DateRange::new(NaiveDate::from_ymd_opt(2023, 10, 11), NaiveDate::from_ymd_opt(2023, 10, 11)),
        };
        let stats = DashboardService::summary(fixture.sources(), &filter);

        assert_eq!(stats.completed_installs, 2);
        assert_eq!(stats.total_panels, 24);
        assert_eq!(stats.team_performance.len(), 1);
        assert_eq!(stats.top_team.unwrap().panels, 24);
    }

    #[test]
    fn empty_system_has_no_top_team() {
        let stats = DashboardService::summary(
            DashboardSources {
                clients: &[],
                teams: &[],
                installations: &[],
                tickets: &[],
                homologations: &[],
            },
            &DashboardFilter::default(),
        );
        assert_eq!(stats.total_panels, 0);
        assert_eq!(stats.top_team, None);
        assert_eq!(stats.satisfaction, 0.0);
        assert!(stats.services_by_status.iter().all(|s| s.value == 0));
    }
}
