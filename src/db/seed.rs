// src/db/seed.rs

// Dados de demonstração. Nada aqui é global: o AppState recebe estas listas
// e as injeta nos serviços, que podem ser criados com qualquer outra origem.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    clients::{Client, InstallStatus, Salesperson},
    finance::FinancialRecord,
    homologations::{Homologation, HomologationStatus},
    installations::{GridConnectionType, Installation},
    schedules::{ScheduleStatus, ServicePriority, ServiceSchedule, ServiceType},
    settings::BackupData,
    teams::{SatisfactionLevel, Team, TeamFeedback},
    tickets::{Attendant, ServiceStatus, ServiceTicket},
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

pub fn demo_data() -> BackupData {
    BackupData {
        clients: clients(),
        teams: teams(),
        tickets: tickets(),
        schedules: schedules(),
        installations: installations(),
        homologations: homologations(),
        financial_records: financial_records(),
        team_payments: team_payments(),
    }
}

pub fn clients() -> Vec<Client> {
    vec![
        Client {
            id: "1".into(),
            name: "Carlos Oliveira".into(),
            address: "Rua das Flores, 123 - Jardim Sol".into(),
            phone: "(11) 99999-8888".into(),
            salesperson: Salesperson::Isa,
            panel_qty: 12,
            power_kwp: Decimal::new(66, 1),
            contract_date: Some(day(2023, 10, 1)),
            observation: "Telhado cerâmico, acesso difícil.".into(),
            install_status: InstallStatus::Completed,
            assigned_team: Some("Equipe Alpha".into()),
            installation_completion_date: Some(day(2023, 10, 20)),
        },
        Client {
            id: "2".into(),
            name: "Ana Souza".into(),
            address: "Av. Paulista, 2000 - Bela Vista".into(),
            phone: "(11) 97777-6666".into(),
            salesperson: Salesperson::Pedro,
            panel_qty: 24,
            power_kwp: Decimal::new(132, 1),
            contract_date: Some(day(2023, 10, 15)),
            observation: String::new(),
            install_status: InstallStatus::InProgress,
            assigned_team: None,
            installation_completion_date: Some(day(2023, 11, 5)),
        },
        Client {
            id: "3".into(),
            name: "Roberto Justus".into(),
            address: "Rua Oscar Freire, 500".into(),
            phone: "(11) 91111-2222".into(),
            salesperson: Salesperson::Lays,
            panel_qty: 50,
            power_kwp: Decimal::new(25, 0),
            contract_date: Some(day(2023, 11, 1)),
            observation: String::new(),
            install_status: InstallStatus::InProgress,
            assigned_team: None,
            installation_completion_date: None,
        },
    ]
}

pub fn teams() -> Vec<Team> {
    vec![
        Team {
            id: "t1".into(),
            leader_name: "Roberto Silva (Alpha)".into(),
            pix_key: "123.456.789-00".into(),
            feedbacks: vec![
                TeamFeedback {
                    id: "f1".into(),
                    date: day(2023, 10, 10),
                    comment: "Equipe muito educada e rápida.".into(),
                    level: SatisfactionLevel::VerySatisfied,
                },
                TeamFeedback {
                    id: "f2".into(),
                    date: day(2023, 10, 15),
                    comment: "Deixaram um pouco de sujeira no quintal.".into(),
                    level: SatisfactionLevel::Neutral,
                },
            ],
        },
        Team {
            id: "t2".into(),
            leader_name: "Marcos Santos (Beta)".into(),
            pix_key: "marcos.beta@email.com".into(),
            feedbacks: vec![TeamFeedback {
                id: "f3".into(),
                date: day(2023, 10, 20),
                comment: "Instalação perfeita.".into(),
                level: SatisfactionLevel::Satisfied,
            }],
        },
        Team {
            id: "t3".into(),
            leader_name: "Júlio Cesar (Gamma)".into(),
            pix_key: "11999998888".into(),
            feedbacks: vec![
                TeamFeedback {
                    id: "f4".into(),
                    date: day(2023, 10, 22),
                    comment: "Excelente trabalho, muito profissionais.".into(),
                    level: SatisfactionLevel::VerySatisfied,
                },
                TeamFeedback {
                    id: "f5".into(),
                    date: day(2023, 10, 25),
                    comment: "Chegaram no horário e explicaram tudo.".into(),
                    level: SatisfactionLevel::VerySatisfied,
                },
            ],
        },
    ]
}

pub fn tickets() -> Vec<ServiceTicket> {
    vec![
        ServiceTicket {
            id: "1".into(),
            display_id: "01".into(),
            date: day(2023, 10, 25),
            client_id: "1".into(),
            client_name: "Carlos Oliveira".into(),
            client_address: "Rua das Flores, 123 - Jardim Sol".into(),
            salesperson: "Isa".into(),
            issue: "Inversor apresentando erro 403 intermitente.".into(),
            status: ServiceStatus::Open,
            attendant: Attendant::Rafael,
            finished_date: None,
        },
        ServiceTicket {
            id: "2".into(),
            display_id: "02".into(),
            date: day(2023, 10, 26),
            client_id: "2".into(),
            client_name: "Ana Souza".into(),
            client_address: "Av. Paulista, 2000 - Bela Vista".into(),
            salesperson: "Pedro".into(),
            issue: "Cliente solicita explicação sobre o aplicativo de monitoramento.".into(),
            status: ServiceStatus::Resolved,
            attendant: Attendant::Bruna,
            finished_date: Some(day(2023, 10, 26)),
        },
    ]
}

pub fn schedules() -> Vec<ServiceSchedule> {
    vec![ServiceSchedule {
        id: "sch1".into(),
        display_id: "SERV 01".into(),
        client_id: "1".into(),
        client_name: "Carlos Oliveira".into(),
        client_phone: "(11) 99999-8888".into(),
        client_address: "Rua das Flores, 123".into(),
        salesperson: "Isa".into(),
        service_type: ServiceType::InverterSetup,
        description: "Configuração de Wi-Fi".into(),
        assigned_team: "Equipe Alpha".into(),
        priority: ServicePriority::Medium,
        scheduled_date: day(2023, 10, 25),
        cost: Decimal::ZERO,
        status: ScheduleStatus::Pending,
        observation: String::new(),
    }]
}

pub fn installations() -> Vec<Installation> {
    vec![Installation {
        id: "inst1".into(),
        display_id: "INST 01".into(),
        client_id: "1".into(),
        client_name: "Carlos Oliveira".into(),
        client_phone: "(11) 99999-8888".into(),
        client_address: "Rua das Flores, 123".into(),
        team_id: "t1".into(),
        team_name: "Roberto Silva (Alpha)".into(),
        panel_qty: 12,
        power_kwp: Decimal::new(66, 1),
        grid_type: GridConnectionType::SinglePhase,
        breaker_standard_amp: "40".into(),
        breaker_inverter_amp: "32".into(),
        labor_price_per_panel: Decimal::new(50, 0),
        total_cost: Decimal::new(600, 0),
        scheduled_date: day(2023, 10, 10),
        completion_date: Some(day(2023, 10, 11)),
        status: ScheduleStatus::Resolved,
    }]
}

pub fn homologations() -> Vec<Homologation> {
    vec![Homologation {
        id: "1".into(),
        client_id: "1".into(),
        client_name: "Carlos Oliveira".into(),
        installation_completion_date: day(2023, 10, 20),
        entered_contract: true,
        status: HomologationStatus::Approved,
    }]
}

pub fn financial_records() -> Vec<FinancialRecord> {
    vec![
        FinancialRecord {
            id: "1".into(),
            date: day(2023, 10, 20),
            team_id: "t1".into(),
            team_name: "Roberto Silva (Alpha)".into(),
            description: "Reembolso Combustível - Obra Rua Flores".into(),
            value: Decimal::new(150, 0),
        },
        FinancialRecord {
            id: "2".into(),
            date: day(2023, 10, 21),
            team_id: "t2".into(),
            team_name: "Marcos Santos (Beta)".into(),
            description: "Compra de parafusos extras".into(),
            value: Decimal::new(4550, 2),
        },
    ]
}

// Instalações concluídas que geram pagamento para as equipes
pub fn team_payments() -> Vec<Installation> {
    vec![
        Installation {
            id: "101".into(),
            display_id: "INST 05".into(),
            client_id: "1".into(),
            client_name: "Carlos Oliveira".into(),
            client_phone: "(11) 99999-8888".into(),
            client_address: "Rua das Flores, 123".into(),
            team_id: "t1".into(),
            team_name: "Roberto Silva (Alpha)".into(),
            panel_qty: 12,
            power_kwp: Decimal::new(66, 1),
            grid_type: GridConnectionType::SinglePhase,
            breaker_standard_amp: "40".into(),
            breaker_inverter_amp: "32".into(),
            labor_price_per_panel: Decimal::new(50, 0),
            total_cost: Decimal::new(600, 0),
            scheduled_date: day(2023, 10, 10),
            completion_date: Some(day(2023, 10, 11)),
            status: ScheduleStatus::Resolved,
        },
        Installation {
            id: "102".into(),
            display_id: "INST 08".into(),
            client_id: "3".into(),
            client_name: "Empresa XYZ".into(),
            client_phone: "(11) 91111-2222".into(),
            client_address: "Av. Industrial, 500".into(),
            team_id: "t2".into(),
            team_name: "Marcos Santos (Beta)".into(),
            panel_qty: 100,
            power_kwp: Decimal::new(55, 0),
            grid_type: GridConnectionType::ThreePhase,
            breaker_standard_amp: "100".into(),
            breaker_inverter_amp: "80".into(),
            labor_price_per_panel: Decimal::new(40, 0),
            total_cost: Decimal::new(4000, 0),
            scheduled_date: day(2023, 10, 15),
            completion_date: Some(day(2023, 10, 18)),
            status: ScheduleStatus::Resolved,
        },
        Installation {
            id: "103".into(),
            display_id: "INST 10".into(),
            client_id: "4".into(),
            client_name: "João Silva".into(),
            client_phone: "(11) 97777-1234".into(),
            client_address: "Rua do Campo, 50".into(),
            team_id: "t1".into(),
            team_name: "Roberto Silva (Alpha)".into(),
            panel_qty: 20,
            power_kwp: Decimal::new(11, 0),
            grid_type: GridConnectionType::TwoPhase,
            breaker_standard_amp: "63".into(),
            breaker_inverter_amp: "50".into(),
            labor_price_per_panel: Decimal::new(50, 0),
            total_cost: Decimal::new(1000, 0),
            scheduled_date: day(2023, 10, 20),
            completion_date: Some(day(2023, 10, 21)),
            status: ScheduleStatus::Resolved,
        },
    ]
}
