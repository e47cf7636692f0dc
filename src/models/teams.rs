// src/models/teams.rs

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::store::Record;
use crate::models::Patch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SatisfactionLevel {
    #[serde(rename = "Muito Insatisfeito")]
    VeryDissatisfied,
    #[serde(rename = "Insatisfeito")]
    Dissatisfied,
    #[serde(rename = "Regular")]
    Neutral,
    #[default]
    #[serde(rename = "Satisfeito")]
    Satisfied,
    #[serde(rename = "Muito Satisfeito")]
    VerySatisfied,
}

impl SatisfactionLevel {
    /// Nota de 1 (pior) a 5 (melhor).
    pub fn score(&self) -> u8 {
        match self {
            SatisfactionLevel::VeryDissatisfied => 1,
            SatisfactionLevel::Dissatisfied => 2,
            SatisfactionLevel::Neutral => 3,
            SatisfactionLevel::Satisfied => 4,
            SatisfactionLevel::VerySatisfied => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SatisfactionLevel::VeryDissatisfied => "Muito Insatisfeito",
            SatisfactionLevel::Dissatisfied => "Insatisfeito",
            SatisfactionLevel::Neutral => "Regular",
            SatisfactionLevel::Satisfied => "Satisfeito",
            SatisfactionLevel::VerySatisfied => "Muito Satisfeito",
        }
    }
}

impl fmt::Display for SatisfactionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamFeedback {
    pub id: String,
    pub date: NaiveDate,
    pub comment: String,
    pub level: SatisfactionLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub id: String,
    pub leader_name: String,
    pub pix_key: String,
    // Mais recente primeiro
    pub feedbacks: Vec<TeamFeedback>,
}

impl Record for Team {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewTeam {
    #[validate(length(min = 1, message = "required"))]
    pub leader_name: String,

    #[validate(length(min = 1, message = "required"))]
    pub pix_key: String,

    #[serde(default)]
    pub feedbacks: Vec<TeamFeedback>,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TeamPatch {
    #[validate(length(min = 1, message = "required"))]
    pub leader_name: Option<String>,
    #[validate(length(min = 1, message = "required"))]
    pub pix_key: Option<String>,
    pub feedbacks: Option<Vec<TeamFeedback>>,
}

impl Patch<Team> for TeamPatch {
    fn merge_into(self, current: &Team) -> Team {
        Team {
            id: current.id.clone(),
            leader_name: self.leader_name.unwrap_or_else(|| current.leader_name.clone()),
            pix_key: self.pix_key.unwrap_or_else(|| current.pix_key.clone()),
            feedbacks: self.feedbacks.unwrap_or_else(|| current.feedbacks.clone()),
        }
    }
}

// Formulário de avaliação dentro do modal da equipe
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewFeedback {
    pub comment: String,
    pub level: SatisfactionLevel,
}
