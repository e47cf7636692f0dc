// src/services/team_service.rs

use validator::Validate;

use crate::{
    common::{calc::satisfaction_score, clock::SharedClock, confirm::Confirm, error::AppError},
    db::InMemoryRepository,
    models::{
        teams::{NewFeedback, NewTeam, Team, TeamFeedback, TeamPatch},
        Patch,
    },
    services::{confirmed_delete, new_record_id},
};

#[derive(Clone)]
pub struct TeamService {
    repo: InMemoryRepository<Team>,
    clock: SharedClock,
}

impl TeamService {
    pub fn new(initial: Vec<Team>, clock: SharedClock) -> Self {
        Self {
            repo: InMemoryRepository::new(initial),
            clock,
        }
    }

    pub fn records(&self) -> &[Team] {
        self.repo.list()
    }

    pub fn find(&self, id: &str) -> Option<&Team> {
        self.repo.find(id)
    }

    pub fn create(&mut self, draft: NewTeam) -> Result<Team, AppError> {
        draft.validate()?;

        let team = Team {
            id: new_record_id(),
            leader_name: draft.leader_name,
            pix_key: draft.pix_key,
            feedbacks: draft.feedbacks,
        };
        tracing::info!("Equipe '{}' cadastrada", team.leader_name);
        Ok(self.repo.insert(team))
    }

    pub fn update(&mut self, id: &str, patch: TeamPatch) -> Result<Option<Team>, AppError> {
        patch.validate()?;
        Ok(self.repo.update_with(id, |current| patch.merge_into(current)))
    }

    pub fn delete(&mut self, id: &str, confirm: &dyn Confirm) -> bool {
        confirmed_delete(&mut self.repo, id, confirm, "equipe")
    }

    /// Registra uma avaliação no topo da lista, datada de hoje.
    ///
    /// Comentário em branco é rejeitado. Equipe inexistente devolve `Ok(None)`.
    pub fn add_feedback(&mut self, team_id: &str, input: NewFeedback) -> Result<Option<Team>, AppError> {
        if input.comment.trim().is_empty() {
            return Err(AppError::EmptyFeedbackComment);
        }

        let feedback = TeamFeedback {
            id: new_record_id(),
            date: self.clock.today(),
            comment: input.comment,
            level: input.level,
        };

        let updated = self.repo.update_with(team_id, |team| {
            let mut feedbacks = Vec::with_capacity(team.feedbacks.len() + 1);
            feedbacks.push(feedback);
            feedbacks.extend(team.feedbacks.iter().cloned());
            Team {
                feedbacks,
                ..team.clone()
            }
        });

        match &updated {
            Some(team) => tracing::info!("Nova avaliação para a equipe '{}'", team.leader_name),
            None => tracing::debug!("Equipe '{}' não encontrada para avaliação", team_id),
        }
        Ok(updated)
    }

    pub fn remove_feedback(&mut self, team_id: &str, feedback_id: &str) -> Option<Team> {
        self.repo.update_with(team_id, |team| Team {
            feedbacks: team
                .feedbacks
                .iter()
                .filter(|f| f.id != feedback_id)
                .cloned()
                .collect(),
            ..team.clone()
        })
    }

    pub fn satisfaction(team: &Team) -> f64 {
        satisfaction_score(&team.feedbacks)
    }

    pub fn restore(&mut self, records: Vec<Team>) {
        self.repo.replace_all(records);
    }

    pub fn clear(&mut self) {
        self.repo.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::common::clock::FixedClock;
    use crate::common::confirm::Answer;
    use crate::common::format::format_score;
    use crate::db::seed;
    use crate::models::teams::SatisfactionLevel;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
    }

    fn service() -> TeamService {
        TeamService::new(seed::teams(), Arc::new(FixedClock::at_date(today())))
    }

    #[test]
    fn seeded_scores_match_the_feedback_levels() {
        let svc = service();
        let scores: Vec<_> = svc
            .records()
            .iter()
            .map(|t| format_score(TeamService::satisfaction(t)))
            .collect();
        assert_eq!(scores, ["4.0", "4.0", "5.0"]);
    }

    #[test]
    fn feedback_is_prepended_with_today() {
        let mut svc = service();
        let input = NewFeedback {
            comment: "Atrasaram duas horas.".into(),
            level: SatisfactionLevel::Dissatisfied,
        };
        let team = svc.add_feedback("t2", input).unwrap().unwrap();

        assert_eq!(team.feedbacks.len(), 2);
        assert_eq!(team.feedbacks[0].date, today());
        assert_eq!(team.feedbacks[0].comment, "Atrasaram duas horas.");
        assert_eq!(team.feedbacks[1].id, "f3");
        assert_eq!(TeamService::satisfaction(&team), 3.0);
    }

    #[test]
    fn blank_comment_is_rejected() {
        let mut svc = service();
        let err = svc
            .add_feedback("t1", NewFeedback { comment: "   ".into(), ..Default::default() })
            .unwrap_err();
        assert!(matches!(err, AppError::EmptyFeedbackComment));
        assert_eq!(svc.find("t1").unwrap().feedbacks.len(), 2);
    }

    #[test]
    fn feedback_for_unknown_team_is_a_no_op() {
        let mut svc = service();
        let before = svc.records().to_vec();
        let result = svc
            .add_feedback("t9", NewFeedback { comment: "ok".into(), ..Default::default() })
            .unwrap();
        assert!(result.is_none());
        assert_eq!(svc.records(), before.as_slice());
    }

    #[test]
    fn removing_feedback_updates_the_score() {
        let mut svc = service();
        let team = svc.remove_feedback("t1", "f2").unwrap();
        assert_eq!(team.feedbacks.len(), 1);
        assert_eq!(TeamService::satisfaction(&team), 5.0);
    }

    #[test]
    fn team_requires_leader_and_pix() {
        let mut svc = service();
        let err = svc.create(NewTeam::default()).unwrap_err();
        assert_eq!(err.validation_details().len(), 2);

        let created = svc
            .create(NewTeam {
                leader_name: "Paulo (Delta)".into(),
                pix_key: "paulo@pix.com".into(),
                feedbacks: Vec::new(),
            })
            .unwrap();
        assert_eq!(TeamService::satisfaction(&created), 0.0);
        assert_eq!(svc.records().len(), 4);
    }

    #[test]
    fn update_and_delete() {
        let mut svc = service();
        let patch = TeamPatch { pix_key: Some("novo-pix".into()), ..Default::default() };
        assert_eq!(svc.update("t3", patch).unwrap().unwrap().pix_key, "novo-pix");

        assert!(!svc.delete("t3", &Answer(false)));
        assert!(svc.delete("t3", &Answer(true)));
        assert!(svc.find("t3").is_none());
    }
}
