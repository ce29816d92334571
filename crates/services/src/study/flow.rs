use std::sync::Arc;

use eco_core::model::{Page, ProgressStore, Topic};

use super::session::{StagedOutcome, StudySession};
use crate::Clock;
use crate::catalog::LessonCatalog;
use crate::error::StudyError;

/// What an action did to the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The page changed; the UI re-renders against the new state.
    Transitioned(Page),
    /// The action was not valid on the current page, or the topic is
    /// locked. The session is untouched.
    Ignored,
}

/// Drives page transitions and the stage-then-commit quiz cycle.
///
/// The service itself is stateless; every method takes the session it acts
/// on, so one service instance can drive any number of sessions.
#[derive(Clone)]
pub struct StudyFlowService {
    clock: Clock,
    catalog: Arc<LessonCatalog>,
}

impl StudyFlowService {
    #[must_use]
    pub fn new(clock: Clock, catalog: Arc<LessonCatalog>) -> Self {
        Self { clock, catalog }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<LessonCatalog> {
        Arc::clone(&self.catalog)
    }

    /// Fresh session on the dashboard with the seeded progress data.
    #[must_use]
    pub fn new_session(&self) -> StudySession {
        StudySession::new(ProgressStore::seeded(), self.clock.now())
    }

    /// Open a lesson from the dashboard.
    ///
    /// Locked topics never transition; selecting one is a no-op, not an
    /// error.
    pub fn select_lesson(&self, session: &mut StudySession, topic: Topic) -> ActionOutcome {
        if session.page() != Page::Dashboard {
            tracing::debug!(%topic, page = ?session.page(), "lesson select ignored outside dashboard");
            return ActionOutcome::Ignored;
        }
        if !self.catalog.is_unlocked(topic) {
            tracing::debug!(%topic, "lesson select ignored: topic locked");
            return ActionOutcome::Ignored;
        }
        session.set_page(Page::Lesson(topic));
        ActionOutcome::Transitioned(session.page())
    }

    /// Leave a lesson without submitting. Progress is untouched.
    pub fn back_to_dashboard(&self, session: &mut StudySession) -> ActionOutcome {
        match session.page() {
            Page::Lesson(_) => {
                session.set_page(Page::Dashboard);
                ActionOutcome::Transitioned(Page::Dashboard)
            }
            _ => ActionOutcome::Ignored,
        }
    }

    /// Score the open lesson's quiz and stage the outcome.
    ///
    /// The store is not written here: the result is held on the session
    /// until the student acknowledges the confirmation screen. Unanswered
    /// questions score zero.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::Quiz` when the answer count does not match the
    /// question count.
    pub fn submit_quiz(
        &self,
        session: &mut StudySession,
        answers: &[Option<String>],
    ) -> Result<ActionOutcome, StudyError> {
        let Page::Lesson(topic) = session.page() else {
            tracing::debug!(page = ?session.page(), "quiz submit ignored outside a lesson");
            return Ok(ActionOutcome::Ignored);
        };
        let Some(lesson) = self.catalog.lesson(topic) else {
            // Unreachable for sessions driven through `select_lesson`.
            return Ok(ActionOutcome::Ignored);
        };

        let outcome = lesson.quiz().evaluate(answers)?;
        tracing::info!(%topic, score = outcome.score(), "quiz submitted");
        session.stage(StagedOutcome::new(topic, outcome));
        session.set_page(Page::ProgressUpdate);
        Ok(ActionOutcome::Transitioned(Page::ProgressUpdate))
    }

    /// Acknowledge the confirmation screen: commit the staged outcome to
    /// the progress store and return to the dashboard.
    pub fn continue_to_dashboard(&self, session: &mut StudySession) -> ActionOutcome {
        if session.page() != Page::ProgressUpdate {
            return ActionOutcome::Ignored;
        }
        if let Some(staged) = session.take_staged() {
            let topic = staged.topic();
            let score = staged.outcome().score();
            session
                .progress_mut()
                .commit_completion(topic, score, self.clock.now());
            tracing::info!(%topic, score, "progress committed");
        }
        session.set_page(Page::Dashboard);
        ActionOutcome::Transitioned(Page::Dashboard)
    }
}
