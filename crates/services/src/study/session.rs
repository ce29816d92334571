use chrono::{DateTime, Utc};

use eco_core::model::{Page, ProgressStore, QuizOutcome, Topic};

/// Quiz outcome computed on submission but not yet written to the store.
///
/// It is committed when the student acknowledges the confirmation screen
/// and dropped with the session otherwise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedOutcome {
    topic: Topic,
    outcome: QuizOutcome,
}

impl StagedOutcome {
    pub(crate) fn new(topic: Topic, outcome: QuizOutcome) -> Self {
        Self { topic, outcome }
    }

    #[must_use]
    pub fn topic(&self) -> Topic {
        self.topic
    }

    #[must_use]
    pub fn outcome(&self) -> &QuizOutcome {
        &self.outcome
    }
}

/// All mutable state owned by one running session.
///
/// Created at session start and threaded by reference through the flow
/// service and the views; nothing in here outlives the session, and no
/// other session can observe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudySession {
    page: Page,
    progress: ProgressStore,
    staged: Option<StagedOutcome>,
    started_at: DateTime<Utc>,
}

impl StudySession {
    pub(crate) fn new(progress: ProgressStore, started_at: DateTime<Utc>) -> Self {
        Self {
            page: Page::Dashboard,
            progress,
            staged: None,
            started_at,
        }
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressStore {
        &self.progress
    }

    /// Pending quiz outcome, present only while the confirmation screen is
    /// up.
    #[must_use]
    pub fn staged(&self) -> Option<&StagedOutcome> {
        self.staged.as_ref()
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    // Transitions go through `StudyFlowService`; the raw mutators stay
    // crate-private.

    pub(crate) fn set_page(&mut self, page: Page) {
        self.page = page;
    }

    pub(crate) fn stage(&mut self, staged: StagedOutcome) {
        self.staged = Some(staged);
    }

    pub(crate) fn take_staged(&mut self) -> Option<StagedOutcome> {
        self.staged.take()
    }

    pub(crate) fn progress_mut(&mut self) -> &mut ProgressStore {
        &mut self.progress
    }
}
