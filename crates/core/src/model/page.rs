use serde::{Deserialize, Serialize};

use crate::model::topic::Topic;

/// Which screen the session is currently showing.
///
/// Exactly one value per session, starting at `Dashboard`. The session
/// cycles between these pages for its whole life; there is no terminal
/// page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Page {
    /// Lesson overview with per-topic cards and the badge metric.
    #[default]
    Dashboard,
    /// Detail page for an unlocked topic.
    Lesson(Topic),
    /// Post-quiz confirmation shown before the dashboard refreshes.
    ProgressUpdate,
}
