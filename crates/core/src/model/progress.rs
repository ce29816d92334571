use chrono::{DateTime, Utc};

use crate::model::topic::Topic;

/// Per-topic completion flag and quiz score.
///
/// `completed` is only ever set, never cleared; `score` is only written by
/// a quiz commit and replaces the previous value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LessonProgress {
    topic: Topic,
    completed: bool,
    score: u32,
    completed_at: Option<DateTime<Utc>>,
}

impl LessonProgress {
    fn fresh(topic: Topic) -> Self {
        Self {
            topic,
            completed: false,
            score: 0,
            completed_at: None,
        }
    }

    #[must_use]
    pub fn topic(&self) -> Topic {
        self.topic
    }

    #[must_use]
    pub fn completed(&self) -> bool {
        self.completed
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// When the quiz commit happened, if any. The seeded Solar entry has no
    /// timestamp: it ships completed from before the session existed.
    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }
}

/// Derived dashboard counters. Recomputed on every read, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressSummary {
    pub badge_count: usize,
    pub completed_lessons: usize,
    pub total_lessons: usize,
}

impl ProgressSummary {
    /// Completion ratio in `[0.0, 1.0]` for the dashboard progress bar.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        if self.total_lessons == 0 {
            return 0.0;
        }
        self.completed_lessons as f64 / self.total_lessons as f64
    }
}

/// Session-scoped progress for the fixed topic set.
///
/// One entry per `Topic`, allocated up front, so lookups cannot miss. The
/// store lives exactly as long as the session that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressStore {
    entries: [LessonProgress; Topic::COUNT],
}

impl ProgressStore {
    /// Store with every topic untouched.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            entries: Topic::ALL.map(LessonProgress::fresh),
        }
    }

    /// Session-start contents: Solar ships completed with a score of 10,
    /// the remaining topics start at zero.
    #[must_use]
    pub fn seeded() -> Self {
        let mut store = Self::empty();
        let solar = &mut store.entries[Topic::Solar.index()];
        solar.completed = true;
        solar.score = 10;
        store
    }

    #[must_use]
    pub fn get(&self, topic: Topic) -> &LessonProgress {
        &self.entries[topic.index()]
    }

    /// Record a finished quiz: marks the topic completed and overwrites the
    /// stored score with the new one.
    pub fn commit_completion(&mut self, topic: Topic, score: u32, at: DateTime<Utc>) {
        let entry = &mut self.entries[topic.index()];
        entry.completed = true;
        entry.score = score;
        entry.completed_at = Some(at);
    }

    /// Dashboard counters, derived from the entries on each call.
    #[must_use]
    pub fn summary(&self) -> ProgressSummary {
        let completed_lessons = self
            .entries
            .iter()
            .filter(|entry| entry.completed())
            .count();
        ProgressSummary {
            // One badge per completed lesson.
            badge_count: completed_lessons,
            completed_lessons,
            total_lessons: Topic::COUNT,
        }
    }

    /// Entries in `Topic::ALL` order.
    pub fn iter(&self) -> impl Iterator<Item = &LessonProgress> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn seeded_store_matches_launch_data() {
        let store = ProgressStore::seeded();

        let solar = store.get(Topic::Solar);
        assert!(solar.completed());
        assert_eq!(solar.score(), 10);
        assert_eq!(solar.completed_at(), None);

        for topic in [Topic::Eolica, Topic::Hidraulica, Topic::Biomasa] {
            let entry = store.get(topic);
            assert!(!entry.completed());
            assert_eq!(entry.score(), 0);
        }

        let summary = store.summary();
        assert_eq!(summary.badge_count, 1);
        assert_eq!(summary.total_lessons, 4);
    }

    #[test]
    fn badge_count_tracks_completions() {
        let mut store = ProgressStore::seeded();
        let now = fixed_now();

        store.commit_completion(Topic::Eolica, 5, now);
        assert_eq!(store.summary().badge_count, 2);

        store.commit_completion(Topic::Biomasa, 0, now);
        assert_eq!(store.summary().badge_count, 3);

        // Badge count always equals the number of completed entries.
        let completed = store.iter().filter(|entry| entry.completed()).count();
        assert_eq!(store.summary().badge_count, completed);
    }

    #[test]
    fn commit_replaces_score() {
        let mut store = ProgressStore::seeded();
        let now = fixed_now();

        store.commit_completion(Topic::Solar, 5, now);
        assert_eq!(store.get(Topic::Solar).score(), 5);

        // A lower score still replaces the stored one; commits never take a max.
        store.commit_completion(Topic::Solar, 0, now);
        assert_eq!(store.get(Topic::Solar).score(), 0);
        assert!(store.get(Topic::Solar).completed());
    }

    #[test]
    fn commit_records_timestamp() {
        let mut store = ProgressStore::empty();
        let now = fixed_now();

        store.commit_completion(Topic::Hidraulica, 10, now);
        assert_eq!(store.get(Topic::Hidraulica).completed_at(), Some(now));
    }

    #[test]
    fn summary_fraction() {
        let store = ProgressStore::seeded();
        let fraction = store.summary().fraction();
        assert!((fraction - 0.25).abs() < f64::EPSILON);
    }
}
