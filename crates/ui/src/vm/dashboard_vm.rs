use eco_core::model::{ProgressStore, Topic};
use services::LessonCatalog;

/// Topics with a card on the dashboard grid.
///
/// Biomasa is tracked in the store but has no card yet; the fourth grid
/// slot belongs to the mini-games tile.
pub const DASHBOARD_TOPICS: [Topic; 3] = [Topic::Solar, Topic::Eolica, Topic::Hidraulica];

/// Display-ready lesson card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LessonCardVm {
    pub topic: Topic,
    pub heading: &'static str,
    pub blurb: &'static str,
    pub score: u32,
    pub accent: &'static str,
    pub unlocked: bool,
    pub completed: bool,
}

#[must_use]
pub fn map_lesson_cards(progress: &ProgressStore, catalog: &LessonCatalog) -> Vec<LessonCardVm> {
    DASHBOARD_TOPICS
        .iter()
        .map(|&topic| {
            let entry = progress.get(topic);
            LessonCardVm {
                topic,
                heading: topic.heading(),
                blurb: topic.blurb(),
                score: entry.score(),
                // Completed cards go green regardless of the topic accent.
                accent: if entry.completed() {
                    "green"
                } else {
                    topic.accent()
                },
                unlocked: catalog.is_unlocked(topic),
                completed: entry.completed(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_maps_to_expected_cards() {
        let catalog = LessonCatalog::builtin().unwrap();
        let cards = map_lesson_cards(&ProgressStore::seeded(), &catalog);

        assert_eq!(cards.len(), 3);

        let solar = &cards[0];
        assert_eq!(solar.topic, Topic::Solar);
        assert_eq!(solar.score, 10);
        assert_eq!(solar.accent, "green");
        assert!(solar.unlocked);

        let eolica = &cards[1];
        assert_eq!(eolica.accent, "blue");
        assert!(!eolica.unlocked);
        assert_eq!(eolica.score, 0);

        let hidraulica = &cards[2];
        assert_eq!(hidraulica.accent, "cyan");
        assert!(!hidraulica.unlocked);
    }

    #[test]
    fn incomplete_solar_keeps_its_own_accent() {
        let catalog = LessonCatalog::builtin().unwrap();
        let cards = map_lesson_cards(&ProgressStore::empty(), &catalog);
        assert_eq!(cards[0].accent, "orange");
    }
}
