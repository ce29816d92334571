use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the four renewable-energy subjects tracked by the app.
///
/// The set is closed: per-topic bookkeeping is allocated up front and
/// lookups are total.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Topic {
    Solar,
    Eolica,
    Hidraulica,
    Biomasa,
}

impl Topic {
    /// Canonical iteration order.
    pub const ALL: [Topic; 4] = [
        Topic::Solar,
        Topic::Eolica,
        Topic::Hidraulica,
        Topic::Biomasa,
    ];

    /// Number of topics in the closed set.
    pub const COUNT: usize = Self::ALL.len();

    /// Stable index into per-topic tables.
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable subject name, without decoration.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Topic::Solar => "Energía Solar",
            Topic::Eolica => "Energía Eólica",
            Topic::Hidraulica => "Energía Hidráulica",
            Topic::Biomasa => "Energía de Biomasa",
        }
    }

    /// Card heading shown on the dashboard, emoji included.
    #[must_use]
    pub fn heading(self) -> &'static str {
        match self {
            Topic::Solar => "🌞 Energía Solar",
            Topic::Eolica => "💨 Energía Eólica",
            Topic::Hidraulica => "💧 Energía Hidráulica",
            Topic::Biomasa => "🌿 Energía de Biomasa",
        }
    }

    /// One-line card blurb.
    #[must_use]
    pub fn blurb(self) -> &'static str {
        match self {
            Topic::Solar => "Aprende sobre la energía del sol.",
            Topic::Eolica => "Aprovecha la fuerza del viento.",
            Topic::Hidraulica => "La potencia del agua en movimiento.",
            Topic::Biomasa => "Energía a partir de materia orgánica.",
        }
    }

    /// Accent color for a card whose topic is not yet completed.
    /// Completed cards render green regardless of topic.
    #[must_use]
    pub fn accent(self) -> &'static str {
        match self {
            Topic::Solar => "orange",
            Topic::Eolica => "blue",
            Topic::Hidraulica => "cyan",
            Topic::Biomasa => "teal",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Topic::Solar => "Solar",
            Topic::Eolica => "Eolica",
            Topic::Hidraulica => "Hidraulica",
            Topic::Biomasa => "Biomasa",
        };
        write!(f, "{name}")
    }
}

/// Error type for parsing a `Topic` from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTopicError {
    raw: String,
}

impl fmt::Display for ParseTopicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown topic: {}", self.raw)
    }
}

impl std::error::Error for ParseTopicError {}

impl FromStr for Topic {
    type Err = ParseTopicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Solar" => Ok(Topic::Solar),
            "Eolica" => Ok(Topic::Eolica),
            "Hidraulica" => Ok(Topic::Hidraulica),
            "Biomasa" => Ok(Topic::Biomasa),
            other => Err(ParseTopicError {
                raw: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_display() {
        assert_eq!(Topic::Solar.to_string(), "Solar");
        assert_eq!(Topic::Hidraulica.to_string(), "Hidraulica");
    }

    #[test]
    fn test_topic_from_str() {
        let topic: Topic = "Eolica".parse().unwrap();
        assert_eq!(topic, Topic::Eolica);
    }

    #[test]
    fn test_topic_from_str_invalid() {
        let result = "Geotermica".parse::<Topic>();
        assert!(result.is_err());
    }

    #[test]
    fn test_topic_roundtrip() {
        for topic in Topic::ALL {
            let parsed: Topic = topic.to_string().parse().unwrap();
            assert_eq!(parsed, topic);
        }
    }

    #[test]
    fn test_indices_match_all_order() {
        for (position, topic) in Topic::ALL.iter().enumerate() {
            assert_eq!(topic.index(), position);
        }
        assert_eq!(Topic::COUNT, 4);
    }
}
