use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Access tier granted to a demo session.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Tier {
    #[default]
    Demo,
    Showcase,
    Enterprise,
}

/// Resource limits attached to a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierLimits {
    pub operations: u32,
    pub repos: u32,
    pub duration: &'static str,
}

impl Tier {
    /// Maps a free-form tier label onto a known tier.
    ///
    /// Matching is exact; unknown labels fall back to [`Tier::Demo`].
    pub fn resolve(label: &str) -> Self {
        label.parse().unwrap_or_default()
    }

    /// Capitalized name used in console output.
    pub fn title(&self) -> &'static str {
        match self {
            Tier::Demo => "Demo",
            Tier::Showcase => "Showcase",
            Tier::Enterprise => "Enterprise",
        }
    }

    pub fn limits(&self) -> TierLimits {
        match self {
            Tier::Demo => TierLimits {
                operations: 5,
                repos: 1,
                duration: "30 minutes",
            },
            Tier::Showcase => TierLimits {
                operations: 20,
                repos: 3,
                duration: "2 hours",
            },
            Tier::Enterprise => TierLimits {
                operations: 100,
                repos: 10,
                duration: "7 days",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_resolve_known_tiers() {
        assert_eq!(Tier::resolve("demo"), Tier::Demo);
        assert_eq!(Tier::resolve("showcase"), Tier::Showcase);
        assert_eq!(Tier::resolve("enterprise"), Tier::Enterprise);
    }

    #[test]
    fn test_resolve_unknown_falls_back_to_demo() {
        for label in ["", "premium", "Enterprise", " demo", "full"] {
            assert_eq!(Tier::resolve(label), Tier::Demo, "label {:?}", label);
        }
    }

    #[test]
    fn test_limit_table() {
        assert_eq!(
            Tier::Demo.limits(),
            TierLimits { operations: 5, repos: 1, duration: "30 minutes" }
        );
        assert_eq!(
            Tier::Showcase.limits(),
            TierLimits { operations: 20, repos: 3, duration: "2 hours" }
        );
        assert_eq!(
            Tier::Enterprise.limits(),
            TierLimits { operations: 100, repos: 10, duration: "7 days" }
        );
    }

    #[test]
    fn test_display_round_trips_through_resolve() {
        for tier in Tier::iter() {
            assert_eq!(Tier::resolve(&tier.to_string()), tier);
        }
        assert_eq!(Tier::Showcase.to_string(), "showcase");
        assert_eq!(Tier::Showcase.title(), "Showcase");
    }
}
