use serde::{Deserialize, Serialize};

/// Subscription tiers, declared in rank order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Membership {
    #[default]
    Lite,
    Plus,
    Pro,
    Max,
}

impl Membership {
    pub const ALL: [Membership; 4] = [
        Membership::Lite,
        Membership::Plus,
        Membership::Pro,
        Membership::Max,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Membership::Lite => "AliveGPT Lite",
            Membership::Plus => "AliveGPT Plus",
            Membership::Pro => "AliveGPT Pro",
            Membership::Max => "AliveGPT Max",
        }
    }

    pub fn deep_research_enabled(self) -> bool {
        self >= Membership::Plus
    }

    pub fn preferences_enabled(self) -> bool {
        self >= Membership::Plus
    }

    /// Next tier in the selector, wrapping back to the first.
    pub fn cycle(self) -> Self {
        let index = Self::ALL.iter().position(|tier| *tier == self).unwrap_or(0);
        Self::ALL[(index + 1) % Self::ALL.len()]
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "lite" => Some(Membership::Lite),
            "plus" => Some(Membership::Plus),
            "pro" => Some(Membership::Pro),
            "max" => Some(Membership::Max),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_are_ranked_in_declaration_order() {
        assert!(Membership::Lite < Membership::Plus);
        assert!(Membership::Plus < Membership::Pro);
        assert!(Membership::Pro < Membership::Max);
    }

    #[test]
    fn lite_gates_deep_research_and_preferences() {
        assert!(!Membership::Lite.deep_research_enabled());
        assert!(!Membership::Lite.preferences_enabled());
        for tier in [Membership::Plus, Membership::Pro, Membership::Max] {
            assert!(tier.deep_research_enabled());
            assert!(tier.preferences_enabled());
        }
    }

    #[test]
    fn cycle_wraps_around() {
        assert_eq!(Membership::Lite.cycle(), Membership::Plus);
        assert_eq!(Membership::Max.cycle(), Membership::Lite);
    }

    #[test]
    fn names_round_trip_through_serde() {
        #[derive(Deserialize)]
        struct Wrapper {
            tier: Membership,
        }

        let parsed: Wrapper = toml::from_str("tier = \"pro\"").expect("toml");
        assert_eq!(parsed.tier, Membership::Pro);
        assert_eq!(Membership::from_name(" MAX "), Some(Membership::Max));
        assert_eq!(Membership::from_name("gold"), None);
    }
}
