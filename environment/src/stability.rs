use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Release maturity of a build or of a single management resource.
///
/// Tiers are totally ordered from most to least stable. The numeric order
/// leaves room for additional tiers between the existing ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stability {
    Default,
    Community,
    Preview,
    Experimental,
}

impl Stability {
    pub const VALUES: [Stability; 4] = [
        Stability::Default,
        Stability::Community,
        Stability::Preview,
        Stability::Experimental,
    ];

    pub fn order(self) -> u32 {
        match self {
            Stability::Default => 0,
            Stability::Community => 100,
            Stability::Preview => 200,
            Stability::Experimental => 300,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Stability::Default => "default",
            Stability::Community => "community",
            Stability::Preview => "preview",
            Stability::Experimental => "experimental",
        }
    }

    /// Parses a tier case-insensitively. Unknown or empty input yields
    /// `fallback` rather than an error.
    pub fn parse(value: &str, fallback: Stability) -> Stability {
        let value = value.trim();
        Stability::VALUES
            .iter()
            .copied()
            .find(|stability| stability.label().eq_ignore_ascii_case(value))
            .unwrap_or(fallback)
    }

    pub fn random() -> Stability {
        let index = rand::thread_rng().gen_range(0..Stability::VALUES.len());
        Stability::VALUES[index]
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
