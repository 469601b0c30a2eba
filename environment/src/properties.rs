//! Build-time properties of the console.
//!
//! The packaging step bakes the product identity into the binary through
//! compile-time environment variables (`ENVIRONMENT_ID`, `ENVIRONMENT_NAME`,
//! `ENVIRONMENT_VERSION`, `ENVIRONMENT_BASE`, `ENVIRONMENT_BUILD`,
//! `ENVIRONMENT_STABILITY`). A variable that is not set at build time
//! falls back to a documented default, never to an error.

use serde::{Deserialize, Serialize};

pub const UNDEFINED: &str = "undefined";
pub const DEFAULT_BASE: &str = "/";
pub const DEFAULT_STABILITY: &str = "community";

/// The six raw strings injected at build time. Values are captured once
/// per binary; [`BuildProperties::compiled`] is the production entry
/// point, the builder methods exist so tests can simulate arbitrary
/// injections without recompiling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildProperties {
    /// Product identifier, e.g. `hal`.
    pub id: String,
    /// Product display name.
    pub name: String,
    /// Product version string.
    pub version: String,
    /// Deployment base path.
    pub base: String,
    /// Build identifier.
    pub build: String,
    /// Release stability tier of this build.
    pub stability: String,
}

impl Default for BuildProperties {
    fn default() -> Self {
        Self {
            id: UNDEFINED.to_string(),
            name: UNDEFINED.to_string(),
            version: UNDEFINED.to_string(),
            base: DEFAULT_BASE.to_string(),
            build: UNDEFINED.to_string(),
            stability: DEFAULT_STABILITY.to_string(),
        }
    }
}

impl BuildProperties {
    /// The values baked into this binary at build time.
    pub fn compiled() -> Self {
        Self {
            id: option_env!("ENVIRONMENT_ID").unwrap_or(UNDEFINED).to_string(),
            name: option_env!("ENVIRONMENT_NAME")
                .unwrap_or(UNDEFINED)
                .to_string(),
            version: option_env!("ENVIRONMENT_VERSION")
                .unwrap_or(UNDEFINED)
                .to_string(),
            base: option_env!("ENVIRONMENT_BASE")
                .unwrap_or(DEFAULT_BASE)
                .to_string(),
            build: option_env!("ENVIRONMENT_BUILD")
                .unwrap_or(UNDEFINED)
                .to_string(),
            stability: option_env!("ENVIRONMENT_STABILITY")
                .unwrap_or(DEFAULT_STABILITY)
                .to_string(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base = base.into();
        self
    }

    pub fn with_build(mut self, build: impl Into<String>) -> Self {
        self.build = build.into();
        self
    }

    pub fn with_stability(mut self, stability: impl Into<String>) -> Self {
        self.stability = stability.into();
        self
    }
}
