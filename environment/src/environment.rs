//! The environment a console instance runs in.
//!
//! An [`Environment`] starts from the [`BuildProperties`] baked into the
//! binary and is completed during bootstrap, once the console has talked
//! to the management endpoint: [`Environment::update`] records the
//! stability reported by the connected instance,
//! [`Environment::init_instance`] the instance metadata. After bootstrap
//! the environment is read-only for the rest of the process lifetime.

use crate::properties::BuildProperties;
use crate::stability::Stability;
use crate::version::Version;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildType {
    Development,
    Production,
}

impl BuildType {
    /// Case-insensitive parse; anything unrecognized (including the
    /// un-injected `"undefined"`) counts as a development build.
    pub fn parse(value: &str) -> BuildType {
        if value.trim().eq_ignore_ascii_case("production") {
            BuildType::Production
        } else {
            BuildType::Development
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            BuildType::Development => "development",
            BuildType::Production => "production",
        }
    }
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationMode {
    Standalone,
    Domain,
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OperationMode::Standalone => "standalone",
            OperationMode::Domain => "domain",
        })
    }
}

/// Metadata of the connected instance, reported during bootstrap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstanceInfo {
    pub name: String,
    pub organization: Option<String>,
    pub version: Version,
    pub management_version: Version,
    pub operation_mode: OperationMode,
    pub sso: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Environment {
    application_id: String,
    application_name: String,
    application_version: Version,
    base: String,
    build_type: BuildType,
    built_in_stability: Stability,
    stability: Stability,
    permissible_stability_levels: Vec<Stability>,
    instance: Option<InstanceInfo>,
}

impl Environment {
    /// Builds the environment from injected build properties. This cannot
    /// fail: an unparsable version degrades to [`Version::empty`] with a
    /// warning, unknown build types and stability tiers fall back to
    /// their documented defaults.
    pub fn new(properties: &BuildProperties) -> Environment {
        let application_version = match Version::parse(&properties.version) {
            Ok(version) => version,
            Err(error) => {
                warn!(version = %properties.version, %error, "unparsable application version");
                Version::empty()
            }
        };
        let environment = Environment::with_values(
            &properties.id,
            &properties.name,
            application_version,
            &properties.base,
            BuildType::parse(&properties.build),
            Stability::parse(&properties.stability, Stability::Community),
        );
        debug!(
            id = %environment.application_id,
            version = %environment.application_version,
            build = %environment.build_type,
            stability = %environment.built_in_stability,
            "environment created"
        );
        environment
    }

    pub fn with_values(
        application_id: &str,
        application_name: &str,
        application_version: Version,
        base: &str,
        build_type: BuildType,
        built_in_stability: Stability,
    ) -> Environment {
        Environment {
            application_id: application_id.to_string(),
            application_name: application_name.to_string(),
            application_version,
            base: base.to_string(),
            build_type,
            built_in_stability,
            // until bootstrap, the environment is as stable as the build
            stability: built_in_stability,
            permissible_stability_levels: vec![built_in_stability],
            instance: None,
        }
    }

    /// Records the stability reported by the connected instance and the
    /// tiers it accepts.
    pub fn update(&mut self, stability: Stability, permissible_stability_levels: Vec<Stability>) {
        debug!(%stability, "environment updated");
        self.stability = stability;
        self.permissible_stability_levels = permissible_stability_levels;
    }

    pub fn init_instance(&mut self, instance: InstanceInfo) {
        debug!(name = %instance.name, version = %instance.version, "instance initialized");
        self.instance = Some(instance);
    }

    // ------------------------------------------------------ accessors

    pub fn application_id(&self) -> &str {
        &self.application_id
    }

    pub fn application_name(&self) -> &str {
        &self.application_name
    }

    pub fn application_version(&self) -> &Version {
        &self.application_version
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn build_type(&self) -> BuildType {
        self.build_type
    }

    pub fn built_in_stability(&self) -> Stability {
        self.built_in_stability
    }

    pub fn stability(&self) -> Stability {
        self.stability
    }

    pub fn permissible_stability_levels(&self) -> &[Stability] {
        &self.permissible_stability_levels
    }

    pub fn is_stability_permitted(&self, stability: Stability) -> bool {
        self.permissible_stability_levels.contains(&stability)
    }

    pub fn instance(&self) -> Option<&InstanceInfo> {
        self.instance.as_ref()
    }

    // ------------------------------------------------------ highlighting

    /// Whether the environment itself deserves a stability badge: its
    /// tier is less stable than community and at least as unstable as
    /// the tier this build was produced for.
    pub fn highlight_stability(&self) -> bool {
        highlight(self.built_in_stability, self.stability)
    }

    /// Whether the innermost element of a containment chain
    /// `[outer, ..., element]` deserves a stability badge. The element is
    /// highlighted if its tier is less stable than community, at least as
    /// unstable as the environment, and not already covered by a badge on
    /// one of its containers.
    pub fn highlight_stability_of(&self, chain: &[Stability]) -> bool {
        match chain.split_last() {
            None => false,
            Some((element, containers)) => {
                highlight(self.stability, *element)
                    && containers.iter().all(|container| element >= container)
            }
        }
    }
}

fn highlight(base: Stability, stability: Stability) -> bool {
    stability > Stability::Community && stability >= base
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stability::Stability::{Community, Default, Experimental, Preview};

    fn environment(built_in: Stability, stability: Stability) -> Environment {
        let mut environment = Environment::with_values(
            "hal-test",
            "Test Console",
            Version::parse("1.0.0").unwrap(),
            "/",
            BuildType::Development,
            built_in,
        );
        environment.update(stability, Stability::VALUES.to_vec());
        environment
    }

    #[test]
    fn test_defaults_from_properties() {
        let env = Environment::new(&BuildProperties::default());
        assert_eq!(env.application_id(), "undefined");
        assert_eq!(env.application_name(), "undefined");
        assert_eq!(env.application_version(), &Version::empty());
        assert_eq!(env.base(), "/");
        assert_eq!(env.build_type(), BuildType::Development);
        assert_eq!(env.built_in_stability(), Community);
        assert_eq!(env.stability(), Community);
        assert!(env.instance().is_none());
    }

    #[test]
    fn test_injected_properties() {
        let env = Environment::new(
            &BuildProperties::default()
                .with_id("hal")
                .with_name("HAL Management Console")
                .with_version("5.0.0")
                .with_build("production")
                .with_stability("experimental"),
        );
        assert_eq!(env.application_id(), "hal");
        assert_eq!(env.application_version(), &Version::new(5, 0, 0));
        assert_eq!(env.base(), "/");
        assert_eq!(env.build_type(), BuildType::Production);
        assert_eq!(env.built_in_stability(), Experimental);
    }

    #[test]
    fn test_unparsable_version_degrades() {
        let env = Environment::new(&BuildProperties::default().with_version("1.2.3.alpha.4"));
        assert_eq!(env.application_version(), &Version::empty());
    }

    #[test]
    fn test_update_and_instance() {
        let mut env = Environment::new(&BuildProperties::default());
        env.update(Preview, vec![Community, Preview]);
        env.init_instance(InstanceInfo {
            name: "primary".to_string(),
            organization: None,
            version: Version::new(35, 0, 1),
            management_version: Version::new(28, 0, 0),
            operation_mode: OperationMode::Standalone,
            sso: false,
        });

        assert_eq!(env.stability(), Preview);
        assert!(env.is_stability_permitted(Community));
        assert!(!env.is_stability_permitted(Experimental));
        assert_eq!(env.instance().unwrap().name, "primary");
        assert_eq!(
            env.instance().unwrap().operation_mode,
            OperationMode::Standalone
        );
    }

    #[test]
    fn test_highlight() {
        assert!(!environment(Default, Default).highlight_stability());
        assert!(!environment(Default, Community).highlight_stability());
        assert!(environment(Default, Preview).highlight_stability());
        assert!(environment(Default, Experimental).highlight_stability());

        assert!(!environment(Community, Default).highlight_stability());
        assert!(!environment(Community, Community).highlight_stability());
        assert!(environment(Community, Preview).highlight_stability());
        assert!(environment(Community, Experimental).highlight_stability());

        assert!(!environment(Preview, Default).highlight_stability());
        assert!(!environment(Preview, Community).highlight_stability());
        assert!(environment(Preview, Preview).highlight_stability());
        assert!(environment(Preview, Experimental).highlight_stability());

        assert!(!environment(Experimental, Default).highlight_stability());
        assert!(!environment(Experimental, Community).highlight_stability());
        assert!(!environment(Experimental, Preview).highlight_stability());
        assert!(environment(Experimental, Experimental).highlight_stability());
    }

    #[test]
    fn test_highlight_element() {
        // the built-in tier does not matter for element highlighting
        let default_env = environment(Default, Default);
        assert!(!default_env.highlight_stability_of(&[Default]));
        assert!(!default_env.highlight_stability_of(&[Community]));
        assert!(default_env.highlight_stability_of(&[Preview]));
        assert!(default_env.highlight_stability_of(&[Experimental]));

        let community_env = environment(Default, Community);
        assert!(!community_env.highlight_stability_of(&[Default]));
        assert!(!community_env.highlight_stability_of(&[Community]));
        assert!(community_env.highlight_stability_of(&[Preview]));
        assert!(community_env.highlight_stability_of(&[Experimental]));

        let preview_env = environment(Default, Preview);
        assert!(!preview_env.highlight_stability_of(&[Default]));
        assert!(!preview_env.highlight_stability_of(&[Community]));
        assert!(preview_env.highlight_stability_of(&[Preview]));
        assert!(preview_env.highlight_stability_of(&[Experimental]));

        let experimental_env = environment(Default, Experimental);
        assert!(!experimental_env.highlight_stability_of(&[Default]));
        assert!(!experimental_env.highlight_stability_of(&[Community]));
        assert!(!experimental_env.highlight_stability_of(&[Preview]));
        assert!(experimental_env.highlight_stability_of(&[Experimental]));
    }

    #[test]
    fn test_highlight_nested_chain() {
        let env = environment(Default, Default);

        // the innermost element decides
        assert!(!env.highlight_stability_of(&[Default, Default]));
        assert!(!env.highlight_stability_of(&[Default, Community]));
        assert!(env.highlight_stability_of(&[Default, Preview]));
        assert!(env.highlight_stability_of(&[Default, Experimental]));

        // a container badge already covers an equally or less unstable element
        assert!(!env.highlight_stability_of(&[Preview, Default]));
        assert!(!env.highlight_stability_of(&[Preview, Community]));
        assert!(env.highlight_stability_of(&[Preview, Preview]));
        assert!(env.highlight_stability_of(&[Preview, Experimental]));
        assert!(!env.highlight_stability_of(&[Experimental, Preview]));
        assert!(env.highlight_stability_of(&[Experimental, Experimental]));

        // three levels: every container counts, not just the innermost
        assert!(!env.highlight_stability_of(&[Default, Preview, Default]));
        assert!(!env.highlight_stability_of(&[Default, Preview, Community]));
        assert!(env.highlight_stability_of(&[Default, Preview, Preview]));
        assert!(env.highlight_stability_of(&[Default, Preview, Experimental]));
        assert!(!env.highlight_stability_of(&[Default, Experimental, Preview]));
        assert!(env.highlight_stability_of(&[Default, Experimental, Experimental]));
        assert!(!env.highlight_stability_of(&[Experimental, Default, Preview]));
        assert!(env.highlight_stability_of(&[Experimental, Default, Experimental]));
        assert!(env.highlight_stability_of(&[Preview, Default, Preview]));
        assert!(env.highlight_stability_of(&[Community, Default, Preview]));
    }

    #[test]
    fn test_highlight_relative_to_environment() {
        let preview_env = environment(Default, Preview);
        assert!(preview_env.highlight_stability_of(&[Default, Default, Preview]));
        assert!(preview_env.highlight_stability_of(&[Community, Community, Preview]));

        let experimental_env = environment(Default, Experimental);
        assert!(!experimental_env.highlight_stability_of(&[Default, Default, Preview]));
        assert!(experimental_env.highlight_stability_of(&[Default, Default, Experimental]));
        assert!(experimental_env.highlight_stability_of(&[Experimental, Preview, Experimental]));
    }

    #[test]
    fn test_highlight_empty_chain() {
        assert!(!environment(Default, Experimental).highlight_stability_of(&[]));
    }
}
