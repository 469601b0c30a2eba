pub mod cookies;
pub mod endpoints;
pub mod environment;
pub mod properties;
pub mod query;
pub mod stability;
pub mod version;

pub use cookies::{CookieOptions, CookieStore, MemoryCookies};
pub use endpoints::Endpoints;
pub use environment::{BuildType, Environment, InstanceInfo, OperationMode};
pub use properties::BuildProperties;
pub use stability::Stability;
pub use version::{Version, VersionError};

pub mod prelude {
    pub use crate::cookies::*;
    pub use crate::endpoints::*;
    pub use crate::environment::*;
    pub use crate::properties::*;
    pub use crate::stability::*;
    pub use crate::version::*;
}
