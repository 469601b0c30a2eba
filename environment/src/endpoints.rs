use serde::Serialize;

pub const MANAGEMENT: &str = "/management";
pub const UPLOAD: &str = "/management/add-content";
pub const LOGOUT: &str = "/logout";

/// Endpoints derived from the management origin. An empty origin means
/// the console is served by the managed instance itself and all requests
/// stay same-origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    management: String,
    upload: String,
    logout: String,
    same_origin: bool,
}

impl Endpoints {
    pub fn new(origin: &str) -> Endpoints {
        let origin = origin.trim_end_matches('/');
        Endpoints {
            management: format!("{origin}{MANAGEMENT}"),
            upload: format!("{origin}{UPLOAD}"),
            logout: format!("{origin}{LOGOUT}"),
            same_origin: origin.is_empty(),
        }
    }

    /// The endpoint used to execute management operations.
    pub fn management(&self) -> &str {
        &self.management
    }

    /// The endpoint used for file uploads.
    pub fn upload(&self) -> &str {
        &self.upload
    }

    /// The endpoint used for logout.
    pub fn logout(&self) -> &str {
        &self.logout
    }

    pub fn is_same_origin(&self) -> bool {
        self.same_origin
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::new("")
    }
}
