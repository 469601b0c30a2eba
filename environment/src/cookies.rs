//! Typed contract for the cookie capability of the hosting runtime.
//!
//! The console stores small named values (settings, the last used
//! connection) in cookies. The actual storage belongs to the hosting
//! browser or runtime; [`CookieStore`] describes only the operations the
//! console consumes, so the rest of the code never touches the external
//! library surface directly. [`MemoryCookies`] is an in-process
//! implementation used by tests and headless tooling.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Options recognized when writing a cookie.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookieOptions {
    /// Lifetime in days. `None` creates a session cookie; a value `<= 0`
    /// expires the cookie immediately.
    pub expires: Option<i64>,
}

impl CookieOptions {
    pub fn expires_in_days(days: i64) -> CookieOptions {
        CookieOptions {
            expires: Some(days),
        }
    }
}

pub trait CookieStore: Send + Sync {
    /// The current value of the named cookie, `None` if unset or expired.
    fn get(&self, name: &str) -> Option<String>;

    /// Writes the named cookie and returns the written value.
    fn set(&self, name: &str, value: &str, options: CookieOptions) -> String;

    fn remove(&self, name: &str);
}

#[derive(Debug, Clone)]
struct StoredCookie {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

/// Cookie store backed by process memory.
#[derive(Debug, Default)]
pub struct MemoryCookies {
    jar: Mutex<HashMap<String, StoredCookie>>,
}

impl MemoryCookies {
    pub fn new() -> MemoryCookies {
        MemoryCookies::default()
    }

    fn jar(&self) -> std::sync::MutexGuard<'_, HashMap<String, StoredCookie>> {
        self.jar.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CookieStore for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        let jar = self.jar();
        let cookie = jar.get(name)?;
        match cookie.expires_at {
            Some(expires_at) if expires_at <= Utc::now() => None,
            _ => Some(cookie.value.clone()),
        }
    }

    fn set(&self, name: &str, value: &str, options: CookieOptions) -> String {
        let expires_at = options.expires.map(|days| Utc::now() + Duration::days(days));
        self.jar().insert(
            name.to_string(),
            StoredCookie {
                value: value.to_string(),
                expires_at,
            },
        );
        value.to_string()
    }

    fn remove(&self, name: &str) {
        self.jar().remove(name);
    }
}
