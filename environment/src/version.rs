use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("invalid version format: {0}")]
    Format(String),

    #[error("invalid number in version: {0}")]
    Number(String),

    #[error("invalid qualifier in version: {0}")]
    Qualifier(String),
}

/// A version as reported by builds and management models:
/// `major.minor.micro` plus an optional qualifier attached with `.`
/// or `-` (so both `1.2.3.Final` and `1.2.3-SNAPSHOT` parse).
///
/// Ordering compares major, minor, and micro numerically, then the
/// qualifier lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Version {
    major: u32,
    minor: u32,
    micro: u32,
    qualifier: String,
}

impl Version {
    /// The version `0.0.0` without qualifier. Empty or missing version
    /// strings parse to this value.
    pub fn empty() -> Version {
        Version {
            major: 0,
            minor: 0,
            micro: 0,
            qualifier: String::new(),
        }
    }

    pub fn new(major: u32, minor: u32, micro: u32) -> Version {
        Version {
            major,
            minor,
            micro,
            qualifier: String::new(),
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Version {
        self.qualifier = qualifier.into();
        self
    }

    /// Parses a version string. An empty string yields [`Version::empty`];
    /// trailing segments beyond the qualifier, negative numbers, and
    /// qualifier characters outside `[A-Za-z0-9_-]` are errors.
    pub fn parse(value: &str) -> Result<Version, VersionError> {
        let value = value.trim();
        if value.is_empty() {
            return Ok(Version::empty());
        }

        let (numeric, qualifier) = match value.find('-') {
            Some(index) => (&value[..index], Some(&value[index + 1..])),
            None => (value, None),
        };

        let mut segments: Vec<&str> = numeric.split('.').collect();
        let qualifier = match (segments.len(), qualifier) {
            (0..=3, q) => q,
            (4, None) => segments.pop(),
            _ => return Err(VersionError::Format(value.to_string())),
        };

        let qualifier = match qualifier {
            Some(q) => {
                if q.is_empty()
                    || !q
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
                {
                    return Err(VersionError::Qualifier(value.to_string()));
                }
                q.to_string()
            }
            None => String::new(),
        };

        let mut numbers = segments.iter().map(|segment| {
            segment
                .parse::<u32>()
                .map_err(|_| VersionError::Number(value.to_string()))
        });
        Ok(Version {
            major: numbers.next().transpose()?.unwrap_or(0),
            minor: numbers.next().transpose()?.unwrap_or(0),
            micro: numbers.next().transpose()?.unwrap_or(0),
            qualifier,
        })
    }

    pub fn major(&self) -> u32 {
        self.major
    }

    pub fn minor(&self) -> u32 {
        self.minor
    }

    pub fn micro(&self) -> u32 {
        self.micro
    }

    pub fn qualifier(&self) -> &str {
        &self.qualifier
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(value: &str) -> Result<Version, VersionError> {
        Version::parse(value)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if !self.qualifier.is_empty() {
            write!(f, ".{}", self.qualifier)?;
        }
        Ok(())
    }
}
