//! Release versions with an optional patch component.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::update::VersionParts;
use crate::error::{BootstrapError, Result};

/// Semver pattern with the patch group made optional.
static RELEASE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)(?:\.(0|[1-9]\d*))?(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("RELEASE_REGEX must compile")
});

/// A `MAJOR.MINOR[.PATCH]` version such as `3.12` or `3.12.4`.
///
/// An omitted patch is implicit: it compares unequal to every explicit
/// patch, so going from `3.12` to `3.12.4` still counts as a patch update.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ReleaseVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: Option<u64>,
}

impl ReleaseVersion {
    pub fn new(major: u64, minor: u64, patch: Option<u64>) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Extract a release version from tool output such as `Python 3.11.4`.
    ///
    /// The first whitespace-separated token that parses wins.
    pub fn find_in(text: &str) -> Option<Self> {
        text.split_whitespace().find_map(|token| token.parse().ok())
    }
}

impl FromStr for ReleaseVersion {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BootstrapError::InvalidVersion {
            version: s.to_string(),
        };
        let caps = RELEASE_REGEX.captures(s.trim()).ok_or_else(invalid)?;
        let major = caps[1].parse().map_err(|_| invalid())?;
        let minor = caps[2].parse().map_err(|_| invalid())?;
        let patch = match caps.get(3) {
            Some(m) => Some(m.as_str().parse().map_err(|_| invalid())?),
            None => None,
        };

        Ok(Self {
            major,
            minor,
            patch,
        })
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl VersionParts for ReleaseVersion {
    fn major(&self) -> u64 {
        self.major
    }

    fn minor(&self) -> u64 {
        self.minor
    }

    fn patch(&self) -> Option<u64> {
        self.patch
    }
}
