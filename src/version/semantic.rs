//! Strict semantic versions.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use super::update::VersionParts;
use crate::error::{BootstrapError, Result};

/// Pattern suggested by semver.org, anchored on both ends.
static SEMVER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(0|[1-9]\d*)\.(0|[1-9]\d*)\.(0|[1-9]\d*)(?:-((?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*)(?:\.(?:0|[1-9]\d*|\d*[a-zA-Z-][0-9a-zA-Z-]*))*))?(?:\+([0-9a-zA-Z-]+(?:\.[0-9a-zA-Z-]+)*))?$",
    )
    .expect("SEMVER_REGEX must compile")
});

/// A semantic version (`1.2.3`, `1.0.0-rc.1+build.5`).
///
/// Pre-release and build metadata are accepted but not retained; equality
/// and display only consider the numeric core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SemanticVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl SemanticVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    pub fn increment_major(&mut self, by: u64) {
        self.major += by;
    }

    pub fn increment_minor(&mut self, by: u64) {
        self.minor += by;
    }

    pub fn increment_patch(&mut self, by: u64) {
        self.patch += by;
    }
}

impl FromStr for SemanticVersion {
    type Err = BootstrapError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || BootstrapError::InvalidVersion {
            version: s.to_string(),
        };
        let caps = SEMVER_REGEX.captures(s.trim()).ok_or_else(invalid)?;
        let part = |i: usize| -> Result<u64> { caps[i].parse().map_err(|_| invalid()) };

        Ok(Self {
            major: part(1)?,
            minor: part(2)?,
            patch: part(3)?,
        })
    }
}

impl fmt::Display for SemanticVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl VersionParts for SemanticVersion {
    fn major(&self) -> u64 {
        self.major
    }

    fn minor(&self) -> u64 {
        self.minor
    }

    fn patch(&self) -> Option<u64> {
        Some(self.patch)
    }
}
