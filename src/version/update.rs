//! Update-type classification between two versions.

use std::fmt;

/// Numeric components shared by every version flavor.
pub trait VersionParts {
    fn major(&self) -> u64;
    fn minor(&self) -> u64;
    /// `None` when the version leaves the patch implicit.
    fn patch(&self) -> Option<u64>;
}

/// Kind of change between two versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateType {
    Major,
    Minor,
    Patch,
    /// Same version installed again; never outranks a real update.
    Reseat,
}

impl UpdateType {
    fn rank(self) -> u8 {
        match self {
            Self::Reseat => 0,
            Self::Patch => 1,
            Self::Minor => 2,
            Self::Major => 3,
        }
    }

    /// The most significant update among `types` (major > minor > patch).
    ///
    /// Returns `None` for an empty slice or one holding only reseats.
    pub fn greatest(types: &[UpdateType]) -> Option<UpdateType> {
        types
            .iter()
            .copied()
            .filter(|t| *t != Self::Reseat)
            .max_by_key(|t| t.rank())
    }
}

impl fmt::Display for UpdateType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Patch => "patch",
            Self::Reseat => "reseat",
        };
        f.write_str(s)
    }
}

/// Every component that differs between `from` and `to`.
pub fn update_types(from: &impl VersionParts, to: &impl VersionParts) -> Vec<UpdateType> {
    let mut types = Vec::new();
    if from.major() != to.major() {
        types.push(UpdateType::Major);
    }
    if from.minor() != to.minor() {
        types.push(UpdateType::Minor);
    }
    if from.patch() != to.patch() {
        types.push(UpdateType::Patch);
    }
    types
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::{ReleaseVersion, SemanticVersion};

    #[test]
    fn greatest_prefers_major() {
        let types = [UpdateType::Patch, UpdateType::Major, UpdateType::Minor];
        assert_eq!(UpdateType::greatest(&types), Some(UpdateType::Major));
    }

    #[test]
    fn greatest_ignores_reseat() {
        let types = [UpdateType::Patch, UpdateType::Reseat, UpdateType::Minor];
        assert_eq!(UpdateType::greatest(&types), Some(UpdateType::Minor));
        assert_eq!(UpdateType::greatest(&[UpdateType::Reseat]), None);
    }

    #[test]
    fn greatest_of_empty_is_none() {
        assert_eq!(UpdateType::greatest(&[]), None);
    }

    #[test]
    fn identical_versions_have_no_updates() {
        let a = SemanticVersion::new(1, 2, 3);
        assert!(update_types(&a, &a).is_empty());
    }

    #[test]
    fn reports_every_differing_component() {
        let a = SemanticVersion::new(1, 2, 3);
        let b = SemanticVersion::new(2, 0, 3);
        assert_eq!(
            update_types(&a, &b),
            vec![UpdateType::Major, UpdateType::Minor]
        );
    }

    #[test]
    fn implicit_patch_differs_from_explicit() {
        let a = ReleaseVersion::new(3, 12, None);
        let b = ReleaseVersion::new(3, 12, Some(4));
        assert_eq!(update_types(&a, &b), vec![UpdateType::Patch]);
    }

    #[test]
    fn minor_only_change_between_implicit_patches() {
        let a = ReleaseVersion::new(2, 333, None);
        let b = ReleaseVersion::new(2, 334, None);
        assert_eq!(update_types(&a, &b), vec![UpdateType::Minor]);
    }

    #[test]
    fn mixes_version_flavors() {
        let installed = SemanticVersion::new(3, 10, 4);
        let wanted = ReleaseVersion::new(3, 12, None);
        let types = update_types(&installed, &wanted);
        assert_eq!(UpdateType::greatest(&types), Some(UpdateType::Minor));
    }
}
