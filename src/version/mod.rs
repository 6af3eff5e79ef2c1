//! Version parsing and update classification.
//!
//! Two version flavors are supported:
//!
//! - [`SemanticVersion`] - strict `MAJOR.MINOR.PATCH` as defined by semver.org
//! - [`ReleaseVersion`] - `MAJOR.MINOR[.PATCH]`, the shape Python interpreter
//!   versions are usually requested in (e.g. `3.12` or `3.12.4`)
//!
//! [`update_types`] classifies the difference between two versions and
//! [`UpdateType::greatest`] picks the most significant one.
//!
//! # Example
//!
//! ```
//! use pybootstrap::version::{update_types, ReleaseVersion, UpdateType};
//!
//! let installed: ReleaseVersion = "3.10.4".parse().unwrap();
//! let wanted: ReleaseVersion = "3.12".parse().unwrap();
//! let types = update_types(&installed, &wanted);
//! assert_eq!(UpdateType::greatest(&types), Some(UpdateType::Minor));
//! ```

pub mod release;
pub mod semantic;
pub mod update;

pub use release::ReleaseVersion;
pub use semantic::SemanticVersion;
pub use update::{update_types, UpdateType, VersionParts};
