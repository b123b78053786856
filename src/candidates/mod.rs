//! Candidate vendor/product derivation for CPE construction.
//!
//! Given a cataloged [`Package`], this module proposes plausible vendor and
//! product strings for a downstream CPE-assembly stage to intersect with a
//! real CPE dictionary. Candidates are guesses, not verified identities: the
//! heuristics here favor recall, and the downstream dictionary match is what
//! keeps precision honest.
//!
//! # Example
//!
//! ```
//! use cpe_candidates::model::{
//!     JavaArchiveMetadata, MavenCoordinates, Package, PackageMetadata,
//! };
//! use cpe_candidates::{candidate_products, candidate_vendors};
//!
//! let pkg = Package::new("git").with_metadata(PackageMetadata::JavaArchive(
//!     JavaArchiveMetadata {
//!         pom: Some(MavenCoordinates::new("org.jenkins-ci.plugins", "git")),
//!         manifest: None,
//!     },
//! ));
//!
//! let vendors = candidate_vendors(&pkg);
//! let values: Vec<&str> = vendors.values().collect();
//! assert_eq!(values, vec!["jenkins-ci", "jenkins"]);
//! assert_eq!(candidate_products(&pkg), vec!["git"]);
//! ```

mod field_set;
mod java;
mod normalize;
mod rpm;

pub use field_set::{FieldCandidate, FieldCandidateSet};
pub use normalize::{generate_sub_selections, normalize_name, normalize_title, starts_with_domain};

use crate::model::{Package, PackageMetadata};

/// Propose vendor candidates for a package.
///
/// The result is deduplicated, insertion-ordered, and annotated: candidates
/// marked as-is must not be sub-selected further downstream. A package with
/// no metadata, or a variant with no vendor signal, yields an empty set.
#[must_use]
pub fn candidate_vendors(pkg: &Package) -> FieldCandidateSet {
    match pkg.metadata.as_ref() {
        Some(PackageMetadata::JavaArchive(_)) => java::candidate_vendors(pkg),
        Some(PackageMetadata::Rpm(_)) => rpm::candidate_vendors(pkg),
        None => FieldCandidateSet::new(),
    }
}

/// Propose product candidates for a package, most specific first.
///
/// The result is deduplicated and insertion-ordered, with the artifact ID
/// (when usable) ahead of any group-ID-derived segments. A package with no
/// metadata, or a variant that carries no product signal, yields an empty
/// list.
#[must_use]
pub fn candidate_products(pkg: &Package) -> Vec<String> {
    match pkg.metadata.as_ref() {
        Some(PackageMetadata::JavaArchive(_)) => java::candidate_products(pkg),
        _ => Vec::new(),
    }
}
