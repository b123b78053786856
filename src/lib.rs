//! **Candidate identity fields for CPE construction.**
//!
//! `cpe-candidates` derives plausible vendor and product name guesses for a
//! cataloged software package, for use in building Common Platform
//! Enumeration (CPE) identifiers during vulnerability matching. Input is
//! structured package metadata - Maven-style build coordinates and manifest
//! key-value metadata recovered from a packaged artifact, or a declared RPM
//! vendor field. Output is an ordered, deduplicated list of candidate
//! strings for a downstream CPE-assembly stage to combine with version and
//! other fields and intersect against a real CPE dictionary.
//!
//! The heuristics are empirically derived and deliberately permissive:
//! candidates are *plausible*, not verified, and the rules encode years of
//! real-world metadata abuse (namespaces pasted into artifact-ID fields,
//! `plugin`/`client` packaging noise, compound tokens like `jenkins-ci`).
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the read-only package view - [`model::Package`] with a
//!   tagged [`model::PackageMetadata`] union over the supported ecosystems.
//!   Absent or mismatched metadata is never an error; every extractor fails
//!   soft to an empty result.
//! - **[`candidates`]**: the derivation itself - [`candidate_vendors`] and
//!   [`candidate_products`] plus the [`FieldCandidateSet`] accumulator and
//!   the string heuristics they are built from.
//!
//! ## Getting Started
//!
//! ```
//! use cpe_candidates::model::{
//!     JavaArchiveMetadata, MavenCoordinates, Package, PackageMetadata,
//! };
//! use cpe_candidates::{candidate_products, candidate_vendors};
//!
//! let pkg = Package::new("commons-io").with_metadata(PackageMetadata::JavaArchive(
//!     JavaArchiveMetadata {
//!         pom: Some(MavenCoordinates::new("org.apache.commons", "commons-io")),
//!         manifest: None,
//!     },
//! ));
//!
//! let vendors = candidate_vendors(&pkg);
//! assert!(vendors.values().any(|v| v == "apache"));
//!
//! let products = candidate_products(&pkg);
//! assert_eq!(products.first().map(String::as_str), Some("commons-io"));
//! ```
//!
//! All derivation is synchronous, side-effect-free, and allocation-local:
//! calls on different packages share nothing and may run in parallel without
//! coordination.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections add nothing to an
    // infallible, panic-free API
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod candidates;
pub mod model;

// Re-export main types for convenience
pub use candidates::{
    candidate_products, candidate_vendors, generate_sub_selections, normalize_name,
    normalize_title, starts_with_domain, FieldCandidate, FieldCandidateSet,
};
pub use model::{
    JavaArchiveMetadata, JavaManifest, MavenCoordinates, Package, PackageMetadata, RpmMetadata,
};
