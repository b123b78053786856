//! Vendor candidate derivation for RPM packages.
//!
//! RPM headers declare the vendor outright, so this path is a single-field
//! extraction with no group-ID mining.

use crate::model::{Package, PackageMetadata};

use super::field_set::{FieldCandidate, FieldCandidateSet};
use super::normalize::normalize_title;

/// Derive vendor candidates from an RPM package's declared vendor field.
pub(crate) fn candidate_vendors(pkg: &Package) -> FieldCandidateSet {
    let mut vendors = FieldCandidateSet::new();

    let metadata = match pkg.metadata.as_ref() {
        Some(PackageMetadata::Rpm(metadata)) => metadata,
        _ => return vendors,
    };

    if let Some(vendor) = &metadata.vendor {
        vendors.add(FieldCandidate::fixed(normalize_title(vendor)));
    }

    vendors
}
