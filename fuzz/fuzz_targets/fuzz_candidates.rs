#![no_main]
use libfuzzer_sys::fuzz_target;

use cpe_candidates::model::{
    JavaArchiveMetadata, MavenCoordinates, Package, PackageMetadata,
};
use cpe_candidates::{candidate_products, candidate_vendors};

/// Fuzz full candidate derivation.
///
/// Splits the input into a group-ID half and an artifact-ID half and runs
/// both builders, exercising the domain classifier, segmentation, and every
/// skip rule on arbitrary UTF-8.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let mid = s
            .char_indices()
            .map(|(i, _)| i)
            .nth(s.chars().count() / 2)
            .unwrap_or(0);
        let (group_id, artifact_id) = s.split_at(mid);

        let pkg = Package::new("fuzz").with_metadata(PackageMetadata::JavaArchive(
            JavaArchiveMetadata {
                pom: Some(MavenCoordinates::new(group_id, artifact_id)),
                manifest: None,
            },
        ));

        let vendors = candidate_vendors(&pkg);
        assert!(vendors.values().all(|v| !v.is_empty()));
        let products = candidate_products(&pkg);
        assert!(products.iter().all(|p| !p.is_empty()));
    }
});
