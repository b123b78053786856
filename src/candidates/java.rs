//! Vendor/product candidate derivation for Java archive packages.
//!
//! Group IDs are mined from two places: the POM build coordinates and a fixed
//! list of manifest fields that publishers sometimes fill with namespace-like
//! values. Vendors come from group-ID segments and from manifest vendor
//! declarations; products come from the artifact ID plus the group-ID
//! segments that plausibly name the umbrella project. The rules are
//! empirically derived and order-sensitive - treat every skip condition below
//! as load-bearing.

use indexmap::IndexSet;

use crate::model::{JavaArchiveMetadata, JavaManifest, MavenCoordinates, Package, PackageMetadata};

use super::field_set::{FieldCandidate, FieldCandidateSet};
use super::normalize::{generate_sub_selections, normalize_name, starts_with_domain};

/// Group-ID segments that indicate packaging noise rather than a product.
const FORBIDDEN_PRODUCT_GROUP_ID_FIELDS: [&str; 3] = ["plugin", "plugins", "client"];

/// Group-ID segments that indicate packaging noise rather than a vendor.
const FORBIDDEN_VENDOR_GROUP_ID_FIELDS: [&str; 2] = ["plugin", "plugins"];

/// Manifest fields observed in the wild to sometimes carry group-ID-like
/// values, in scan order.
const MANIFEST_GROUP_ID_FIELDS: [&str; 10] = [
    "Extension-Name",
    "Automatic-Module-Name",
    "Specification-Vendor",
    "Implementation-Vendor",
    "Bundle-SymbolicName",
    "Implementation-Vendor-Id",
    "Package",
    "Implementation-Title",
    "Main-Class",
    "Bundle-Activator",
];

/// Manifest fields that carry free-text vendor names.
const MANIFEST_NAME_FIELDS: [&str; 2] = ["Specification-Vendor", "Implementation-Vendor"];

/// Derive product candidates for a Java archive package.
pub(crate) fn candidate_products(pkg: &Package) -> Vec<String> {
    products_from_artifact_and_group_ids(
        &artifact_id_from_java_package(pkg),
        &group_ids_from_java_package(pkg),
    )
}

/// Derive vendor candidates for a Java archive package.
pub(crate) fn candidate_vendors(pkg: &Package) -> FieldCandidateSet {
    let gid_vendors = vendors_from_group_ids(&group_ids_from_java_package(pkg));
    let name_vendors = vendors_from_manifest_names(pkg);
    FieldCandidateSet::merge([gid_vendors, name_vendors])
}

fn java_metadata(pkg: &Package) -> Option<&JavaArchiveMetadata> {
    match pkg.metadata.as_ref() {
        Some(PackageMetadata::JavaArchive(metadata)) => Some(metadata),
        _ => None,
    }
}

/// Mine manifest vendor declarations for vendor-name candidates.
///
/// Domain-shaped values are deliberately skipped: those are group IDs and get
/// segmented by [`vendors_from_group_ids`] instead, so the two paths never
/// double-report the same source value.
fn vendors_from_manifest_names(pkg: &Package) -> FieldCandidateSet {
    let mut vendors = FieldCandidateSet::new();

    let manifest = match java_metadata(pkg).and_then(|metadata| metadata.manifest.as_ref()) {
        Some(manifest) => manifest,
        None => return vendors,
    };

    for name in MANIFEST_NAME_FIELDS {
        for section in manifest.sections() {
            if let Some(value) = section.get(name) {
                if !starts_with_domain(value) {
                    vendors.add(FieldCandidate::fixed(normalize_name(value)));
                }
            }
        }
    }

    vendors
}

/// Segment group IDs into vendor candidates.
///
/// Index 0 is the TLD-like segment and never vendor-indicative. Every
/// surviving segment is expanded through sub-selection so a compound like
/// `jenkins-ci` also proposes `jenkins`; the expansions are final and marked
/// as-is.
fn vendors_from_group_ids(group_ids: &[String]) -> FieldCandidateSet {
    let mut vendors = FieldCandidateSet::new();
    for group_id in group_ids {
        for (i, field) in group_id.split('.').enumerate() {
            let field = field.trim();

            if field.is_empty() {
                continue;
            }

            if FORBIDDEN_VENDOR_GROUP_ID_FIELDS
                .iter()
                .any(|forbidden| field.eq_ignore_ascii_case(forbidden))
            {
                continue;
            }

            if i == 0 {
                continue;
            }

            // e.g. jenkins-ci -> [jenkins-ci, jenkins]
            for value in generate_sub_selections(field) {
                vendors.add(FieldCandidate::fixed(value));
            }
        }
    }

    vendors
}

/// Combine the artifact ID and qualifying group-ID segments into product
/// candidates, artifact ID first.
fn products_from_artifact_and_group_ids(artifact_id: &str, group_ids: &[String]) -> Vec<String> {
    let mut products: IndexSet<String> = IndexSet::new();
    if !artifact_id.is_empty() {
        products.insert(artifact_id.to_string());
    }

    for group_id in group_ids {
        let is_plugin = artifact_id.contains("plugin") || group_id.contains("plugin");

        for (i, field) in group_id.split('.').enumerate() {
            let field = field.trim();

            if field.is_empty() {
                continue;
            }

            // don't suggest a name that implies the package is a plugin or client
            if FORBIDDEN_PRODUCT_GROUP_ID_FIELDS
                .iter()
                .any(|forbidden| field.eq_ignore_ascii_case(forbidden))
            {
                continue;
            }

            // the first two segments are TLD + registered owner, not the product
            if i <= 1 {
                continue;
            }

            // umbrella projects tend to have sub-components that start or end
            // with the project name; keep segments that look like the umbrella
            // project itself, not auxiliary qualifiers
            let could_be_project_name =
                artifact_id.starts_with(field) || artifact_id.ends_with(field);
            if artifact_id.is_empty() || (could_be_project_name && !is_plugin) {
                products.insert(field.to_string());
            }
        }
    }

    products.into_iter().collect()
}

/// Extract the artifact ID, unless it is namespace-shaped.
///
/// An artifact ID that classifies as a domain *and* contains a dot is almost
/// certainly a group ID pasted into the wrong field; using it as a product
/// candidate would pollute downstream matching.
fn artifact_id_from_java_package(pkg: &Package) -> String {
    let pom = match java_metadata(pkg).and_then(|metadata| metadata.pom.as_ref()) {
        Some(pom) => pom,
        None => return String::new(),
    };

    let artifact_id = pom.artifact_id.trim();
    if starts_with_domain(artifact_id) && artifact_id.split('.').count() > 1 {
        tracing::trace!(
            artifact_id,
            "artifact ID looks like a group ID, not using it as a product"
        );
        return String::new();
    }
    artifact_id.to_string()
}

/// Collect group-ID strings from every source on the package.
fn group_ids_from_java_package(pkg: &Package) -> Vec<String> {
    let metadata = match java_metadata(pkg) {
        Some(metadata) => metadata,
        None => return Vec::new(),
    };

    let mut group_ids = Vec::new();
    if let Some(pom) = &metadata.pom {
        group_ids.extend(group_ids_from_maven_coordinates(pom));
    }
    if let Some(manifest) = &metadata.manifest {
        group_ids.extend(group_ids_from_manifest(manifest));
    }
    group_ids
}

fn group_ids_from_maven_coordinates(pom: &MavenCoordinates) -> Vec<String> {
    let mut group_ids = Vec::new();

    if starts_with_domain(&pom.group_id) {
        group_ids.push(pom.group_id.trim().to_string());
    }

    // sometimes the publisher puts the group ID in the artifact ID field
    if starts_with_domain(&pom.artifact_id) && pom.artifact_id.split('.').count() > 1 {
        tracing::trace!(
            artifact_id = pom.artifact_id.as_str(),
            "treating namespace-shaped artifact ID as a group ID"
        );
        group_ids.push(pom.artifact_id.trim().to_string());
    }

    group_ids
}

/// Mine manifest fields for group-ID-like values.
///
/// Field presence alone proves nothing - `Implementation-Title` is usually a
/// prose title - so only domain-shaped values are taken. Seen carrying real
/// group IDs in jenkins plugin archives, where `pom.properties` is often
/// absent entirely.
fn group_ids_from_manifest(manifest: &JavaManifest) -> Vec<String> {
    let mut group_ids = Vec::new();
    for name in MANIFEST_GROUP_ID_FIELDS {
        for section in manifest.sections() {
            if let Some(value) = section.get(name) {
                if starts_with_domain(value) {
                    group_ids.push(value.clone());
                }
            }
        }
    }
    group_ids
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;

    fn java_package(group_id: &str, artifact_id: &str) -> Package {
        Package::new(artifact_id).with_metadata(PackageMetadata::JavaArchive(
            JavaArchiveMetadata {
                pom: Some(MavenCoordinates::new(group_id, artifact_id)),
                manifest: None,
            },
        ))
    }

    fn manifest_package(main: &[(&str, &str)]) -> Package {
        let manifest = JavaManifest {
            main: main
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
            ..Default::default()
        };
        Package::new("test").with_metadata(PackageMetadata::JavaArchive(JavaArchiveMetadata {
            pom: None,
            manifest: Some(manifest),
        }))
    }

    #[test]
    fn test_group_ids_from_coordinates() {
        let pkg = java_package("org.jenkins-ci.plugins", "git");
        assert_eq!(
            group_ids_from_java_package(&pkg),
            vec!["org.jenkins-ci.plugins"]
        );
    }

    #[test]
    fn test_misplaced_group_id_in_artifact_field() {
        // publisher pasted the namespace into the artifact ID field
        let pkg = java_package("", "commons.io");
        assert_eq!(group_ids_from_java_package(&pkg), vec!["commons.io"]);
        assert_eq!(artifact_id_from_java_package(&pkg), "");
    }

    #[test]
    fn test_namespace_in_both_fields_yields_two_group_ids() {
        let pkg = java_package("org.apache.commons", "commons.io");
        assert_eq!(
            group_ids_from_java_package(&pkg),
            vec!["org.apache.commons", "commons.io"]
        );
    }

    #[test]
    fn test_artifact_id_plain_name_is_kept() {
        let pkg = java_package("org.apache.commons", "commons-io");
        assert_eq!(artifact_id_from_java_package(&pkg), "commons-io");
    }

    #[test]
    fn test_dotless_domain_like_artifact_id_is_kept() {
        // classifies as domain-shaped but has no dot, so it stays an artifact ID
        let pkg = java_package("", "io");
        assert_eq!(artifact_id_from_java_package(&pkg), "io");
    }

    #[test]
    fn test_vendors_from_group_ids_skips_tld_and_forbidden() {
        let vendors = vendors_from_group_ids(&["org.jenkins-ci.plugins".to_string()]);
        let values: Vec<&str> = vendors.values().collect();
        assert_eq!(values, vec!["jenkins-ci", "jenkins"]);
        assert!(vendors.disallows_sub_selections("jenkins-ci"));
        assert!(vendors.disallows_sub_selections("jenkins"));
    }

    #[test]
    fn test_vendors_skip_empty_segments() {
        let vendors = vendors_from_group_ids(&["org..apache".to_string()]);
        let values: Vec<&str> = vendors.values().collect();
        assert_eq!(values, vec!["apache"]);
    }

    #[test]
    fn test_products_plugin_suppression() {
        let products = products_from_artifact_and_group_ids(
            "git",
            &["org.jenkins-ci.plugins".to_string()],
        );
        // the group ID contains "plugin", so no segment survives; only the
        // artifact ID is proposed
        assert_eq!(products, vec!["git"]);
    }

    #[test]
    fn test_products_empty_artifact_emits_segments() {
        let products =
            products_from_artifact_and_group_ids("", &["org.apache.commons".to_string()]);
        assert_eq!(products, vec!["commons"]);
    }

    #[test]
    fn test_products_umbrella_match() {
        let products = products_from_artifact_and_group_ids(
            "tomcat-catalina",
            &["org.apache.tomcat".to_string()],
        );
        // "tomcat" is a prefix of the artifact ID, so the umbrella project
        // name is proposed alongside it
        assert_eq!(products, vec!["tomcat-catalina", "tomcat"]);
    }

    #[test]
    fn test_products_unrelated_segment_not_proposed() {
        let products = products_from_artifact_and_group_ids(
            "guava",
            &["com.google.common".to_string()],
        );
        assert_eq!(products, vec!["guava"]);
    }

    #[test]
    fn test_products_forbidden_client_segment() {
        let products =
            products_from_artifact_and_group_ids("", &["org.example.client".to_string()]);
        assert!(products.is_empty());
    }

    #[test]
    fn test_manifest_group_id_mining() {
        let pkg = manifest_package(&[
            ("Automatic-Module-Name", "org.apache.commons.io"),
            ("Implementation-Title", "Apache Commons IO"),
        ]);
        assert_eq!(
            group_ids_from_java_package(&pkg),
            vec!["org.apache.commons.io"]
        );
    }

    #[test]
    fn test_manifest_vendor_name_routing() {
        // free-text vendor becomes a name candidate
        let pkg = manifest_package(&[("Implementation-Vendor", "Acme Corp")]);
        let vendors = candidate_vendors(&pkg);
        let values: Vec<&str> = vendors.values().collect();
        assert_eq!(values, vec!["acme_corp"]);

        // domain-shaped vendor is routed through the group-ID path instead
        let pkg = manifest_package(&[("Implementation-Vendor", "com.acme")]);
        let vendors = candidate_vendors(&pkg);
        let values: Vec<&str> = vendors.values().collect();
        assert_eq!(values, vec!["acme"]);
    }

    #[test]
    fn test_manifest_named_sections_are_scanned() {
        let mut named = IndexMap::new();
        let mut section = IndexMap::new();
        section.insert(
            "Specification-Vendor".to_string(),
            "CloudBees Inc".to_string(),
        );
        named.insert("lib/analysis.jar".to_string(), section);

        let manifest = JavaManifest {
            main: IndexMap::new(),
            named_sections: named,
        };
        let pkg = Package::new("test").with_metadata(PackageMetadata::JavaArchive(
            JavaArchiveMetadata {
                pom: None,
                manifest: Some(manifest),
            },
        ));

        let vendors = candidate_vendors(&pkg);
        let values: Vec<&str> = vendors.values().collect();
        assert_eq!(values, vec!["cloudbees_inc"]);
    }

    #[test]
    fn test_non_java_metadata_fails_soft() {
        let pkg = Package::new("bash");
        assert!(candidate_vendors(&pkg).is_empty());
        assert!(candidate_products(&pkg).is_empty());
    }
}
