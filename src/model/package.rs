//! Package records and their per-ecosystem metadata variants.

use serde::{Deserialize, Serialize};

use super::JavaManifest;

/// A cataloged software package.
///
/// The candidate-derivation code only ever reads a package; it is constructed
/// and owned by the surrounding cataloging pipeline. A package without
/// metadata (or with a metadata variant the caller did not expect) is not an
/// error - every extractor fails soft and yields an empty result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Package {
    /// Package name as cataloged
    pub name: String,
    /// Version, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Ecosystem-specific metadata, when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PackageMetadata>,
}

impl Package {
    /// Create a package with the given name and no metadata
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Attach metadata to the package
    #[must_use]
    pub fn with_metadata(mut self, metadata: PackageMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }
}

/// Ecosystem-specific package metadata.
///
/// Explicit tagged union over the metadata kinds relevant to candidate
/// derivation. Extractors pattern-match on the variant they understand and
/// return empty results for everything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum PackageMetadata {
    /// Metadata recovered from a Java archive (POM coordinates and/or
    /// manifest)
    JavaArchive(JavaArchiveMetadata),
    /// Metadata recovered from an RPM database record
    Rpm(RpmMetadata),
}

/// Metadata recovered from a Java archive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JavaArchiveMetadata {
    /// Build coordinates from an embedded `pom.properties`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pom: Option<MavenCoordinates>,
    /// Parsed `MANIFEST.MF` contents
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manifest: Option<JavaManifest>,
}

/// Maven-style build coordinates.
///
/// Either field may be empty or malformed (no dots where expected, mixed
/// casing, a namespace pasted into the artifact-ID field) - publishers get
/// these wrong often enough that the extraction heuristics treat both fields
/// with suspicion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MavenCoordinates {
    /// Dot-delimited namespace, e.g. `org.jenkins-ci.plugins`
    #[serde(default)]
    pub group_id: String,
    /// Short artifact name, e.g. `git`
    #[serde(default)]
    pub artifact_id: String,
}

impl MavenCoordinates {
    /// Create coordinates from a group ID and artifact ID
    pub fn new(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
        }
    }
}

/// Metadata recovered from an RPM database record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpmMetadata {
    /// Vendor as declared in the RPM header, e.g. `Red Hat, Inc.`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_builder() {
        let pkg = Package::new("commons-io").with_metadata(PackageMetadata::JavaArchive(
            JavaArchiveMetadata {
                pom: Some(MavenCoordinates::new("commons-io", "commons-io")),
                manifest: None,
            },
        ));

        assert_eq!(pkg.name, "commons-io");
        assert!(matches!(
            pkg.metadata,
            Some(PackageMetadata::JavaArchive(_))
        ));
    }

    #[test]
    fn test_metadata_serde_roundtrip() {
        let pkg = Package {
            name: "httpd".to_string(),
            version: Some("2.4.57".to_string()),
            metadata: Some(PackageMetadata::Rpm(RpmMetadata {
                vendor: Some("Red Hat, Inc.".to_string()),
            })),
        };

        let json = serde_json::to_string(&pkg).expect("serialize");
        let back: Package = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(pkg, back);
    }
}
