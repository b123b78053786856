//! Ordered, deduplicating accumulation of candidate field values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One proposed vendor or product string.
///
/// The value is expected to be normalized (trimmed, case rule applied) by the
/// time it reaches a set. `disallow_sub_selections` tells downstream CPE
/// assembly that the value must be used as-is and not split further.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldCandidate {
    /// Candidate vendor or product string
    pub value: String,
    /// When true, downstream must not derive shortened variants of the value
    #[serde(default)]
    pub disallow_sub_selections: bool,
}

impl FieldCandidate {
    /// Create a candidate that still permits sub-selection downstream
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disallow_sub_selections: false,
        }
    }

    /// Create a candidate that must be used as-is
    pub fn fixed(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            disallow_sub_selections: true,
        }
    }
}

/// Per-value flags tracked by a [`FieldCandidateSet`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
struct CandidateFlags {
    disallow_sub_selections: bool,
}

/// An insertion-ordered, deduplicating set of candidate fields.
///
/// Duplicate values keep their first-insertion position; the
/// `disallow_sub_selections` flag is merged with a logical OR, so once a
/// value is marked as-is it stays that way no matter how often it is added
/// again. Sets are write-once per derivation: there is no removal operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCandidateSet {
    entries: IndexMap<String, CandidateFlags>,
}

impl FieldCandidateSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of distinct candidate values
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the set holds no candidates
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert a candidate, merging flags on collision.
    ///
    /// Empty values are ignored: normalization can collapse a field to
    /// nothing, and an empty candidate is never useful downstream.
    pub fn add(&mut self, candidate: FieldCandidate) {
        if candidate.value.is_empty() {
            return;
        }
        let flags = self.entries.entry(candidate.value).or_default();
        flags.disallow_sub_selections |= candidate.disallow_sub_selections;
    }

    /// True if the value is already present
    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains_key(value)
    }

    /// True if the value is present and marked as-is
    pub fn disallows_sub_selections(&self, value: &str) -> bool {
        self.entries
            .get(value)
            .is_some_and(|flags| flags.disallow_sub_selections)
    }

    /// Union of several sets, in first-seen order across the inputs in the
    /// order given, with the same flag-merge rule as [`Self::add`].
    pub fn merge(sets: impl IntoIterator<Item = Self>) -> Self {
        let mut merged = Self::new();
        for set in sets {
            for candidate in set.iter() {
                merged.add(candidate);
            }
        }
        merged
    }

    /// Candidate values in insertion order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Candidates with their flags, in insertion order
    pub fn iter(&self) -> impl Iterator<Item = FieldCandidate> + '_ {
        self.entries.iter().map(|(value, flags)| FieldCandidate {
            value: value.clone(),
            disallow_sub_selections: flags.disallow_sub_selections,
        })
    }
}

impl FromIterator<FieldCandidate> for FieldCandidateSet {
    fn from_iter<I: IntoIterator<Item = FieldCandidate>>(iter: I) -> Self {
        let mut set = Self::new();
        for candidate in iter {
            set.add(candidate);
        }
        set
    }
}
