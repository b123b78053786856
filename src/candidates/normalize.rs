//! String canonicalization and shape heuristics for candidate fields.

/// Reverse-domain prefixes that mark a string as namespace-shaped.
const DOMAIN_PREFIXES: [&str; 4] = ["com", "org", "net", "io"];

/// Check whether a value begins with a reverse-domain-style prefix.
///
/// The prefix must be followed by a non-alphanumeric boundary (or end of
/// string), so `com.example` matches but `company` does not. This is a shape
/// heuristic, not a domain-name parser - `net-works` also matches, and that
/// is acceptable for the call sites below.
#[must_use]
pub fn starts_with_domain(value: &str) -> bool {
    DOMAIN_PREFIXES.iter().any(|prefix| {
        value.strip_prefix(prefix).is_some_and(|rest| {
            rest.chars()
                .next()
                .map_or(true, |c| !c.is_ascii_alphanumeric())
        })
    })
}

/// Expand a hyphen-compound token into progressively shorter variants.
///
/// The full token comes first (it is the most specific candidate), followed
/// by each prefix obtained by dropping one trailing hyphen-delimited segment
/// at a time, down to a single non-empty segment:
/// `jenkins-ci` → `["jenkins-ci", "jenkins"]`, `commons` → `["commons"]`.
#[must_use]
pub fn generate_sub_selections(value: &str) -> Vec<String> {
    let mut selections = Vec::new();
    let mut current = value;
    loop {
        let trimmed = current.trim_end_matches('-');
        if trimmed.is_empty() {
            break;
        }
        selections.push(trimmed.to_string());
        match trimmed.rfind('-') {
            Some(idx) => current = &trimmed[..idx],
            None => break,
        }
    }
    selections
}

/// Canonicalize a free-text vendor name for CPE field matching.
///
/// Trims, lowercases, and collapses internal whitespace runs to `_`
/// (`"Acme Corp"` → `acme_corp`). Empty or whitespace-only input yields an
/// empty string; callers must not emit it as a candidate.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Canonicalize a display-title vendor declaration.
///
/// Corporate suffixes after the first comma are dropped before the same
/// lowercase-with-separator treatment as [`normalize_name`]
/// (`"Red Hat, Inc."` → `red_hat`).
#[must_use]
pub fn normalize_title(title: &str) -> String {
    let base = title.split(',').next().unwrap_or(title);
    normalize_name(base)
}
