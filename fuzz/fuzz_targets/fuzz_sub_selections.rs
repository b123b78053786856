#![no_main]
use libfuzzer_sys::fuzz_target;

/// Fuzz sub-selection generation.
///
/// Arbitrary UTF-8 input must never panic (hyphen offsets are byte indices)
/// and never produce an empty selection.
fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let selections = cpe_candidates::generate_sub_selections(s);
        assert!(selections.iter().all(|sel| !sel.is_empty()));
    }
});
