//! Parsing of the interactive profile selection.
//!
//! Input is a comma-separated list of 1-based menu indices, or `all` (or an
//! empty line) for the whole registry. The parser never fails: anything it
//! cannot honor degrades to the full registry, with a flag so the caller can
//! surface a warning.

use crate::profile::ScanProfile;

/// Resolved selection plus whether the input had to be discarded.
#[derive(Clone, Debug)]
pub struct Picks<'a> {
    /// Profiles to run, in the order the user listed them.
    pub profiles: Vec<&'a ScanProfile>,
    /// Set when the input was unusable and the full registry was substituted.
    pub used_fallback: bool,
}

impl<'a> Picks<'a> {
    pub fn all(registry: &'a [ScanProfile]) -> Self {
        Self {
            profiles: registry.iter().collect(),
            used_fallback: false,
        }
    }

    fn fallback(registry: &'a [ScanProfile]) -> Self {
        Self {
            used_fallback: true,
            ..Self::all(registry)
        }
    }
}

/// Resolves a selection string against `registry`.
///
/// Out-of-range indices are skipped silently; a single non-numeric token
/// invalidates the whole list. Both a fully invalid list and an empty
/// surviving selection fall back to the complete registry.
pub fn parse_picks<'a>(input: &str, registry: &'a [ScanProfile]) -> Picks<'a> {
    let normalized = input.trim().to_ascii_lowercase();
    if normalized.is_empty() || normalized == "all" {
        return Picks::all(registry);
    }

    let mut indices: Vec<usize> = Vec::new();
    for token in normalized.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        match token.parse::<usize>() {
            Ok(index) => indices.push(index),
            Err(_) => return Picks::fallback(registry),
        }
    }

    let selected: Vec<&ScanProfile> = indices
        .into_iter()
        .filter_map(|index| index.checked_sub(1).and_then(|i| registry.get(i)))
        .collect();

    if selected.is_empty() {
        return Picks::fallback(registry);
    }

    Picks {
        profiles: selected,
        used_fallback: false,
    }
}
