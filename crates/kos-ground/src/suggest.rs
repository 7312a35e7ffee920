//! "Did you mean" candidates for unverified identifiers.
//!
//! Ranks every name known to the full index by Levenshtein distance to the
//! failing identifier. Best effort by design: candidates beyond a distance
//! bound are dropped, so invented names may get no suggestion at all.

use std::collections::HashSet;
use std::iter;

use rapidfuzz::distance::levenshtein;

use kos_model::{DocEntry, DocIndex};

pub const MAX_SUGGESTIONS: usize = 3;

/// Closest known names to `query`, nearest first, ties in corpus order.
pub fn suggest(index: &DocIndex, query: &str, limit: usize) -> Vec<String> {
    let needle = query.to_ascii_uppercase();
    if needle.is_empty() || limit == 0 {
        return Vec::new();
    }
    let max_distance = (needle.chars().count() / 3).max(2);

    let mut seen = HashSet::new();
    let mut ranked: Vec<(usize, String)> = Vec::new();
    for entry in index.entries() {
        for candidate in candidate_names(entry) {
            let key = candidate.to_ascii_uppercase();
            if !seen.insert(key.clone()) {
                continue;
            }
            let distance = levenshtein::distance(key.chars(), needle.chars());
            if distance <= max_distance {
                ranked.push((distance, candidate.to_string()));
            }
        }
    }
    // Stable sort keeps corpus order within a distance.
    ranked.sort_by_key(|(distance, _)| *distance);
    ranked
        .into_iter()
        .take(limit)
        .map(|(_, candidate)| candidate)
        .collect()
}

fn candidate_names(entry: &DocEntry) -> impl Iterator<Item = &str> {
    iter::once(entry.id.as_str())
        .chain(entry.id_segments())
        .chain(iter::once(entry.name.as_str()))
        .chain(entry.aliases.iter().map(String::as_str))
}
