//! In-memory index over the documentation corpus.
//!
//! All derived maps are keyed by ASCII-uppercase strings so id, alias,
//! parent, and tag lookups are case-insensitive and O(1). The index is
//! append-only: entries are never removed individually, only via `clear`.

use std::collections::HashMap;

use crate::entry::DocEntry;

#[derive(Debug, Clone, Default)]
pub struct DocIndex {
    entries: Vec<DocEntry>,
    by_id: HashMap<String, usize>,
    by_alias: HashMap<String, usize>,
    by_parent: HashMap<String, Vec<usize>>,
    by_tag: HashMap<String, Vec<usize>>,
}

impl DocIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DocEntry>,
    {
        let mut index = Self::new();
        for entry in entries {
            index.add_entry(entry);
        }
        tracing::debug!(count = index.len(), "Built documentation index");
        index
    }

    pub fn add_entry(&mut self, entry: DocEntry) {
        let idx = self.entries.len();
        self.by_id.entry(entry.id.to_ascii_uppercase()).or_insert(idx);
        for alias in &entry.aliases {
            self.by_alias
                .entry(alias.to_ascii_uppercase())
                .or_insert(idx);
        }
        if let Some(parent) = &entry.parent_structure {
            self.by_parent
                .entry(parent.to_ascii_uppercase())
                .or_default()
                .push(idx);
        }
        for tag in &entry.tags {
            self.by_tag
                .entry(tag.to_ascii_uppercase())
                .or_default()
                .push(idx);
        }
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_id.clear();
        self.by_alias.clear();
        self.by_parent.clear();
        self.by_tag.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[DocEntry] {
        &self.entries
    }

    pub fn get_by_id(&self, id: &str) -> Option<&DocEntry> {
        self.by_id
            .get(&id.to_ascii_uppercase())
            .map(|&idx| &self.entries[idx])
    }

    /// Resolve a name as an entry id first, then as an alias.
    pub fn get_by_id_or_alias(&self, name: &str) -> Option<&DocEntry> {
        let key = name.to_ascii_uppercase();
        self.by_id
            .get(&key)
            .or_else(|| self.by_alias.get(&key))
            .map(|&idx| &self.entries[idx])
    }

    pub fn get_by_parent(&self, structure_name: &str) -> Vec<&DocEntry> {
        self.indexed_list(&self.by_parent, structure_name)
    }

    pub fn get_by_tag(&self, tag: &str) -> Vec<&DocEntry> {
        self.indexed_list(&self.by_tag, tag)
    }

    fn indexed_list(&self, map: &HashMap<String, Vec<usize>>, key: &str) -> Vec<&DocEntry> {
        map.get(&key.to_ascii_uppercase())
            .map(|indices| indices.iter().map(|&idx| &self.entries[idx]).collect())
            .unwrap_or_default()
    }

    /// Ranked substring/prefix search for exploratory lookup.
    ///
    /// Scores: exact id 100, id prefix 90, id substring 80, name prefix 75,
    /// exact name 70, name substring 60, alias substring 50, exact tag 40,
    /// description substring 30. Ties keep corpus order. This is not the
    /// typo-suggestion path; that lives in the validator.
    pub fn search(&self, query: &str, max_results: usize) -> Vec<&DocEntry> {
        let needle = query.trim().to_ascii_uppercase();
        if needle.is_empty() || max_results == 0 {
            return Vec::new();
        }
        let mut scored: Vec<(i32, &DocEntry)> = self
            .entries
            .iter()
            .filter_map(|entry| {
                let score = score_entry(entry, &needle);
                (score > 0).then_some((score, entry))
            })
            .collect();
        // Stable sort keeps input order for equal scores.
        scored.sort_by_key(|(score, _)| std::cmp::Reverse(*score));
        scored
            .into_iter()
            .take(max_results)
            .map(|(_, entry)| entry)
            .collect()
    }
}

fn score_entry(entry: &DocEntry, needle: &str) -> i32 {
    let id = entry.id.to_ascii_uppercase();
    if id == needle {
        return 100;
    }
    if id.starts_with(needle) {
        return 90;
    }
    if id.contains(needle) {
        return 80;
    }
    let name = entry.name.to_ascii_uppercase();
    if name.starts_with(needle) {
        return 75;
    }
    if name == needle {
        return 70;
    }
    if name.contains(needle) {
        return 60;
    }
    if entry
        .aliases
        .iter()
        .any(|alias| alias.to_ascii_uppercase().contains(needle))
    {
        return 50;
    }
    if entry
        .tags
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(needle))
    {
        return 40;
    }
    if let Some(description) = &entry.description
        && description.to_ascii_uppercase().contains(needle)
    {
        return 30;
    }
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::DocEntryKind;

    fn entry(id: &str, name: &str) -> DocEntry {
        DocEntry::new(id, name, DocEntryKind::Suffix).unwrap()
    }

    fn sample_index() -> DocIndex {
        DocIndex::from_entries([
            DocEntry::new("VESSEL", "VESSEL", DocEntryKind::Structure)
                .unwrap()
                .with_alias("SHIP")
                .with_tag("vessel"),
            entry("VESSEL:ALTITUDE", "ALTITUDE").with_parent("VESSEL"),
            entry("VESSEL:APOAPSIS", "APOAPSIS")
                .with_parent("VESSEL")
                .with_description("Current apoapsis altitude above sea level"),
        ])
    }

    #[test]
    fn id_lookup_is_case_insensitive() {
        let index = sample_index();
        assert!(index.get_by_id("vessel:altitude").is_some());
        assert!(index.get_by_id("VESSEL:PERIAPSIS").is_none());
    }

    #[test]
    fn alias_resolves_to_entry() {
        let index = sample_index();
        let entry = index.get_by_id_or_alias("ship").unwrap();
        assert_eq!(entry.id, "VESSEL");
    }

    #[test]
    fn parent_lists_all_suffixes() {
        let index = sample_index();
        let suffixes = index.get_by_parent("vessel");
        assert_eq!(suffixes.len(), 2);
    }

    #[test]
    fn search_ranks_exact_id_first() {
        let index = sample_index();
        let results = index.search("VESSEL", 10);
        assert_eq!(results[0].id, "VESSEL");
        // Prefix matches on VESSEL:* follow the exact hit.
        assert!(results.len() >= 3);
    }

    #[test]
    fn search_matches_description_last() {
        let index = sample_index();
        let results = index.search("sea level", 10);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id, "VESSEL:APOAPSIS");
    }

    #[test]
    fn search_truncates_to_max_results() {
        let index = sample_index();
        assert_eq!(index.search("VESSEL", 1).len(), 1);
    }

    #[test]
    fn clear_drops_all_entries() {
        let mut index = sample_index();
        index.clear();
        assert!(index.is_empty());
        assert!(index.get_by_id("VESSEL").is_none());
    }
}
