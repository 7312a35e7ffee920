use std::collections::HashMap;

/// Case-insensitive name lookup preserving the first-seen original casing.
#[derive(Debug, Clone, Default)]
pub struct CaseInsensitiveLookup {
    map: HashMap<String, String>,
}

impl CaseInsensitiveLookup {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lookup = Self::default();
        for name in names {
            lookup.insert(name.as_ref());
        }
        lookup
    }

    pub fn insert(&mut self, name: &str) {
        let key = name.to_ascii_uppercase();
        self.map.entry(key).or_insert_with(|| name.to_string());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.map
            .get(&name.to_ascii_uppercase())
            .map(|value| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(&name.to_ascii_uppercase())
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_seen_casing_wins() {
        let lookup = CaseInsensitiveLookup::new(["Ship", "SHIP", "ship"]);
        assert_eq!(lookup.len(), 1);
        assert_eq!(lookup.get("sHiP"), Some("Ship"));
    }

    #[test]
    fn contains_is_case_insensitive() {
        let lookup = CaseInsensitiveLookup::new(["ALTITUDE"]);
        assert!(lookup.contains("altitude"));
        assert!(!lookup.contains("APOAPSIS"));
    }
}
