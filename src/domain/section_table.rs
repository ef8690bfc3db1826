//! Case-insensitive section/key/value table.
//!
//! Names are folded to lowercase for lookup. The casing of the first
//! occurrence is kept for enumeration, and entries enumerate in the order
//! they were first inserted.

use std::collections::HashMap;

/// Name of the implicit section that holds assignments preceding any header.
pub const DEFAULT_SECTION: &str = "Default";

// Per-char lowering, with final sigma folded to medial sigma so `Σ`, `σ`
// and `ς` all compare equal.
fn fold(name: &str) -> String {
    name.chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == 'ς' { 'σ' } else { c })
        .collect()
}

/// Insertion-ordered map keyed by case-insensitive names.
#[derive(Debug, Clone)]
pub struct CaseInsensitiveMap<V> {
    entries: Vec<(String, V)>,
    index: HashMap<String, usize>,
}

impl<V> Default for CaseInsensitiveMap<V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> CaseInsensitiveMap<V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.index.get(&fold(name)).map(|&i| &self.entries[i].1)
    }

    /// Insert or overwrite. The original name of an existing entry is kept.
    pub fn insert(&mut self, name: &str, value: V) -> Option<V> {
        match self.index.get(&fold(name)) {
            Some(&i) => Some(std::mem::replace(&mut self.entries[i].1, value)),
            None => {
                self.index.insert(fold(name), self.entries.len());
                self.entries.push((name.to_string(), value));
                None
            }
        }
    }

    pub fn get_or_insert_with(&mut self, name: &str, make: impl FnOnce() -> V) -> &mut V {
        let i = match self.index.get(&fold(name)) {
            Some(&i) => i,
            None => {
                let i = self.entries.len();
                self.index.insert(fold(name), i);
                self.entries.push((name.to_string(), make()));
                i
            }
        };
        &mut self.entries[i].1
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Key/value pairs of one section.
pub type Section = CaseInsensitiveMap<String>;

/// Every section of a parsed file.
#[derive(Debug, Clone)]
pub struct SectionTable {
    sections: CaseInsensitiveMap<Section>,
}

impl Default for SectionTable {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionTable {
    /// An empty table holding only the implicit default section.
    pub fn new() -> Self {
        let mut table = Self {
            sections: CaseInsensitiveMap::new(),
        };
        table.ensure_section(DEFAULT_SECTION);
        table
    }

    pub fn ensure_section(&mut self, name: &str) -> &mut Section {
        self.sections.get_or_insert_with(name, Section::new)
    }

    pub fn section(&self, name: &str) -> Option<&Section> {
        self.sections.get(name)
    }

    pub fn get(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.get(key).map(String::as_str)
    }

    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.names()
    }

    /// Number of sections, including `Default`.
    pub(crate) fn len(&self) -> usize {
        self.sections.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_has_default_section() {
        let table = SectionTable::new();
        assert_eq!(table.len(), 1);
        assert!(table.section("default").is_some_and(|s| s.is_empty()));
    }

    #[test]
    fn lookup_ignores_case() {
        let mut map = CaseInsensitiveMap::new();
        map.insert("Port", 8080);
        assert_eq!(map.get("PORT"), Some(&8080));
        assert_eq!(map.get("pOrT"), Some(&8080));
    }

    #[test]
    fn insert_overwrites_and_keeps_first_name() {
        let mut map = CaseInsensitiveMap::new();
        assert_eq!(map.insert("Host", "a".to_string()), None);
        assert_eq!(map.insert("HOST", "b".to_string()), Some("a".to_string()));
        assert_eq!(map.len(), 1);
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["Host"]);
        assert_eq!(map.get("host").map(String::as_str), Some("b"));
    }

    #[test]
    fn names_follow_insertion_order() {
        let mut map = CaseInsensitiveMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        map.insert("Zeta", 3);
        map.insert("mid", 4);
        assert_eq!(map.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(map.get("ZETA"), Some(&3));
    }

    #[test]
    fn final_sigma_folds_like_medial_sigma() {
        let mut map = CaseInsensitiveMap::new();
        map.insert("ΟΔΟΣ", 1);
        assert_eq!(map.get("οδοσ"), Some(&1));
        assert_eq!(map.get("οδος"), Some(&1));
        assert_eq!(map.get("ΟΔΟΣ"), Some(&1));
    }

    #[test]
    fn ensure_section_is_idempotent() {
        let mut table = SectionTable::new();
        table.ensure_section("Server").insert("host", "localhost".to_string());
        table.ensure_section("SERVER");
        assert_eq!(table.len(), 2);
        assert_eq!(table.get("server", "HOST"), Some("localhost"));
    }

    #[test]
    fn get_returns_none_for_missing_section_or_key() {
        let mut table = SectionTable::new();
        table.ensure_section("server");
        assert_eq!(table.get("server", "host"), None);
        assert_eq!(table.get("client", "host"), None);
    }

    #[test]
    fn empty_section_name_is_a_normal_section() {
        let mut table = SectionTable::new();
        table.ensure_section("").insert("k", "v".to_string());
        assert_eq!(table.get("", "k"), Some("v"));
        assert_eq!(table.section_names().collect::<Vec<_>>(), vec!["Default", ""]);
    }
}
