//! Named-account lookup: decorates monitor and ABI items with display names.
//!
//! Names live in `names.tab` in the config directory, one tab-separated
//! `address<TAB>name` pair per line. Lines starting with `#` and lines
//! without a tab are ignored. A missing file means an empty map; items then
//! carry empty display names.

use cachescan::NameResolver;
use std::collections::HashMap;
use std::fs;

use crate::paths;

pub struct NamedAccounts {
    names: HashMap<String, String>,
}

impl NamedAccounts {
    /// Load `names.tab` from the config directory; missing or unreadable
    /// files yield an empty map.
    pub fn load() -> Self {
        let content = paths::config_dir()
            .ok()
            .map(|dir| dir.join("names.tab"))
            .and_then(|path| fs::read_to_string(path).ok())
            .unwrap_or_default();
        Self::from_tsv(&content)
    }

    pub fn from_tsv(content: &str) -> Self {
        let mut names = HashMap::new();
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if let Some((address, name)) = line.split_once('\t') {
                names.insert(address.trim().to_lowercase(), name.trim().to_string());
            }
        }
        Self { names }
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl NameResolver for NamedAccounts {
    fn resolve(&self, address: &str) -> Option<String> {
        self.names.get(&address.to_lowercase()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# address\tname
0xDEADbeef\tUnicorn Fund
0x1111\tFaucet

not-a-tab-line
";

    #[test]
    fn test_from_tsv_parses_pairs() {
        let names = NamedAccounts::from_tsv(SAMPLE);
        assert_eq!(names.len(), 2);
        assert_eq!(names.resolve("0x1111"), Some("Faucet".to_string()));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let names = NamedAccounts::from_tsv(SAMPLE);
        assert_eq!(names.resolve("0xdeadbeef"), Some("Unicorn Fund".to_string()));
        assert_eq!(names.resolve("0xDEADBEEF"), Some("Unicorn Fund".to_string()));
    }

    #[test]
    fn test_unknown_address_is_none() {
        let names = NamedAccounts::from_tsv(SAMPLE);
        assert_eq!(names.resolve("0x9999"), None);
    }

    #[test]
    fn test_empty_content() {
        let names = NamedAccounts::from_tsv("");
        assert!(names.is_empty());
    }
}
