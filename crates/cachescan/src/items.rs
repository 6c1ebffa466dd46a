//! Per-item records and the extractors that build them from matched files.
//!
//! Each extractor turns one file path (plus the enclosing cache root) into a
//! typed record. Keys are recovered from the path itself; record counts are
//! derived by dividing the file size by a fixed per-kind record width.

use crate::abi;
use crate::error::Result;
use serde::Serialize;
use std::path::Path;

/// Byte width of one appearance record (block number + transaction index,
/// two 32-bit words). Monitor and slurp files are flat arrays of these.
pub const APPEARANCE_RECORD_SIZE: u64 = 8;

/// Byte width of one price-quote record (64-bit timestamp + 64-bit close).
pub const PRICE_QUOTE_RECORD_SIZE: u64 = 16;

/// Sentinel block heights carried on monitor items. These are placeholders,
/// never derived from file content; kept as-is for output compatibility.
pub const FIRST_APPEARANCE_PLACEHOLDER: u64 = 1_001_001;
pub const LATEST_APPEARANCE_PLACEHOLDER: u64 = 8_101_001;

/// Resolves an address to its display name. Supplied by the caller; the
/// engine never reads name data itself.
pub trait NameResolver: Sync {
    fn resolve(&self, address: &str) -> Option<String>;
}

/// A resolver that knows no names.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoNames;

impl NameResolver for NoNames {
    fn resolve(&self, _address: &str) -> Option<String> {
        None
    }
}

/// One inventory entry in a detail-mode cache summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CacheItem {
    Monitor(MonitorItem),
    Abi(AbiItem),
    Price(PriceItem),
}

/// An account monitor (or slurp export) file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonitorItem {
    pub address: String,
    pub name: String,
    /// Known placeholder, not computed from file content
    pub first_appearance: u64,
    /// Known placeholder, not computed from file content
    pub latest_appearance: u64,
    pub n_records: u64,
    pub size_in_bytes: u64,
}

/// An ABI definition file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbiItem {
    pub address: String,
    pub name: String,
    pub n_functions: u64,
    pub n_events: u64,
    pub n_other: u64,
    pub size_in_bytes: u64,
}

/// A price-quote archive file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PriceItem {
    pub pair: String,
    pub size_in_bytes: u64,
    pub n_records: u64,
}

/// Recover the address or pair key from a file path: the path relative to
/// the cache root with every `.acct`, `.bin`, and `.json` suffix removed
/// (files may carry compound suffixes such as `.acct.bin`).
pub fn cache_key(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    let mut key = rel.to_string_lossy().into_owned();
    for suffix in [".acct", ".bin", ".json"] {
        key = key.replace(suffix, "");
    }
    key
}

/// Build a monitor (or slurp) item for one matched file.
///
/// The record count truncates: a file that is not an exact multiple of the
/// record width silently yields a short count. Documented limitation.
pub fn monitor_item(
    root: &Path,
    path: &Path,
    size: u64,
    names: &dyn NameResolver,
) -> MonitorItem {
    let address = cache_key(root, path);
    let name = names.resolve(&address).unwrap_or_default();
    MonitorItem {
        address,
        name,
        first_appearance: FIRST_APPEARANCE_PLACEHOLDER,
        latest_appearance: LATEST_APPEARANCE_PLACEHOLDER,
        n_records: size / APPEARANCE_RECORD_SIZE,
        size_in_bytes: size,
    }
}

/// Build an ABI item for one matched file, parsing it for signature counts.
/// Fails with `MalformedAbi` when the file does not parse; callers catch
/// this per item so one bad file never aborts the scan.
pub fn abi_item(
    root: &Path,
    path: &Path,
    size: u64,
    names: &dyn NameResolver,
) -> Result<AbiItem> {
    let counts = abi::load_counts(path)?;
    let address = cache_key(root, path);
    let name = names.resolve(&address).unwrap_or_default();
    Ok(AbiItem {
        address,
        name,
        n_functions: counts.n_functions,
        n_events: counts.n_events,
        n_other: counts.n_other,
        size_in_bytes: size,
    })
}

/// Build a price item for one matched file.
pub fn price_item(root: &Path, path: &Path, size: u64) -> PriceItem {
    PriceItem {
        pair: cache_key(root, path),
        size_in_bytes: size,
        n_records: size / PRICE_QUOTE_RECORD_SIZE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    struct MapNames(HashMap<String, String>);

    impl NameResolver for MapNames {
        fn resolve(&self, address: &str) -> Option<String> {
            self.0.get(address).cloned()
        }
    }

    #[test]
    fn test_cache_key_strips_suffixes() {
        let root = PathBuf::from("/cache/monitors");
        assert_eq!(
            cache_key(&root, &root.join("0xdeadbeef.acct.bin")),
            "0xdeadbeef"
        );
        assert_eq!(cache_key(&root, &root.join("0xdeadbeef.json")), "0xdeadbeef");
        assert_eq!(cache_key(&root, &root.join("0xdeadbeef.bin")), "0xdeadbeef");
    }

    #[test]
    fn test_cache_key_keeps_subfolders() {
        let root = PathBuf::from("/cache/slurps");
        assert_eq!(
            cache_key(&root, &root.join("ab/0xabcd.bin")),
            "ab/0xabcd"
        );
    }

    #[test]
    fn test_monitor_record_count_exact() {
        let root = PathBuf::from("/cache/monitors");
        let item = monitor_item(
            &root,
            &root.join("0xabc.acct.bin"),
            3 * APPEARANCE_RECORD_SIZE,
            &NoNames,
        );
        assert_eq!(item.n_records, 3);
        assert_eq!(item.size_in_bytes, 24);
    }

    #[test]
    fn test_monitor_record_count_truncates() {
        // 1.5 records long: the count truncates to 1, no rounding
        let root = PathBuf::from("/cache/monitors");
        let item = monitor_item(&root, &root.join("0xabc.bin"), 12, &NoNames);
        assert_eq!(item.n_records, 1);
    }

    #[test]
    fn test_monitor_placeholder_heights() {
        // Known placeholders, not computed; pinned so a change is deliberate
        let root = PathBuf::from("/cache/monitors");
        let item = monitor_item(&root, &root.join("0xabc.bin"), 8, &NoNames);
        assert_eq!(item.first_appearance, 1_001_001);
        assert_eq!(item.latest_appearance, 8_101_001);
    }

    #[test]
    fn test_monitor_name_lookup() {
        let mut map = HashMap::new();
        map.insert("0xabc".to_string(), "Unicorn".to_string());
        let root = PathBuf::from("/cache/monitors");
        let item = monitor_item(&root, &root.join("0xabc.acct.bin"), 8, &MapNames(map));
        assert_eq!(item.name, "Unicorn");

        let item = monitor_item(&root, &root.join("0xdef.acct.bin"), 8, &NoNames);
        assert_eq!(item.name, "");
    }

    #[test]
    fn test_price_pair_and_count() {
        let root = PathBuf::from("/cache/prices");
        let item = price_item(&root, &root.join("ETH-USD.bin"), 160);
        assert_eq!(item.pair, "ETH-USD");
        assert_eq!(item.size_in_bytes, 160);
        assert_eq!(item.n_records, 10);
    }

    #[test]
    fn test_item_serializes_with_type_tag() {
        let root = PathBuf::from("/cache/prices");
        let item = CacheItem::Price(price_item(&root, &root.join("ETH-USD.bin"), 16));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "price");
        assert_eq!(json["pair"], "ETH-USD");
        assert_eq!(json["n_records"], 1);
    }
}
