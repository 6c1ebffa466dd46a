//! Report entities: per-kind summaries and the assembled status report.

use crate::items::CacheItem;
use crate::kind::CacheKind;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;

/// The per-kind aggregate result: counts, size, and (in detail mode) an
/// ordered item inventory.
#[derive(Debug, Clone, Serialize)]
pub struct CacheSummary {
    #[serde(rename = "type")]
    pub kind: CacheKind,
    /// Root path that was scanned
    pub path: String,
    pub n_folders: u64,
    pub n_files: u64,
    pub size_in_bytes: u64,
    /// True only if at least one qualifying file was found. A selected kind
    /// with nothing on disk still gets a summary, with this flag false.
    pub valid_counts: bool,
    /// Item inventory in traversal discovery order. Present only when detail
    /// mode is on and the kind supports item extraction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<CacheItem>>,
}

impl CacheSummary {
    pub fn new(kind: CacheKind, path: &Path) -> Self {
        Self {
            kind,
            path: path.display().to_string(),
            n_folders: 0,
            n_files: 0,
            size_in_bytes: 0,
            valid_counts: false,
            items: None,
        }
    }
}

/// Identity and environment strings gathered once at initialization by the
/// caller's collaborators; the scanning logic never consults them.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ReportMeta {
    /// `hostname (username)`
    pub host: String,
    pub client_version: String,
    pub engine_version: String,
    /// Whether the scraping process is currently running
    pub is_scraping: bool,
    pub rpc_provider: String,
    pub api_provider: String,
    pub balance_provider: String,
}

/// The assembled report: one summary per selected kind, in fixed
/// enumeration order. Created fresh per invocation and never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatus {
    #[serde(flatten)]
    pub meta: ReportMeta,
    pub generated_at: DateTime<Utc>,
    pub caches: Vec<CacheSummary>,
}

/// Detail switches threaded explicitly into scanning and rendering; there is
/// no process-wide visibility state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DetailOptions {
    /// Collect per-item inventories for the kinds that support them
    pub details: bool,
    /// Render items in a long-listing form (implies `details`)
    pub list: bool,
}

/// The `(summary kind, field)` pairs that exist only in detail mode, so a
/// renderer can hide them by default.
pub const DETAIL_FIELDS: &[(CacheKind, &str)] = &[
    (CacheKind::Monitors, "items"),
    (CacheKind::Abis, "items"),
    (CacheKind::Slurps, "items"),
    (CacheKind::Prices, "items"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::{CacheItem, PriceItem};
    use std::path::PathBuf;

    #[test]
    fn test_summary_serialization_omits_absent_items() {
        let summary = CacheSummary::new(CacheKind::Blocks, &PathBuf::from("/cache/blocks"));
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["type"], "blocks");
        assert_eq!(json["valid_counts"], false);
        assert!(json.get("items").is_none());
    }

    #[test]
    fn test_summary_serialization_includes_items_when_present() {
        let mut summary = CacheSummary::new(CacheKind::Prices, &PathBuf::from("/cache/prices"));
        summary.items = Some(vec![CacheItem::Price(PriceItem {
            pair: "ETH-USD".to_string(),
            size_in_bytes: 16,
            n_records: 1,
        })]);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["items"][0]["pair"], "ETH-USD");
    }

    #[test]
    fn test_detail_fields_cover_detail_capable_kinds() {
        for (kind, field) in DETAIL_FIELDS {
            assert!(kind.supports_detail());
            assert_eq!(*field, "items");
        }
        assert_eq!(DETAIL_FIELDS.len(), 4);
    }

    #[test]
    fn test_status_flattens_meta() {
        let status = CacheStatus {
            meta: ReportMeta {
                host: "box (user)".to_string(),
                ..ReportMeta::default()
            },
            generated_at: Utc::now(),
            caches: Vec::new(),
        };
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["host"], "box (user)");
        assert!(json["caches"].as_array().unwrap().is_empty());
    }
}
