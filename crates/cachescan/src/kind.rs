//! The registry of cache kinds and their on-disk roots.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// One of the nine categories of on-disk cache data this engine reports on.
///
/// Enumeration order is fixed and caller-visible: summaries always appear in
/// the order the variants are declared here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CacheKind {
    /// The address index built by the scraper
    Scraper,
    /// Per-address account monitors
    Monitors,
    /// Named accounts (registered but not yet implemented)
    Names,
    /// ABI definitions
    Abis,
    /// Raw block archives
    Blocks,
    /// Raw transaction archives
    Txs,
    /// Raw trace archives
    Traces,
    /// Bulk slurp exports
    Slurps,
    /// Price-quote archives
    Prices,
}

impl CacheKind {
    /// All kinds, in fixed enumeration order.
    pub const ALL: [CacheKind; 9] = [
        CacheKind::Scraper,
        CacheKind::Monitors,
        CacheKind::Names,
        CacheKind::Abis,
        CacheKind::Blocks,
        CacheKind::Txs,
        CacheKind::Traces,
        CacheKind::Slurps,
        CacheKind::Prices,
    ];

    /// The subset selected by `some` (or an empty mode list).
    pub const DEFAULT: [CacheKind; 6] = [
        CacheKind::Scraper,
        CacheKind::Monitors,
        CacheKind::Names,
        CacheKind::Abis,
        CacheKind::Slurps,
        CacheKind::Prices,
    ];

    /// The canonical lowercase name, as accepted by the mode filter.
    pub fn name(&self) -> &'static str {
        match self {
            CacheKind::Scraper => "scraper",
            CacheKind::Monitors => "monitors",
            CacheKind::Names => "names",
            CacheKind::Abis => "abis",
            CacheKind::Blocks => "blocks",
            CacheKind::Txs => "txs",
            CacheKind::Traces => "traces",
            CacheKind::Slurps => "slurps",
            CacheKind::Prices => "prices",
        }
    }

    /// Look up a kind by its canonical name. Aliases (`some`, `all`) are
    /// handled by the mode filter, not here.
    pub fn from_token(token: &str) -> Option<CacheKind> {
        CacheKind::ALL.iter().copied().find(|k| k.name() == token)
    }

    /// Whether this kind supports per-item detail extraction.
    pub fn supports_detail(&self) -> bool {
        matches!(
            self,
            CacheKind::Monitors | CacheKind::Abis | CacheKind::Slurps | CacheKind::Prices
        )
    }
}

impl fmt::Display for CacheKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved root directories for the cache stores.
///
/// `scraper` lives under the address-index root; every other kind lives in a
/// subfolder of the cache root named after the kind.
#[derive(Debug, Clone)]
pub struct CachePaths {
    /// Root of the general cache stores (monitors, abis, blocks, ...)
    pub cache: PathBuf,
    /// Root of the address index produced by the scraper
    pub index: PathBuf,
}

impl CachePaths {
    pub fn new(cache: impl Into<PathBuf>, index: impl Into<PathBuf>) -> Self {
        Self {
            cache: cache.into(),
            index: index.into(),
        }
    }

    /// Both roots under a single base directory: `<base>/cache` and
    /// `<base>/index`.
    pub fn under(base: &Path) -> Self {
        Self::new(base.join("cache"), base.join("index"))
    }

    /// The root directory scanned for the given kind.
    pub fn root_for(&self, kind: CacheKind) -> PathBuf {
        match kind {
            CacheKind::Scraper => self.index.clone(),
            other => self.cache.join(other.name()),
        }
    }
}
