//! # cachescan
//!
//! Point-in-time status aggregation for heterogeneous on-disk cache stores:
//! an address/scraper index, account monitors, ABI definitions, raw
//! block/transaction/trace archives, bulk slurp exports, and price-quote
//! archives.
//!
//! This crate provides functionality to:
//! - Resolve a free-form mode token list into a canonical set of cache kinds
//! - Walk each selected cache root (staging directories excluded) and
//!   aggregate folder/file/byte counts
//! - Optionally collect a per-item inventory with type-specific metadata
//!   recovered from filenames and file contents
//! - Assemble everything into a serializable [`CacheStatus`] report
//!
//! The engine only reads the filesystem. It never talks to a node or remote
//! API, and it never writes to or repairs a cache.
//!
//! ## Example
//!
//! ```no_run
//! use cachescan::{CachePaths, DetailOptions, ModeFilter, NoNames, ReportMeta, Scanner};
//!
//! let filter = ModeFilter::parse(["monitors", "prices", "--details"])?;
//! let paths = CachePaths::new("/data/cache", "/data/index");
//! let opts = DetailOptions { details: filter.details, list: filter.list };
//!
//! let scanner = Scanner::new(&paths, opts, &NoNames);
//! let status = scanner.scan(&filter.modes, ReportMeta::default())?;
//! for cache in &status.caches {
//!     println!("{}: {} files, {} bytes", cache.kind, cache.n_files, cache.size_in_bytes);
//! }
//! # Ok::<(), cachescan::Error>(())
//! ```

pub mod abi;
mod error;
mod items;
mod kind;
mod mode;
mod scan;
mod types;
mod walk;

pub use abi::AbiCounts;
pub use error::{Error, Result};
pub use items::{
    AbiItem, CacheItem, MonitorItem, NameResolver, NoNames, PriceItem,
    APPEARANCE_RECORD_SIZE, PRICE_QUOTE_RECORD_SIZE,
};
pub use kind::{CacheKind, CachePaths};
pub use mode::{ModeFilter, ModeSet};
pub use scan::{CancelToken, Scanner};
pub use types::{CacheStatus, CacheSummary, DetailOptions, ReportMeta, DETAIL_FIELDS};
