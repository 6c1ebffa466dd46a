//! The status aggregator: drives the walker per selected kind and
//! accumulates summaries into one report.
//!
//! Each kind is scanned as an independent task (no shared mutable state
//! crosses kinds); the parallel collect restores fixed enumeration order,
//! which is part of the output contract. Per kind the scan is two-pass:
//! counts always, item detail only when requested, so count aggregation can
//! never depend on detail mode.

use crate::error::Result;
use crate::items::{self, CacheItem, NameResolver};
use crate::kind::{CacheKind, CachePaths};
use crate::mode::ModeSet;
use crate::types::{CacheStatus, CacheSummary, DetailOptions, ReportMeta};
use crate::walk::{self, Node, EXTS_ALL, EXTS_BIN};
use chrono::Utc;
use rayon::prelude::*;
use std::ops::ControlFlow;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Shared cancellation flag. Cloning yields a handle to the same flag, so a
/// signal handler can cancel a scan running on another thread. A cancelled
/// scan returns [`Error::Cancelled`](crate::Error::Cancelled) and discards
/// any partially built summaries.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Scans the selected cache kinds and assembles a [`CacheStatus`] report.
pub struct Scanner<'a> {
    paths: &'a CachePaths,
    opts: DetailOptions,
    names: &'a dyn NameResolver,
    cancel: CancelToken,
}

impl<'a> Scanner<'a> {
    pub fn new(paths: &'a CachePaths, opts: DetailOptions, names: &'a dyn NameResolver) -> Self {
        Self {
            paths,
            opts,
            names,
            cancel: CancelToken::new(),
        }
    }

    /// A handle that aborts this scanner's traversals when cancelled.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Scan every kind in `modes` and assemble the report.
    ///
    /// `names` contributes no summary (a registered kind with no implemented
    /// behavior); every other selected kind appears exactly once, zero data
    /// or not.
    pub fn scan(&self, modes: &ModeSet, meta: ReportMeta) -> Result<CacheStatus> {
        let summaries: Result<Vec<Option<CacheSummary>>> = modes
            .kinds()
            .par_iter()
            .map(|kind| self.scan_kind(*kind))
            .collect();

        Ok(CacheStatus {
            meta,
            generated_at: Utc::now(),
            caches: summaries?.into_iter().flatten().collect(),
        })
    }

    /// Scan a single kind: count pass, then (optionally) detail pass.
    fn scan_kind(&self, kind: CacheKind) -> Result<Option<CacheSummary>> {
        if kind == CacheKind::Names {
            // Registered but unimplemented; selecting it is legal and
            // contributes nothing.
            return Ok(None);
        }

        let root = self.paths.root_for(kind);
        let mut summary = CacheSummary::new(kind, &root);

        walk::walk(&root, EXTS_ALL, &self.cancel, |node| {
            match node {
                Node::Folder(_) => summary.n_folders += 1,
                Node::File { size, .. } => {
                    summary.n_files += 1;
                    summary.size_in_bytes += size;
                    summary.valid_counts = true;
                }
            }
            ControlFlow::Continue(())
        })?;

        if self.opts.details && kind.supports_detail() {
            summary.items = Some(self.collect_items(kind, &root)?);
        }

        Ok(Some(summary))
    }

    /// Detail pass: one item per matched file, in discovery order. A file
    /// that fails extraction is logged and skipped; the pass continues.
    fn collect_items(&self, kind: CacheKind, root: &std::path::Path) -> Result<Vec<CacheItem>> {
        let exts = match kind {
            CacheKind::Prices => EXTS_BIN,
            _ => EXTS_ALL,
        };

        let mut items = Vec::new();
        walk::walk(root, exts, &self.cancel, |node| {
            let (path, size) = match node {
                Node::Folder(_) => return ControlFlow::Continue(()),
                Node::File { path, size } => (path, size),
            };
            match kind {
                CacheKind::Monitors | CacheKind::Slurps => {
                    items.push(CacheItem::Monitor(items::monitor_item(
                        root, path, size, self.names,
                    )));
                }
                CacheKind::Abis => match items::abi_item(root, path, size, self.names) {
                    Ok(item) => items.push(CacheItem::Abi(item)),
                    Err(err) => log::warn!("skipping ABI item: {err}"),
                },
                CacheKind::Prices => {
                    items.push(CacheItem::Price(items::price_item(root, path, size)));
                }
                _ => {}
            }
            ControlFlow::Continue(())
        })?;
        Ok(items)
    }
}
