//! Recursive cache-tree traversal.
//!
//! A thin layer over walkdir that encodes the rules every cache visitor
//! shares: deterministic (sorted) order, staging-directory exclusion, and a
//! fixed set of recognized file extensions. Visitors never mutate the
//! filesystem; symlink cycles are assumed absent.

use crate::error::{Error, Result};
use crate::scan::CancelToken;
use std::ops::ControlFlow;
use std::path::Path;

/// Extensions recognized by the count visitors and most detail visitors.
pub const EXTS_ALL: &[&str] = &[".bin", ".json"];

/// The price detail visitor only accepts raw binary quote files.
pub const EXTS_BIN: &[&str] = &[".bin"];

/// One traversal event handed to a visitor.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    /// A directory. Delivered before any of its contents.
    Folder(&'a Path),
    /// A file whose name matched the extension filter.
    File {
        path: &'a Path,
        /// Literal byte length from file metadata
        size: u64,
    },
}

/// Walk `root`, invoking `visitor` for every directory and every file whose
/// name ends in one of `exts`.
///
/// Directories whose path (relative to `root`) contains the substring
/// `staging` are visited but never descended into; they hold in-progress
/// cache writes that must not be counted.
///
/// A `ControlFlow::Break` from the visitor short-circuits the remaining
/// traversal. A missing root is not an error: the walk simply visits
/// nothing. Unreadable entries are logged and skipped.
pub fn walk<F>(root: &Path, exts: &[&str], cancel: &CancelToken, mut visitor: F) -> Result<()>
where
    F: FnMut(Node<'_>) -> ControlFlow<()>,
{
    if !root.exists() {
        return Ok(());
    }

    let mut entries = walkdir::WalkDir::new(root)
        .min_depth(1)
        .sort_by_file_name()
        .into_iter();

    while let Some(entry) = entries.next() {
        if cancel.is_cancelled() {
            return Err(Error::Cancelled);
        }

        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                // Per-file failure: skip and keep scanning.
                log::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        if entry.file_type().is_dir() {
            if visitor(Node::Folder(entry.path())).is_break() {
                return Ok(());
            }
            if is_staging(root, entry.path()) {
                entries.skip_current_dir();
            }
        } else if matches_ext(entry.path(), exts) {
            let size = match entry.metadata() {
                Ok(meta) => meta.len(),
                Err(err) => {
                    log::warn!("skipping {}: {err}", entry.path().display());
                    continue;
                }
            };
            if visitor(Node::File {
                path: entry.path(),
                size,
            })
            .is_break()
            {
                return Ok(());
            }
        }
    }

    Ok(())
}

/// Whether a directory is a staging area (in-progress cache writes).
fn is_staging(root: &Path, path: &Path) -> bool {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .contains("staging")
}

fn matches_ext(path: &Path, exts: &[&str]) -> bool {
    match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => exts.iter().any(|ext| name.ends_with(ext)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn touch(path: &Path, len: usize) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, vec![0u8; len]).unwrap();
    }

    fn collect(root: &Path, exts: &[&str]) -> (Vec<PathBuf>, Vec<PathBuf>) {
        let mut folders = Vec::new();
        let mut files = Vec::new();
        walk(root, exts, &CancelToken::default(), |node| {
            match node {
                Node::Folder(p) => folders.push(p.to_path_buf()),
                Node::File { path, .. } => files.push(path.to_path_buf()),
            }
            ControlFlow::Continue(())
        })
        .unwrap();
        (folders, files)
    }

    #[test]
    fn test_missing_root_visits_nothing() {
        let tmp = TempDir::new().unwrap();
        let (folders, files) = collect(&tmp.path().join("nope"), EXTS_ALL);
        assert!(folders.is_empty());
        assert!(files.is_empty());
    }

    #[test]
    fn test_extension_filter() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.bin"), 1);
        touch(&tmp.path().join("b.json"), 1);
        touch(&tmp.path().join("c.txt"), 1);

        let (_, files) = collect(tmp.path(), EXTS_ALL);
        assert_eq!(files.len(), 2);

        let (_, bin_only) = collect(tmp.path(), EXTS_BIN);
        assert_eq!(bin_only.len(), 1);
        assert!(bin_only[0].ends_with("a.bin"));
    }

    #[test]
    fn test_sorted_deterministic_order() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("zz.bin"), 1);
        touch(&tmp.path().join("aa.bin"), 1);
        touch(&tmp.path().join("mm.bin"), 1);

        let (_, files) = collect(tmp.path(), EXTS_ALL);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["aa.bin", "mm.bin", "zz.bin"]);
    }

    #[test]
    fn test_staging_contents_excluded() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.bin"), 1);
        touch(&tmp.path().join("staging/x.bin"), 1);
        touch(&tmp.path().join("staging/deep/y.bin"), 1);

        let (folders, files) = collect(tmp.path(), EXTS_ALL);
        // The staging folder itself is seen, its contents are not.
        assert_eq!(folders.len(), 1);
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("a.bin"));
    }

    #[test]
    fn test_break_short_circuits() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.bin"), 1);
        touch(&tmp.path().join("b.bin"), 1);
        touch(&tmp.path().join("c.bin"), 1);

        let mut seen = 0;
        walk(tmp.path(), EXTS_ALL, &CancelToken::default(), |node| {
            if let Node::File { .. } = node {
                seen += 1;
                if seen == 1 {
                    return ControlFlow::Break(());
                }
            }
            ControlFlow::Continue(())
        })
        .unwrap();
        assert_eq!(seen, 1);
    }

    #[test]
    fn test_cancel_aborts_with_error() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.bin"), 1);

        let cancel = CancelToken::default();
        cancel.cancel();
        let err = walk(tmp.path(), EXTS_ALL, &cancel, |_| ControlFlow::Continue(())).unwrap_err();
        assert!(matches!(err, Error::Cancelled));
    }

    #[test]
    fn test_file_sizes_reported() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("a.bin"), 24);

        let mut sizes = Vec::new();
        walk(tmp.path(), EXTS_ALL, &CancelToken::default(), |node| {
            if let Node::File { size, .. } = node {
                sizes.push(size);
            }
            ControlFlow::Continue(())
        })
        .unwrap();
        assert_eq!(sizes, vec![24]);
    }
}
