//! The mode filter: free-form token lists resolved into a canonical set of
//! cache kinds.
//!
//! Resolution rules, in order:
//! 1. `-d`/`--details` and `-l`/`--list` set booleans and are consumed
//!    outside the mode vocabulary (`--list` implies `--details`).
//! 2. Every other token must be a kind name, `all`, or a `some*` wildcard;
//!    anything else fails with [`Error::InvalidMode`].
//! 3. An empty set, or any `some*` token, selects the fixed six-kind default.
//! 4. Any `all` token selects all nine kinds. This check runs after the
//!    `some` substitution, so `all` always wins when both are present.

use crate::error::{Error, Result};
use crate::kind::CacheKind;
use std::fmt;

/// The canonical, deduplicated set of cache kinds selected for one report.
///
/// Kinds are held in fixed enumeration order regardless of the order they
/// were requested in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSet {
    kinds: Vec<CacheKind>,
}

impl ModeSet {
    /// Build a canonical set from any collection of kinds: deduplicated and
    /// reordered into enumeration order.
    pub fn from_kinds(requested: &[CacheKind]) -> Self {
        let kinds = CacheKind::ALL
            .into_iter()
            .filter(|k| requested.contains(k))
            .collect();
        Self { kinds }
    }

    /// The selected kinds, in enumeration order.
    pub fn kinds(&self) -> &[CacheKind] {
        &self.kinds
    }

    pub fn contains(&self, kind: CacheKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

/// Renders the set in its canonical pipe-wrapped form, e.g.
/// `|scraper|monitors|prices|`.
impl fmt::Display for ModeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for kind in &self.kinds {
            write!(f, "{kind}|")?;
        }
        Ok(())
    }
}

/// The outcome of parsing a mode token list: the resolved kind set plus the
/// two switches that ride along in the same token stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeFilter {
    pub modes: ModeSet,
    pub details: bool,
    pub list: bool,
}

impl ModeFilter {
    /// Parse and resolve a token list. See the module docs for the rules.
    pub fn parse<I, S>(tokens: I) -> Result<ModeFilter>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut details = false;
        let mut list = false;
        let mut saw_some = false;
        let mut saw_all = false;
        let mut requested: Vec<CacheKind> = Vec::new();

        for token in tokens {
            let token = token.as_ref();
            match token {
                "-d" | "--details" => details = true,
                "-l" | "--list" => list = true,
                "all" => saw_all = true,
                t if t.starts_with("some") => saw_some = true,
                t => match CacheKind::from_token(t) {
                    Some(kind) => requested.push(kind),
                    None => {
                        return Err(Error::InvalidMode {
                            token: t.to_string(),
                            expected: vocabulary(),
                        });
                    }
                },
            }
        }

        if requested.is_empty() || saw_some {
            requested = CacheKind::DEFAULT.to_vec();
        }
        if saw_all {
            requested = CacheKind::ALL.to_vec();
        }

        Ok(ModeFilter {
            modes: ModeSet::from_kinds(&requested),
            // Listing mode always carries item detail with it.
            details: details || list,
            list,
        })
    }
}

/// The valid mode vocabulary, pipe-separated, for error messages.
fn vocabulary() -> String {
    let mut names: Vec<&str> = CacheKind::ALL.iter().map(CacheKind::name).collect();
    names.push("some*");
    names.push("all");
    names.join("|")
}
