//! Rendering of the assembled report.
//!
//! The engine hands over a structured [`CacheStatus`]; everything about how
//! it is shown lives here. Detail visibility is driven by the explicit
//! [`DetailOptions`] value plus the engine's [`DETAIL_FIELDS`] table, never
//! by global state.

use anyhow::Result;
use cachescan::{
    CacheItem, CacheStatus, CacheSummary, DetailOptions, DETAIL_FIELDS,
};
use colored::Colorize;

use crate::cli::Format;
use crate::ui;

pub fn render(status: &CacheStatus, fmt: Format, opts: DetailOptions) -> Result<()> {
    match fmt {
        Format::None => Ok(()),
        Format::Json => {
            println!("{}", serde_json::to_string_pretty(status)?);
            Ok(())
        }
        Format::Api => {
            println!("{}", serde_json::to_string(status)?);
            Ok(())
        }
        Format::Csv => {
            render_csv(status);
            Ok(())
        }
        Format::Txt => {
            render_txt(status, opts);
            Ok(())
        }
    }
}

fn render_csv(status: &CacheStatus) {
    println!("type,path,n_folders,n_files,size_in_bytes,valid_counts");
    for cache in &status.caches {
        println!(
            "{},{},{},{},{},{}",
            cache.kind, cache.path, cache.n_folders, cache.n_files, cache.size_in_bytes,
            cache.valid_counts
        );
    }
}

fn render_txt(status: &CacheStatus, opts: DetailOptions) {
    if opts.list {
        println!("Listing mode:");
    }

    ui::header("Cache Status");
    ui::kv("Host", &status.meta.host);
    ui::kv("Client version", &status.meta.client_version);
    ui::kv("Engine version", &status.meta.engine_version);
    ui::kv("RPC provider", &status.meta.rpc_provider);
    ui::kv("API provider", &status.meta.api_provider);
    ui::kv("Balance provider", &status.meta.balance_provider);
    ui::kv(
        "Scraper",
        if status.meta.is_scraping {
            "running"
        } else {
            "not running"
        },
    );

    for cache in &status.caches {
        println!();
        render_summary(cache, opts);
    }
}

fn render_summary(cache: &CacheSummary, opts: DetailOptions) {
    let marker = if cache.valid_counts {
        "✓".green()
    } else {
        "○".yellow()
    };
    println!(
        "  {} {:<9} {} ({} folders, {} files, {})",
        marker,
        cache.kind.to_string().cyan(),
        cache.path,
        cache.n_folders,
        cache.n_files,
        ui::format_size(cache.size_in_bytes)
    );

    if let Some(items) = &cache.items {
        for item in items {
            println!("      {}", item_line(item, opts));
        }
    } else if !opts.details && is_detail_capable(cache) {
        ui::dim("items hidden; rerun with --details");
    }
}

/// Whether this summary has a detail-only `items` field per the engine's
/// field-visibility table.
fn is_detail_capable(cache: &CacheSummary) -> bool {
    DETAIL_FIELDS
        .iter()
        .any(|(kind, field)| *kind == cache.kind && *field == "items")
}

fn item_line(item: &CacheItem, opts: DetailOptions) -> String {
    match item {
        CacheItem::Monitor(m) => {
            let name = if m.name.is_empty() {
                String::new()
            } else {
                format!(" ({})", m.name)
            };
            if opts.list {
                format!(
                    "{:>12} {:>9}  {}{}",
                    m.size_in_bytes, m.n_records, m.address, name
                )
            } else {
                format!(
                    "{}{}  {} records, {}",
                    m.address,
                    name,
                    m.n_records,
                    ui::format_size(m.size_in_bytes)
                )
            }
        }
        CacheItem::Abi(a) => {
            let name = if a.name.is_empty() {
                String::new()
            } else {
                format!(" ({})", a.name)
            };
            format!(
                "{}{}  {} functions, {} events, {} other, {}",
                a.address,
                name,
                a.n_functions,
                a.n_events,
                a.n_other,
                ui::format_size(a.size_in_bytes)
            )
        }
        CacheItem::Price(p) => {
            if opts.list {
                format!("{:>12} {:>9}  {}", p.size_in_bytes, p.n_records, p.pair)
            } else {
                format!(
                    "{}  {} quotes, {}",
                    p.pair,
                    p.n_records,
                    ui::format_size(p.size_in_bytes)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cachescan::{MonitorItem, PriceItem};

    fn monitor(name: &str) -> CacheItem {
        CacheItem::Monitor(MonitorItem {
            address: "0xabc".to_string(),
            name: name.to_string(),
            first_appearance: 1_001_001,
            latest_appearance: 8_101_001,
            n_records: 3,
            size_in_bytes: 24,
        })
    }

    #[test]
    fn test_item_line_includes_name_when_known() {
        let line = item_line(&monitor("Unicorn"), DetailOptions::default());
        assert!(line.contains("0xabc"));
        assert!(line.contains("(Unicorn)"));
        assert!(line.contains("3 records"));
    }

    #[test]
    fn test_item_line_omits_empty_name() {
        let line = item_line(&monitor(""), DetailOptions::default());
        assert!(!line.contains('('));
    }

    #[test]
    fn test_list_mode_uses_columns() {
        let opts = DetailOptions {
            details: true,
            list: true,
        };
        let line = item_line(
            &CacheItem::Price(PriceItem {
                pair: "ETH-USD".to_string(),
                size_in_bytes: 160,
                n_records: 10,
            }),
            opts,
        );
        assert!(line.trim_start().starts_with("160"));
        assert!(line.ends_with("ETH-USD"));
    }
}
