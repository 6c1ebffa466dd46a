mod cli;
mod config;
mod names;
mod paths;
mod render;
mod sys;
mod ui;

use anyhow::{Context, Result};
use cachescan::{CachePaths, DetailOptions, ModeFilter, ReportMeta, Scanner};
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(if cli.quiet {
            log::LevelFilter::Error
        } else {
            log_level
        })
        .format_timestamp(None)
        .init();

    // The engine's mode filter owns the token vocabulary; an unknown mode
    // fails here, before any scanning begins.
    let filter = ModeFilter::parse(&cli.mode_list)?;
    let opts = DetailOptions {
        details: cli.details || cli.list || filter.details,
        list: cli.list || filter.list,
    };

    let config = config::Config::load()?;
    let cache_paths = CachePaths::new(config.cache_path()?, config.index_path()?);
    let accounts = names::NamedAccounts::load();
    if accounts.is_empty() {
        log::debug!("no named accounts configured");
    } else {
        log::debug!("loaded {} named accounts", accounts.len());
    }

    let scanner = Scanner::new(&cache_paths, opts, &accounts);

    // Ctrl-C aborts the scan; a cancelled run produces no partial report.
    let cancel = scanner.cancel_token();
    ctrlc::set_handler(move || cancel.cancel()).context("Could not install signal handler")?;

    let meta = ReportMeta {
        host: sys::host_identity(),
        client_version: config.client_version(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        is_scraping: sys::is_scraping(),
        rpc_provider: config.rpc_provider(),
        api_provider: config.api_provider(),
        balance_provider: config.balance_provider(),
    };

    let status = scanner.scan(&filter.modes, meta)?;
    render::render(&status, cli.fmt, opts)
}
