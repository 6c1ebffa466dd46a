use clap::{Parser, ValueEnum};

#[derive(Parser)]
#[command(name = "cachestat")]
#[command(version)]
#[command(about = "Report on the status of one or more on-disk caches", long_about = None)]
pub struct Cli {
    /// One or more of [scraper|monitors|names|abis|blocks|txs|traces|slurps|prices|some*|all]
    #[arg(value_name = "MODE")]
    pub mode_list: Vec<String>,

    /// Include details about items found in monitors, slurps, abis, or price caches
    #[arg(short = 'd', long)]
    pub details: bool,

    /// Display results in long-listing format (implies --details)
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Export format
    #[arg(short = 'x', long = "fmt", value_enum, default_value = "json")]
    pub fmt: Format,

    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Produce no output at all
    None,
    /// Pretty-printed JSON (the default)
    Json,
    /// Human-readable text
    Txt,
    /// One CSV row per cache summary
    Csv,
    /// Compact JSON for machine consumers
    Api,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parses() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_modes_with_switches() {
        let cli = Cli::parse_from(["cachestat", "monitors", "prices", "-d", "--fmt", "txt"]);
        assert_eq!(cli.mode_list, vec!["monitors", "prices"]);
        assert!(cli.details);
        assert!(!cli.list);
        assert_eq!(cli.fmt, Format::Txt);
    }

    #[test]
    fn test_default_format_is_json() {
        let cli = Cli::parse_from(["cachestat"]);
        assert_eq!(cli.fmt, Format::Json);
        assert!(cli.mode_list.is_empty());
    }
}
