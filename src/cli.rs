use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

use crate::filtering::SortField;
use crate::io::OutputFormat;
use crate::pricing::{BillingCycle, UsageLevel};

#[derive(Parser, Debug)]
#[command(name = "toolcompare")]
#[command(about = "Search, compare and price AI tool catalogs", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to the nearest .toolcompare.toml)
    #[arg(long, global = true, env = "TOOLCOMPARE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search and filter a catalog
    Query {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Case-insensitive text to find in names and descriptions
        #[arg(long)]
        text: Option<String>,

        /// Exact category
        #[arg(long)]
        category: Option<String>,

        /// Minimum entry-plan monthly price
        #[arg(long)]
        min_price: Option<f64>,

        /// Maximum entry-plan monthly price (excludes custom pricing)
        #[arg(long)]
        max_price: Option<f64>,

        /// Minimum rating (0-5)
        #[arg(long)]
        min_rating: Option<f64>,

        /// Required feature, matched as a substring (repeatable)
        #[arg(long = "feature")]
        features: Vec<String>,

        /// Require (true) or exclude (false) tools with a free trial
        #[arg(long)]
        free_trial: Option<bool>,

        /// Sort field
        #[arg(long, value_enum)]
        sort: Option<SortField>,

        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,

        /// List the catalog's categories instead of tools
        #[arg(long)]
        list_categories: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Compare two tools side by side, or rank three or more head to head
    Compare {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Tool ids
        #[arg(required = true, num_args = 2..)]
        tools: Vec<String>,

        /// Show tied rows as well as key differences
        #[arg(long)]
        all: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Estimate team costs and rank tools by price
    Estimate {
        /// Catalog JSON file
        catalog: PathBuf,

        /// Tool ids (defaults to the whole catalog)
        tools: Vec<String>,

        /// Number of seats
        #[arg(long, default_value = "1")]
        team_size: u32,

        /// Expected usage
        #[arg(long, value_enum, default_value = "low")]
        usage: UsageLevel,

        /// Expected monthly request volume; picks the usage level
        #[arg(long, conflicts_with = "usage")]
        requests: Option<u64>,

        /// Billing cycle
        #[arg(long, value_enum, default_value = "monthly")]
        billing: BillingCycle,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Write a default configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Log level for a `-v` count, used when `RUST_LOG` is unset.
pub fn log_level(verbosity: u8) -> log::LevelFilter {
    match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_query_command() {
        let args = vec![
            "toolcompare",
            "query",
            "tools.json",
            "--min-rating",
            "4.1",
            "--feature",
            "api",
            "--feature",
            "seo",
            "--sort",
            "price",
            "--desc",
            "-f",
            "json",
        ];
        let cli = Cli::try_parse_from(args).unwrap();

        match cli.command {
            Commands::Query {
                catalog,
                min_rating,
                features,
                sort,
                desc,
                format,
                ..
            } => {
                assert_eq!(catalog, PathBuf::from("tools.json"));
                assert_eq!(min_rating, Some(4.1));
                assert_eq!(features, vec!["api", "seo"]);
                assert_eq!(sort, Some(SortField::Price));
                assert!(desc);
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("Expected Query command"),
        }
    }

    #[test]
    fn test_cli_parsing_compare_requires_two_tools() {
        assert!(Cli::try_parse_from(["toolcompare", "compare", "tools.json", "a"]).is_err());

        let cli = Cli::try_parse_from(["toolcompare", "compare", "tools.json", "a", "b", "c"]).unwrap();
        match cli.command {
            Commands::Compare { tools, all, .. } => {
                assert_eq!(tools, vec!["a", "b", "c"]);
                assert!(!all);
            }
            _ => panic!("Expected Compare command"),
        }
    }

    #[test]
    fn test_cli_parsing_estimate_defaults() {
        let cli = Cli::try_parse_from(["toolcompare", "estimate", "tools.json"]).unwrap();
        match cli.command {
            Commands::Estimate {
                tools,
                team_size,
                usage,
                requests,
                billing,
                ..
            } => {
                assert!(tools.is_empty());
                assert_eq!(team_size, 1);
                assert_eq!(usage, UsageLevel::Low);
                assert_eq!(requests, None);
                assert_eq!(billing, BillingCycle::Monthly);
            }
            _ => panic!("Expected Estimate command"),
        }
    }

    #[test]
    fn test_cli_parsing_global_flags() {
        let cli = Cli::try_parse_from(["toolcompare", "init", "--force", "-vv", "--config", "x.toml"]).unwrap();
        assert_eq!(cli.verbosity, 2);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
        match cli.command {
            Commands::Init { force } => assert!(force),
            _ => panic!("Expected Init command"),
        }
    }

    #[test]
    fn test_log_level_mapping() {
        assert_eq!(log_level(0), log::LevelFilter::Warn);
        assert_eq!(log_level(1), log::LevelFilter::Info);
        assert_eq!(log_level(5), log::LevelFilter::Trace);
    }
}
