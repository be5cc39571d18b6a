use anyhow::Result;
use clap::Parser;
use toolcompare::cli::{log_level, Cli, Commands};
use toolcompare::commands::{self, query::build_criteria, CompareConfig, EstimateConfig, QueryConfig};
use toolcompare::filtering::SortDirection;
use toolcompare::pricing::{EstimateParams, UsageLevel};

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(log_level(cli.verbosity))
        .parse_env("RUST_LOG")
        .format_timestamp(None)
        .init();

    match cli.command {
        Commands::Query {
            catalog,
            text,
            category,
            min_price,
            max_price,
            min_rating,
            features,
            free_trial,
            sort,
            desc,
            list_categories,
            format,
        } => {
            let direction = if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            };
            commands::query_catalog(QueryConfig {
                catalog,
                config: cli.config,
                criteria: build_criteria(
                    text, category, min_price, max_price, min_rating, features, free_trial,
                ),
                sort: sort.map(|field| (field, direction)),
                list_categories,
                format,
            })
        }
        Commands::Compare {
            catalog,
            tools,
            all,
            format,
        } => commands::compare_tools(CompareConfig {
            catalog,
            config: cli.config,
            tools,
            show_all: all,
            format,
        }),
        Commands::Estimate {
            catalog,
            tools,
            team_size,
            usage,
            requests,
            billing,
            format,
        } => {
            let usage_level = requests.map_or(usage, UsageLevel::from_monthly_volume);
            commands::estimate_costs(EstimateConfig {
                catalog,
                config: cli.config,
                tools,
                params: EstimateParams::new(team_size, usage_level, billing),
                format,
            })
        }
        Commands::Init { force } => commands::init_config(force),
    }
}
