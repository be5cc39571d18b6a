use clap::ValueEnum;
use colored::*;
use serde::Serialize;
use std::io::Write;

use crate::catalog::{SnapshotComparison, SnapshotId};
use crate::comparison::{ComparisonRow, Standing, Winner};
use crate::core::ToolRecord;
use crate::filtering::FilterMetrics;
use crate::pricing::{EstimateParams, RankedEstimate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    Json,
    Markdown,
    #[default]
    Terminal,
}

/// Tools matched by a query.
#[derive(Debug, Clone, Serialize)]
pub struct QueryReport<'a> {
    pub snapshot: SnapshotId,
    pub tools: Vec<&'a ToolRecord>,
    pub metrics: FilterMetrics,
}

/// A two-tool comparison. `show_all` controls whether tied rows are
/// rendered; serialized output always carries every row.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport<'a> {
    #[serde(flatten)]
    pub comparison: &'a SnapshotComparison,
    pub overall_winner: Winner,
    #[serde(skip)]
    pub show_all: bool,
}

impl<'a> ComparisonReport<'a> {
    pub fn new(comparison: &'a SnapshotComparison, show_all: bool) -> Self {
        Self {
            comparison,
            overall_winner: comparison.table.summary.overall(),
            show_all,
        }
    }

    fn visible_rows(&self) -> Vec<&'a ComparisonRow> {
        if self.show_all {
            self.comparison.table.rows.iter().collect()
        } else {
            self.comparison.table.key_differences()
        }
    }
}

/// Round-robin standings for three or more tools.
#[derive(Debug, Clone, Serialize)]
pub struct StandingsReport<'a> {
    pub snapshot: SnapshotId,
    pub standings: Vec<Standing<'a>>,
}

/// Ranked cost estimates.
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport<'a> {
    pub snapshot: SnapshotId,
    pub params: EstimateParams,
    pub estimates: Vec<RankedEstimate<'a>>,
}

pub trait OutputWriter {
    fn write_query(&mut self, report: &QueryReport<'_>) -> anyhow::Result<()>;
    fn write_comparison(&mut self, report: &ComparisonReport<'_>) -> anyhow::Result<()>;
    fn write_standings(&mut self, report: &StandingsReport<'_>) -> anyhow::Result<()>;
    fn write_estimates(&mut self, report: &EstimateReport<'_>) -> anyhow::Result<()>;
}

/// Render a price the way a catalog page would.
pub fn format_price(price: Option<f64>) -> String {
    match price {
        None => "Custom".to_string(),
        Some(price) if price == 0.0 => "Free".to_string(),
        Some(price) => format!("${price:.2}"),
    }
}

fn winner_label<'a>(winner: Winner, tool_a: &'a str, tool_b: &'a str) -> &'a str {
    match winner {
        Winner::A => tool_a,
        Winner::B => tool_b,
        Winner::Tie => "tie",
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_value<T: Serialize>(&mut self, value: &T) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        self.writer.write_all(json.as_bytes())?;
        writeln!(self.writer)?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_query(&mut self, report: &QueryReport<'_>) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_comparison(&mut self, report: &ComparisonReport<'_>) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_standings(&mut self, report: &StandingsReport<'_>) -> anyhow::Result<()> {
        self.write_value(report)
    }

    fn write_estimates(&mut self, report: &EstimateReport<'_>) -> anyhow::Result<()> {
        self.write_value(report)
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn write_footer(&mut self, snapshot: SnapshotId) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "_Snapshot {snapshot}_")?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_query(&mut self, report: &QueryReport<'_>) -> anyhow::Result<()> {
        writeln!(self.writer, "# Tools ({})", report.tools.len())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Tool | Category | Starting Price | Rating | Free Trial |")?;
        writeln!(self.writer, "|------|----------|----------------|--------|------------|")?;
        for tool in &report.tools {
            writeln!(
                self.writer,
                "| {} | {} | {} | {:.1} | {} |",
                tool.name,
                tool.category,
                format_price(tool.entry_plan().and_then(|plan| plan.monthly_price)),
                tool.rating,
                if tool.free_trial { "Yes" } else { "No" }
            )?;
        }
        self.write_footer(report.snapshot)
    }

    fn write_comparison(&mut self, report: &ComparisonReport<'_>) -> anyhow::Result<()> {
        let table = &report.comparison.table;
        writeln!(self.writer, "# {} vs {}", table.tool_a, table.tool_b)?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Attribute | {} | {} | Winner |", table.tool_a, table.tool_b)?;
        writeln!(self.writer, "|-----------|---|---|--------|")?;
        for row in report.visible_rows() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} |",
                row.attribute,
                row.value_a,
                row.value_b,
                winner_label(row.winner, &table.tool_a, &table.tool_b)
            )?;
        }
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "**{}** wins {}, **{}** wins {}, {} ties",
            table.tool_a,
            table.summary.wins_a,
            table.tool_b,
            table.summary.wins_b,
            table.summary.ties
        )?;
        self.write_footer(report.comparison.snapshot)
    }

    fn write_standings(&mut self, report: &StandingsReport<'_>) -> anyhow::Result<()> {
        writeln!(self.writer, "# Standings")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| # | Tool | Wins | Losses | Ties |")?;
        writeln!(self.writer, "|---|------|------|--------|------|")?;
        for (i, standing) in report.standings.iter().enumerate() {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                i + 1,
                standing.tool.name,
                standing.wins,
                standing.losses,
                standing.ties
            )?;
        }
        self.write_footer(report.snapshot)
    }

    fn write_estimates(&mut self, report: &EstimateReport<'_>) -> anyhow::Result<()> {
        writeln!(
            self.writer,
            "# Cost estimates ({} users, {} usage, {} billing)",
            report.params.team_size, report.params.usage_level, report.params.billing_cycle
        )?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Tool | Plan | Per Month | Per Year | Savings |")?;
        writeln!(self.writer, "|------|------|-----------|----------|---------|")?;
        for ranked in &report.estimates {
            let estimate = &ranked.estimate;
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                ranked.tool.name,
                estimate.plan_name,
                format_price(estimate.display_price),
                format_price(estimate.total_yearly_price),
                format_price(estimate.savings)
            )?;
        }
        self.write_footer(report.snapshot)
    }
}

/// Colored, human-oriented output.
pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    fn print_header(&mut self, title: &str) -> anyhow::Result<()> {
        writeln!(self.writer, "{}", title.bold().blue())?;
        writeln!(self.writer, "{}", "=".repeat(title.chars().count()).blue())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn print_snapshot(&mut self, snapshot: SnapshotId) -> anyhow::Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "{}", format!("snapshot {snapshot}").dimmed())?;
        Ok(())
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_query(&mut self, report: &QueryReport<'_>) -> anyhow::Result<()> {
        self.print_header(&format!("Tools ({})", report.tools.len()))?;

        if report.tools.is_empty() {
            writeln!(self.writer, "  {}", "No tools match these filters.".yellow())?;
        }
        for tool in &report.tools {
            let price = tool.entry_plan().and_then(|plan| plan.monthly_price);
            let price_display = match price {
                None => format_price(price).yellow(),
                Some(p) if p == 0.0 => format_price(price).green(),
                Some(_) => format_price(price).normal(),
            };
            writeln!(
                self.writer,
                "  {} {} [{}] {} {:.1}/5 ({} reviews){}",
                tool.name.bold(),
                format!("({})", tool.id).dimmed(),
                tool.category,
                price_display,
                tool.rating,
                tool.review_count,
                if tool.free_trial { " free trial" } else { "" }
            )?;
        }

        let metrics = &report.metrics;
        if metrics.total_filtered() > 0 {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "  {} of {} tools shown ({:.0}%)",
                metrics.included,
                metrics.total_tools,
                metrics.inclusion_rate()
            )?;
        }
        self.print_snapshot(report.snapshot)
    }

    fn write_comparison(&mut self, report: &ComparisonReport<'_>) -> anyhow::Result<()> {
        let table = &report.comparison.table;
        self.print_header(&format!("{} vs {}", table.tool_a, table.tool_b))?;

        let rows = report.visible_rows();
        if rows.is_empty() {
            writeln!(self.writer, "  {}", "No differences on the compared attributes.".yellow())?;
        }
        for row in rows {
            let (value_a, value_b) = match row.winner {
                Winner::A => (row.value_a.to_string().green(), row.value_b.to_string().normal()),
                Winner::B => (row.value_a.to_string().normal(), row.value_b.to_string().green()),
                Winner::Tie => (row.value_a.to_string().normal(), row.value_b.to_string().normal()),
            };
            writeln!(
                self.writer,
                "  {:<10} {:<28} {} | {}",
                row.category.to_string().dimmed(),
                row.attribute.to_string(),
                value_a,
                value_b
            )?;
        }

        writeln!(self.writer)?;
        let overall = match report.overall_winner {
            Winner::Tie => "Overall: tie".bold(),
            winner => format!(
                "Overall: {}",
                winner_label(winner, &table.tool_a, &table.tool_b)
            )
            .green()
            .bold(),
        };
        writeln!(
            self.writer,
            "  {} ({} {} / {} {} / {} ties)",
            overall,
            table.tool_a,
            table.summary.wins_a,
            table.tool_b,
            table.summary.wins_b,
            table.summary.ties
        )?;
        self.print_snapshot(report.comparison.snapshot)
    }

    fn write_standings(&mut self, report: &StandingsReport<'_>) -> anyhow::Result<()> {
        self.print_header("Standings")?;
        for (i, standing) in report.standings.iter().enumerate() {
            writeln!(
                self.writer,
                "  {}. {} {}W {}L {}T",
                i + 1,
                standing.tool.name.bold(),
                standing.wins.to_string().green(),
                standing.losses.to_string().red(),
                standing.ties
            )?;
        }
        self.print_snapshot(report.snapshot)
    }

    fn write_estimates(&mut self, report: &EstimateReport<'_>) -> anyhow::Result<()> {
        self.print_header(&format!(
            "Cost estimates: {} users, {} usage, {} billing",
            report.params.team_size, report.params.usage_level, report.params.billing_cycle
        ))?;

        for (i, ranked) in report.estimates.iter().enumerate() {
            let estimate = &ranked.estimate;
            let price = match estimate.display_price {
                None => "Contact sales".yellow(),
                Some(p) if p == 0.0 => "Free".green(),
                Some(_) => format!("{}/mo", format_price(estimate.display_price)).green(),
            };
            writeln!(
                self.writer,
                "  {}. {} on {}: {}",
                i + 1,
                ranked.tool.name.bold(),
                estimate.plan_name,
                price
            )?;
            if let Some(savings) = estimate.savings.filter(|s| *s > 0.0) {
                writeln!(
                    self.writer,
                    "     {} {}/yr with yearly billing",
                    "save".dimmed(),
                    format_price(Some(savings))
                )?;
            }
            writeln!(self.writer, "     {}", estimate.usage_note.dimmed())?;
        }
        self.print_snapshot(report.snapshot)
    }
}

pub fn create_writer(format: OutputFormat) -> Box<dyn OutputWriter> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(std::io::stdout())),
        OutputFormat::Markdown => Box::new(MarkdownWriter::new(std::io::stdout())),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(std::io::stdout())),
    }
}
