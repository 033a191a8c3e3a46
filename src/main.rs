use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::path::PathBuf;
use tracing::{info, Level};

use ddlpress::optimizer::DdlOptimizer;
use ddlpress::tokens::estimate_tokens;

#[derive(Parser)]
#[command(name = "ddlpress")]
#[command(about = "Compress MySQL DDL into compact schema encodings for LLM context")]
#[command(version = "0.1.0")]
#[command(long_about = "Ddlpress reads CREATE TABLE statements from a MySQL dump, builds a normalized schema model and renders it in one of six compact encodings. The output keeps the structure an LLM needs to reason about a schema while cutting most of the DDL token cost.")]
#[command(after_help = "EXAMPLES:
    # Compress a schema dump with the default compact format
    ddlpress schema.sql

    # Render machine-readable JSON into a file
    ddlpress schema.sql -f json -o schema.json

    # Keep two tables, log statistics and token savings
    ddlpress schema.sql --include users,orders --stats --compare

    # List the registered output formats
    ddlpress --list-formats")]
struct Cli {
    /// Path to the DDL file to compress
    #[arg(value_name = "FILE", required_unless_present = "list_formats")]
    input: Option<PathBuf>,

    /// Output format (see --list-formats)
    #[arg(short, long, default_value = "compact", value_name = "NAME")]
    format: String,

    /// Write the output to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Comma-separated table names to keep
    #[arg(long, value_name = "TABLES")]
    include: Option<String>,

    /// Comma-separated table names to drop
    #[arg(long, value_name = "TABLES")]
    exclude: Option<String>,

    /// Log schema statistics
    #[arg(long)]
    stats: bool,

    /// Log estimated token counts before and after compression
    #[arg(long)]
    compare: bool,

    /// List the registered output formats and exit
    #[arg(long)]
    list_formats: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long)]
    verbose: bool,

    /// Set log level explicitly
    #[arg(long, value_enum)]
    log_level: Option<LogLevel>,

    /// Output logs in JSON format
    #[arg(long)]
    json_logs: bool,
}

#[derive(ValueEnum, Clone, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    initialize_logging(&cli)?;

    info!("Starting ddlpress v{}", env!("CARGO_PKG_VERSION"));

    if cli.list_formats {
        println!("Available formats:");
        for (name, description) in DdlOptimizer::list_formats() {
            println!("  {name}: {description}");
        }
        return Ok(());
    }

    let input = match &cli.input {
        Some(path) => path.clone(),
        None => {
            eprintln!("Error: an input DDL file is required unless --list-formats is given");
            std::process::exit(1);
        }
    };

    match run(&cli, &input) {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("Optimization failed: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: &Cli, input: &PathBuf) -> Result<()> {
    info!("Reading DDL from {:?}", input);
    let ddl = fs::read_to_string(input)
        .with_context(|| format!("failed to read {}", input.display()))?;

    let mut optimizer = DdlOptimizer::from_text(&ddl);
    info!("Parsed {} tables", optimizer.table_count());

    if let Some(include) = &cli.include {
        let names = split_table_list(include);
        optimizer = optimizer.filter_tables(&names);
        info!("Kept {} tables after --include", optimizer.table_count());
    }

    if let Some(exclude) = &cli.exclude {
        let names = split_table_list(exclude);
        optimizer = optimizer.exclude_tables(&names);
        info!("Kept {} tables after --exclude", optimizer.table_count());
    }

    if cli.stats {
        let stats = optimizer.statistics();
        info!(
            "Schema statistics: {} tables, {} columns, {} indexes, {} foreign keys, {:.2} avg columns per table",
            stats.total_tables,
            stats.total_columns,
            stats.total_indexes,
            stats.total_foreign_keys,
            stats.avg_columns_per_table
        );
    }

    let rendered = optimizer.format(&cli.format)?;

    if cli.compare {
        let before = estimate_tokens(&ddl);
        let after = estimate_tokens(&rendered);
        let percent = if before > 0 {
            (1.0 - after as f64 / before as f64) * 100.0
        } else {
            0.0
        };
        let saved = before as i64 - after as i64;
        info!(
            "Token estimate: {} → {} ({:.1}% reduction, {} tokens saved)",
            before, after, percent, saved
        );
    }

    match &cli.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("Output written to {:?}", path);
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn split_table_list(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Initialize logging based on CLI configuration. Diagnostics go to stderr
/// so stdout stays clean for the rendered output.
fn initialize_logging(cli: &Cli) -> Result<()> {
    let log_level = if let Some(level) = &cli.log_level {
        level.clone().into()
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    if cli.json_logs {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_thread_ids(cli.verbose)
            .with_file(cli.verbose)
            .with_line_number(cli.verbose)
            .with_writer(std::io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_target(false)
            .with_thread_ids(cli.verbose)
            .with_file(cli.verbose)
            .with_line_number(cli.verbose)
            .with_writer(std::io::stderr)
            .init();
    }

    Ok(())
}
