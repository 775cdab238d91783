use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use lazyledger_core::{InsightReport, StatsSnapshot, Transaction};
use lazyledger_insights::{RuleBasedAdvisor, aggregate, generate_insights_with};
use lazyledger_parse::{filter_recordable, parse_batch, read_csv, read_json};
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod state;

use config::{Config, OutputFormat};

#[derive(Parser, Debug)]
#[command(
    name = "lazyledger",
    version,
    long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("LAZYLEDGER_BUILD_SHA"), ")"),
    about = "Turn free-text money notes into transactions, stats and insights"
)]
struct Cli {
    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse raw text lines into transactions
    Parse {
        #[command(flatten)]
        input: InputArgs,

        /// Print JSON regardless of config
        #[arg(long)]
        json: bool,
    },

    /// Aggregate transactions into totals and time buckets
    Stats {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long)]
        json: bool,
    },

    /// Aggregate transactions and print the insight report
    Insights {
        #[command(flatten)]
        input: InputArgs,

        #[arg(long)]
        json: bool,
    },

    /// Manage ~/.lazyledger/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write the default config file if missing
    Init,
    /// Print the effective config
    Show,
}

#[derive(clap::Args, Debug)]
struct InputArgs {
    /// Input file (stdin when omitted)
    file: Option<PathBuf>,

    /// How to read the input
    #[arg(long, value_enum, default_value_t = InputKind::Text)]
    from: InputKind,

    /// Date attached to every parsed line (overrides parse.default_date)
    #[arg(long)]
    date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputKind {
    /// Free-text lines, one transaction per line
    Text,
    /// amount,type,category,date rows
    Csv,
    /// JSON array as printed by `parse --json`
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr).compact())
        .init();

    match cli.command {
        Command::Parse { input, json } => {
            let cfg = config::load_config()?;
            let txns = load_transactions(&input, &cfg)?;
            if wants_json(json, &cfg) {
                println!("{}", serde_json::to_string_pretty(&txns)?);
            } else {
                print_transactions(&txns);
            }
        }

        Command::Stats { input, json } => {
            let cfg = config::load_config()?;
            let stats = stats_for(&input, &cfg)?;
            if wants_json(json, &cfg) {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_stats(&stats);
            }
        }

        Command::Insights { input, json } => {
            let cfg = config::load_config()?;
            let txns = usable_transactions(&input, &cfg)?;
            let report = generate_insights_with(&RuleBasedAdvisor::default(), &txns)
                .context("cannot generate insights")?;
            if wants_json(json, &cfg) {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => {
                let cfg = config::load_config()?;
                println!("# {}", config::config_path()?.display());
                print!("{}", toml::to_string_pretty(&cfg)?);
            }
        },
    }

    Ok(())
}

fn wants_json(flag: bool, cfg: &Config) -> bool {
    flag || cfg.output.format == OutputFormat::Json
}

fn read_input(file: Option<&PathBuf>) -> Result<String> {
    match file {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("read {}", p.display())),
        None => {
            let mut s = String::new();
            std::io::stdin().read_to_string(&mut s).context("read stdin")?;
            Ok(s)
        }
    }
}

fn load_transactions(input: &InputArgs, cfg: &Config) -> Result<Vec<Transaction>> {
    let raw = read_input(input.file.as_ref())?;
    let source = input
        .file
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "stdin".to_string());

    let txns = match input.from {
        InputKind::Text => {
            let date = match input.date {
                Some(d) => Some(d),
                None => cfg
                    .parse
                    .resolve_default_date(chrono::Local::now().date_naive())?,
            };
            parse_batch(&raw, date)
        }
        InputKind::Csv => {
            read_csv(raw.as_bytes()).with_context(|| format!("parsing CSV from {}", source))?
        }
        InputKind::Json => {
            read_json(raw.as_bytes()).with_context(|| format!("parsing JSON from {}", source))?
        }
    };

    debug!(count = txns.len(), %source, "loaded transactions");
    Ok(txns)
}

/// Loaded transactions, minus incomplete ones when `parse.skip_incomplete` is set
fn usable_transactions(input: &InputArgs, cfg: &Config) -> Result<Vec<Transaction>> {
    let txns = load_transactions(input, cfg)?;
    if cfg.parse.skip_incomplete {
        Ok(filter_recordable(txns))
    } else {
        Ok(txns)
    }
}

fn stats_for(input: &InputArgs, cfg: &Config) -> Result<StatsSnapshot> {
    let txns = usable_transactions(input, cfg)?;
    aggregate(&txns).context("cannot aggregate")
}

fn fmt_opt<T: std::fmt::Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn transaction_line(t: &Transaction) -> String {
    format!(
        "[{}] {} | amount={} | date={}",
        t.txn_type.storage_label(),
        t.category,
        fmt_opt(t.amount.map(|a| format!("{:.2}", a))),
        fmt_opt(t.date)
    )
}

fn print_transactions(txns: &[Transaction]) {
    for t in txns {
        println!("{}", transaction_line(t));
    }
    let missing = txns.iter().filter(|t| t.amount.is_none()).count();
    println!("\nParsed {} lines ({} without an amount)", txns.len(), missing);
}

fn print_stats(stats: &StatsSnapshot) {
    println!("Total amount: {:.2}", stats.total_amount);
    println!("Income transactions: {}", stats.income_count);
    println!("Expense transactions: {}", stats.expense_count);

    println!("\nBy category:");
    for (cat, amount) in &stats.categories {
        println!("  {:<14} {:>12.2}", cat, amount);
    }
    println!("\nBy day:");
    for (day, amount) in &stats.weekly_totals {
        println!("  {:<14} {:>12.2}", day, amount);
    }
    println!("\nBy month:");
    for (month, amount) in &stats.monthly_totals {
        println!("  {:<14} {:>12.2}", month, amount);
    }
}

fn print_report(report: &InsightReport) {
    println!("{}", report);
}
