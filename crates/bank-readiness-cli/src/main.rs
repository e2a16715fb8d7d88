mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::assessment::{AssessArgs, GuidanceArgs, MatchArgs, RiskArgs};
use commands::catalog::{BankArgs, BanksArgs, ClassifyInflowArgs};
use commands::GlobalOptions;

/// Bank-account readiness assessment for UAE companies
#[derive(Parser)]
#[command(
    name = "bra",
    version,
    about = "Bank-account readiness assessment for UAE companies",
    long_about = "Scores an applicant's bank-account risk, ranks UAE banks by fit, \
                  lists banks likely to decline, and prepares document and interview \
                  checklists. Cases are read from a JSON/YAML file, stdin, or flags."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Bank catalog file (JSON or YAML array of profiles) replacing the built-in one
    #[arg(long, global = true)]
    catalog: Option<String>,

    /// Validate the case first: fail on blank required text, warn on unrecognised values
    #[arg(long, global = true)]
    strict: bool,

    /// Debug logging to stderr (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Full readiness report: risk, bank matches, documents, interview tips
    Assess(AssessArgs),
    /// Risk score, category and flags only
    Risk(RiskArgs),
    /// Recommended banks and banks to avoid
    Match(MatchArgs),
    /// Required and helpful documents
    Documents(GuidanceArgs),
    /// Interview preparation tips
    Interview(GuidanceArgs),
    /// List banks in the catalog
    Banks(BanksArgs),
    /// Show one bank profile
    Bank(BankArgs),
    /// Classify a monthly AED amount into an inflow band
    ClassifyInflow(ClassifyInflowArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let opts = GlobalOptions {
        catalog: cli.catalog,
        strict: cli.strict,
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Assess(args) => commands::assessment::run_assess(args, &opts),
        Commands::Risk(args) => commands::assessment::run_risk(args, &opts),
        Commands::Match(args) => commands::assessment::run_match(args, &opts),
        Commands::Documents(args) => commands::assessment::run_documents(args, &opts),
        Commands::Interview(args) => commands::assessment::run_interview(args, &opts),
        Commands::Banks(args) => commands::catalog::run_banks(args, &opts),
        Commands::Bank(args) => commands::catalog::run_bank(args, &opts),
        Commands::ClassifyInflow(args) => commands::catalog::run_classify_inflow(args),
        Commands::Version => {
            println!("bra {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
