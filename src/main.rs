//! ehr-compliance: guided multi-layer compliance review for EHR documents.

#![allow(clippy::struct_excessive_bools)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use ehr_compliance::{
    AppConfig, Validatable,
    cli::{self, ReportCommandConfig, exit_codes},
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ehr-compliance")]
#[command(version)]
#[command(about = "Guided multi-layer compliance review for EHR documents", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Overall score below --min-score (report)
    3  Error occurred

EXAMPLES:
    # Walk through the review interactively
    ehr-compliance run --file patient_record.pdf

    # CI check: fail when the overall score drops below 80
    ehr-compliance report -o summary --min-score 80

    # Export the final report as Markdown
    ehr-compliance report -o markdown -O compliance.md")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output; the wizard uses the high-contrast scheme (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Load the layer catalog from a YAML file instead of the built-in one
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `run` subcommand
#[derive(Parser)]
struct RunArgs {
    /// Document to review (skips the upload prompt)
    #[arg(short, long)]
    file: Option<String>,

    /// Theme: dark, light, high-contrast
    #[arg(long)]
    theme: Option<String>,
}

/// Arguments for the `report` subcommand
#[derive(Parser)]
struct ReportArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    output: Option<ReportFormat>,

    /// Output file (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when the overall score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    min_score: Option<u8>,

    /// Print summary figures only, without per-layer details
    #[arg(long)]
    summary_only: bool,

    /// Document name shown in the report header
    #[arg(long)]
    document: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive review wizard
    Run(RunArgs),

    /// Print the final compliance report
    Report(ReportArgs),

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .ehr-compliance.yaml in the current directory
    Init,
    /// Generate JSON Schema for the config file format
    Schema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(cli: &Cli) {
    // Keep the alternate screen clean unless asked otherwise
    let log_level = match (&cli.command, cli.verbose, cli.quiet) {
        (_, true, _) => "debug",
        (_, _, true) | (Commands::Run(_), _, _) => "warn",
        _ => "info",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

/// Merge the config file with the CLI flags shared by every command.
fn effective_config(cli: &Cli, overrides: AppConfig) -> Result<AppConfig> {
    let (config, loaded_from) =
        AppConfig::from_file_with_overrides(cli.config.as_deref(), &overrides)
            .context("failed to load configuration")?;
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }

    config
        .validated()
        .context("failed to validate configuration")
}

fn dispatch(cli: &Cli) -> Result<i32> {
    match &cli.command {
        Commands::Run(args) => {
            let overrides = AppConfig::builder()
                .no_color(cli.no_color)
                .catalog_file(cli.catalog.clone())
                .build();
            let mut config = effective_config(cli, overrides)?;
            // An explicit flag wins even when it names the default theme
            if let Some(theme) = &args.theme {
                config.tui.theme.clone_from(theme);
                if !config.tui.is_valid() {
                    anyhow::bail!("unknown theme '{theme}' (expected dark, light, high-contrast)");
                }
            }
            let catalog = cli::load_catalog(&config)?;
            cli::run_wizard(
                catalog,
                &config.tui,
                cli::should_use_color(config.output.no_color),
                args.file.as_deref(),
            )
        }

        Commands::Report(args) => {
            let mut builder = AppConfig::builder()
                .output_file(args.output_file.clone())
                .no_color(cli.no_color)
                .quiet(cli.quiet)
                .min_score(args.min_score)
                .catalog_file(cli.catalog.clone());
            if let Some(format) = args.output {
                builder = builder.output_format(format);
            }
            let config = effective_config(cli, builder.build())?;
            let catalog = cli::load_catalog(&config)?;
            cli::run_report(
                &catalog,
                ReportCommandConfig {
                    format: args.output.unwrap_or(config.output.format),
                    output_file: config.output.file,
                    min_score: config.behavior.min_score,
                    summary_only: args.summary_only,
                    document: args.document.clone(),
                    no_color: config.output.no_color,
                    quiet: config.behavior.quiet,
                },
            )
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => cli::run_config_show(cli.config.as_deref()),
            ConfigAction::Path => cli::run_config_path(cli.config.as_deref()),
            ConfigAction::Init => cli::run_config_init(),
            ConfigAction::Schema { output } => cli::run_config_schema(output.as_deref()),
        },

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "ehr-compliance", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);

    match dispatch(&cli) {
        Ok(exit_codes::SUCCESS) => {}
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}
