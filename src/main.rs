use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ideaforge::cli::commands::OutputFormat;
use ideaforge::config::ConfigLoader;

/// Parse output format from string
fn parse_output_format(s: &str) -> Result<OutputFormat, String> {
    s.parse()
}

#[derive(Parser)]
#[command(name = "ideaforge")]
#[command(
    version,
    about = "AI-driven project idea enrichment: stack detection, feature breakdown, curated resources"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, short, help = "Config file (default: ideaforge.toml)")]
    config: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,

    #[arg(long, short)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Detect the tech stack an idea implies and suggest alternatives
    Detect {
        #[arg(help = "Free-text project idea")]
        idea: String,
        #[arg(long, short = 't', help = "Project type bias (Frontend, Backend, Fullstack)")]
        project_type: Option<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            value_parser = parse_output_format,
            help = "Output format: text, json"
        )]
        format: OutputFormat,
    },

    /// Break an idea into features and enrich each with repos, videos, and a snippet
    Generate {
        #[arg(help = "Free-text project idea")]
        idea: String,
        #[arg(long, short = 's', help = "Tech stack (detected automatically when omitted)")]
        tech_stack: Option<String>,
        #[arg(long, short = 't', help = "Project type bias (Frontend, Backend, Fullstack)")]
        project_type: Option<String>,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            value_parser = parse_output_format,
            help = "Output format: text, json"
        )]
        format: OutputFormat,
    },

    /// Check that the generative backend is reachable
    Health,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (credentials redacted)
    Show {
        #[arg(long, help = "Output as JSON instead of TOML")]
        json: bool,
    },
    /// Show configuration file path and environment overrides
    Path,
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Detect {
            idea,
            project_type,
            format,
        } => {
            let config = ConfigLoader::load_with_file(cli.config.as_deref())?;
            let rt = Runtime::new()?;
            rt.block_on(ideaforge::cli::commands::detect::run(
                &config,
                &idea,
                project_type.as_deref(),
                format,
            ))?;
        }
        Commands::Generate {
            idea,
            tech_stack,
            project_type,
            format,
        } => {
            let config = ConfigLoader::load_with_file(cli.config.as_deref())?;
            let rt = Runtime::new()?;
            rt.block_on(ideaforge::cli::commands::generate::run(
                &config,
                &idea,
                tech_stack.as_deref(),
                project_type.as_deref(),
                format,
            ))?;
        }
        Commands::Health => {
            let config = ConfigLoader::load_with_file(cli.config.as_deref())?;
            let rt = Runtime::new()?;
            rt.block_on(ideaforge::cli::commands::health::run(&config))?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { json } => {
                let config = ConfigLoader::load_with_file(cli.config.as_deref())?;
                ideaforge::cli::commands::config::show(&config, json)?;
            }
            ConfigAction::Path => {
                ideaforge::cli::commands::config::path();
            }
        },
    }

    Ok(())
}
