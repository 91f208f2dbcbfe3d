//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via
//! bootstrap. Command dispatch routes to handlers.

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use specfit_cli::handlers::{self, check::CheckArgs};
use specfit_cli::{Cli, CliConfig, CliError, Commands, bootstrap};

/// Exit status when the report contains a failing dimension.
const EXIT_REQUIREMENTS_NOT_MET: u8 = 1;

fn init_tracing(verbose: bool) {
    let default = if verbose {
        "warn,specfit_core=debug,specfit_db=debug,specfit_runtime=debug,specfit_cli=debug"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

async fn run(mut cli: Cli) -> Result<ExitCode, CliError> {
    // Dispatch to appropriate handler
    let Some(command) = cli.command.take() else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(ExitCode::SUCCESS);
    };

    // Bootstrap the CLI context (composition root)
    let config = CliConfig::from_cli(&cli)?;
    let ctx = bootstrap(config)?;

    match command {
        Commands::Titles => handlers::titles::execute(&ctx),
        Commands::Check {
            title,
            kind,
            json,
            retries,
        } => {
            let args = CheckArgs {
                title: &title,
                kind,
                json,
                retries,
            };
            if !handlers::check::execute(&ctx, args).await? {
                return Ok(ExitCode::from(EXIT_REQUIREMENTS_NOT_MET));
            }
        }
        Commands::Specs { json } => handlers::specs::execute(&ctx, json)?,
        Commands::Catalog(command) => handlers::catalog::execute(&ctx, command).await?,
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables before parsing so env fallbacks see them
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    init_tracing(cli.verbose);

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "Command failed");
            eprintln!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
