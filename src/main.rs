//! pwncheck - Have I Been Pwned breach lookup client.
//!
//! CLI entry point.

use clap::Parser;
use pwncheck::output::ConsoleOutput;
use pwncheck::{BreachService, CheckConfig, Commands, Config};
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    let config = Config::parse();

    // Logs go to stderr so plain output on stdout stays parseable
    let filter = if config.verbose {
        EnvFilter::new("pwncheck=debug,info")
    } else {
        EnvFilter::new("pwncheck=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match config.command {
        Commands::Check(check_config) => {
            if let Err(code) = run_check(check_config).await {
                return code;
            }
        }
    }

    ExitCode::SUCCESS
}

async fn run_check(check_config: CheckConfig) -> Result<(), ExitCode> {
    let output = ConsoleOutput::new(
        check_config.plain,
        check_config.json,
        check_config.show_exceptions,
    );
    let email = check_config.email.as_str();

    let service_config = check_config.service_config();
    debug!("Service config: {:?}", service_config);

    let result = match BreachService::new(service_config) {
        Ok(service) => service.check_email(email).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(result) => {
            output.print_result(email, &result);
            Ok(())
        }
        Err(e) => {
            debug!("Lookup failed for {}: {:?}", email, e);
            output.print_error(email, &e);
            Err(ExitCode::FAILURE)
        }
    }
}
