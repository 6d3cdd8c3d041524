use anyhow::Context;
use clap::Parser;

use gympass_service::ServiceError;

mod cli;
mod commands;
mod context;
mod output;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("gympass error: {error:#}");
        std::process::exit(exit_code(&error));
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;

    let flags = cli.global_flags();

    if let cli::Commands::Schema(args) = &cli.command {
        return commands::schema::handle(args, &flags);
    }

    let ctx = context::AppContext::init(&flags)
        .await
        .context("failed to initialize gympass application context")?;

    commands::dispatch::dispatch(cli.command, &ctx, &flags).await
}

/// Domain rejections exit with 2, everything else with 1.
fn exit_code(error: &anyhow::Error) -> i32 {
    if error
        .downcast_ref::<ServiceError>()
        .is_some_and(ServiceError::is_rejection)
    {
        2
    } else {
        1
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("GYMPASS_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejections_exit_with_two() {
        let error = anyhow::Error::from(ServiceError::AlreadyValidated {
            check_in_id: "chk-1".into(),
        });
        assert_eq!(exit_code(&error), 2);
    }

    #[test]
    fn rejections_behind_context_exit_with_two() {
        let error = anyhow::Error::from(ServiceError::InvalidInput("bad".into()))
            .context("while creating gym");
        assert_eq!(exit_code(&error), 2);
    }

    #[test]
    fn other_failures_exit_with_one() {
        assert_eq!(exit_code(&anyhow::anyhow!("disk full")), 1);
        let config = anyhow::Error::from(gympass_config::ConfigError::InvalidValue {
            field: "database.path".into(),
            reason: "must not be empty".into(),
        });
        assert_eq!(exit_code(&config), 1);
    }
}
