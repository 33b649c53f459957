//! CLI entrypoint for Blink
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use blink_application::{
    NoProgress, ProcessImageError, ProcessImageInput, ProcessImageUseCase, ProgressNotifier,
};
use blink_domain::DomainRegistry;
use blink_infrastructure::{ConfigLoader, GeminiGateway, guess_mime_type, validate_upload};
use blink_presentation::{
    Cli, ConsoleFormatter, OutputFormat, OutputFormatter, ProgressReporter,
};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        print!("{}", ConfigLoader::describe_sources());
        return Ok(ExitCode::SUCCESS);
    }

    let registry = Arc::new(DomainRegistry::builtin());

    if cli.list_domains {
        print!("{}", ConsoleFormatter::format_domains(&registry));
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let config = if cli.no_config {
        ConfigLoader::load_env_only()
    } else {
        ConfigLoader::load(cli.config.as_deref())
    }
    .context("failed to load configuration")?;

    for issue in config.validate() {
        warn!("{}: {}", issue.field, issue.message);
    }

    // === Upload ===
    let Some(path) = cli.image.as_deref() else {
        anyhow::bail!("An image path is required. Use --list-domains to see domains.");
    };
    let image_bytes = tokio::fs::read(path)
        .await
        .with_context(|| format!("failed to read {}", path.display()))?;
    let mime_type = cli
        .mime
        .clone()
        .unwrap_or_else(|| guess_mime_type(path).to_string());

    if let Err(e) = validate_upload(&mime_type, &image_bytes, &config.upload_limits()) {
        eprintln!("error: {e}");
        return Ok(ExitCode::from(2));
    }

    // === Dependency Injection ===
    let gateway = Arc::new(GeminiGateway::new(config.gemini_settings()));
    let use_case = ProcessImageUseCase::new(gateway, registry, config.process_config());

    info!(domain = %cli.domain, path = %path.display(), "Starting Blink");

    let cancel = CancellationToken::new();
    let ctrl_c = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            ctrl_c.cancel();
        }
    });

    let reporter = ProgressReporter::new();
    let progress: &dyn ProgressNotifier = if cli.quiet { &NoProgress } else { &reporter };

    let input = ProcessImageInput::new(cli.domain.clone(), image_bytes, mime_type);
    match use_case.execute_cancellable(input, progress, &cancel).await {
        Ok(response) => {
            let formatter: &dyn OutputFormatter = &ConsoleFormatter;
            let output = match cli.output {
                OutputFormat::Json => formatter.format_json(&response),
                OutputFormat::Summary => formatter.format_summary(&response),
            };
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            reporter.clear();
            eprintln!("error: {e}");
            Ok(process_exit_code(&e))
        }
    }
}

/// Exit codes follow the error class so scripts can tell failures apart.
fn process_exit_code(error: &ProcessImageError) -> ExitCode {
    use blink_application::ErrorClass;

    match error.class() {
        ErrorClass::BadRequest | ErrorClass::NotFound => ExitCode::from(2),
        ErrorClass::Internal => ExitCode::from(3),
        ErrorClass::UpstreamUnavailable => ExitCode::from(4),
        ErrorClass::Upstream(_) => ExitCode::from(5),
        ErrorClass::BadGateway => ExitCode::from(6),
        ErrorClass::Cancelled => ExitCode::from(130),
    }
}
