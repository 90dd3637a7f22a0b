//! CLI entrypoint for prompt-fanout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use fanout_application::{BehaviorConfig, RunAskUseCase, RunFanOutUseCase};
use fanout_domain::OutputFormat;
use fanout_infrastructure::{ConfigLoader, FileConfig, InMemoryResponseCache, OpenRouterGateway};
use fanout_presentation::{Cli, Command, ConsoleFormatter, ProgressReporter};
use std::sync::Arc;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level; RUST_LOG wins when set
    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    // A missing .env file is fine; the environment may already carry the key
    match dotenvy::dotenv() {
        Ok(path) => debug!("Loaded environment from {}", path.display()),
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e).context("Failed to read .env file"),
    }

    if cli.show_config {
        print!("{}", ConfigLoader::describe_sources());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };

    let Some(command) = cli.command else {
        anyhow::bail!("A command is required. Run with --help to see the available commands.");
    };

    match command {
        Command::Strategies => {
            println!("{}", ConsoleFormatter::format_strategies());
            Ok(())
        }
        Command::Serve { bind } => serve(config, bind).await,
        Command::Run {
            query,
            output,
            model,
        } => run(config, cli.quiet, query, output.map(Into::into), model).await,
        Command::Ask {
            prompt,
            model,
            system,
        } => ask(config, prompt, model, system).await,
    }
}

async fn serve(mut config: FileConfig, bind: Option<String>) -> Result<()> {
    if let Some(bind) = bind {
        config.server.bind = bind;
    }
    config.validate()?;
    let addr = config.server.parse_bind()?;

    // Resolving the credential here means a missing key stops startup
    // before the listener is bound.
    let gateway = Arc::new(OpenRouterGateway::from_config(&config.upstream)?);
    let behavior = config.to_behavior_config();

    let use_case = RunFanOutUseCase::new(gateway, Arc::new(InMemoryResponseCache::new()))
        .with_model(behavior.fanout_model);

    info!("Starting prompt-fanout server");
    fanout_presentation::serve(addr, Arc::new(use_case))
        .await
        .context("HTTP server failed")
}

async fn run(
    mut config: FileConfig,
    quiet: bool,
    query: String,
    output: Option<OutputFormat>,
    model: Option<String>,
) -> Result<()> {
    if let Some(model) = model {
        config.upstream.model = model;
    }
    config.validate()?;

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = output.or(config.output.format).unwrap_or_default();

    let gateway = Arc::new(OpenRouterGateway::from_config(&config.upstream)?);
    let behavior = config.to_behavior_config();
    let use_case = RunFanOutUseCase::new(gateway, Arc::new(InMemoryResponseCache::new()))
        .with_model(behavior.fanout_model);

    // Progress bars would corrupt machine-readable output
    let result = if quiet || format == OutputFormat::Json {
        use_case.execute(&query).await?
    } else {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(&query, &progress).await?
    };

    let rendered = ConsoleFormatter::render(&query, &result, format)
        .context("Failed to serialize result as JSON")?;
    println!("{}", rendered);
    Ok(())
}

async fn ask(
    mut config: FileConfig,
    prompt: String,
    model: Option<String>,
    system: Option<String>,
) -> Result<()> {
    if let Some(model) = model {
        config.ask.model = model;
    }
    if let Some(system) = system {
        config.ask.system_prompt = system;
    }
    config.validate()?;

    let gateway = Arc::new(OpenRouterGateway::from_config(&config.upstream)?);
    let behavior: BehaviorConfig = config.to_behavior_config();
    debug!("Ask model: {}", behavior.ask_model);

    let use_case = RunAskUseCase::new(gateway, &behavior);
    let answer = use_case.execute(&prompt).await?;

    println!("{}", answer);
    Ok(())
}
