//! CLI entrypoint for Marketing Analyst
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use analyst_application::{ModelGateway, Orchestrator, TraceSink};
use analyst_domain::{AgentMode, ConversationMemory, Query};
use analyst_infrastructure::{
    ConfigLoader, FileConfig, JsonlTraceSink, SubstituteModelGateway, default_registry,
};
use analyst_presentation::{AnalystRepl, Cli, ConsoleFormatter, QuerySpinner};
use anyhow::{Result, bail};
use clap::Parser;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging: RUST_LOG wins, otherwise the -v count
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity_level(cli.verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(ExitCode::SUCCESS);
    }

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())?
    };
    apply_overrides(&cli, &mut config);

    let issues = config.validate();
    for issue in issues.iter().filter(|i| !i.is_error()) {
        warn!("Config {}: {}", issue.field, issue.message);
    }
    if let Some(issue) = issues.iter().find(|i| i.is_error()) {
        bail!("Invalid configuration {}: {}", issue.field, issue.message);
    }
    config.validate_environment()?;

    info!("Starting Marketing Analyst in {} mode", config.agent.mode);

    // === Dependency Injection ===
    let settings = config.agent.to_settings();
    let execution = config.execution.to_params();
    let tools = Arc::new(default_registry()?);
    let gateway = build_gateway(&config)?;

    let mut orchestrator =
        Orchestrator::new(gateway, tools, settings.clone()).with_execution(execution);

    if settings.tracing_enabled
        && let Some(path) = &config.trace.path
    {
        match JsonlTraceSink::new(path) {
            Some(sink) => {
                let sink: Arc<dyn TraceSink> = Arc::new(sink);
                orchestrator = orchestrator.with_trace_sink(sink);
            }
            None => warn!("Round tracing disabled: cannot open {}", path.display()),
        }
    }

    let formatter = ConsoleFormatter::new(config.output.format, config.output.color);

    // Interactive mode
    let Some(text) = cli.query_text() else {
        let mut repl = AnalystRepl::new(orchestrator, formatter)
            .with_highlights(cli.highlight.clone())
            .with_progress(!cli.quiet);
        repl.run().await?;
        return Ok(ExitCode::SUCCESS);
    };

    // Single query mode, with a fresh memory
    let query = Query::new(text).with_highlights(cli.highlight.clone());
    let mut memory = ConversationMemory::new();

    let spinner = QuerySpinner::start("Processing query...", !cli.quiet);
    let envelope = orchestrator.handle(&query, &mut memory).await;
    spinner.finish();

    println!("{}", formatter.render(&envelope, query.highlight_terms()));

    Ok(if envelope.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn verbosity_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Command-line flags take precedence over every configuration source.
fn apply_overrides(cli: &Cli, config: &mut FileConfig) {
    if let Some(mode) = cli.mode {
        config.agent.mode = mode;
    }
    if let Some(model) = &cli.model {
        config.agent.model = model.clone();
    }
    if cli.no_tracing {
        config.agent.tracing = false;
    }
    if let Some(output) = cli.output {
        config.output.format = output.into();
    }
    if let Some(max_rounds) = cli.max_rounds {
        config.execution.max_rounds = max_rounds;
    }
    if let Some(timeout) = cli.timeout {
        config.execution.decision_timeout_secs = timeout;
    }
}

/// Select the gateway once for the whole session.
fn build_gateway(config: &FileConfig) -> Result<Arc<dyn ModelGateway>> {
    match config.agent.mode {
        AgentMode::Substitute => Ok(Arc::new(SubstituteModelGateway::new())),
        AgentMode::Live => live_gateway(config),
    }
}

#[cfg(feature = "openai")]
fn live_gateway(config: &FileConfig) -> Result<Arc<dyn ModelGateway>> {
    use analyst_infrastructure::{LiveModelGateway, OpenAiInferenceClient};

    let client = OpenAiInferenceClient::from_config(&config.provider)?;
    info!("Live inference endpoint: {}", client.endpoint());
    Ok(Arc::new(LiveModelGateway::new(
        Arc::new(client),
        config.agent.to_settings(),
        config.execution.decision_timeout(),
    )))
}

#[cfg(not(feature = "openai"))]
fn live_gateway(_config: &FileConfig) -> Result<Arc<dyn ModelGateway>> {
    bail!("Live mode requires the `openai` feature; rebuild with --features openai")
}
