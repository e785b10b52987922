use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clipsum::clipboard::ClipboardHandler;
use clipsum::config::{Config, ConfigOverrides};
use clipsum::logging::{default_log_path, init_tracing};
use clipsum::model::OllamaClient;
use clipsum::summarize::SummarizeWorker;
use clipsum::ui::app::App;
use clipsum::ui::events::EventHandler;

/// Summarize the clipboard with a local language model.
#[derive(Parser, Debug)]
#[command(name = "clipsum", version, about)]
struct Cli {
    /// Path to config.toml (default: platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the model name (e.g. llama3)
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Override the model service base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the summarization timeout in seconds
    #[arg(long, value_name = "N")]
    timeout_seconds: Option<u64>,

    /// Override the clipboard character limit
    #[arg(long, value_name = "N")]
    max_chars: Option<usize>,

    /// Show model failures as the summary text instead of as an error
    #[arg(long)]
    legacy_failure_routing: bool,

    /// Write logs to this file (default: platform cache dir)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log filter, e.g. "debug" or "clipsum=trace" (default: $RUST_LOG or info)
    #[arg(long, value_name = "FILTER")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config(&cli)?;

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path, cli.log_level.as_deref())?;
    tracing::info!(
        model = %config.model.name,
        base_url = %config.model.base_url,
        timeout_secs = config.model.timeout_seconds,
        max_chars = config.request.max_chars,
        failure_routing = ?config.request.failure_routing,
        "Starting clipsum"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("clipsum-rt")
        .build()
        .context("Failed to start async runtime")?;

    let client = OllamaClient::new(&config.model).context("Failed to build model client")?;
    let endpoint = client.base_url().to_string();
    let clipboard = ClipboardHandler::new()?;

    let worker = SummarizeWorker::new(
        Arc::new(client),
        runtime.handle().clone(),
        config.model.timeout(),
        config.request.failure_routing,
    );

    let tick_rate = config.ui.tick_rate();
    let events = EventHandler::new(tick_rate).context("Failed to start input reader")?;
    let app = App::new(
        Box::new(clipboard),
        worker,
        events.sender(),
        config.request.max_chars,
        endpoint,
    );

    clipsum::ui::runtime::run(app, events, tick_rate).context("Terminal UI failed")?;

    // Calls that timed out may still be running; do not wait for them.
    runtime.shutdown_background();
    Ok(())
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let config = config.with_overrides(ConfigOverrides {
        model: cli.model.clone(),
        base_url: cli.base_url.clone(),
        timeout_seconds: cli.timeout_seconds,
        max_chars: cli.max_chars,
        legacy_failure_routing: cli.legacy_failure_routing,
    })?;
    Ok(config)
}
