//! CLI entrypoint for Smart Tutor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use tutor_application::{
    ActionNotifier, CompletionGateway, NoProgress, RelayCompletionUseCase, TutorApp,
    UpstreamChatApi,
};
use tutor_domain::Subject;
use tutor_infrastructure::{
    ConfigLoader, FileConfig, FileUpstreamConfig, HttpCompletionGateway, OpenAiChatApi,
};
use tutor_presentation::{
    Cli, Command, ProgressReporter, ServeArgs, SimpleProgress, TutorArgs, TutorRepl,
};

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

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
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    let config = if cli.no_config {
        ConfigLoader::load_defaults()?
    } else {
        ConfigLoader::load(cli.config.as_ref())?
    };

    match cli.command {
        Some(Command::Serve(args)) => run_gateway(config, args).await,
        Some(Command::Tutor(args)) => run_tutor(config, args).await,
        None => run_tutor(config, TutorArgs::default()).await,
    }
}

/// Build the relay from the `[upstream]` section. The key is read once here;
/// without one every request is answered with a configuration error.
fn build_relay(upstream: &FileUpstreamConfig) -> Result<Arc<RelayCompletionUseCase>> {
    let api: Arc<dyn UpstreamChatApi> = match upstream.timeout_seconds {
        Some(secs) => Arc::new(OpenAiChatApi::with_timeout(
            &upstream.base_url,
            Duration::from_secs(secs),
        )?),
        None => Arc::new(OpenAiChatApi::new(&upstream.base_url)),
    };

    let relay = RelayCompletionUseCase::new(api, upstream.resolve_api_key())
        .with_params(upstream.relay_params());

    if !relay.has_credential() {
        warn!(
            env = %upstream.api_key_env,
            "Upstream API key is not set"
        );
    }

    Ok(Arc::new(relay))
}

async fn run_gateway(config: FileConfig, args: ServeArgs) -> Result<()> {
    let mut server = config.server.clone();
    if let Some(port) = args.port {
        server.port = port;
    }
    if let Some(host) = args.host {
        server.host = host;
    }

    let relay = build_relay(&config.upstream)?;

    let address = server.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    tutor_presentation::serve(listener, relay).await?;
    info!("Gateway stopped");
    Ok(())
}

async fn run_tutor(config: FileConfig, args: TutorArgs) -> Result<()> {
    // === Dependency Injection ===
    let gateway: Arc<dyn CompletionGateway> = if args.local {
        info!("Relaying in-process");
        build_relay(&config.upstream)?
    } else {
        let url = args.gateway.unwrap_or(config.client.gateway_url);
        info!(gateway = %url, "Using completion gateway");
        Arc::new(HttpCompletionGateway::new(&url))
    };

    // Spinners need a terminal; piped output gets plain lines
    let notifier: Arc<dyn ActionNotifier> = if args.quiet || !config.client.show_progress {
        Arc::new(NoProgress)
    } else if std::io::stdout().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    };

    let subject = args
        .subject
        .as_deref()
        .map(str::parse::<Subject>)
        .transpose()?;

    let app = Arc::new(TutorApp::new(gateway).with_notifier(notifier));

    TutorRepl::new(app)
        .with_history_file(config.client.history_file.map(PathBuf::from))
        .with_subject(subject)
        .run()
        .await?;

    Ok(())
}
