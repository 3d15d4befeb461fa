//! HelpBubble HTTP server entrypoint.

use std::net::SocketAddr;
use std::time::Duration;

use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use helpbubble::config::Config;
use helpbubble::knowledge::KnowledgeBase;
use helpbubble::reader::{ExtractiveReader, ReaderConfig, ReaderError};
use helpbubble_server::gateway::{HandlerState, create_router_with_state};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const DEFAULT_HEALTH_CHECK_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    println!(
        r#"
  HelpBubble
  customer support question answering
"#
    );

    if std::env::args().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check());
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;
    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "HelpBubble starting"
    );

    let knowledge = match &config.knowledge_path {
        Some(path) => KnowledgeBase::from_json_file(path)?,
        None => KnowledgeBase::builtin(),
    };

    let mut reader_config = ReaderConfig::from_env();
    reader_config.model_path = config.model_path.clone();
    let model_name = reader_config.model_name.clone();

    let reader = match ExtractiveReader::load(reader_config) {
        Ok(reader) => Some(reader),
        Err(ReaderError::NotConfigured) => {
            tracing::warn!("No HELPBUBBLE_MODEL_PATH configured, serving canned answers only");
            None
        }
        Err(e) => {
            tracing::warn!("Failed to load QA model: {}. Serving canned answers only.", e);
            None
        }
    };

    let state = HandlerState::new(knowledge, reader, model_name);
    let app = create_router_with_state(state, &config.allowed_origins);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("HelpBubble shutdown complete");
    Ok(())
}

fn run_health_check() -> i32 {
    let port = std::env::var("HELPBUBBLE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_HEALTH_CHECK_PORT);

    let url = format!("http://127.0.0.1:{}/health", port);

    let Ok(rt) = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    else {
        return 1;
    };

    rt.block_on(async {
        let Ok(client) = reqwest::Client::builder()
            .timeout(Duration::from_secs(1))
            .build()
        else {
            return 1;
        };

        match client.get(&url).send().await {
            Ok(res) if res.status().is_success() => 0,
            _ => 1,
        }
    })
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
