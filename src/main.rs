use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chat_ui_server::config::{ServerConfig, DEFAULT_PORT};
use chat_ui_server::http::HttpServer;

#[derive(Parser)]
#[command(name = "chat-ui-server")]
#[command(about = "Static file server with CORS proxy for the chat UI", long_about = None)]
struct Cli {
    /// Port to listen on.
    #[arg(default_value_t = DEFAULT_PORT)]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chat_ui_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig {
        port: cli.port,
        ..ServerConfig::default()
    };

    let listener = TcpListener::bind(config.bind_address()).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Chat UI server running at http://localhost:{}", config.port
    );
    tracing::info!(
        upstream = %config.upstream_url,
        "API proxy endpoint: http://localhost:{}/api/chat", config.port
    );

    let server = HttpServer::new(config)?;
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
