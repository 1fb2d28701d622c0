mod api;
mod config;
mod error;
mod server;

use std::sync::Arc;

use rmcp::{ServiceExt, transport::stdio};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use skills_core::catalog::Catalog;

use config::Config;
use error::AppError;
use server::SkillsCatalogServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr (stdout is reserved for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting skills-catalog MCP server");

    let config = Config::from_env()?;
    info!(
        external_dataset = config.data_path.is_some(),
        tcp = config.tcp_listen_addr.is_some(),
        http = config.http_listen_addr.is_some(),
        "configuration loaded"
    );

    let catalog = load_catalog(&config)?;
    info!(
        skills = catalog.len(),
        categories = catalog.categories().len(),
        revision = %catalog.revision(),
        "catalog loaded"
    );

    let server = SkillsCatalogServer::new(Arc::new(catalog));

    if let Some(addr) = config.http_listen_addr {
        serve_http(server, &addr).await
    } else if let Some(addr) = config.tcp_listen_addr {
        serve_tcp(server, &addr).await
    } else {
        info!("MCP server ready, serving on stdio");
        let service = server.serve(stdio()).await.inspect_err(|e| {
            tracing::error!(error = %e, "MCP server error");
        })?;
        service.waiting().await?;
        info!("MCP server shut down");
        Ok(())
    }
}

/// Load the catalog once at startup, from `SKILLS_DATA_PATH` when set and
/// from the embedded dataset otherwise.
fn load_catalog(config: &Config) -> Result<Catalog, AppError> {
    match &config.data_path {
        Some(path) => {
            info!(path = %path.display(), "loading catalog from external dataset");
            Ok(skills_core::loader::load_from_path(path)?)
        }
        None => Ok(skills_core::loader::load_builtin()?),
    }
}

/// Accept raw MCP connections over TCP, one service task per client.
async fn serve_tcp(server: SkillsCatalogServer, addr: &str) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(listen_addr = %addr, "MCP server ready, serving on TCP");
    loop {
        let (stream, peer) = listener.accept().await?;
        let server = server.clone();
        tokio::spawn(async move {
            tracing::info!(peer = %peer, "MCP client connected");
            let service = server.serve(stream).await.inspect_err(|e| {
                tracing::error!(error = %e, "MCP server error");
            })?;
            service.waiting().await?;
            tracing::info!(peer = %peer, "MCP client disconnected");
            Ok::<(), anyhow::Error>(())
        });
    }
}

/// Serve the streamable-HTTP transport on an axum router at `/mcp`.
async fn serve_http(server: SkillsCatalogServer, addr: &str) -> anyhow::Result<()> {
    use rmcp::transport::streamable_http_server::{
        StreamableHttpService, session::local::LocalSessionManager,
    };

    let service = StreamableHttpService::new(
        move || Ok(server.clone()),
        LocalSessionManager::default().into(),
        Default::default(),
    );
    let router = axum::Router::new().nest_service("/mcp", service);

    let listener = TcpListener::bind(addr).await?;
    info!(listen_addr = %addr, "MCP server ready, serving streamable HTTP at /mcp");
    axum::serve(listener, router).await?;
    Ok(())
}
