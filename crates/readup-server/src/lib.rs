//! HTTP server for the readup quickstart site.
//!
//! This crate provides a native Rust HTTP server using axum, serving:
//! - A static landing page at `/`
//! - One route per configured Markdown document, rendered to HTML and
//!   embedded in a page shell
//! - Static assets (stylesheets, images referenced by rewritten paths)
//!   under `/static/`
//!
//! # Quick Start
//!
//! ```ignore
//! use std::path::PathBuf;
//! use readup_server::{ServerConfig, run_server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ServerConfig {
//!         host: "0.0.0.0".to_string(),
//!         port: 5000,
//!         documents: vec![],
//!         templates_dir: PathBuf::from("templates"),
//!         static_dir: PathBuf::from("static"),
//!     };
//!
//!     run_server(config).await.unwrap();
//! }
//! ```
//!
//! # Architecture
//!
//! ```text
//! Browser ──HTTP──► axum server (readup-server)
//!                        │
//!                        ├─► /           landing page shell
//!                        │
//!                        ├─► /<route>    DocumentRegistry::render
//!                        │                   │
//!                        │                   └─► page shell embed
//!                        │
//!                        └─► /static/*   files from the static directory
//! ```

mod app;
mod error;
mod handlers;
mod middleware;
mod shell;
mod state;
mod static_files;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

use readup_renderer::{DocumentMapping, DocumentRegistry, RewriteRule};
use shell::PageShell;
use state::AppState;

/// Server configuration.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    /// Host address to bind to.
    pub host: String,
    /// Port to listen on.
    pub port: u16,
    /// Document routes to serve.
    pub documents: Vec<DocumentMapping>,
    /// Directory containing page shell templates.
    pub templates_dir: PathBuf,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
}

/// Run the server.
///
/// # Arguments
///
/// * `config` - Server configuration
///
/// # Errors
///
/// Returns an error if the page shells cannot be loaded or the server
/// fails to start.
pub async fn run_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Load page shells once; the shell set is immutable afterwards
    let shell = PageShell::load(&config.templates_dir)?;

    // Create app state around the read-only document mapping
    let state = Arc::new(AppState {
        registry: DocumentRegistry::new(config.documents),
        shell,
        static_dir: config.static_dir,
    });

    // Create router
    let app = app::create_router(state);

    // Bind and run server
    let addr = SocketAddr::from_str(&format!("{}:{}", config.host, config.port))?;
    tracing::info!(address = %addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Wait for shutdown signal (Ctrl-C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received, stopping server...");
}

/// Create server configuration from readup config.
///
/// # Arguments
///
/// * `config` - readup configuration
#[must_use]
pub fn server_config_from_config(config: &readup_config::Config) -> ServerConfig {
    let documents = config
        .documents_resolved
        .iter()
        .map(|doc| DocumentMapping {
            route_id: doc.route.clone(),
            source_path: doc.source_path.clone(),
            rewrite: doc
                .rewrite
                .as_ref()
                .map(|rule| RewriteRule::new(rule.find.clone(), rule.replace_with.clone())),
            view_template: doc.template.clone(),
        })
        .collect();

    ServerConfig {
        host: config.server.host.clone(),
        port: config.server.port,
        documents,
        templates_dir: config.site_resolved.templates_dir.clone(),
        static_dir: config.site_resolved.static_dir.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_server_config_from_config_maps_documents() {
        let config = readup_config::Config::default();
        let server_config = server_config_from_config(&config);

        assert_eq!(server_config.host, "0.0.0.0");
        assert_eq!(server_config.port, 5000);
        assert_eq!(server_config.documents.len(), 1);

        let readme = &server_config.documents[0];
        assert_eq!(readme.route_id, "readme");
        assert_eq!(readme.view_template, "document");
        let rewrite = readme.rewrite.as_ref().unwrap();
        assert_eq!(rewrite.find, r#"src="images/"#);
        assert_eq!(rewrite.replace_with, r#"src="/static/readme-images/images/"#);
    }
}
