//! `readup serve` command implementation.

use std::path::PathBuf;

use clap::Args;
use readup_config::{CliSettings, Config};
use readup_server::{run_server, server_config_from_config};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    /// Path to configuration file (default: auto-discover readup.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Enable verbose output (request and timing logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        // Build CLI settings from args
        let cli_settings = CliSettings {
            host: self.host,
            port: self.port,
        };

        // Load config
        let config = Config::load(self.config.as_deref(), Some(&cli_settings))?;

        // Print startup info
        output.info(&format!(
            "Starting server on {}:{}",
            config.server.host, config.server.port
        ));
        for doc in &config.documents_resolved {
            output.info(&format!(
                "Serving /{} from {}",
                doc.route,
                doc.source_path.display()
            ));
            // Sources are re-read per request, so a missing file is only a
            // warning here; requests for the route fail until it appears.
            if !doc.source_path.exists() {
                output.warning(&format!(
                    "Source file for /{} does not exist yet: {}",
                    doc.route,
                    doc.source_path.display()
                ));
            }
        }

        // Build server config and run
        let server_config = server_config_from_config(&config);
        run_server(server_config)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
