//! Configuration management for readup.
//!
//! Parses `readup.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! CLI settings can be applied during load via [`CliSettings`].
//!
//! The document table is the heart of the configuration: each `[[documents]]`
//! entry binds a route identifier to a Markdown source file, an optional
//! image path rewrite, and a page shell template. When no documents are
//! configured, a single `readme` route serving `README.md` is assumed.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// CLI settings that override configuration file values.
///
/// All fields are optional. Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override server host.
    pub host: Option<String>,
    /// Override server port.
    pub port: Option<u16>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "readup.toml";

/// Route prefix reserved for static asset serving.
const STATIC_ROUTE: &str = "static";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,
    /// Site layout configuration (paths are relative strings from TOML).
    site: SiteConfigRaw,
    /// Document routes (paths are relative strings from TOML).
    documents: Vec<DocumentConfigRaw>,

    /// Resolved site configuration (set after loading).
    #[serde(skip)]
    pub site_resolved: SiteConfig,
    /// Resolved document routes (set after loading).
    #[serde(skip)]
    pub documents_resolved: Vec<DocumentConfig>,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Server configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 5000,
        }
    }
}

/// Raw site configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SiteConfigRaw {
    templates_dir: Option<String>,
    static_dir: Option<String>,
}

/// Resolved site layout configuration with absolute paths.
#[derive(Debug, Default)]
pub struct SiteConfig {
    /// Directory containing page shell templates.
    pub templates_dir: PathBuf,
    /// Directory served under `/static/`.
    pub static_dir: PathBuf,
}

/// Raw document route as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize)]
struct DocumentConfigRaw {
    route: String,
    source: String,
    #[serde(default = "default_template")]
    template: String,
    rewrite: Option<RewriteSetting>,
}

fn default_template() -> String {
    "document".to_owned()
}

/// Resolved document route with an absolute source path.
#[derive(Debug, Clone)]
pub struct DocumentConfig {
    /// Route identifier (URL path segment).
    pub route: String,
    /// Markdown source file path.
    pub source_path: PathBuf,
    /// Page shell template identifier.
    pub template: String,
    /// Image path rewrite applied to the converted HTML.
    pub rewrite: Option<RewriteSetting>,
}

/// Substring replacement configuration for image paths.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct RewriteSetting {
    /// Literal substring to search for.
    pub find: String,
    /// Replacement substring.
    pub replace_with: String,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file.
    /// Otherwise, searches for `readup.toml` in current directory and parents.
    ///
    /// CLI settings are applied after loading and path resolution, allowing CLI
    /// arguments to take precedence over config file values.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist or parsing fails.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
        }

        Ok(config)
    }

    /// Apply CLI settings to the configuration.
    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(host) = &settings.host {
            self.server.host.clone_from(host);
        }
        if let Some(port) = settings.port {
            self.server.port = port;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        Self {
            server: ServerConfig::default(),
            site: SiteConfigRaw::default(),
            documents: Vec::new(),
            site_resolved: SiteConfig {
                templates_dir: base.join("templates"),
                static_dir: base.join("static"),
            },
            documents_resolved: vec![default_readme_document(base)],
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        // Validate configuration after loading and resolution
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// Checks that all required fields are properly set and contain valid values.
    /// Called automatically after loading from file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_server()?;
        self.validate_documents()?;
        Ok(())
    }

    /// Validate server configuration.
    fn validate_server(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.server.host, "server.host")?;

        // Port 0 is technically valid (OS assigns a random port), but it's
        // unlikely to be intentional in a config file
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port cannot be 0".to_owned(),
            ));
        }

        Ok(())
    }

    /// Validate document routes.
    ///
    /// Each route identifier must map to exactly one source path and one
    /// rewrite rule, so duplicates are rejected here.
    fn validate_documents(&self) -> Result<(), ConfigError> {
        let mut seen: Vec<&str> = Vec::new();

        for doc in &self.documents_resolved {
            require_non_empty(&doc.route, "documents.route")?;
            require_non_empty(&doc.template, "documents.template")?;

            if doc.route.contains('/') {
                return Err(ConfigError::Validation(format!(
                    "documents.route '{}' cannot contain '/'",
                    doc.route
                )));
            }
            if doc.route == STATIC_ROUTE {
                return Err(ConfigError::Validation(format!(
                    "documents.route '{STATIC_ROUTE}' is reserved for asset serving"
                )));
            }
            if seen.contains(&doc.route.as_str()) {
                return Err(ConfigError::Validation(format!(
                    "duplicate documents.route '{}'",
                    doc.route
                )));
            }
            seen.push(&doc.route);

            if doc.source_path.as_os_str().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "documents.source for route '{}' cannot be empty",
                    doc.route
                )));
            }
            if let Some(rewrite) = &doc.rewrite {
                require_non_empty(&rewrite.find, "documents.rewrite.find")?;
            }
        }

        Ok(())
    }

    /// Resolve relative paths to absolute paths based on config directory.
    ///
    /// When no `[[documents]]` entries are configured, a default `readme`
    /// route serving `README.md` next to the config file is assumed.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let resolve = |path: Option<&str>, default: &str| config_dir.join(path.unwrap_or(default));

        self.site_resolved = SiteConfig {
            templates_dir: resolve(self.site.templates_dir.as_deref(), "templates"),
            static_dir: resolve(self.site.static_dir.as_deref(), "static"),
        };

        self.documents_resolved = if self.documents.is_empty() {
            vec![default_readme_document(config_dir)]
        } else {
            self.documents
                .iter()
                .map(|doc| DocumentConfig {
                    route: doc.route.clone(),
                    source_path: config_dir.join(&doc.source),
                    template: doc.template.clone(),
                    rewrite: doc.rewrite.clone(),
                })
                .collect()
        };
    }
}

/// The default `readme` document: the project README served at `/readme`
/// with relative image paths redirected at the static asset tree.
fn default_readme_document(base: &Path) -> DocumentConfig {
    DocumentConfig {
        route: "readme".to_owned(),
        source_path: base.join("README.md"),
        template: default_template(),
        rewrite: Some(RewriteSetting {
            find: r#"src="images/"#.to_owned(),
            replace_with: r#"src="/static/readme-images/images/"#.to_owned(),
        }),
    }
}
