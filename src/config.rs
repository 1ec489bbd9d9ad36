//! Layered application configuration.
//!
//! Priority: CLI flag > environment variable > config file > defaults.

use clap::Parser;
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

/// Command-line interface.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "GPAULT_CONFIG_FILE")]
    pub config: Option<String>,

    /// Host to bind
    #[arg(long, env = "GPAULT_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long, env = "GPAULT_PORT")]
    pub port: Option<u16>,

    /// Directory served under /static
    #[arg(long, env = "GPAULT_STATIC_DIR")]
    pub static_dir: Option<String>,
}

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
}

/// HTTP server settings.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: String,
}

impl AppConfig {
    /// Load configuration from the process arguments and environment.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Load configuration from explicit arguments (used by tests).
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let mut builder = Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?
            .set_default("server.static_dir", "static")?;

        // Optional config file: explicit path, or ./gpault.yaml when present.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::new(path, FileFormat::Yaml)),
            None => builder.add_source(File::new("gpault", FileFormat::Yaml).required(false)),
        };

        // Environment variables, e.g. GPAULT_SERVER__PORT=8000.
        builder = builder.add_source(
            Environment::with_prefix("GPAULT")
                .separator("__")
                .try_parsing(true),
        );

        // CLI flags win over everything else.
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", i64::from(port))?;
        }
        if let Some(dir) = cli.static_dir {
            builder = builder.set_override("server.static_dir", dir)?;
        }

        builder.build()?.try_deserialize()
    }
}
