use std::path::PathBuf;

use clap::Parser;
use config::{Config, Environment, File};
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Config file path
    #[arg(short, long, env = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Port to listen on
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind
    #[arg(long)]
    pub host: Option<String>,

    /// Tab shown when `/` is requested
    #[arg(long)]
    pub default_tab: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub shell: ShellConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
}

/// Branding and defaults for the navigation shell.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub brand: String,
    pub tagline: String,
    pub user_label: String,
    pub default_tab: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            brand: "Zava AR".to_string(),
            tagline: "Accounts Receivable".to_string(),
            user_label: "AR Manager".to_string(),
            default_tab: "dashboard".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from_args(std::env::args())
    }

    /// Priority: CLI flag > CLI env var > `ZAVA_*` env > config file > defaults.
    pub fn load_from_args<I, T>(args: I) -> Result<Self, config::ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let cli =
            Cli::try_parse_from(args).map_err(|e| config::ConfigError::Message(e.to_string()))?;

        let shell = ShellConfig::default();
        let mut builder = Config::builder()
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.static_dir", "static")?
            .set_default("shell.brand", shell.brand)?
            .set_default("shell.tagline", shell.tagline)?
            .set_default("shell.user_label", shell.user_label)?
            .set_default("shell.default_tab", shell.default_tab)?;

        // An explicit file must exist; ./config.{yaml,toml,json} is optional.
        builder = match &cli.config {
            Some(path) => builder.add_source(File::from(path.as_path())),
            None => builder.add_source(File::with_name("config").required(false)),
        };

        // E.g. ZAVA_SERVER__PORT=8000, ZAVA_SHELL__DEFAULT_TAB=invoices
        builder = builder.add_source(
            Environment::with_prefix("ZAVA")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        if let Some(port) = cli.port {
            builder = builder.set_override("server.port", port)?;
        }
        if let Some(host) = cli.host {
            builder = builder.set_override("server.host", host)?;
        }
        if let Some(tab) = cli.default_tab {
            builder = builder.set_override("shell.default_tab", tab)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Socket address string for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
