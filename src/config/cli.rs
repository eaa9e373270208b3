use crate::config::{AppConfig, LogFormat};
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "solar-cep")]
#[command(about = "HTTP service estimating solar energy yield for a Brazilian postal code")]
pub struct CliConfig {
    #[arg(long, short, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Address to bind (overrides server.host)")]
    pub host: Option<String>,

    #[arg(long, help = "Port to listen on (overrides server.port)")]
    pub port: Option<u16>,

    #[arg(long, value_enum, help = "Log output format (overrides server.log_format)")]
    pub log_format: Option<LogFormat>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Defaults, then the optional TOML file, then flags.
    pub fn load(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(log_format) = self.log_format {
            config.server.log_format = log_format;
        }

        Ok(config)
    }
}
