pub mod toml_config;

pub use toml_config::{DemoConfig, LogFormat, LoggingConfig, RecordConfig};

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "proxy-singleton")]
#[command(about = "Demonstrates an intercepted record and a frozen singleton counter")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json: bool,

    #[arg(long, default_value = "1")]
    pub increments: u32,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 載入設定檔並套用命令列覆蓋
    pub fn load(&self) -> crate::utils::error::Result<DemoConfig> {
        let mut config = match &self.config {
            Some(path) => DemoConfig::from_file(path)?,
            None => DemoConfig::default(),
        };
        if self.json {
            config.logging.format = LogFormat::Json;
        }
        Ok(config)
    }
}
