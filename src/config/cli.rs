use crate::config::toml_config::FileConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::{Parser, Subcommand};

pub const DEFAULT_STORE_PATH: &str = "./visit_details.jsonl";

#[derive(Debug, Clone, Parser)]
#[command(name = "visit-counter")]
#[command(about = "Record visits and read the visit count from a local store")]
pub struct CliConfig {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, help = "JSON Lines file holding the visit records")]
    pub store_path: Option<String>,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Print the visit count response
    Count,
    /// Append a visit record with the given value
    Add { value: String },
}

impl CliConfig {
    pub fn load_file_config(&self) -> Result<FileConfig> {
        match &self.config {
            Some(path) => FileConfig::from_file(path),
            None => Ok(FileConfig::default()),
        }
    }

    /// 優先順序: 命令列 > TOML > 預設值
    pub fn resolve_store_path(&self, file_config: &FileConfig) -> String {
        self.store_path
            .clone()
            .or_else(|| file_config.store.path.clone())
            .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string())
    }

    /// Event handed to the handler for this command.
    pub fn event(&self) -> serde_json::Value {
        match &self.command {
            Command::Count => serde_json::json!({}),
            Command::Add { value } => serde_json::json!({ "add": value }),
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.store_path {
            validate_path("store_path", path)?;
        }
        if let Some(path) = &self.config {
            validate_path("config", path)?;
        }
        Ok(())
    }
}
