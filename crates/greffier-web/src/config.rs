use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Which summarization strategy the server runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyChoice {
    Rule,
    Llm,
}

/// Server configuration, read from the environment at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Directory the upload endpoint writes into and the analysis
    /// endpoint reads from.
    pub upload_dir: PathBuf,
    pub port: u16,
    pub strategy: StrategyChoice,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_model: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("tmp/uploads"),
            port: 3000,
            strategy: StrategyChoice::Rule,
            llm_base_url: None,
            llm_model: None,
        }
    }
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let upload_dir = std::env::var("GREFFIER_UPLOAD_DIR")
            .map_or(defaults.upload_dir, PathBuf::from);

        let port = std::env::var("GREFFIER_PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.port);

        let strategy = match std::env::var("GREFFIER_STRATEGY").as_deref() {
            Ok("llm") => StrategyChoice::Llm,
            _ => StrategyChoice::Rule,
        };

        Self {
            upload_dir,
            port,
            strategy,
            llm_base_url: std::env::var("GREFFIER_LLM_URL").ok(),
            llm_model: std::env::var("GREFFIER_LLM_MODEL").ok(),
        }
    }
}
