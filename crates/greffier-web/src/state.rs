use std::sync::Arc;

use greffier_core::{AnalysisConfig, AnalysisPipeline, LlmSummarizer};

use crate::config::{ServerConfig, StrategyChoice};

/// Application state shared across all requests.
///
/// The pipeline is built once at startup; each request gets its own
/// record sequence, so no locking is needed around analysis.
#[derive(Clone)]
pub struct AppState {
    pub config: ServerConfig,
    pub pipeline: Arc<AnalysisPipeline>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> anyhow::Result<Self> {
        let pipeline = match config.strategy {
            StrategyChoice::Rule => AnalysisPipeline::new()?,
            StrategyChoice::Llm => {
                let analysis = AnalysisConfig::new()?;
                let mut summarizer = LlmSummarizer::from_env(analysis.clone())?;
                if let Some(url) = &config.llm_base_url {
                    summarizer = summarizer.with_base_url(url.clone());
                }
                if let Some(model) = &config.llm_model {
                    summarizer = summarizer.with_model(model.clone());
                }
                AnalysisPipeline::from_parts(analysis, Box::new(summarizer))
            }
        };

        Ok(Self {
            config,
            pipeline: Arc::new(pipeline),
        })
    }
}
