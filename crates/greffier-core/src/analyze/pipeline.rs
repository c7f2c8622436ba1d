use std::time::Instant;

use crate::config::AnalysisConfig;
use crate::error::SummaryResult;
use crate::resolution::ResolutionRecord;
use crate::summary::BudgetSummary;

use super::segmenter::segment;
use super::selector::is_budget_related;
use super::strategy::{BudgetSummarizer, RuleBasedSummarizer, SummaryStrategy};

/// Run statistics for one analysis.
#[derive(Debug, Clone, Default)]
pub struct AnalysisStats {
    pub record_count: usize,
    pub relevant_count: usize,
    pub duration_ms: u64,
}

/// Everything one analysis produced: the record sequence, the derived
/// summary, and run statistics.
pub struct AnalysisOutput {
    pub records: Vec<ResolutionRecord>,
    pub summary: BudgetSummary,
    pub stats: AnalysisStats,
}

/// Front door of the engine: owns the configuration and the selected
/// summarization strategy. Stateless across invocations; every call
/// allocates its own record sequence.
pub struct AnalysisPipeline {
    config: AnalysisConfig,
    summarizer: Box<dyn BudgetSummarizer>,
}

impl AnalysisPipeline {
    /// Rule-based pipeline with the default configuration.
    pub fn new() -> Result<Self, regex::Error> {
        let config = AnalysisConfig::new()?;
        let summarizer = Box::new(RuleBasedSummarizer::new(config.clone()));
        Ok(Self::from_parts(config, summarizer))
    }

    #[must_use]
    pub fn from_parts(config: AnalysisConfig, summarizer: Box<dyn BudgetSummarizer>) -> Self {
        Self { config, summarizer }
    }

    #[must_use]
    pub fn strategy(&self) -> SummaryStrategy {
        self.summarizer.strategy()
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub async fn analyze_text(&self, text: &str) -> SummaryResult<AnalysisOutput> {
        let start = Instant::now();

        let records = segment(text, &self.config);
        let relevant_count = records
            .iter()
            .filter(|record| is_budget_related(record, &self.config))
            .count();

        let summary = self.summarizer.summarize(text).await?;

        let stats = AnalysisStats {
            record_count: records.len(),
            relevant_count,
            duration_ms: start.elapsed().as_millis() as u64,
        };

        tracing::debug!(
            records = stats.record_count,
            relevant = stats.relevant_count,
            "analysis complete"
        );

        Ok(AnalysisOutput {
            records,
            summary,
            stats,
        })
    }
}
