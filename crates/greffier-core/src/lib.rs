pub mod analyze;
pub mod config;
pub mod error;
pub mod resolution;
pub mod summary;

pub use analyze::{
    is_budget_related, normalize_line, scan_line, segment, select_budget_section, summarize,
    survey, AnalysisOutput, AnalysisPipeline, AnalysisStats, BudgetSummarizer, DocumentSurvey,
    LlmSummarizer, RuleBasedSummarizer, SummaryStrategy, SurveyEntry,
};
pub use config::{AnalysisConfig, Patterns};
pub use error::{SummaryError, SummaryResult};
pub use resolution::ResolutionRecord;
pub use summary::{BudgetReport, BudgetSummary, NOT_FOUND};
