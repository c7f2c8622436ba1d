mod extractor;
mod normalizer;
mod pipeline;
mod segmenter;
mod selector;
mod strategy;

pub use extractor::scan_line;
pub use normalizer::normalize_line;
pub use pipeline::{AnalysisOutput, AnalysisPipeline, AnalysisStats};
pub use segmenter::segment;
pub use selector::{
    is_budget_related, select_budget_section, summarize, survey, DocumentSurvey, SurveyEntry,
};
pub use strategy::{
    BudgetSummarizer, LlmSummarizer, RuleBasedSummarizer, SummaryStrategy,
};
