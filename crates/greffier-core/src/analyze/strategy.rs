use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::AnalysisConfig;
use crate::error::{SummaryError, SummaryResult};
use crate::summary::{BudgetReport, BudgetSummary};

use super::segmenter::segment;
use super::selector::{is_budget_related, summarize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SummaryStrategy {
    RuleBased,
    LlmBased,
}

/// Interprets one document's extracted text into a budget summary.
///
/// Segmentation and relevance classification are shared between
/// strategies; only the final "interpret the relevant excerpts into
/// fields" step differs.
#[async_trait]
pub trait BudgetSummarizer: Send + Sync {
    fn strategy(&self) -> SummaryStrategy;

    async fn summarize(&self, text: &str) -> SummaryResult<BudgetSummary>;
}

/// Pure pattern-matching interpretation. Infallible: absence degrades
/// to `None` fields, never to an error.
pub struct RuleBasedSummarizer {
    config: AnalysisConfig,
}

impl RuleBasedSummarizer {
    #[must_use]
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl BudgetSummarizer for RuleBasedSummarizer {
    fn strategy(&self) -> SummaryStrategy {
        SummaryStrategy::RuleBased
    }

    async fn summarize(&self, text: &str) -> SummaryResult<BudgetSummary> {
        let records = segment(text, &self.config);
        Ok(summarize(&records, &self.config))
    }
}

const SYSTEM_PROMPT: &str = "Tu analyses des procès-verbaux d'assemblée générale de copropriété. \
À partir des résolutions fournies, identifie la résolution budgétaire approuvée et réponds \
uniquement avec un objet JSON contenant les clés montant, annee, resultatVote, numeroClause \
et estAdopte. Utilise la valeur \"Non trouvé\" pour toute clé indéterminée et false pour \
estAdopte en cas de doute.";

/// Hands a digest of the budget-relevant resolutions to an
/// OpenAI-compatible chat-completions endpoint and parses the JSON
/// object it returns.
pub struct LlmSummarizer {
    client: reqwest::Client,
    config: AnalysisConfig,
    base_url: String,
    model: String,
    api_key: String,
}

impl LlmSummarizer {
    #[must_use]
    pub fn new(config: AnalysisConfig, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key: api_key.into(),
        }
    }

    /// Reads the API key from `GREFFIER_LLM_API_KEY`.
    pub fn from_env(config: AnalysisConfig) -> SummaryResult<Self> {
        let api_key = std::env::var("GREFFIER_LLM_API_KEY")
            .map_err(|_| SummaryError::ModelUnavailable("GREFFIER_LLM_API_KEY not set".into()))?;
        Ok(Self::new(config, api_key))
    }

    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Budget-relevant resolutions rendered as a compact excerpt, or
    /// `None` when the document has none.
    fn digest(&self, text: &str) -> Option<String> {
        let records = segment(text, &self.config);
        let relevant: Vec<_> = records
            .iter()
            .filter(|record| is_budget_related(record, &self.config))
            .collect();

        if relevant.is_empty() {
            return None;
        }

        let mut digest = String::new();
        for record in relevant {
            digest.push_str(&format!("Résolution n°{} : {}\n", record.number, record.title));
            for line in &record.content_lines {
                digest.push_str(line);
                digest.push('\n');
            }
            digest.push('\n');
        }

        Some(digest)
    }

    async fn complete(&self, digest: &str) -> SummaryResult<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: digest,
                },
            ],
            temperature: 0.0,
            response_format: ResponseFormat {
                format_type: "json_object",
            },
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SummaryError::ModelUnavailable(format!(
                "status {}",
                response.status()
            )));
        }

        let body: ChatResponse = response.json().await?;
        body.choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| SummaryError::InvalidResponse("empty choices".into()))
    }
}

#[async_trait]
impl BudgetSummarizer for LlmSummarizer {
    fn strategy(&self) -> SummaryStrategy {
        SummaryStrategy::LlmBased
    }

    async fn summarize(&self, text: &str) -> SummaryResult<BudgetSummary> {
        let Some(digest) = self.digest(text) else {
            return Ok(BudgetSummary::not_found());
        };

        tracing::debug!(model = %self.model, "requesting budget interpretation");

        let content = self.complete(&digest).await?;
        let report: BudgetReport = serde_json::from_str(strip_fences(&content))
            .map_err(|e| SummaryError::InvalidResponse(e.to_string()))?;

        Ok(report.into_summary())
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    format_type: &'static str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatContent,
}

#[derive(Deserialize)]
struct ChatContent {
    content: String,
}

/// Models sometimes wrap the object in a markdown code fence.
fn strip_fences(content: &str) -> &str {
    let trimmed = content.trim();
    trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .map_or(trimmed, str::trim)
}
