use serde::{Deserialize, Serialize};

/// One numbered agenda item voted on during the assembly.
///
/// Content lines, amounts, and vote lines accumulate in document order
/// while the record is open; `fiscal_year` and `adopted` keep the first
/// unambiguous signal and ignore later ones.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionRecord {
    pub number: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub content_lines: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub amounts: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub vote_lines: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub adopted: Option<bool>,
}

impl ResolutionRecord {
    #[must_use]
    pub fn new(number: u32, title: String) -> Self {
        Self {
            number,
            title,
            content_lines: Vec::new(),
            amounts: Vec::new(),
            vote_lines: Vec::new(),
            fiscal_year: None,
            adopted: None,
        }
    }

    #[must_use]
    pub fn with_content_line(mut self, line: impl Into<String>) -> Self {
        self.content_lines.push(line.into());
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: impl Into<String>) -> Self {
        self.amounts.push(amount.into());
        self
    }

    pub fn push_content(&mut self, line: String) {
        self.content_lines.push(line);
    }

    pub fn push_amount(&mut self, amount: String) {
        self.amounts.push(amount);
    }

    pub fn push_vote_line(&mut self, line: String) {
        self.vote_lines.push(line);
    }

    /// Keeps the first year seen; later matches are ignored.
    pub fn record_fiscal_year(&mut self, year: &str) {
        if self.fiscal_year.is_none() {
            self.fiscal_year = Some(year.to_string());
        }
    }

    /// First unambiguous signal wins; a later contradicting phrase does
    /// not overwrite the verdict.
    pub fn record_verdict(&mut self, adopted: bool) {
        if self.adopted.is_none() {
            self.adopted = Some(adopted);
        }
    }

    #[must_use]
    pub fn has_amounts(&self) -> bool {
        !self.amounts.is_empty()
    }
}
