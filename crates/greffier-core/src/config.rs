use regex::Regex;

/// Keywords that mark a resolution as budget-related when selecting
/// the approved budget.
const BUDGET_KEYWORDS: &[&str] = &[
    "approbation du compte de dépenses",
    "compte de dépenses",
    "exercice comptable",
    "montant de",
    "charges",
    "dépenses de l'exercice",
];

/// Wider keyword list for survey-style relevance scans.
const BROAD_KEYWORDS: &[&str] = &[
    "budget",
    "dépenses",
    "exercice",
    "euros",
    "€",
    "charges",
    "comptable",
    "prévisionnel",
    "trésorerie",
    "créances",
    "dettes",
];

/// A numbered heading: digits, a `.` or `-` separator, then a title
/// fragment free of periods.
const RESOLUTION_PATTERN: &str = r"^\s*(\d+)\s*[.-]\s*([^.]+)";

/// Monetary amount: digits (optionally space-grouped), optional
/// two-decimal part, the euro symbol or word, optionally qualified TTC.
const AMOUNT_PATTERN: &str = r"(?i)\d[\d\s]*(?:[.,]\d{2})?\s*(?:€|euros?)(?:\s*TTC)?";

/// Vote tally anchored on the POUR token.
const VOTE_PATTERN: &str = r"(?i)POUR\s*[:=]?\s*(\d+)\s*/\s*(\d+)\s*(?:cp|copropriétaires?|voix)";

/// Relaxed tally: POUR, CONTRE, or an abstention-prefix token.
const RELAXED_VOTE_PATTERN: &str =
    r"(?i)(?:POUR|CONTRE|ABST[ENTION]*)\s*:?\s*(\d+)[\s/]*(\d+)\s*(?:cp|copropriétaires?|voix)";

const YEAR_PATTERN: &str = r"20\d{2}";

const ADOPTION_PATTERN: &str = r"(?i)la\s+résolution\s+est\s+adoptée|résolution\s+adoptée";

const REJECTION_PATTERN: &str = r"(?i)la\s+résolution\s+est\s+rejetée|résolution\s+rejetée";

const EXERCISE_PATTERN: &str =
    r"(?i)exercice\s*(?:du|de|pour)?\s*(\d{2}/\d{2}/\d{4})\s*au\s*(\d{2}/\d{2}/\d{4})";

/// Strict TTC-qualified amount used when deriving the summary. The
/// normalizer splits consecutive uppercase letters apart, so the TTC
/// token tolerates interior whitespace.
const BUDGET_AMOUNT_PATTERN: &str = r"(?i)montant\s+de\s+([\d\s]*[.,]\d{2})\s*€\s*T\s*T\s*C";

const VOTE_SUMMARY_PATTERN: &str = r"(\d+)\s*/\s*(\d+)\s*cp";

/// The POUR token as it appears in normalized content lines (interior
/// whitespace tolerated, same normalizer artifact as TTC).
const POUR_TOKEN_PATTERN: &str = r"P\s*O\s*U\s*R";

/// Compiled pattern set used by the segmenter, extractor, and selector.
#[derive(Debug, Clone)]
pub struct Patterns {
    pub resolution: Regex,
    pub amount: Regex,
    pub vote: Regex,
    pub year: Regex,
    pub adoption: Regex,
    pub rejection: Regex,
    pub exercise_period: Regex,
    pub budget_amount: Regex,
    pub vote_summary: Regex,
    pub pour_token: Regex,
}

impl Patterns {
    pub fn strict() -> Result<Self, regex::Error> {
        Self::compile(VOTE_PATTERN)
    }

    pub fn relaxed_votes() -> Result<Self, regex::Error> {
        Self::compile(RELAXED_VOTE_PATTERN)
    }

    fn compile(vote_pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            resolution: Regex::new(RESOLUTION_PATTERN)?,
            amount: Regex::new(AMOUNT_PATTERN)?,
            vote: Regex::new(vote_pattern)?,
            year: Regex::new(YEAR_PATTERN)?,
            adoption: Regex::new(ADOPTION_PATTERN)?,
            rejection: Regex::new(REJECTION_PATTERN)?,
            exercise_period: Regex::new(EXERCISE_PATTERN)?,
            budget_amount: Regex::new(BUDGET_AMOUNT_PATTERN)?,
            vote_summary: Regex::new(VOTE_SUMMARY_PATTERN)?,
            pour_token: Regex::new(POUR_TOKEN_PATTERN)?,
        })
    }
}

/// Immutable configuration passed into every engine entry point.
///
/// Keyword lists and patterns are values, not process-wide state, so
/// tests can run against alternate sets without touching anything
/// shared.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub budget_keywords: Vec<String>,
    pub patterns: Patterns,
}

impl AnalysisConfig {
    /// Default configuration: strict vote pattern, budget-selection
    /// keyword set.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            budget_keywords: BUDGET_KEYWORDS.iter().map(ToString::to_string).collect(),
            patterns: Patterns::strict()?,
        })
    }

    /// Accepts POUR/CONTRE/abstention tallies as vote lines.
    pub fn relaxed_votes() -> Result<Self, regex::Error> {
        Ok(Self {
            budget_keywords: BUDGET_KEYWORDS.iter().map(ToString::to_string).collect(),
            patterns: Patterns::relaxed_votes()?,
        })
    }

    /// Swaps in the wider survey keyword list.
    #[must_use]
    pub fn broad_keywords(mut self) -> Self {
        self.budget_keywords = BROAD_KEYWORDS.iter().map(ToString::to_string).collect();
        self
    }

    #[must_use]
    pub fn with_keywords(mut self, keywords: Vec<String>) -> Self {
        self.budget_keywords = keywords;
        self
    }
}
