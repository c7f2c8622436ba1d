use serde::{Deserialize, Serialize};

/// Placeholder rendered for fields the heuristics could not recover.
pub const NOT_FOUND: &str = "Non trouvé";

/// Derived budget summary, computed per analysis and never stored.
///
/// Absent fields stay `None` here; the sentinel string is a concern of
/// the presentation form ([`BudgetReport`]).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fiscal_year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vote_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clause_reference: Option<String>,
    #[serde(default)]
    pub adopted: bool,
}

impl BudgetSummary {
    /// Summary for a document with no qualifying budget resolution.
    #[must_use]
    pub fn not_found() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn to_report(&self) -> BudgetReport {
        let render = |field: &Option<String>| {
            field.clone().unwrap_or_else(|| NOT_FOUND.to_string())
        };

        BudgetReport {
            montant: render(&self.amount),
            annee: render(&self.fiscal_year),
            resultat_vote: render(&self.vote_result),
            numero_clause: render(&self.clause_reference),
            est_adopte: self.adopted,
        }
    }
}

fn sentinel() -> String {
    NOT_FOUND.to_string()
}

/// Wire form of the budget summary, matching the response layer's JSON
/// field names. "Non trouvé" round-trips through serde unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetReport {
    #[serde(default = "sentinel")]
    pub montant: String,
    #[serde(default = "sentinel")]
    pub annee: String,
    #[serde(rename = "resultatVote", default = "sentinel")]
    pub resultat_vote: String,
    #[serde(rename = "numeroClause", default = "sentinel")]
    pub numero_clause: String,
    #[serde(rename = "estAdopte", default)]
    pub est_adopte: bool,
}

impl BudgetReport {
    /// Inverse of [`BudgetSummary::to_report`]: sentinel and empty
    /// strings map back to structured absence.
    #[must_use]
    pub fn into_summary(self) -> BudgetSummary {
        let absorb = |field: String| {
            if field.is_empty() || field == NOT_FOUND {
                None
            } else {
                Some(field)
            }
        };

        BudgetSummary {
            amount: absorb(self.montant),
            fiscal_year: absorb(self.annee),
            vote_result: absorb(self.resultat_vote),
            clause_reference: absorb(self.numero_clause),
            adopted: self.est_adopte,
        }
    }
}

impl From<&BudgetSummary> for BudgetReport {
    fn from(summary: &BudgetSummary) -> Self {
        summary.to_report()
    }
}
