use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::resolution::ResolutionRecord;
use crate::summary::BudgetSummary;

use super::segmenter::segment;

/// True when the record's title or content mentions any configured
/// budget keyword. Case-insensitive substring containment, so
/// "budgétaire" matches the keyword "budget".
#[must_use]
pub fn is_budget_related(record: &ResolutionRecord, config: &AnalysisConfig) -> bool {
    let mut full_text = record.title.clone();
    for line in &record.content_lines {
        full_text.push(' ');
        full_text.push_str(line);
    }
    let full_text = full_text.to_lowercase();

    config
        .budget_keywords
        .iter()
        .any(|keyword| full_text.contains(&keyword.to_lowercase()))
}

/// First record in document order that is budget-related and carries
/// at least one amount.
#[must_use]
pub fn select_budget_section<'a>(
    records: &'a [ResolutionRecord],
    config: &AnalysisConfig,
) -> Option<&'a ResolutionRecord> {
    records
        .iter()
        .find(|record| is_budget_related(record, config) && record.has_amounts())
}

/// Derives the budget summary from the selected record. Every field
/// degrades independently; with no qualifying record the summary is
/// all-absent with `adopted = false`.
#[must_use]
pub fn summarize(records: &[ResolutionRecord], config: &AnalysisConfig) -> BudgetSummary {
    let Some(section) = select_budget_section(records, config) else {
        return BudgetSummary::not_found();
    };

    let joined = section.content_lines.join(" ");

    let amount = config
        .patterns
        .budget_amount
        .captures(&joined)
        .and_then(|captures| captures.get(1))
        .map(|matched| {
            let digits: String = matched
                .as_str()
                .chars()
                .filter(|ch| !ch.is_whitespace())
                .collect();
            format!("{digits} €")
        });

    // Year of the closing date of the exercise period, else the first
    // year seen anywhere in the record.
    let fiscal_year = config
        .patterns
        .exercise_period
        .captures(&joined)
        .and_then(|captures| captures.get(2))
        .and_then(|matched| matched.as_str().split('/').nth(2))
        .map(ToString::to_string)
        .or_else(|| section.fiscal_year.clone());

    let vote_result = section
        .content_lines
        .iter()
        .find(|line| config.patterns.pour_token.is_match(line))
        .and_then(|line| config.patterns.vote_summary.captures(line))
        .and_then(|captures| match (captures.get(1), captures.get(2)) {
            (Some(tally), Some(base)) => {
                Some(format!("{}/{} cp", tally.as_str(), base.as_str()))
            }
            _ => None,
        });

    BudgetSummary {
        amount,
        fiscal_year,
        vote_result,
        clause_reference: Some(format!("Résolution n°{}", section.number)),
        adopted: section.adopted.unwrap_or(false),
    }
}

/// Relevance report over one document: total segmented resolutions
/// plus an excerpt of every budget-related one.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentSurvey {
    pub total: usize,
    pub relevant: Vec<SurveyEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SurveyEntry {
    pub number: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub amounts: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub vote_lines: Vec<String>,
}

#[must_use]
pub fn survey(text: &str, config: &AnalysisConfig) -> DocumentSurvey {
    let records = segment(text, config);
    let relevant = records
        .iter()
        .filter(|record| is_budget_related(record, config))
        .map(|record| SurveyEntry {
            number: record.number,
            title: record.title.clone(),
            amounts: record.amounts.clone(),
            vote_lines: record.vote_lines.clone(),
        })
        .collect();

    DocumentSurvey {
        total: records.len(),
        relevant,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn budget_record() -> ResolutionRecord {
        ResolutionRecord::new(4, "Approbation du compte de dépenses".into())
    }

    #[test]
    fn test_keyword_match_is_substring_and_case_insensitive() {
        let config = AnalysisConfig::new().unwrap().with_keywords(vec!["budget".into()]);

        let record = ResolutionRecord::new(1, "Ligne budgétaire".into());
        assert!(is_budget_related(&record, &config));

        let record = ResolutionRecord::new(2, "Désignation du syndic".into());
        assert!(!is_budget_related(&record, &config));
    }

    #[test]
    fn test_keywords_match_content_not_just_title() {
        let config = AnalysisConfig::new().unwrap();
        let record = ResolutionRecord::new(1, "Quatrième point".into())
            .with_content_line("le compte de dépenses est présenté");

        assert!(is_budget_related(&record, &config));
    }

    #[test]
    fn test_selection_requires_an_amount() {
        let config = AnalysisConfig::new().unwrap();
        let without_amount = budget_record();
        let with_amount = budget_record().with_amount("500 €");
        let records = vec![without_amount, with_amount];

        let selected = select_budget_section(&records, &config).unwrap();

        assert!(selected.has_amounts());
    }

    #[test]
    fn test_no_qualifying_record_yields_absent_summary() {
        let config = AnalysisConfig::new().unwrap();
        let records = vec![ResolutionRecord::new(1, "Désignation du syndic".into())];

        let summary = summarize(&records, &config);

        assert_eq!(summary, BudgetSummary::not_found());
        assert!(!summary.adopted);
    }

    #[test]
    fn test_amount_derivation_strips_grouping_spaces() {
        let config = AnalysisConfig::new().unwrap();
        let record = budget_record()
            .with_content_line("pour un montant de 48 735,62 € T T C")
            .with_amount("48 735,62 € TTC");

        let summary = summarize(&[record], &config);

        assert_eq!(summary.amount.as_deref(), Some("48735,62 €"));
    }

    #[test]
    fn test_fiscal_year_prefers_exercise_closing_date() {
        let config = AnalysisConfig::new().unwrap();
        let mut record = budget_record()
            .with_content_line("exercice du 01/01/2023 au 31/12/2024")
            .with_amount("500 €");
        record.record_fiscal_year("2019");

        let summary = summarize(&[record], &config);

        assert_eq!(summary.fiscal_year.as_deref(), Some("2024"));
    }

    #[test]
    fn test_fiscal_year_falls_back_to_record_year() {
        let config = AnalysisConfig::new().unwrap();
        let mut record = budget_record().with_amount("500 €");
        record.record_fiscal_year("2023");

        let summary = summarize(&[record], &config);

        assert_eq!(summary.fiscal_year.as_deref(), Some("2023"));
    }

    #[test]
    fn test_vote_result_from_normalized_pour_line() {
        let config = AnalysisConfig::new().unwrap();
        let record = budget_record()
            .with_content_line("P O U R : 850/1000 cp")
            .with_amount("500 €");

        let summary = summarize(&[record], &config);

        assert_eq!(summary.vote_result.as_deref(), Some("850/1000 cp"));
    }

    #[test]
    fn test_clause_reference_names_the_selected_resolution() {
        let config = AnalysisConfig::new().unwrap();
        let record = budget_record().with_amount("500 €");

        let summary = summarize(&[record], &config);

        assert_eq!(summary.clause_reference.as_deref(), Some("Résolution n°4"));
    }

    #[test]
    fn test_unset_verdict_defaults_to_not_adopted() {
        let config = AnalysisConfig::new().unwrap();
        let record = budget_record().with_amount("500 €");

        let summary = summarize(&[record], &config);

        assert!(!summary.adopted);
    }

    #[test]
    fn test_survey_counts_and_excerpts() {
        let config = AnalysisConfig::new().unwrap();
        let text = "1. Approbation du compte de dépenses\n\
                    montant de 1234,56 € TTC\n\
                    2. Désignation du syndic\n\
                    reconduction du mandat\n\
                    3. Questions diverses\n\
                    charges de l'exercice";

        let report = survey(text, &config);

        assert_eq!(report.total, 3);
        assert_eq!(report.relevant.len(), 2);
        assert_eq!(report.relevant[0].number, 1);
        assert_eq!(report.relevant[0].amounts, vec!["1234,56 € TTC"]);
        assert_eq!(report.relevant[1].number, 3);
    }
}
