use greffier_core::{
    segment, select_budget_section, summarize, survey, AnalysisConfig, AnalysisPipeline, NOT_FOUND,
};

/// Extracted text in the shape pdf-parse style extraction produces:
/// trimmed-but-noisy lines, glued words, numbered headings.
const MINUTES: &str = "\
PROCÈS-VERBAL
Assemblée générale ordinaire du 13 décembre 2022
Résidence Les Tilleuls, 12 rue des Acacias

Feuille de présence émargée par les copropriétaires présents.
Le président de séance ouvre la séance à 18h30.

1. Désignation du président de séance
Madame Bernard est désignée présidente de séance.
POUR : 1000/1000 cp
La résolution est adoptée.

2. Approbation du compte de dépenses de l'exercice clos
Le syndic présente le compte de dépenses pour un montant de 48 735,62 € TTC.
Exercice du 01/01/2022 au 31/12/2022.
POUR : 850/1000 cp
La résolution est adoptée.

3. Travaux de réfection de la toiture
Devis de l'entreprise Martin pour 12 500,00 € TTC.
POUR : 420/1000 cp
La résolution est rejetée.

4. Questions diverses
Aucune question n'est soulevée.
";

#[test]
fn segments_every_numbered_resolution() {
    let config = AnalysisConfig::new().unwrap();
    let records = segment(MINUTES, &config);

    assert_eq!(records.len(), 4);
    assert_eq!(
        records.iter().map(|r| r.number).collect::<Vec<_>>(),
        vec![1, 2, 3, 4]
    );
    assert_eq!(records[1].title, "Approbation du compte de dépenses de l'exercice clos");
}

#[test]
fn preamble_is_discarded() {
    let config = AnalysisConfig::new().unwrap();
    let records = segment(MINUTES, &config);

    assert!(records[0]
        .content_lines
        .iter()
        .all(|line| !line.contains("présence")));
}

#[test]
fn fields_accumulate_per_record() {
    let config = AnalysisConfig::new().unwrap();
    let records = segment(MINUTES, &config);

    let budget = &records[1];
    assert_eq!(budget.amounts, vec!["48 735,62 € TTC"]);
    assert_eq!(budget.fiscal_year.as_deref(), Some("2022"));
    assert_eq!(budget.adopted, Some(true));
    assert_eq!(budget.vote_lines.len(), 1);

    let works = &records[2];
    assert_eq!(works.adopted, Some(false));
    assert_eq!(works.amounts, vec!["12 500,00 € TTC"]);
}

#[test]
fn budget_selection_prefers_first_qualifying_record() {
    let config = AnalysisConfig::new().unwrap();
    let records = segment(MINUTES, &config);

    let selected = select_budget_section(&records, &config).unwrap();

    assert_eq!(selected.number, 2);
}

#[test]
fn summary_derives_every_field() {
    let config = AnalysisConfig::new().unwrap();
    let records = segment(MINUTES, &config);

    let summary = summarize(&records, &config);

    assert_eq!(summary.amount.as_deref(), Some("48735,62 €"));
    assert_eq!(summary.fiscal_year.as_deref(), Some("2022"));
    assert_eq!(summary.vote_result.as_deref(), Some("850/1000 cp"));
    assert_eq!(summary.clause_reference.as_deref(), Some("Résolution n°2"));
    assert!(summary.adopted);
}

#[test]
fn survey_reports_totals_and_relevant_excerpts() {
    let config = AnalysisConfig::new().unwrap();
    let report = survey(MINUTES, &config);

    assert_eq!(report.total, 4);
    assert!(report.relevant.iter().any(|entry| entry.number == 2));
}

#[test]
fn document_without_budget_keywords_degrades_to_sentinels() {
    let config = AnalysisConfig::new().unwrap();
    let text = "1. Désignation du syndic\nreconduction du mandat en cours\n2. Divers\nnéant";

    let records = segment(text, &config);
    assert!(select_budget_section(&records, &config).is_none());

    let report = summarize(&records, &config).to_report();
    assert_eq!(report.montant, NOT_FOUND);
    assert_eq!(report.annee, NOT_FOUND);
    assert_eq!(report.resultat_vote, NOT_FOUND);
    assert_eq!(report.numero_clause, NOT_FOUND);
    assert!(!report.est_adopte);
}

#[tokio::test]
async fn pipeline_end_to_end() {
    let pipeline = AnalysisPipeline::new().unwrap();

    let output = pipeline.analyze_text(MINUTES).await.unwrap();

    assert_eq!(output.stats.record_count, 4);
    assert_eq!(output.summary.to_report().montant, "48735,62 €");
    assert_eq!(output.summary.to_report().numero_clause, "Résolution n°2");
}
