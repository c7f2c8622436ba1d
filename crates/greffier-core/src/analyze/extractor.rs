use crate::config::AnalysisConfig;
use crate::resolution::ResolutionRecord;

/// Scans one content line and accumulates extracted fields into the
/// open record.
///
/// Every extraction path runs on every line, independently of the
/// others. Patterns match against the raw line; the stored vote line
/// is the normalized form.
pub fn scan_line(
    record: &mut ResolutionRecord,
    raw_line: &str,
    normalized: &str,
    config: &AnalysisConfig,
) {
    for amount in config.patterns.amount.find_iter(raw_line) {
        record.push_amount(amount.as_str().to_string());
    }

    if config.patterns.vote.is_match(raw_line) {
        record.push_vote_line(normalized.to_string());
    }

    if let Some(year) = config.patterns.year.find(raw_line) {
        record.record_fiscal_year(year.as_str());
    }

    if config.patterns.adoption.is_match(raw_line) {
        record.record_verdict(true);
    } else if config.patterns.rejection.is_match(raw_line) {
        record.record_verdict(false);
    }
}
