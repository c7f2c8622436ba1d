use crate::config::AnalysisConfig;
use crate::resolution::ResolutionRecord;

use super::extractor::scan_line;
use super::normalizer::normalize_line;

/// Splits extracted minutes text into numbered resolution records.
///
/// A line matching the numbered-heading pattern seals the in-progress
/// record and opens the next one. Content lines are scanned for fields
/// and appended in normalized form; lines before the first heading are
/// discarded.
#[must_use]
pub fn segment(text: &str, config: &AnalysisConfig) -> Vec<ResolutionRecord> {
    let cleaned = text.lines().map(str::trim).collect::<Vec<_>>().join("\n");

    let mut records = Vec::new();
    let mut current: Option<ResolutionRecord> = None;

    for line in cleaned.lines() {
        if let Some(opened) = open_record(line, config) {
            if let Some(sealed) = current.take() {
                records.push(sealed);
            }
            current = Some(opened);
            continue;
        }

        if let Some(record) = current.as_mut() {
            let normalized = normalize_line(line);
            if !normalized.is_empty() {
                scan_line(record, line, &normalized, config);
                record.push_content(normalized);
            }
        }
    }

    if let Some(sealed) = current.take() {
        records.push(sealed);
    }

    records
}

fn open_record(line: &str, config: &AnalysisConfig) -> Option<ResolutionRecord> {
    let captures = config.patterns.resolution.captures(line)?;
    // A digit run too long for the record number is ordinary content.
    let number: u32 = captures.get(1)?.as_str().parse().ok()?;
    let title = normalize_line(captures.get(2).map_or("", |m| m.as_str()));

    Some(ResolutionRecord::new(number, title))
}
