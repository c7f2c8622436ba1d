/// Re-inserts word boundaries lost during PDF text extraction, then
/// collapses whitespace runs and trims.
///
/// Extraction frequently glues words together at case changes
/// ("AppelDeFonds provisionnel"), so a space goes before every ASCII
/// uppercase letter. Genuine camel-case tokens and all-caps acronyms
/// get split apart too; that is the accepted cost of the heuristic,
/// not a bug.
#[must_use]
pub fn normalize_line(raw: &str) -> String {
    let mut spaced = String::with_capacity(raw.len() + raw.len() / 4);
    for ch in raw.chars() {
        if ch.is_ascii_uppercase() {
            spaced.push(' ');
        }
        spaced.push(ch);
    }

    spaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
