use once_cell::sync::Lazy;
use regex::Regex;

/// Everything that cannot be part of a number once the decimal comma has been
/// rewritten to a dot.
static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^0-9.\-]").expect("static pattern"));

/// Lenient data-cell parse: trim, decimal comma → dot, strip OCR noise
/// (unit symbols, stray punctuation, misread separators), then parse.
///
/// Blank cells and anything still unparseable after cleanup come back as
/// `None`. There is no thousands-separator handling: "1.234,56" becomes
/// "1.234.56" and therefore `None`.
pub fn parse_cell(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let dotted = trimmed.replace(',', ".");
    let cleaned = NON_NUMERIC.replace_all(&dotted, "");
    cleaned.parse::<f64>().ok()
}

/// Strict parse used for key cells and column headers: the whole trimmed
/// token must already be a number ("1", "07", "1.0"); no cleanup is applied.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}
