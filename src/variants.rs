use crate::need::Need;

const FALLBACK_SUFFIXES: [&str; 3] = [
    "urgent today Bangalore",
    "best price low cost",
    "near me same day",
];

fn is_list_marker(c: char) -> bool {
    matches!(c, '1'..='5' | '.' | '-' | '*' | ' ')
}

/// Splits a model response into one query per line, stripping list numbering
/// and bullets. Lines that are only markers are dropped.
pub fn parse_variants(raw: &str) -> Vec<String> {
    raw.lines()
        .map(|line| line.trim().trim_start_matches(is_list_marker).trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn fallback_variants(need: &Need) -> Vec<String> {
    FALLBACK_SUFFIXES
        .iter()
        .map(|suffix| format!("{need} {suffix}"))
        .collect()
}

/// Parsed variants, or the canned fallbacks when the response had nothing usable.
pub fn variants_or_fallback(raw: &str, need: &Need) -> Vec<String> {
    let variants = parse_variants(raw);
    if variants.is_empty() {
        tracing::warn!("model response yielded no variants, using fallbacks");
        return fallback_variants(need);
    }
    variants
}
