use std::collections::BTreeSet;

/// Two-word ingredients kept together when normalizing a query.
pub const MERGE_TABLE: &[&str] = &["olive oil", "soy sauce"];

/// Splits free text on commas and whitespace into lowercase ingredient tokens.
///
/// Adjacent tokens that form an entry of [`MERGE_TABLE`] are merged in one
/// left-to-right pass; a token consumed by a merge is not reused.
pub fn normalize_query(text: &str) -> BTreeSet<String> {
    let raw: Vec<String> = text
        .split(',')
        .flat_map(str::split_whitespace)
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty())
        .collect();

    let mut merged = BTreeSet::new();
    let mut i = 0;
    while i < raw.len() {
        if let Some(next) = raw.get(i + 1) {
            let pair = format!("{} {}", raw[i], next);
            if MERGE_TABLE.contains(&pair.as_str()) {
                merged.insert(pair);
                i += 2;
                continue;
            }
        }
        merged.insert(raw[i].clone());
        i += 1;
    }
    merged
}
