use crate::core::RecipeRecord;
use std::collections::BTreeSet;

/// Capitalizes the first letter of every alphabetic run, lowercasing the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if prev_alpha {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_alpha = c.is_alphabetic();
    }
    out
}

/// Renders a recipe as a plain-text card.
pub fn format_record(r: &RecipeRecord) -> String {
    let mut parts = vec![format!("{}  •  {} min", r.name, r.minutes)];

    let sub: Vec<&str> = [r.category.as_str(), r.area.as_str()]
        .into_iter()
        .filter(|s| !s.is_empty())
        .collect();
    if !sub.is_empty() {
        parts.push(sub.join(" / "));
    }

    parts.push(String::new());
    parts.push("Ingredients:".to_string());
    let ingredients: BTreeSet<String> = r
        .ingredients
        .iter()
        .map(String::as_str)
        .map(title_case)
        .collect();
    parts.extend(ingredients.into_iter().map(|i| format!("• {}", i)));

    parts.push(String::new());
    parts.push("Steps:".to_string());
    parts.extend(
        r.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step)),
    );

    if let Some(url) = &r.source_url {
        parts.push(String::new());
        parts.push(format!("Source: {}", url));
    }

    parts.join("\n")
}

/// Header line shown above a filtered match.
pub fn format_query_header(wanted: &BTreeSet<String>, max_minutes: u32) -> String {
    let mut names: Vec<String> = wanted.iter().map(String::as_str).map(title_case).collect();
    names.sort();
    format!("Looking for: {}  •  ≤ {} min", names.join(", "), max_minutes)
}
