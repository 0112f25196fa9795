//! Turns untyped recipe entries into [`RecipeRecord`] values.
//!
//! Malformed entries are dropped one by one; only a document whose top
//! level is not a list fails as a whole.

use crate::core::{NewRecipeInput, RecipeRecord, StrawberryError, PLACEHOLDER_STEP};
use serde_json::{Map, Value};

/// Output of a validation pass over a raw document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validated {
    pub records: Vec<RecipeRecord>,
    /// Positions (in the raw list) of entries that were dropped.
    pub rejected: Vec<usize>,
}

/// Validates a decoded document. Returns `None` when the top level is not a list.
pub fn validate_document(raw: &Value) -> Option<Validated> {
    raw.as_array().map(|entries| validate_records(entries))
}

pub fn validate_records(entries: &[Value]) -> Validated {
    let mut out = Validated::default();
    for (idx, entry) in entries.iter().enumerate() {
        match validate_entry(entry) {
            Some(record) => out.records.push(record),
            None => out.rejected.push(idx),
        }
    }
    out
}

/// Validates one entry; `None` if it is not a mapping or breaks a record rule.
pub fn validate_entry(entry: &Value) -> Option<RecipeRecord> {
    let map = entry.as_object()?;

    let name = coerce_text(map.get("name"));
    let minutes = coerce_minutes(map.get("minutes"));
    if name.is_empty() || minutes <= 0 {
        return None;
    }
    let minutes = minutes.unsigned_abs();

    let ingredients: Vec<String> = list_field(map, "ingredients")
        .iter()
        .filter_map(Value::as_str)
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();
    if ingredients.is_empty() {
        return None;
    }

    let steps = normalize_steps(
        list_field(map, "steps")
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string),
    );

    let source_url = map
        .get("source_url")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Some(RecipeRecord {
        name,
        minutes,
        ingredients,
        steps,
        area: coerce_text(map.get("area")),
        category: coerce_text(map.get("category")),
        source_url,
    })
}

/// Applies the load-time rules to form input for a new recipe.
///
/// Minutes that do not parse as an integer are reported before any other
/// problem with the input.
pub fn validate_input(input: &NewRecipeInput) -> Result<RecipeRecord, StrawberryError> {
    let minutes_text = input.minutes.trim();
    let minutes: i64 = minutes_text
        .parse()
        .map_err(|_| StrawberryError::NotANumber(minutes_text.to_string()))?;

    let name = input.name.trim().to_string();
    let ingredients: Vec<String> = input
        .ingredients
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if name.is_empty() || ingredients.is_empty() || minutes <= 0 {
        return Err(StrawberryError::InvalidRecipe(
            "Please fill in name, valid minutes (>0), and at least one ingredient.".to_string(),
        ));
    }
    let minutes = minutes.unsigned_abs();

    let steps = normalize_steps(
        input
            .steps
            .iter()
            .flat_map(|s| s.lines())
            .map(str::to_string),
    );

    Ok(RecipeRecord {
        name,
        minutes,
        ingredients,
        steps,
        area: input.area.trim().to_string(),
        category: input.category.trim().to_string(),
        source_url: input
            .source_url
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string),
    })
}

fn normalize_steps(steps: impl Iterator<Item = String>) -> Vec<String> {
    let steps: Vec<String> = steps
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    if steps.is_empty() {
        vec![PLACEHOLDER_STEP.to_string()]
    } else {
        steps
    }
}

fn list_field<'a>(map: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    map.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

// Scalars are rendered as text; null, lists and maps count as empty.
fn coerce_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.trim().to_string(),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::Bool(b)) => b.to_string(),
        _ => String::new(),
    }
}

// Booleans count as 0 or 1. Missing or unparseable values become 0 and
// fail the positivity check.
fn coerce_minutes(value: Option<&Value>) -> i64 {
    match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        Some(Value::Bool(b)) => i64::from(*b),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_entry_is_normalized() {
        let raw = json!({
            "name": "  Tomato Soup ",
            "minutes": 15,
            "ingredients": [" Tomato", "SALT ", 4, ""],
            "steps": ["Chop", "  ", "Simmer"],
            "area": " British ",
            "category": "Soup",
            "source_url": "  https://example.org/soup "
        });
        let rec = validate_entry(&raw).unwrap();
        assert_eq!(rec.name, "Tomato Soup");
        assert_eq!(rec.minutes, 15);
        assert_eq!(rec.ingredients, vec!["tomato", "salt"]);
        assert_eq!(rec.steps, vec!["Chop", "Simmer"]);
        assert_eq!(rec.area, "British");
        assert_eq!(rec.source_url.as_deref(), Some("https://example.org/soup"));
    }

    #[test]
    fn test_invalid_entries_are_dropped() {
        let raw = json!([
            {"name": "", "minutes": 10, "ingredients": ["egg"]},
            {"name": "Zero", "minutes": 0, "ingredients": ["egg"]},
            {"name": "Negative", "minutes": -5, "ingredients": ["egg"]},
            {"name": "No minutes", "ingredients": ["egg"]},
            {"name": "Bad minutes", "minutes": "soon", "ingredients": ["egg"]},
            {"name": "Empty list", "minutes": 10, "ingredients": []},
            {"name": "Not a list", "minutes": 10, "ingredients": "egg"},
            {"name": "Blank tokens", "minutes": 10, "ingredients": ["  ", 7]},
            "not a mapping",
            {"name": "Omelette", "minutes": 10, "ingredients": ["egg"]}
        ]);
        let v = validate_document(&raw).unwrap();
        assert_eq!(v.records.len(), 1);
        assert_eq!(v.records[0].name, "Omelette");
        assert_eq!(v.rejected, vec![0, 1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_top_level_must_be_list() {
        assert!(validate_document(&json!({"name": "x"})).is_none());
        assert!(validate_document(&json!("recipes")).is_none());
        assert_eq!(validate_document(&json!([])), Some(Validated::default()));
    }

    #[test]
    fn test_minutes_coercion() {
        let as_text = json!({"name": "A", "minutes": " 20 ", "ingredients": ["x"]});
        assert_eq!(validate_entry(&as_text).unwrap().minutes, 20);

        let as_float = json!({"name": "B", "minutes": 12.9, "ingredients": ["x"]});
        assert_eq!(validate_entry(&as_float).unwrap().minutes, 12);

        let as_null = json!({"name": "C", "minutes": null, "ingredients": ["x"]});
        assert!(validate_entry(&as_null).is_none());
    }

    #[test]
    fn test_long_and_boolean_minutes() {
        let brisket = json!({"name": "Slow Brisket", "minutes": 5_000_000_000_i64, "ingredients": ["beef"]});
        assert_eq!(validate_entry(&brisket).unwrap().minutes, 5_000_000_000);

        let truthy = json!({"name": "Quick", "minutes": true, "ingredients": ["x"]});
        assert_eq!(validate_entry(&truthy).unwrap().minutes, 1);

        let falsy = json!({"name": "Never", "minutes": false, "ingredients": ["x"]});
        assert!(validate_entry(&falsy).is_none());
    }

    #[test]
    fn test_missing_steps_get_placeholder_and_url_is_omitted() {
        let raw = json!({"name": "Toast", "minutes": 3, "ingredients": ["bread"], "source_url": "  "});
        let rec = validate_entry(&raw).unwrap();
        assert_eq!(rec.steps, vec![PLACEHOLDER_STEP]);
        assert_eq!(rec.source_url, None);
        assert_eq!(rec.area, "");
        assert_eq!(rec.category, "");
    }

    #[test]
    fn test_validate_input_rules() {
        let mut input = NewRecipeInput {
            name: " Pesto ".into(),
            minutes: "15".into(),
            ingredients: "Basil, olive oil ,, Pine Nuts".into(),
            steps: vec!["Blend\n\nServe".into()],
            ..Default::default()
        };
        let rec = validate_input(&input).unwrap();
        assert_eq!(rec.name, "Pesto");
        assert_eq!(rec.ingredients, vec!["basil", "olive oil", "pine nuts"]);
        assert_eq!(rec.steps, vec!["Blend", "Serve"]);

        input.minutes = "fifteen".into();
        assert!(matches!(
            validate_input(&input),
            Err(StrawberryError::NotANumber(_))
        ));

        input.minutes = "0".into();
        assert!(matches!(
            validate_input(&input),
            Err(StrawberryError::InvalidRecipe(_))
        ));

        input.minutes = "-3".into();
        assert!(matches!(
            validate_input(&input),
            Err(StrawberryError::InvalidRecipe(_))
        ));

        input.minutes = "5000000000".into();
        assert_eq!(validate_input(&input).unwrap().minutes, 5_000_000_000);

        input.minutes = "10".into();
        input.ingredients = " , ".into();
        assert!(matches!(
            validate_input(&input),
            Err(StrawberryError::InvalidRecipe(_))
        ));
    }
}
