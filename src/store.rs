use crate::core::{NewRecipeInput, RecipeRecord, StrawberryError};
use crate::validate::{validate_document, validate_input, Validated};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// The JSON file holding every recipe.
pub struct RecipeStore {
    path: PathBuf,
}

impl RecipeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads and validates the whole file.
    pub fn load(&self) -> Result<Validated, StrawberryError> {
        if !self.path.exists() {
            return Err(StrawberryError::MissingStore(self.path.clone()));
        }

        let content = std::fs::read_to_string(&self.path)?;
        let raw: serde_json::Value = serde_json::from_str(&content)?;

        let validated =
            validate_document(&raw).ok_or_else(|| StrawberryError::MalformedStore {
                path: self.path.clone(),
                reason: "top-level JSON must be a list of recipes".to_string(),
            })?;

        if !validated.rejected.is_empty() {
            warn!(
                path = %self.path.display(),
                rejected = ?validated.rejected,
                "Skipped invalid recipe entries"
            );
        }
        debug!(
            path = %self.path.display(),
            count = validated.records.len(),
            "Loaded recipes"
        );
        Ok(validated)
    }

    /// Validates `input`, then rewrites the file with it appended.
    ///
    /// A missing file is created; an unreadable or malformed one is left
    /// alone and the error returned.
    pub fn append(&self, input: &NewRecipeInput) -> Result<RecipeRecord, StrawberryError> {
        let record = validate_input(input)?;

        let mut records = match self.load() {
            Ok(validated) => validated.records,
            Err(StrawberryError::MissingStore(_)) => Vec::new(),
            Err(e) => return Err(e),
        };
        records.push(record.clone());

        self.write_all(&records)?;
        info!(name = %record.name, total = records.len(), "Recipe added");
        Ok(record)
    }

    // Writes next to the target and renames over it, so a failed write
    // leaves the previous file intact.
    fn write_all(&self, records: &[RecipeRecord]) -> Result<(), StrawberryError> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        if !dir.exists() {
            std::fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(records)?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.persist(&self.path).map_err(|e| StrawberryError::IoError(e.error))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn input(name: &str, minutes: &str, ingredients: &str) -> NewRecipeInput {
        NewRecipeInput {
            name: name.into(),
            minutes: minutes.into(),
            ingredients: ingredients.into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let store = RecipeStore::new(dir.path().join("recipes.json"));
        assert!(matches!(store.load(), Err(StrawberryError::MissingStore(_))));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");

        std::fs::write(&path, "{\"name\": \"not a list\"}").unwrap();
        let store = RecipeStore::new(path.clone());
        assert!(matches!(store.load(), Err(StrawberryError::MalformedStore { .. })));

        std::fs::write(&path, "[{\"name\": ").unwrap();
        assert!(matches!(store.load(), Err(StrawberryError::JsonError(_))));
    }

    #[test]
    fn test_append_creates_file() {
        let dir = TempDir::new().unwrap();
        let store = RecipeStore::new(dir.path().join("nested").join("recipes.json"));

        let rec = store.append(&input("Omelette", "10", "Egg, Butter")).unwrap();
        assert_eq!(rec.ingredients, vec!["egg", "butter"]);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.records, vec![rec]);
    }

    #[test]
    fn test_append_keeps_existing_records_and_indents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        std::fs::write(
            &path,
            r#"[{"name": "Soup", "minutes": 15, "ingredients": ["Tomato"]}, {"name": ""}]"#,
        )
        .unwrap();
        let store = RecipeStore::new(path.clone());

        store.append(&input("Salad", "5", "lettuce")).unwrap();

        let names: Vec<String> = store.load().unwrap().records.into_iter().map(|r| r.name).collect();
        assert_eq!(names, vec!["Soup", "Salad"]);

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\n  {\n    \"name\": \"Soup\""));
    }

    #[test]
    fn test_append_refuses_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        std::fs::write(&path, "not json").unwrap();
        let store = RecipeStore::new(path.clone());

        assert!(store.append(&input("Salad", "5", "lettuce")).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[test]
    fn test_failed_rewrite_leaves_target_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep.txt"), "x").unwrap();
        let store = RecipeStore::new(path.clone());

        let rec = validate_input(&input("Salad", "5", "lettuce")).unwrap();
        assert!(matches!(
            store.write_all(&[rec]),
            Err(StrawberryError::IoError(_))
        ));
        assert!(path.join("keep.txt").exists());
    }

    #[test]
    fn test_append_rejects_invalid_input_without_writing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("recipes.json");
        let store = RecipeStore::new(path.clone());

        assert!(matches!(
            store.append(&input("Salad", "five", "lettuce")),
            Err(StrawberryError::NotANumber(_))
        ));
        assert!(matches!(
            store.append(&input("", "5", "lettuce")),
            Err(StrawberryError::InvalidRecipe(_))
        ));
        assert!(!path.exists());
    }
}
