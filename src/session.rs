//! The in-memory recipe collection and the commands that act on it.

use crate::core::{NewRecipeInput, Outcome, RecipeRecord, StrawberryError};
use crate::matcher::{ingredient_index, Matcher};
use crate::store::RecipeStore;
use crate::tokens::normalize_query;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeSet;
use tracing::debug;

/// Owns the loaded collection and its ingredient index.
///
/// The collection is only ever replaced as a whole: on open and after a
/// successful append.
pub struct Session {
    store: RecipeStore,
    matcher: Matcher,
    records: Vec<RecipeRecord>,
    index: BTreeSet<String>,
    load_error: Option<StrawberryError>,
    rng: StdRng,
}

impl Session {
    pub fn open(store: RecipeStore, matcher: Matcher) -> Self {
        Self::with_rng(store, matcher, StdRng::from_entropy())
    }

    pub fn with_rng(store: RecipeStore, matcher: Matcher, rng: StdRng) -> Self {
        let mut session = Self {
            store,
            matcher,
            records: Vec::new(),
            index: BTreeSet::new(),
            load_error: None,
            rng,
        };
        session.reload();
        session
    }

    /// Re-reads the store. On failure the collection is emptied and the
    /// error kept for [`Session::load_error`].
    pub fn reload(&mut self) {
        let (records, error) = match self.store.load() {
            Ok(validated) => (validated.records, None),
            Err(e) => (Vec::new(), Some(e)),
        };
        self.index = ingredient_index(&records);
        self.records = records;
        self.load_error = error;
        debug!(
            recipes = self.records.len(),
            ingredients = self.index.len(),
            "Session reloaded"
        );
    }

    pub fn records(&self) -> &[RecipeRecord] {
        &self.records
    }

    pub fn ingredients(&self) -> &BTreeSet<String> {
        &self.index
    }

    pub fn load_error(&self) -> Option<&StrawberryError> {
        self.load_error.as_ref()
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Filtered match for a free-text ingredient query.
    ///
    /// Returns the normalized query alongside the outcome so callers can echo it.
    pub fn generate(
        &mut self,
        query: &str,
        max_minutes: u32,
    ) -> Result<(BTreeSet<String>, Outcome<'_>), StrawberryError> {
        if self.records.is_empty() {
            return Err(StrawberryError::NoRecipesLoaded);
        }
        let wanted = normalize_query(query);
        if wanted.is_empty() {
            return Err(StrawberryError::EmptyQuery);
        }
        let outcome = self.matcher.match_filtered(
            &self.records,
            &self.index,
            &wanted,
            max_minutes,
            &mut self.rng,
        );
        Ok((wanted, outcome))
    }

    /// Time-only random pick.
    pub fn surprise(&mut self, max_minutes: u32) -> Result<Outcome<'_>, StrawberryError> {
        if self.records.is_empty() {
            return Err(StrawberryError::NoRecipesLoaded);
        }
        Ok(self
            .matcher
            .match_unfiltered(&self.records, max_minutes, &mut self.rng))
    }

    /// Persists a new recipe and reloads the collection.
    ///
    /// On any failure the current collection is left untouched.
    pub fn add(&mut self, input: &NewRecipeInput) -> Result<RecipeRecord, StrawberryError> {
        let record = self.store.append(input)?;
        self.reload();
        Ok(record)
    }
}
