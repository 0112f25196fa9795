use crate::core::{Outcome, RecipeRecord};
use crate::format::title_case;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeSet, HashSet};

/// Below this many minutes no match is attempted.
pub const DEFAULT_MIN_MINUTES: u32 = 12;

/// Every distinct ingredient token used across `records`.
pub fn ingredient_index(records: &[RecipeRecord]) -> BTreeSet<String> {
    records
        .iter()
        .flat_map(|r| r.ingredients.iter())
        .map(|i| i.to_lowercase())
        .collect()
}

/// Picks recipes by time ceiling and, optionally, wanted ingredients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher {
    min_minutes: u32,
}

impl Default for Matcher {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_MINUTES)
    }
}

impl Matcher {
    pub fn new(min_minutes: u32) -> Self {
        Self { min_minutes }
    }

    pub fn min_minutes(&self) -> u32 {
        self.min_minutes
    }

    /// Random record within `max_minutes` whose ingredients cover `wanted`.
    ///
    /// The floor rule is checked first, then unknown ingredients (reported as
    /// a shortage), and only then the joint time + ingredient filter.
    pub fn match_filtered<'a, R: Rng + ?Sized>(
        &self,
        records: &'a [RecipeRecord],
        index: &BTreeSet<String>,
        wanted: &BTreeSet<String>,
        max_minutes: u32,
        rng: &mut R,
    ) -> Outcome<'a> {
        if let Some(too_short) = self.check_floor(max_minutes) {
            return too_short;
        }

        let mut missing: Vec<String> = wanted
            .difference(index)
            .map(String::as_str)
            .map(title_case)
            .collect();
        if !missing.is_empty() {
            missing.sort();
            return Outcome::Shortage(missing);
        }

        let candidates: Vec<&RecipeRecord> = records
            .iter()
            .filter(|r| r.minutes <= u64::from(max_minutes))
            .filter(|r| {
                let have: HashSet<&str> = r.ingredients.iter().map(String::as_str).collect();
                wanted.iter().all(|w| have.contains(w.as_str()))
            })
            .collect();

        pick(&candidates, max_minutes, rng)
    }

    /// Random record within `max_minutes`, ignoring ingredients.
    pub fn match_unfiltered<'a, R: Rng + ?Sized>(
        &self,
        records: &'a [RecipeRecord],
        max_minutes: u32,
        rng: &mut R,
    ) -> Outcome<'a> {
        if let Some(too_short) = self.check_floor(max_minutes) {
            return too_short;
        }

        let pool: Vec<&RecipeRecord> = records
            .iter()
            .filter(|r| r.minutes <= u64::from(max_minutes))
            .collect();

        pick(&pool, max_minutes, rng)
    }

    fn check_floor(&self, max_minutes: u32) -> Option<Outcome<'static>> {
        (max_minutes < self.min_minutes).then_some(Outcome::TooShort {
            max_minutes,
            floor: self.min_minutes,
        })
    }
}

fn pick<'a, R: Rng + ?Sized>(
    candidates: &[&'a RecipeRecord],
    max_minutes: u32,
    rng: &mut R,
) -> Outcome<'a> {
    match candidates.choose(rng) {
        Some(&record) => Outcome::Match(record),
        None => Outcome::NoMatch { max_minutes },
    }
}
