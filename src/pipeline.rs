//! Filter and sort stages.
//!
//! Every stage borrows its input and returns a new sequence of references, so
//! the source list is never reordered or trimmed.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::model::{Difficulty, Recipe};
use crate::selector::{FilterSelector, SortSelector};

/// Upper bound (inclusive) in minutes for the `quick` filter
pub const QUICK_MAX_MINUTES: u32 = 30;

pub fn filter_by_difficulty<'a>(recipes: &[&'a Recipe], difficulty: Difficulty) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .copied()
        .filter(|recipe| recipe.difficulty == difficulty)
        .collect()
}

pub fn filter_by_time<'a>(recipes: &[&'a Recipe], max_minutes: u32) -> Vec<&'a Recipe> {
    recipes
        .iter()
        .copied()
        .filter(|recipe| recipe.time <= max_minutes)
        .collect()
}

pub fn apply_filter<'a>(recipes: &[&'a Recipe], selector: FilterSelector) -> Vec<&'a Recipe> {
    match selector {
        FilterSelector::All => recipes.to_vec(),
        FilterSelector::Easy => filter_by_difficulty(recipes, Difficulty::Easy),
        FilterSelector::Medium => filter_by_difficulty(recipes, Difficulty::Medium),
        FilterSelector::Hard => filter_by_difficulty(recipes, Difficulty::Hard),
        FilterSelector::Quick => filter_by_time(recipes, QUICK_MAX_MINUTES),
    }
}

/// Base letters only: decomposed, combining marks dropped, lowercased
fn primary_key(title: &str) -> String {
    title
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Collator-style title ordering.
///
/// Base letters decide first (`Éclair` sorts with `Eclair`, before `Ezra`),
/// then accents, then case, then the raw strings.
pub fn compare_titles(a: &str, b: &str) -> Ordering {
    primary_key(a)
        .cmp(&primary_key(b))
        .then_with(|| {
            let fold = |s: &str| s.nfd().flat_map(char::to_lowercase).collect::<String>();
            fold(a).cmp(&fold(b))
        })
        .then_with(|| a.cmp(b))
}

pub fn sort_by_name<'a>(recipes: &[&'a Recipe]) -> Vec<&'a Recipe> {
    let mut sorted = recipes.to_vec();
    // sort_by is stable
    sorted.sort_by(|a, b| compare_titles(&a.title, &b.title));
    sorted
}

pub fn sort_by_time<'a>(recipes: &[&'a Recipe]) -> Vec<&'a Recipe> {
    let mut sorted = recipes.to_vec();
    sorted.sort_by_key(|recipe| recipe.time);
    sorted
}

pub fn apply_sort<'a>(recipes: &[&'a Recipe], selector: SortSelector) -> Vec<&'a Recipe> {
    match selector {
        SortSelector::None => recipes.to_vec(),
        SortSelector::Name => sort_by_name(recipes),
        SortSelector::Time => sort_by_time(recipes),
    }
}
