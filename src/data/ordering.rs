//! Canonical ordering for recipe lists so pagination is reproducible.
use super::models::Recipe;
use std::cmp::Ordering;

/// Total order over recipes:
/// never-removed first, then earlier removal, then flag priority (unflagged first),
/// then introduction version, then key.
pub fn recipe_order(a: &Recipe, b: &Recipe) -> Ordering {
    (a.removed.is_some(), &a.removed)
        .cmp(&(b.removed.is_some(), &b.removed))
        .then_with(|| a.feature.cmp(&b.feature))
        .then_with(|| a.introduced.cmp(&b.introduced))
        .then_with(|| a.key.cmp(&b.key))
}
