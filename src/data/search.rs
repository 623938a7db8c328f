//! Item lookup by key or localized display name.
use super::graph::GraphSource;
use super::models::Item;

pub const DEFAULT_NAMESPACE: &str = "minecraft:";
pub const MAX_SEARCH_RESULTS: usize = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum MatchRank {
    Exact,
    Prefix,
    Contains,
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace([' ', '-'], "_")
}

fn rank(item: &Item, query: &str, locale: &str) -> Option<MatchRank> {
    let key = item.key.to_lowercase();
    let bare_key = key.strip_prefix(DEFAULT_NAMESPACE).unwrap_or(&key);
    let name = normalize(item.display_name(locale));
    if key == query || bare_key == query || name == query {
        Some(MatchRank::Exact)
    } else if bare_key.starts_with(query) || name.starts_with(query) {
        Some(MatchRank::Prefix)
    } else if bare_key.contains(query) || name.contains(query) {
        Some(MatchRank::Contains)
    } else {
        None
    }
}

impl GraphSource {
    /// Items matching `query`: exact matches first, then prefix, then substring,
    /// each group ordered by key.
    pub fn search_items(&self, query: &str, locale: &str) -> Vec<&Item> {
        let query = normalize(query);
        if query.is_empty() {
            return Vec::new();
        }
        let mut hits: Vec<(MatchRank, &Item)> = self
            .items()
            .filter_map(|item| rank(item, &query, locale).map(|r| (r, item)))
            .collect();
        hits.sort_by(|(ra, a), (rb, b)| ra.cmp(rb).then_with(|| a.key.cmp(&b.key)));
        hits.into_iter()
            .take(MAX_SEARCH_RESULTS)
            .map(|(_, item)| item)
            .collect()
    }

    /// The single best match for a query, if any.
    pub fn find_item(&self, query: &str, locale: &str) -> Option<&Item> {
        self.search_items(query, locale).into_iter().next()
    }
}
