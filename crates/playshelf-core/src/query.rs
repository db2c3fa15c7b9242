use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::entry::GameEntry;

/// Sentinel category meaning "no category filter".
pub const ALL_CATEGORIES: &str = "All";

/// How long an entry is presented as new after creation.
pub const NEW_WINDOW_MS: i64 = 86_400_000;

/// Sort direction for the displayed list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "newest")]
    NewestFirst,
    #[serde(rename = "oldest")]
    OldestFirst,
}

/// Ephemeral view parameters driving the displayed list. Never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState {
    pub search: String,
    pub category: String,
    pub sort: SortOrder,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORIES.to_string(),
            sort: SortOrder::default(),
        }
    }
}

impl QueryState {
    pub fn search(&mut self, text: impl Into<String>) {
        self.search = text.into();
    }

    pub fn filter_by_category(&mut self, category: impl Into<String>) {
        self.category = category.into();
    }

    pub fn set_sort_order(&mut self, sort: SortOrder) {
        self.sort = sort;
    }
}

/// Derive the displayed list from the catalog.
///
/// Three fixed stages: case-insensitive substring search over title and tags,
/// exact case-sensitive category membership (the "All" sentinel passes
/// everything), then a stable sort by creation time. Ties keep input order.
pub fn apply<'a>(catalog: &'a [GameEntry], query: &QueryState) -> Vec<&'a GameEntry> {
    let needle = query.search.to_lowercase();
    let mut shown: Vec<&GameEntry> = catalog
        .iter()
        .filter(|entry| {
            needle.is_empty()
                || entry.title.to_lowercase().contains(&needle)
                || entry.tags.iter().any(|tag| tag.to_lowercase().contains(&needle))
        })
        .filter(|entry| {
            query.category == ALL_CATEGORIES || entry.tags.iter().any(|tag| *tag == query.category)
        })
        .collect();

    match query.sort {
        SortOrder::NewestFirst => shown.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::OldestFirst => shown.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
    }
    shown
}

/// Category universe: the "All" sentinel followed by the distinct tag set of
/// the full (unfiltered) catalog, alphabetically sorted.
pub fn categories(catalog: &[GameEntry]) -> Vec<String> {
    let distinct: BTreeSet<&str> = catalog
        .iter()
        .flat_map(|entry| entry.tags.iter().map(String::as_str))
        .collect();

    let mut out = Vec::with_capacity(distinct.len() + 1);
    out.push(ALL_CATEGORIES.to_string());
    out.extend(distinct.into_iter().map(String::from));
    out
}

/// Whether an entry carries the "new" badge. Evaluated against wall-clock
/// time at render, never stored.
pub fn is_new(entry: &GameEntry, now_ms: i64) -> bool {
    now_ms - entry.created_at < NEW_WINDOW_MS
}
