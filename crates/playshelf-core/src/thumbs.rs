//! Card image URL derivation.

use crate::entry::GameEntry;

/// The card image: the entry's override thumbnail when set, otherwise a live
/// screenshot of the game URL.
pub fn preview_url(entry: &GameEntry) -> String {
    match &entry.thumbnail_url {
        Some(url) if !url.is_empty() => url.clone(),
        _ => format!(
            "https://image.thum.io/get/width/600/crop/800/noanimate/{}",
            entry.url
        ),
    }
}

/// Deterministic placeholder image keyed by the entry id, for clients whose
/// preview fails to load.
pub fn fallback_thumbnail_url(id: &str) -> String {
    format!("https://picsum.photos/seed/{id}/600/400")
}
