pub mod entry;
pub mod flair;
pub mod query;
pub mod seed;
pub mod thumbs;
pub mod time;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers {
    use crate::entry::GameEntry;

    /// Create an entry with the given id, title, tags, and timestamp.
    pub fn make_entry(id: &str, title: &str, tags: &[&str], created_at: i64) -> GameEntry {
        GameEntry {
            id: id.to_string(),
            title: title.to_string(),
            url: format!("https://{id}.example.test"),
            thumbnail_url: None,
            description: format!("Test entry {id}"),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            created_at,
        }
    }
}
