use serde::{Deserialize, Serialize};

/// Description substituted when the caller provides none and enrichment is
/// unavailable.
pub const FALLBACK_DESCRIPTION: &str = "No description provided.";

/// Tag applied to entries created without enrichment-suggested tags.
pub const DEFAULT_TAG: &str = "New";

/// One catalog item: a playable third-party web game.
///
/// The serialized field names (`id`, `title`, `url`, `thumbnailUrl`,
/// `description`, `tags`, `createdAt`) are the snapshot and API contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEntry {
    pub id: String,
    pub title: String,
    /// Absolute URL of the playable game; treated as opaque.
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unix-epoch milliseconds.
    pub created_at: i64,
}

/// Caller-supplied payload for creating a new entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameDraft {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

impl GameEntry {
    /// Construct a new entry from a draft, assigning a fresh id.
    ///
    /// Description and tags are resolved by the caller (enrichment or
    /// fallback) before construction. A blank thumbnail override is treated
    /// as absent.
    pub fn build(draft: GameDraft, description: String, tags: Vec<String>, created_at: i64) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            title: draft.title,
            url: draft.url,
            thumbnail_url: draft.thumbnail_url.filter(|t| !t.trim().is_empty()),
            description,
            tags,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_entry() -> GameEntry {
        GameEntry {
            id: "astro-game".to_string(),
            title: "Astro Game".to_string(),
            url: "https://astrogame.vercel.app/".to_string(),
            thumbnail_url: Some("https://example.test/astro.png".to_string()),
            description: "Navigate the cosmos.".to_string(),
            tags: vec!["Space".to_string(), "Action".to_string()],
            created_at: 1_700_000_000_000,
        }
    }

    #[test]
    fn entry_json_roundtrip() {
        let entry = test_entry();
        let json = serde_json::to_string(&entry).unwrap();
        let back: GameEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }

    #[test]
    fn entry_serializes_camel_case() {
        let json = serde_json::to_string(&test_entry()).unwrap();
        assert!(json.contains("\"thumbnailUrl\""));
        assert!(json.contains("\"createdAt\":1700000000000"));
        assert!(!json.contains("thumbnail_url"));
    }

    #[test]
    fn entry_missing_optional_fields() {
        let json = r#"{
            "id": "g-1",
            "title": "Minimal",
            "url": "https://example.test",
            "description": "",
            "createdAt": 0
        }"#;
        let entry: GameEntry = serde_json::from_str(json).unwrap();
        assert!(entry.thumbnail_url.is_none());
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn build_assigns_unique_ids() {
        let draft = GameDraft {
            title: "Test Game".to_string(),
            url: "https://example.test".to_string(),
            ..GameDraft::default()
        };
        let a = GameEntry::build(draft.clone(), "d".to_string(), vec![], 1);
        let b = GameEntry::build(draft, "d".to_string(), vec![], 1);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn build_drops_blank_thumbnail_override() {
        let draft = GameDraft {
            title: "Test Game".to_string(),
            url: "https://example.test".to_string(),
            thumbnail_url: Some("   ".to_string()),
            ..GameDraft::default()
        };
        let entry = GameEntry::build(draft, "d".to_string(), vec![], 1);
        assert!(entry.thumbnail_url.is_none());
    }
}
