use serde::{Deserialize, Deserializer, Serialize};

/// Server-issued bookmark identifier, held as text whatever its JSON encoding.
pub type BookmarkId = String;

/// A saved bookmark as issued by the backend.
///
/// The `id` is always server-assigned; the client never fabricates one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    #[serde(deserialize_with = "string_or_number")]
    pub id: BookmarkId,
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// A bookmark pending creation: everything but the identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftBookmark {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Bookmark {
    /// True when the title or URL contains `needle` (already lowercased).
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.url.to_lowercase().contains(needle)
    }
}

/// Accepts ids encoded either as JSON strings or numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<BookmarkId, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Uint(u64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Uint(n) => n.to_string(),
    })
}
