//! Bookmark List: a pure rendering of the bookmarks it is given, in order.

use serde_json::{json, Value};

use crate::types::bookmark::Bookmark;

pub const EMPTY_LIST_TEXT: &str = "No bookmarks found.";

/// Borrowed view over a sequence of bookmarks.
pub struct BookmarkList<'a> {
    bookmarks: &'a [Bookmark],
}

impl<'a> BookmarkList<'a> {
    pub fn new(bookmarks: &'a [Bookmark]) -> Self {
        Self { bookmarks }
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    /// One JSON row per bookmark.
    pub fn rows(&self) -> Vec<Value> {
        self.bookmarks
            .iter()
            .map(|b| {
                json!({
                    "id": b.id,
                    "title": b.title,
                    "url": b.url,
                    "description": b.description,
                })
            })
            .collect()
    }

    /// Plain-text rendering: `title <url>` with an indented description line.
    pub fn render_text(&self) -> String {
        if self.bookmarks.is_empty() {
            return EMPTY_LIST_TEXT.to_string();
        }

        let mut out = String::new();
        for b in self.bookmarks {
            out.push_str(&format!("{} <{}>\n", b.title, b.url));
            if let Some(desc) = b.description.as_deref().filter(|d| !d.is_empty()) {
                out.push_str(&format!("    {}\n", desc));
            }
        }
        out
    }
}
