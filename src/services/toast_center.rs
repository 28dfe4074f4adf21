//! Toast Center for Bookmark Saver.
//!
//! Holds the notifications currently on screen. Newest first, capped at a
//! configurable limit; anything pushed past the limit evicts the oldest toast.

use crate::types::toast::{Toast, ToastVariant};

/// Trait defining toast notification operations.
pub trait ToastCenterTrait {
    fn toast(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64;
    fn dismiss(&mut self, id: u64) -> bool;
    fn visible(&self) -> &[Toast];
    fn drain(&mut self) -> Vec<Toast>;
}

/// In-memory toast queue.
pub struct ToastCenter {
    toasts: Vec<Toast>,
    limit: usize,
    next_id: u64,
}

impl ToastCenter {
    /// Creates a toast center showing at most `limit` toasts (minimum 1).
    pub fn new(limit: usize) -> Self {
        Self {
            toasts: Vec::new(),
            limit: limit.max(1),
            next_id: 1,
        }
    }

    /// Changes the cap, dropping the oldest toasts if more are visible.
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit.max(1);
        self.toasts.truncate(self.limit);
    }

    /// Convenience for a default-variant toast.
    pub fn success(&mut self, title: &str, description: &str) -> u64 {
        self.toast(title, description, ToastVariant::Default)
    }

    /// Convenience for a destructive toast.
    pub fn error(&mut self, title: &str, description: &str) -> u64 {
        self.toast(title, description, ToastVariant::Destructive)
    }
}

impl Default for ToastCenter {
    fn default() -> Self {
        Self::new(1)
    }
}

impl ToastCenterTrait for ToastCenter {
    fn toast(&mut self, title: &str, description: &str, variant: ToastVariant) -> u64 {
        let id = self.next_id;
        self.next_id += 1;

        self.toasts.insert(
            0,
            Toast {
                id,
                title: title.to_string(),
                description: description.to_string(),
                variant,
            },
        );
        self.toasts.truncate(self.limit);
        id
    }

    fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != before
    }

    fn visible(&self) -> &[Toast] {
        &self.toasts
    }

    fn drain(&mut self) -> Vec<Toast> {
        std::mem::take(&mut self.toasts)
    }
}
