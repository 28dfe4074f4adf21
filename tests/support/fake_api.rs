//! In-memory stand-in for the bookmark backend.
//!
//! Cloning shares state, so a test can keep a handle after moving one into `App`.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use bookmark_saver::services::api_client::BookmarkApi;
use bookmark_saver::types::bookmark::{Bookmark, DraftBookmark};
use bookmark_saver::types::errors::ApiError;

#[derive(Default)]
struct FakeState {
    bookmarks: Mutex<Vec<Bookmark>>,
    next_id: AtomicU64,
    fail_list: AtomicBool,
    fail_create: AtomicBool,
    fail_delete: AtomicBool,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
}

#[derive(Clone, Default)]
pub struct FakeApi {
    state: Arc<FakeState>,
}

impl FakeApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend already holding `bookmarks`; new ids continue after them.
    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        let api = Self::new();
        api.state
            .next_id
            .store(bookmarks.len() as u64, Ordering::SeqCst);
        *api.state.bookmarks.lock().unwrap() = bookmarks;
        api
    }

    pub fn fail_list(&self, fail: bool) {
        self.state.fail_list.store(fail, Ordering::SeqCst);
    }

    pub fn fail_create(&self, fail: bool) {
        self.state.fail_create.store(fail, Ordering::SeqCst);
    }

    pub fn fail_delete(&self, fail: bool) {
        self.state.fail_delete.store(fail, Ordering::SeqCst);
    }

    pub fn list_calls(&self) -> usize {
        self.state.list_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.state.create_calls.load(Ordering::SeqCst)
    }

    pub fn stored(&self) -> Vec<Bookmark> {
        self.state.bookmarks.lock().unwrap().clone()
    }
}

pub fn bookmark(id: &str, title: &str, url: &str) -> Bookmark {
    Bookmark {
        id: id.to_string(),
        title: title.to_string(),
        url: url.to_string(),
        description: None,
    }
}

#[async_trait]
impl BookmarkApi for FakeApi {
    async fn list_bookmarks(&self) -> Result<Vec<Bookmark>, ApiError> {
        self.state.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_list.load(Ordering::SeqCst) {
            return Err(ApiError::Network("connection refused".to_string()));
        }
        Ok(self.stored())
    }

    async fn create_bookmark(&self, draft: &DraftBookmark) -> Result<Bookmark, ApiError> {
        self.state.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_create.load(Ordering::SeqCst) {
            return Err(ApiError::Status(500));
        }
        let id = self.state.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let created = Bookmark {
            id: id.to_string(),
            title: draft.title.clone(),
            url: draft.url.clone(),
            description: draft.description.clone(),
        };
        self.state.bookmarks.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete_bookmark(&self, id: &str) -> Result<(), ApiError> {
        if self.state.fail_delete.load(Ordering::SeqCst) {
            return Err(ApiError::Status(503));
        }
        let mut stored = self.state.bookmarks.lock().unwrap();
        let before = stored.len();
        stored.retain(|b| b.id != id);
        if stored.len() == before {
            return Err(ApiError::Status(404));
        }
        Ok(())
    }
}
