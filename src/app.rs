//! Application Shell for Bookmark Saver.
//!
//! Owns the authoritative bookmark list and the filtered view, wires the
//! form, search bar and list together, and turns backend failures into
//! toasts. All mutations happen through `&mut self`, so updates are applied
//! one event at a time.

use crate::managers::add_bookmark_form::{AddBookmarkForm, AddBookmarkFormTrait};
use crate::managers::bookmark_list::BookmarkList;
use crate::managers::search_bar::{SearchBar, SearchBarTrait};
use crate::services::api_client::BookmarkApi;
use crate::services::toast_center::ToastCenter;
use crate::types::bookmark::{Bookmark, DraftBookmark};
use crate::types::errors::ApiError;
use crate::types::validation::FieldErrors;

pub const TOAST_ERROR_TITLE: &str = "Error";
pub const TOAST_SUCCESS_TITLE: &str = "Success";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch bookmarks. Please try again.";
pub const CREATE_SUCCEEDED_MESSAGE: &str = "Bookmark added successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "Failed to add bookmark. Please try again.";
pub const DELETE_SUCCEEDED_MESSAGE: &str = "Bookmark deleted.";
pub const DELETE_FAILED_MESSAGE: &str = "Failed to delete bookmark. Please try again.";

/// Top-level lifecycle of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellState {
    LoadingInitial,
    Ready(ReadyPhase),
}

/// Activity within the `Ready` state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyPhase {
    Idle,
    Submitting,
    /// Transient: a failure is being surfaced, then the shell returns to `Idle`.
    ErrorFlash,
}

impl ShellState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShellState::LoadingInitial => "loading-initial",
            ShellState::Ready(ReadyPhase::Idle) => "idle",
            ShellState::Ready(ReadyPhase::Submitting) => "submitting",
            ShellState::Ready(ReadyPhase::ErrorFlash) => "error-flash",
        }
    }
}

/// Result of submitting the add-bookmark form through the shell.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Invalid(FieldErrors),
    /// The backend accepted the draft and issued this record.
    Added(Bookmark),
    /// The create call failed; lists are unchanged.
    Failed(ApiError),
}

/// Bookmarks from `list` whose title or URL contains `query`, ignoring case.
///
/// Preserves order. An empty query yields the whole list.
pub fn filter_bookmarks(list: &[Bookmark], query: &str) -> Vec<Bookmark> {
    let needle = query.to_lowercase();
    list.iter()
        .filter(|b| b.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Central application struct.
pub struct App<A: BookmarkApi> {
    api: A,
    state: ShellState,
    bookmarks: Vec<Bookmark>,
    filtered: Vec<Bookmark>,
    pub form: AddBookmarkForm,
    pub search_bar: SearchBar,
    pub toasts: ToastCenter,
}

impl<A: BookmarkApi> App<A> {
    /// Creates a shell in `LoadingInitial` with empty lists.
    pub fn new(api: A, toast_limit: usize) -> Self {
        Self {
            api,
            state: ShellState::LoadingInitial,
            bookmarks: Vec::new(),
            filtered: Vec::new(),
            form: AddBookmarkForm::new(),
            search_bar: SearchBar::new(),
            toasts: ToastCenter::new(toast_limit),
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    /// The authoritative list.
    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// The filtered view currently rendered.
    pub fn filtered(&self) -> &[Bookmark] {
        &self.filtered
    }

    pub fn list(&self) -> BookmarkList<'_> {
        BookmarkList::new(&self.filtered)
    }

    fn transition(&mut self, next: ShellState) {
        if self.state != next {
            tracing::debug!(from = self.state.as_str(), to = next.as_str(), "shell state");
            self.state = next;
        }
    }

    fn flash_error(&mut self, description: &str) {
        self.transition(ShellState::Ready(ReadyPhase::ErrorFlash));
        self.toasts.error(TOAST_ERROR_TITLE, description);
        self.transition(ShellState::Ready(ReadyPhase::Idle));
    }

    /// Initial load. On failure the shell is still ready, with empty lists.
    pub async fn mount(&mut self) {
        self.transition(ShellState::LoadingInitial);
        match self.api.list_bookmarks().await {
            Ok(bookmarks) => {
                tracing::info!(count = bookmarks.len(), "bookmarks loaded");
                self.filtered = bookmarks.clone();
                self.bookmarks = bookmarks;
                self.transition(ShellState::Ready(ReadyPhase::Idle));
            }
            Err(e) => {
                tracing::error!(error = %e, "Error fetching bookmarks");
                self.flash_error(FETCH_FAILED_MESSAGE);
            }
        }
    }

    /// Feeds a search bar change event through to the filter.
    ///
    /// The only way to change the filtered view besides mount/add/delete, so
    /// the search bar's query always describes what is shown.
    pub fn search(&mut self, value: &str) {
        let bookmarks = &self.bookmarks;
        let filtered = &mut self.filtered;
        self.search_bar
            .on_change(value, |query| *filtered = filter_bookmarks(bookmarks, query));
        tracing::trace!(query = value, visible = self.filtered.len(), "search");
    }

    /// Sends `draft` to the backend and appends the issued record.
    ///
    /// The new record is appended to the filtered view too, whether or not it
    /// matches the active query; the next search recomputes the view.
    pub async fn add_bookmark(&mut self, draft: DraftBookmark) -> Result<Bookmark, ApiError> {
        self.transition(ShellState::Ready(ReadyPhase::Submitting));
        match self.api.create_bookmark(&draft).await {
            Ok(added) => {
                tracing::info!(id = %added.id, "bookmark added");
                self.bookmarks.push(added.clone());
                self.filtered.push(added.clone());
                self.toasts.success(TOAST_SUCCESS_TITLE, CREATE_SUCCEEDED_MESSAGE);
                self.transition(ShellState::Ready(ReadyPhase::Idle));
                Ok(added)
            }
            Err(e) => {
                tracing::error!(error = %e, "Error adding bookmark");
                self.flash_error(CREATE_FAILED_MESSAGE);
                Err(e)
            }
        }
    }

    /// Submits the form; a valid draft clears the form before the request is sent.
    pub async fn submit_form(&mut self) -> SubmitOutcome {
        let draft = match self.form.submit(|draft| draft) {
            Ok(draft) => draft,
            Err(errors) => return SubmitOutcome::Invalid(errors),
        };
        match self.add_bookmark(draft).await {
            Ok(added) => SubmitOutcome::Added(added),
            Err(e) => SubmitOutcome::Failed(e),
        }
    }

    /// Deletes on the backend, then drops the record from both lists.
    pub async fn delete_bookmark(&mut self, id: &str) -> Result<(), ApiError> {
        self.transition(ShellState::Ready(ReadyPhase::Submitting));
        match self.api.delete_bookmark(id).await {
            Ok(()) => {
                tracing::info!(id, "bookmark deleted");
                self.bookmarks.retain(|b| b.id != id);
                self.filtered.retain(|b| b.id != id);
                self.toasts.success(TOAST_SUCCESS_TITLE, DELETE_SUCCEEDED_MESSAGE);
                self.transition(ShellState::Ready(ReadyPhase::Idle));
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, id, "Error deleting bookmark");
                self.flash_error(DELETE_FAILED_MESSAGE);
                Err(e)
            }
        }
    }
}
