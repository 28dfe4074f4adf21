//! Validation schema for new bookmarks.
//!
//! Turns raw [`FormValues`] into a [`DraftBookmark`] or a set of field errors.
//! Pure: no I/O, no state.

use url::Url;

use crate::types::bookmark::DraftBookmark;
use crate::types::validation::{Field, FieldErrors, FormValues};

pub const TITLE_REQUIRED: &str = "Title is required";
pub const INVALID_URL: &str = "Invalid URL";

/// Validates every field and returns all failures at once.
pub fn validate(values: &FormValues) -> Result<DraftBookmark, FieldErrors> {
    let mut errors = FieldErrors::new();

    if values.title.is_empty() {
        errors.push(Field::Title, TITLE_REQUIRED);
    }
    if !is_absolute_url(&values.url) {
        errors.push(Field::Url, INVALID_URL);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(DraftBookmark {
        title: values.title.clone(),
        url: values.url.clone(),
        description: Some(values.description.clone()),
    })
}

/// True when `input` parses as an absolute URL (scheme required).
pub fn is_absolute_url(input: &str) -> bool {
    Url::parse(input).is_ok()
}
