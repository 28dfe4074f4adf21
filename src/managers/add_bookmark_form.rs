//! Add-Bookmark Form.
//!
//! Owns the transient input state (title, url, description) and the field
//! errors currently on display. Submitting runs the validation schema; a
//! valid draft is handed to the caller's callback and the form resets.
//! The form never touches the network.

use crate::services::validation;
use crate::types::bookmark::DraftBookmark;
use crate::types::validation::{Field, FieldErrors, FormValues};

/// Trait defining the add-bookmark form interface.
pub trait AddBookmarkFormTrait {
    fn set_field(&mut self, field: Field, value: &str);
    fn values(&self) -> &FormValues;
    fn errors(&self) -> &FieldErrors;
    fn submit<F, R>(&mut self, on_add: F) -> Result<R, FieldErrors>
    where
        F: FnOnce(DraftBookmark) -> R;
    fn reset(&mut self);
}

/// In-memory form state.
#[derive(Debug, Default)]
pub struct AddBookmarkForm {
    values: FormValues,
    errors: FieldErrors,
    /// Set after a submit fails validation; edits re-validate from then on.
    submit_failed: bool,
}

impl AddBookmarkForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// The error currently shown under `field`, if any.
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }
}

impl AddBookmarkFormTrait for AddBookmarkForm {
    fn set_field(&mut self, field: Field, value: &str) {
        self.values.set(field, value);
        if self.submit_failed {
            self.errors = match validation::validate(&self.values) {
                Ok(_) => FieldErrors::new(),
                Err(errors) => errors,
            };
        }
    }

    fn values(&self) -> &FormValues {
        &self.values
    }

    fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Validates the current input. On success the callback receives the
    /// draft and the form is cleared afterwards; on failure the callback is
    /// not invoked and the field errors are kept for display.
    fn submit<F, R>(&mut self, on_add: F) -> Result<R, FieldErrors>
    where
        F: FnOnce(DraftBookmark) -> R,
    {
        match validation::validate(&self.values) {
            Ok(draft) => {
                let out = on_add(draft);
                self.reset();
                Ok(out)
            }
            Err(errors) => {
                tracing::debug!(%errors, "bookmark form rejected");
                self.submit_failed = true;
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}
