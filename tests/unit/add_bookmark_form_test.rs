//! Unit tests for the add-bookmark form through `AddBookmarkFormTrait`.

use bookmark_saver::managers::add_bookmark_form::{AddBookmarkForm, AddBookmarkFormTrait};
use bookmark_saver::services::validation::{INVALID_URL, TITLE_REQUIRED};
use bookmark_saver::types::bookmark::DraftBookmark;
use bookmark_saver::types::validation::{Field, FormValues};

#[test]
fn test_valid_submit_invokes_callback_then_clears() {
    let mut form = AddBookmarkForm::new();
    form.set_field(Field::Title, "Example");
    form.set_field(Field::Url, "https://example.com");

    let mut received: Option<DraftBookmark> = None;
    form.submit(|draft| received = Some(draft)).unwrap();

    let draft = received.expect("callback must receive the draft");
    assert_eq!(draft.title, "Example");
    assert_eq!(draft.url, "https://example.com");
    assert_eq!(draft.description.as_deref(), Some(""));
    assert_eq!(form.values(), &FormValues::default());
}

#[test]
fn test_invalid_submit_keeps_input_and_shows_errors() {
    let mut form = AddBookmarkForm::new();
    form.set_field(Field::Url, "example.com");

    let mut calls = 0;
    let errors = form.submit(|_| calls += 1).unwrap_err();

    assert_eq!(calls, 0);
    assert_eq!(errors.get(Field::Title), Some(TITLE_REQUIRED));
    assert_eq!(errors.get(Field::Url), Some(INVALID_URL));
    assert_eq!(form.values().url, "example.com");
    assert_eq!(form.field_error(Field::Url), Some(INVALID_URL));
}

#[test]
fn test_fixing_fields_clears_errors_one_by_one() {
    let mut form = AddBookmarkForm::new();
    let _ = form.submit(|_| ());
    assert_eq!(form.errors().len(), 2);

    form.set_field(Field::Title, "Rust");
    assert_eq!(form.errors().len(), 1);
    assert_eq!(form.field_error(Field::Title), None);

    form.set_field(Field::Url, "https://rust-lang.org");
    assert!(form.errors().is_empty());
}

#[test]
fn test_reset_returns_to_pristine() {
    let mut form = AddBookmarkForm::new();
    form.set_field(Field::Title, "x");
    let _ = form.submit(|_| ());
    form.reset();

    assert_eq!(form.values(), &FormValues::default());
    assert!(form.errors().is_empty());

    // Pristine again: typing does not re-validate.
    form.set_field(Field::Url, "bad");
    assert!(form.errors().is_empty());
}
