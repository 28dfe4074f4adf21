//! Table tests for the bookmark validation schema.

use rstest::rstest;

use bookmark_saver::services::validation::{validate, INVALID_URL, TITLE_REQUIRED};
use bookmark_saver::types::validation::{Field, FormValues};

fn values(title: &str, url: &str, description: &str) -> FormValues {
    FormValues {
        title: title.to_string(),
        url: url.to_string(),
        description: description.to_string(),
    }
}

#[rstest]
#[case("https://example.com")]
#[case("http://localhost:3000/path?q=1#frag")]
#[case("ftp://files.example.org/pub")]
#[case("mailto:someone@example.com")]
fn test_absolute_urls_are_accepted(#[case] url: &str) {
    let draft = validate(&values("Title", url, "")).unwrap();
    assert_eq!(draft.url, url);
}

#[rstest]
#[case("")]
#[case("example.com")]
#[case("/relative/path")]
#[case("https://")]
#[case("http://exa mple.com")]
fn test_invalid_urls_are_rejected(#[case] url: &str) {
    let errors = validate(&values("Title", url, "")).unwrap_err();
    assert_eq!(errors.get(Field::Url), Some(INVALID_URL));
    assert_eq!(errors.get(Field::Title), None);
}

#[test]
fn test_empty_title_is_required() {
    let errors = validate(&values("", "https://example.com", "")).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(Field::Title), Some(TITLE_REQUIRED));
}

#[test]
fn test_whitespace_title_counts_as_present() {
    assert!(validate(&values(" ", "https://example.com", "")).is_ok());
}

#[test]
fn test_description_is_unconstrained() {
    let long = "x".repeat(10_000);
    let draft = validate(&values("Title", "https://example.com", &long)).unwrap();
    assert_eq!(draft.description.as_deref(), Some(long.as_str()));
}

#[test]
fn test_field_errors_display() {
    let errors = validate(&values("", "nope", "")).unwrap_err();
    assert_eq!(
        errors.to_string(),
        "title: Title is required; url: Invalid URL"
    );
}
