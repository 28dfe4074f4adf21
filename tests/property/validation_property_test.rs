//! Property-based tests for the validation schema.

use bookmark_saver::services::validation::{validate, INVALID_URL, TITLE_REQUIRED};
use bookmark_saver::types::validation::{Field, FormValues};
use proptest::prelude::*;

fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,15}",
        prop_oneof![Just(".com"), Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    #[test]
    fn empty_title_always_fails(url in arb_url(), description in ".{0,20}") {
        let values = FormValues { title: String::new(), url, description };
        let errors = validate(&values).unwrap_err();
        prop_assert_eq!(errors.get(Field::Title), Some(TITLE_REQUIRED));
    }

    #[test]
    fn schemeless_url_always_fails(title in "[a-zA-Z]{1,20}", host in "[a-z]{1,10}\\.[a-z]{2,3}") {
        let values = FormValues { title, url: host, description: String::new() };
        let errors = validate(&values).unwrap_err();
        prop_assert_eq!(errors.get(Field::Url), Some(INVALID_URL));
    }

    #[test]
    fn valid_input_round_trips_into_draft(
        title in "[a-zA-Z][a-zA-Z0-9 ]{0,30}",
        url in arb_url(),
        description in "[a-z ]{0,40}",
    ) {
        let values = FormValues { title: title.clone(), url: url.clone(), description: description.clone() };
        let draft = validate(&values).unwrap();
        prop_assert_eq!(draft.title, title);
        prop_assert_eq!(draft.url, url);
        prop_assert_eq!(draft.description, Some(description));
    }
}
