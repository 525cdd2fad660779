//! Unit tests for option and option group objects.

use super::fixtures::{Values, markdown_text, option, plain_text, values};
use crate::{
    component::Arguments,
    error::ValidationError,
    objects::{Composition, OptionGroup, OptionObject, Text},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn builds_option(option: OptionObject, values: Values) {
    assert_eq!(
        option.build(),
        json!({
            "text": {"type": "plain_text", "text": values.text},
            "value": values.value,
            "url": values.url,
            "description": {"type": "plain_text", "text": values.text},
        })
    );
}

#[rstest]
fn minimal_option_omits_optional_fields(plain_text: Text, values: Values) {
    let option = OptionObject::new(plain_text, values.value).expect("valid option");
    assert_eq!(
        option.build(),
        json!({"text": {"type": "plain_text", "text": values.text}, "value": values.value})
    );
    assert_eq!(option.value(), values.value);
}

#[rstest]
fn option_with_malformed_url_fails(plain_text: Text) {
    let error = OptionObject::with_details(plain_text, "v", Some("thisisnoturl"), None)
        .expect_err("url is malformed");
    assert_eq!(error.field(), Some("url"));
}

#[rstest]
fn option_with_markdown_description_fails(plain_text: Text, markdown_text: Text) {
    let error = OptionObject::with_details(plain_text, "v", None::<String>, Some(markdown_text))
        .expect_err("description must be plain text");
    assert_eq!(error.field(), Some("description"));
}

#[rstest]
fn option_value_over_limit_fails(plain_text: Text) {
    let error = OptionObject::new(plain_text, "v".repeat(76)).expect_err("value is too long");
    assert_eq!(error.field(), Some("value"));
}

#[rstest]
fn builds_option_group(plain_text: Text, option: OptionObject) {
    let group = OptionGroup::new(plain_text, vec![option.clone(); 3]).expect("valid group");
    assert_eq!(
        group.build(),
        json!({
            "label": {"type": "plain_text", "text": "Some text"},
            "options": [option.build(), option.build(), option.build()],
        })
    );
}

#[rstest]
fn option_group_without_options_fails(plain_text: Text) {
    let error = OptionGroup::new(plain_text, Vec::new()).expect_err("options are required");
    assert_eq!(error, ValidationError::MissingField("options".to_owned()));
}

#[rstest]
fn option_group_rejects_texts_as_options(plain_text: Text) {
    let error = OptionGroup::from_arguments(
        Arguments::new()
            .with("label", plain_text.clone())
            .with("options", vec![plain_text]),
    )
    .expect_err("texts are not options");
    assert_eq!(error.field(), Some("options"));
}

#[rstest]
fn option_group_caps_option_count(plain_text: Text, option: OptionObject) {
    let error = OptionGroup::new(plain_text, vec![option; 101]).expect_err("too many options");
    assert_eq!(
        error.root_cause(),
        &ValidationError::TooManyItems {
            max: 100,
            actual: 101
        }
    );
}
