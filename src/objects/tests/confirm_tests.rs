//! Unit tests for the confirmation dialog object.

use super::fixtures::{Values, markdown_text, plain_text, values};
use crate::{
    error::ValidationError,
    objects::{Composition, Confirm, ConfirmStyle, Text},
};
use rstest::rstest;
use serde_json::json;

#[rstest]
fn builds_confirm(plain_text: Text, markdown_text: Text, values: Values) {
    let confirm = Confirm::new(
        plain_text,
        markdown_text,
        Text::plain(values.confirm_text).expect("valid text"),
        Text::plain(values.deny_text).expect("valid text"),
    )
    .expect("valid confirm");

    assert_eq!(
        confirm.build(),
        json!({
            "title": {"type": "plain_text", "text": values.text},
            "text": {"type": "mrkdwn", "text": values.text},
            "confirm": {"type": "plain_text", "text": values.confirm_text},
            "deny": {"type": "plain_text", "text": values.deny_text},
        })
    );
}

#[rstest]
fn keys_follow_declaration_order(plain_text: Text) {
    let confirm = Confirm::new(
        plain_text.clone(),
        plain_text.clone(),
        plain_text.clone(),
        plain_text,
    )
    .expect("valid confirm");
    let built = confirm.build();
    let keys: Vec<&str> = built
        .as_object()
        .expect("object")
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(keys, ["title", "text", "confirm", "deny"]);
}

#[rstest]
fn styled_confirm_appends_style(plain_text: Text) {
    let confirm = Confirm::styled(
        plain_text.clone(),
        plain_text.clone(),
        plain_text.clone(),
        plain_text,
        ConfirmStyle::Danger,
    )
    .expect("valid confirm");
    assert_eq!(confirm.build()["style"], "danger");
}

#[rstest]
fn markdown_title_fails(plain_text: Text, markdown_text: Text) {
    let error = Confirm::new(
        markdown_text,
        plain_text.clone(),
        plain_text.clone(),
        plain_text,
    )
    .expect_err("title must be plain text");
    assert_eq!(error.field(), Some("title"));
    assert_eq!(error.root_cause(), &ValidationError::PlainTextRequired);
}

#[rstest]
fn long_button_label_fails(plain_text: Text) {
    let long = Text::plain("x".repeat(31)).expect("valid text");
    let error = Confirm::new(plain_text.clone(), plain_text.clone(), long, plain_text)
        .expect_err("confirm label is too long");
    assert_eq!(error.field(), Some("confirm"));
    assert_eq!(
        error.root_cause(),
        &ValidationError::TooLong {
            max: 30,
            actual: 31
        }
    );
}
