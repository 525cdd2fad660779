//! Unit tests for the conversation filter object.

use crate::{
    component::Arguments,
    error::ValidationError,
    objects::{Composition, ConversationType, Filter},
};
use rstest::rstest;
use serde_json::json;

#[test]
fn builds_filter() {
    let filter = Filter::new(Some(ConversationType::ALL.to_vec()), Some(false), Some(false))
        .expect("valid filter");

    assert_eq!(
        filter.build(),
        json!({
            "include": ["im", "mpim", "private", "public"],
            "exclude_external_shared_channels": false,
            "exclude_bot_users": false,
        })
    );
}

#[test]
fn filter_without_arguments_fails() {
    let result = Filter::new(None, None, None);
    assert!(matches!(result, Err(ValidationError::Invariant { .. })));
}

#[test]
fn filter_with_empty_include_only_fails() {
    let result = Filter::new(Some(Vec::new()), None, None);
    assert!(matches!(result, Err(ValidationError::Invariant { .. })));
}

#[test]
fn filter_with_unknown_conversation_type_fails() {
    let error = Filter::from_arguments(Arguments::new().with("include", vec!["group"]))
        .expect_err("group is not a conversation type");
    assert_eq!(error.field(), Some("include"));
    assert!(matches!(
        error.root_cause(),
        ValidationError::NotAnOption { value, .. } if value == "group"
    ));
}

#[rstest]
#[case(Some(true), None)]
#[case(None, Some(false))]
fn single_flag_is_enough(#[case] exclude_shared: Option<bool>, #[case] exclude_bots: Option<bool>) {
    assert!(Filter::new(None, exclude_shared, exclude_bots).is_ok());
}

#[test]
fn include_must_contain_strings() {
    let error = Filter::from_arguments(Arguments::new().with("include", vec![true]))
        .expect_err("booleans are not conversation types");
    assert_eq!(error.field(), Some("include"));
}

#[test]
fn filter_with_repeated_conversation_type_fails() {
    let result = Filter::new(
        Some(vec![ConversationType::Im, ConversationType::Im]),
        None,
        None,
    );
    assert!(matches!(
        result,
        Err(ValidationError::Invariant { reason, .. }) if reason.contains("'im'")
    ));
}

#[test]
fn include_longer_than_the_type_set_fails() {
    let mut include = ConversationType::ALL.to_vec();
    include.push(ConversationType::Public);
    let error = Filter::new(Some(include), None, None).expect_err("five entries");
    assert_eq!(error.field(), Some("include"));
    assert_eq!(
        error.root_cause(),
        &ValidationError::TooManyItems { max: 4, actual: 5 }
    );
}
