//! Thread-safety guarantees of components, schemas and objects.

use crate::{
    component::{Arguments, Component, Schema},
    field::{Field, FieldValue},
    objects::{
        Composition, Confirm, DispatchActionConfig, Filter, OptionGroup, OptionObject, Text,
        Trigger,
    },
};
use std::thread;

const fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn component_layer_is_send_and_sync() {
    assert_send_sync::<Component>();
    assert_send_sync::<Schema>();
    assert_send_sync::<Field>();
    assert_send_sync::<FieldValue>();
    assert_send_sync::<Arguments>();
}

#[test]
fn objects_are_send_and_sync() {
    assert_send_sync::<Text>();
    assert_send_sync::<Confirm>();
    assert_send_sync::<OptionObject>();
    assert_send_sync::<OptionGroup>();
    assert_send_sync::<Filter>();
    assert_send_sync::<DispatchActionConfig>();
}

#[test]
fn concurrent_construction_shares_one_schema() {
    let texts: Vec<Text> = thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|index| scope.spawn(move || Text::plain(format!("thread {index}"))))
            .collect();
        handles
            .into_iter()
            .map(|handle| {
                handle
                    .join()
                    .expect("thread should not panic")
                    .expect("text should build")
            })
            .collect()
    });

    for (index, text) in texts.iter().enumerate() {
        assert_eq!(text.text(), format!("thread {index}"));
        assert_eq!(text.component().schema(), Text::schema());
    }
}

#[test]
fn shared_object_builds_identically_from_many_threads() {
    let config = DispatchActionConfig::new(vec![Trigger::OnEnterPressed])
        .expect("config should build");
    let expected = config.build();

    thread::scope(|scope| {
        for _ in 0..4 {
            let (config, expected) = (&config, &expected);
            scope.spawn(move || assert_eq!(&config.build(), expected));
        }
    });
}
