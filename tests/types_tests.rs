//! Tests for core types.

use pretty_assertions::assert_eq;
use palaver::types::*;

#[test]
fn message_constructors_set_role() {
    assert_eq!(Message::system("s").role, Role::System);
    assert_eq!(Message::user("u").role, Role::User);
    assert_eq!(Message::assistant("a").role, Role::Assistant);
    assert!(Message::system("s").is_system());
    assert!(!Message::user("u").is_system());
}

#[test]
fn message_deserializes_wire_shape() {
    let msg: Message = serde_json::from_str(r#"{"role":"user","content":"hi"}"#).unwrap();
    assert_eq!(msg, Message::user("hi"));
}

#[test]
fn unknown_role_is_rejected() {
    let result = serde_json::from_str::<Message>(r#"{"role":"tool","content":"x"}"#);
    assert!(result.is_err());
}

#[test]
fn role_display_matches_wire_name() {
    assert_eq!(Role::System.to_string(), "system");
    assert_eq!(Role::User.to_string(), "user");
    assert_eq!(Role::Assistant.to_string(), "assistant");
}

#[test]
fn generation_settings_defaults() {
    let settings = GenerationSettings::default();
    assert_eq!(settings.max_tokens, 1000);
    assert!((settings.temperature - 0.7).abs() < f64::EPSILON);
}

#[test]
fn generation_settings_builder_overrides_one_field() {
    let settings = GenerationSettings::builder().max_tokens(256).build();
    assert_eq!(settings.max_tokens, 256);
    assert!((settings.temperature - 0.7).abs() < f64::EPSILON);
}
