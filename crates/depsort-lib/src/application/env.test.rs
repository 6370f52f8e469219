use super::*;
use crate::testing::{clean_color_env, env_lock};
use std::env;

fn color_from(vars: &[(&str, &str)]) -> ColorIntent {
    clean_color_env();
    unsafe {
        for (key, value) in vars {
            env::set_var(key, value);
        }
    }

    let env_config = EnvironmentConfig::load().unwrap();
    let color = env_config.apply_color_config(ColorIntent::Auto);
    clean_color_env();
    color
}

#[test]
fn test_no_environment_keeps_intent() {
    let _guard = env_lock();
    assert_eq!(color_from(&[]), ColorIntent::Auto);
}

#[test]
fn test_no_color_environment_variable() {
    let _guard = env_lock();
    assert_eq!(color_from(&[("NO_COLOR", "1")]), ColorIntent::Never);
}

#[test]
fn test_empty_no_color_is_ignored() {
    let _guard = env_lock();
    assert_eq!(color_from(&[("NO_COLOR", "")]), ColorIntent::Auto);
}

#[test]
fn test_clicolor_zero_disables() {
    let _guard = env_lock();
    assert_eq!(color_from(&[("CLICOLOR", "0")]), ColorIntent::Never);
    assert_eq!(color_from(&[("CLICOLOR", "1")]), ColorIntent::Auto);
}

#[test]
fn test_force_color_environment_variable() {
    let _guard = env_lock();
    assert_eq!(color_from(&[("FORCE_COLOR", "1")]), ColorIntent::Always);
    assert_eq!(color_from(&[("FORCE_COLOR", "false")]), ColorIntent::Never);
    assert_eq!(color_from(&[("FORCE_COLOR", "maybe")]), ColorIntent::Auto);
}

#[test]
fn test_environment_variable_precedence() {
    let _guard = env_lock();

    // FORCE_COLOR wins over both NO_COLOR and CLICOLOR
    let color = color_from(&[("CLICOLOR", "0"), ("NO_COLOR", "1"), ("FORCE_COLOR", "1")]);
    assert_eq!(color, ColorIntent::Always);
}

#[test]
fn test_ci_environment_variable() {
    let _guard = env_lock();
    assert_eq!(color_from(&[("CI", "true")]), ColorIntent::Never);
    assert_eq!(
        color_from(&[("CI", "true"), ("FORCE_COLOR", "1")]),
        ColorIntent::Never
    );
}

#[test]
fn test_apply_keeps_explicit_intent_without_overrides() {
    let env_config = EnvironmentConfig::default();
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Always),
        ColorIntent::Always
    );
    assert_eq!(
        env_config.apply_color_config(ColorIntent::Never),
        ColorIntent::Never
    );
}

#[test]
fn test_color_override_without_environment() {
    assert_eq!(EnvironmentConfig::default().color_override(), None);

    let env_config = EnvironmentConfig {
        force_color: Some("2".to_string()),
        no_color: Some("1".to_string()),
        ..EnvironmentConfig::default()
    };
    assert_eq!(env_config.color_override(), Some(ColorIntent::Always));
}

#[test]
fn test_parse_force_color_values() {
    assert_eq!(parse_force_color("true"), Some(ColorIntent::Always));
    assert_eq!(parse_force_color("0"), Some(ColorIntent::Never));
    assert_eq!(parse_force_color("yes"), None);
}
