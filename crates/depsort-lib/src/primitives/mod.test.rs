use super::*;

#[test]
fn test_value_spellings() {
    assert_eq!("text".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("compact".parse::<LogFormat>().unwrap(), LogFormat::Text);
    assert_eq!("json".parse::<LogFormat>().unwrap(), LogFormat::Json);
    assert_eq!("pretty".parse::<LogFormat>().unwrap(), LogFormat::Pretty);

    assert_eq!("stdout".parse::<LogOutput>().unwrap(), LogOutput::Stdout);
    assert_eq!("stderr".parse::<LogOutput>().unwrap(), LogOutput::Stderr);

    assert_eq!("plain".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);

    assert_eq!("detect".parse::<ColorIntent>().unwrap(), ColorIntent::Auto);
    assert_eq!("force".parse::<ColorIntent>().unwrap(), ColorIntent::Always);
    assert_eq!("off".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
}

#[test]
fn test_parsing_ignores_case() {
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    assert_eq!("Never".parse::<ColorIntent>().unwrap(), ColorIntent::Never);
}

#[test]
fn test_every_variant_parses_from_its_clap_name() {
    for variant in ColorIntent::value_variants() {
        let name = variant.to_possible_value().unwrap().get_name().to_string();
        assert_eq!(name.parse::<ColorIntent>().unwrap(), *variant);
    }
    for variant in LogFormat::value_variants() {
        let name = variant.to_possible_value().unwrap().get_name().to_string();
        assert_eq!(name.parse::<LogFormat>().unwrap(), *variant);
    }
}

#[test]
fn test_invalid_value_reports_parse_error() {
    let err = "sideways".parse::<OutputFormat>().unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(
        err.to_string(),
        "Failed to parse configuration value 'sideways': invalid output format"
    );
}

#[test]
fn test_verbosity_to_filter() {
    let filters: Vec<&str> = (0..=5)
        .map(|v| LogLevel::from_verbosity(v).as_filter())
        .collect();
    assert_eq!(filters, ["error", "warn", "info", "debug", "trace", "trace"]);
}

#[test]
fn test_color_intent_explicit_choices() {
    assert!(ColorIntent::Always.enabled());
    assert!(!ColorIntent::Never.enabled());
}

#[test]
fn test_log_context() {
    let context = LogContext::with_items("load_manifest", 4);
    assert_eq!(context.operation, "load_manifest");
    assert_eq!(context.items, Some(4));
    assert_eq!(LogContext::new("startup").items, None);
}

#[test]
fn test_manifest_not_found_display() {
    let error = ConfigError::ManifestNotFound {
        path: PathBuf::from("/nowhere/packages.json"),
    };
    assert_eq!(error.to_string(), "Manifest not found: /nowhere/packages.json");
}
