use super::*;

fn names(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// Text Output
// ============================================================================

#[test]
fn test_text_list_is_one_package_per_line() {
    let display = Display::new(OutputFormat::Text, false);
    let rendered = display
        .package_list("order", Some("A"), &names(&["D", "B", "C", "A"]))
        .unwrap();

    assert_eq!(rendered, "D\nB\nC\nA");
}

#[test]
fn test_text_empty_list_renders_nothing() {
    let display = Display::new(OutputFormat::Text, false);
    assert_eq!(display.package_list("to-install", None, &[]).unwrap(), "");
}

#[test]
fn test_text_max_dependencies() {
    let display = Display::new(OutputFormat::Text, false);

    assert_eq!(
        display.max_dependencies(Some(("A", 3))).unwrap(),
        "A (3 dependencies)"
    );
    assert_eq!(
        display.max_dependencies(Some(("B", 1))).unwrap(),
        "B (1 dependency)"
    );
    assert_eq!(display.max_dependencies(None).unwrap(), "No packages");
}

#[test]
fn test_text_without_color_has_no_escapes() {
    let display = Display::new(OutputFormat::Text, false);
    let rendered = display.package_list("packages", None, &names(&["a"])).unwrap();
    assert!(!rendered.contains('\u{1b}'));
    assert!(!display.usage_hint().contains('\u{1b}'));
}

#[test]
fn test_text_with_color_is_styled() {
    let display = Display::new(OutputFormat::Text, true);
    let rendered = display.package_list("packages", None, &names(&["a"])).unwrap();

    assert!(rendered.contains('\u{1b}'));
    assert_eq!(console::strip_ansi_codes(&rendered), "a");
}

#[test]
fn test_text_version() {
    let display = Display::new(OutputFormat::Text, false);
    assert_eq!(display.version("depsort", "1.2.3").unwrap(), "depsort 1.2.3");
}

// ============================================================================
// JSON Output
// ============================================================================

#[test]
fn test_json_list_shape() {
    let display = Display::new(OutputFormat::Json, true);
    let rendered = display
        .package_list("order", Some("A"), &names(&["B", "A"]))
        .unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert_eq!(value["query"], "order");
    assert_eq!(value["package"], "A");
    assert_eq!(value["packages"], serde_json::json!(["B", "A"]));
    assert!(!rendered.contains('\u{1b}'));
}

#[test]
fn test_json_list_omits_missing_package() {
    let display = Display::new(OutputFormat::Json, false);
    let rendered = display.package_list("packages", None, &[]).unwrap();

    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
    assert!(value.get("package").is_none());
    assert_eq!(value["packages"], serde_json::json!([]));
}

#[test]
fn test_json_max_dependencies() {
    let display = Display::new(OutputFormat::Json, false);

    let value: serde_json::Value =
        serde_json::from_str(&display.max_dependencies(Some(("A", 3))).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({"package": "A", "dependencies": 3}));

    let value: serde_json::Value =
        serde_json::from_str(&display.max_dependencies(None).unwrap()).unwrap();
    assert_eq!(value, serde_json::json!({"package": null, "dependencies": 0}));
}

#[test]
fn test_from_config_uses_format_and_color() {
    let config = AppConfig {
        format: OutputFormat::Json,
        color: crate::primitives::ColorIntent::Never,
        ..AppConfig::default()
    };

    let display = Display::from_config(&config);
    assert_eq!(display.format(), OutputFormat::Json);
    assert!(!display.color());
}
