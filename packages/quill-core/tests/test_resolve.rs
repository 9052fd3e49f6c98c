use quill_core::serde_json::json;
use quill_core::{resolve, ConfigError, ConfigValue, JsExpression, QuillOptions, ToolbarOptions};

#[test]
fn test_default_options() {
    let resolution = resolve(&QuillOptions::default()).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"toolbar":true}}"#
    );
    assert_eq!(resolution.theme.as_deref(), Some("snow"));
    assert!(!resolution.is_katex());
    assert!(!resolution.is_highlight_js());
    assert!(!resolution.is_smart_break());
}

#[test]
fn test_resolve_is_deterministic() {
    let options = QuillOptions {
        bounds: Some("document.body".to_string()),
        modules: Some(json!({"formula": true, "custom": {"x": 1}})),
        ..QuillOptions::default()
    };
    let first = resolve(&options).unwrap();
    let second = resolve(&options).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.config.to_json(), second.config.to_json());
}

#[test]
fn test_empty_quill_version_is_rejected() {
    let options = QuillOptions {
        quill_version: String::new(),
        ..QuillOptions::default()
    };
    assert_eq!(
        resolve(&options).unwrap_err(),
        ConfigError::InvalidVersion("quill_version")
    );
}

#[test]
fn test_empty_katex_version_is_rejected() {
    let options = QuillOptions {
        katex_version: String::new(),
        ..QuillOptions::default()
    };
    assert_eq!(
        resolve(&options).unwrap_err(),
        ConfigError::InvalidVersion("katex_version")
    );
}

#[test]
fn test_empty_highlight_version_is_rejected() {
    let options = QuillOptions {
        highlight_version: String::new(),
        ..QuillOptions::default()
    };
    assert_eq!(
        resolve(&options).unwrap_err(),
        ConfigError::InvalidVersion("highlight_version")
    );
}

#[test]
fn test_non_object_configuration_is_rejected() {
    let options = QuillOptions {
        configuration: Some(json!(1)),
        ..QuillOptions::default()
    };
    assert_eq!(
        resolve(&options).unwrap_err(),
        ConfigError::InvalidConfiguration
    );
}

#[test]
fn test_non_array_formats_is_rejected() {
    let options = QuillOptions {
        formats: Some(json!(1)),
        ..QuillOptions::default()
    };
    assert_eq!(resolve(&options).unwrap_err(), ConfigError::InvalidFormats);
}

#[test]
fn test_non_object_modules_is_rejected() {
    let options = QuillOptions {
        modules: Some(json!(1)),
        ..QuillOptions::default()
    };
    assert_eq!(resolve(&options).unwrap_err(), ConfigError::InvalidModules);
}

#[test]
fn test_non_object_icons_is_rejected() {
    let options = QuillOptions {
        icons: Some(json!(["abc"])),
        ..QuillOptions::default()
    };
    assert_eq!(resolve(&options).unwrap_err(), ConfigError::InvalidIcons);
}

#[test]
fn test_numeric_icon_keys_are_rejected() {
    let options = QuillOptions {
        icons: Some(json!({"0": "<i></i>", "1": "<i></i>"})),
        ..QuillOptions::default()
    };
    assert_eq!(resolve(&options).unwrap_err(), ConfigError::InvalidIcons);
}

#[test]
fn test_empty_icon_key_is_rejected() {
    let options = QuillOptions {
        icons: Some(json!({"": "<i></i>"})),
        ..QuillOptions::default()
    };
    assert_eq!(resolve(&options).unwrap_err(), ConfigError::InvalidIcons);
}

#[test]
fn test_theme_through_explicit_configuration() {
    let options = QuillOptions {
        configuration: Some(json!({"theme": "test"})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(resolution.theme.as_deref(), Some("test"));
    assert_eq!(resolution.config.to_json(), r#"{"theme":"test"}"#);
}

#[test]
fn test_katex_through_explicit_configuration() {
    let options = QuillOptions {
        configuration: Some(json!({"modules": {"formula": true}})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert!(resolution.is_katex());
    assert!(!resolution.is_highlight_js());
    assert_eq!(
        resolution.config.to_json(),
        r#"{"modules":{"formula":true}}"#
    );
}

#[test]
fn test_highlight_js_through_explicit_configuration() {
    let options = QuillOptions {
        configuration: Some(json!({"modules": {"syntax": true}})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert!(resolution.is_highlight_js());
    assert!(!resolution.is_katex());
    assert_eq!(
        resolution.config.to_json(),
        r#"{"modules":{"syntax":true}}"#
    );
}

#[test]
fn test_explicit_configuration_skips_incremental_options() {
    let options = QuillOptions {
        theme: Some("bubble".to_string()),
        placeholder: Some("write here".to_string()),
        read_only: true,
        configuration: Some(json!({"modules": {"syntax": true}})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    // all-or-nothing override: nothing from the incremental set leaks in,
    // but the widget theme still drives asset selection
    assert_eq!(
        resolution.config.to_json(),
        r#"{"modules":{"syntax":true}}"#
    );
    assert_eq!(resolution.theme.as_deref(), Some("bubble"));
}

#[test]
fn test_smart_break_is_not_read_back_from_explicit_configuration() {
    let options = QuillOptions {
        configuration: Some(json!({"modules": {"smart-breaker": true}})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert!(!resolution.is_smart_break());
}

#[test]
fn test_empty_explicit_configuration_falls_back_to_options() {
    let options = QuillOptions {
        configuration: Some(json!({})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"toolbar":true}}"#
    );
}

#[test]
fn test_custom_theme() {
    let options = QuillOptions {
        theme: Some("test".to_string()),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"test","modules":{"toolbar":true}}"#
    );
}

#[test]
fn test_no_theme_key_when_unset() {
    let options = QuillOptions {
        theme: None,
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(resolution.config.to_json(), r#"{"modules":{"toolbar":true}}"#);
}

#[test]
fn test_no_theme_key_when_empty() {
    let options = QuillOptions {
        theme: Some(String::new()),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(resolution.config.to_json(), r#"{"modules":{"toolbar":true}}"#);
}

#[test]
fn test_bounds_is_a_raw_expression() {
    let options = QuillOptions {
        bounds: Some("document.body".to_string()),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.get("bounds"),
        Some(&ConfigValue::Expression(JsExpression::new("document.body")))
    );
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","bounds":document.body,"modules":{"toolbar":true}}"#
    );
}

#[test]
fn test_debug_is_added() {
    let options = QuillOptions {
        debug: Some("error".to_string()),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","debug":"error","modules":{"toolbar":true}}"#
    );
}

#[test]
fn test_placeholder_is_added() {
    let options = QuillOptions {
        placeholder: Some("p".to_string()),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","placeholder":"p","modules":{"toolbar":true}}"#
    );
}

#[test]
fn test_formats_are_added() {
    let options = QuillOptions {
        formats: Some(json!(["p"])),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","formats":["p"],"modules":{"toolbar":true}}"#
    );
}

#[test]
fn test_empty_formats_are_skipped() {
    let options = QuillOptions {
        formats: Some(json!([])),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"toolbar":true}}"#
    );
}

#[test]
fn test_read_only_true_is_added() {
    let options = QuillOptions {
        read_only: true,
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","readOnly":true,"modules":{"toolbar":true}}"#
    );
}

#[test]
fn test_read_only_false_is_never_emitted() {
    let resolution = resolve(&QuillOptions::default()).unwrap();
    assert!(resolution.config.get("readOnly").is_none());
}

#[test]
fn test_config_key_order() {
    let options = QuillOptions {
        placeholder: Some("p".to_string()),
        bounds: Some("document.body".to_string()),
        debug: Some("warn".to_string()),
        formats: Some(json!(["bold"])),
        read_only: true,
        modules: Some(json!({"formula": true})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.keys().collect::<Vec<_>>(),
        ["theme", "bounds", "debug", "placeholder", "formats", "readOnly", "modules"]
    );
}

#[test]
fn test_formula_module_sets_katex_flag() {
    let options = QuillOptions {
        modules: Some(json!({"formula": true})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert!(resolution.is_katex());
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"formula":true,"toolbar":true}}"#
    );
}

#[test]
fn test_syntax_module_sets_highlight_js_flag() {
    let options = QuillOptions {
        modules: Some(json!({"syntax": true})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert!(resolution.is_highlight_js());
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"syntax":true,"toolbar":true}}"#
    );
}

#[test]
fn test_custom_modules_keep_their_order() {
    let options = QuillOptions {
        modules: Some(json!({"custom1": true, "custom2": {"option": 1}})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert!(!resolution.is_katex());
    assert!(!resolution.is_highlight_js());
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"custom1":true,"custom2":{"option":1},"toolbar":true}}"#
    );
}

#[test]
fn test_smart_break_synthesizes_module_and_flag() {
    let options = QuillOptions {
        smart_break: true,
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert!(resolution.is_smart_break());
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"smart-breaker":true,"toolbar":true}}"#
    );
}

#[test]
fn test_caller_module_overrides_synthesized_smart_break() {
    let options = QuillOptions {
        smart_break: true,
        modules: Some(json!({"smart-breaker": {"shift": false}})),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    // the caller's value wins, the synthesized entry keeps its position
    assert!(resolution.is_smart_break());
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"smart-breaker":{"shift":false},"toolbar":true}}"#
    );
}

#[test]
fn test_no_toolbar_module_when_off() {
    let options = QuillOptions {
        toolbar_options: ToolbarOptions::Off,
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(resolution.config.to_json(), r#"{"theme":"snow"}"#);
}

#[test]
fn test_empty_custom_toolbar_means_no_toolbar() {
    let options = QuillOptions {
        toolbar_options: ToolbarOptions::Custom(json!([])),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(resolution.config.to_json(), r#"{"theme":"snow"}"#);
}

#[test]
fn test_custom_toolbar_passes_through() {
    let options = QuillOptions {
        toolbar_options: ToolbarOptions::Custom(json!([["bold", {"header": 1}]])),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"toolbar":[["bold",{"header":1}]]}}"#
    );
}

#[test]
fn test_toolbar_module_is_always_last() {
    let options = QuillOptions {
        modules: Some(json!({"toolbar": ["stale"], "formula": true})),
        toolbar_options: ToolbarOptions::Custom(json!([["formula"]])),
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"formula":true,"toolbar":[["formula"]]}}"#
    );
}

#[test]
fn test_caller_toolbar_module_survives_when_toolbar_is_off() {
    let options = QuillOptions {
        modules: Some(json!({"toolbar": [["bold"]]})),
        toolbar_options: ToolbarOptions::Off,
        ..QuillOptions::default()
    };
    let resolution = resolve(&options).unwrap();
    assert_eq!(
        resolution.config.to_json(),
        r#"{"theme":"snow","modules":{"toolbar":[["bold"]]}}"#
    );
}
