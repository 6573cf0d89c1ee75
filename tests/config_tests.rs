use std::time::Duration;

use gpui_chart_interaction::data_types::{InteractionConfig, TooltipSort};

#[test]
fn test_defaults() {
    let config = InteractionConfig::default();
    assert_eq!(config.scroll_zoom_speed_factor, 0.01);
    assert_eq!(config.zoom_instruction_timeout, Duration::from_secs(3));
    assert_eq!(config.min_zoom_scale, 0.01);
    assert_eq!(config.wheel_line_height, 20.0);
    assert_eq!(config.tooltip_sort, TooltipSort::Default);
    config.validate().expect("defaults are valid");
}

#[test]
fn test_partial_json_keeps_defaults() {
    let config = InteractionConfig::from_json(
        r#"{ "zoom_instruction_timeout": 1500, "tooltip_sort": "nearest" }"#,
    )
    .expect("valid config");
    assert_eq!(config.zoom_instruction_timeout, Duration::from_millis(1500));
    assert_eq!(config.tooltip_sort, TooltipSort::Nearest);
    assert_eq!(config.scroll_zoom_speed_factor, 0.01);
}

#[test]
fn test_json_round_trip() {
    let config = InteractionConfig {
        scroll_zoom_speed_factor: 0.002,
        tooltip_sort: TooltipSort::Descending,
        ..Default::default()
    };
    let json = config.to_json().expect("serializable");
    assert!(json.contains("\"descending\""));
    assert_eq!(InteractionConfig::from_json(&json).expect("parses"), config);
}

#[test]
fn test_rejects_invalid_values() {
    let cases = [
        (r#"{ "scroll_zoom_speed_factor": 0.0 }"#, "scroll_zoom_speed_factor"),
        (r#"{ "scroll_zoom_speed_factor": -1.0 }"#, "scroll_zoom_speed_factor"),
        (r#"{ "min_zoom_scale": 1.5 }"#, "min_zoom_scale"),
        (r#"{ "wheel_line_height": 0.0 }"#, "wheel_line_height"),
        (r#"{ "zoom_instruction_timeout": 0 }"#, "zoom_instruction_timeout"),
    ];
    for (json, field) in cases {
        let err = InteractionConfig::from_json(json).expect_err(json);
        assert!(
            err.to_string().contains(field),
            "{json}: unexpected error {err}"
        );
    }
}

#[test]
fn test_rejects_malformed_json() {
    let err = InteractionConfig::from_json("{ not json").expect_err("malformed");
    assert!(format!("{err:?}").contains("failed to parse interaction config"));

    let err = InteractionConfig::from_json(r#"{ "tooltip_sort": "random" }"#)
        .expect_err("unknown variant");
    assert!(format!("{err:?}").contains("unknown variant"));
}
