use synced_charts::data_types::ChartConfig;

#[test]
fn test_partial_json_keeps_defaults() {
    let config = ChartConfig::from_json_str(r#"{ "zoom_max": 20.0, "hit_tolerance": 4 }"#).unwrap();
    assert_eq!(config.zoom_max, 20.0);
    assert_eq!(config.hit_tolerance, 4.0);
    assert_eq!(config.zoom_min, 1.0);
    assert_eq!(config.palette.len(), 8);
}

#[test]
fn test_config_roundtrips_through_json() {
    let config = ChartConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(ChartConfig::from_json_str(&json).unwrap(), config);
}

#[test]
fn test_invalid_configs_are_rejected() {
    for json in [
        r#"{ "zoom_min": 0.5 }"#,
        r#"{ "zoom_min": 4.0, "zoom_max": 2.0 }"#,
        r#"{ "zoom_in_step": 0.9 }"#,
        r#"{ "zoom_out_step": 1.5 }"#,
        r#"{ "default_pan": 2.0 }"#,
        r#"{ "hit_tolerance": 0 }"#,
        r#"{ "palette": [] }"#,
        r##"{ "palette": ["#12345"] }"##,
        r#"{ "palette": ["+12345"] }"#,
        r#"{ "zoom_min": "one" }"#,
        "not json",
    ] {
        assert!(ChartConfig::from_json_str(json).is_err(), "accepted {json}");
    }
}

#[test]
fn test_zoom_settings_follow_config() {
    let config = ChartConfig {
        zoom_max: 4.0,
        ..ChartConfig::default()
    };
    let zoom = config.zoom_settings();
    assert_eq!(zoom.clamp(7.0), 4.0);
    assert_eq!(zoom.clamp(0.2), 1.0);
}
