// core/tests/test_config.rs
use std::fs;

use tracker_core::{load_config, TrackerConfig};

#[test]
fn defaults_match_reference_constants() {
    let cfg = TrackerConfig::default();
    assert_eq!(cfg.step_length_m, 0.65);
    assert_eq!(cfg.stride_coefficient, 0.45);
    assert_eq!(cfg.walking_calories_coefficient, 0.5);
    assert_eq!(cfg.running_calories_coefficient, 1.0);
    assert!(cfg.validate().is_ok());
}

#[test]
fn partial_json_overrides_only_named_fields() {
    let cfg = TrackerConfig::from_json_str(r#"{"step_length_m": 0.7}"#).unwrap();
    assert_eq!(cfg.step_length_m, 0.7);
    assert_eq!(cfg.stride_coefficient, 0.45);
}

#[test]
fn bad_json_names_the_field() {
    let err = TrackerConfig::from_json_str(r#"{"stride_coefficient": "wide"}"#).unwrap_err();
    assert_eq!(err.kind(), "config");
    assert!(err.to_string().contains("stride_coefficient"), "{err}");
}

#[test]
fn trailing_data_after_json_is_rejected() {
    let err = TrackerConfig::from_json_str(r#"{"step_length_m": 0.7} junk"#).unwrap_err();
    assert_eq!(err.kind(), "config");
    assert!(err.to_string().contains("trailing data"), "{err}");

    // trailing whitespace is fine
    assert!(TrackerConfig::from_json_str("{\"step_length_m\": 0.7}\n").is_ok());
}

#[test]
fn non_positive_constant_is_rejected() {
    let err = TrackerConfig::from_json_str(r#"{"walking_calories_coefficient": -0.5}"#).unwrap_err();
    assert!(err.to_string().contains("walking_calories_coefficient"), "{err}");
}

#[test]
fn missing_file_gives_defaults() {
    let cfg = load_config("tests/does_not_exist_tracker.json").unwrap();
    assert_eq!(cfg, TrackerConfig::default());
}

#[test]
fn load_config_roundtrip_from_disk() {
    let path = "tests/tmp_tracker_config.json";
    let _ = fs::remove_file(path);

    let cfg = TrackerConfig {
        step_length_m: 0.72,
        ..TrackerConfig::default()
    };
    fs::write(path, serde_json::to_string_pretty(&cfg).unwrap()).expect("write config");

    let loaded = load_config(path).expect("load_config failed");
    assert_eq!(loaded, cfg);

    // Clean up
    let _ = fs::remove_file(path);
}
