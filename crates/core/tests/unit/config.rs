//! Configuration tests.

use mips_lite_core::config::defaults;
use mips_lite_core::SimConfig;

#[test]
fn default_config_matches_the_baseline_constants() {
    let config = SimConfig::default();
    assert!(!config.forwarding);
    assert!(!config.trace);
    assert_eq!(config.cycle_budget, defaults::CYCLE_BUDGET);
}

#[test]
fn json_deserialization_with_partial_fields() {
    let config: SimConfig = serde_json::from_str(r#"{"forwarding": true}"#).unwrap();
    assert!(config.forwarding);
    assert!(!config.trace, "missing fields take their defaults");
    assert_eq!(config.cycle_budget, defaults::CYCLE_BUDGET);
}

#[test]
fn json_deserialization_with_all_fields() {
    let config: SimConfig =
        serde_json::from_str(r#"{"forwarding": true, "trace": true, "cycle_budget": 500}"#)
            .unwrap();
    assert!(config.forwarding);
    assert!(config.trace);
    assert_eq!(config.cycle_budget, 500);
}

#[test]
fn empty_json_object_is_the_default_config() {
    let config: SimConfig = serde_json::from_str("{}").unwrap();
    assert!(!config.forwarding);
    assert_eq!(config.cycle_budget, defaults::CYCLE_BUDGET);
}
