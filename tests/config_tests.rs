use pulse_chart::api::Margin;
use pulse_chart::core::{MissingSecondaryPolicy, Viewport};
use pulse_chart::{PulseChartConfig, PulseError};

#[test]
fn defaults_match_the_reference_layout() {
    let config = PulseChartConfig::default();
    assert!(!config.scalar_requested);
    assert_eq!(
        config.margin,
        Margin {
            top: 70,
            bottom: 70,
            right: 20,
            left: 10,
        }
    );
    assert_eq!(config.min_plot_size, Viewport::new(50, 50));
    assert_eq!(config.missing_secondary_policy, MissingSecondaryPolicy::Baseline);
    assert_eq!(config.large_value_digits, 6);
}

#[test]
fn config_json_round_trip() {
    let config = PulseChartConfig::default()
        .with_scalar_requested(true)
        .with_min_plot_size(Viewport::new(80, 40))
        .with_missing_secondary_policy(MissingSecondaryPolicy::Abort)
        .with_large_value_digits(4);

    let json = config.to_json_pretty().expect("serialize");
    let parsed = PulseChartConfig::from_json_str(&json).expect("parse");
    assert_eq!(parsed, config);
}

#[test]
fn missing_fields_take_defaults() {
    let parsed = PulseChartConfig::from_json_str("{}").expect("parse");
    assert_eq!(parsed, PulseChartConfig::default());

    let parsed =
        PulseChartConfig::from_json_str(r#"{ "scalar_requested": true }"#).expect("parse");
    assert!(parsed.scalar_requested);
    assert_eq!(parsed.large_value_digits, 6);
}

#[test]
fn invalid_json_is_rejected() {
    let err = PulseChartConfig::from_json_str("{ not json").expect_err("invalid");
    assert!(matches!(err, PulseError::InvalidData(_)));
}
