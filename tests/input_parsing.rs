use approx::assert_relative_eq;
use proptest::prelude::*;
use circuit_analyzer::errors::AnalyzerError;
use circuit_analyzer::parser::{parse_si_value, parse_value};

mod common;
use common::*;
use common::strategies::*;

#[test]
fn test_plain_numbers() {
    assert_eq!(parse_value("10", "V").unwrap(), 10.0);
    assert_eq!(parse_value(" -2.5 ", "V").unwrap(), -2.5);
    assert_eq!(parse_value("1e-3", "L").unwrap(), 0.001);
    assert!(parse_value("inf", "L").unwrap().is_infinite());
}

#[test]
fn test_window_input_rejects_si_suffixes() {
    for input in ["2k", "1M", "1m", "10u", "4.7meg"] {
        let err = parse_value(input, "R1").unwrap_err();
        assert_eq!(err, AnalyzerError::InvalidNumber { field: "R1".to_string(), input: input.to_string() });
    }
}

#[test]
fn test_command_line_si_suffixes() {
    let cases = [
        ("2.2k", 2.2e3),
        ("1m", 1e-3),
        ("1M", 1e-3),
        ("4.7meg", 4.7e6),
        ("10u", 10e-6),
        ("10µ", 10e-6),
        ("100n", 100e-9),
        ("22p", 22e-12),
        ("3g", 3e9),
        ("1t", 1e12),
        ("10 k", 10e3),
    ];
    for (input, expected) in cases {
        let value = parse_si_value(input, "R1").unwrap();
        assert_relative_eq!(value, expected, max_relative = EPSILON_STRICT);
    }
}

#[test]
fn test_empty_input_is_invalid() {
    let err = parse_value("   ", "Voltage (V)").unwrap_err();
    assert_eq!(
        err,
        AnalyzerError::InvalidNumber { field: "Voltage (V)".to_string(), input: String::new() }
    );
}

#[test]
fn test_garbage_is_invalid() {
    assert!(matches!(parse_value("abc", "R1"), Err(AnalyzerError::InvalidNumber { .. })));
    assert!(matches!(parse_value("1.2.3", "R1"), Err(AnalyzerError::InvalidNumber { .. })));
    assert!(matches!(parse_value("k", "R1"), Err(AnalyzerError::InvalidNumber { .. })));
    assert!(matches!(parse_si_value("k", "R1"), Err(AnalyzerError::InvalidNumber { .. })));
    assert!(matches!(parse_si_value("1.2.3k", "R1"), Err(AnalyzerError::InvalidNumber { .. })));
}

#[test]
fn test_unknown_suffix() {
    let err = parse_si_value("5x", "R_th").unwrap_err();
    assert_eq!(err, AnalyzerError::InvalidSuffix { field: "R_th".to_string(), suffix: "x".to_string() });
}

proptest! {

#[test]
fn prop_display_of_finite_value_parses_back(value in finite_value_strategy()) {
    prop_assert_eq!(parse_value(&value.to_string(), "x").unwrap(), value);
    prop_assert_eq!(parse_si_value(&value.to_string(), "x").unwrap(), value);
}

#[test]
fn prop_non_numeric_text_is_rejected(text in non_numeric_strategy()) {
    prop_assert!(parse_value(&text, "x").is_err());
    prop_assert!(parse_si_value(&text, "x").is_err());
}

}
