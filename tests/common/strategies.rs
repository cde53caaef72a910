/// strategies.rs
use proptest::prelude::*;
use circuit_analyzer::analysis::AnalysisType;

/// Any of the five analysis types
pub fn analysis_strategy() -> impl Strategy<Value = AnalysisType> {
    prop::sample::select(AnalysisType::ALL.to_vec())
}

/// Finite values across the range a user would plausibly type
pub fn finite_value_strategy() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1e6_f64..1e6_f64,
        1e-12_f64..1e-3_f64,
    ]
}

/// Strictly positive component values (resistances, inductances, capacitances)
pub fn component_value_strategy() -> impl Strategy<Value = f64> {
    1e-12_f64..1e12_f64
}

/// Text that is neither a float literal nor a number with an SI suffix
pub fn non_numeric_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_?#]{1,8}"
        .prop_filter("float keywords such as inf and nan parse", |s| s.parse::<f64>().is_err())
}
