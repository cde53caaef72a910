use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalyzerError {
    #[error("Invalid number for {field}: {input:?}")]
    InvalidNumber { field: String, input: String },
    #[error("Invalid SI suffix for {field}: {suffix}")]
    InvalidSuffix { field: String, suffix: String },
    #[error("Unknown analysis type: {0}")]
    UnknownAnalysis(String),
    #[error("{analysis} expects {expected} input(s), got {got}")]
    InputCount { analysis: &'static str, expected: usize, got: usize },
}
