use crate::errors::AnalyzerError;

/// Parses one text-box entry as a plain float literal (`10`, ` -2.5 `, `1e-3`, `inf`).
pub fn parse_value(input: &str, field: &str) -> Result<f64, AnalyzerError> {
    let input = input.trim();
    input.parse::<f64>().map_err(|_| AnalyzerError::InvalidNumber {
        field: field.to_string(),
        input: input.to_string(),
    })
}

/// Like [`parse_value`], but also takes a trailing SPICE-style SI suffix, so
/// `2.2k` is 2200 and `1m` is 0.001. `m` and `M` both mean milli; mega is `meg`.
///
/// Only the command line uses this; the window accepts plain floats.
pub fn parse_si_value(input: &str, field: &str) -> Result<f64, AnalyzerError> {
    let input = input.trim();
    if let Ok(value) = input.parse::<f64>() {
        return Ok(value);
    }

    let suffix_start = input
        .find(|c: char| !c.is_ascii_digit() && !matches!(c, '.' | '-' | '+'))
        .unwrap_or(input.len());

    let numeric_part = &input[..suffix_start];
    let suffix = input[suffix_start..].trim();

    let value = parse_value(numeric_part, field).map_err(|_| AnalyzerError::InvalidNumber {
        field: field.to_string(),
        input: input.to_string(),
    })?;

    let multiplier = match suffix.to_lowercase().as_str() {
        "t" => 1e12,
        "g" => 1e9,
        "meg" => 1e6,
        "k" => 1e3,
        "m" => 1e-3,
        "u" | "µ" | "μ" => 1e-6,
        "n" => 1e-9,
        "p" => 1e-12,
        _ => {
            return Err(AnalyzerError::InvalidSuffix {
                field: field.to_string(),
                suffix: suffix.to_string(),
            });
        }
    };
    Ok(value * multiplier)
}
