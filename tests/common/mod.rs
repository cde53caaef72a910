use approx::assert_relative_eq;
use circuit_analyzer::analysis::{AnalysisType, Solution};
use circuit_analyzer::form::AnalyzerForm;

pub mod strategies;

/// Epsilon for results that should match a direct evaluation of the same expression
pub const EPSILON_STRICT: f64 = 1e-12;

/// Epsilon for results that go through a round trip (e.g. `R = V / I` then `V = I * R`)
pub const EPSILON_RELAXED: f64 = 1e-9;

/// Asserts a solution's numeric value is approximately `expected`
///
/// # Panics
/// Panics if the relative or absolute difference exceeds epsilon
pub fn assert_solution_value(solution: &Solution, expected: f64, epsilon: f64) {
    assert_relative_eq!(solution.value(), expected, epsilon = epsilon, max_relative = epsilon);
}

/// Builds a form on `analysis` with `inputs` typed into the boxes in order
pub fn form_with(analysis: AnalysisType, inputs: &[&str]) -> AnalyzerForm {
    let mut form = AnalyzerForm::with_analysis(analysis);
    for (idx, text) in inputs.iter().enumerate() {
        form.set_input(idx, *text);
    }
    form
}
