//! Toolkit-independent state of the analyzer window.
//!
//! The window has an analysis-type dropdown, a read-only formula display,
//! three caption/text-box rows, a calculate button and a result label. This
//! module owns the values behind those widgets and the two event handlers
//! that change them; the GUI only draws it and forwards events.

use crate::analysis::{AnalysisType, Solution};
use crate::errors::AnalyzerError;
use crate::parser::parse_value;

pub const MAX_INPUTS: usize = 3;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputField {
    caption: &'static str,
    text: String,
    visible: bool,
}

impl InputField {
    pub fn caption(&self) -> &str {
        self.caption
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn text_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzerForm {
    analysis: AnalysisType,
    fields: [InputField; MAX_INPUTS],
    result: String,
}

impl AnalyzerForm {
    pub fn new() -> Self {
        Self::with_analysis(AnalysisType::default())
    }

    pub fn with_analysis(analysis: AnalysisType) -> Self {
        let mut form = Self {
            analysis,
            fields: Default::default(),
            result: String::new(),
        };
        form.select(analysis);
        form
    }

    pub fn analysis(&self) -> AnalysisType {
        self.analysis
    }

    pub fn formula_text(&self) -> &'static str {
        self.analysis.formula()
    }

    pub fn fields(&self) -> &[InputField; MAX_INPUTS] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [InputField; MAX_INPUTS] {
        &mut self.fields
    }

    pub fn visible_fields(&self) -> impl Iterator<Item = &InputField> {
        self.fields.iter().filter(|f| f.visible)
    }

    pub fn result(&self) -> &str {
        &self.result
    }

    /// Writes `text` into the box at `index`. Out-of-range indices are ignored.
    pub fn set_input(&mut self, index: usize, text: impl Into<String>) {
        if let Some(field) = self.fields.get_mut(index) {
            field.text = text.into();
        }
    }

    /// Switches the analysis type: relabels the rows, shows exactly as many as
    /// the formula takes and clears every box. The result label is untouched.
    pub fn select(&mut self, analysis: AnalysisType) {
        let captions = analysis.field_captions();
        for (idx, field) in self.fields.iter_mut().enumerate() {
            field.caption = captions.get(idx).copied().unwrap_or("");
            field.visible = idx < captions.len();
            field.text.clear();
        }
        self.analysis = analysis;
        tracing::info!(analysis = analysis.name(), inputs = captions.len(), "analysis selected");
    }

    /// Parses the visible boxes and writes the outcome to the result label.
    ///
    /// A parse failure shows the analysis' fixed validation message; the
    /// returned error says which box was at fault.
    pub fn calculate(&mut self) -> Result<Solution, AnalyzerError> {
        let outcome = self.evaluate();
        self.result = match &outcome {
            Ok(solution) => solution.to_string(),
            Err(err) => {
                tracing::warn!(analysis = self.analysis.name(), %err, "rejected input");
                self.analysis.invalid_input_message().to_string()
            }
        };
        outcome
    }

    fn evaluate(&self) -> Result<Solution, AnalyzerError> {
        let values = self
            .fields
            .iter()
            .take(self.analysis.input_count())
            .map(|field| parse_value(&field.text, field.caption))
            .collect::<Result<Vec<f64>, _>>()?;
        self.analysis.evaluate(&values)
    }
}

impl Default for AnalyzerForm {
    fn default() -> Self {
        Self::new()
    }
}
