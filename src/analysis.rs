use std::fmt;
use std::str::FromStr;
use crate::errors::AnalyzerError;
use crate::formula;
use crate::units::{Capacitance, Current, Frequency, Inductance, Resistance, Voltage};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AnalysisType {
    #[default]
    OhmsLaw,
    KirchhoffVoltageLaw,
    TheveninTheorem,
    MaximumPowerTransfer,
    Resonance,
}

impl AnalysisType {
    /// Dropdown order.
    pub const ALL: [AnalysisType; 5] = [
        Self::OhmsLaw,
        Self::KirchhoffVoltageLaw,
        Self::TheveninTheorem,
        Self::MaximumPowerTransfer,
        Self::Resonance,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::OhmsLaw => "Ohm's Law",
            Self::KirchhoffVoltageLaw => "Kirchhoff's Voltage Law",
            Self::TheveninTheorem => "Thevenin's Theorem",
            Self::MaximumPowerTransfer => "Maximum Power Transfer",
            Self::Resonance => "Resonance",
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Self::OhmsLaw => "ohms-law",
            Self::KirchhoffVoltageLaw => "kvl",
            Self::TheveninTheorem => "thevenin",
            Self::MaximumPowerTransfer => "max-power",
            Self::Resonance => "resonance",
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            Self::OhmsLaw => "V = I * R\nWhere:\nV: Voltage\nI: Current\nR: Resistance",
            Self::KirchhoffVoltageLaw => "ΣV around a loop = 0\nEnter voltages for each component.",
            Self::TheveninTheorem => "V_th = (R2 / (R1 + R2)) * V_in\nEnter R1, R2, and V_in.",
            Self::MaximumPowerTransfer => {
                "R_L = R_th\nMaximum power transfer occurs when load resistance equals Thevenin resistance."
            }
            Self::Resonance => "f_res = 1 / (2 * π * √(L * C))\nEnter L (Inductance) and C (Capacitance).",
        }
    }

    pub fn field_captions(self) -> &'static [&'static str] {
        match self {
            Self::OhmsLaw => &["Voltage (V)", "Current (I)"],
            Self::KirchhoffVoltageLaw => &["Voltage 1", "Voltage 2", "Voltage 3"],
            Self::TheveninTheorem => &["R1", "R2", "V_in"],
            Self::MaximumPowerTransfer => &["R_th"],
            Self::Resonance => &["Inductance (L)", "Capacitance (C)"],
        }
    }

    pub fn input_count(self) -> usize {
        self.field_captions().len()
    }

    pub fn invalid_input_message(self) -> &'static str {
        match self.input_count() {
            1 => "Please enter a valid number.",
            _ => "Please enter valid numbers.",
        }
    }

    pub fn evaluate(self, inputs: &[f64]) -> Result<Solution, AnalyzerError> {
        let solution = match (self, inputs) {
            (Self::OhmsLaw, &[v, i]) => {
                Solution::OhmsLaw(formula::ohms_law_resistance(Voltage::new(v), Current::new(i)))
            }
            (Self::KirchhoffVoltageLaw, voltages @ &[_, _, _]) => {
                let voltages: Vec<Voltage> = voltages.iter().copied().map(Voltage::new).collect();
                Solution::KirchhoffVoltageLaw(formula::loop_voltage_sum(&voltages))
            }
            (Self::TheveninTheorem, &[r1, r2, v_in]) => Solution::TheveninTheorem(formula::thevenin_voltage(
                Resistance::new(r1),
                Resistance::new(r2),
                Voltage::new(v_in),
            )),
            (Self::MaximumPowerTransfer, &[r_th]) => {
                Solution::MaximumPowerTransfer(formula::max_power_load(Resistance::new(r_th)))
            }
            (Self::Resonance, &[l, c]) => {
                Solution::Resonance(formula::resonant_frequency(Inductance::new(l), Capacitance::new(c)))
            }
            _ => {
                return Err(AnalyzerError::InputCount {
                    analysis: self.name(),
                    expected: self.input_count(),
                    got: inputs.len(),
                });
            }
        };
        tracing::debug!(analysis = self.name(), ?inputs, %solution, "evaluated");
        Ok(solution)
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AnalysisType {
    type Err = AnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        let found = Self::ALL
            .into_iter()
            .find(|a| a.name().to_lowercase() == key || a.slug() == key);
        match (found, key.as_str()) {
            (Some(analysis), _) => Ok(analysis),
            (None, "kirchhoff") => Ok(Self::KirchhoffVoltageLaw),
            (None, _) => Err(AnalyzerError::UnknownAnalysis(s.to_string())),
        }
    }
}

/// A computed result together with its physical unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Solution {
    OhmsLaw(Resistance),
    KirchhoffVoltageLaw(Voltage),
    TheveninTheorem(Voltage),
    MaximumPowerTransfer(Resistance),
    Resonance(Frequency),
}

impl Solution {
    pub fn value(&self) -> f64 {
        match *self {
            Self::OhmsLaw(r) | Self::MaximumPowerTransfer(r) => r.get(),
            Self::KirchhoffVoltageLaw(v) | Self::TheveninTheorem(v) => v.get(),
            Self::Resonance(f) => f.get(),
        }
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OhmsLaw(r) => write!(f, "Resistance: {r}"),
            Self::KirchhoffVoltageLaw(v) => write!(f, "ΣV = {v}"),
            Self::TheveninTheorem(v) => write!(f, "Thevenin Voltage: {v}"),
            Self::MaximumPowerTransfer(r) => write!(f, "Load Resistance (for max power transfer): {r}"),
            Self::Resonance(freq) => write!(f, "Resonance Frequency: {freq}"),
        }
    }
}
