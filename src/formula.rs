use std::f64::consts::PI;
use crate::units::{Capacitance, Current, Frequency, Inductance, Resistance, Voltage};

/// R = V / I. A zero current yields a zero resistance instead of a division by zero.
pub fn ohms_law_resistance(v: Voltage, i: Current) -> Resistance {
    let current = f64::from(i);
    if current == 0.0 {
        return Resistance::new(0.0);
    }
    Resistance::new(f64::from(v) / current)
}

/// ΣV around a loop.
pub fn loop_voltage_sum(voltages: &[Voltage]) -> Voltage {
    Voltage::new(voltages.iter().map(|v| f64::from(*v)).sum())
}

/// Open-circuit voltage across R2 of a divider fed by `v_in`.
///
/// R1 + R2 == 0 is not rejected; the result is `NaN` or infinite.
pub fn thevenin_voltage(r1: Resistance, r2: Resistance, v_in: Voltage) -> Voltage {
    let (r1, r2) = (f64::from(r1), f64::from(r2));
    Voltage::new(r2 / (r1 + r2) * f64::from(v_in))
}

/// Load resistance that draws maximum power from a source with resistance `r_th`.
pub fn max_power_load(r_th: Resistance) -> Resistance {
    r_th
}

/// f = 1 / (2π √(LC))
pub fn resonant_frequency(l: Inductance, c: Capacitance) -> Frequency {
    let lc = f64::from(l) * f64::from(c);
    Frequency::new(1.0 / (2.0 * PI * lc.sqrt()))
}
