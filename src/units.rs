use std::fmt;

macro_rules! quantity {
    ($(#[$meta:meta])* $name:ident, $unit:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
        pub struct $name(f64);

        impl $name {
            pub fn new(value: f64) -> Self {
                Self(value)
            }

            pub fn get(self) -> f64 {
                self.0
            }
        }

        impl From<$name> for f64 {
            fn from(value: $name) -> f64 {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:.2} {}", self.0, $unit)
            }
        }
    };
}

quantity!(Voltage, "V");
quantity!(Current, "A");
quantity!(Resistance, "Ohms");
quantity!(Inductance, "H");
quantity!(Capacitance, "F");
quantity!(
    /// Ordinary frequency in hertz, not angular frequency.
    Frequency,
    "Hz"
);
