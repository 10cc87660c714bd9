//! Sensor definitions and forward (temperature to resistance) evaluation.

use thiserror::Error;
use uom::si::{
    electrical_resistance::ohm,
    f64::{ElectricalResistance, ThermodynamicTemperature},
    thermodynamic_temperature::degree_celsius,
};

use crate::support::constraint::{Constraint, Finite, StrictlyPositive};

/// Errors rejected at [`SensorDefinition`] construction.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DefinitionError {
    /// The base resistance must be finite and strictly positive.
    #[error("invalid base resistance: {r0:?}")]
    BaseResistance { r0: ElectricalResistance },

    /// A polynomial coefficient was NaN or infinite.
    #[error("non-finite coefficient {name}: {value}")]
    Coefficient { name: &'static str, value: f64 },
}

/// Callendar-Van Dusen polynomial coefficients.
///
/// `a`, `b`, and `c` are the IEC 60751 coefficients in 1/°C, 1/°C², and
/// 1/°C⁴ respectively. A `c` of exactly zero marks a sensor family with no
/// cubic sub-zero correction (KTY-type silicon sensors); for such a
/// definition the quadratic form applies at every temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

/// An immutable, validated sensor definition.
///
/// Holds a display name, the nominal resistance at 0 °C, and the polynomial
/// coefficients. Construction is the only place invariants are checked;
/// afterwards the definition is plain read-only data, safe to share freely
/// across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorDefinition {
    name: String,
    r0: ElectricalResistance,
    coefficients: Coefficients,
}

impl SensorDefinition {
    /// Creates a validated sensor definition.
    ///
    /// # Errors
    ///
    /// Returns [`DefinitionError`] if `r0` is not strictly positive (or not
    /// finite), or if any coefficient is NaN or infinite. Nothing is ever
    /// silently defaulted.
    pub fn new(
        name: impl Into<String>,
        r0: ElectricalResistance,
        coefficients: Coefficients,
    ) -> Result<Self, DefinitionError> {
        if StrictlyPositive::check(&r0.value).is_err() || !r0.value.is_finite() {
            return Err(DefinitionError::BaseResistance { r0 });
        }

        for (name, value) in [
            ("A", coefficients.a),
            ("B", coefficients.b),
            ("C", coefficients.c),
        ] {
            if Finite::check(&value).is_err() {
                return Err(DefinitionError::Coefficient { name, value });
            }
        }

        Ok(Self {
            name: name.into(),
            r0,
            coefficients,
        })
    }

    /// Returns the sensor's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the nominal resistance at 0 °C.
    #[must_use]
    pub fn r0(&self) -> ElectricalResistance {
        self.r0
    }

    /// Returns the polynomial coefficients.
    #[must_use]
    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    /// Evaluates the Callendar-Van Dusen polynomial at the given temperature.
    ///
    /// The cubic correction applies only below 0 °C and only for definitions
    /// with a nonzero `C`; otherwise the quadratic form is used. Both forms
    /// agree at the 0 °C boundary, so the evaluation is continuous.
    ///
    /// Pure and total: any finite temperature yields a finite resistance.
    /// The result is not clamped to the sensor's rated range; callers needing
    /// range validation must apply it themselves.
    #[must_use]
    pub fn resistance_at(&self, temperature: ThermodynamicTemperature) -> ElectricalResistance {
        let t = temperature.get::<degree_celsius>();
        ElectricalResistance::new::<ohm>(self.resistance_ohms(t))
    }

    /// Raw polynomial evaluation in °C/Ω, shared with the inverse solver.
    pub(super) fn resistance_ohms(&self, t: f64) -> f64 {
        let Coefficients { a, b, c } = self.coefficients;
        let r0 = self.r0.value;

        if t >= 0.0 || c == 0.0 {
            r0 * (1.0 + a * t + b * t * t)
        } else {
            r0 * (1.0 + a * t + b * t * t + c * (t - 100.0) * t * t * t)
        }
    }

    /// Analytic slope dR/dt in Ω/°C, on the same branch as
    /// [`resistance_ohms`](Self::resistance_ohms).
    pub(super) fn slope_ohms_per_celsius(&self, t: f64) -> f64 {
        let Coefficients { a, b, c } = self.coefficients;
        let r0 = self.r0.value;

        if t >= 0.0 || c == 0.0 {
            r0 * (a + 2.0 * b * t)
        } else {
            // d/dt [C*(t - 100)*t^3] = C*(4*t^3 - 300*t^2)
            r0 * (a + 2.0 * b * t + c * (4.0 * t * t * t - 300.0 * t * t))
        }
    }
}
