//! Resistance temperature detector (RTD) characterization.
//!
//! This module models sensors whose resistance varies polynomially with
//! temperature via the Callendar-Van Dusen equation:
//!
//! ```text
//! R(t) = R0 * (1 + A*t + B*t^2)                       t >= 0 °C, or C == 0
//! R(t) = R0 * (1 + A*t + B*t^2 + C*(t - 100)*t^3)     t < 0 °C and C != 0
//! ```
//!
//! with `t` in degrees Celsius and `R0` the nominal resistance at 0 °C.
//! Platinum sensors (PT100, PT500, PT1000) carry the full cubic correction
//! below zero; KTY-type silicon sensors are purely quadratic (`C == 0`).
//!
//! Two operations are exposed:
//!
//! - [`SensorDefinition::resistance_at`]: forward evaluation,
//!   temperature to resistance. Pure, total, never clamps.
//! - [`temperature_for`]: inversion, resistance to temperature, via an
//!   explicit Newton iteration over the same polynomial. Non-convergence is
//!   a normal, typed outcome ([`SolveError`]), not a fault.
//!
//! Named definitions live in a [`SensorRegistry`], built once at startup and
//! read-only thereafter.

mod definition;
mod registry;
mod solve;

pub use definition::{Coefficients, DefinitionError, SensorDefinition};
pub use registry::{RegistryError, SensorRegistry, UnknownSensor};
pub use solve::{SolveConfig, SolveError, temperature_for};
