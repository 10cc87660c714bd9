//! # RTD Models
//!
//! Models and inversion tools for resistive temperature sensors based on the
//! Callendar-Van Dusen equation (IEC 60751).
//!
//! ## Crate layout
//!
//! - [`models`]: Sensor models, the built-in sensor registry, and the inverse
//!   (resistance-to-temperature) solver.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Quantities
//!
//! All public operations speak [`uom`] quantities: temperatures are
//! [`ThermodynamicTemperature`](uom::si::f64::ThermodynamicTemperature) and
//! resistances are [`ElectricalResistance`](uom::si::f64::ElectricalResistance).
//! The polynomial itself is defined in degrees Celsius and ohms; conversions
//! happen at the API boundary.
//!
//! ## Failure model
//!
//! Nothing in this crate panics on bad input. Invalid sensor definitions are
//! rejected at construction, unknown registry lookups return a typed absence,
//! and a solve that cannot converge reports why as an error value.

pub mod models;
pub mod support;
