//! Public sensor models.
//!
//! Models are the primary public interface of this crate.
//!
//! # Organization
//!
//! Models are organized into sensor-family submodules. Currently the only
//! family is [`rtd`], covering platinum RTDs (IEC 60751) and KTY-type silicon
//! sensors, both expressed through the Callendar-Van Dusen polynomial.
//!
//! # Model structure
//!
//! Each family module owns its definition type, its registry of named
//! definitions, and its inverse solver. Forward evaluation lives on the
//! definition itself; inversion is a free function so the solver's
//! configuration and failure contract stay in one place.

pub mod rtd;
