//! The built-in catalog of named sensor definitions.
//!
//! A [`SensorRegistry`] is constructed once at process start and read-only
//! thereafter. [`SensorRegistry::standard`] builds the catalog every
//! deployment starts from: the IEC 60751 platinum family (PT100, PT500,
//! PT1000) plus a KTY-type silicon sensor. Custom registries can be
//! assembled from an empty one via [`SensorRegistry::insert`].

use std::collections::BTreeMap;

use thiserror::Error;
use uom::si::{electrical_resistance::ohm, f64::ElectricalResistance};

use super::definition::{Coefficients, DefinitionError, SensorDefinition};

/// IEC 60751 coefficients shared by all standard platinum RTDs.
const PLATINUM: Coefficients = Coefficients {
    a: 3.9083e-3,
    b: -5.775e-7,
    c: -4.183e-12,
};

/// KTY81-110 quadratic coefficients, re-referenced from the data sheet's
/// 25 °C form (R25 = 1000 Ω, α = 7.88e-3 /K, β = 1.937e-5 /K²) to a 0 °C
/// base resistance. No cubic term: silicon sensors use the same quadratic
/// at every temperature. Rated range -55..150 °C.
const KTY81_110: Coefficients = Coefficients {
    a: 8.4793e-3,
    b: 2.3763e-5,
    c: 0.0,
};
const KTY81_110_R0_OHMS: f64 = 815.106;

/// Errors that can occur while building a registry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RegistryError {
    /// A definition failed validation.
    #[error("invalid sensor definition")]
    Definition(#[from] DefinitionError),

    /// Two definitions share a name. Names are the lookup key and must be
    /// unique; the registry never silently replaces an earlier entry.
    #[error("duplicate sensor name: {name}")]
    Duplicate { name: String },
}

/// A lookup by a name not present in the registry.
///
/// This is a recoverable, expected condition (e.g. a stale selection in the
/// presentation layer), reported as data rather than a panic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown sensor: {name}")]
pub struct UnknownSensor {
    /// The name that was requested.
    pub name: String,
}

/// An immutable mapping from sensor name to [`SensorDefinition`].
///
/// Backed by a `BTreeMap` so [`names`](Self::names) iterates in a stable,
/// sorted order suitable for presentation listings.
#[derive(Debug, Clone, Default)]
pub struct SensorRegistry {
    sensors: BTreeMap<String, SensorDefinition>,
}

impl SensorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the standard catalog: PT100, PT500, PT1000, and KTY81-110.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if any built-in definition fails validation.
    /// The catalog constants are fixed, so an error here means the build is
    /// wrong and startup should abort.
    pub fn standard() -> Result<Self, RegistryError> {
        let mut registry = Self::new();

        for (name, r0) in [("PT100", 100.0), ("PT500", 500.0), ("PT1000", 1000.0)] {
            registry.insert(SensorDefinition::new(
                name,
                ElectricalResistance::new::<ohm>(r0),
                PLATINUM,
            )?)?;
        }

        registry.insert(SensorDefinition::new(
            "KTY81-110",
            ElectricalResistance::new::<ohm>(KTY81_110_R0_OHMS),
            KTY81_110,
        )?)?;

        Ok(registry)
    }

    /// Adds a definition, keyed by its name.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Duplicate`] if the name is already present.
    pub fn insert(&mut self, definition: SensorDefinition) -> Result<(), RegistryError> {
        let name = definition.name().to_owned();
        if self.sensors.contains_key(&name) {
            return Err(RegistryError::Duplicate { name });
        }
        self.sensors.insert(name, definition);
        Ok(())
    }

    /// Looks up a definition by name.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownSensor`] if no definition carries that name.
    pub fn lookup(&self, name: &str) -> Result<&SensorDefinition, UnknownSensor> {
        self.sensors.get(name).ok_or_else(|| UnknownSensor {
            name: name.to_owned(),
        })
    }

    /// Iterates over sensor names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sensors.keys().map(String::as_str)
    }

    /// Returns the number of definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// Returns `true` if the registry holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }
}
