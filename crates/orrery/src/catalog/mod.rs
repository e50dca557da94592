//! Celestial body catalog: static declarative data consumed by the builder.

pub mod body;
pub mod stock;

pub use body::{CelestialBodySpec, Surface};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, Error};

/// Ordered list of body specs. Order only affects build order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    pub bodies: Vec<CelestialBodySpec>,
}

impl Catalog {
    pub fn new(bodies: Vec<CelestialBodySpec>) -> Self {
        Self { bodies }
    }

    /// The eight planets, Mercury through Neptune.
    pub fn stock() -> Self {
        Self::new(stock::planets())
    }

    /// Parse a catalog from a JSON string. Entries are not validated here;
    /// the builder skips bad ones individually.
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }

    /// Strict check of every entry, failing on the first problem.
    pub fn validate(&self) -> Result<(), Error> {
        let mut seen = HashSet::new();
        for spec in &self.bodies {
            spec.validate()?;
            if !seen.insert(spec.name.as_str()) {
                return Err(CatalogError::DuplicateName(spec.name.clone()).into());
            }
        }
        Ok(())
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBodySpec> {
        self.bodies.iter()
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn find(&self, name: &str) -> Option<&CelestialBodySpec> {
        self.bodies.iter().find(|b| b.name == name)
    }

    /// Sanity check: orbit radii strictly increase in catalog order.
    /// Not enforced; the builder only logs when this is false.
    pub fn orbit_radii_increasing(&self) -> bool {
        self.bodies
            .windows(2)
            .all(|w| w[0].orbit_radius < w[1].orbit_radius)
    }
}
