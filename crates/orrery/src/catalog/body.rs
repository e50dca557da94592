use serde::{Deserialize, Serialize};

use crate::api::types::Rgb;
use crate::error::CatalogError;

/// Immutable description of one orbiting body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CelestialBodySpec {
    pub name: String,
    /// Distance from the parent origin, in scene units.
    pub orbit_radius: f32,
    pub body_radius: f32,
    #[serde(default)]
    pub color: Option<Rgb>,
    /// Texture URL. Wins over `color` when both are present.
    #[serde(default)]
    pub texture: Option<String>,
    /// Revolution rate in radians per nominal 60 Hz frame.
    pub rotation_speed: f32,
    #[serde(default)]
    pub fun_fact: String,
    #[serde(default)]
    pub has_moon: bool,
    #[serde(default)]
    pub has_rings: bool,
}

/// The resolved shading source of a body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Surface<'a> {
    Texture(&'a str),
    Color(Rgb),
}

impl CelestialBodySpec {
    pub fn new(name: impl Into<String>, orbit_radius: f32, body_radius: f32, rotation_speed: f32) -> Self {
        Self {
            name: name.into(),
            orbit_radius,
            body_radius,
            color: None,
            texture: None,
            rotation_speed,
            fun_fact: String::new(),
            has_moon: false,
            has_rings: false,
        }
    }

    // -- Builder pattern --

    pub fn with_color(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }

    pub fn with_texture(mut self, url: impl Into<String>) -> Self {
        self.texture = Some(url.into());
        self
    }

    pub fn with_fun_fact(mut self, fact: impl Into<String>) -> Self {
        self.fun_fact = fact.into();
        self
    }

    pub fn with_moon(mut self) -> Self {
        self.has_moon = true;
        self
    }

    pub fn with_rings(mut self) -> Self {
        self.has_rings = true;
        self
    }

    /// Texture if present, otherwise colour. `None` only for an invalid entry.
    pub fn surface(&self) -> Option<Surface<'_>> {
        match (&self.texture, self.color) {
            (Some(url), _) => Some(Surface::Texture(url.as_str())),
            (None, Some(color)) => Some(Surface::Color(color)),
            (None, None) => None,
        }
    }

    /// Check the entry in isolation. Name uniqueness is checked by the builder.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if !(self.orbit_radius > 0.0) || !self.orbit_radius.is_finite() {
            return Err(CatalogError::NonPositiveOrbitRadius {
                name: self.name.clone(),
                value: self.orbit_radius,
            });
        }
        if !(self.body_radius > 0.0) || !self.body_radius.is_finite() {
            return Err(CatalogError::NonPositiveBodyRadius {
                name: self.name.clone(),
                value: self.body_radius,
            });
        }
        if !(self.rotation_speed >= 0.0) || !self.rotation_speed.is_finite() {
            return Err(CatalogError::InvalidRotationSpeed {
                name: self.name.clone(),
                value: self.rotation_speed,
            });
        }
        if self.surface().is_none() {
            return Err(CatalogError::MissingSurface(self.name.clone()));
        }
        Ok(())
    }
}
