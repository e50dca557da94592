//! The stock planet catalog.
//!
//! Distances and sizes are picked for readability, not scale. Speeds are
//! radians per 60 Hz frame, so inner planets visibly lap the outer ones.

use crate::api::types::Rgb;
use crate::catalog::body::CelestialBodySpec;

pub fn planets() -> Vec<CelestialBodySpec> {
    vec![
        CelestialBodySpec::new("Mercury", 10.0, 0.8, 0.04)
            .with_color(Rgb::hex(0xb1adad))
            .with_fun_fact("A year on Mercury lasts just 88 Earth days."),
        CelestialBodySpec::new("Venus", 15.0, 1.2, 0.015)
            .with_color(Rgb::hex(0xe6c27a))
            .with_fun_fact("Venus spins backwards, so the Sun rises in the west."),
        CelestialBodySpec::new("Earth", 20.0, 1.3, 0.01)
            .with_color(Rgb::hex(0x2a6bd6))
            .with_texture("textures/earth.jpg")
            .with_fun_fact("The only planet known to host life.")
            .with_moon(),
        CelestialBodySpec::new("Mars", 25.0, 1.0, 0.008)
            .with_color(Rgb::hex(0xc1440e))
            .with_texture("textures/mars.jpg")
            .with_fun_fact("Home of Olympus Mons, the tallest volcano in the solar system."),
        CelestialBodySpec::new("Jupiter", 35.0, 3.0, 0.002)
            .with_color(Rgb::hex(0xd8ca9d))
            .with_texture("textures/jupiter.jpg")
            .with_fun_fact("Its Great Red Spot is a storm wider than Earth."),
        CelestialBodySpec::new("Saturn", 45.0, 2.5, 0.0009)
            .with_color(Rgb::hex(0xead6a7))
            .with_texture("textures/saturn.jpg")
            .with_fun_fact("Saturn is less dense than water.")
            .with_rings(),
        CelestialBodySpec::new("Uranus", 55.0, 1.8, 0.0004)
            .with_color(Rgb::hex(0x9fd8e0))
            .with_fun_fact("Uranus rolls around the Sun on its side."),
        CelestialBodySpec::new("Neptune", 65.0, 1.7, 0.0001)
            .with_color(Rgb::hex(0x3f54ba))
            .with_fun_fact("Winds on Neptune reach 2,100 km/h."),
    ]
}
