//! Celestial body catalog.
//!
//! Distances and radii are in canvas pixels, speeds in radians per unit of
//! simulation time (planets) or per tick (moons, belt bodies).

use crate::types::Color;

/// Most moons any planet in the catalog carries.
pub const MAX_MOONS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunSpec {
    pub radius: i64,
    pub color: Color,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoonSpec {
    pub name: &'static str,
    pub orbit_radius: f64,
    pub speed: f64,
    pub color: Color,
}

/// A planetary ring, drawn `distance` pixels outside the planet surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSpec {
    pub distance: i64,
    pub color: Option<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanetSpec {
    pub name: &'static str,
    pub radius: i64,
    pub distance: f64,
    pub color: Color,
    pub speed: f64,
    pub rings: &'static [RingSpec],
    pub moons: &'static [MoonSpec],
}

/// Parameters for a randomly populated belt of single-pixel bodies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BeltSpec {
    pub count: usize,
    pub inner_radius: f64,
    /// Radii are drawn from `[inner_radius, inner_radius + width)`.
    pub width: f64,
    pub base_speed: f64,
    pub speed_jitter: f64,
    /// Extra speed per pixel of distance from `inner_radius`.
    pub speed_per_offset: f64,
}

pub const SUN: SunSpec = SunSpec {
    radius: 15,
    color: Color::Yellow,
};

pub static PLANETS: [PlanetSpec; 8] = [
    PlanetSpec {
        name: "Mercury",
        radius: 1,
        distance: 25.0,
        color: Color::White,
        speed: 20.0,
        rings: &[],
        moons: &[],
    },
    PlanetSpec {
        name: "Venus",
        radius: 3,
        distance: 35.0,
        color: Color::Yellow,
        speed: 13.9,
        rings: &[],
        moons: &[],
    },
    PlanetSpec {
        name: "Earth",
        radius: 4,
        distance: 47.0,
        color: Color::Blue,
        speed: 11.4,
        rings: &[],
        moons: &[MoonSpec {
            name: "Moon",
            orbit_radius: 8.0,
            speed: 0.6,
            color: Color::White,
        }],
    },
    PlanetSpec {
        name: "Mars",
        radius: 3,
        distance: 60.0,
        color: Color::Red,
        speed: 8.7,
        rings: &[],
        moons: &[],
    },
    PlanetSpec {
        name: "Jupiter",
        radius: 6,
        distance: 85.0,
        color: Color::Yellow,
        speed: 3.6,
        rings: &[],
        moons: &[
            MoonSpec {
                name: "Io",
                orbit_radius: 9.0,
                speed: 0.2,
                color: Color::Yellow,
            },
            MoonSpec {
                name: "Europa",
                orbit_radius: 10.0,
                speed: 0.15,
                color: Color::White,
            },
            MoonSpec {
                name: "Ganymede",
                orbit_radius: 12.0,
                speed: 0.1,
                color: Color::White,
            },
        ],
    },
    PlanetSpec {
        name: "Saturn",
        radius: 4,
        distance: 107.0,
        color: Color::White,
        speed: 2.0,
        rings: &[
            RingSpec {
                distance: 3,
                color: None,
            },
            RingSpec {
                distance: 4,
                color: None,
            },
        ],
        moons: &[],
    },
    PlanetSpec {
        name: "Uranus",
        radius: 4,
        distance: 125.0,
        color: Color::Green,
        speed: 0.7,
        rings: &[RingSpec {
            distance: 3,
            color: Some(Color::Green),
        }],
        moons: &[],
    },
    PlanetSpec {
        name: "Neptune",
        radius: 4,
        distance: 140.0,
        color: Color::Blue,
        speed: 0.1,
        rings: &[],
        moons: &[],
    },
];

/// Main asteroid belt between Mars and Jupiter.
pub const ASTEROID_BELT: BeltSpec = BeltSpec {
    count: 250,
    inner_radius: 65.0,
    width: 5.0,
    base_speed: 0.005,
    speed_jitter: 0.002,
    speed_per_offset: 0.0,
};

/// Kuiper belt beyond Neptune; outer bodies drift slightly faster.
pub const KUIPER_BELT: BeltSpec = BeltSpec {
    count: 1000,
    inner_radius: 150.0,
    width: 40.0,
    base_speed: 0.001,
    speed_jitter: 0.002,
    speed_per_offset: 0.0002,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn moons_fit_inline_storage() {
        assert!(PLANETS.iter().all(|p| p.moons.len() <= MAX_MOONS));
    }

    #[test]
    fn planets_are_ordered_outward() {
        for pair in PLANETS.windows(2) {
            assert!(pair[0].distance < pair[1].distance);
        }
        assert!(PLANETS[0].distance > SUN.radius as f64);
    }
}
