//! Static catalog of the bodies in the scene.
//!
//! Display-unit radii, orbital distances and angular speeds are stylistic:
//! distances are stretched for readability and speeds are tuned by eye, so
//! only the relative ordering carries meaning.

mod facts;

pub use facts::{FactField, FactSheet};

use bevy::prelude::*;

/// Identifier for the bodies in the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

impl BodyId {
    /// All bodies in list order: the star first, then planets by distance.
    pub const ALL: [BodyId; 9] = [
        BodyId::Sun,
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// The eight planets, nearest first.
    pub const PLANETS: [BodyId; 8] = [
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
        BodyId::Uranus,
        BodyId::Neptune,
    ];

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
        }
    }

    /// Asset key of the surface texture.
    pub fn texture_name(&self) -> &'static str {
        match self {
            BodyId::Sun => "sun",
            BodyId::Mercury => "mercury",
            BodyId::Venus => "venus",
            BodyId::Earth => "earth",
            BodyId::Mars => "mars",
            BodyId::Jupiter => "jupiter",
            BodyId::Saturn => "saturn",
            BodyId::Uranus => "uranus",
            BodyId::Neptune => "neptune",
        }
    }

    /// Position in [`BodyId::ALL`], used as the selectable index.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Look up a body by its selectable index.
    pub fn from_index(index: usize) -> Option<BodyId> {
        Self::ALL.get(index).copied()
    }

    pub fn kind(&self) -> BodyKind {
        match self {
            BodyId::Sun => BodyKind::Star,
            _ => BodyKind::Planet,
        }
    }

    /// Static orbital and visual parameters.
    pub fn data(&self) -> &'static BodyData {
        &BODIES[self.index()]
    }

    /// Descriptive fact sheet shown when the body is selected.
    pub fn fact_sheet(&self) -> &'static FactSheet {
        facts::fact_sheet(*self)
    }
}

/// Star or planet.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    Star,
    Planet,
}

/// Static data for a body.
#[derive(Clone, Debug)]
pub struct BodyData {
    pub id: BodyId,
    /// Sphere radius in display units.
    pub radius: f32,
    /// Distance from the origin in display units (0 for the star).
    pub distance: f32,
    /// Orbit pivot rotation per tick, radians.
    pub angular_speed: f32,
    /// Self-rotation per tick, radians.
    pub spin_rate: f32,
}

/// Self-rotation per tick shared by every planet.
pub const PLANET_SPIN_RATE: f32 = 0.02;

/// Self-rotation per tick of the star.
pub const STAR_SPIN_RATE: f32 = 0.004;

const fn planet(id: BodyId, radius: f32, distance: f32, angular_speed: f32) -> BodyData {
    BodyData {
        id,
        radius,
        distance,
        angular_speed,
        spin_rate: PLANET_SPIN_RATE,
    }
}

/// Body table in list order.
pub static BODIES: [BodyData; 9] = [
    BodyData {
        id: BodyId::Sun,
        radius: 45.0,
        distance: 0.0,
        angular_speed: 0.0,
        spin_rate: STAR_SPIN_RATE,
    },
    planet(BodyId::Mercury, 3.2, 84.0, 0.004),
    planet(BodyId::Venus, 5.8, 132.0, 0.003),
    planet(BodyId::Earth, 6.0, 186.0, 0.002),
    planet(BodyId::Mars, 4.0, 234.0, 0.0018),
    planet(BodyId::Jupiter, 12.0, 300.0, 0.001),
    planet(BodyId::Saturn, 10.0, 414.0, 0.0008),
    planet(BodyId::Uranus, 7.0, 528.0, 0.0004),
    planet(BodyId::Neptune, 7.0, 600.0, 0.0001),
];

/// Iterate the planet rows of the body table, nearest first.
pub fn planets() -> impl Iterator<Item = &'static BodyData> {
    BODIES.iter().filter(|b| b.id.kind() == BodyKind::Planet)
}

/// Color used for the star when its texture is missing.
pub const STAR_FALLBACK_COLOR: Color = Color::srgb(1.0, 1.0, 0.0);

/// Random solid color for a planet whose texture failed to load.
pub fn random_fallback_color(rng: &mut impl rand::Rng) -> Color {
    Color::srgb(rng.random(), rng.random(), rng.random())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_ids() {
        for (i, body) in BODIES.iter().enumerate() {
            assert_eq!(body.id.index(), i);
            assert_eq!(BodyId::from_index(i), Some(body.id));
        }
        assert_eq!(BodyId::from_index(9), None);
    }

    #[test]
    fn test_planet_distances_strictly_increase() {
        let distances: Vec<f32> = planets().map(|p| p.distance).collect();
        assert_eq!(distances.len(), 8);
        for pair in distances.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn test_star_sits_at_origin() {
        let sun = BodyId::Sun.data();
        assert_eq!(sun.distance, 0.0);
        assert_eq!(sun.angular_speed, 0.0);
        assert_eq!(BodyId::Sun.kind(), BodyKind::Star);
    }

    #[test]
    fn test_texture_names_are_unique() {
        let mut names: Vec<&str> = BodyId::ALL.iter().map(|b| b.texture_name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), BodyId::ALL.len());
    }

    #[test]
    fn test_fallback_color_is_opaque() {
        let mut rng = rand::rng();
        for _ in 0..16 {
            let c = random_fallback_color(&mut rng).to_srgba();
            assert!((0.0..=1.0).contains(&c.red));
            assert_eq!(c.alpha, 1.0);
        }
    }
}
