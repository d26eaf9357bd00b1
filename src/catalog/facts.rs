//! Descriptive fact sheets for the info overlay.

use super::BodyId;

/// Descriptive record for one body. Absent fields do not apply to the body.
#[derive(Clone, Debug, Default)]
pub struct FactSheet {
    pub name: &'static str,
    pub description: &'static str,
    pub diameter: Option<&'static str>,
    pub day_length: Option<&'static str>,
    pub year_length: Option<&'static str>,
    pub gravity: Option<&'static str>,
    pub temperature: Option<&'static str>,
    pub distance_from_sun: Option<&'static str>,
    pub orbital_speed: Option<&'static str>,
    pub moons: Option<&'static str>,
    pub composition: Option<&'static str>,
    pub atmosphere: Option<&'static str>,
    pub age: Option<&'static str>,
    pub star_type: Option<&'static str>,
    pub mass: Option<&'static str>,
    pub distance_from_earth: Option<&'static str>,
    pub rotation_period: Option<&'static str>,
    pub magnetic_field: Option<&'static str>,
    pub notable_facts: &'static [&'static str],
}

/// A present field, ready for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactField {
    pub label: &'static str,
    pub value: &'static str,
}

impl FactSheet {
    /// Present fields in display order.
    pub fn fields(&self) -> impl Iterator<Item = FactField> + '_ {
        [
            ("Diameter", self.diameter),
            ("Day Length", self.day_length),
            ("Year Length", self.year_length),
            ("Gravity", self.gravity),
            ("Temperature", self.temperature),
            ("Distance from Sun", self.distance_from_sun),
            ("Orbital Speed", self.orbital_speed),
            ("Moons", self.moons),
            ("Composition", self.composition),
            ("Atmosphere", self.atmosphere),
            ("Age", self.age),
            ("Type", self.star_type),
            ("Mass", self.mass),
            ("Distance from Earth", self.distance_from_earth),
            ("Rotation Period", self.rotation_period),
            ("Magnetic Field", self.magnetic_field),
        ]
        .into_iter()
        .filter_map(|(label, value)| value.map(|value| FactField { label, value }))
    }
}

pub(super) fn fact_sheet(id: BodyId) -> &'static FactSheet {
    match id {
        BodyId::Sun => &SUN,
        BodyId::Mercury => &MERCURY,
        BodyId::Venus => &VENUS,
        BodyId::Earth => &EARTH,
        BodyId::Mars => &MARS,
        BodyId::Jupiter => &JUPITER,
        BodyId::Saturn => &SATURN,
        BodyId::Uranus => &URANUS,
        BodyId::Neptune => &NEPTUNE,
    }
}

const NONE: FactSheet = FactSheet {
    name: "",
    description: "",
    diameter: None,
    day_length: None,
    year_length: None,
    gravity: None,
    temperature: None,
    distance_from_sun: None,
    orbital_speed: None,
    moons: None,
    composition: None,
    atmosphere: None,
    age: None,
    star_type: None,
    mass: None,
    distance_from_earth: None,
    rotation_period: None,
    magnetic_field: None,
    notable_facts: &[],
};

static SUN: FactSheet = FactSheet {
    name: "Sun",
    description: "The star at the center of our Solar System. It's a nearly perfect sphere of hot plasma that provides the energy that sustains life on Earth. The Sun contains 99.86% of the mass in the Solar System and is powered by nuclear fusion, converting hydrogen into helium in its core.",
    diameter: Some("1,392,700 km (109 times Earth's diameter)"),
    age: Some("4.6 billion years (middle-aged for a star)"),
    star_type: Some("G-type main-sequence star (yellow dwarf)"),
    temperature: Some("5,500°C (surface), 15,000,000°C (core)"),
    mass: Some("333,000 times Earth's mass"),
    composition: Some("73% hydrogen, 25% helium, 2% heavier elements"),
    distance_from_earth: Some("149.6 million km (1 AU)"),
    rotation_period: Some("25-35 days (varies by latitude due to being gaseous)"),
    magnetic_field: Some("Complex and powerful, reversing polarity approximately every 11 years"),
    notable_facts: &[
        "The Sun produces energy through nuclear fusion, converting 600 million tons of hydrogen into helium every second",
        "Light from the Sun takes about 8 minutes and 20 seconds to reach Earth",
        "The Sun's core temperature is hot enough to convert matter into plasma",
        "Solar flares and coronal mass ejections can disrupt Earth's communications and power systems",
        "The Sun will eventually expand into a red giant in about 5 billion years, engulfing Mercury and Venus",
    ],
    ..NONE
};

static MERCURY: FactSheet = FactSheet {
    name: "Mercury",
    description: "The smallest and innermost planet in the Solar System. It has no atmosphere to retain heat, causing extreme temperature variations. Mercury has a heavily cratered surface similar to our Moon due to impacts from comets and asteroids.",
    diameter: Some("4,879 km"),
    day_length: Some("58.6 Earth days"),
    year_length: Some("88 Earth days"),
    gravity: Some("3.7 m/s²"),
    temperature: Some("-173°C to 427°C"),
    distance_from_sun: Some("57.9 million km"),
    orbital_speed: Some("47.4 km/s"),
    moons: Some("0"),
    composition: Some("Rocky planet with a large iron core (60% of its mass)"),
    atmosphere: Some("Extremely thin, composed mainly of oxygen, sodium, hydrogen, helium and potassium"),
    notable_facts: &[
        "Mercury has the most eccentric orbit of all planets in the Solar System",
        "Despite being closest to the Sun, Venus is hotter due to Mercury's lack of atmosphere",
        "Mercury's surface resembles our Moon with numerous impact craters",
        "A day on Mercury (sunrise to sunrise) lasts 176 Earth days",
    ],
    ..NONE
};

static VENUS: FactSheet = FactSheet {
    name: "Venus",
    description: "The second planet from the Sun and Earth's closest planetary neighbor. It has a thick atmosphere that traps heat, making it the hottest planet in our solar system despite being farther from the Sun than Mercury.",
    diameter: Some("12,104 km"),
    day_length: Some("243 Earth days (retrograde rotation)"),
    year_length: Some("225 Earth days"),
    gravity: Some("8.87 m/s²"),
    temperature: Some("462°C (average)"),
    distance_from_sun: Some("108.2 million km"),
    orbital_speed: Some("35 km/s"),
    moons: Some("0"),
    composition: Some("Rocky planet with a similar size and composition to Earth"),
    atmosphere: Some("Extremely dense, composed of 96% carbon dioxide, creating a runaway greenhouse effect"),
    notable_facts: &[
        "Venus rotates backwards compared to other planets",
        "The atmospheric pressure on Venus is 92 times that of Earth",
        "Venus has more volcanoes than any other planet in our solar system",
        "A day on Venus is longer than its year",
    ],
    ..NONE
};

static EARTH: FactSheet = FactSheet {
    name: "Earth",
    description: "Our home planet and the only known celestial body to harbor life. It has liquid water, an oxygen-rich atmosphere, and a protective magnetic field. Earth's surface is 71% covered by water, with the remaining 29% consisting of continents and islands.",
    diameter: Some("12,742 km"),
    day_length: Some("24 hours"),
    year_length: Some("365.25 days"),
    gravity: Some("9.8 m/s²"),
    temperature: Some("-88°C to 58°C"),
    distance_from_sun: Some("149.6 million km (1 AU)"),
    orbital_speed: Some("29.8 km/s"),
    moons: Some("1 (Luna)"),
    composition: Some("Rocky planet with an iron-nickel core, silicate mantle, and thin crust"),
    atmosphere: Some("78% nitrogen, 21% oxygen, 1% argon, carbon dioxide, and other gases"),
    notable_facts: &[
        "Earth is the only planet not named after a god or goddess",
        "Our planet's magnetic field protects us from harmful solar radiation",
        "Earth's axial tilt of 23.5° causes our seasons",
        "The highest point on Earth is Mount Everest (8,848.86 meters above sea level)",
        "The deepest point is the Challenger Deep in the Mariana Trench (10,994 meters below sea level)",
    ],
    ..NONE
};

static MARS: FactSheet = FactSheet {
    name: "Mars",
    description: "The fourth planet from the Sun, often called the 'Red Planet' due to its reddish appearance caused by iron oxide (rust) on its surface. It has polar ice caps and evidence of ancient rivers and lakes, suggesting it once had liquid water on its surface.",
    diameter: Some("6,779 km"),
    day_length: Some("24.6 hours"),
    year_length: Some("687 Earth days"),
    gravity: Some("3.72 m/s²"),
    temperature: Some("-153°C to 20°C"),
    distance_from_sun: Some("227.9 million km"),
    orbital_speed: Some("24.1 km/s"),
    moons: Some("2 (Phobos and Deimos)"),
    composition: Some("Rocky planet with a core of iron, nickel, and sulfur"),
    atmosphere: Some("Thin, composed of 95% carbon dioxide, 2.7% nitrogen, 1.6% argon"),
    notable_facts: &[
        "Mars has the largest volcano in the solar system, Olympus Mons (25 km high)",
        "It has the longest canyon, Valles Marineris (4,000 km long)",
        "Dust storms on Mars can cover the entire planet and last for months",
        "Evidence suggests Mars once had flowing water and may have been habitable",
        "More than 40 missions have been sent to Mars, with several rovers exploring its surface",
    ],
    ..NONE
};

static JUPITER: FactSheet = FactSheet {
    name: "Jupiter",
    description: "The largest planet in our Solar System, with a mass two and a half times that of all other planets combined. It's a gas giant primarily composed of hydrogen and helium with a strong magnetic field and many moons. Its most distinctive feature is the Great Red Spot, a giant storm that has been raging for at least 400 years.",
    diameter: Some("139,820 km (11 times Earth's diameter)"),
    day_length: Some("9.93 hours"),
    year_length: Some("11.86 Earth years"),
    gravity: Some("24.79 m/s²"),
    temperature: Some("-145°C (cloud tops)"),
    distance_from_sun: Some("778.5 million km"),
    orbital_speed: Some("13.1 km/s"),
    moons: Some("79 confirmed moons, including the four large Galilean moons: Io, Europa, Ganymede, and Callisto"),
    composition: Some("Gas giant composed mainly of hydrogen and helium, with a possible rocky core"),
    atmosphere: Some("Thick atmosphere of hydrogen, helium, methane, ammonia, and water vapor"),
    notable_facts: &[
        "Jupiter's Great Red Spot is a storm larger than Earth that has existed for centuries",
        "Jupiter's magnetic field is 14 times stronger than Earth's",
        "It emits more heat than it receives from the Sun",
        "Jupiter acts as a 'cosmic vacuum cleaner,' protecting inner planets by attracting asteroids and comets",
        "The Galilean moon Europa may have a subsurface ocean that could potentially harbor life",
    ],
    ..NONE
};

static SATURN: FactSheet = FactSheet {
    name: "Saturn",
    description: "Known for its spectacular ring system, Saturn is a gas giant and the second-largest planet in our Solar System. Its rings are made mostly of ice particles with some rocky debris and dust. Despite its large size, Saturn is the least dense planet in our solar system; it would float in water if there were an ocean large enough.",
    diameter: Some("116,460 km"),
    day_length: Some("10.7 hours"),
    year_length: Some("29.46 Earth years"),
    gravity: Some("10.44 m/s²"),
    temperature: Some("-178°C (cloud tops)"),
    distance_from_sun: Some("1.4 billion km"),
    orbital_speed: Some("9.7 km/s"),
    moons: Some("82 confirmed moons, including Titan, the second-largest moon in the solar system"),
    composition: Some("Gas giant composed mainly of hydrogen and helium, with a small rocky core"),
    atmosphere: Some("Primarily hydrogen and helium with traces of ammonia, methane, and water vapor"),
    notable_facts: &[
        "Saturn's rings extend up to 282,000 km from the planet but are only about 10 meters thick",
        "Its moon Titan has a thick atmosphere and liquid methane lakes on its surface",
        "Saturn has a hexagonal cloud pattern at its north pole",
        "The Cassini spacecraft discovered geysers of water erupting from the moon Enceladus",
        "Saturn's density is so low that it would float in a giant bathtub of water",
    ],
    ..NONE
};

static URANUS: FactSheet = FactSheet {
    name: "Uranus",
    description: "The seventh planet from the Sun and the first discovered with a telescope. It's an ice giant composed primarily of hydrogen, helium, and methane. Uranus rotates on its side, giving it extreme seasons that last for decades. Its blue-green color comes from methane in its atmosphere, which absorbs red light and reflects blue light.",
    diameter: Some("50,724 km"),
    day_length: Some("17.24 hours"),
    year_length: Some("84 Earth years"),
    gravity: Some("8.87 m/s²"),
    temperature: Some("-224°C (average)"),
    distance_from_sun: Some("2.9 billion km"),
    orbital_speed: Some("6.8 km/s"),
    moons: Some("27 known moons, all named after characters from Shakespeare and Pope"),
    composition: Some("Ice giant with a mantle of water, ammonia, and methane ices surrounding a rocky core"),
    atmosphere: Some("Hydrogen, helium, and methane, with methane giving it its blue-green color"),
    notable_facts: &[
        "Uranus rotates on its side with an axial tilt of 98 degrees",
        "It was the first planet discovered in modern times (1781) using a telescope",
        "Uranus has 13 faint rings",
        "It has only been visited by one spacecraft, Voyager 2, in 1986",
        "The planet experiences extreme seasonal changes due to its unusual tilt",
    ],
    ..NONE
};

static NEPTUNE: FactSheet = FactSheet {
    name: "Neptune",
    description: "The eighth and farthest known planet from the Sun. It's an ice giant with the strongest winds in the Solar System, reaching speeds of 2,100 km/h. Neptune's deep blue color comes from methane in its atmosphere. It was the first planet located through mathematical predictions rather than direct observation.",
    diameter: Some("49,244 km"),
    day_length: Some("16.11 hours"),
    year_length: Some("165 Earth years"),
    gravity: Some("11.15 m/s²"),
    temperature: Some("-214°C (average)"),
    distance_from_sun: Some("4.5 billion km"),
    orbital_speed: Some("5.4 km/s"),
    moons: Some("14 known moons, with Triton being the largest"),
    composition: Some("Ice giant with a mantle of water, ammonia, and methane ices surrounding a rocky core"),
    atmosphere: Some("Hydrogen, helium, and methane, with methane giving it its blue color"),
    notable_facts: &[
        "Neptune has the strongest winds in the solar system, reaching 2,100 km/h",
        "It was discovered through mathematical predictions based on Uranus's orbit",
        "Its moon Triton orbits in the opposite direction of Neptune's rotation",
        "Neptune has a Great Dark Spot, a storm system similar to Jupiter's Great Red Spot",
        "It has only been visited once by spacecraft (Voyager 2 in 1989)",
    ],
    ..NONE
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_body_has_a_named_sheet() {
        for id in BodyId::ALL {
            let sheet = id.fact_sheet();
            assert_eq!(sheet.name, id.name());
            assert!(!sheet.description.is_empty());
            assert!(!sheet.notable_facts.is_empty());
        }
    }

    #[test]
    fn test_star_has_no_planet_fields() {
        let labels: Vec<&str> = BodyId::Sun.fact_sheet().fields().map(|f| f.label).collect();
        assert!(!labels.contains(&"Moons"));
        assert!(!labels.contains(&"Day Length"));
        assert!(labels.contains(&"Age"));
        assert!(labels.contains(&"Type"));
    }

    #[test]
    fn test_planets_have_no_star_fields() {
        for id in BodyId::PLANETS {
            let labels: Vec<&str> = id.fact_sheet().fields().map(|f| f.label).collect();
            assert!(labels.contains(&"Moons"), "{} lacks moons", id.name());
            assert!(!labels.contains(&"Age"));
            assert!(!labels.contains(&"Mass"));
        }
    }

    #[test]
    fn test_fields_keep_display_order() {
        let labels: Vec<&str> = BodyId::Earth.fact_sheet().fields().map(|f| f.label).collect();
        assert_eq!(
            labels,
            vec![
                "Diameter",
                "Day Length",
                "Year Length",
                "Gravity",
                "Temperature",
                "Distance from Sun",
                "Orbital Speed",
                "Moons",
                "Composition",
                "Atmosphere",
            ]
        );
    }
}
