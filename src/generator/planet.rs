//! Procedural planet profiles for survey output and codex entries.

use rand::Rng;

use super::{name, pick};

const PLANET_TYPES: [&str; 10] = [
    "Terrestrial",
    "Gas Giant",
    "Ice World",
    "Desert World",
    "Ocean World",
    "Volcanic",
    "Crystalline",
    "Metal Rich",
    "Toxic",
    "Artificial",
];

const ATMOSPHERES: [&str; 10] = [
    "Oxygen-Rich",
    "Nitrogen-Heavy",
    "Methane",
    "Carbon Dioxide",
    "Toxic Gas",
    "No Atmosphere",
    "Hydrogen",
    "Noble Gas Mix",
    "Corrosive",
    "Unknown Composition",
];

const CLIMATES: [&str; 10] = [
    "Tropical",
    "Temperate",
    "Arctic",
    "Desert",
    "Variable",
    "Extreme Heat",
    "Extreme Cold",
    "Constant Storm",
    "Calm",
    "Chaotic",
];

const COMMON_DEPOSITS: [&str; 4] = ["Iron Ore", "Silicon", "Carbon", "Water Ice"];
const RARE_DEPOSITS: [&str; 4] = [
    "Nexium Crystal",
    "Quantum Matter",
    "Rare Metals",
    "Energy Crystals",
];
const UNIQUE_DEPOSITS: [&str; 4] = [
    "Ancient Artifacts",
    "Alien Technology",
    "Exotic Matter",
    "Time Crystals",
];

const EXTRA_DANGERS: [&str; 6] = [
    "Hostile Wildlife",
    "Ancient Guardians",
    "Unstable Terrain",
    "Magnetic Anomalies",
    "Gravitational Disturbances",
    "Energy Storms",
];

const POINTS_OF_INTEREST: [&str; 12] = [
    "Ancient Ruins",
    "Crashed Starship",
    "Natural Wonder",
    "Mining Operation",
    "Research Facility",
    "Alien Monolith",
    "Energy Anomaly",
    "Hidden Cave System",
    "Orbital Debris",
    "Strange Formation",
    "Underground Lake",
    "Crystal Caverns",
];

#[derive(Debug, Clone, PartialEq)]
pub struct PlanetDeposit {
    pub name: String,
    pub abundance: f64,
    pub extraction_difficulty: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Planet {
    pub name: String,
    pub kind: String,
    pub atmosphere: String,
    pub climate: String,
    /// Surface gravity in G, 0.3 to 2.3.
    pub gravity: f64,
    /// Rotation period in hours, 12 to 60.
    pub day_length: i32,
    /// Mean surface temperature in degrees Celsius, -100 to 300.
    pub temperature: i32,
    /// 0 to 100.
    pub habitability: i32,
    pub resources: Vec<PlanetDeposit>,
    pub dangers: Vec<String>,
    pub population: &'static str,
    pub points_of_interest: Vec<&'static str>,
    pub exploration_difficulty: i32,
}

pub fn generate(rng: &mut impl Rng) -> Planet {
    let name = name::planet_name(rng);
    let kind = pick(rng, &PLANET_TYPES).to_string();
    let atmosphere = pick(rng, &ATMOSPHERES).to_string();
    let climate = pick(rng, &CLIMATES).to_string();

    let gravity = ((rng.random::<f64>() * 2.0 + 0.3) * 100.0).round() / 100.0;
    let day_length = rng.random_range(12..60);
    let temperature = rng.random_range(-100..300);

    let habitability = habitability(&kind, &atmosphere, &climate, gravity, temperature);

    Planet {
        resources: deposits(rng),
        dangers: dangers(rng, &kind, &climate),
        population: population(habitability),
        points_of_interest: points_of_interest(rng),
        exploration_difficulty: rng.random_range(1..=5),
        name,
        kind,
        atmosphere,
        climate,
        gravity,
        day_length,
        temperature,
        habitability,
    }
}

fn habitability(kind: &str, atmosphere: &str, climate: &str, gravity: f64, temperature: i32) -> i32 {
    let mut score = 50;

    score += match kind {
        "Terrestrial" => 30,
        "Ocean World" => 20,
        "Desert World" => 10,
        "Gas Giant" => -40,
        "Toxic" => -30,
        _ => 0,
    };

    score += match atmosphere {
        "Oxygen-Rich" => 25,
        "Nitrogen-Heavy" => 15,
        "No Atmosphere" => -30,
        "Toxic Gas" => -25,
        _ => 0,
    };

    score += match climate {
        "Temperate" => 20,
        "Tropical" => 10,
        "Extreme Heat" | "Extreme Cold" => -20,
        _ => 0,
    };

    if (0.8..=1.2).contains(&gravity) {
        score += 15;
    } else if gravity < 0.5 || gravity > 2.0 {
        score -= 15;
    }

    if (0..=30).contains(&temperature) {
        score += 15;
    } else if temperature < -50 || temperature > 50 {
        score -= 15;
    }

    score.clamp(0, 100)
}

fn deposits(rng: &mut impl Rng) -> Vec<PlanetDeposit> {
    let mut resources = Vec::new();

    for _ in 0..rng.random_range(1..=3) {
        resources.push(PlanetDeposit {
            name: pick(rng, &COMMON_DEPOSITS).to_string(),
            abundance: rng.random::<f64>(),
            extraction_difficulty: rng.random_range(1..=3),
        });
    }

    if rng.random::<f64>() > 0.5 {
        resources.push(PlanetDeposit {
            name: pick(rng, &RARE_DEPOSITS).to_string(),
            abundance: rng.random::<f64>() * 0.5,
            extraction_difficulty: rng.random_range(3..=5),
        });
    }

    if rng.random::<f64>() > 0.9 {
        resources.push(PlanetDeposit {
            name: pick(rng, &UNIQUE_DEPOSITS).to_string(),
            abundance: rng.random::<f64>() * 0.2,
            extraction_difficulty: 5,
        });
    }

    resources
}

fn dangers(rng: &mut impl Rng, kind: &str, climate: &str) -> Vec<String> {
    let mut dangers: Vec<String> = Vec::new();

    if kind == "Volcanic" {
        dangers.extend(
            ["Volcanic Activity", "Toxic Gas Vents", "Extreme Heat"].map(str::to_string),
        );
    }
    if kind == "Toxic" {
        dangers.extend(
            ["Poisonous Atmosphere", "Corrosive Environment", "Radiation"].map(str::to_string),
        );
    }
    if climate == "Constant Storm" {
        dangers.extend(["Severe Weather", "Lightning Storms", "High Winds"].map(str::to_string));
    }
    if rng.random::<f64>() > 0.7 {
        dangers.push(pick(rng, &EXTRA_DANGERS).to_string());
    }

    dangers
}

fn population(habitability: i32) -> &'static str {
    match habitability {
        ..20 => "Uninhabited",
        20..40 => "Research Outpost",
        40..60 => "Small Colony",
        60..80 => "Established Settlement",
        _ => "Major Population Center",
    }
}

fn points_of_interest(rng: &mut impl Rng) -> Vec<&'static str> {
    let mut interests: Vec<&'static str> = Vec::new();
    for _ in 0..rng.random_range(0..4) {
        let interest = *pick(rng, &POINTS_OF_INTEREST);
        if !interests.contains(&interest) {
            interests.push(interest);
        }
    }
    interests
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::generate;

    #[test]
    fn test_physical_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let planet = generate(&mut rng);
            assert!((0.3..=2.3).contains(&planet.gravity), "gravity {}", planet.gravity);
            assert!((12..60).contains(&planet.day_length));
            assert!((-100..300).contains(&planet.temperature));
            assert!((0..=100).contains(&planet.habitability));
            assert!((1..=5).contains(&planet.exploration_difficulty));
        }
    }

    #[test]
    fn test_always_carries_common_deposits() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let planet = generate(&mut rng);
            assert!(!planet.resources.is_empty());
            assert!(planet.resources.len() <= 5);
            assert!(planet.points_of_interest.len() < 4);
        }
    }
}
