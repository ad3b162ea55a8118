//! Procedural fauna for hunting flavor and codex entries.

use entity::types::{Rarity, ResourceKind};
use rand::Rng;

use super::{name, pick};

const CREATURE_TYPES: [&str; 10] = [
    "Crystalline",
    "Mechanical",
    "Energy-based",
    "Organic",
    "Hybrid",
    "Gaseous",
    "Plasma",
    "Quantum",
    "Ethereal",
    "Silicon-based",
];

const SIZES: [(&str, f64); 8] = [
    ("Microscopic", 0.1),
    ("Tiny", 0.3),
    ("Small", 0.7),
    ("Medium", 1.0),
    ("Large", 1.5),
    ("Huge", 2.5),
    ("Colossal", 4.0),
    ("Planetary", 10.0),
];

const HABITATS: [&str; 12] = [
    "Space Void",
    "Asteroid Fields",
    "Nebulae",
    "Planet Surface",
    "Underground Caves",
    "Ocean Depths",
    "Volcanic Regions",
    "Ice Fields",
    "Gas Giant Atmospheres",
    "Orbital Stations",
    "Derelict Ships",
    "Energy Storms",
];

const ABILITIES: [&str; 16] = [
    "Phase Shifting",
    "Energy Absorption",
    "Electromagnetic Pulse",
    "Camouflage",
    "Regeneration",
    "Toxic Secretion",
    "Gravity Manipulation",
    "Time Dilation",
    "Matter Conversion",
    "Telepathy",
    "Quantum Tunneling",
    "Ion Discharge",
    "Shield Generation",
    "Molecular Disruption",
    "Dimensional Rift",
    "Mind Control",
];

const NAME_PREFIXES: [&str; 16] = [
    "Void", "Quantum", "Plasma", "Crystal", "Shadow", "Nova", "Stellar", "Cosmic", "Nebula",
    "Ion", "Hyper", "Meta", "Proto", "Ultra", "Mega", "Nano",
];

const NAME_BASES: [&str; 14] = [
    "Wyrm", "Leviathan", "Specter", "Guardian", "Hunter", "Drifter", "Stalker", "Sentinel",
    "Wraith", "Beast", "Entity", "Organism", "Anomaly", "Horror",
];

struct LootTemplate {
    name: &'static str,
    kind: ResourceKind,
    rarity: Rarity,
    value: i32,
    drop_chance: f64,
}

const LOOT_TABLE: [LootTemplate; 6] = [
    LootTemplate {
        name: "Organic Matter",
        kind: ResourceKind::Material,
        rarity: Rarity::Common,
        value: 10,
        drop_chance: 0.8,
    },
    LootTemplate {
        name: "Energy Residue",
        kind: ResourceKind::Material,
        rarity: Rarity::Common,
        value: 15,
        drop_chance: 0.6,
    },
    LootTemplate {
        name: "Creature Essence",
        kind: ResourceKind::Component,
        rarity: Rarity::Uncommon,
        value: 50,
        drop_chance: 0.4,
    },
    LootTemplate {
        name: "Alien Genetic Sample",
        kind: ResourceKind::Artifact,
        rarity: Rarity::Rare,
        value: 200,
        drop_chance: 0.2,
    },
    LootTemplate {
        name: "Quantum Biomatter",
        kind: ResourceKind::Artifact,
        rarity: Rarity::Epic,
        value: 500,
        drop_chance: 0.1,
    },
    LootTemplate {
        name: "Living Crystal",
        kind: ResourceKind::Artifact,
        rarity: Rarity::Legendary,
        value: 1000,
        drop_chance: 0.05,
    },
];

#[derive(Debug, Clone, PartialEq)]
pub struct CreatureLoot {
    pub name: &'static str,
    pub kind: ResourceKind,
    pub rarity: Rarity,
    pub value: i32,
    pub drop_chance: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Creature {
    pub name: String,
    pub kind: String,
    pub size: &'static str,
    pub habitat: String,
    pub danger_level: i32,
    pub abilities: Vec<&'static str>,
    pub description: String,
    pub rarity: Rarity,
    pub health: i32,
    pub damage: i32,
    pub defense: i32,
    pub loot: Vec<CreatureLoot>,
}

pub fn generate(rng: &mut impl Rng, habitat: Option<&str>, danger: Option<i32>) -> Creature {
    let kind = pick(rng, &CREATURE_TYPES).to_string();
    let (size, size_multiplier) = *pick(rng, &SIZES);
    let habitat = habitat
        .map(str::to_string)
        .unwrap_or_else(|| pick(rng, &HABITATS).to_string());

    let danger_level = danger.unwrap_or_else(|| rng.random_range(1..=5));
    let rarity = rarity_for_danger(danger_level);

    let name = creature_name(rng);
    let abilities = abilities(rng, danger_level);
    let description = description(rng, &name, &kind, size, &habitat, &abilities);

    let level_multiplier = 1.0 + (danger_level - 1) as f64 * 0.3;
    let scale = size_multiplier * level_multiplier;

    Creature {
        loot: loot(rarity, danger_level),
        health: (100.0 * scale).floor() as i32,
        damage: (25.0 * scale).floor() as i32,
        defense: (10.0 * scale).floor() as i32,
        name,
        kind,
        size,
        habitat,
        danger_level,
        abilities,
        description,
        rarity,
    }
}

fn creature_name(rng: &mut impl Rng) -> String {
    let base = *pick(rng, &NAME_BASES);
    if rng.random::<f64>() > 0.5 {
        format!("{} {}", pick(rng, &NAME_PREFIXES), base)
    } else {
        format!("{} of {}", base, name::alien_name(rng))
    }
}

fn abilities(rng: &mut impl Rng, danger_level: i32) -> Vec<&'static str> {
    let wanted = ((danger_level / 2 + 1) as usize).min(4);
    let mut selected: Vec<&'static str> = Vec::with_capacity(wanted);
    while selected.len() < wanted {
        let ability = *pick(rng, &ABILITIES);
        if !selected.contains(&ability) {
            selected.push(ability);
        }
    }
    selected
}

fn description(
    rng: &mut impl Rng,
    name: &str,
    kind: &str,
    size: &str,
    habitat: &str,
    abilities: &[&'static str],
) -> String {
    let lead = abilities.first().copied().unwrap_or("unknown").to_lowercase();
    let templates = [
        format!(
            "The {} is a {} {} creature found in {}.",
            name,
            size.to_lowercase(),
            kind.to_lowercase(),
            habitat.to_lowercase()
        ),
        format!(
            "This {} entity roams the {}, using its {} ability to survive.",
            kind.to_lowercase(),
            habitat.to_lowercase(),
            lead
        ),
        format!(
            "A mysterious {} being that haunts {}, known for its deadly {} attacks.",
            size.to_lowercase(),
            habitat.to_lowercase(),
            lead
        ),
    ];

    let mut text = pick(rng, &templates).clone();
    if abilities.len() > 1 {
        let rest = abilities[1..].join(", ").to_lowercase();
        text.push_str(&format!(" It possesses multiple abilities including {rest}."));
    }
    text
}

fn loot(rarity: Rarity, danger_level: i32) -> Vec<CreatureLoot> {
    LOOT_TABLE
        .iter()
        .filter(|item| item.rarity as i32 <= rarity as i32 + 1)
        .map(|item| CreatureLoot {
            name: item.name,
            kind: item.kind,
            rarity: item.rarity,
            value: ((item.value as f64) * (1.0 + danger_level as f64 * 0.2)).floor() as i32,
            drop_chance: item.drop_chance,
        })
        .collect()
}

fn rarity_for_danger(danger_level: i32) -> Rarity {
    match danger_level {
        ..=1 => Rarity::Common,
        2 => Rarity::Uncommon,
        3 => Rarity::Rare,
        4 => Rarity::Epic,
        _ => Rarity::Legendary,
    }
}

#[cfg(test)]
mod tests {
    use entity::types::Rarity;
    use rand::{rngs::StdRng, SeedableRng};

    use super::{generate, rarity_for_danger};

    #[test]
    fn test_rarity_tracks_danger() {
        assert_eq!(rarity_for_danger(1), Rarity::Common);
        assert_eq!(rarity_for_danger(3), Rarity::Rare);
        assert_eq!(rarity_for_danger(5), Rarity::Legendary);
    }

    #[test]
    fn test_fixed_habitat_and_danger() {
        let mut rng = StdRng::seed_from_u64(3);
        let creature = generate(&mut rng, Some("Nebulae"), Some(4));
        assert_eq!(creature.habitat, "Nebulae");
        assert_eq!(creature.danger_level, 4);
        assert_eq!(creature.rarity, Rarity::Epic);
        assert!(creature.abilities.len() <= 4);
        assert!(!creature.description.is_empty());
    }

    #[test]
    fn test_loot_filtered_by_rarity() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let creature = generate(&mut rng, None, Some(1));
            for item in &creature.loot {
                assert!(item.rarity as i32 <= creature.rarity as i32 + 1);
                assert!((0.0..=1.0).contains(&item.drop_chance));
            }
        }
    }

    #[test]
    fn test_stats_scale_with_danger() {
        let mut rng = StdRng::seed_from_u64(9);
        let tame = generate(&mut rng, Some("Ice Fields"), Some(1));
        assert!(tame.health >= 10);
        assert!(tame.damage >= 2);
    }
}
