//! Procedural crafting recipes, used to seed the recipe table.

use entity::types::{MaterialList, MaterialRequirement, Rarity, ResourceKind};
use rand::Rng;

use crate::data::recipe::NewRecipe;

use super::pick;

const BASIC_MATERIALS: [&str; 5] =
    ["Iron Ore", "Silicon", "Carbon Fiber", "Aluminum", "Copper Wire"];
const ADVANCED_MATERIALS: [&str; 5] = [
    "Titanium Alloy",
    "Quantum Steel",
    "Plasma Conduit",
    "Neural Fiber",
    "Energy Cell",
];
const RARE_MATERIALS: [&str; 5] = [
    "Nexium Crystal",
    "Dark Matter",
    "Temporal Crystal",
    "Void Essence",
    "Quantum Matrix",
];
const EXOTIC_MATERIALS: [&str; 5] = [
    "Living Metal",
    "Consciousness Core",
    "Reality Shard",
    "Infinity Particle",
    "Dimensional Anchor",
];

const WEAPON_COMPONENTS: [&str; 10] = [
    "Barrel",
    "Trigger Assembly",
    "Power Core",
    "Targeting System",
    "Ammunition Feed",
    "Cooling System",
    "Stabilizer",
    "Charge Capacitor",
    "Beam Focuser",
    "Projectile Chamber",
];

const WEAPON_TYPES: [&str; 10] = [
    "Laser Rifle",
    "Plasma Cannon",
    "Ion Blaster",
    "Quantum Disruptor",
    "Particle Beam",
    "Photon Torpedo",
    "Energy Lance",
    "Pulse Rifle",
    "Gravity Gun",
    "Molecular Disassembler",
];

const COMPONENT_TYPES: [&str; 10] = [
    "Shield Generator",
    "Engine Booster",
    "Sensor Array",
    "Life Support Module",
    "Navigation Computer",
    "Communication Array",
    "Power Regulator",
    "Hull Plating",
    "Magnetic Field Generator",
    "Quantum Processor",
];

const UPGRADE_TYPES: [&str; 10] = [
    "Armor Plating",
    "Speed Enhancement",
    "Weapon Modification",
    "Sensor Upgrade",
    "Engine Tuning",
    "Shield Booster",
    "Cargo Expansion",
    "Stealth Module",
    "Tactical Computer",
    "Emergency Systems",
];

const CONSUMABLE_TYPES: [&str; 10] = [
    "Repair Kit",
    "Shield Battery",
    "Energy Boost",
    "Hull Sealant",
    "System Stabilizer",
    "Emergency Oxygen",
    "Nano-repair Swarm",
    "Power Cell",
    "Medical Kit",
    "Fuel Injector",
];

const CRAFTABLE_KINDS: [ResourceKind; 5] = [
    ResourceKind::Weapon,
    ResourceKind::Component,
    ResourceKind::Upgrade,
    ResourceKind::Consumable,
    ResourceKind::Material,
];

pub fn generate(
    rng: &mut impl Rng,
    kind: Option<ResourceKind>,
    level: Option<i32>,
    rarity: Option<Rarity>,
) -> NewRecipe {
    let kind = kind.unwrap_or_else(|| *pick(rng, &CRAFTABLE_KINDS));
    let level = level.unwrap_or_else(|| rng.random_range(1..=5));
    let rarity = rarity.unwrap_or_else(|| weighted_rarity(rng));

    match kind {
        ResourceKind::Component => component_recipe(rng, level, rarity),
        ResourceKind::Upgrade => upgrade_recipe(rng, level, rarity),
        ResourceKind::Consumable => consumable_recipe(rng, level, rarity),
        ResourceKind::Material => material_recipe(rng, level, rarity),
        _ => weapon_recipe(rng, level, rarity),
    }
}

/// 40/30/20/8/2 percent for common through legendary.
fn weighted_rarity(rng: &mut impl Rng) -> Rarity {
    match rng.random::<f64>() {
        roll if roll <= 0.40 => Rarity::Common,
        roll if roll <= 0.70 => Rarity::Uncommon,
        roll if roll <= 0.90 => Rarity::Rare,
        roll if roll <= 0.98 => Rarity::Epic,
        _ => Rarity::Legendary,
    }
}

fn weapon_recipe(rng: &mut impl Rng, level: i32, rarity: Rarity) -> NewRecipe {
    let weapon = *pick(rng, &WEAPON_TYPES);
    let damage = weapon_damage(level, rarity);
    let accuracy = rng.random_range(70..90);

    NewRecipe {
        name: format!("{} {}", rarity.label(), weapon),
        kind: ResourceKind::Weapon,
        materials: materials(rng, level, rarity, true),
        result_name: weapon.to_string(),
        result_quantity: 1,
        level,
        rarity,
        description: format!(
            "A {} grade {} designed for space combat. Deals {} damage with {}% accuracy.",
            rarity.label().to_lowercase(),
            weapon.to_lowercase(),
            damage,
            accuracy
        ),
    }
}

fn component_recipe(rng: &mut impl Rng, level: i32, rarity: Rarity) -> NewRecipe {
    let component = *pick(rng, &COMPONENT_TYPES);
    let bonus = rarity_bonus(rarity, [5, 10, 20, 35, 50]) + (level - 1) * 5;

    NewRecipe {
        name: format!("{} {}", rarity.label(), component),
        kind: ResourceKind::Component,
        materials: materials(rng, level, rarity, false),
        result_name: component.to_string(),
        result_quantity: 1,
        level,
        rarity,
        description: format!(
            "A {} {} that provides {}% efficiency bonus to ship systems.",
            rarity.label().to_lowercase(),
            component.to_lowercase(),
            bonus
        ),
    }
}

fn upgrade_recipe(rng: &mut impl Rng, level: i32, rarity: Rarity) -> NewRecipe {
    let upgrade = *pick(rng, &UPGRADE_TYPES);
    let bonus = rarity_bonus(rarity, [10, 20, 35, 55, 80]) + (level - 1) * 10;

    NewRecipe {
        name: format!("{} {}", rarity.label(), upgrade),
        kind: ResourceKind::Upgrade,
        materials: materials(rng, level, rarity, false),
        result_name: upgrade.to_string(),
        result_quantity: 1,
        level,
        rarity,
        description: format!(
            "A {} upgrade module that enhances ship performance. Provides +{} to relevant \
             systems.",
            rarity.label().to_lowercase(),
            bonus
        ),
    }
}

fn consumable_recipe(rng: &mut impl Rng, level: i32, rarity: Rarity) -> NewRecipe {
    let consumable = *pick(rng, &CONSUMABLE_TYPES);
    let effect = rarity_bonus(rarity, [50, 100, 200, 350, 500]) + (level - 1) * 25;

    NewRecipe {
        name: format!("{} {}", rarity.label(), consumable),
        kind: ResourceKind::Consumable,
        materials: materials(rng, level, rarity, false),
        result_name: consumable.to_string(),
        result_quantity: rng.random_range(1..=5),
        level,
        rarity,
        description: format!(
            "A {} {} that provides {} points of restoration when used.",
            rarity.label().to_lowercase(),
            consumable.to_lowercase(),
            effect
        ),
    }
}

fn material_recipe(rng: &mut impl Rng, level: i32, rarity: Rarity) -> NewRecipe {
    let name = format!("Processed {} Alloy", rarity.label());

    let pool: &[&str] = match rarity {
        Rarity::Common => &BASIC_MATERIALS,
        Rarity::Uncommon | Rarity::Rare => &ADVANCED_MATERIALS,
        Rarity::Epic | Rarity::Legendary => &RARE_MATERIALS,
    };
    let raw = MaterialList(vec![MaterialRequirement {
        name: format!("Raw {}", pick(rng, pool)),
        quantity: rng.random_range(5..15),
    }]);

    NewRecipe {
        name: name.clone(),
        kind: ResourceKind::Material,
        materials: raw,
        result_name: name,
        result_quantity: rng.random_range(1..=3),
        level,
        rarity,
        description: format!(
            "A refined {} alloy suitable for advanced crafting projects. Higher purity \
             materials yield better results.",
            rarity.label().to_lowercase()
        ),
    }
}

fn materials(rng: &mut impl Rng, level: i32, rarity: Rarity, weapon: bool) -> MaterialList {
    let mut materials = vec![MaterialRequirement {
        name: pick(rng, &BASIC_MATERIALS).to_string(),
        quantity: rng.random_range(1..=5),
    }];

    if level >= 2 {
        materials.push(MaterialRequirement {
            name: pick(rng, &ADVANCED_MATERIALS).to_string(),
            quantity: rng.random_range(1..=3),
        });
    }
    if level >= 3 || rarity >= Rarity::Rare {
        materials.push(MaterialRequirement {
            name: pick(rng, &RARE_MATERIALS).to_string(),
            quantity: rng.random_range(1..=2),
        });
    }
    if rarity == Rarity::Legendary {
        materials.push(MaterialRequirement {
            name: pick(rng, &EXOTIC_MATERIALS).to_string(),
            quantity: 1,
        });
    }
    if weapon {
        materials.push(MaterialRequirement {
            name: pick(rng, &WEAPON_COMPONENTS).to_string(),
            quantity: 1,
        });
    }

    MaterialList(materials)
}

fn weapon_damage(level: i32, rarity: Rarity) -> i32 {
    let rarity_multiplier = match rarity {
        Rarity::Common => 1.0,
        Rarity::Uncommon => 1.2,
        Rarity::Rare => 1.5,
        Rarity::Epic => 1.8,
        Rarity::Legendary => 2.2,
    };
    (50.0 * (1.0 + (level - 1) as f64 * 0.2) * rarity_multiplier).floor() as i32
}

fn rarity_bonus(rarity: Rarity, table: [i32; 5]) -> i32 {
    table[rarity as usize]
}
