//! PvE enemy generation from a fixed, difficulty-tiered template table.

use rand::Rng;

use super::pick;

struct EnemyTemplate {
    name: &'static str,
    weapons: i32,
    difficulty: i32,
}

const TEMPLATES: [EnemyTemplate; 6] = [
    EnemyTemplate { name: "Space Pirate", weapons: 2, difficulty: 1 },
    EnemyTemplate { name: "Rogue Miner", weapons: 1, difficulty: 1 },
    EnemyTemplate { name: "Alien Patrol", weapons: 3, difficulty: 2 },
    EnemyTemplate { name: "Void Hunter", weapons: 4, difficulty: 3 },
    EnemyTemplate { name: "Quantum Specter", weapons: 2, difficulty: 4 },
    EnemyTemplate { name: "Dark Fleet Destroyer", weapons: 6, difficulty: 5 },
];

/// A generated opponent, stats already scaled to the player's level.
#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub name: String,
    pub weapons: i32,
    pub difficulty: i32,
    pub power: i32,
    pub health: i32,
}

/// Maximum template difficulty a commander of this level can meet.
pub fn difficulty_cap(player_level: i32) -> i32 {
    (player_level / 5 + 1).min(5)
}

/// Picks an enemy for the encounter.
///
/// With no requested name, draws uniformly from the templates at or
/// below the player's difficulty cap. A requested name matches by
/// case-insensitive substring and falls back to the first template.
pub fn generate(rng: &mut impl Rng, requested: Option<&str>, player_level: i32) -> Enemy {
    let template = match requested {
        None => {
            let cap = difficulty_cap(player_level);
            let eligible: Vec<&EnemyTemplate> =
                TEMPLATES.iter().filter(|t| t.difficulty <= cap).collect();
            *pick(rng, &eligible)
        }
        Some(name) => {
            let wanted = name.to_lowercase();
            TEMPLATES
                .iter()
                .find(|t| t.name.to_lowercase().contains(&wanted))
                .unwrap_or(&TEMPLATES[0])
        }
    };

    let multiplier = 1.0 + (player_level - 1) as f64 * 0.1;

    Enemy {
        name: template.name.to_string(),
        weapons: ((template.weapons as f64) * multiplier).floor() as i32,
        difficulty: template.difficulty,
        power: (((template.weapons * 50 + template.difficulty * 100) as f64) * multiplier).floor()
            as i32,
        health: (((template.difficulty * 80 + 100) as f64) * multiplier).floor() as i32,
    }
}
