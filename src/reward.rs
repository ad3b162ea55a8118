//! Payout calculation for exploration, combat and level-ups.
//!
//! Pure over an injected [`Rng`], so every caller can seed outcomes in
//! tests. Persistence of the resulting [`Reward`] list is the services'
//! concern.

use entity::types::{ExplorationKind, Reward};
use rand::Rng;

const EXPLORATION_MATERIALS: [&str; 4] = ["Iron Ore", "Silicon", "Carbon Fiber", "Aluminum"];
const RARE_FINDS: [&str; 3] = ["Energy Crystal", "Rare Metals", "Quantum Fragment"];
const HUNT_MATERIALS: [&str; 4] =
    ["Organic Compounds", "Protein Synthesis", "Biomass", "Genetic Samples"];
const ARTIFACTS: [&str; 6] = [
    "Ancient Data Core",
    "Alien Technology Fragment",
    "Quantum Artifact",
    "Temporal Resonator",
    "Dimensional Key",
    "Psionic Crystal",
];
const CATCHES: [&str; 7] = [
    "Space Plankton",
    "Quantum Fish",
    "Void Eel",
    "Stellar Salmon",
    "Nebula Crab",
    "Cosmic Shrimp",
    "Dark Matter Whale",
];
const COMBAT_MATERIALS: [&str; 4] =
    ["Scrap Metal", "Damaged Electronics", "Weapon Parts", "Armor Fragments"];

fn pick<'a>(rng: &mut impl Rng, items: &'a [&'static str]) -> &'a str {
    items[rng.random_range(0..items.len())]
}

/// Payout for a successful expedition. Sensors above 50 sweeten
/// exploration and artifact finds.
pub fn exploration_rewards(
    rng: &mut impl Rng,
    kind: ExplorationKind,
    user_level: i32,
    sensors: i32,
) -> Vec<Reward> {
    let level_multiplier = 1.0 + (user_level - 1) as f64 * 0.1;
    let sensor_multiplier = 1.0 + (sensors - 50) as f64 * 0.005;

    match kind {
        ExplorationKind::Exploration => {
            let total = level_multiplier * sensor_multiplier;
            let mut rewards = vec![Reward::Credits {
                label: "Exploration Data".to_string(),
                amount: ((30.0 + rng.random::<f64>() * 70.0) * total).floor() as i32,
            }];

            let quantity =
                ((2.0 + rng.random::<f64>() * 4.0) * level_multiplier).floor() as i32;
            rewards.push(Reward::Material {
                name: pick(rng, &EXPLORATION_MATERIALS).to_string(),
                quantity,
                value: quantity * 5,
            });

            if rng.random::<f64>() < 0.3 * sensor_multiplier {
                rewards.push(Reward::Artifact {
                    name: pick(rng, &RARE_FINDS).to_string(),
                    value: (100.0 * total).floor() as i32,
                });
            }
            rewards
        }
        ExplorationKind::Hunting => {
            let mut rewards = vec![Reward::Credits {
                label: "Bounty Payment".to_string(),
                amount: ((40.0 + rng.random::<f64>() * 80.0) * level_multiplier).floor() as i32,
            }];

            let quantity =
                ((1.0 + rng.random::<f64>() * 3.0) * level_multiplier).floor() as i32;
            rewards.push(Reward::Material {
                name: pick(rng, &HUNT_MATERIALS).to_string(),
                quantity,
                value: quantity * 15,
            });

            if rng.random::<f64>() < 0.2 {
                rewards.push(Reward::Artifact {
                    name: "Rare Trophy".to_string(),
                    value: (200.0 * level_multiplier).floor() as i32,
                });
            }
            rewards
        }
        ExplorationKind::ArtifactSearch => {
            if rng.random::<f64>() < 0.6 {
                let total = level_multiplier * sensor_multiplier;
                vec![Reward::Artifact {
                    name: pick(rng, &ARTIFACTS).to_string(),
                    value: ((150.0 + rng.random::<f64>() * 350.0) * total).floor() as i32,
                }]
            } else {
                vec![Reward::Credits {
                    label: "Archaeological Survey Fee".to_string(),
                    amount: ((25.0 + rng.random::<f64>() * 50.0) * level_multiplier).floor()
                        as i32,
                }]
            }
        }
        ExplorationKind::Fishing => {
            let quantity =
                ((1.0 + rng.random::<f64>() * 2.0) * level_multiplier).floor() as i32;
            let unit_value =
                ((20.0 + rng.random::<f64>() * 30.0) * level_multiplier).floor() as i32;

            vec![
                Reward::Material {
                    name: pick(rng, &CATCHES).to_string(),
                    quantity,
                    value: unit_value * quantity,
                },
                Reward::Credits {
                    label: "Fishing License Fee".to_string(),
                    amount: ((15.0 + rng.random::<f64>() * 25.0) * level_multiplier).floor()
                        as i32,
                },
            ]
        }
    }
}

/// Fixed consolation payout for a failed expedition.
pub fn salvage_reward(rng: &mut impl Rng) -> Vec<Reward> {
    vec![Reward::Credits {
        label: "Salvage".to_string(),
        amount: rng.random_range(10..30),
    }]
}

/// Payout for a PvE victory: combat pay always, materials by enemy
/// difficulty, a 20% nexium chance.
pub fn combat_rewards(rng: &mut impl Rng, enemy_difficulty: i32, user_level: i32) -> Vec<Reward> {
    let difficulty_multiplier = 1.0 + enemy_difficulty as f64 * 0.2;
    let level_multiplier = 1.0 + (user_level - 1) as f64 * 0.05;

    let mut rewards = vec![Reward::Credits {
        label: "Combat Pay".to_string(),
        amount: ((50.0 + rng.random::<f64>() * 100.0) * difficulty_multiplier * level_multiplier)
            .floor() as i32,
    }];

    let material_chance = (0.3 + enemy_difficulty as f64 * 0.1).min(0.8);
    if rng.random::<f64>() < material_chance {
        let total = difficulty_multiplier * level_multiplier;
        for _ in 0..rng.random_range(1..=2) {
            let quantity = ((1.0 + rng.random::<f64>() * 2.0) * total).floor() as i32;
            rewards.push(Reward::Material {
                name: pick(rng, &COMBAT_MATERIALS).to_string(),
                quantity,
                value: quantity * 8,
            });
        }
    }

    if rng.random::<f64>() < 0.2 {
        rewards.push(Reward::Nexium {
            label: "Nexium Crystal".to_string(),
            amount: ((1.0 + rng.random::<f64>() * 3.0) * difficulty_multiplier).floor() as i32,
        });
    }

    rewards
}

/// Payout granted when a commander reaches `level`: scaling credits,
/// nexium every 5 levels, one-off milestone items.
pub fn level_up_rewards(rng: &mut impl Rng, level: i32) -> Vec<Reward> {
    let mut rewards = vec![Reward::Credits {
        label: "Level Up Bonus".to_string(),
        amount: level * 100 + rng.random_range(0..(level * 50).max(1)),
    }];

    if level % 5 == 0 {
        rewards.push(Reward::Nexium {
            label: "Milestone Nexium".to_string(),
            amount: level / 5 + rng.random_range(0..3),
        });
    }

    match level {
        10 => rewards.push(Reward::Component {
            name: "Advanced Navigation System".to_string(),
            value: 500,
        }),
        20 => rewards.push(Reward::Upgrade {
            name: "Elite Pilot License".to_string(),
            value: 1000,
        }),
        50 => rewards.push(Reward::Artifact {
            name: "Commander's Insignia".to_string(),
            value: 5000,
        }),
        _ => {}
    }

    rewards
}

#[cfg(test)]
mod tests {
    use entity::types::{ExplorationKind, Reward};
    use rand::{rngs::StdRng, SeedableRng};

    use super::{combat_rewards, exploration_rewards, level_up_rewards, salvage_reward};

    fn credits(rewards: &[Reward]) -> i32 {
        rewards
            .iter()
            .filter_map(|r| match r {
                Reward::Credits { amount, .. } => Some(*amount),
                _ => None,
            })
            .sum()
    }

    #[test]
    fn test_exploration_always_pays_credits_and_materials() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let rewards = exploration_rewards(&mut rng, ExplorationKind::Exploration, 3, 60);
            assert!(rewards.len() >= 2);
            assert!(matches!(rewards[0], Reward::Credits { .. }));
            assert!(matches!(rewards[1], Reward::Material { .. }));
        }
    }

    #[test]
    fn test_material_value_is_quantity_scaled() {
        let mut rng = StdRng::seed_from_u64(1);
        let rewards = exploration_rewards(&mut rng, ExplorationKind::Exploration, 1, 50);
        let Reward::Material { quantity, value, .. } = &rewards[1] else {
            panic!("expected a material payout");
        };
        assert_eq!(*value, quantity * 5);
    }

    #[test]
    fn test_artifact_search_yields_one_reward() {
        let mut rng = StdRng::seed_from_u64(2);
        for _ in 0..50 {
            let rewards = exploration_rewards(&mut rng, ExplorationKind::ArtifactSearch, 5, 80);
            assert_eq!(rewards.len(), 1);
            assert!(matches!(
                rewards[0],
                Reward::Artifact { .. } | Reward::Credits { .. }
            ));
        }
    }

    #[test]
    fn test_salvage_band() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let amount = credits(&salvage_reward(&mut rng));
            assert!((10..30).contains(&amount));
        }
    }

    #[test]
    fn test_combat_pay_scales_with_difficulty() {
        let mut rng = StdRng::seed_from_u64(4);

        // Difficulty 5 at the same level can never pay below the
        // difficulty-1 floor times its multiplier gap.
        for _ in 0..50 {
            let low = credits(&combat_rewards(&mut rng, 1, 1));
            assert!((60..=181).contains(&low), "difficulty 1 payout {low}");

            let high = credits(&combat_rewards(&mut rng, 5, 1));
            assert!((100..=301).contains(&high), "difficulty 5 payout {high}");
        }
    }

    #[test]
    fn test_level_up_milestones() {
        let mut rng = StdRng::seed_from_u64(5);

        let plain = level_up_rewards(&mut rng, 3);
        assert_eq!(plain.len(), 1);

        let fifth = level_up_rewards(&mut rng, 5);
        assert!(fifth.iter().any(|r| matches!(r, Reward::Nexium { .. })));

        let tenth = level_up_rewards(&mut rng, 10);
        assert!(tenth.iter().any(|r| matches!(r, Reward::Component { .. })));

        let twentieth = level_up_rewards(&mut rng, 20);
        assert!(twentieth.iter().any(|r| matches!(r, Reward::Upgrade { .. })));

        let fiftieth = level_up_rewards(&mut rng, 50);
        assert!(fiftieth
            .iter()
            .any(|r| matches!(r, Reward::Artifact { value: 5000, .. })));
    }

    #[test]
    fn test_level_up_credit_floor() {
        let mut rng = StdRng::seed_from_u64(6);
        for level in 1..=30 {
            let amount = credits(&level_up_rewards(&mut rng, level));
            assert!(amount >= level * 100);
            assert!(amount < level * 100 + level * 50);
        }
    }
}
