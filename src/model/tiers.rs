//! Static ship balancing tables: 6 archetypes x 4 tiers.
//!
//! This is the primary tuning surface of the game. Each class is biased
//! toward a stat (scout: sensors/speed, fighter: weapons, freighter:
//! cargo, explorer: sensors/cargo, battlecruiser: weapons/health,
//! flagship: balanced) and every tier strictly dominates the one below
//! it, at a strictly higher credit and nexium price.

use entity::types::ShipClass;

pub const MAX_TIER: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipTierSpec {
    pub variant: &'static str,
    pub health: i32,
    pub speed: i32,
    pub cargo: i32,
    pub weapons: i32,
    pub sensors: i32,
    /// Credit cost of upgrading into this tier. Zero for tier 1.
    pub cost: i32,
    /// Nexium cost of upgrading into this tier. Zero for tier 1.
    pub nexium: i32,
}

const SCOUT: [ShipTierSpec; 4] = [
    ShipTierSpec { variant: "Swiftwing", health: 100, speed: 80, cargo: 20, weapons: 1, sensors: 60, cost: 0, nexium: 0 },
    ShipTierSpec { variant: "Spectre", health: 120, speed: 90, cargo: 25, weapons: 1, sensors: 70, cost: 500, nexium: 10 },
    ShipTierSpec { variant: "Phantom", health: 140, speed: 100, cargo: 30, weapons: 2, sensors: 80, cost: 1200, nexium: 25 },
    ShipTierSpec { variant: "Celestial Whisper", health: 160, speed: 110, cargo: 35, weapons: 2, sensors: 90, cost: 2500, nexium: 50 },
];

const FIGHTER: [ShipTierSpec; 4] = [
    ShipTierSpec { variant: "Vindicator", health: 150, speed: 70, cargo: 15, weapons: 3, sensors: 40, cost: 0, nexium: 0 },
    ShipTierSpec { variant: "Gladiator", health: 180, speed: 75, cargo: 18, weapons: 4, sensors: 45, cost: 600, nexium: 15 },
    ShipTierSpec { variant: "Annihilator", health: 210, speed: 80, cargo: 21, weapons: 5, sensors: 50, cost: 1400, nexium: 30 },
    ShipTierSpec { variant: "Dominator", health: 240, speed: 85, cargo: 24, weapons: 6, sensors: 55, cost: 3000, nexium: 60 },
];

const FREIGHTER: [ShipTierSpec; 4] = [
    ShipTierSpec { variant: "Hauler", health: 200, speed: 50, cargo: 100, weapons: 1, sensors: 30, cost: 0, nexium: 0 },
    ShipTierSpec { variant: "Bulkhead", health: 240, speed: 55, cargo: 125, weapons: 1, sensors: 35, cost: 700, nexium: 20 },
    ShipTierSpec { variant: "Citadel", health: 280, speed: 60, cargo: 150, weapons: 2, sensors: 40, cost: 1600, nexium: 35 },
    ShipTierSpec { variant: "Goliath", health: 320, speed: 65, cargo: 175, weapons: 2, sensors: 45, cost: 3500, nexium: 70 },
];

const EXPLORER: [ShipTierSpec; 4] = [
    ShipTierSpec { variant: "Pathfinder", health: 120, speed: 60, cargo: 40, weapons: 2, sensors: 80, cost: 0, nexium: 0 },
    ShipTierSpec { variant: "Horizon Seeker", health: 140, speed: 65, cargo: 50, weapons: 2, sensors: 90, cost: 550, nexium: 12 },
    ShipTierSpec { variant: "Nebula Navigator", health: 160, speed: 70, cargo: 60, weapons: 3, sensors: 100, cost: 1300, nexium: 28 },
    ShipTierSpec { variant: "Event Horizon", health: 180, speed: 75, cargo: 70, weapons: 3, sensors: 110, cost: 2800, nexium: 55 },
];

const BATTLECRUISER: [ShipTierSpec; 4] = [
    ShipTierSpec { variant: "Warden", health: 300, speed: 40, cargo: 30, weapons: 5, sensors: 50, cost: 0, nexium: 0 },
    ShipTierSpec { variant: "Juggernaut", health: 360, speed: 42, cargo: 35, weapons: 6, sensors: 55, cost: 800, nexium: 18 },
    ShipTierSpec { variant: "Dreadnought", health: 420, speed: 44, cargo: 40, weapons: 7, sensors: 60, cost: 1800, nexium: 40 },
    ShipTierSpec { variant: "Behemoth", health: 480, speed: 46, cargo: 45, weapons: 8, sensors: 65, cost: 4000, nexium: 80 },
];

const FLAGSHIP: [ShipTierSpec; 4] = [
    ShipTierSpec { variant: "Sovereign", health: 250, speed: 55, cargo: 50, weapons: 4, sensors: 70, cost: 0, nexium: 0 },
    ShipTierSpec { variant: "Paragon", health: 300, speed: 58, cargo: 60, weapons: 5, sensors: 75, cost: 750, nexium: 16 },
    ShipTierSpec { variant: "Leviathan", health: 350, speed: 61, cargo: 70, weapons: 6, sensors: 80, cost: 1700, nexium: 38 },
    ShipTierSpec { variant: "Imperator", health: 400, speed: 64, cargo: 80, weapons: 7, sensors: 85, cost: 3800, nexium: 75 },
];

pub fn tiers(class: ShipClass) -> &'static [ShipTierSpec; 4] {
    match class {
        ShipClass::Scout => &SCOUT,
        ShipClass::Fighter => &FIGHTER,
        ShipClass::Freighter => &FREIGHTER,
        ShipClass::Explorer => &EXPLORER,
        ShipClass::Battlecruiser => &BATTLECRUISER,
        ShipClass::Flagship => &FLAGSHIP,
    }
}

/// Stat template for a given class and tier (1-4).
pub fn tier_spec(class: ShipClass, tier: i32) -> Option<&'static ShipTierSpec> {
    if !(1..=MAX_TIER).contains(&tier) {
        return None;
    }
    Some(&tiers(class)[(tier - 1) as usize])
}

/// Shipyard price of a new Tier-1 hull. The scout is free only through
/// registration; it cannot be purchased.
pub fn base_price(class: ShipClass) -> i32 {
    match class {
        ShipClass::Scout => 0,
        ShipClass::Fighter => 5000,
        ShipClass::Freighter => 8000,
        ShipClass::Explorer => 6000,
        ShipClass::Battlecruiser => 15000,
        ShipClass::Flagship => 25000,
    }
}
