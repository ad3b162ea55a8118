//! Name tables for ships, planets, aliens, stations, and crews.

use rand::Rng;

use super::pick;

const SPACE_PREFIXES: [&str; 16] = [
    "Astro", "Cosmic", "Galactic", "Nebula", "Stellar", "Void", "Quantum", "Nova", "Plasma",
    "Ion", "Hyper", "Nano", "Mega", "Ultra", "Cyber", "Neo",
];

const SPACE_SUFFIXES: [&str; 15] = [
    "Prime", "Core", "Matrix", "Nexus", "Forge", "Gate", "Haven", "Station", "Base", "Outpost",
    "Colony", "Expanse", "Sector", "System", "Cluster",
];

const SHIP_NAMES: [&str; 22] = [
    "Dagger", "Falcon", "Thunder", "Lightning", "Phoenix", "Eagle", "Hawk", "Raven", "Viper",
    "Cobra", "Serpent", "Dragon", "Wolf", "Lion", "Tiger", "Shark", "Storm", "Tempest",
    "Hurricane", "Typhoon", "Cyclone", "Blizzard",
];

const ALIEN_SYLLABLES: [&str; 16] = [
    "Zyx", "Keth", "Varn", "Thex", "Quin", "Raze", "Blyx", "Nox", "Zara", "Xel", "Vex", "Trix",
    "Syn", "Ryx", "Pex", "Nyx",
];

const ALIEN_ENDINGS: [&str; 6] = ["ar", "on", "ix", "ul", "en", "ak"];

const PLANET_ROOTS: [&str; 15] = [
    "Terra", "Aqua", "Ignis", "Glacies", "Ventus", "Lux", "Umbra", "Crysta", "Magna", "Silva",
    "Desert", "Ocean", "Arctic", "Volcanic", "Gas",
];

const CREW_RANKS: [&str; 12] = [
    "Commander", "Captain", "Admiral", "Colonel", "Major", "Pilot", "Navigator", "Engineer",
    "Medic", "Gunner", "Scout", "Operative",
];

pub fn ship_name(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(rng, &SPACE_PREFIXES), pick(rng, &SHIP_NAMES))
}

pub fn planet_name(rng: &mut impl Rng) -> String {
    let letters: String = (0..2)
        .map(|_| char::from(b'A' + rng.random_range(0..26)))
        .collect();
    format!(
        "{}-{}-{}",
        pick(rng, &PLANET_ROOTS),
        letters,
        rng.random_range(1..=9999)
    )
}

pub fn alien_name(rng: &mut impl Rng) -> String {
    format!(
        "{}{}{}",
        pick(rng, &ALIEN_SYLLABLES),
        pick(rng, &ALIEN_SYLLABLES).to_lowercase(),
        pick(rng, &ALIEN_ENDINGS)
    )
}

pub fn station_name(rng: &mut impl Rng) -> String {
    format!(
        "{} {} {}",
        pick(rng, &SPACE_PREFIXES),
        pick(rng, &SPACE_SUFFIXES),
        rng.random_range(1..=99)
    )
}

pub fn generic_name(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(rng, &SPACE_PREFIXES), pick(rng, &SPACE_SUFFIXES))
}

/// Two letters and a number, used to individualize new hulls.
pub fn callsign(rng: &mut impl Rng) -> String {
    let letters: String = (0..2)
        .map(|_| char::from(b'A' + rng.random_range(0..26)))
        .collect();
    format!("{}-{}", letters, rng.random_range(1..=999))
}

pub fn crew_name(rng: &mut impl Rng) -> String {
    format!("{} {}", pick(rng, &CREW_RANKS), alien_name(rng))
}
