//! Sector naming and on-arrival surveys.

use rand::Rng;

use entity::types::{SectorDeposit, SectorSurvey};

use super::pick;

const PREFIXES: [&str; 10] = [
    "Alpha", "Beta", "Gamma", "Delta", "Omega", "Sigma", "Nexus", "Void", "Nova", "Stellar",
];

const SUFFIXES: [&str; 8] = [
    "Prime", "Core", "Rim", "Drift", "Gate", "Haven", "Expanse", "Cluster",
];

const DEPOSITS: [&str; 10] = [
    "Iron Ore", "Titanium", "Nexium Crystal", "Quantum Matter", "Dark Energy", "Plasma Core",
    "Crystalline Matrix", "Alien Artifact", "Rare Metals", "Energy Cells",
];

const PHENOMENA: [&str; 8] = [
    "Solar Storm", "Gravitational Anomaly", "Nebula Cloud", "Asteroid Field", "Quantum Rift",
    "Black Hole Proximity", "Wormhole", "Ion Storm",
];

/// A candidate destination offered to the player before exploring.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorCandidate {
    pub name: String,
    pub difficulty: i32,
    pub discovered: bool,
}

/// `Prefix-Suffix-N` sector designation.
pub fn sector_name(rng: &mut impl Rng) -> String {
    format!(
        "{}-{}-{}",
        pick(rng, &PREFIXES),
        pick(rng, &SUFFIXES),
        rng.random_range(1..=999)
    )
}

/// Descriptive survey captured alongside each exploration.
pub fn survey(rng: &mut impl Rng, name: &str) -> SectorSurvey {
    let deposits = (0..rng.random_range(1..=4))
        .map(|_| SectorDeposit {
            name: pick(rng, &DEPOSITS).to_string(),
            abundance: rng.random::<f64>(),
            extraction_difficulty: rng.random_range(1..=5),
        })
        .collect();

    let phenomenon = if rng.random::<f64>() > 0.6 {
        Some(pick(rng, &PHENOMENA).to_string())
    } else {
        None
    };

    SectorSurvey {
        name: name.to_string(),
        difficulty: rng.random_range(1..=5),
        deposits,
        planets: rng.random_range(1..=5),
        hostiles: rng.random::<f64>() > 0.7,
        phenomenon,
    }
}

/// Up to `min(10, level + 2)` candidate sectors, difficulty capped by
/// commander level.
pub fn available_sectors(rng: &mut impl Rng, level: i32) -> Vec<SectorCandidate> {
    let count = (level + 2).min(10).max(1);
    let difficulty_cap = level.clamp(1, 5);

    (0..count)
        .map(|_| SectorCandidate {
            name: sector_name(rng),
            difficulty: rng.random_range(1..=difficulty_cap),
            discovered: rng.random::<f64>() > 0.3,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{available_sectors, sector_name, survey};

    #[test]
    fn test_sector_name_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let name = sector_name(&mut rng);
            let parts: Vec<&str> = name.split('-').collect();
            assert_eq!(parts.len(), 3);
            assert!((1..=999).contains(&parts[2].parse::<i32>().unwrap()));
        }
    }

    #[test]
    fn test_survey_ranges() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let survey = survey(&mut rng, "Alpha-Prime-1");
            assert!((1..=5).contains(&survey.difficulty));
            assert!((1..=4).contains(&(survey.deposits.len() as i32)));
            assert!((1..=5).contains(&survey.planets));
        }
    }

    #[test]
    fn test_available_sectors_respects_level_cap() {
        let mut rng = StdRng::seed_from_u64(11);

        assert_eq!(available_sectors(&mut rng, 1).len(), 3);
        assert_eq!(available_sectors(&mut rng, 50).len(), 10);

        for sector in available_sectors(&mut rng, 2) {
            assert!((1..=2).contains(&sector.difficulty));
        }
    }
}
