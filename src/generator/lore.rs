//! Templated codex lore: eras, species, technologies and events.

use rand::Rng;

use super::{name, pick};

const ERAS: [&str; 10] = [
    "The First Expansion",
    "Age of Discovery",
    "The Great War",
    "Time of Silence",
    "The Nexus Awakening",
    "Era of Reconstruction",
    "The Quantum Renaissance",
    "The Void Incursion",
    "The Unity Period",
    "The Current Era",
];

const TECHNOLOGIES: [&str; 10] = [
    "Quantum Tunneling",
    "Neural Interface Technology",
    "Dimensional Manipulation",
    "Time Dilation Fields",
    "Consciousness Transfer",
    "Matter Conversion",
    "Gravity Wells",
    "Plasma Forging",
    "Bioengineering",
    "AI Synthesis",
];

const ABILITIES: [&str; 9] = [
    "telepathic communication",
    "energy manipulation",
    "phase shifting",
    "precognitive abilities",
    "molecular control",
    "reality warping",
    "dimensional sight",
    "time perception",
    "quantum entanglement",
];

const CONCEPTS: [&str; 12] = [
    "honor",
    "knowledge",
    "power",
    "harmony",
    "survival",
    "transcendence",
    "unity",
    "freedom",
    "order",
    "chaos",
    "balance",
    "evolution",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoreKind {
    History,
    Legend,
    Species,
    Technology,
    Location,
    Event,
}

const KINDS: [LoreKind; 6] = [
    LoreKind::History,
    LoreKind::Legend,
    LoreKind::Species,
    LoreKind::Technology,
    LoreKind::Location,
    LoreKind::Event,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Significance {
    Minor,
    Major,
    Critical,
    Legendary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoreEntry {
    pub title: String,
    pub kind: LoreKind,
    pub content: String,
    pub era: String,
    pub significance: Significance,
    pub related_entities: Vec<String>,
    pub tags: Vec<String>,
}

pub fn generate(rng: &mut impl Rng, kind: Option<LoreKind>) -> LoreEntry {
    match kind.unwrap_or_else(|| *pick(rng, &KINDS)) {
        LoreKind::Species => species(rng),
        LoreKind::Technology => technology(rng),
        LoreKind::History => history(rng),
        LoreKind::Legend => legend(rng),
        LoreKind::Location => location(rng),
        LoreKind::Event => event(rng),
    }
}

fn species(rng: &mut impl Rng) -> LoreEntry {
    let species = name::alien_name(rng);
    let technology = *pick(rng, &TECHNOLOGIES);
    let location = name::planet_name(rng);
    let ability = *pick(rng, &ABILITIES);
    let concept = *pick(rng, &CONCEPTS);
    let era = pick(rng, &ERAS).to_string();

    let content = match rng.random_range(0..3) {
        0 => format!(
            "The ancient {species} were known for their mastery of {technology}. They built \
             great monuments across {location} before mysteriously vanishing during {era}."
        ),
        1 => format!(
            "{species} are a proud warrior race from the {location} system. Their culture \
             revolves around {concept} and they are feared throughout the galaxy for their \
             {ability}."
        ),
        _ => format!(
            "The enigmatic {species} exist primarily as incorporeal beings. They communicate \
             through {ability} and possess an innate understanding of {technology}."
        ),
    };

    LoreEntry {
        title: format!("The {species}"),
        kind: LoreKind::Species,
        content,
        era,
        significance: significance(rng),
        related_entities: vec![species, location, technology.to_string()],
        tags: vec!["alien species".into(), "civilization".into(), concept.into()],
    }
}

fn technology(rng: &mut impl Rng) -> LoreEntry {
    let technology = *pick(rng, &TECHNOLOGIES);
    let species = name::alien_name(rng);
    let location = name::planet_name(rng);
    let era = pick(rng, &ERAS).to_string();
    let concept = *pick(rng, &CONCEPTS);

    let content = match rng.random_range(0..3) {
        0 => format!(
            "The {technology} was first developed by the {species} during {era}. This \
             revolutionary advancement changed the course of galactic civilization."
        ),
        1 => format!(
            "{technology} remains one of the most mysterious inventions ever created. Found in \
             ancient {location} ruins, it operates on principles that modern science still \
             cannot fully explain."
        ),
        _ => format!(
            "The discovery of {technology} fundamentally altered how species interact with \
             {concept}."
        ),
    };

    LoreEntry {
        title: technology.to_string(),
        kind: LoreKind::Technology,
        content,
        era,
        significance: significance(rng),
        related_entities: vec![technology.to_string(), species, location],
        tags: vec!["technology".into(), "innovation".into(), "science".into()],
    }
}

fn history(rng: &mut impl Rng) -> LoreEntry {
    let era = pick(rng, &ERAS).to_string();
    let species1 = name::alien_name(rng);
    let species2 = name::alien_name(rng);
    let location = name::planet_name(rng);

    let content = match rng.random_range(0..3) {
        0 => format!(
            "During {era}, the {species1} and {species2} formed an unprecedented alliance that \
             would shape galactic politics for millennia. This union was forged in the \
             aftermath of the devastating conflict at {location}, where both species nearly \
             faced extinction."
        ),
        1 => format!(
            "{era} marked the golden age of exploration, with {species1} vessels reaching the \
             farthest corners of known space. The discovery of {location} during this period \
             led to revolutionary advances in quantum physics and interdimensional travel."
        ),
        _ => format!(
            "The fall of the {species1} Empire during {era} was swift and unexpected. \
             Historical records suggest that their overreliance on {} technology may have been \
             their downfall, though the exact cause remains disputed among scholars.",
            TECHNOLOGIES[0]
        ),
    };

    LoreEntry {
        title: format!("Chronicles of {era}"),
        kind: LoreKind::History,
        content,
        era,
        significance: Significance::Major,
        related_entities: vec![species1, species2, location],
        tags: vec!["historical".into(), "galactic events".into(), "civilization".into()],
    }
}

fn legend(rng: &mut impl Rng) -> LoreEntry {
    let hero = name::crew_name(rng);
    let artifact = format!("{} Crystal", name::ship_name(rng));
    let location = name::planet_name(rng);
    let ability = *pick(rng, &ABILITIES);

    let content = match rng.random_range(0..3) {
        0 => format!(
            "Legend speaks of {hero}, the mythical warrior who wielded the {artifact} to \
             defend {location} from an unspeakable cosmic horror. It is said that {hero} \
             possessed the rare gift of {ability}, allowing them to perceive threats across \
             multiple dimensions."
        ),
        1 => format!(
            "The tale of {hero} and the Lost Expedition to {location} has been told across \
             countless worlds. According to legend, {hero} discovered the secret of {ability} \
             within the ancient vaults beneath the surface, but at a terrible cost."
        ),
        _ => format!(
            "Few believe the stories of {hero}, the dimension-walker who supposedly used the \
             {artifact} to seal away an entity of pure chaos. The legend claims that {hero} \
             still wanders the galaxy, watching for signs of the entity's return."
        ),
    };

    LoreEntry {
        title: format!("The Legend of {hero}"),
        kind: LoreKind::Legend,
        content,
        // Legends come down from the mysterious eras.
        era: "Time of Silence".to_string(),
        significance: Significance::Legendary,
        related_entities: vec![hero, artifact, location],
        tags: vec!["mythology".into(), "heroes".into(), "artifacts".into(), "legends".into()],
    }
}

fn location(rng: &mut impl Rng) -> LoreEntry {
    let location = name::planet_name(rng);
    let species = name::alien_name(rng);
    let phenomenon = format!("{} Storms", TECHNOLOGIES[0]);

    let content = match rng.random_range(0..3) {
        0 => format!(
            "{location} is a world of perpetual twilight, where the {phenomenon} create \
             spectacular auroras that can be seen from orbit. The {species} who once \
             inhabited this world built their cities to harness the energy from these \
             phenomena, creating architectural marvels that still function centuries after \
             their disappearance."
        ),
        1 => format!(
            "The space station known as {location} serves as a neutral meeting ground for \
             diplomats from across the galaxy. Its unique position at the intersection of \
             three major hyperspace routes makes it invaluable, while its ancient {species} \
             construction techniques ensure it remains impregnable to attack."
        ),
        _ => format!(
            "{location} appears to exist in a state of temporal flux, with different regions \
             of the planet experiencing time at varying rates. Scientists theorize that the \
             {species} conducted temporal experiments here, leaving behind a legacy of \
             chronological anomalies that continue to puzzle researchers."
        ),
    };

    LoreEntry {
        title: location.clone(),
        kind: LoreKind::Location,
        content,
        era: "The Current Era".to_string(),
        significance: significance(rng),
        related_entities: vec![location, species],
        tags: vec!["locations".into(), "worlds".into(), "phenomena".into(), "mysteries".into()],
    }
}

fn event(rng: &mut impl Rng) -> LoreEntry {
    let event = format!("The {} Convergence", name::station_name(rng));
    let species = name::alien_name(rng);
    let era = pick(rng, &ERAS).to_string();
    let technology = *pick(rng, &TECHNOLOGIES);

    let content = match rng.random_range(0..3) {
        0 => format!(
            "The {event} occurred during {era} when {species} attempted to harness the power \
             of {technology}. The consequences of this event are still felt today as \
             fundamental changes to the fabric of space-time."
        ),
        1 => format!(
            "Few remember the true cause of {event}. Some say it was triggered by \
             experimental quantum technology, while others believe intervention by unknown \
             entities. What is certain is that the emergence of new forms of space travel."
        ),
        _ => format!(
            "{event} marked the beginning of {era}. The {species} archives describe it as a \
             turning point in galactic history, though many details have been lost to time."
        ),
    };

    LoreEntry {
        title: event.clone(),
        kind: LoreKind::Event,
        content,
        era,
        significance: Significance::Critical,
        related_entities: vec![event, species, technology.to_string()],
        tags: vec!["major events".into(), "galactic history".into(), "consequences".into()],
    }
}

fn significance(rng: &mut impl Rng) -> Significance {
    match rng.random::<f64>() {
        roll if roll <= 0.4 => Significance::Minor,
        roll if roll <= 0.7 => Significance::Major,
        roll if roll <= 0.9 => Significance::Critical,
        _ => Significance::Legendary,
    }
}

/// A small codex cycling through every entry kind, ordered most
/// significant first.
pub fn codex(rng: &mut impl Rng, entries: usize) -> Vec<LoreEntry> {
    let mut codex: Vec<LoreEntry> = (0..entries)
        .map(|i| generate(rng, Some(KINDS[i % KINDS.len()])))
        .collect();
    codex.sort_by(|a, b| b.significance.cmp(&a.significance));
    codex
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{codex, generate, LoreKind, Significance};

    #[test]
    fn test_requested_kind_is_honored() {
        let mut rng = StdRng::seed_from_u64(17);
        for kind in [
            LoreKind::History,
            LoreKind::Legend,
            LoreKind::Species,
            LoreKind::Technology,
            LoreKind::Location,
            LoreKind::Event,
        ] {
            let entry = generate(&mut rng, Some(kind));
            assert_eq!(entry.kind, kind);
            assert!(!entry.title.is_empty());
            assert!(!entry.content.is_empty());
            assert!(!entry.related_entities.is_empty());
        }
    }

    #[test]
    fn test_legends_are_always_legendary() {
        let mut rng = StdRng::seed_from_u64(17);
        let entry = generate(&mut rng, Some(LoreKind::Legend));
        assert_eq!(entry.significance, Significance::Legendary);
        assert_eq!(entry.era, "Time of Silence");
    }

    #[test]
    fn test_codex_sorted_by_significance() {
        let mut rng = StdRng::seed_from_u64(17);
        let codex = codex(&mut rng, 12);
        assert_eq!(codex.len(), 12);
        for pair in codex.windows(2) {
            assert!(pair[0].significance >= pair[1].significance);
        }
    }
}
