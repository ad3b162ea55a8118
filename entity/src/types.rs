//! Shared column types: string-backed enums and typed JSON payloads.
//!
//! Everything persisted as a JSON column is declared here as a concrete
//! type so that the rules engine can match on it exhaustively instead of
//! comparing strings.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// The six ship archetypes. Each one is biased toward a stat; the bias is
/// expressed by the tier tables in the game engine, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ShipClass {
    #[sea_orm(string_value = "scout")]
    Scout,
    #[sea_orm(string_value = "fighter")]
    Fighter,
    #[sea_orm(string_value = "freighter")]
    Freighter,
    #[sea_orm(string_value = "explorer")]
    Explorer,
    #[sea_orm(string_value = "battlecruiser")]
    Battlecruiser,
    #[sea_orm(string_value = "flagship")]
    Flagship,
}

impl ShipClass {
    pub const ALL: [ShipClass; 6] = [
        ShipClass::Scout,
        ShipClass::Fighter,
        ShipClass::Freighter,
        ShipClass::Explorer,
        ShipClass::Battlecruiser,
        ShipClass::Flagship,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "scout" => Some(Self::Scout),
            "fighter" => Some(Self::Fighter),
            "freighter" => Some(Self::Freighter),
            "explorer" => Some(Self::Explorer),
            "battlecruiser" => Some(Self::Battlecruiser),
            "flagship" => Some(Self::Flagship),
            _ => None,
        }
    }
}

/// Ordinal quality tag driving value and price multipliers.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    #[sea_orm(string_value = "common")]
    Common,
    #[sea_orm(string_value = "uncommon")]
    Uncommon,
    #[sea_orm(string_value = "rare")]
    Rare,
    #[sea_orm(string_value = "epic")]
    Epic,
    #[sea_orm(string_value = "legendary")]
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [
        Rarity::Common,
        Rarity::Uncommon,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    /// Capitalized form used in generated item names.
    pub fn label(self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    #[sea_orm(string_value = "material")]
    Material,
    #[sea_orm(string_value = "component")]
    Component,
    #[sea_orm(string_value = "artifact")]
    Artifact,
    #[sea_orm(string_value = "weapon")]
    Weapon,
    #[sea_orm(string_value = "upgrade")]
    Upgrade,
    #[sea_orm(string_value = "consumable")]
    Consumable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum GuildKind {
    #[sea_orm(string_value = "military")]
    Military,
    #[sea_orm(string_value = "trade")]
    Trade,
    #[sea_orm(string_value = "exploration")]
    Exploration,
    #[sea_orm(string_value = "research")]
    Research,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum ExplorationKind {
    #[sea_orm(string_value = "exploration")]
    Exploration,
    #[sea_orm(string_value = "hunting")]
    Hunting,
    #[sea_orm(string_value = "artifact_search")]
    ArtifactSearch,
    #[sea_orm(string_value = "fishing")]
    Fishing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
#[serde(rename_all = "snake_case")]
pub enum CombatKind {
    #[sea_orm(string_value = "pve")]
    Pve,
    #[sea_orm(string_value = "pvp")]
    Pvp,
}

/// Per-commander activity counters. Monotonically non-decreasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct UserStats {
    pub exploration: i32,
    pub combat: i32,
    pub artifacts: i32,
    pub trades: i32,
}

/// A single payout granted by the reward calculator.
///
/// Tagged so that reward application is exhaustive: adding a variant
/// forces every consumer to handle it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Reward {
    Credits { label: String, amount: i32 },
    Nexium { label: String, amount: i32 },
    Material { name: String, quantity: i32, value: i32 },
    Artifact { name: String, value: i32 },
    Component { name: String, value: i32 },
    Upgrade { name: String, value: i32 },
}

impl Reward {
    /// The rarity band a reward's unit value falls into, used when the
    /// payout is persisted as an inventory row.
    pub fn rarity_for_value(value: i32) -> Rarity {
        match value {
            v if v < 20 => Rarity::Common,
            v if v < 100 => Rarity::Uncommon,
            v if v < 300 => Rarity::Rare,
            v if v < 700 => Rarity::Epic,
            _ => Rarity::Legendary,
        }
    }
}

/// A mineral or phenomenon deposit found while surveying a sector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorDeposit {
    pub name: String,
    pub abundance: f64,
    pub extraction_difficulty: i32,
}

/// Descriptive survey of an explored sector, stored with the history row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectorSurvey {
    pub name: String,
    pub difficulty: i32,
    pub deposits: Vec<SectorDeposit>,
    pub planets: i32,
    pub hostiles: bool,
    pub phenomenon: Option<String>,
}

/// Full payload of one resolved exploration action. Append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct ExplorationOutcome {
    pub success: bool,
    pub rewards: Vec<Reward>,
    pub experience: i32,
    pub ship_bonus: f64,
    pub survey: SectorSurvey,
}

/// Full payload of one resolved combat encounter. Append-only.
///
/// `winner_id` is `None` when the PvE enemy won; damage figures are
/// rolled independently of the victory roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct CombatOutcome {
    pub winner_id: Option<i32>,
    pub attacker_damage: i32,
    pub defender_damage: i32,
    pub rewards: Vec<Reward>,
    pub experience: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialRequirement {
    pub name: String,
    pub quantity: i32,
}

/// Materials consumed by one crafting run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct MaterialList(pub Vec<MaterialRequirement>);
