//! The NPC market catalog.
//!
//! Owned state with an injected clock and random source: prices drift on
//! a lazy refresh performed at the start of any market read, never on a
//! background timer.

use chrono::{Duration, NaiveDateTime};
use rand::Rng;

use entity::types::{Rarity, ResourceKind};

#[derive(Debug, Clone, PartialEq)]
pub struct MarketItem {
    pub name: String,
    pub kind: ResourceKind,
    pub price: i32,
    pub availability: i32,
    pub rarity: Rarity,
    pub description: String,
}

pub struct Market {
    items: Vec<MarketItem>,
    last_refresh: NaiveDateTime,
}

impl Market {
    /// Hourly price drift.
    const REFRESH_INTERVAL: Duration = Duration::hours(1);

    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            items: seed_catalog(),
            last_refresh: now,
        }
    }

    /// Current catalog, refreshed first if the last refresh is more than
    /// an hour old. Prices drift by up to +/-15%; availability is nudged
    /// by -5..=+5 and clamped at zero.
    pub fn items(&mut self, now: NaiveDateTime, rng: &mut impl Rng) -> &[MarketItem] {
        self.refresh_if_stale(now, rng);
        &self.items
    }

    pub fn find(&self, name: &str) -> Option<&MarketItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Removes `quantity` units from a listing's availability. The caller
    /// must have checked availability beforehand.
    pub fn take(&mut self, name: &str, quantity: i32) {
        if let Some(item) = self.items.iter_mut().find(|item| item.name == name) {
            item.availability = (item.availability - quantity).max(0);
        }
    }

    fn refresh_if_stale(&mut self, now: NaiveDateTime, rng: &mut impl Rng) {
        if now - self.last_refresh <= Self::REFRESH_INTERVAL {
            return;
        }

        for item in &mut self.items {
            let drift = (rng.random::<f64>() - 0.5) * 0.3;
            item.price = ((item.price as f64) * (1.0 + drift)).floor() as i32;
            item.availability = (item.availability + rng.random_range(-5..=5)).max(0);
        }
        self.last_refresh = now;
    }
}

fn seed_catalog() -> Vec<MarketItem> {
    vec![
        MarketItem {
            name: "Quantum Core".to_string(),
            kind: ResourceKind::Component,
            price: 2500,
            availability: 10,
            rarity: Rarity::Rare,
            description: "Advanced quantum processing unit".to_string(),
        },
        MarketItem {
            name: "Nexium Crystal".to_string(),
            kind: ResourceKind::Material,
            price: 180,
            availability: 50,
            rarity: Rarity::Uncommon,
            description: "Raw nexium crystal ore".to_string(),
        },
        MarketItem {
            name: "Plasma Cannon".to_string(),
            kind: ResourceKind::Weapon,
            price: 5000,
            availability: 5,
            rarity: Rarity::Epic,
            description: "High-energy plasma weapon system".to_string(),
        },
        MarketItem {
            name: "Shield Generator".to_string(),
            kind: ResourceKind::Component,
            price: 3200,
            availability: 8,
            rarity: Rarity::Rare,
            description: "Deflector shield technology".to_string(),
        },
        MarketItem {
            name: "Hyperspace Fuel".to_string(),
            kind: ResourceKind::Material,
            price: 75,
            availability: 100,
            rarity: Rarity::Common,
            description: "Standard hyperspace travel fuel".to_string(),
        },
    ]
}
