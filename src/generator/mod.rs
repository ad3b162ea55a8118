//! Procedural content generators.
//!
//! Pure functions over an injected random source: names, sector surveys,
//! enemies, planets, creatures, lore entries, and crafting recipes. No
//! generator touches persistent state.

pub mod creature;
pub mod enemy;
pub mod lore;
pub mod name;
pub mod planet;
pub mod recipe;
pub mod sector;

use rand::Rng;

/// Uniform pick from a non-empty static table.
fn pick<'a, T>(rng: &mut impl Rng, items: &'a [T]) -> &'a T {
    &items[rng.random_range(0..items.len())]
}
