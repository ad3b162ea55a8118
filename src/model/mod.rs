//! Domain value types that are not persisted rows: static balancing
//! tables and the in-memory market catalog.

pub mod market;
pub mod tiers;
