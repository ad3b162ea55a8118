//! Starforge: the rules engine for an idle space game.
//!
//! Commanders register, fly and upgrade ships, run expeditions, fight
//! NPC fleets and each other, trade on an NPC market, craft from
//! generated recipes, and pool progress through guilds. This crate
//! holds the rules and their persistence; presentation layers (bots,
//! web frontends) sit on top of the [`service`] modules.

pub mod config;
pub mod data;
pub mod error;
pub mod generator;
pub mod model;
pub mod reward;
pub mod service;
pub mod startup;
