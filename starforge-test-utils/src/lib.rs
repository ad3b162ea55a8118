//! Test harness for Starforge: in-memory database setup and row factories.

pub mod fixtures;
pub mod setup;

pub use setup::TestSetup;
