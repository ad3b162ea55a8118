//! The rules engine proper.
//!
//! Each service borrows the shared [`sea_orm::DatabaseConnection`] and
//! wraps every multi-step mutation in a transaction, so a failed
//! precondition check never leaves partial state behind. Randomness is
//! always an injected [`rand::Rng`], never a global source.

pub mod combat;
pub mod economy;
pub mod exploration;
pub mod game;
pub mod guild;
pub mod progression;
