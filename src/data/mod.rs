//! Persistence gateway: one repository per entity.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so that the
//! same accessor works against a plain connection or a transaction; every
//! multi-step service mutation runs them inside a transaction.

pub mod alliance;
pub mod combat;
pub mod exploration;
pub mod guild;
pub mod market;
pub mod recipe;
pub mod resource;
pub mod ship;
pub mod user;
