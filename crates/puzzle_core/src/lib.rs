//! Mate-in-N puzzle trainer core
//!
//! This crate provides:
//! - The static puzzle catalog and loaders for user puzzle packs
//! - Hint accounting and the star rating derived from it
//! - The puzzle session controller that turns board interactions into
//!   moves, detects solved and failed attempts, and walks the catalog
//!
//! Front ends (GUI, terminal) feed interaction events in and drain
//! [`SessionEvent`]s out; the rules engine sits behind [`RulesEngine`].

pub mod catalog;
pub mod config;
pub mod engine;
pub mod error;
pub mod scoring;
pub mod session;

pub use catalog::*;
pub use config::TrainerConfig;
pub use engine::*;
pub use error::PuzzleError;
pub use scoring::*;
pub use session::*;

#[cfg(test)]
mod config_tests;
