//! Turn processing over a set of partially redacted world replicas.
//!
//! One authoritative main replica and any number of per-player
//! subordinate replicas hold independent copies of the same world.
//! Each engine operation walks the whole set and applies the change to
//! every replica that knows the affected entity.

pub mod command;
pub mod config;
pub mod container;
pub mod error;
pub mod ids;
pub mod matching;
pub mod model;
pub mod orders;
pub mod progression;
pub mod reduction;
pub mod replica;
pub mod rng;
pub mod transfer;
pub mod types;
