//! Reconstruction Simulation - turn-based settlement rebuilding
//!
//! Settlements incrementally build facilities under a capacity constraint.
//! A pluggable selection policy decides which facility type each plan starts
//! next, and three accumulating scores (life quality, economy, environment)
//! track everything that becomes operational.

pub mod command;
pub mod core;
pub mod facility;
pub mod plan;
pub mod policy;
pub mod scenario;
pub mod settlement;
pub mod simulation;
