//! Core type definitions used throughout the codebase

/// Plan identifier, assigned sequentially by the simulation
pub type PlanId = u32;

/// Simulation tick counter (one tick = one step of every plan)
pub type Tick = u64;
