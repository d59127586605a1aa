//! Selection policies - decide which facility type a plan builds next
//!
//! The policies form a closed set of tagged variants rather than an open
//! trait hierarchy: every variant is a small value whose state (rotation
//! cursor or running totals) lives inline, so cloning a policy is a deep,
//! independent copy for free.
//!
//! All policies are deterministic given their state and the catalog order.
//! Selection never panics; an empty catalog (or, for the category-filtered
//! policies, a catalog with no matching entry) is a recoverable error that
//! stalls construction for the tick.

use crate::core::error::{Result, SimError};
use crate::facility::{FacilityCategory, FacilityType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Strategy for picking the next facility type out of the shared catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionPolicy {
    /// Rotate through the whole catalog in order
    Naive { last_index: Option<usize> },
    /// Pick the entry that keeps the three running totals closest together
    Balanced {
        life_quality: i32,
        economy: i32,
        environment: i32,
    },
    /// Rotate through the catalog, skipping non-economy entries
    Economy { last_index: Option<usize> },
    /// Rotate through the catalog, skipping non-environment entries
    Sustainability { last_index: Option<usize> },
}

impl SelectionPolicy {
    pub fn naive() -> Self {
        SelectionPolicy::Naive { last_index: None }
    }

    /// Balanced policy starting from the given running totals
    ///
    /// Callers switching a live plan to this policy seed it with the plan's
    /// current scores plus all under-construction contributions.
    pub fn balanced(life_quality: i32, economy: i32, environment: i32) -> Self {
        SelectionPolicy::Balanced {
            life_quality,
            economy,
            environment,
        }
    }

    pub fn economy() -> Self {
        SelectionPolicy::Economy { last_index: None }
    }

    pub fn sustainability() -> Self {
        SelectionPolicy::Sustainability { last_index: None }
    }

    /// Build a zero-seeded policy from its short code (nve/bal/eco/sus)
    pub fn from_code(code: &str) -> Result<Self> {
        match code {
            "nve" => Ok(Self::naive()),
            "bal" => Ok(Self::balanced(0, 0, 0)),
            "eco" => Ok(Self::economy()),
            "sus" => Ok(Self::sustainability()),
            other => Err(SimError::UnknownPolicy(other.to_string())),
        }
    }

    /// Short code identifying the policy kind
    pub fn code(&self) -> &'static str {
        match self {
            SelectionPolicy::Naive { .. } => "nve",
            SelectionPolicy::Balanced { .. } => "bal",
            SelectionPolicy::Economy { .. } => "eco",
            SelectionPolicy::Sustainability { .. } => "sus",
        }
    }

    /// Pick the next facility type from the catalog
    ///
    /// Returns a value snapshot of the chosen entry and commits the decision
    /// into the policy's internal state, so the next call continues from it.
    pub fn select_facility(&mut self, catalog: &[FacilityType]) -> Result<FacilityType> {
        if catalog.is_empty() {
            return Err(SimError::EmptyCatalog);
        }

        match self {
            SelectionPolicy::Naive { last_index } => {
                let next = last_index.map_or(0, |i| i + 1) % catalog.len();
                *last_index = Some(next);
                Ok(catalog[next].clone())
            }
            SelectionPolicy::Economy { last_index } => {
                rotate_matching(last_index, catalog, FacilityCategory::Economy)
            }
            SelectionPolicy::Sustainability { last_index } => {
                rotate_matching(last_index, catalog, FacilityCategory::Environment)
            }
            SelectionPolicy::Balanced {
                life_quality,
                economy,
                environment,
            } => {
                // Full scan; first encountered minimum wins (stable in
                // catalog order).
                let mut best_index = 0;
                let mut best_spread = i32::MAX;
                for (index, entry) in catalog.iter().enumerate() {
                    let spread = score_spread(
                        *life_quality + entry.life_quality_score,
                        *economy + entry.economy_score,
                        *environment + entry.environment_score,
                    );
                    if spread < best_spread {
                        best_spread = spread;
                        best_index = index;
                    }
                }

                let chosen = &catalog[best_index];
                *life_quality += chosen.life_quality_score;
                *economy += chosen.economy_score;
                *environment += chosen.environment_score;
                Ok(chosen.clone())
            }
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rotate past the cursor until an entry of the wanted category turns up
fn rotate_matching(
    last_index: &mut Option<usize>,
    catalog: &[FacilityType],
    category: FacilityCategory,
) -> Result<FacilityType> {
    let start = last_index.map_or(0, |i| i + 1);
    for offset in 0..catalog.len() {
        let index = (start + offset) % catalog.len();
        if catalog[index].category == category {
            *last_index = Some(index);
            return Ok(catalog[index].clone());
        }
    }
    Err(SimError::NoMatchingFacility(category))
}

fn score_spread(life_quality: i32, economy: i32, environment: i32) -> i32 {
    let max = life_quality.max(economy).max(environment);
    let min = life_quality.min(economy).min(environment);
    max - min
}
