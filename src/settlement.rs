//! Settlements - the immutable sites that plans rebuild
//!
//! A settlement is a name plus a type; the type fixes how many facilities
//! can be under construction at once.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of settlement, determining construction capacity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementType {
    Village,
    City,
    Metropolis,
}

impl SettlementType {
    /// Number of facilities that may be under construction at the same time
    pub fn capacity(&self) -> usize {
        match self {
            SettlementType::Village => 1,
            SettlementType::City => 2,
            SettlementType::Metropolis => 3,
        }
    }

    /// Decode the numeric form used by the command grammar (0/1/2)
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(SettlementType::Village),
            1 => Some(SettlementType::City),
            2 => Some(SettlementType::Metropolis),
            _ => None,
        }
    }

    pub fn code(&self) -> u32 {
        match self {
            SettlementType::Village => 0,
            SettlementType::City => 1,
            SettlementType::Metropolis => 2,
        }
    }
}

impl fmt::Display for SettlementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SettlementType::Village => "Village",
            SettlementType::City => "City",
            SettlementType::Metropolis => "Metropolis",
        };
        write!(f, "{}", label)
    }
}

/// A settlement: unique name plus type. Immutable after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    name: String,
    settlement_type: SettlementType,
}

impl Settlement {
    pub fn new(name: impl Into<String>, settlement_type: SettlementType) -> Self {
        Self {
            name: name.into(),
            settlement_type,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn settlement_type(&self) -> SettlementType {
        self.settlement_type
    }

    /// Construction capacity of this settlement
    pub fn capacity(&self) -> usize {
        self.settlement_type.capacity()
    }
}

impl fmt::Display for Settlement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}, Type: {}", self.name, self.settlement_type)
    }
}
