//! # Fact Records

use serde::{Deserialize, Serialize};

use super::store::Record;

/// A stored fact string
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fact {
    pub id: u64,
    pub fact: String,
}

impl Fact {
    /// Unsaved fact; the store assigns the id
    pub fn new(fact: impl Into<String>) -> Self {
        Self {
            id: 0,
            fact: fact.into(),
        }
    }
}

impl Record for Fact {
    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }
}

/// Wire representation of a fact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FactView {
    pub id: u64,
    pub fact: String,
}

impl From<&Fact> for FactView {
    fn from(fact: &Fact) -> Self {
        Self {
            id: fact.id,
            fact: fact.fact.clone(),
        }
    }
}

impl From<FactView> for Fact {
    fn from(view: FactView) -> Self {
        Self {
            id: view.id,
            fact: view.fact,
        }
    }
}
