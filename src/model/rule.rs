//! # Rule Records

use serde::{Deserialize, Serialize};

use super::store::Record;

/// A production rule: condition and body text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub id: u64,
    pub condition: String,
    pub body: String,
}

impl Rule {
    pub fn new(condition: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: 0,
            condition: condition.into(),
            body: body.into(),
        }
    }
}

impl Record for Rule {
    fn id(&self) -> u64 {
        self.id
    }

    fn assign_id(&mut self, id: u64) {
        self.id = id;
    }
}
