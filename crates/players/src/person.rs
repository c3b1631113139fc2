use serde::{Deserialize, Serialize};

use roster_core::Profile;

/// Base identity record: a named person with an age.
///
/// Fields are fixed at construction; the only way to observe them is through
/// the [`Profile`] accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    name: String,
    age: i32,
}

impl Person {
    /// Create a person record.
    ///
    /// Total: any name and any age are stored as given, including age 0 and
    /// negative ages (no range checking).
    pub fn new(name: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Profile for Person {
    fn name(&self) -> &str {
        &self.name
    }

    fn age(&self) -> i32 {
        self.age
    }
}
