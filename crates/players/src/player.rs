use serde::{Deserialize, Serialize};

use roster_core::Profile;

use crate::person::Person;

/// Player record: a person extended with a roster level.
///
/// Behaves as a [`Person`] wherever the [`Profile`] contract is expected;
/// the shared accessors delegate to the embedded base record, so they return
/// the same values a standalone person with the same name/age would.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    person: Person,
    level: i32,
}

impl Player {
    /// Create a player record.
    ///
    /// Base fields go through [`Person::new`] unchanged; `level` is stored as
    /// given. Total, like the base constructor.
    pub fn new(name: impl Into<String>, age: i32, level: i32) -> Self {
        Self {
            person: Person::new(name, age),
            level,
        }
    }

    /// Returns the player's level.
    pub fn level(&self) -> i32 {
        self.level
    }

    /// Borrows the embedded base record.
    pub fn person(&self) -> &Person {
        &self.person
    }
}

impl Profile for Player {
    fn name(&self) -> &str {
        self.person.name()
    }

    fn age(&self) -> i32 {
        self.person.age()
    }
}

/// Consume a player, keeping only its base identity record.
impl From<Player> for Person {
    fn from(player: Player) -> Self {
        player.person
    }
}
