//! Demo entry point: build the example player and report it.

use roster_core::Profile;
use roster_players::Player;

/// One-line description of any record behind the [`Profile`] contract.
fn describe(record: &dyn Profile) -> String {
    format!("{} (age {})", record.name(), record.age())
}

fn main() {
    roster_observability::init();

    let player = Player::new("Peter", 20, 15);

    tracing::info!(level = player.level(), "rostered {}", describe(&player));
}
