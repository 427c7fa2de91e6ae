//! Kani arbitrary implementations.
//!
//! Only the starting player is generated here; every state under verification is
//! reached through the engine, never assembled field by field.

#[cfg(kani)]
use super::Player;

#[cfg(kani)]
impl kani::Arbitrary for Player {
    fn any() -> Self {
        if kani::any() { Player::X } else { Player::O }
    }
}
