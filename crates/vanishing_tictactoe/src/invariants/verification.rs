//! Kani proof harnesses for the invariant set.
//!
//! Bounded model checking over every move sequence up to the unwind limit.

#[cfg(kani)]
mod proofs {
    use crate::{FifoEviction, GameEngine, InvariantSet, Player, VanishingInvariants};

    /// Every state reached by up to eight moves satisfies the invariant set,
    /// and every accepted placement evicts FIFO.
    #[kani::proof]
    #[kani::unwind(10)]
    fn verify_invariants_over_move_sequences() {
        let starting: Player = kani::any();
        let mut engine = GameEngine::with_starting_player(starting);

        for _ in 0..8 {
            let index: u8 = kani::any();
            kani::assume(index < 12);
            let before = engine.state().clone();
            match engine.apply_move(index as usize) {
                Ok(after) => assert!(FifoEviction::holds(&before, after)),
                Err(_) => assert!(*engine.state() == before),
            }
            assert!(VanishingInvariants::check_all(engine.state()).is_ok());
        }
    }
}
