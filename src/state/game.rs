// Per-game counters owned by the gesture controller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameState {
    pub fail_count: u32,
    pub is_over: bool,
    /// Bumped on every restart; deferred work tagged with an older value is stale.
    pub generation: u64,
}

impl GameState {
    /// Starts the next game. Counters go back to zero; the generation moves forward.
    pub fn advance(&mut self) {
        self.fail_count = 0;
        self.is_over = false;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Flips `is_over` once. Returns false if the game had already ended.
    pub fn finish(&mut self) -> bool {
        if self.is_over {
            return false;
        }
        self.is_over = true;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finish_is_one_way() {
        let mut gs = GameState::default();
        assert!(gs.finish());
        assert!(!gs.finish());
        assert!(gs.is_over);
    }

    #[test]
    fn advance_resets_counters_and_bumps_generation() {
        let mut gs = GameState {
            fail_count: 2,
            is_over: true,
            generation: 7,
        };
        gs.advance();
        assert_eq!(gs, GameState { fail_count: 0, is_over: false, generation: 8 });
    }
}
