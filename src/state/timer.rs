// Deferred game-over after a successful drop, advanced by the frame tick
#[derive(Debug, Clone, Copy, PartialEq)]
struct Deadline {
    generation: u64,
    remaining_secs: f64,
}

/// What a call to [`PendingGameOver::advance`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Idle,
    Waiting,
    Fired,
    /// The deadline elapsed but belonged to an older game and was dropped.
    Stale,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingGameOver {
    deadline: Option<Deadline>,
}

impl PendingGameOver {
    /// Arms the timer unless one is already armed; the first deadline wins.
    pub fn schedule(&mut self, delay_secs: f64, generation: u64) -> bool {
        if self.deadline.is_some() {
            return false;
        }
        self.deadline = Some(Deadline {
            generation,
            remaining_secs: delay_secs.max(0.0),
        });
        true
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[cfg(test)]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    #[cfg(test)]
    pub fn remaining_secs(&self) -> Option<f64> {
        self.deadline.map(|d| d.remaining_secs)
    }

    pub fn advance(&mut self, dt_secs: f64, current_generation: u64) -> TimerEvent {
        let Some(mut d) = self.deadline else {
            return TimerEvent::Idle;
        };
        if d.generation != current_generation {
            self.deadline = None;
            return TimerEvent::Stale;
        }
        d.remaining_secs -= dt_secs.max(0.0);
        if d.remaining_secs <= 0.0 {
            self.deadline = None;
            TimerEvent::Fired
        } else {
            self.deadline = Some(d);
            TimerEvent::Waiting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_delay() {
        let mut t = PendingGameOver::default();
        assert!(t.schedule(1.0, 0));
        assert_eq!(t.advance(0.5, 0), TimerEvent::Waiting);
        assert_eq!(t.advance(0.5, 0), TimerEvent::Fired);
        assert_eq!(t.advance(0.5, 0), TimerEvent::Idle);
    }

    #[test]
    fn zero_delay_fires_on_next_advance() {
        let mut t = PendingGameOver::default();
        t.schedule(0.0, 3);
        assert_eq!(t.advance(0.0, 3), TimerEvent::Fired);
    }

    #[test]
    fn stale_generation_is_dropped() {
        let mut t = PendingGameOver::default();
        t.schedule(1.0, 0);
        assert_eq!(t.advance(2.0, 1), TimerEvent::Stale);
        assert!(!t.is_pending());
    }

    #[test]
    fn second_schedule_keeps_first_deadline() {
        let mut t = PendingGameOver::default();
        assert!(t.schedule(1.0, 0));
        t.advance(0.75, 0);
        assert!(!t.schedule(1.0, 0));
        assert_eq!(t.remaining_secs(), Some(0.25));
    }

    #[test]
    fn cancel_clears() {
        let mut t = PendingGameOver::default();
        t.schedule(1.0, 0);
        t.cancel();
        assert_eq!(t.advance(5.0, 0), TimerEvent::Idle);
    }
}
