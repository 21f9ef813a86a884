// Touch sampling: primary-touch filtering and the per-tick input buffer
use std::collections::VecDeque;

use crate::geometry::Point;

/// Identifier used for mouse input, which has no touch identifier of its own.
pub const POINTER_ID: i32 = -1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchPhase {
    Began,
    Moved,
    Ended,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSample {
    pub phase: TouchPhase,
    /// Canvas-relative screen position in pixels.
    pub position: Point,
}

impl TouchSample {
    pub fn began(x: f64, y: f64) -> Self {
        Self { phase: TouchPhase::Began, position: Point::new(x, y) }
    }
    pub fn moved(x: f64, y: f64) -> Self {
        Self { phase: TouchPhase::Moved, position: Point::new(x, y) }
    }
    pub fn ended(x: f64, y: f64) -> Self {
        Self { phase: TouchPhase::Ended, position: Point::new(x, y) }
    }
}

/// Locks onto the first touch that begins and ignores every other finger until it lifts.
#[derive(Default, Debug, Clone)]
pub struct PrimaryTouch {
    id: Option<i32>,
}

impl PrimaryTouch {
    pub fn accept(&mut self, id: i32, phase: TouchPhase) -> bool {
        match phase {
            TouchPhase::Began => {
                if self.id.is_some() {
                    return false;
                }
                self.id = Some(id);
                true
            }
            TouchPhase::Moved => self.id == Some(id),
            TouchPhase::Ended => {
                if self.id != Some(id) {
                    return false;
                }
                self.id = None;
                true
            }
        }
    }

    #[cfg(test)]
    pub fn active(&self) -> Option<i32> {
        self.id
    }

    pub fn clear(&mut self) {
        self.id = None;
    }
}

/// Samples collected by event listeners between two frame ticks.
#[derive(Default, Debug, Clone)]
pub struct InputQueue {
    samples: VecDeque<TouchSample>,
}

impl InputQueue {
    pub fn push(&mut self, sample: TouchSample) {
        if sample.phase == TouchPhase::Moved {
            if let Some(last) = self.samples.back_mut() {
                if last.phase == TouchPhase::Moved {
                    *last = sample;
                    return;
                }
            }
        }
        self.samples.push_back(sample);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = TouchSample> + '_ {
        self.samples.drain(..)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_finger_is_ignored_until_primary_lifts() {
        let mut p = PrimaryTouch::default();
        assert!(p.accept(4, TouchPhase::Began));
        assert!(!p.accept(7, TouchPhase::Began));
        assert!(!p.accept(7, TouchPhase::Moved));
        assert!(!p.accept(7, TouchPhase::Ended));
        assert!(p.accept(4, TouchPhase::Moved));
        assert!(p.accept(4, TouchPhase::Ended));
        assert_eq!(p.active(), None);
        assert!(p.accept(7, TouchPhase::Began));
    }

    #[test]
    fn stray_end_is_ignored() {
        let mut p = PrimaryTouch::default();
        assert!(!p.accept(POINTER_ID, TouchPhase::Ended));
        assert!(!p.accept(POINTER_ID, TouchPhase::Moved));
    }

    #[test]
    fn consecutive_moves_coalesce() {
        let mut q = InputQueue::default();
        q.push(TouchSample::began(0.0, 0.0));
        q.push(TouchSample::moved(1.0, 1.0));
        q.push(TouchSample::moved(2.0, 2.0));
        q.push(TouchSample::moved(3.0, 3.0));
        assert_eq!(q.len(), 2);
        let drained: Vec<_> = q.drain().collect();
        assert_eq!(drained[1], TouchSample::moved(3.0, 3.0));
        assert!(q.is_empty());
    }

    #[test]
    fn tap_within_one_frame_keeps_both_phases() {
        let mut q = InputQueue::default();
        q.push(TouchSample::began(5.0, 5.0));
        q.push(TouchSample::ended(5.0, 5.0));
        let phases: Vec<_> = q.drain().map(|s| s.phase).collect();
        assert_eq!(phases, vec![TouchPhase::Began, TouchPhase::Ended]);
    }
}
