//! Direction queue - buffered heading input
//!
//! Players often press two keys inside one logic cycle (e.g. Up then Left to
//! turn a corner). The queue keeps up to [`MAX_QUEUED_DIRECTIONS`] headings so
//! none of those presses are lost. The front entry is the heading used on the
//! next update; the last remaining entry is never consumed and acts as the
//! current heading when no new input arrives.

use arrayvec::ArrayVec;

use crate::types::{Direction, MAX_QUEUED_DIRECTIONS};

/// Bounded FIFO of pending headings. Stack-only, never allocates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionQueue {
    pending: ArrayVec<Direction, MAX_QUEUED_DIRECTIONS>,
}

impl DirectionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything and start over with a single heading.
    pub fn seed(&mut self, direction: Direction) {
        self.pending.clear();
        self.pending.push(direction);
    }

    /// Append a heading if there is room and it is a real turn relative to
    /// the most recently queued heading.
    ///
    /// Returns whether the heading was queued. Rejected requests leave the
    /// queue untouched.
    pub fn push(&mut self, direction: Direction) -> bool {
        if self.pending.is_full() {
            return false;
        }
        if let Some(&last) = self.pending.last() {
            if direction.is_reversal_of(last) {
                return false;
            }
        }
        self.pending.push(direction);
        true
    }

    /// Heading for the next move.
    pub fn front(&self) -> Option<Direction> {
        self.pending.first().copied()
    }

    /// Consume the front heading, unless it is the only one left.
    pub fn advance(&mut self) {
        if self.pending.len() > 1 {
            self.pending.remove(0);
        }
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn as_slice(&self) -> &[Direction] {
        &self.pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_replaces_contents() {
        let mut q = DirectionQueue::new();
        q.seed(Direction::North);
        q.push(Direction::East);
        q.seed(Direction::West);
        assert_eq!(q.as_slice(), &[Direction::West]);
    }

    #[test]
    fn test_push_rejects_same_and_opposite_of_last() {
        let mut q = DirectionQueue::new();
        q.seed(Direction::North);

        assert!(!q.push(Direction::North));
        assert!(!q.push(Direction::South));
        assert_eq!(q.as_slice(), &[Direction::North]);

        assert!(q.push(Direction::East));
        // Now compared against the pending East, not the current heading.
        assert!(!q.push(Direction::West));
        assert!(q.push(Direction::South));
        assert_eq!(
            q.as_slice(),
            &[Direction::North, Direction::East, Direction::South]
        );
    }

    #[test]
    fn test_push_respects_capacity() {
        let mut q = DirectionQueue::new();
        q.seed(Direction::North);
        assert!(q.push(Direction::East));
        assert!(q.push(Direction::North));
        assert_eq!(q.len(), MAX_QUEUED_DIRECTIONS);
        assert!(!q.push(Direction::West));
        assert_eq!(q.len(), MAX_QUEUED_DIRECTIONS);
    }

    #[test]
    fn test_push_into_empty_queue_is_accepted() {
        let mut q = DirectionQueue::new();
        assert!(q.push(Direction::South));
        assert_eq!(q.front(), Some(Direction::South));
    }

    #[test]
    fn test_advance_keeps_last_heading() {
        let mut q = DirectionQueue::new();
        q.seed(Direction::North);
        q.push(Direction::East);

        q.advance();
        assert_eq!(q.as_slice(), &[Direction::East]);

        q.advance();
        assert_eq!(q.as_slice(), &[Direction::East]);
        assert_eq!(q.front(), Some(Direction::East));
    }
}
