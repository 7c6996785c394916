//! Swap animation coordination
//!
//! Entering a `Swap` step opens a [`SwapAnimation`] record that tells the
//! renderer to move two physical boxes into each other's place. The record
//! lives beside the trace, never inside it.
//!
//! Every trigger schedules one clear at `now + SWAP_CLEAR_TIMEOUT`. A clear
//! empties whatever record is current when it comes due, and clears cannot
//! be cancelled. Emptying an already empty record is harmless, so a reset
//! or a newer swap never leaves the record stuck active.

use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Delay after which a triggered swap record is cleared
///
/// Longer than the renderer's swap motion.
pub const SWAP_CLEAR_TIMEOUT: Duration = Duration::from_millis(2500);

/// Side-channel record of an in-flight exchange of two logical positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapAnimation {
    /// Distinguishes consecutive swaps of the same pair
    pub serial: u64,
    pub index1: usize,
    pub index2: usize,
    pub is_active: bool,
}

#[derive(Debug)]
pub struct SwapCoordinator {
    current: Option<SwapAnimation>,
    pending_clears: VecDeque<Instant>,
    next_serial: u64,
}

impl SwapCoordinator {
    pub fn new() -> Self {
        SwapCoordinator {
            current: None,
            pending_clears: VecDeque::new(),
            next_serial: 0,
        }
    }

    /// Open a record for `index1 ↔ index2` and schedule its clear
    pub fn trigger(&mut self, index1: usize, index2: usize, now: Instant) -> SwapAnimation {
        let animation = SwapAnimation {
            serial: self.next_serial,
            index1,
            index2,
            is_active: true,
        };
        self.next_serial += 1;
        self.current = Some(animation);
        self.pending_clears.push_back(now + SWAP_CLEAR_TIMEOUT);
        debug!(index1, index2, serial = animation.serial, "swap animation opened");
        animation
    }

    /// Run every clear that has come due; returns true if any ran
    pub fn expire(&mut self, now: Instant) -> bool {
        let mut fired = false;
        while self.pending_clears.front().is_some_and(|due| *due <= now) {
            self.pending_clears.pop_front();
            if let Some(animation) = self.current.take() {
                debug!(serial = animation.serial, "swap animation cleared");
            }
            fired = true;
        }
        fired
    }

    /// Empty the record now; already scheduled clears still run later
    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn current(&self) -> Option<&SwapAnimation> {
        self.current.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.current.is_some_and(|a| a.is_active)
    }

    /// Number of clears still scheduled
    pub fn pending(&self) -> usize {
        self.pending_clears.len()
    }
}

impl Default for SwapCoordinator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_clears_after_timeout() {
        let start = Instant::now();
        let mut swaps = SwapCoordinator::new();
        swaps.trigger(0, 1, start);

        assert!(!swaps.expire(start + Duration::from_millis(2499)));
        assert!(swaps.is_active());
        assert!(swaps.expire(start + SWAP_CLEAR_TIMEOUT));
        assert!(swaps.current().is_none());
    }

    #[test]
    fn test_earlier_clear_empties_newer_record() {
        let start = Instant::now();
        let mut swaps = SwapCoordinator::new();
        swaps.trigger(0, 1, start);
        let second = swaps.trigger(1, 2, start + Duration::from_millis(1000));
        assert_eq!(swaps.current(), Some(&second));

        swaps.expire(start + SWAP_CLEAR_TIMEOUT);
        assert!(swaps.current().is_none());
        assert_eq!(swaps.pending(), 1);

        swaps.expire(start + Duration::from_millis(3500));
        assert_eq!(swaps.pending(), 0);
    }

    #[test]
    fn test_manual_clear_keeps_schedule() {
        let start = Instant::now();
        let mut swaps = SwapCoordinator::new();
        swaps.trigger(3, 4, start);
        swaps.clear();

        assert!(!swaps.is_active());
        assert_eq!(swaps.pending(), 1);
        assert!(swaps.expire(start + SWAP_CLEAR_TIMEOUT));
        assert!(!swaps.is_active());
    }

    #[test]
    fn test_serials_distinguish_repeated_pairs() {
        let start = Instant::now();
        let mut swaps = SwapCoordinator::new();
        let a = swaps.trigger(0, 1, start);
        let b = swaps.trigger(0, 1, start);
        assert_ne!(a.serial, b.serial);
    }
}
