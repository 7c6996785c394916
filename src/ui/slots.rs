//! Box identity for the array pane
//!
//! Physical boxes are distinct from logical array positions. Each box keeps
//! the value it was created with and moves between positions when the
//! controller reports a swap, so the viewer can follow one element through
//! the whole run.
//!
//! Element values changing in place never rebuild the layout. The
//! assignment steps leading up to a swap overwrite the array before the swap
//! record opens, and the boxes must still hold the pre-swap values when
//! they start moving. The layout is rebuilt only by [`SlotLayout::reset`]
//! (new trace, controller reset), when the array length changes, or after
//! [`SlotLayout::request_resync`] once nothing is in flight.

use crate::playback::SwapAnimation;
use std::time::{Duration, Instant};

/// Time a box takes to travel to its new position
pub const SWAP_ANIMATION_DURATION: Duration = Duration::from_millis(2000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxSlot {
    /// Position the box currently occupies
    pub physical_index: usize,
    /// Value the box displays; never changes while the box exists
    pub logical_value: i64,
    pub is_animating: bool,
}

#[derive(Debug, Clone, Copy)]
struct Motion {
    box_a: usize,
    box_b: usize,
    started: Instant,
}

/// Where an animating box is drawn, as a fraction of its journey
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InFlight {
    pub from: usize,
    pub to: usize,
    pub progress: f32,
}

#[derive(Debug, Default)]
pub struct SlotLayout {
    /// Indexed by box id
    boxes: Vec<BoxSlot>,
    motion: Option<Motion>,
    last_serial: Option<u64>,
    /// Set by a non-animated jump; served once the swap record is gone
    resync_pending: bool,
}

impl SlotLayout {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put one box per value at its own position
    pub fn reset(&mut self, values: &[i64]) {
        self.boxes = values
            .iter()
            .enumerate()
            .map(|(idx, &value)| BoxSlot {
                physical_index: idx,
                logical_value: value,
                is_animating: false,
            })
            .collect();
        self.motion = None;
        self.resync_pending = false;
    }

    /// Rebuild from values at the next quiet update
    ///
    /// For moves the controller does not animate: stepping backward and
    /// jumping to a step.
    pub fn request_resync(&mut self) {
        self.resync_pending = true;
    }

    /// Per-frame update from the controller's current view
    ///
    /// `values` are the array entity's values, `swap` the controller's swap
    /// record.
    pub fn update(&mut self, values: &[i64], swap: Option<&SwapAnimation>, now: Instant) {
        if let Some(motion) = self.motion {
            if now.saturating_duration_since(motion.started) >= SWAP_ANIMATION_DURATION {
                self.commit();
            }
        }

        if self.boxes.len() != values.len() {
            self.reset(values);
        }

        match swap.filter(|s| s.is_active) {
            Some(animation) if self.last_serial != Some(animation.serial) => {
                // A newer swap finishes the one still in flight first
                if self.motion.is_some() {
                    self.commit();
                }
                self.begin(animation, now);
            }
            Some(_) => {}
            None => {
                if self.resync_pending && self.motion.is_none() {
                    self.reset(values);
                }
            }
        }
    }

    fn begin(&mut self, animation: &SwapAnimation, now: Instant) {
        self.last_serial = Some(animation.serial);
        let (Some(box_a), Some(box_b)) = (
            self.box_at(animation.index1),
            self.box_at(animation.index2),
        ) else {
            return;
        };
        self.boxes[box_a].is_animating = true;
        self.boxes[box_b].is_animating = true;
        self.motion = Some(Motion {
            box_a,
            box_b,
            started: now,
        });
    }

    /// Finish the current motion: the two boxes trade positions
    fn commit(&mut self) {
        let Some(motion) = self.motion.take() else {
            return;
        };
        let a = self.boxes[motion.box_a].physical_index;
        let b = self.boxes[motion.box_b].physical_index;
        self.boxes[motion.box_a].physical_index = b;
        self.boxes[motion.box_b].physical_index = a;
        self.boxes[motion.box_a].is_animating = false;
        self.boxes[motion.box_b].is_animating = false;
    }

    fn box_at(&self, physical_index: usize) -> Option<usize> {
        self.boxes
            .iter()
            .position(|b| b.physical_index == physical_index)
    }

    /// Boxes with their journey if they are animating
    pub fn boxes(&self, now: Instant) -> Vec<(BoxSlot, Option<InFlight>)> {
        let progress = self.motion.map(|m| {
            (now.saturating_duration_since(m.started).as_secs_f32()
                / SWAP_ANIMATION_DURATION.as_secs_f32())
            .min(1.0)
        });

        self.boxes
            .iter()
            .enumerate()
            .map(|(id, slot)| {
                let flight = match (self.motion, progress) {
                    (Some(m), Some(progress)) if id == m.box_a || id == m.box_b => {
                        let other = if id == m.box_a { m.box_b } else { m.box_a };
                        Some(InFlight {
                            from: slot.physical_index,
                            to: self.boxes[other].physical_index,
                            progress,
                        })
                    }
                    _ => None,
                };
                (*slot, flight)
            })
            .collect()
    }

    pub fn is_animating(&self) -> bool {
        self.motion.is_some()
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn swap(serial: u64, index1: usize, index2: usize) -> SwapAnimation {
        SwapAnimation {
            serial,
            index1,
            index2,
            is_active: true,
        }
    }

    fn values_left_to_right(layout: &SlotLayout, now: Instant) -> Vec<i64> {
        let mut boxes = layout.boxes(now);
        boxes.sort_by_key(|(slot, _)| slot.physical_index);
        boxes.into_iter().map(|(slot, _)| slot.logical_value).collect()
    }

    #[test]
    fn test_swap_moves_boxes_not_values() {
        let start = Instant::now();
        let mut layout = SlotLayout::new();
        layout.update(&[5, 1, 3], None, start);
        assert_eq!(values_left_to_right(&layout, start), vec![5, 1, 3]);

        let record = swap(0, 0, 1);
        layout.update(&[5, 1, 3], Some(&record), start);
        assert!(layout.is_animating());

        let mid = start + Duration::from_millis(1000);
        let flights: Vec<_> = layout.boxes(mid).into_iter().filter_map(|(_, f)| f).collect();
        assert_eq!(flights.len(), 2);
        assert!((flights[0].progress - 0.5).abs() < 1e-3);

        let done = start + SWAP_ANIMATION_DURATION;
        layout.update(&[5, 1, 3], Some(&record), done);
        assert!(!layout.is_animating());
        assert_eq!(values_left_to_right(&layout, done), vec![1, 5, 3]);

        // The box created for value 5 is still box 0, now at position 1
        assert_eq!(layout.boxes(done)[0].0.physical_index, 1);
    }

    #[test]
    fn test_in_place_writes_keep_identity() {
        let start = Instant::now();
        let mut layout = SlotLayout::new();
        layout.update(&[64, 34, 25], None, start);

        // temp-variable moves overwrite the array before the swap arrives
        layout.update(&[34, 34, 25], None, start);
        layout.update(&[34, 64, 25], None, start);
        assert_eq!(values_left_to_right(&layout, start), vec![64, 34, 25]);

        let record = swap(0, 0, 1);
        layout.update(&[34, 64, 25], Some(&record), start);
        let done = start + SWAP_ANIMATION_DURATION;
        layout.update(&[34, 64, 25], Some(&record), done);
        assert_eq!(values_left_to_right(&layout, done), vec![34, 64, 25]);

        // Record cleared: nothing to rebuild, the 64 box stays the same box
        let later = start + Duration::from_millis(2600);
        layout.update(&[34, 64, 25], None, later);
        assert_eq!(layout.boxes(later)[0].0.logical_value, 64);
        assert_eq!(layout.boxes(later)[0].0.physical_index, 1);
    }

    #[test]
    fn test_jump_resyncs_once_quiet() {
        let start = Instant::now();
        let mut layout = SlotLayout::new();
        layout.update(&[5, 1], None, start);
        let record = swap(0, 0, 1);
        layout.update(&[5, 1], Some(&record), start);

        layout.request_resync();
        let mid = start + Duration::from_millis(500);
        layout.update(&[7, 8], Some(&record), mid);
        assert!(layout.is_animating());

        let later = start + Duration::from_millis(2600);
        layout.update(&[7, 8], None, later);
        assert_eq!(values_left_to_right(&layout, later), vec![7, 8]);
        assert!(!layout.is_animating());

        // Served once; in-place writes are ignored again
        layout.update(&[8, 8], None, later);
        assert_eq!(values_left_to_right(&layout, later), vec![7, 8]);
    }

    #[test]
    fn test_length_change_rebuilds() {
        let start = Instant::now();
        let mut layout = SlotLayout::new();
        layout.update(&[5, 1], None, start);
        layout.update(&[4, 3, 2], None, start);
        assert_eq!(values_left_to_right(&layout, start), vec![4, 3, 2]);
        assert_eq!(layout.len(), 3);
    }

    #[test]
    fn test_newer_swap_commits_pending_motion() {
        let start = Instant::now();
        let mut layout = SlotLayout::new();
        layout.update(&[3, 2, 1], None, start);
        layout.update(&[3, 2, 1], Some(&swap(0, 0, 1)), start);
        layout.update(&[3, 2, 1], Some(&swap(1, 1, 2)), start + Duration::from_millis(600));

        let done = start + Duration::from_millis(2600);
        layout.update(&[2, 1, 3], Some(&swap(1, 1, 2)), done);
        assert_eq!(values_left_to_right(&layout, done), vec![2, 1, 3]);
    }

    #[test]
    fn test_reset_restores_identity() {
        let start = Instant::now();
        let mut layout = SlotLayout::new();
        layout.update(&[5, 1], None, start);
        layout.update(&[5, 1], Some(&swap(0, 0, 1)), start);
        layout.reset(&[5, 1]);

        assert!(!layout.is_animating());
        assert_eq!(layout.boxes(start)[0].0.physical_index, 0);
    }
}
