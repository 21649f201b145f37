//! Per-lane xorshift random streams.
//!
//! Every lane owns exactly one `i32` state slot, seeded once from the lane
//! index via [`wang_hash`](crate::hash::wang_hash). A lane only ever touches
//! its own slot, which is what makes unsynchronized parallel execution safe.

use crate::hash::wang_hash;

/// Arena of per-lane xorshift states, one slot per lane.
///
/// The arena length is fixed at construction; slots are never shared across
/// lanes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneRng {
    states: Vec<i32>,
}

impl LaneRng {
    /// Allocate `lanes` streams, seeding slot `i` with `wang_hash(i)`.
    pub fn new(lanes: usize) -> Self {
        Self {
            states: (0..lanes).map(|i| wang_hash(i as i32)).collect(),
        }
    }

    /// Number of lane streams.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// True when no streams were allocated.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Next value in `lane`'s stream.
    ///
    /// The underlying state may be negative, so the returned value lies in
    /// roughly **(-1, 1)**, not [0, 1). Programs written against this stream
    /// depend on the signed range; do not "fix" it to [0, 1) without
    /// accepting changed output.
    ///
    /// # Panics
    ///
    /// Panics if `lane` is outside the allocated streams. An out-of-range
    /// lane id is a kernel bug, not a recoverable condition.
    pub fn next(&mut self, lane: usize) -> f32 {
        let len = self.states.len();
        let state = self
            .states
            .get_mut(lane)
            .unwrap_or_else(|| panic!("lane {lane} outside the {len} allocated random streams"));
        Self::step(state)
    }

    /// Advance a single slot. Used by the kernel when handing each lane its
    /// own `&mut` slot during a parallel dispatch.
    #[inline]
    pub(crate) fn step(state: &mut i32) -> f32 {
        *state ^= *state << 13;
        *state ^= *state >> 17;
        *state ^= *state << 5;
        *state as f32 * (1.0 / i32::MAX as f32)
    }

    /// Read-only view of the raw states.
    pub fn states(&self) -> &[i32] {
        &self.states
    }

    /// Iterate over the slots mutably, in lane order.
    pub(crate) fn slots_mut(&mut self) -> std::slice::IterMut<'_, i32> {
        self.states.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_arenas_produce_identical_sequences() {
        let mut a = LaneRng::new(64);
        let mut b = LaneRng::new(64);
        for round in 0..100 {
            for lane in 0..64 {
                assert_eq!(
                    a.next(lane),
                    b.next(lane),
                    "streams diverged at round {round} lane {lane}"
                );
            }
        }
        assert_eq!(a.states(), b.states());
    }

    #[test]
    fn test_lanes_are_independent() {
        // Draining one lane must not disturb another.
        let mut a = LaneRng::new(2);
        let mut b = LaneRng::new(2);
        for _ in 0..1000 {
            a.next(0);
        }
        let expected = b.next(1);
        assert_eq!(a.next(1), expected);
    }

    #[test]
    fn test_output_range_spans_negative_and_positive() {
        let mut rng = LaneRng::new(8);
        let mut saw_negative = false;
        let mut saw_positive = false;
        for _ in 0..1000 {
            for lane in 0..8 {
                let v = rng.next(lane);
                assert!((-1.0..=1.0).contains(&v), "value {v} outside [-1, 1]");
                saw_negative |= v < 0.0;
                saw_positive |= v > 0.0;
            }
        }
        assert!(saw_negative, "xorshift stream never went negative");
        assert!(saw_positive, "xorshift stream never went positive");
    }

    #[test]
    #[should_panic(expected = "outside the 4 allocated random streams")]
    fn test_out_of_range_lane_fails_fast() {
        let mut rng = LaneRng::new(4);
        rng.next(4);
    }
}
