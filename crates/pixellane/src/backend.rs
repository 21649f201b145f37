//! Parallel dispatch backends.
//!
//! The kernel hands a backend one [`LaneSlot`] per lane — the lane's output
//! pixel and its private random-stream slot — plus the lane operation. Slots
//! are disjoint by construction, so a backend may run every lane concurrently
//! without any locking. Dispatch is blocking: it returns only once all lanes
//! have completed.

use rayon::prelude::*;

/// The mutable state a single lane is allowed to touch.
///
/// Either handle may be absent: a lane whose id exceeds the output buffer
/// length has no pixel slot, and one whose id exceeds the kernel size has no
/// random stream.
#[derive(Debug)]
pub struct LaneSlot<'a> {
    pub(crate) pixel: Option<&'a mut u32>,
    pub(crate) rng: Option<&'a mut i32>,
}

/// Strategy seam between the kernel and whatever executes its lanes.
pub trait ParallelBackend: Send + Sync {
    /// Run `op` once per slot, passing each lane its id and its own slot.
    /// Must not return before every lane has completed.
    fn dispatch(&self, slots: &mut [LaneSlot<'_>], op: &(dyn Fn(usize, &mut LaneSlot<'_>) + Sync));
}

/// Default backend: data-parallel dispatch over the rayon thread pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct RayonBackend;

impl ParallelBackend for RayonBackend {
    fn dispatch(&self, slots: &mut [LaneSlot<'_>], op: &(dyn Fn(usize, &mut LaneSlot<'_>) + Sync)) {
        slots
            .par_iter_mut()
            .enumerate()
            .for_each(|(lane, slot)| op(lane, slot));
    }
}

/// Single-threaded backend, useful for tests and tiny dispatches where the
/// fork/join overhead dominates.
#[derive(Debug, Default, Clone, Copy)]
pub struct SerialBackend;

impl ParallelBackend for SerialBackend {
    fn dispatch(&self, slots: &mut [LaneSlot<'_>], op: &(dyn Fn(usize, &mut LaneSlot<'_>) + Sync)) {
        for (lane, slot) in slots.iter_mut().enumerate() {
            op(lane, slot);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slots<'a>(pixels: &'a mut [u32], states: &'a mut [i32]) -> Vec<LaneSlot<'a>> {
        pixels
            .iter_mut()
            .zip(states.iter_mut())
            .map(|(pixel, rng)| LaneSlot {
                pixel: Some(pixel),
                rng: Some(rng),
            })
            .collect()
    }

    #[test]
    fn test_rayon_backend_runs_every_lane_once() {
        let mut pixels = vec![0u32; 1024];
        let mut states = vec![0i32; 1024];
        let mut lanes = slots(&mut pixels, &mut states);
        RayonBackend.dispatch(&mut lanes, &|lane, slot| {
            if let Some(p) = slot.pixel.as_deref_mut() {
                *p += lane as u32 + 1;
            }
        });
        for (lane, value) in pixels.iter().enumerate() {
            assert_eq!(*value, lane as u32 + 1);
        }
    }

    #[test]
    fn test_serial_backend_matches_rayon() {
        let op = |lane: usize, slot: &mut LaneSlot<'_>| {
            if let Some(p) = slot.pixel.as_deref_mut() {
                *p = (lane as u32).wrapping_mul(2654435761);
            }
        };

        let mut serial_px = vec![0u32; 256];
        let mut serial_st = vec![0i32; 256];
        let mut lanes = slots(&mut serial_px, &mut serial_st);
        SerialBackend.dispatch(&mut lanes, &op);

        let mut rayon_px = vec![0u32; 256];
        let mut rayon_st = vec![0i32; 256];
        let mut lanes = slots(&mut rayon_px, &mut rayon_st);
        RayonBackend.dispatch(&mut lanes, &op);

        assert_eq!(serial_px, rayon_px);
    }
}
