//! The per-lane programming surface.
//!
//! A concrete kernel supplies exactly one entry point, [`LaneProgram::run`],
//! and builds it only from the primitives exposed on [`LaneCtx`] (plus the
//! pure helpers in [`color`](crate::color), [`math`](crate::math) and
//! [`noise`](crate::noise)). Keeping the surface this narrow is what lets a
//! [`ParallelBackend`](crate::backend::ParallelBackend) run lanes on whatever
//! execution target it likes.

use crate::kernel::IndexMapper;
use crate::noise::GradientNoise;
use crate::rng::LaneRng;

/// Read-only state shared by every lane of one `execute` call.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LaneShared {
    pub(crate) noise: GradientNoise,
    pub(crate) mapper: IndexMapper,
}

/// One lane's view of the kernel during a dispatch.
///
/// A lane owns exactly its output pixel slot and its random-stream slot;
/// everything else it can reach is immutable and shared. That disjointness
/// is the whole concurrency story: no locks are taken inside a dispatch.
#[derive(Debug)]
pub struct LaneCtx<'a> {
    pub(crate) lane: usize,
    pub(crate) pixel: Option<&'a mut u32>,
    pub(crate) rng: Option<&'a mut i32>,
    pub(crate) shared: &'a LaneShared,
}

impl LaneCtx<'_> {
    /// This lane's global id.
    pub fn lane(&self) -> usize {
        self.lane
    }

    /// This lane's `(x, y)` coordinate, from the kernel's [`IndexMapper`].
    pub fn coords(&self) -> (u32, u32) {
        self.shared.mapper.index(self.lane)
    }

    /// Next value from this lane's private random stream, roughly in
    /// **(-1, 1)** (see [`LaneRng::next`]).
    ///
    /// # Panics
    ///
    /// Panics if this lane's id is at or beyond the kernel size: such a lane
    /// has no stream, and reading a neighbor's would race.
    pub fn random(&mut self) -> f32 {
        match self.rng.as_deref_mut() {
            Some(state) => LaneRng::step(state),
            None => panic!(
                "lane {} has no random stream: lane id is beyond the kernel size",
                self.lane
            ),
        }
    }

    /// Seeded 2D gradient noise, approximately in [-1, 1].
    pub fn noise2(&self, x: f32, y: f32) -> f32 {
        self.shared.noise.sample2(x, y)
    }

    /// Seeded 3D gradient noise, approximately in [-1, 1].
    pub fn noise3(&self, x: f32, y: f32, z: f32) -> f32 {
        self.shared.noise.sample3(x, y, z)
    }

    /// Write the packed color to this lane's own output slot.
    ///
    /// # Panics
    ///
    /// Panics if this lane's id is at or beyond the output buffer length;
    /// writing anywhere else would overlap another lane.
    pub fn write(&mut self, argb: u32) {
        match self.pixel.as_deref_mut() {
            Some(pixel) => *pixel = argb,
            None => panic!(
                "lane {} has no output slot: lane id is beyond the output buffer",
                self.lane
            ),
        }
    }
}

/// A per-pixel program: the single entry point a concrete kernel implements.
///
/// Implemented for any `Fn(&mut LaneCtx<'_>) + Sync` closure, so small
/// kernels need no named type.
pub trait LaneProgram: Sync {
    /// Compute one lane. Called once per lane id in `[0, n)`, possibly from
    /// many threads at once.
    fn run(&self, lane: &mut LaneCtx<'_>);
}

impl<F> LaneProgram for F
where
    F: Fn(&mut LaneCtx<'_>) + Sync,
{
    fn run(&self, lane: &mut LaneCtx<'_>) {
        self(lane)
    }
}
