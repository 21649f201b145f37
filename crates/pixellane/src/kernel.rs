//! The kernel core: output buffer ownership and the execute/dump/clear
//! contract.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use log::{debug, trace};

use crate::backend::{LaneSlot, ParallelBackend, RayonBackend};
use crate::error::KernelError;
use crate::lane::{LaneCtx, LaneProgram, LaneShared};
use crate::noise::GradientNoise;
use crate::rng::LaneRng;
use crate::surface::HostSurface;

/// Timing of the most recent `execute` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExecutionStats {
    /// Wall-clock time of the whole dispatch.
    pub duration: Duration,
    /// `1000 / duration_ms`. Non-finite when the dispatch rounded to zero
    /// milliseconds; callers must tolerate that.
    pub rate: f32,
}

/// Flat lane id to 2D coordinate mapping.
///
/// `x = id % width` but `y = id / height`: the divisor is `height`, not
/// `width`. This only agrees with a conventional row-major mapping when
/// `width == height`. Suspicious, but existing kernels render through it,
/// so it is kept as-is rather than silently corrected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexMapper {
    width: u32,
    height: u32,
}

impl IndexMapper {
    /// Mapper for a `width` x `height` target.
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// `(x, y)` for a flat lane id.
    #[inline]
    pub fn index(&self, global_id: usize) -> (u32, u32) {
        let id = global_id as u32;
        (id % self.width, id / self.height)
    }
}

/// A per-pixel parallel procedural kernel bound to one output buffer.
///
/// The kernel exclusively owns its output buffer and the per-lane random
/// state; the host surface is only touched at the construction, `clear` and
/// `dump` boundaries. `execute` takes `&mut self`, so two simultaneous
/// executes on one instance cannot exist without external synchronization,
/// and timing stats or buffer contents are never observed mid-update.
pub struct PixelKernel {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
    rng: LaneRng,
    noise: GradientNoise,
    mapper: IndexMapper,
    stats: Option<ExecutionStats>,
    backend: Box<dyn ParallelBackend>,
}

impl PixelKernel {
    /// Build a kernel sized to `surface`, with `kernel_size` lanes and a
    /// wall-clock noise seed.
    pub fn new(surface: &impl HostSurface, kernel_size: usize) -> Result<Self, KernelError> {
        Self::with_seed(surface, kernel_size, clock_seed())
    }

    /// Build a kernel with an explicit noise seed, for reproducible output.
    pub fn with_seed(
        surface: &impl HostSurface,
        kernel_size: usize,
        seed: i32,
    ) -> Result<Self, KernelError> {
        let (width, height) = (surface.width(), surface.height());
        if width == 0 || height == 0 {
            return Err(KernelError::InvalidDimensions { width, height });
        }
        if kernel_size == 0 {
            return Err(KernelError::InvalidLaneCount(kernel_size));
        }

        debug!("kernel {width}x{height}, {kernel_size} lanes, seed {seed}");
        Ok(Self {
            width,
            height,
            pixels: vec![0; surface.pixels().len()],
            rng: LaneRng::new(kernel_size),
            noise: GradientNoise::new(seed),
            mapper: IndexMapper::new(width, height),
            stats: None,
            backend: Box::new(RayonBackend),
        })
    }

    /// Replace the default rayon backend.
    pub fn with_backend(mut self, backend: Box<dyn ParallelBackend>) -> Self {
        self.backend = backend;
        self
    }

    /// Dispatch `n` lane computations through the backend and block until
    /// every lane has completed, then record timing.
    ///
    /// `n` need not equal `width * height`: lanes beyond the output buffer
    /// run without a pixel slot, lanes beyond the kernel size run without a
    /// random stream, and touching a missing slot fails fast (see
    /// [`LaneCtx`]). Taking `&mut self` serializes executes on one instance;
    /// different instances are fully independent.
    pub fn execute(&mut self, n: usize, program: &impl LaneProgram) -> ExecutionStats {
        let start = Instant::now();

        let shared = LaneShared {
            noise: self.noise,
            mapper: self.mapper,
        };
        let mut pixels = self.pixels.iter_mut();
        let mut streams = self.rng.slots_mut();
        let mut slots: Vec<LaneSlot<'_>> = (0..n)
            .map(|_| LaneSlot {
                pixel: pixels.next(),
                rng: streams.next(),
            })
            .collect();

        self.backend.dispatch(&mut slots, &|lane: usize, slot: &mut LaneSlot<'_>| {
            let mut ctx = LaneCtx {
                lane,
                pixel: slot.pixel.as_deref_mut(),
                rng: slot.rng.as_deref_mut(),
                shared: &shared,
            };
            program.run(&mut ctx);
        });

        let duration = start.elapsed();
        let millis = duration.as_nanos() as f32 / 1_000_000.0;
        let stats = ExecutionStats {
            duration,
            rate: 1000.0 / millis,
        };
        debug!("executed {n} lanes in {duration:?} (rate {})", stats.rate);
        self.stats = Some(stats);
        stats
    }

    /// Copy the output buffer verbatim into the host buffer.
    pub fn dump(&self, surface: &mut impl HostSurface) -> Result<(), KernelError> {
        let host = surface.pixels_mut();
        if host.len() != self.pixels.len() {
            return Err(KernelError::LengthMismatch {
                ours: self.pixels.len(),
                host: host.len(),
            });
        }
        host.copy_from_slice(&self.pixels);
        trace!("dumped {} pixels to host", host.len());
        Ok(())
    }

    /// Discard the output buffer and reallocate it zero-filled to the host
    /// buffer's *current* length. Re-establishes the `dump` length invariant
    /// after a host resize.
    pub fn clear(&mut self, surface: &impl HostSurface) {
        self.pixels = vec![0; surface.pixels().len()];
        trace!("cleared output buffer to {} pixels", self.pixels.len());
    }

    /// Target width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Target height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of lanes with a private random stream.
    pub fn kernel_size(&self) -> usize {
        self.rng.len()
    }

    /// The instance noise seed.
    pub fn seed(&self) -> i32 {
        self.noise.seed()
    }

    /// Read-only view of the output buffer.
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Timing of the most recent `execute`, if any has run.
    pub fn last_stats(&self) -> Option<ExecutionStats> {
        self.stats
    }

    /// Duration of the last `execute`; zero before the first call.
    pub fn last_duration(&self) -> Duration {
        self.stats.map(|s| s.duration).unwrap_or(Duration::ZERO)
    }

    /// Rate of the last `execute` (`1000 / ms`, possibly non-finite); zero
    /// before the first call.
    pub fn last_rate(&self) -> f32 {
        self.stats.map(|s| s.rate).unwrap_or(0.0)
    }
}

/// Wall-clock milliseconds truncated into positive `i32` range.
fn clock_seed() -> i32 {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    (millis % i32::MAX as u128) as i32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SerialBackend;
    use crate::color;
    use crate::surface::FrameSurface;

    #[test]
    fn test_construction_validates_dimensions() {
        let surface = FrameSurface::new(0, 32);
        assert_eq!(
            PixelKernel::new(&surface, 16).err(),
            Some(KernelError::InvalidDimensions {
                width: 0,
                height: 32
            })
        );
    }

    #[test]
    fn test_construction_validates_lane_count() {
        let surface = FrameSurface::new(8, 8);
        assert_eq!(
            PixelKernel::new(&surface, 0).err(),
            Some(KernelError::InvalidLaneCount(0))
        );
    }

    #[test]
    fn test_buffer_sized_to_host_and_zero_filled() {
        let surface = FrameSurface::new(16, 9);
        let kernel = PixelKernel::with_seed(&surface, 16 * 9, 5).unwrap();
        assert_eq!(kernel.pixels().len(), 16 * 9);
        assert!(kernel.pixels().iter().all(|&p| p == 0));
        assert_eq!(kernel.last_duration(), Duration::ZERO);
        assert_eq!(kernel.last_rate(), 0.0);
        assert!(kernel.last_stats().is_none());
    }

    #[test]
    fn test_index_mapper_square_is_row_major() {
        let mapper = IndexMapper::new(10, 10);
        assert_eq!(mapper.index(0), (0, 0));
        assert_eq!(mapper.index(9), (9, 0));
        assert_eq!(mapper.index(10), (0, 1));
        assert_eq!(mapper.index(57), (7, 5));
    }

    #[test]
    fn test_index_mapper_preserves_height_divisor() {
        // Non-square targets keep y = id / height, even though that is not
        // a row-major mapping.
        let mapper = IndexMapper::new(4, 2);
        assert_eq!(mapper.index(5), (1, 2));
        assert_eq!(mapper.index(7), (3, 3));
    }

    #[test]
    fn test_partial_execute_leaves_remaining_pixels_untouched() {
        let surface = FrameSurface::new(8, 8);
        let mut kernel = PixelKernel::with_seed(&surface, 64, 3).unwrap();
        kernel.execute(16, &|ctx: &mut LaneCtx<'_>| {
            ctx.write(color::compose(0, 255, 0));
        });
        let pixels = kernel.pixels();
        assert!(pixels[..16].iter().all(|&p| p == color::compose(0, 255, 0)));
        assert!(pixels[16..].iter().all(|&p| p == 0));
    }

    #[test]
    fn test_execute_records_stats() {
        let surface = FrameSurface::new(8, 8);
        let mut kernel = PixelKernel::with_seed(&surface, 64, 3).unwrap();
        let stats = kernel.execute(64, &|ctx: &mut LaneCtx<'_>| {
            let v = ctx.random().abs();
            ctx.write(color::compose_f32(v, v, v, 1.0));
        });
        assert_eq!(kernel.last_stats(), Some(stats));
        assert_eq!(kernel.last_duration(), stats.duration);
        // Rate may be infinite for a dispatch this small, but never NaN.
        assert!(!kernel.last_rate().is_nan());
    }

    #[test]
    fn test_serial_backend_swap() {
        let surface = FrameSurface::new(4, 4);
        let mut kernel = PixelKernel::with_seed(&surface, 16, 11)
            .unwrap()
            .with_backend(Box::new(SerialBackend));
        kernel.execute(16, &|ctx: &mut LaneCtx<'_>| {
            ctx.write(color::compose(1, 2, 3));
        });
        assert!(kernel.pixels().iter().all(|&p| p == color::compose(1, 2, 3)));
    }

    #[test]
    fn test_clear_reallocates_to_current_host_length() {
        let mut surface = FrameSurface::new(4, 4);
        let mut kernel = PixelKernel::with_seed(&surface, 16, 7).unwrap();
        kernel.execute(16, &|ctx: &mut LaneCtx<'_>| {
            ctx.write(0xFFFF_FFFF);
        });

        surface.resize(8, 8);
        kernel.clear(&surface);
        assert_eq!(kernel.pixels().len(), 64);
        assert!(kernel.pixels().iter().all(|&p| p == 0));
        kernel.dump(&mut surface).unwrap();
    }

    #[test]
    fn test_dump_rejects_length_mismatch() {
        let mut surface = FrameSurface::new(4, 4);
        let kernel = PixelKernel::with_seed(&surface, 16, 7).unwrap();
        surface.resize(5, 5);
        assert_eq!(
            kernel.dump(&mut surface).err(),
            Some(KernelError::LengthMismatch { ours: 16, host: 25 })
        );
    }

    #[test]
    fn test_noise_seed_flows_from_instance() {
        let surface = FrameSurface::new(4, 4);
        let mut a = PixelKernel::with_seed(&surface, 16, 1234).unwrap();
        let mut b = PixelKernel::with_seed(&surface, 16, 1234).unwrap();
        let program = |ctx: &mut LaneCtx<'_>| {
            let (x, y) = ctx.coords();
            let v = (ctx.noise2(x as f32 * 0.3, y as f32 * 0.3) + 1.0) * 0.5;
            ctx.write(color::compose_f32(v, v, v, 1.0));
        };
        a.execute(16, &program);
        b.execute(16, &program);
        assert_eq!(a.pixels(), b.pixels());
        assert_eq!(a.seed(), 1234);
    }
}
