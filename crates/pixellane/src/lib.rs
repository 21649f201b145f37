//! Pixellane — per-pixel parallel procedural kernel core
//!
//! A kernel computes every pixel of a W×H buffer independently and in
//! parallel, then publishes the result to a host frame buffer. This crate is
//! the self-contained numeric core such kernels are written against:
//!
//! - **Per-lane randomness**: one xorshift stream per lane, wang-hash seeded,
//!   never shared across lanes ([`rng`]).
//! - **Coherent gradient noise**: seeded, deterministic 2D/3D noise over
//!   precomputed direction tables ([`noise`]).
//! - **Color packing**: 32-bit ARGB compose/decompose ([`color`]).
//! - **The execution contract**: blocking dispatch across an exchangeable
//!   [`ParallelBackend`](backend::ParallelBackend), timing capture, and the
//!   `dump`/`clear` boundary to the host surface ([`kernel`]).
//!
//! # Example
//!
//! ```
//! use pixellane::color;
//! use pixellane::kernel::PixelKernel;
//! use pixellane::lane::{LaneCtx, LaneProgram};
//! use pixellane::surface::FrameSurface;
//!
//! struct Plasma;
//!
//! impl LaneProgram for Plasma {
//!     fn run(&self, lane: &mut LaneCtx<'_>) {
//!         let (x, y) = lane.coords();
//!         let v = (lane.noise2(x as f32 * 0.05, y as f32 * 0.05) + 1.0) * 0.5;
//!         lane.write(color::compose_f32(v, v, v, 1.0));
//!     }
//! }
//!
//! let mut surface = FrameSurface::new(64, 64);
//! let mut kernel = PixelKernel::with_seed(&surface, 64 * 64, 42)?;
//! kernel.execute(64 * 64, &Plasma);
//! kernel.dump(&mut surface)?;
//! # Ok::<(), pixellane::KernelError>(())
//! ```
//!
//! # Concurrency
//!
//! Each lane touches only its own output slot, its own random-stream slot,
//! and shared read-only data (the noise seed and gradient tables), so a
//! dispatch needs no locks. `execute` takes `&mut self`: simultaneous
//! executes on one instance are rejected at compile time, and callers who
//! share a kernel across threads wrap it in their own `Mutex`. Different
//! instances are fully independent.
//!
//! # Determinism
//!
//! Noise and lane streams are pure functions of the seed and call sequence.
//! [`PixelKernel::new`](kernel::PixelKernel::new) seeds from the wall clock;
//! [`with_seed`](kernel::PixelKernel::with_seed) pins the seed for
//! reproducible frames.

pub mod backend;
pub mod color;
pub mod error;
pub mod hash;
pub mod kernel;
pub mod lane;
pub mod math;
pub mod noise;
pub mod rng;
pub mod surface;

pub use backend::{ParallelBackend, RayonBackend, SerialBackend};
pub use error::KernelError;
pub use kernel::{ExecutionStats, IndexMapper, PixelKernel};
pub use lane::{LaneCtx, LaneProgram};
pub use noise::GradientNoise;
pub use rng::LaneRng;
pub use surface::{FrameSurface, HostSurface};
