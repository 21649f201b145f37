//! Seeded 2D/3D coherent gradient noise.

use crate::hash::{lattice_hash_2, lattice_hash_3, PRIME_X, PRIME_Y, PRIME_Z};

use super::tables::{GRADIENTS_2D, GRADIENTS_3D};
use super::{fast_floor, lerp, quintic};

// Scale the raw corner interpolation so output approximates [-1, 1].
const NORM_2D: f32 = 1.4247691104677813;
const NORM_3D: f32 = 0.964921414852142333984375;

/// Coherent gradient noise evaluator.
///
/// Stateless apart from its integer seed: both [`sample2`](Self::sample2) and
/// [`sample3`](Self::sample3) are pure in `(seed, coordinates)` and can be
/// called from any lane without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientNoise {
    seed: i32,
}

impl GradientNoise {
    /// Create an evaluator bound to `seed`.
    pub fn new(seed: i32) -> Self {
        Self { seed }
    }

    /// The seed this evaluator was built with.
    pub fn seed(&self) -> i32 {
        self.seed
    }

    /// 2D noise at `(x, y)`, approximately in [-1, 1] and exactly 0 at
    /// integer lattice points.
    pub fn sample2(&self, x: f32, y: f32) -> f32 {
        let x0 = fast_floor(x);
        let y0 = fast_floor(y);

        let xd0 = x - x0 as f32;
        let yd0 = y - y0 as f32;
        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;

        let xs = quintic(xd0);
        let ys = quintic(yd0);

        let x0 = x0.wrapping_mul(PRIME_X);
        let y0 = y0.wrapping_mul(PRIME_Y);
        let x1 = x0.wrapping_add(PRIME_X);
        let y1 = y0.wrapping_add(PRIME_Y);

        let xf0 = lerp(
            grad_dot_2(self.seed, x0, y0, xd0, yd0),
            grad_dot_2(self.seed, x1, y0, xd1, yd0),
            xs,
        );
        let xf1 = lerp(
            grad_dot_2(self.seed, x0, y1, xd0, yd1),
            grad_dot_2(self.seed, x1, y1, xd1, yd1),
            xs,
        );

        lerp(xf0, xf1, ys) * NORM_2D
    }

    /// 3D noise at `(x, y, z)`, approximately in [-1, 1] and exactly 0 at
    /// integer lattice points.
    pub fn sample3(&self, x: f32, y: f32, z: f32) -> f32 {
        let x0 = fast_floor(x);
        let y0 = fast_floor(y);
        let z0 = fast_floor(z);

        let xd0 = x - x0 as f32;
        let yd0 = y - y0 as f32;
        let zd0 = z - z0 as f32;
        let xd1 = xd0 - 1.0;
        let yd1 = yd0 - 1.0;
        let zd1 = zd0 - 1.0;

        let xs = quintic(xd0);
        let ys = quintic(yd0);
        let zs = quintic(zd0);

        let x0 = x0.wrapping_mul(PRIME_X);
        let y0 = y0.wrapping_mul(PRIME_Y);
        let z0 = z0.wrapping_mul(PRIME_Z);
        let x1 = x0.wrapping_add(PRIME_X);
        let y1 = y0.wrapping_add(PRIME_Y);
        let z1 = z0.wrapping_add(PRIME_Z);

        let seed = self.seed;
        let xf00 = lerp(
            grad_dot_3(seed, x0, y0, z0, xd0, yd0, zd0),
            grad_dot_3(seed, x1, y0, z0, xd1, yd0, zd0),
            xs,
        );
        let xf10 = lerp(
            grad_dot_3(seed, x0, y1, z0, xd0, yd1, zd0),
            grad_dot_3(seed, x1, y1, z0, xd1, yd1, zd0),
            xs,
        );
        let xf01 = lerp(
            grad_dot_3(seed, x0, y0, z1, xd0, yd0, zd1),
            grad_dot_3(seed, x1, y0, z1, xd1, yd0, zd1),
            xs,
        );
        let xf11 = lerp(
            grad_dot_3(seed, x0, y1, z1, xd0, yd1, zd1),
            grad_dot_3(seed, x1, y1, z1, xd1, yd1, zd1),
            xs,
        );

        let yf0 = lerp(xf00, xf10, ys);
        let yf1 = lerp(xf01, xf11, ys);

        lerp(yf0, yf1, zs) * NORM_3D
    }
}

/// Dot product of a hashed corner gradient with the corner's offset vector.
#[inline]
fn grad_dot_2(seed: i32, x_primed: i32, y_primed: i32, xd: f32, yd: f32) -> f32 {
    let mut hash = lattice_hash_2(seed, x_primed, y_primed);
    hash ^= hash >> 15;
    let idx = (hash & (127 << 1)) as usize;

    let xg = GRADIENTS_2D[idx];
    let yg = GRADIENTS_2D[idx | 1];

    xd * xg + yd * yg
}

#[inline]
fn grad_dot_3(
    seed: i32,
    x_primed: i32,
    y_primed: i32,
    z_primed: i32,
    xd: f32,
    yd: f32,
    zd: f32,
) -> f32 {
    let mut hash = lattice_hash_3(seed, x_primed, y_primed, z_primed);
    hash ^= hash >> 15;
    let idx = (hash & (63 << 2)) as usize;

    let xg = GRADIENTS_3D[idx];
    let yg = GRADIENTS_3D[idx | 1];
    let zg = GRADIENTS_3D[idx | 2];

    xd * xg + yd * yg + zd * zg
}
