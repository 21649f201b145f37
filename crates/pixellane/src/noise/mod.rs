//! Coherent gradient noise primitives.
//!
//! All functions here are pure and deterministic given the same seed, and
//! safe to call from any lane without synchronization.

mod gradient;
mod tables;

pub use gradient::GradientNoise;
pub use tables::{GRADIENTS_2D, GRADIENTS_3D};

/// Quintic interpolation `t³(t(6t-15)+10)`, zero slope at both lattice ends.
#[inline]
pub fn quintic(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Linear interpolation.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + t * (b - a)
}

/// Truncate-based floor to `i32`.
///
/// For exact negative integers this lands one cell below (`-2.0` maps to
/// `-3`). The resulting fractional offset of `1.0` keeps the noise
/// continuous, and correcting the quirk would shift the field for negative
/// coordinates, so it stays.
#[inline]
pub fn fast_floor(f: f32) -> i32 {
    if f >= 0.0 {
        f as i32
    } else {
        f as i32 - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quintic_endpoints() {
        assert_eq!(quintic(0.0), 0.0);
        assert_eq!(quintic(1.0), 1.0);
        assert_eq!(quintic(0.5), 0.5);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(2.0, 6.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 6.0, 1.0), 6.0);
        assert_eq!(lerp(2.0, 6.0, 0.25), 3.0);
    }

    #[test]
    fn test_fast_floor_negative() {
        assert_eq!(fast_floor(1.9), 1);
        assert_eq!(fast_floor(-0.1), -1);
        assert_eq!(fast_floor(-2.5), -3);
        // Exact negative integers land one cell below; see fast_floor docs.
        assert_eq!(fast_floor(-2.0), -3);
        assert_eq!(fast_floor(0.0), 0);
    }
}
