//! GLSL-flavored scalar helpers available to lane programs.

/// Linearly remap `value` from `[min1, max1]` into `[min2, max2]`.
#[inline]
pub fn map(value: f32, min1: f32, max1: f32, min2: f32, max2: f32) -> f32 {
    min2 + (value - min1) * (max2 - min2) / (max1 - min1)
}

/// Fractional part of `x`, computed as `x - trunc(x)`.
///
/// Negative inputs keep their sign: `fract(-1.25)` is `-0.25`. This matches
/// GLSL's `fract` only for non-negative inputs.
#[inline]
pub fn fract(x: f32) -> f32 {
    x - (x as i32) as f32
}

/// Euclidean distance between `(p1x, p1y)` and `(p2x, p2y)`.
#[inline]
pub fn distance(p1x: f32, p1y: f32, p2x: f32, p2y: f32) -> f32 {
    let dx = p2x - p1x;
    let dy = p2y - p1y;
    (dx * dx + dy * dy).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map() {
        assert_eq!(map(5.0, 0.0, 10.0, 0.0, 1.0), 0.5);
        assert_eq!(map(0.0, -1.0, 1.0, 0.0, 255.0), 127.5);
        assert_eq!(map(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
    }

    #[test]
    fn test_fract() {
        assert_eq!(fract(1.25), 0.25);
        assert_eq!(fract(-1.25), -0.25);
        assert_eq!(fract(3.0), 0.0);
    }

    #[test]
    fn test_distance() {
        assert_eq!(distance(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(distance(1.0, 1.0, 1.0, 1.0), 0.0);
    }
}
