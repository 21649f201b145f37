//! Packed 32-bit ARGB color utilities.
//!
//! Colors travel through the kernel as `u32` in `0xAARRGGBB` layout, the
//! layout the host frame buffer consumes directly.

/// Pack integer channels into a fully opaque ARGB value.
#[inline]
pub fn compose(red: u8, green: u8, blue: u8) -> u32 {
    0xFF00_0000 | (red as u32) << 16 | (green as u32) << 8 | blue as u32
}

/// Pack float channels in [0, 1] into ARGB.
///
/// Channels are scaled by 255 and **truncated** toward zero, not rounded.
/// The difference is visible in rendered output, so switching to rounding
/// changes every frame.
#[inline]
pub fn compose_f32(r: f32, g: f32, b: f32, a: f32) -> u32 {
    ((a * 255.0) as u32) << 24
        | ((r * 255.0) as u32) << 16
        | ((g * 255.0) as u32) << 8
        | (b * 255.0) as u32
}

/// Alpha byte of a packed color.
#[inline]
pub fn alpha(argb: u32) -> u8 {
    (argb >> 24) as u8
}

/// Red byte of a packed color.
#[inline]
pub fn red(argb: u32) -> u8 {
    (argb >> 16) as u8
}

/// Green byte of a packed color.
#[inline]
pub fn green(argb: u32) -> u8 {
    (argb >> 8) as u8
}

/// Blue byte of a packed color.
#[inline]
pub fn blue(argb: u32) -> u8 {
    argb as u8
}
