//! Host frame buffer boundary.

/// A host-owned display surface the kernel publishes pixels to.
///
/// The kernel never stores a surface reference. It reads the buffer length at
/// construction and [`clear`](crate::kernel::PixelKernel::clear), and copies
/// bytes in during [`dump`](crate::kernel::PixelKernel::dump) — that copy is
/// the single ownership boundary between kernel and host.
pub trait HostSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// The host pixel buffer, `width * height` packed ARGB values.
    fn pixels(&self) -> &[u32];

    /// Mutable access to the host pixel buffer.
    fn pixels_mut(&mut self) -> &mut [u32];
}

/// Minimal in-memory [`HostSurface`], for tests and headless use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameSurface {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

impl FrameSurface {
    /// Allocate a zero-filled surface.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Resize the surface, discarding contents. Models a host window resize;
    /// a kernel built against the old size must `clear()` before its next
    /// `dump()`.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; width as usize * height as usize];
    }
}

impl HostSurface for FrameSurface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }
}
