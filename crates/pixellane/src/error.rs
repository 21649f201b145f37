//! Kernel error taxonomy.

use thiserror::Error;

/// Errors from kernel construction and buffer publication.
///
/// All failures are synchronous and terminal for the call that raised them;
/// there is no retry or partial-result contract. Pixels written by lanes that
/// completed before a failure stay in the output buffer and are visible on
/// the next successful `dump()`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// Width or height was zero at construction.
    #[error("invalid dimensions {width}x{height}: width and height must be positive")]
    InvalidDimensions { width: u32, height: u32 },

    /// Kernel size (lane count) was zero at construction.
    #[error("invalid lane count {0}: kernel size must be positive")]
    InvalidLaneCount(usize),

    /// `dump()` found the output and host buffer lengths disagreeing,
    /// usually because the host surface was resized without an intervening
    /// `clear()`.
    #[error("output buffer holds {ours} pixels but the host buffer holds {host}; clear() after resizing the host surface")]
    LengthMismatch { ours: usize, host: usize },
}
