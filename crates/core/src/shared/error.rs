use thiserror::Error;

/// Internal compositing failures.
///
/// These never reach callers of the overlay use case: it recovers by
/// returning the untouched input image.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OverlayError {
    #[error("mask is {actual:?} but frame is {expected:?}")]
    MaskMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
    #[error("buffer of {len} bytes does not fit a {width}x{height}x{channels} frame")]
    FrameMismatch {
        width: u32,
        height: u32,
        channels: u8,
        len: usize,
    },
    #[error("mask buffer of {len} bytes does not fit {width}x{height}")]
    MaskLength { width: u32, height: u32, len: usize },
    #[error("expected a 3-channel frame, got {0} channels")]
    UnsupportedChannels(u8),
}
