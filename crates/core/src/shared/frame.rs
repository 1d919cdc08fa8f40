use ndarray::{ArrayView3, ArrayViewMut3};

use super::error::OverlayError;

/// A single photograph: contiguous RGB bytes in row-major order.
///
/// Format conversion happens at I/O boundaries only; the compositing layer
/// treats pixel data as opaque.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: u8,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * (channels as usize),
            "data length must equal width * height * channels"
        );
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    /// Checked constructor for buffers that come from outside the crate.
    pub fn try_new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        channels: u8,
    ) -> Result<Self, OverlayError> {
        let frame = Self {
            data,
            width,
            height,
            channels,
        };
        frame.check_layout()?;
        Ok(frame)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// True when the frame holds no pixels at all.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.data.is_empty()
    }

    /// Fails with [`OverlayError::FrameMismatch`] when the buffer length does
    /// not match the dimensions.
    pub fn check_layout(&self) -> Result<(), OverlayError> {
        let (h, w, c) = self.shape();
        if self.data.len() != h * w * c {
            return Err(self.mismatch());
        }
        Ok(())
    }

    pub fn as_ndarray(&self) -> Result<ArrayView3<'_, u8>, OverlayError> {
        self.check_layout()?;
        ArrayView3::from_shape(self.shape(), &self.data).map_err(|_| self.mismatch())
    }

    pub fn as_ndarray_mut(&mut self) -> Result<ArrayViewMut3<'_, u8>, OverlayError> {
        self.check_layout()?;
        let shape = self.shape();
        let err = self.mismatch();
        ArrayViewMut3::from_shape(shape, &mut self.data).map_err(|_| err)
    }

    fn mismatch(&self) -> OverlayError {
        OverlayError::FrameMismatch {
            width: self.width,
            height: self.height,
            channels: self.channels,
            len: self.data.len(),
        }
    }

    /// Builds a frame without any length check, to exercise the guards.
    #[cfg(test)]
    pub(crate) fn unchecked(data: Vec<u8>, width: u32, height: u32, channels: u8) -> Self {
        Self {
            data,
            width,
            height,
            channels,
        }
    }

    fn shape(&self) -> (usize, usize, usize) {
        (
            self.height as usize,
            self.width as usize,
            self.channels as usize,
        )
    }
}
