use ndarray::ArrayView2;

use super::error::OverlayError;

/// Single-channel opacity map, 0 = untouched, 255 = full region weight.
#[derive(Clone, Debug, PartialEq)]
pub struct Mask {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl Mask {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(
            data.len(),
            (width as usize) * (height as usize),
            "mask length must equal width * height"
        );
        Self {
            data,
            width,
            height,
        }
    }

    pub fn zeros(width: u32, height: u32) -> Self {
        Self::new(vec![0; width as usize * height as usize], width, height)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> u8 {
        self.data[y as usize * self.width as usize + x as usize]
    }

    pub fn is_blank(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    pub fn as_ndarray(&self) -> Result<ArrayView2<'_, u8>, OverlayError> {
        ArrayView2::from_shape((self.height as usize, self.width as usize), &self.data).map_err(
            |_| OverlayError::MaskLength {
                width: self.width,
                height: self.height,
                len: self.data.len(),
            },
        )
    }
}
