// SPDX-License-Identifier: MPL-2.0
//! Decoding page photos into GPU-ready RGBA handles.

use crate::error::{Error, Result};
use iced::widget::image;
use iced::Size;
use image_rs::GenericImageView;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            handle: image::Handle::from_rgba(width, height, pixels),
            width,
            height,
        }
    }

    /// Intrinsic size in pixels.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Decodes encoded bytes (PNG, JPEG, WebP, ...) into RGBA.
///
/// # Errors
///
/// Returns [`Error::Image`] when the format is unknown, the data is
/// corrupted, or the image has no pixels.
pub fn decode(bytes: &[u8]) -> Result<ImageData> {
    let img = image_rs::load_from_memory(bytes)?;
    let (width, height) = img.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::Image(format!("empty image ({width}x{height})")));
    }

    Ok(ImageData::from_rgba(width, height, img.to_rgba8().into_vec()))
}
