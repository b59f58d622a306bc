use std::path::Path;

use anyhow::Context as _;
use image::RgbaImage;

use crate::foundation::error::{QrMorphError, QrMorphResult};

/// A rendered frame of straight (non-premultiplied) RGBA8 pixels, row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height * 4` bytes.
    pub data: Vec<u8>,
}

impl FrameRGBA {
    /// RGBA value at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Convert into an `image` buffer.
    pub fn into_image(self) -> QrMorphResult<RgbaImage> {
        let (w, h) = (self.width, self.height);
        RgbaImage::from_raw(w, h, self.data)
            .ok_or_else(|| QrMorphError::render(format!("frame buffer does not match {w}x{h}")))
    }

    /// Encode as PNG at `path`, creating parent directories.
    pub fn save_png(&self, path: &Path) -> QrMorphResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        image::save_buffer_with_format(
            path,
            &self.data,
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}
