use image::{GrayImage, Luma};
use qrcode::{Color, EcLevel, QrCode};

use crate::grid::pixel_grid::PixelGrid;

/// Error-correction level requested from the QR encoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ErrorCorrection {
    /// ~7% recovery.
    L,
    /// ~15% recovery.
    #[default]
    M,
    /// ~25% recovery.
    Q,
    /// ~30% recovery.
    H,
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::L => EcLevel::L,
            ErrorCorrection::M => EcLevel::M,
            ErrorCorrection::Q => EcLevel::Q,
            ErrorCorrection::H => EcLevel::H,
        }
    }
}

/// Turns a text payload into a module grid.
///
/// Returns `None` when the payload cannot be encoded; callers skip rendering for it.
pub trait QrEncoder: Send + Sync {
    /// Encode and rasterize `text`.
    fn encode(&self, text: &str) -> Option<PixelGrid>;
}

/// [`QrEncoder`] backed by the `qrcode` crate, restricted to ASCII payloads.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrCodeEncoder {
    /// Error-correction level used for every payload.
    pub ec_level: ErrorCorrection,
}

impl QrCodeEncoder {
    /// Encoder with the given error-correction level.
    pub fn new(ec_level: ErrorCorrection) -> Self {
        Self { ec_level }
    }

    /// Rasterize `text` at one pixel per module without a quiet zone.
    ///
    /// Dark modules are 0, light modules 255.
    pub fn rasterize(&self, text: &str) -> Option<GrayImage> {
        if !text.is_ascii() {
            tracing::debug!(len = text.len(), "payload is not ascii");
            return None;
        }
        let code = match QrCode::with_error_correction_level(text.as_bytes(), self.ec_level.into())
        {
            Ok(code) => code,
            Err(err) => {
                tracing::debug!(error = %err, "qr encoding failed");
                return None;
            }
        };

        let width = code.width();
        let colors = code.to_colors();
        let side = u32::try_from(width).ok()?;
        Some(GrayImage::from_fn(side, side, |x, y| {
            match colors[y as usize * width + x as usize] {
                Color::Dark => Luma([0u8]),
                Color::Light => Luma([255u8]),
            }
        }))
    }
}

impl QrEncoder for QrCodeEncoder {
    fn encode(&self, text: &str) -> Option<PixelGrid> {
        let img = self.rasterize(text)?;
        PixelGrid::from_luma(&img).ok()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/encode.rs"]
mod tests;
