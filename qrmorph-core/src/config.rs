use std::path::Path;

use anyhow::Context as _;

use crate::{
    animation::ease::Ease,
    foundation::error::{QrMorphError, QrMorphResult},
    grid::encode::ErrorCorrection,
};

/// Largest accepted [`MorphConfig::canvas_width`], in pixels.
pub const MAX_CANVAS_WIDTH: u32 = 8192;

/// Placeholder in [`MorphConfig::text_template`] replaced by the tick counter.
pub const COUNTER_PLACEHOLDER: &str = "{counter}";

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Settings for a morphing QR animation.
///
/// Every field has a default, so `{}` is a valid configuration.
pub struct MorphConfig {
    /// Payload of the first grid.
    pub initial_text: String,
    /// Payload for tick `n`; `{counter}` is replaced by `n` (starting at 1).
    pub text_template: String,
    /// Seconds between ticks; also the length of each transition.
    pub refresh_secs: f64,
    /// Rendered frames per second.
    pub fps: u32,
    /// Number of content changes to animate.
    pub ticks: u32,
    /// Side length of identity zones, in modules.
    pub zone_size: usize,
    /// Output width in pixels; each layout panel is a square of this size.
    pub canvas_width: u32,
    /// Easing applied to every transition.
    pub ease: Ease,
    /// QR error-correction level.
    pub ec_level: ErrorCorrection,
    /// Frame rendering parallelism.
    pub threading: RenderThreading,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            initial_text: "hello!".to_string(),
            text_template: "hello! {counter}".to_string(),
            refresh_secs: 0.2,
            fps: 30,
            ticks: 10,
            zone_size: crate::DEFAULT_ZONE_SIZE,
            canvas_width: 300,
            ease: Ease::default(),
            ec_level: ErrorCorrection::default(),
            threading: RenderThreading::default(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
/// Frame-level parallelism for [`crate::render_tick_frames`].
pub struct RenderThreading {
    /// Render the frames of a tick on a rayon pool.
    pub parallel: bool,
    /// Worker threads; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl MorphConfig {
    /// Parse a JSON configuration and validate it.
    pub fn from_json_str(json: &str) -> QrMorphResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| QrMorphError::serde(format!("invalid morph config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_path(path: &Path) -> QrMorphResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&json)
    }

    /// Check value ranges.
    pub fn validate(&self) -> QrMorphResult<()> {
        if !self.refresh_secs.is_finite() || self.refresh_secs <= 0.0 {
            return Err(QrMorphError::validation(
                "refresh_secs must be finite and > 0",
            ));
        }
        if self.fps == 0 {
            return Err(QrMorphError::validation("fps must be > 0"));
        }
        if self.zone_size == 0 {
            return Err(QrMorphError::validation("zone_size must be > 0"));
        }
        if self.canvas_width == 0 || self.canvas_width > MAX_CANVAS_WIDTH {
            return Err(QrMorphError::validation(format!(
                "canvas_width must be in 1..={MAX_CANVAS_WIDTH}"
            )));
        }
        if let Some(n) = self.threading.threads
            && n == 0
        {
            return Err(QrMorphError::validation(
                "threading.threads must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Payload for tick `counter`.
    pub fn text_for_tick(&self, counter: u64) -> String {
        self.text_template
            .replace(COUNTER_PLACEHOLDER, &counter.to_string())
    }

    /// Frames rendered for each transition, at least one.
    pub fn frames_per_tick(&self) -> u32 {
        let n = (self.refresh_secs * f64::from(self.fps)).round();
        if n < 1.0 { 1 } else { n as u32 }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/config.rs"]
mod tests;
