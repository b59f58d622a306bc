use std::sync::Arc;

use crate::{
    config::MorphConfig,
    foundation::error::{QrMorphError, QrMorphResult},
    grid::{encode::QrEncoder, pixel_grid::PixelGrid},
};

/// Result of one successful tick: the grid being left and the grid being entered.
#[derive(Clone, Debug)]
pub struct TickOutcome {
    /// Tick number, starting at 1.
    pub counter: u64,
    /// Payload encoded for this tick.
    pub text: String,
    /// Grid shown before the tick.
    pub from: Arc<PixelGrid>,
    /// Grid shown after the tick.
    pub to: Arc<PixelGrid>,
}

/// Owns the current grid and replaces it, whole, on every tick.
///
/// Grids are never mutated; readers holding an `Arc` from [`MorphDriver::current`]
/// keep a consistent snapshot while the driver moves on.
pub struct MorphDriver<E: QrEncoder> {
    config: MorphConfig,
    encoder: E,
    counter: u64,
    current: Arc<PixelGrid>,
}

impl<E: QrEncoder> MorphDriver<E> {
    /// Encode the initial payload and start at tick 0.
    pub fn new(config: MorphConfig, encoder: E) -> QrMorphResult<Self> {
        config.validate()?;
        let initial = encoder.encode(&config.initial_text).ok_or_else(|| {
            QrMorphError::validation(format!(
                "initial_text '{}' cannot be encoded as a QR code",
                config.initial_text
            ))
        })?;
        tracing::debug!(size = initial.size(), "initial grid encoded");
        Ok(Self {
            config,
            encoder,
            counter: 0,
            current: Arc::new(initial),
        })
    }

    /// Grid currently on screen.
    pub fn current(&self) -> Arc<PixelGrid> {
        Arc::clone(&self.current)
    }

    /// Ticks attempted so far.
    pub fn counter(&self) -> u64 {
        self.counter
    }

    /// Configuration the driver was built with.
    pub fn config(&self) -> &MorphConfig {
        &self.config
    }

    /// Advance the counter and encode the next payload.
    ///
    /// Returns `None`, leaving the current grid in place, when the payload cannot be
    /// encoded; nothing should be rendered for that tick.
    #[tracing::instrument(skip(self))]
    pub fn tick(&mut self) -> Option<TickOutcome> {
        self.counter += 1;
        let text = self.config.text_for_tick(self.counter);
        let Some(next) = self.encoder.encode(&text) else {
            tracing::warn!(%text, "payload could not be encoded; skipping tick");
            return None;
        };

        let next = Arc::new(next);
        let from = std::mem::replace(&mut self.current, Arc::clone(&next));
        tracing::debug!(
            from_size = from.size(),
            to_size = next.size(),
            "grid replaced"
        );
        Some(TickOutcome {
            counter: self.counter,
            text,
            from,
            to: next,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/scheduler.rs"]
mod tests;
