/// Convenience result type used across qrmorph.
pub type QrMorphResult<T> = Result<T, QrMorphError>;

/// Top-level error taxonomy used by the library APIs.
///
/// Two expected outcomes are deliberately not errors: a payload the encoder cannot
/// handle yields `None` from [`crate::QrEncoder::encode`], and a white module has no
/// identity (`Ok(None)` from [`crate::ZoneIndexer::identity_for`]).
#[derive(thiserror::Error, Debug)]
pub enum QrMorphError {
    /// Invalid user-provided configuration or grid data.
    #[error("validation error: {0}")]
    Validation(String),

    /// A coordinate query fell outside the grid.
    #[error("out of bounds: ({x}, {y}) is outside a {size}x{size} grid")]
    OutOfBounds {
        /// Queried column.
        x: usize,
        /// Queried row.
        y: usize,
        /// Grid dimension.
        size: usize,
    },

    /// A broken internal invariant. Indicates a logic defect, not bad input.
    #[error("internal error: {0}")]
    Internal(String),

    /// Errors while rasterizing or sequencing frames.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QrMorphError {
    /// Build a [`QrMorphError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QrMorphError::Internal`] value.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Build a [`QrMorphError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`QrMorphError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
