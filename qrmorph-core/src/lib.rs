//! qrmorph animates the modules of a QR code as its payload changes.
//!
//! Every black module gets a stable [`AnimatableIdentity`]: the grid is cut into square
//! zones (3x3 modules by default) and each black module is ranked among the black
//! modules of its zone in row-major order. A rendering layer keys its elements by that
//! identity, so when the payload changes and a new grid replaces the old one, matching
//! elements slide to their new module instead of popping.
//!
//! # Pipeline overview
//!
//! 1. **Encode**: `text -> PixelGrid` through a [`QrEncoder`] (`None` when the payload
//!    cannot be encoded).
//! 2. **Index**: [`ZoneIndexer::identity_for`] maps a black module to its identity;
//!    [`IdentityMapper::coordinate_for`] maps an identity back, snapping stale ranks to
//!    the zone's first black module.
//! 3. **Lay out**: [`position_layout`] (true positions) and [`offset_layout`]
//!    (every zone slot resolved through the mapper).
//! 4. **Transition**: [`Transition::between`] diffs two layouts by key and
//!    [`Transition::sample`] interpolates them.
//! 5. **Render**: [`MorphDriver`] owns the current grid and replaces it per tick;
//!    [`render_sequence`] turns ticks into [`FrameRGBA`] frames.
//!
//! Grids are immutable and every query is a pure function of one grid, so the core can
//! be called from several threads on different snapshots.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod driver;
mod foundation;
mod grid;
mod layout;
mod render;
mod zones;

pub use animation::ease::Ease;
pub use animation::transition::{SampledElement, Track, Transition};
pub use config::{COUNTER_PLACEHOLDER, MAX_CANVAS_WIDTH, MorphConfig, RenderThreading};
pub use driver::scheduler::{MorphDriver, TickOutcome};
pub use foundation::core::{AnimatableIdentity, Coord, DEFAULT_ZONE_SIZE, Zone};
pub use foundation::error::{QrMorphError, QrMorphResult};
pub use grid::encode::{ErrorCorrection, QrCodeEncoder, QrEncoder};
pub use grid::pixel_grid::PixelGrid;
pub use layout::element::{LayoutElement, LayoutKind};
pub use layout::offset::offset_layout;
pub use layout::position::position_layout;
pub use render::frame::FrameRGBA;
pub use render::pipeline::{
    RenderStats, TickTransitions, mapper_for, render_sequence, render_still, render_tick_frames,
};
pub use render::raster::Panel;
pub use zones::indexer::{ZoneIndexer, ZoneIter};
pub use zones::mapper::IdentityMapper;
