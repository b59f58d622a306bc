use crate::{
    foundation::{
        core::{AnimatableIdentity, Coord},
        error::QrMorphResult,
    },
    grid::pixel_grid::PixelGrid,
    layout::{offset::offset_layout, position::position_layout},
    zones::mapper::IdentityMapper,
};

/// One black square placed by a layout, keyed for cross-layout matching.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayoutElement {
    /// Identity used to match this element across layouts and ticks.
    pub key: AnimatableIdentity,
    /// Module the element is drawn on.
    pub coord: Coord,
}

/// Which placement strategy produced a set of [`LayoutElement`]s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutKind {
    /// One element per black module at its true grid position.
    Position,
    /// Every `(zone, rank)` slot resolved through the identity mapper.
    Offset,
}

impl LayoutKind {
    /// Lay out `grid` with this strategy.
    pub fn build(
        self,
        grid: &PixelGrid,
        mapper: &IdentityMapper,
    ) -> QrMorphResult<Vec<LayoutElement>> {
        match self {
            Self::Position => position_layout(grid, mapper.indexer()),
            Self::Offset => Ok(offset_layout(grid, mapper)),
        }
    }
}
