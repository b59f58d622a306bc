use crate::{
    foundation::error::QrMorphResult,
    grid::pixel_grid::PixelGrid,
    layout::element::LayoutElement,
    zones::indexer::ZoneIndexer,
};

/// Place one element on every black module, row-major, keyed by its identity.
pub fn position_layout(
    grid: &PixelGrid,
    indexer: &ZoneIndexer,
) -> QrMorphResult<Vec<LayoutElement>> {
    let mut out = Vec::with_capacity(grid.black_count());
    for coord in grid.black_coords() {
        if let Some(key) = indexer.identity_for(grid, coord)? {
            out.push(LayoutElement { key, coord });
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/position.rs"]
mod tests;
