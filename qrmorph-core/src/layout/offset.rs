use crate::{
    foundation::core::AnimatableIdentity, grid::pixel_grid::PixelGrid,
    layout::element::LayoutElement, zones::mapper::IdentityMapper,
};

/// Resolve every `(zone, rank)` slot of the grid to a module.
///
/// Each zone offers `zone_size²` ranks. Ranks past the zone's black count resolve to
/// its first black module, so several elements may share one module; all-white zones
/// contribute nothing.
pub fn offset_layout(grid: &PixelGrid, mapper: &IdentityMapper) -> Vec<LayoutElement> {
    let indexer = mapper.indexer();
    let slots = indexer.zone_size() * indexer.zone_size();
    let mut out = Vec::new();
    for zone in indexer.all_zones(grid.size()) {
        let zone_key = AnimatableIdentity::new(zone, 0);
        for rank in 0..slots {
            let key = zone_key.with_rank(rank);
            if let Some(coord) = mapper.coordinate_for(grid, key) {
                out.push(LayoutElement { key, coord });
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/layout/offset.rs"]
mod tests;
