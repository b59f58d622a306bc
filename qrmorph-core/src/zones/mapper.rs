use crate::{
    foundation::core::{AnimatableIdentity, Coord},
    grid::pixel_grid::PixelGrid,
    zones::indexer::ZoneIndexer,
};

/// Inverse of [`ZoneIndexer::identity_for`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IdentityMapper {
    indexer: ZoneIndexer,
}

impl IdentityMapper {
    /// Mapper scanning zones the same way as `indexer`.
    pub fn new(indexer: ZoneIndexer) -> Self {
        Self { indexer }
    }

    /// Indexer whose zone scan this mapper inverts.
    pub fn indexer(&self) -> &ZoneIndexer {
        &self.indexer
    }

    /// Module currently holding `identity` in `grid`.
    ///
    /// Identities are often captured against an older grid. When `identity.rank` is past
    /// the zone's black modules in this grid, the zone's first black module is returned
    /// instead so the element still lands somewhere visible. `None` means the zone has
    /// no black module at all (or lies outside the grid).
    pub fn coordinate_for(&self, grid: &PixelGrid, identity: AnimatableIdentity) -> Option<Coord> {
        let mut first_black = None;
        let mut seen = 0;
        for cell in self.indexer.zone_cells(identity.zone, grid.size()) {
            if !grid.black_in_bounds(cell) {
                continue;
            }
            if first_black.is_none() {
                first_black = Some(cell);
            }
            if seen == identity.rank {
                return Some(cell);
            }
            seen += 1;
        }
        first_black
    }
}

#[cfg(test)]
#[path = "../../tests/unit/zones/mapper.rs"]
mod tests;
