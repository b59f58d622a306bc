use crate::{
    foundation::{
        core::{AnimatableIdentity, Coord, DEFAULT_ZONE_SIZE, Zone},
        error::{QrMorphError, QrMorphResult},
    },
    grid::pixel_grid::PixelGrid,
};

/// Partitions a grid into square zones and ranks the black modules inside each one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ZoneIndexer {
    zone_size: usize,
}

impl Default for ZoneIndexer {
    fn default() -> Self {
        Self {
            zone_size: DEFAULT_ZONE_SIZE,
        }
    }
}

impl ZoneIndexer {
    /// Indexer with a custom zone side length.
    pub fn new(zone_size: usize) -> QrMorphResult<Self> {
        if zone_size == 0 {
            return Err(QrMorphError::validation("zone_size must be > 0"));
        }
        Ok(Self { zone_size })
    }

    /// Zone side length in modules.
    pub fn zone_size(&self) -> usize {
        self.zone_size
    }

    /// Zones per side for a grid of `size` modules (the last one may be partial).
    pub fn zone_width(&self, size: usize) -> usize {
        size.div_ceil(self.zone_size)
    }

    /// Zone containing `coord`.
    pub fn zone_of(&self, coord: Coord) -> Zone {
        Zone::new(coord.x / self.zone_size, coord.y / self.zone_size)
    }

    /// Every zone covering a `size x size` grid, row-major.
    ///
    /// The iterator is lazy and can be cloned to restart the enumeration.
    pub fn all_zones(&self, size: usize) -> ZoneIter {
        ZoneIter {
            width: self.zone_width(size),
            next: 0,
        }
    }

    /// Cells of `zone` in row-major order, clipped to the grid.
    ///
    /// A zone lying entirely outside the grid yields nothing.
    pub fn zone_cells(&self, zone: Zone, size: usize) -> impl Iterator<Item = Coord> + Clone {
        let (x0, y0, x_end, y_end) = match zone.origin(self.zone_size) {
            Some(o) if o.x < size && o.y < size => (
                o.x,
                o.y,
                o.x.saturating_add(self.zone_size).min(size),
                o.y.saturating_add(self.zone_size).min(size),
            ),
            _ => (0, 0, 0, 0),
        };
        (y0..y_end).flat_map(move |y| (x0..x_end).map(move |x| Coord::new(x, y)))
    }

    /// Number of black modules inside `zone`.
    pub fn black_count_in(&self, grid: &PixelGrid, zone: Zone) -> usize {
        self.zone_cells(zone, grid.size())
            .filter(|&c| grid.black_in_bounds(c))
            .count()
    }

    /// Identity of the module at `coord`, or `None` when it is white.
    ///
    /// Fails with [`QrMorphError::OutOfBounds`] for coordinates outside the grid.
    pub fn identity_for(
        &self,
        grid: &PixelGrid,
        coord: Coord,
    ) -> QrMorphResult<Option<AnimatableIdentity>> {
        if !grid.is_black_at(coord)? {
            return Ok(None);
        }

        let zone = self.zone_of(coord);
        let mut rank = 0;
        for cell in self.zone_cells(zone, grid.size()) {
            if !grid.black_in_bounds(cell) {
                continue;
            }
            if cell == coord {
                return Ok(Some(AnimatableIdentity::new(zone, rank)));
            }
            rank += 1;
        }

        tracing::error!(x = coord.x, y = coord.y, "black module missing from its zone scan");
        Err(QrMorphError::internal(format!(
            "black module ({}, {}) not found in zone ({}, {})",
            coord.x, coord.y, zone.x, zone.y
        )))
    }
}

/// Row-major enumeration of the zones of one grid. See [`ZoneIndexer::all_zones`].
#[derive(Clone, Debug)]
pub struct ZoneIter {
    width: usize,
    next: usize,
}

impl Iterator for ZoneIter {
    type Item = Zone;

    fn next(&mut self) -> Option<Zone> {
        if self.next >= self.width * self.width {
            return None;
        }
        let idx = self.next;
        self.next += 1;
        Some(Zone::new(idx % self.width, idx / self.width))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.width * self.width).saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ZoneIter {}

#[cfg(test)]
#[path = "../../tests/unit/zones/indexer.rs"]
mod tests;
