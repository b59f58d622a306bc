/// Side length, in modules, of the square zones used for identity assignment.
pub const DEFAULT_ZONE_SIZE: usize = 3;

/// A module position on the grid: `x` is the column, `y` the row.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Coord {
    /// Column, `0 <= x < size`.
    pub x: usize,
    /// Row, `0 <= y < size`.
    pub y: usize,
}

impl Coord {
    /// Build a coordinate from column and row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A `zone_size x zone_size` block of the grid, addressed by block column and row.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Zone {
    /// Block column (`coord.x / zone_size`).
    pub x: usize,
    /// Block row (`coord.y / zone_size`).
    pub y: usize,
}

impl Zone {
    /// Build a zone from block column and row.
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Top-left module of this zone, or `None` when it is not addressable.
    pub fn origin(self, zone_size: usize) -> Option<Coord> {
        Some(Coord::new(
            self.x.checked_mul(zone_size)?,
            self.y.checked_mul(zone_size)?,
        ))
    }
}

/// Stable key of a black module: its zone plus its rank among the zone's black modules.
///
/// Ranks count black modules in row-major order inside the zone, starting at 0.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct AnimatableIdentity {
    /// Zone the module belongs to.
    pub zone: Zone,
    /// Ordinal of the module among black modules of `zone`.
    pub rank: usize,
}

impl AnimatableIdentity {
    /// Build an identity from zone and rank.
    pub const fn new(zone: Zone, rank: usize) -> Self {
        Self { zone, rank }
    }

    /// Same zone, different rank.
    pub const fn with_rank(self, rank: usize) -> Self {
        Self {
            zone: self.zone,
            rank,
        }
    }
}
