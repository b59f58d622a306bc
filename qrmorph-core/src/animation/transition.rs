use std::collections::BTreeMap;

use kurbo::Point;

use crate::{
    animation::ease::Ease,
    foundation::core::{AnimatableIdentity, Coord},
    layout::element::LayoutElement,
};

/// How a single keyed element changes between two layouts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum Track {
    /// Present in both layouts; slides between modules.
    Moved {
        /// Module in the outgoing layout.
        from: Coord,
        /// Module in the incoming layout.
        to: Coord,
    },
    /// Only in the incoming layout; fades in.
    Entered {
        /// Module in the incoming layout.
        at: Coord,
    },
    /// Only in the outgoing layout; fades out.
    Exited {
        /// Module in the outgoing layout.
        at: Coord,
    },
}

/// One element at a given point of a transition.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SampledElement {
    /// Identity the element is keyed by.
    pub key: AnimatableIdentity,
    /// Top-left corner in module units (may be fractional mid-transition).
    pub pos: Point,
    /// Coverage in `[0, 1]`.
    pub opacity: f64,
}

/// Keyed diff between two layouts of the same kind.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transition {
    tracks: BTreeMap<AnimatableIdentity, Track>,
}

impl Transition {
    /// Match `from` and `to` by [`LayoutElement::key`].
    pub fn between(from: &[LayoutElement], to: &[LayoutElement]) -> Self {
        let mut tracks = BTreeMap::new();
        for e in from {
            tracks.insert(e.key, Track::Exited { at: e.coord });
        }
        for e in to {
            let track = match tracks.get(&e.key) {
                Some(Track::Exited { at }) => Track::Moved {
                    from: *at,
                    to: e.coord,
                },
                _ => Track::Entered { at: e.coord },
            };
            tracks.insert(e.key, track);
        }
        Self { tracks }
    }

    /// A transition that holds `layout` still.
    pub fn still(layout: &[LayoutElement]) -> Self {
        Self::between(layout, layout)
    }

    /// Tracks in key order.
    pub fn tracks(&self) -> impl Iterator<Item = (&AnimatableIdentity, &Track)> {
        self.tracks.iter()
    }

    /// Track for a single key.
    pub fn track(&self, key: &AnimatableIdentity) -> Option<&Track> {
        self.tracks.get(key)
    }

    /// Number of keyed elements involved.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Whether both layouts were empty.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Elements at `progress` (clamped to `[0, 1]`), eased by `ease`.
    ///
    /// Fully transparent elements are dropped.
    pub fn sample(&self, progress: f64, ease: Ease) -> Vec<SampledElement> {
        let t = ease.apply(progress);
        self.tracks
            .iter()
            .map(|(&key, track)| match *track {
                Track::Moved { from, to } => SampledElement {
                    key,
                    pos: to_point(from).lerp(to_point(to), t),
                    opacity: 1.0,
                },
                Track::Entered { at } => SampledElement {
                    key,
                    pos: to_point(at),
                    opacity: t,
                },
                Track::Exited { at } => SampledElement {
                    key,
                    pos: to_point(at),
                    opacity: 1.0 - t,
                },
            })
            .filter(|e| e.opacity > 0.0)
            .collect()
    }
}

fn to_point(c: Coord) -> Point {
    Point::new(c.x as f64, c.y as f64)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/transition.rs"]
mod tests;
