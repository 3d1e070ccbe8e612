//! Scent markers left behind by lost robots.

use glam::IVec2;
use std::collections::HashSet;

/// The set of grid points from which a robot has already fallen off the planet.
///
/// A robot standing on a scented point ignores any move that would take it off
/// the grid. Scents are never removed during a run.
#[derive(Clone, Debug, Default)]
pub struct ScentRegistry {
    locations: HashSet<IVec2>,
}

impl ScentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_scent(&self, position: IVec2) -> bool {
        self.locations.contains(&position)
    }

    /// Marks `position` as scented. Returns `false` if it already was.
    pub fn add_scent(&mut self, position: IVec2) -> bool {
        self.locations.insert(position)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Iterates scented points in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = IVec2> + '_ {
        self.locations.iter().copied()
    }
}
