//! R-tree index over icon centers.
//!
//! Hit testing and viewport culling both start from a rectangle query
//! here, which keeps candidate collection at O(log n) instead of walking
//! every entity per frame.
//!
//! Entries are bare points in world units. Icon radii vary with settings
//! and zoom, so queries inflate their search rect instead of baking a
//! radius into the stored envelope.

use crate::geometry::Vec2;
use rstar::{AABB, RTree, RTreeObject};
use std::collections::HashMap;

/// One indexed icon center.
#[derive(Debug, Clone, Copy)]
pub struct PointEntry {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl PointEntry {
    pub fn new(id: u64, pos: Vec2) -> Self {
        Self {
            id,
            x: pos.x,
            y: pos.y,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

impl RTreeObject for PointEntry {
    type Envelope = AABB<[f32; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_point([self.x, self.y])
    }
}

// Compared by id so tree removal finds the stale entry after a move.
impl PartialEq for PointEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// Id-keyed point index answering rectangle queries.
pub struct SpatialIndex {
    tree: RTree<PointEntry>,
    entries: HashMap<u64, PointEntry>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self {
            tree: RTree::new(),
            entries: HashMap::new(),
        }
    }

    /// Insert or reposition an entry.
    pub fn insert(&mut self, id: u64, pos: Vec2) {
        if let Some(old) = self.entries.remove(&id) {
            self.tree.remove(&old);
        }

        let entry = PointEntry::new(id, pos);
        self.tree.insert(entry);
        self.entries.insert(id, entry);
    }

    pub fn remove(&mut self, id: u64) -> bool {
        let Some(entry) = self.entries.remove(&id) else {
            return false;
        };
        self.tree.remove(&entry);
        true
    }

    /// Ids of all entries whose center lies inside the rect.
    pub fn query_rect(&self, min: Vec2, max: Vec2) -> Vec<u64> {
        let envelope = AABB::from_corners([min.x, min.y], [max.x, max.y]);
        self.tree
            .locate_in_envelope_intersecting(&envelope)
            .map(|entry| entry.id)
            .collect()
    }

    /// Ids of all entries within `reach` of `center`, measured per axis.
    /// This is a broad phase: callers still need an exact distance check.
    pub fn query_around(&self, center: Vec2, reach: f32) -> Vec<u64> {
        self.query_rect(center - Vec2::splat(reach), center + Vec2::splat(reach))
    }

    pub fn position_of(&self, id: u64) -> Option<Vec2> {
        self.entries.get(&id).map(PointEntry::pos)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new()
    }
}
