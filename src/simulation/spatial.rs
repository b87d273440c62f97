//! Spatial indexing for efficient neighbor queries.
//!
//! Wraps two KD-trees (creatures and food) built once per tick. Query
//! results are sorted by squared distance with insertion index as the tie
//! breaker, so scans over neighbors are fully deterministic.

use kdtree::distance::squared_euclidean;
use kdtree::{ErrorKind as KdTreeError, KdTree};

use super::creature::Creature;
use super::food::Food;

/// Type alias for the 2D KD-tree mapping positions to vector indices.
pub type Tree2D = KdTree<f64, usize, [f64; 2]>;

/// Result of a radius query: `(squared_distance, index)` pairs, sorted.
pub type SpatialQueryResult = Vec<(f64, usize)>;

/// Pre-built KD-trees over the world's creatures and food.
pub struct SpatialIndex {
    creatures: Tree2D,
    food: Tree2D,
}

impl SpatialIndex {
    /// Builds the index from current creature and food positions.
    pub fn build(creatures: &[Creature], food: &[Food]) -> Result<Self, KdTreeError> {
        Ok(Self {
            creatures: build_tree(creatures, |c| c.pos)?,
            food: build_tree(food, |f| f.pos)?,
        })
    }

    /// Creature indices within `radius` of `pos`, nearest first.
    ///
    /// The querying creature itself is included when it is in range; callers
    /// skip it by index.
    pub fn creatures_within(&self, pos: &[f64; 2], radius: f64) -> SpatialQueryResult {
        query(&self.creatures, pos, radius)
    }

    /// Food indices within `radius` of `pos`, nearest first.
    pub fn food_within(&self, pos: &[f64; 2], radius: f64) -> SpatialQueryResult {
        query(&self.food, pos, radius)
    }
}

fn query(tree: &Tree2D, pos: &[f64; 2], radius: f64) -> SpatialQueryResult {
    let mut results: SpatialQueryResult = tree
        .within(pos, radius.powi(2), &squared_euclidean)
        .unwrap_or_default()
        .into_iter()
        .map(|(dist_sq, &idx)| (dist_sq, idx))
        .collect();
    results.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));
    results
}

fn build_tree<T>(items: &[T], get_pos: impl Fn(&T) -> [f64; 2]) -> Result<Tree2D, KdTreeError> {
    let mut tree = KdTree::with_capacity(2, items.len().max(1));
    for (i, item) in items.iter().enumerate() {
        tree.add(get_pos(item), i)?;
    }
    Ok(tree)
}
