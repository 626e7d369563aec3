use std::cmp::Ordering;

use glam::DVec2;
use hashbrown::HashMap;

use crate::triangle::{Triangle, TriangleKey};

pub mod vertex;
pub use vertex::Vertex2d;

/// The float type used in the algorithm's computations
pub type Float = f64;
/// The vertex type used in the algorithm's computations
pub type Vertex = DVec2;

#[cfg(not(feature = "u64_indexes"))]
pub type IndexType = u32;
#[cfg(feature = "u64_indexes")]
pub type IndexType = u64;

pub type VertexId = IndexType;
pub type TriangleId = IndexType;

pub type TriangleVertexIndex = u8;
pub const VERT_1: TriangleVertexIndex = 0;
pub const VERT_2: TriangleVertexIndex = 1;
pub const VERT_3: TriangleVertexIndex = 2;

pub type TriangleEdgeIndex = u8;
pub const EDGE_12: TriangleEdgeIndex = 0;
pub const EDGE_23: TriangleEdgeIndex = 1;
pub const EDGE_31: TriangleEdgeIndex = 2;

/// From a TriangleEdgeIndex, gives the corresponding pair of TriangleVertexIndex
pub const EDGE_TO_VERTS: [[TriangleVertexIndex; 2]; 3] =
    [[VERT_1, VERT_2], [VERT_2, VERT_3], [VERT_3, VERT_1]];

pub type TriangleVertices = [Vertex; 3];

/// Hashable identity of a vertex.
///
/// Two vertices share the same key if and only if their coordinates are exactly equal.
/// `-0.0` and `0.0` are folded together, NaN coordinates are not supported.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexKey([u64; 2]);
impl VertexKey {
    #[inline]
    pub fn new(vertex: Vertex) -> Self {
        Self([fold_zero(vertex.x).to_bits(), fold_zero(vertex.y).to_bits()])
    }
}
#[inline(always)]
fn fold_zero(value: Float) -> Float {
    if value == 0. {
        0.
    } else {
        value
    }
}

/// Lexicographic order on the vertices coordinates: x first, then y
#[inline]
pub fn lexicographic_cmp(a: Vertex, b: Vertex) -> Ordering {
    fold_zero(a.x)
        .total_cmp(&fold_zero(b.x))
        .then_with(|| fold_zero(a.y).total_cmp(&fold_zero(b.y)))
}

/// An edge between two vertices, given by their coordinates.
///
/// The orientation `from -> to` only matters for traversal. Use [`Edge::canonical`] or [`Edge::key`]
/// to compare edges as undirected pairs.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Edge {
    pub from: Vertex,
    pub to: Vertex,
}
impl Edge {
    #[inline]
    pub fn new(from: Vertex, to: Vertex) -> Self {
        Self { from, to }
    }

    /// Returns the same edge with its lexicographically smaller vertex first
    #[inline]
    pub fn canonical(&self) -> Self {
        match lexicographic_cmp(self.from, self.to) {
            Ordering::Greater => Self::new(self.to, self.from),
            _ => *self,
        }
    }

    #[inline]
    pub fn key(&self) -> EdgeKey {
        let canonical = self.canonical();
        EdgeKey([
            VertexKey::new(canonical.from),
            VertexKey::new(canonical.to),
        ])
    }
}

/// Hashable identity of an undirected edge
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey([VertexKey; 2]);

/// The live triangles of a triangulation.
///
/// Triangles are kept in creation order in a slot buffer and indexed by their vertex set, which gives
/// constant time lookups and removals while keeping a deterministic iteration order.
/// A vertex set can only be present once.
#[derive(Clone, Debug, Default)]
pub struct Triangles {
    buffer: Vec<Option<Triangle>>,
    ids: HashMap<TriangleKey, TriangleId>,
}
impl Triangles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(capacity),
            ids: HashMap::with_capacity(capacity),
        }
    }

    /// Returns the triangle at `id`, [`None`] if it was removed
    #[inline]
    pub fn get(&self, id: TriangleId) -> Option<&Triangle> {
        self.buffer.get(id as usize).and_then(Option::as_ref)
    }

    /// Count of live triangles
    #[inline]
    pub fn count(&self) -> usize {
        self.ids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Slots of the buffer, including the ones left empty by removed triangles
    #[inline]
    pub fn buffer(&self) -> &Vec<Option<Triangle>> {
        &self.buffer
    }

    #[inline]
    pub fn next_id(&self) -> TriangleId {
        self.buffer.len() as TriangleId
    }

    /// Adds `triangle` and returns its id.
    ///
    /// Returns [`None`] and leaves the triangles untouched if a triangle with the same vertices is already live.
    pub fn insert(&mut self, triangle: Triangle) -> Option<TriangleId> {
        if self.ids.contains_key(&triangle.key()) {
            return None;
        }
        let id = self.next_id();
        self.ids.insert(triangle.key(), id);
        self.buffer.push(Some(triangle));
        Some(id)
    }

    pub fn remove(&mut self, id: TriangleId) -> Option<Triangle> {
        let triangle = self.buffer.get_mut(id as usize)?.take()?;
        self.ids.remove(&triangle.key());
        Some(triangle)
    }

    /// Iterates over the live triangles, in creation order
    pub fn iter(&self) -> impl Iterator<Item = (TriangleId, &Triangle)> + '_ {
        self.buffer
            .iter()
            .enumerate()
            .filter_map(|(id, slot)| slot.as_ref().map(|t| (id as TriangleId, t)))
    }

    /// Removes the empty slots once they outnumber the live triangles.
    ///
    /// Preserves the order of the live triangles but invalidates all the previously returned ids.
    /// Returns true if the buffer was compacted.
    pub fn compact_if_sparse(&mut self) -> bool {
        if self.buffer.len() - self.ids.len() <= self.ids.len() {
            return false;
        }
        self.buffer.retain(Option::is_some);
        for (id, slot) in self.buffer.iter().enumerate() {
            if let Some(triangle) = slot {
                self.ids.insert(triangle.key(), id as TriangleId);
            }
        }
        true
    }
}

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////
