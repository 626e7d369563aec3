use std::hash::{Hash, Hasher};

use crate::types::{
    Edge, Float, TriangleEdgeIndex, TriangleVertices, Vertex, VertexKey, EDGE_12, EDGE_23,
    EDGE_31, EDGE_TO_VERTS, VERT_1, VERT_2, VERT_3,
};
use crate::utils::{circumcircle, triangle_area};

/// Below this absolute value of the circumcircle determinant, the vertices of a triangle are considered collinear
pub const COLLINEARITY_EPSILON: Float = 1e-10;
/// Tolerance added to the circumradius when testing if a vertex is inside a circumcircle
pub const CIRCUMCIRCLE_EPSILON: Float = 1e-10;

/// Canonical identity of a triangle: its vertex keys, sorted
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleKey([VertexKey; 3]);
impl TriangleKey {
    pub fn new(verts: &TriangleVertices) -> Self {
        let mut keys = verts.map(VertexKey::new);
        keys.sort_unstable();
        Self(keys)
    }
}

/// A triangle and its circumcircle.
///
/// The circumcircle is computed once at construction. Triangles whose vertices are collinear
/// (see [`COLLINEARITY_EPSILON`]) are degenerate: their circumcenter is the origin and their
/// circumradius is infinite, so that [`Triangle::contains_in_circumcircle`] is true for any vertex.
///
/// Two triangles are equal if they have the same set of vertices, whatever their order.
#[derive(Debug, Copy, Clone)]
pub struct Triangle {
    verts: TriangleVertices,
    circumcenter: Vertex,
    circumradius: Float,
    key: TriangleKey,
}

impl Triangle {
    pub fn new(v1: Vertex, v2: Vertex, v3: Vertex) -> Self {
        let verts = [v1, v2, v3];
        let (circumcenter, circumradius) = circumcircle(v1, v2, v3, COLLINEARITY_EPSILON)
            .unwrap_or((Vertex::ZERO, Float::INFINITY));
        Self {
            verts,
            circumcenter,
            circumradius,
            key: TriangleKey::new(&verts),
        }
    }

    #[inline]
    pub fn v1(&self) -> Vertex {
        self.verts[VERT_1 as usize]
    }
    #[inline]
    pub fn v2(&self) -> Vertex {
        self.verts[VERT_2 as usize]
    }
    #[inline]
    pub fn v3(&self) -> Vertex {
        self.verts[VERT_3 as usize]
    }

    #[inline]
    pub fn verts(&self) -> &TriangleVertices {
        &self.verts
    }

    #[inline]
    pub fn to_vertices(&self) -> TriangleVertices {
        self.verts
    }

    #[inline]
    pub fn circumcenter(&self) -> Vertex {
        self.circumcenter
    }

    #[inline]
    pub fn circumradius(&self) -> Float {
        self.circumradius
    }

    #[inline]
    pub fn key(&self) -> TriangleKey {
        self.key
    }

    /// Returns true if the vertices of the triangle are collinear
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.circumradius == Float::INFINITY
    }

    /// Returns true if `vertex` is inside the circumcircle of the triangle or on its boundary, with a
    /// tolerance of [`CIRCUMCIRCLE_EPSILON`].
    #[inline]
    pub fn contains_in_circumcircle(&self, vertex: Vertex) -> bool {
        vertex.distance(self.circumcenter) <= self.circumradius + CIRCUMCIRCLE_EPSILON
    }

    #[inline]
    pub fn has_vertex(&self, vertex: Vertex) -> bool {
        let key = VertexKey::new(vertex);
        self.verts.iter().any(|v| VertexKey::new(*v) == key)
    }

    #[inline]
    pub fn edge(&self, edge_index: TriangleEdgeIndex) -> Edge {
        let vert_indexes = EDGE_TO_VERTS[edge_index as usize];
        Edge::new(
            self.verts[vert_indexes[0] as usize],
            self.verts[vert_indexes[1] as usize],
        )
    }

    /// The three edges `v1v2`, `v2v3` and `v3v1`
    #[inline]
    pub fn edges(&self) -> [Edge; 3] {
        [self.edge(EDGE_12), self.edge(EDGE_23), self.edge(EDGE_31)]
    }

    #[inline]
    pub fn area(&self) -> Float {
        triangle_area(self.v1(), self.v2(), self.v3())
    }
}

impl PartialEq for Triangle {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}
impl Eq for Triangle {}

impl Hash for Triangle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl From<TriangleVertices> for Triangle {
    fn from(verts: TriangleVertices) -> Self {
        Triangle::new(verts[0], verts[1], verts[2])
    }
}

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////
