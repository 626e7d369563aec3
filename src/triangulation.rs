use hashbrown::{HashMap, HashSet};
use log::{debug, error, warn};
use thiserror::Error;

#[cfg(feature = "parallel_filtering")]
use rayon::iter::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};

use crate::triangle::Triangle;
use crate::types::{
    Edge, EdgeKey, Float, TriangleId, TriangleVertices, Triangles, Vertex, Vertex2d, VertexId,
    VertexKey,
};
use crate::utils::bounding_box;

#[cfg(feature = "progress_log")]
use tracing::info;

#[cfg(feature = "debug_context")]
use crate::debug::{DebugConfiguration, DebugContext, TriangulationPhase};

#[cfg(feature = "profile_traces")]
use tracing::{span, Level};

pub const DEFAULT_FILTER_PARALLEL_TRI_COUNT_THRESHOLD: usize = 100_000;
pub const DEFAULT_FILTER_PARALLEL_MIN_BATCH_LEN: usize = 1000;

/// Margin around the bounding box of the vertices when creating the super triangle, relative to the
/// largest side of the bounding box.
///
/// The super triangle vertices must stay out of the circumcircles of the Delaunay triangles along the
/// convex hull, else these triangles are lost with the super triangle.
pub const SUPER_TRIANGLE_MARGIN_SCALE: Float = 1000.;

/// What to do with the degenerate triangles (collinear vertices) left in the final triangulation.
///
/// Degenerate triangles have an infinite circumradius. They only survive until the end of the
/// triangulation when they are created by the insertion of the last vertices, or when all the
/// input vertices are collinear.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum DegeneratePolicy {
    /// Removes them from the result
    #[default]
    Discard,
    /// Returns them with the other triangles
    Keep,
    /// Fails with [`TriangulationError::DegenerateInput`]
    Reject,
}

#[derive(Clone, Debug)]
pub struct TriangulationConfiguration {
    pub degenerate_policy: DegeneratePolicy,
    /// Above this count of triangles, the super triangle removal is done in parallel.
    ///
    /// Only used with the `parallel_filtering` feature.
    pub filter_parallel_tri_count_threshold: usize,
    /// Minimum count of triangles handled by a parallel task during the super triangle removal
    pub filter_parallel_min_batch_len: usize,
    #[cfg(feature = "debug_context")]
    pub debug_config: DebugConfiguration,
}
impl Default for TriangulationConfiguration {
    fn default() -> Self {
        Self {
            degenerate_policy: DegeneratePolicy::default(),
            filter_parallel_tri_count_threshold: DEFAULT_FILTER_PARALLEL_TRI_COUNT_THRESHOLD,
            filter_parallel_min_batch_len: DEFAULT_FILTER_PARALLEL_MIN_BATCH_LEN,
            #[cfg(feature = "debug_context")]
            debug_config: DebugConfiguration::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TriangulationError {
    #[error("vertex {index} has a non-finite coordinate")]
    NonFiniteVertex { index: usize },
    #[error("the triangulation contains {count} degenerate triangle(s)")]
    DegenerateInput { count: usize },
    #[error("vertex {0} of the triangulation is not an input vertex")]
    VertexNotFound(Vertex),
}

pub struct Triangulation {
    /// Indices of the original vertices by groups of 3 to form triangles.
    pub triangles: Vec<[VertexId; 3]>,
    /// Same triangles as `triangles`, with the vertices coordinates
    pub vertices: Vec<TriangleVertices>,

    #[cfg(feature = "debug_context")]
    pub debug_context: DebugContext,
}

impl Triangulation {
    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Unique undirected edges of the triangulation, as pairs of vertex indices with the lower index first.
    pub fn edges(&self) -> Vec<[VertexId; 2]> {
        let mut uniques = HashSet::with_capacity(self.triangles.len() * 2);
        let mut edges = Vec::with_capacity(self.triangles.len() * 2);
        for triangle in self.triangles.iter() {
            for i in 0..3 {
                let (from, to) = (triangle[i], triangle[(i + 1) % 3]);
                let edge = [from.min(to), from.max(to)];
                if uniques.insert(edge) {
                    edges.push(edge);
                }
            }
        }
        edges
    }
}

/// Creates a Delaunay triangulation of the input vertices.
///
/// The resulting triangles reference the input vertices by index. When some input vertices are
/// identical, the triangles reference the first one.
pub fn triangulation_from_2d_vertices<T: Vertex2d>(
    vertices: &[T],
    config: TriangulationConfiguration,
) -> Result<Triangulation, TriangulationError> {
    #[cfg(feature = "profile_traces")]
    let _span = span!(Level::TRACE, "triangulation_from_2d_vertices").entered();

    let vertices = collect_finite_vertices(vertices)?;

    let mut triangulator = Triangulator::new(config);
    let triangle_vertices = triangulator.triangulate(&vertices)?;

    let vertex_ids = vertex_index_map(&vertices);
    let mut triangles = Vec::with_capacity(triangle_vertices.len());
    for verts in triangle_vertices.iter() {
        triangles.push(resolve_vertex_ids(&vertex_ids, verts)?);
    }

    Ok(Triangulation {
        triangles,
        vertices: triangle_vertices,
        #[cfg(feature = "debug_context")]
        debug_context: triangulator.into_debug_context(),
    })
}

/// Converts the input vertices, rejecting NaN and infinite coordinates
pub(crate) fn collect_finite_vertices<T: Vertex2d>(
    vertices: &[T],
) -> Result<Vec<Vertex>, TriangulationError> {
    let mut collected = Vec::with_capacity(vertices.len());
    for (index, vertex) in vertices.iter().enumerate() {
        let vertex = vertex.to_vertex();
        if !vertex.is_finite() {
            return Err(TriangulationError::NonFiniteVertex { index });
        }
        collected.push(vertex);
    }
    Ok(collected)
}

/// Maps each distinct vertex to the index of its first occurrence in `vertices`
pub(crate) fn vertex_index_map(vertices: &[Vertex]) -> HashMap<VertexKey, VertexId> {
    let mut vertex_ids = HashMap::with_capacity(vertices.len());
    for (index, vertex) in vertices.iter().enumerate() {
        vertex_ids
            .entry(VertexKey::new(*vertex))
            .or_insert(index as VertexId);
    }
    vertex_ids
}

fn resolve_vertex_ids(
    vertex_ids: &HashMap<VertexKey, VertexId>,
    verts: &TriangleVertices,
) -> Result<[VertexId; 3], TriangulationError> {
    let mut ids = [0; 3];
    for (id, vertex) in ids.iter_mut().zip(verts.iter()) {
        *id = *vertex_ids
            .get(&VertexKey::new(*vertex))
            .ok_or(TriangulationError::VertexNotFound(*vertex))?;
    }
    Ok(ids)
}

/// Unique undirected edges of `triangles`.
///
/// Each edge has its lexicographically smaller vertex first. Edges are returned in the order they are first met.
pub fn get_edges(triangles: &[TriangleVertices]) -> Vec<Edge> {
    let mut uniques = HashSet::with_capacity(triangles.len() * 2);
    let mut edges = Vec::with_capacity(triangles.len() * 2);
    for verts in triangles.iter() {
        for i in 0..3 {
            let edge = Edge::new(verts[i], verts[(i + 1) % 3]).canonical();
            if uniques.insert(edge.key()) {
                edges.push(edge);
            }
        }
    }
    edges
}

/// Buffers shared by all the vertex insertions of a triangulation, to re-use their allocations
#[derive(Default)]
struct CavityBuffers {
    bad_triangles: Vec<TriangleId>,
    edge_counts: HashMap<EdgeKey, u32>,
    boundary: Vec<Edge>,
}

/// Incremental Bowyer-Watson triangulator.
///
/// Starts from a super triangle enclosing all the vertices, then inserts the vertices one by one:
/// - the triangles whose circumcircle contains the new vertex ("bad" triangles) are removed,
/// - the cavity they leave is re-triangulated by connecting its boundary edges to the new vertex.
///
/// Finally, the triangles connected to the super triangle are removed.
pub struct Triangulator {
    config: TriangulationConfiguration,
    triangles: Triangles,
    super_triangle: Option<Triangle>,

    #[cfg(feature = "debug_context")]
    debug_context: DebugContext,
}

impl Triangulator {
    pub fn new(config: TriangulationConfiguration) -> Self {
        Self {
            #[cfg(feature = "debug_context")]
            debug_context: DebugContext::new(config.debug_config.clone()),
            config,
            triangles: Triangles::new(),
            super_triangle: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &TriangulationConfiguration {
        &self.config
    }

    /// Working triangles left by the last call to [`Triangulator::triangulate`], before the super triangle removal
    #[inline]
    pub fn triangles(&self) -> &Triangles {
        &self.triangles
    }

    /// Super triangle of the last call to [`Triangulator::triangulate`]
    #[inline]
    pub fn super_triangle(&self) -> Option<&Triangle> {
        self.super_triangle.as_ref()
    }

    #[cfg(feature = "debug_context")]
    #[inline]
    pub fn debug_context(&self) -> &DebugContext {
        &self.debug_context
    }

    #[cfg(feature = "debug_context")]
    pub fn into_debug_context(self) -> DebugContext {
        self.debug_context
    }

    /// Creates a triangle enclosing the bounding box of `vertices`, [`None`] if there are no vertices.
    ///
    /// With `margin` the largest side of the bounding box scaled by [`SUPER_TRIANGLE_MARGIN_SCALE`], the vertices are:
    ///
    /// ```text
    ///                 (center_x, max_y + 2·margin)
    ///                          /\
    ///                         /  \
    ///                        / +-+\
    ///                       /  | | \
    ///                      /   +-+  \
    ///                     /__________\
    /// (min_x - margin, min_y - margin)  (max_x + margin, min_y - margin)
    /// ```
    pub fn create_super_triangle(vertices: &[Vertex]) -> Option<Triangle> {
        let (min, max) = bounding_box(vertices)?;
        let size = max - min;
        let margin = SUPER_TRIANGLE_MARGIN_SCALE * size.max_element();

        Some(Triangle::new(
            Vertex::new(min.x - margin, min.y - margin),
            Vertex::new(max.x + margin, min.y - margin),
            Vertex::new(0.5 * (min.x + max.x), max.y + 2. * margin),
        ))
    }

    /// Unique undirected edges of `triangles`, see [`get_edges`]
    #[inline]
    pub fn get_edges(triangles: &[TriangleVertices]) -> Vec<Edge> {
        get_edges(triangles)
    }

    /// Triangulates `vertices` and returns the triangles as vertex triples.
    ///
    /// Less than 3 vertices give an empty triangulation. Vertices are inserted in the input order,
    /// so the same input always gives the same triangles, in the same order.
    pub fn triangulate<T: Vertex2d>(
        &mut self,
        vertices: &[T],
    ) -> Result<Vec<TriangleVertices>, TriangulationError> {
        #[cfg(feature = "profile_traces")]
        let _span = span!(Level::TRACE, "triangulate").entered();

        let vertices = collect_finite_vertices(vertices)?;

        self.triangles = Triangles::new();
        self.super_triangle = None;
        #[cfg(feature = "debug_context")]
        {
            self.debug_context = DebugContext::new(self.config.debug_config.clone());
        }

        if vertices.len() < 3 {
            return Ok(Vec::new());
        }
        let Some(super_triangle) = Self::create_super_triangle(&vertices) else {
            return Ok(Vec::new());
        };

        self.triangles = Triangles::with_capacity(2 * vertices.len() + 1);
        self.triangles.insert(super_triangle);
        self.super_triangle = Some(super_triangle);

        #[cfg(feature = "debug_context")]
        self.debug_context.push_snapshot(
            TriangulationPhase::SuperTriangleInsertion,
            None,
            self.triangles.buffer(),
            &[0],
        );

        let mut buffers = CavityBuffers::default();
        for (_index, &vertex) in vertices.iter().enumerate() {
            #[cfg(feature = "debug_context")]
            {
                let force_end = self.debug_context.advance_step();
                if force_end {
                    break;
                }
            }

            self.insert_vertex(vertex, _index as VertexId, &mut buffers);

            #[cfg(feature = "progress_log")]
            {
                if _index % ((vertices.len() / 50) + 1) == 0 {
                    let progress = 100. * _index as f32 / vertices.len() as f32;
                    info!(
                        "Triangulation progress, {}%: {}/{}, {} triangles",
                        progress,
                        _index,
                        vertices.len(),
                        self.triangles.count()
                    );
                }
            }
        }

        let triangles = self.remove_super_triangle(&super_triangle);
        let triangles = self.apply_degenerate_policy(triangles)?;

        debug!(
            "Triangulated {} vertices into {} triangles",
            vertices.len(),
            triangles.len()
        );

        Ok(triangles.iter().map(Triangle::to_vertices).collect())
    }

    /// Inserts `vertex` in the working triangles, re-triangulating the cavity formed by the bad triangles
    fn insert_vertex(&mut self, vertex: Vertex, _vertex_id: VertexId, buffers: &mut CavityBuffers) {
        #[cfg(feature = "more_profile_traces")]
        let _span = span!(Level::TRACE, "insert_vertex").entered();

        find_bad_triangles(&self.triangles, vertex, &mut buffers.bad_triangles);
        extract_cavity_boundary(
            &self.triangles,
            &buffers.bad_triangles,
            &mut buffers.edge_counts,
            &mut buffers.boundary,
        );

        for &triangle_id in buffers.bad_triangles.iter() {
            self.triangles.remove(triangle_id);
        }

        #[cfg(feature = "debug_context")]
        let mut changed_ids = Vec::with_capacity(buffers.boundary.len());
        for edge in buffers.boundary.iter() {
            let _new_id = self
                .triangles
                .insert(Triangle::new(edge.from, edge.to, vertex));
            #[cfg(feature = "debug_context")]
            changed_ids.extend(_new_id);
        }

        #[cfg(feature = "debug_context")]
        self.debug_context.push_snapshot(
            TriangulationPhase::CavityRetriangulation,
            Some(_vertex_id),
            self.triangles.buffer(),
            &changed_ids,
        );

        self.triangles.compact_if_sparse();
    }

    /// Returns the working triangles that do not share any vertex with `super_triangle`
    fn remove_super_triangle(&mut self, super_triangle: &Triangle) -> Vec<Triangle> {
        #[cfg(feature = "profile_traces")]
        let _span = span!(Level::TRACE, "remove_super_triangle").entered();

        #[cfg(feature = "debug_context")]
        self.debug_context.advance_step();

        let is_kept = |triangle: &Triangle| {
            !super_triangle
                .verts()
                .iter()
                .any(|v| triangle.has_vertex(*v))
        };

        #[cfg(feature = "parallel_filtering")]
        let kept: Vec<Triangle> =
            if self.triangles.count() > self.config.filter_parallel_tri_count_threshold {
                self.triangles
                    .buffer()
                    .par_iter()
                    .with_min_len(self.config.filter_parallel_min_batch_len)
                    .filter_map(|slot| slot.filter(|t| is_kept(t)))
                    .collect()
            } else {
                self.triangles.iter().map(|(_, t)| *t).filter(is_kept).collect()
            };
        #[cfg(not(feature = "parallel_filtering"))]
        let kept: Vec<Triangle> = self.triangles.iter().map(|(_, t)| *t).filter(is_kept).collect();

        #[cfg(feature = "debug_context")]
        {
            let slots: Vec<Option<Triangle>> = kept.iter().copied().map(Some).collect();
            self.debug_context.push_snapshot(
                TriangulationPhase::RemoveSuperTriangle,
                None,
                &slots,
                &[],
            );
        }

        kept
    }

    fn apply_degenerate_policy(
        &self,
        triangles: Vec<Triangle>,
    ) -> Result<Vec<Triangle>, TriangulationError> {
        let count = triangles.iter().filter(|t| t.is_degenerate()).count();
        if count == 0 {
            return Ok(triangles);
        }
        match self.config.degenerate_policy {
            DegeneratePolicy::Discard => {
                warn!("Discarding {} degenerate triangle(s)", count);
                Ok(triangles.into_iter().filter(|t| !t.is_degenerate()).collect())
            }
            DegeneratePolicy::Keep => {
                warn!("Keeping {} degenerate triangle(s)", count);
                Ok(triangles)
            }
            DegeneratePolicy::Reject => {
                error!("Triangulation rejected, {} degenerate triangle(s)", count);
                Err(TriangulationError::DegenerateInput { count })
            }
        }
    }
}

/// Collects, in creation order, the ids of the triangles whose circumcircle contains `vertex`
pub(crate) fn find_bad_triangles(
    triangles: &Triangles,
    vertex: Vertex,
    bad_triangles: &mut Vec<TriangleId>,
) {
    #[cfg(feature = "more_profile_traces")]
    let _span = span!(Level::TRACE, "find_bad_triangles").entered();

    bad_triangles.clear();
    bad_triangles.extend(
        triangles
            .iter()
            .filter(|(_, t)| t.contains_in_circumcircle(vertex))
            .map(|(id, _)| id),
    );
}

/// Collects the boundary edges of the union of `bad_triangles`.
///
/// An edge belongs to the boundary if it belongs to exactly one of the bad triangles. Boundary edges keep
/// the orientation they have in their triangle, and are ordered by triangle, then by edge index.
pub(crate) fn extract_cavity_boundary(
    triangles: &Triangles,
    bad_triangles: &[TriangleId],
    edge_counts: &mut HashMap<EdgeKey, u32>,
    boundary: &mut Vec<Edge>,
) {
    #[cfg(feature = "more_profile_traces")]
    let _span = span!(Level::TRACE, "extract_cavity_boundary").entered();

    edge_counts.clear();
    boundary.clear();

    for edge in triangles_edges(triangles, bad_triangles) {
        *edge_counts.entry(edge.key()).or_insert(0) += 1;
    }
    boundary.extend(
        triangles_edges(triangles, bad_triangles)
            .filter(|edge| edge_counts.get(&edge.key()) == Some(&1)),
    );
}

fn triangles_edges<'a>(
    triangles: &'a Triangles,
    triangle_ids: &'a [TriangleId],
) -> impl Iterator<Item = Edge> + 'a {
    triangle_ids
        .iter()
        .filter_map(move |&id| triangles.get(id))
        .flat_map(|t| t.edges())
}

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use hashbrown::HashMap;

    use crate::{
        triangle::Triangle,
        triangulation::{
            collect_finite_vertices, extract_cavity_boundary, find_bad_triangles, get_edges,
            triangulation_from_2d_vertices, vertex_index_map, DegeneratePolicy,
            TriangulationConfiguration, TriangulationError, Triangulator,
        },
        types::{Edge, Triangles, Vertex, VertexKey},
        utils::circumcircle_determinant,
    };

    #[test]
    fn super_triangle_encloses_vertices() {
        let vertices = vec![
            Vertex::new(3.0, 2.0),
            Vertex::new(-1.0, 2.0),
            Vertex::new(-1.0, -2.0),
            Vertex::new(3.0, -2.0),
        ];

        let super_triangle =
            Triangulator::create_super_triangle(&vertices).expect("Vertices are not empty");

        // Bounding box is 4x4, margin is 4000
        assert_eq!(Vertex::new(-4001., -4002.), super_triangle.v1());
        assert_eq!(Vertex::new(4003., -4002.), super_triangle.v2());
        assert_eq!(Vertex::new(1., 8002.), super_triangle.v3());
        for vertex in vertices {
            assert!(super_triangle.contains_in_circumcircle(vertex));
            // Strictly inside: on the left of each counter-clockwise edge
            for edge in super_triangle.edges() {
                assert!(circumcircle_determinant(edge.from, edge.to, vertex) > 0.);
            }
        }

        // Unit square corners are inside, with room to spare
        let square = [
            Vertex::new(0., 0.),
            Vertex::new(1., 0.),
            Vertex::new(1., 1.),
            Vertex::new(0., 1.),
        ];
        let super_triangle =
            Triangulator::create_super_triangle(&square).expect("Vertices are not empty");
        for vertex in square {
            for edge in super_triangle.edges() {
                assert!(circumcircle_determinant(edge.from, edge.to, vertex) > 1.);
            }
        }

        assert!(Triangulator::create_super_triangle(&[]).is_none());
    }

    #[test]
    fn first_insertion_splits_super_triangle() {
        let (a, b, c) = (
            Vertex::new(-10., -10.),
            Vertex::new(10., -10.),
            Vertex::new(0., 10.),
        );
        let mut triangles = Triangles::new();
        triangles.insert(Triangle::new(a, b, c));

        let vertex = Vertex::new(0., 0.);
        let mut bad_triangles = Vec::new();
        find_bad_triangles(&triangles, vertex, &mut bad_triangles);
        assert_eq!(vec![0], bad_triangles);

        let mut edge_counts = HashMap::new();
        let mut boundary = Vec::new();
        extract_cavity_boundary(&triangles, &bad_triangles, &mut edge_counts, &mut boundary);
        assert_eq!(
            vec![Edge::new(a, b), Edge::new(b, c), Edge::new(c, a)],
            boundary
        );
    }

    #[test]
    fn shared_edges_are_not_on_cavity_boundary() {
        // a-------------d
        // |  \          |
        // |     \       |
        // |        \    |
        // |           \ |
        // b-------------c
        let (a, b, c, d) = (
            Vertex::new(0., 5.),
            Vertex::new(0., 0.),
            Vertex::new(5., 0.),
            Vertex::new(5., 5.),
        );
        let mut triangles = Triangles::new();
        triangles.insert(Triangle::new(a, b, c));
        triangles.insert(Triangle::new(c, d, a));
        // Far away triangle, not bad
        triangles.insert(Triangle::new(
            Vertex::new(100., 100.),
            Vertex::new(101., 100.),
            Vertex::new(100., 101.),
        ));

        let vertex = Vertex::new(2.5, 2.5);
        let mut bad_triangles = Vec::new();
        find_bad_triangles(&triangles, vertex, &mut bad_triangles);
        assert_eq!(vec![0, 1], bad_triangles);

        let mut edge_counts = HashMap::new();
        let mut boundary = Vec::new();
        extract_cavity_boundary(&triangles, &bad_triangles, &mut edge_counts, &mut boundary);
        assert_eq!(
            vec![
                Edge::new(a, b),
                Edge::new(b, c),
                Edge::new(c, d),
                Edge::new(d, a)
            ],
            boundary
        );
    }

    #[test]
    fn too_few_vertices() {
        let mut triangulator = Triangulator::new(TriangulationConfiguration::default());

        let empty: Vec<Vertex> = Vec::new();
        assert_eq!(Ok(vec![]), triangulator.triangulate(&empty));
        assert_eq!(
            Ok(vec![]),
            triangulator.triangulate(&[[0., 0.], [1., 0.]])
        );
        assert!(triangulator.super_triangle().is_none());
        assert!(triangulator.triangles().is_empty());
    }

    #[test]
    fn single_triangle() {
        let vertices = [[0., 0.], [4., 0.], [0., 3.]];
        let mut triangulator = Triangulator::new(TriangulationConfiguration::default());

        let triangles = triangulator
            .triangulate(&vertices)
            .expect("Triangulation should succeed");

        assert_eq!(1, triangles.len());
        let triangle = Triangle::from(triangles[0]);
        assert_eq!(
            Triangle::new(
                Vertex::new(0., 0.),
                Vertex::new(4., 0.),
                Vertex::new(0., 3.)
            ),
            triangle
        );
        assert!(triangulator.super_triangle().is_some());
    }

    #[test]
    fn non_finite_vertices_are_rejected() {
        let vertices = [[0., 0.], [1., 0.], [f64::NAN, 1.], [0., 1.]];
        assert_eq!(
            Err(TriangulationError::NonFiniteVertex { index: 2 }),
            collect_finite_vertices(&vertices)
        );

        let vertices = [[0., 0.], [1., 0.], [0., f64::INFINITY]];
        let result = triangulation_from_2d_vertices(&vertices, Default::default());
        assert!(matches!(
            result,
            Err(TriangulationError::NonFiniteVertex { index: 2 })
        ));
    }

    #[test]
    fn collinear_vertices_give_no_triangles() {
        let vertices = [[0., 0.], [1., 0.], [2., 0.]];

        for degenerate_policy in [
            DegeneratePolicy::Discard,
            DegeneratePolicy::Keep,
            DegeneratePolicy::Reject,
        ] {
            let triangulation = triangulation_from_2d_vertices(
                &vertices,
                TriangulationConfiguration {
                    degenerate_policy,
                    ..Default::default()
                },
            )
            .expect("Triangulation should succeed");
            assert!(triangulation.is_empty(), "{:?}", degenerate_policy);
        }
    }

    #[test]
    fn degenerate_triangles_policies() {
        // |D| = 2e-12, below the collinearity threshold
        let vertices = [[0., 0.], [1e-6, 0.], [0., 1e-6]];
        let config = |degenerate_policy| TriangulationConfiguration {
            degenerate_policy,
            ..Default::default()
        };

        let discard = triangulation_from_2d_vertices(&vertices, config(DegeneratePolicy::Discard))
            .expect("Discard policy should succeed");
        assert!(discard.is_empty());

        let keep = triangulation_from_2d_vertices(&vertices, config(DegeneratePolicy::Keep))
            .expect("Keep policy should succeed");
        assert_eq!(1, keep.len());
        assert!(Triangle::from(keep.vertices[0]).is_degenerate());
        let mut triangle = keep.triangles[0];
        triangle.sort();
        assert_eq!([0, 1, 2], triangle);

        let reject = Triangulator::new(config(DegeneratePolicy::Reject)).triangulate(&vertices);
        assert_eq!(Err(TriangulationError::DegenerateInput { count: 1 }), reject);
    }

    #[test]
    fn duplicate_vertices_use_first_index() {
        let vertices = [
            Vertex::new(0., 0.),
            Vertex::new(4., 0.),
            Vertex::new(0., 4.),
            Vertex::new(4., 0.),
            Vertex::new(-0., 0.),
        ];
        let vertex_ids = vertex_index_map(&vertices);
        assert_eq!(3, vertex_ids.len());
        assert_eq!(Some(&0), vertex_ids.get(&VertexKey::new(Vertex::new(0., 0.))));
        assert_eq!(Some(&1), vertex_ids.get(&VertexKey::new(Vertex::new(4., 0.))));

        let triangulation = triangulation_from_2d_vertices(&vertices, Default::default())
            .expect("Triangulation should succeed");
        assert_eq!(1, triangulation.len());
        let mut triangle = triangulation.triangles[0];
        triangle.sort();
        assert_eq!([0, 1, 2], triangle);
    }

    #[test]
    fn unique_edges() {
        let (a, b, c, d) = (
            Vertex::new(0., 0.),
            Vertex::new(5., 0.),
            Vertex::new(5., 5.),
            Vertex::new(0., 5.),
        );
        let triangles = [[a, b, c], [c, d, a]];

        let edges = get_edges(&triangles);

        assert_eq!(
            vec![
                Edge::new(a, b),
                Edge::new(b, c),
                Edge::new(a, c),
                Edge::new(d, c),
                Edge::new(a, d)
            ],
            edges
        );
        assert_eq!(edges, Triangulator::get_edges(&triangles));
    }

    #[test]
    fn working_triangles_keep_super_triangle() {
        let vertices = [[0., 0.], [4., 0.], [0., 3.]];
        let mut triangulator = Triangulator::new(TriangulationConfiguration::default());
        triangulator
            .triangulate(&vertices)
            .expect("Triangulation should succeed");

        let super_triangle = *triangulator
            .super_triangle()
            .expect("Super triangle was created");
        let touching_super_triangle = triangulator
            .triangles()
            .iter()
            .filter(|(_, t)| super_triangle.verts().iter().any(|v| t.has_vertex(*v)))
            .count();
        assert_eq!(
            triangulator.triangles().count() - 1,
            touching_super_triangle
        );
    }
}
