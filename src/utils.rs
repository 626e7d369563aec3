use crate::types::{Float, Vertex};

#[cfg(feature = "more_profile_traces")]
use tracing::{span, Level};

/// Denominator of the closed-form circumcenter of the triangle (a, b, c).
///
/// `2·(ax(by−cy) + bx(cy−ay) + cx(ay−by))`, zero when the three vertices are collinear and positive when
/// they are counter-clockwise.
#[inline(always)]
pub fn circumcircle_determinant(a: Vertex, b: Vertex, c: Vertex) -> Float {
    2. * (a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y))
}

/// Returns the circumcenter and circumradius of the triangle (a, b, c).
///
/// Returns [`None`] when the absolute value of [`circumcircle_determinant`] is below `collinearity_epsilon`.
pub fn circumcircle(
    a: Vertex,
    b: Vertex,
    c: Vertex,
    collinearity_epsilon: Float,
) -> Option<(Vertex, Float)> {
    #[cfg(feature = "more_profile_traces")]
    let _span = span!(Level::TRACE, "circumcircle").entered();

    let d = circumcircle_determinant(a, b, c);
    if d.abs() < collinearity_epsilon {
        return None;
    }

    let a_sq = a.x * a.x + a.y * a.y;
    let b_sq = b.x * b.x + b.y * b.y;
    let c_sq = c.x * c.x + c.y * c.y;

    let center = Vertex::new(
        (a_sq * (b.y - c.y) + b_sq * (c.y - a.y) + c_sq * (a.y - b.y)) / d,
        (a_sq * (c.x - b.x) + b_sq * (a.x - c.x) + c_sq * (b.x - a.x)) / d,
    );
    Some((center, a.distance(center)))
}

/// Area of the triangle (a, b, c), from the cross product of two of its edges
#[inline]
pub fn triangle_area(a: Vertex, b: Vertex, c: Vertex) -> Float {
    0.5 * ((b.x - a.x) * (c.y - a.y) - (c.x - a.x) * (b.y - a.y)).abs()
}

/// Returns the min and max corners of the axis-aligned bounding box of `vertices`, [`None`] if empty.
pub fn bounding_box(vertices: &[Vertex]) -> Option<(Vertex, Vertex)> {
    let first = *vertices.first()?;
    Some(
        vertices
            .iter()
            .fold((first, first), |(min, max), v| (min.min(*v), max.max(*v))),
    )
}

///////////////////////////////////////////////////////////
///                                                     ///
///                        Tests                        ///
///                                                     ///
///////////////////////////////////////////////////////////
