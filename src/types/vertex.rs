use glam::{DVec2, Vec2};

use super::{Float, Vertex};

/// Defines a simple 2d point that can be fed to the triangulation
pub trait Vertex2d: Clone + Copy + Sized {
    fn x(self) -> Float;
    fn y(self) -> Float;

    #[inline(always)]
    #[must_use]
    fn to_vertex(self) -> Vertex {
        Vertex::new(self.x(), self.y())
    }
}

impl Vertex2d for Vec2 {
    #[inline(always)]
    #[must_use]
    fn x(self) -> Float {
        self.x as Float
    }

    #[inline(always)]
    #[must_use]
    fn y(self) -> Float {
        self.y as Float
    }
}
impl Vertex2d for DVec2 {
    #[inline(always)]
    #[must_use]
    fn x(self) -> Float {
        self.x
    }

    #[inline(always)]
    #[must_use]
    fn y(self) -> Float {
        self.y
    }

    #[inline(always)]
    fn to_vertex(self) -> Vertex {
        self
    }
}
impl Vertex2d for [Float; 2] {
    #[inline(always)]
    #[must_use]
    fn x(self) -> Float {
        self[0]
    }

    #[inline(always)]
    #[must_use]
    fn y(self) -> Float {
        self[1]
    }
}
impl Vertex2d for (Float, Float) {
    #[inline(always)]
    #[must_use]
    fn x(self) -> Float {
        self.0
    }

    #[inline(always)]
    #[must_use]
    fn y(self) -> Float {
        self.1
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use crate::types::{Vertex, Vertex2d};

    #[test]
    fn vertex_conversions() {
        assert_eq!(Vertex::new(1.5, -2.), [1.5f64, -2.].to_vertex());
        assert_eq!(Vertex::new(1.5, -2.), (1.5f64, -2.).to_vertex());
        assert_eq!(Vertex::new(1.5, -2.), Vec2::new(1.5, -2.).to_vertex());
        assert_eq!(Vertex::new(1.5, -2.), Vertex::new(1.5, -2.).to_vertex());
    }
}
