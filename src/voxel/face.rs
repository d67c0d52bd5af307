/// Planar polygon belonging to a block.
use super::Color;
use crate::coordinate::{self, Coordinate};
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct Face {
    vertices: Vec<Coordinate>,
    pub color: Color,
}

impl Face {
    /// `vertices` is an ordered loop, normally of at least three points.
    pub fn new(vertices: Vec<Coordinate>, color: Color) -> Self {
        Self { vertices, color }
    }

    #[inline]
    pub fn vertices(&self) -> &[Coordinate] {
        &self.vertices
    }

    /// Mean of the vertex loop.
    #[inline]
    pub fn center(&self) -> Coordinate {
        coordinate::mean(&self.vertices)
    }

    /// (v1 - v0) x (v2 - v0). Not normalized; only its sign against other
    /// vectors is meaningful. Zero for fewer than three vertices.
    #[inline]
    pub fn normal(&self) -> Vec3 {
        match self.vertices.as_slice() {
            [v0, v1, v2, ..] => (*v1 - *v0).cross(*v2 - *v0),
            _ => Vec3::ZERO,
        }
    }
}
