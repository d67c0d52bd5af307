/// Error types for construction-time validation.
/// Nothing here is raised from the per-frame pipeline; projection misses and
/// occupied cells are ordinary outcomes, not errors.
use glam::Vec3;

/// Invalid configuration handed to a constructor.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("hitbox start {start} exceeds end {end} on at least one axis")]
    InvertedHitbox { start: Vec3, end: Vec3 },

    #[error("field of view must lie in (0, 180) degrees, got {fov}")]
    FieldOfView { fov: f32 },

    #[error("clip planes must satisfy 0 < near < far, got near={near} far={far}")]
    ClipPlanes { near: f32, far: f32 },
}

/// Malformed caller-supplied mesh geometry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GeometryError {
    #[error("face {face} references vertex {index} but only {vertex_count} offsets were supplied")]
    VertexOutOfRange {
        face: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("face {face} has {len} vertices, a face needs at least 3")]
    DegenerateFace { face: usize, len: usize },
}

/// Unknown stair facing string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown stair direction {0:?}, expected one of n, e, s, w")]
pub struct ParseDirectionError(pub String);
