/// World-space coordinates and the float -> grid boundary.
/// Coordinates are plain `glam::Vec3` values: componentwise arithmetic,
/// immutable by construction (`Copy`), so no instance is ever shared.
use glam::{IVec3, Vec3};

/// A point or offset in world space.
pub type Coordinate = Vec3;

/// Integer grid cell used as the world key.
pub type GridPos = IVec3;

/// Left fold of `coords` starting at the zero vector.
#[inline]
pub fn sum<I>(coords: I) -> Coordinate
where
    I: IntoIterator<Item = Coordinate>,
{
    coords.into_iter().fold(Coordinate::ZERO, |acc, c| acc + c)
}

/// Mean of a non-empty set of points. Returns the origin for an empty set.
#[inline]
pub fn mean(coords: &[Coordinate]) -> Coordinate {
    if coords.is_empty() {
        return Coordinate::ZERO;
    }
    sum(coords.iter().copied()) / coords.len() as f32
}

/// Cell containing `pos` (componentwise floor).
#[inline]
pub fn grid_cell(pos: Coordinate) -> GridPos {
    IVec3::new(
        pos.x.floor() as i32,
        pos.y.floor() as i32,
        pos.z.floor() as i32,
    )
}

/// Minimum corner of a grid cell in world space.
#[inline]
pub fn grid_origin(cell: GridPos) -> Coordinate {
    cell.as_vec3()
}
