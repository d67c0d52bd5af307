/// Block shape definitions
/// Every shape is an offset table in block-local space (unit cell at the origin)
/// plus a facemap indexing into it. Blocks turn these into cached world geometry.
use crate::coordinate::{self, Coordinate};
use crate::error::{GeometryError, ParseDirectionError};
use glam::Vec3;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Facemap shared by every box-shaped variant (cube, slabs).
/// Each quad winds so that (v1 - v0) x (v2 - v0) points out of the box.
pub const BOX_FACEMAP: [&[usize]; 6] = [
    &[0, 3, 2, 1], // -z
    &[4, 5, 6, 7], // +z
    &[0, 1, 5, 4], // -y
    &[2, 3, 7, 6], // +y
    &[1, 2, 6, 5], // +x
    &[0, 4, 7, 3], // -x
];

pub const STAIRS_FACEMAP: [&[usize]; 8] = [
    &[0, 1, 2, 3],        // back
    &[1, 4, 5, 2],        // bottom
    &[4, 7, 6, 5],        // lower step riser
    &[8, 9, 3, 2, 5, 6],  // -x side
    &[10, 7, 4, 1, 0, 11], // +x side
    &[8, 6, 7, 10],       // lower step tread
    &[8, 10, 11, 9],      // upper step riser
    &[3, 9, 11, 0],       // upper step tread
];

/// North-facing, bottom-half stairs. Rising toward -z.
const STAIRS_OFFSETS: [Vec3; 12] = [
    Vec3::new(1.0, 1.0, 0.0),
    Vec3::new(1.0, 0.0, 0.0),
    Vec3::new(0.0, 0.0, 0.0),
    Vec3::new(0.0, 1.0, 0.0),
    Vec3::new(1.0, 0.0, 1.0),
    Vec3::new(0.0, 0.0, 1.0),
    Vec3::new(0.0, 0.5, 1.0),
    Vec3::new(1.0, 0.5, 1.0),
    Vec3::new(0.0, 0.5, 0.5),
    Vec3::new(0.0, 1.0, 0.5),
    Vec3::new(1.0, 0.5, 0.5),
    Vec3::new(1.0, 1.0, 0.5),
];

/// Volume centroid of the unrotated stair prism: a full half-height slab
/// (volume 1/2) plus a quarter step on top (volume 1/4).
const STAIRS_CENTROID: Vec3 = Vec3::new(0.5, 5.0 / 12.0, 5.0 / 12.0);

/// Horizontal facing of a stair block, in 90 degree steps about +y.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum StairDirection {
    #[default]
    North,
    East,
    South,
    West,
}

impl StairDirection {
    pub const ALL: [StairDirection; 4] = [
        StairDirection::North,
        StairDirection::East,
        StairDirection::South,
        StairDirection::West,
    ];

    /// Rotate a block-local offset about the cell's vertical center line.
    #[inline]
    pub fn rotate(self, c: Vec3) -> Vec3 {
        match self {
            StairDirection::North => c,
            StairDirection::East => Vec3::new(c.z, c.y, 1.0 - c.x),
            StairDirection::South => Vec3::new(1.0 - c.x, c.y, 1.0 - c.z),
            StairDirection::West => Vec3::new(1.0 - c.z, c.y, c.x),
        }
    }

    pub const fn as_char(self) -> char {
        match self {
            StairDirection::North => 'n',
            StairDirection::East => 'e',
            StairDirection::South => 's',
            StairDirection::West => 'w',
        }
    }
}

impl FromStr for StairDirection {
    type Err = ParseDirectionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" | "north" => Ok(StairDirection::North),
            "e" | "east" => Ok(StairDirection::East),
            "s" | "south" => Ok(StairDirection::South),
            "w" | "west" => Ok(StairDirection::West),
            _ => Err(ParseDirectionError(s.to_string())),
        }
    }
}

impl fmt::Display for StairDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Upside-down variant: mirror vertically and across x.
#[inline]
fn flip_stairs(c: Vec3) -> Vec3 {
    Vec3::new(1.0 - c.x, 1.0 - c.y, c.z)
}

/// The eight corners of an axis-aligned box, in `BOX_FACEMAP` order.
#[inline]
fn box_corners(min: Vec3, max: Vec3) -> [Vec3; 8] {
    [
        Vec3::new(min.x, min.y, min.z),
        Vec3::new(max.x, min.y, min.z),
        Vec3::new(max.x, max.y, min.z),
        Vec3::new(min.x, max.y, min.z),
        Vec3::new(min.x, min.y, max.z),
        Vec3::new(max.x, min.y, max.z),
        Vec3::new(max.x, max.y, max.z),
        Vec3::new(min.x, max.y, max.z),
    ]
}

/// Closed set of block shapes sharing one geometry contract:
/// `offsets`, `facemap` and `center_offset`.
#[derive(Clone, Debug, PartialEq)]
pub enum BlockShape {
    /// Full unit cube.
    Cube,
    /// Half-height box; `bottom` selects the lower half.
    Slab { bottom: bool },
    /// L-shaped prism. `bottom == false` hangs it from the ceiling.
    Stairs { direction: StairDirection, bottom: bool },
    /// Half-width box along x; `left` selects the -x half.
    VerticalSlab { left: bool },
    /// Caller-supplied mesh, checked by [`BlockShape::validate`] whenever a
    /// block is built from it.
    Model {
        facemap: Vec<Vec<usize>>,
        offsets: Vec<Vec3>,
    },
}

impl BlockShape {
    /// Validated constructor for an arbitrary mesh.
    pub fn model(facemap: Vec<Vec<usize>>, offsets: Vec<Vec3>) -> Result<Self, GeometryError> {
        let shape = BlockShape::Model { facemap, offsets };
        shape.validate()?;
        Ok(shape)
    }

    /// Built-in shapes are always valid. A model needs every face to have at
    /// least three indices, each addressing one of its offsets.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let BlockShape::Model { facemap, offsets } = self else {
            return Ok(());
        };
        for (face, indices) in facemap.iter().enumerate() {
            if indices.len() < 3 {
                return Err(GeometryError::DegenerateFace {
                    face,
                    len: indices.len(),
                });
            }
            if let Some(&index) = indices.iter().find(|&&i| i >= offsets.len()) {
                return Err(GeometryError::VertexOutOfRange {
                    face,
                    index,
                    vertex_count: offsets.len(),
                });
            }
        }
        Ok(())
    }

    /// Block-local vertex offsets, indexed by the facemap.
    pub fn offsets(&self) -> Cow<'_, [Vec3]> {
        match self {
            BlockShape::Cube => Cow::Owned(box_corners(Vec3::ZERO, Vec3::ONE).to_vec()),
            BlockShape::Slab { bottom } => {
                let (y0, y1) = if *bottom { (0.0, 0.5) } else { (0.5, 1.0) };
                Cow::Owned(
                    box_corners(Vec3::new(0.0, y0, 0.0), Vec3::new(1.0, y1, 1.0)).to_vec(),
                )
            }
            BlockShape::VerticalSlab { left } => {
                let (x0, x1) = if *left { (0.0, 0.5) } else { (0.5, 1.0) };
                Cow::Owned(
                    box_corners(Vec3::new(x0, 0.0, 0.0), Vec3::new(x1, 1.0, 1.0)).to_vec(),
                )
            }
            BlockShape::Stairs { direction, bottom } => Cow::Owned(
                STAIRS_OFFSETS
                    .iter()
                    .map(|&c| Self::place_stairs(c, *direction, *bottom))
                    .collect(),
            ),
            BlockShape::Model { offsets, .. } => Cow::Borrowed(offsets),
        }
    }

    pub fn facemap(&self) -> Vec<&[usize]> {
        match self {
            BlockShape::Cube | BlockShape::Slab { .. } | BlockShape::VerticalSlab { .. } => {
                BOX_FACEMAP.to_vec()
            }
            BlockShape::Stairs { .. } => STAIRS_FACEMAP.to_vec(),
            BlockShape::Model { facemap, .. } => facemap.iter().map(Vec::as_slice).collect(),
        }
    }

    /// Geometric center relative to the block position.
    pub fn center_offset(&self) -> Vec3 {
        match self {
            BlockShape::Cube => Vec3::splat(0.5),
            BlockShape::Slab { bottom } => {
                Vec3::new(0.5, if *bottom { 0.25 } else { 0.75 }, 0.5)
            }
            BlockShape::VerticalSlab { left } => {
                Vec3::new(if *left { 0.25 } else { 0.75 }, 0.5, 0.5)
            }
            BlockShape::Stairs { direction, bottom } => {
                Self::place_stairs(STAIRS_CENTROID, *direction, *bottom)
            }
            BlockShape::Model { offsets, .. } => coordinate::mean(offsets),
        }
    }

    /// Axis-aligned bounds of the offsets as (min, max).
    pub fn bounds(&self) -> (Vec3, Vec3) {
        let offsets = self.offsets();
        if offsets.is_empty() {
            return (Vec3::ZERO, Vec3::ZERO);
        }
        offsets
            .iter()
            .fold((Vec3::splat(f32::INFINITY), Vec3::splat(f32::NEG_INFINITY)), |(lo, hi), &c| {
                (lo.min(c), hi.max(c))
            })
    }

    pub fn name(&self) -> &'static str {
        match self {
            BlockShape::Cube => "cube",
            BlockShape::Slab { .. } => "slab",
            BlockShape::Stairs { .. } => "stairs",
            BlockShape::VerticalSlab { .. } => "vertical_slab",
            BlockShape::Model { .. } => "model",
        }
    }

    #[inline]
    fn place_stairs(c: Coordinate, direction: StairDirection, bottom: bool) -> Coordinate {
        let rotated = direction.rotate(c);
        if bottom {
            rotated
        } else {
            flip_stairs(rotated)
        }
    }
}
