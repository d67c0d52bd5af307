/// Placed block with cached world-space geometry.
/// Vertices and faces are computed once in the constructor. Blocks are
/// immutable afterwards: moving one means building a new block.
use super::{BlockShape, Color, Face, StairDirection};
use crate::coordinate::{self, Coordinate, GridPos};
use crate::error::GeometryError;
use crate::physics::Hitbox;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    pos: GridPos,
    shape: BlockShape,
    color: Color,
    transparent: bool,
    verts: Vec<Coordinate>,
    faces: Vec<Face>,
}

impl Block {
    /// Build a block and cache its geometry. Colors with alpha below 255
    /// mark the block transparent. Fails for a malformed model shape.
    pub fn new(pos: GridPos, shape: BlockShape, color: Color) -> Result<Self, GeometryError> {
        shape.validate()?;
        Ok(Self::build(pos, shape, color))
    }

    /// `shape` must already be valid.
    fn build(pos: GridPos, shape: BlockShape, color: Color) -> Self {
        let origin = coordinate::grid_origin(pos);
        let verts: Vec<Coordinate> = shape.offsets().iter().map(|&o| origin + o).collect();
        let faces = shape
            .facemap()
            .into_iter()
            .map(|indices| Face::new(indices.iter().map(|&i| verts[i]).collect(), color))
            .collect();

        Self {
            pos,
            shape,
            color,
            transparent: color.is_translucent(),
            verts,
            faces,
        }
    }

    #[inline]
    pub fn cube(pos: GridPos, color: Color) -> Self {
        Self::build(pos, BlockShape::Cube, color)
    }

    #[inline]
    pub fn slab(pos: GridPos, color: Color, bottom: bool) -> Self {
        Self::build(pos, BlockShape::Slab { bottom }, color)
    }

    #[inline]
    pub fn stairs(pos: GridPos, color: Color, direction: StairDirection, bottom: bool) -> Self {
        Self::build(pos, BlockShape::Stairs { direction, bottom }, color)
    }

    #[inline]
    pub fn vertical_slab(pos: GridPos, color: Color, left: bool) -> Self {
        Self::build(pos, BlockShape::VerticalSlab { left }, color)
    }

    /// Generic mesh block. Fails if the facemap does not fit the offsets.
    pub fn model(
        pos: GridPos,
        color: Color,
        facemap: Vec<Vec<usize>>,
        offsets: Vec<Vec3>,
    ) -> Result<Self, GeometryError> {
        Self::new(pos, BlockShape::Model { facemap, offsets }, color)
    }

    /// Override the transparency flag. Transparent blocks skip backface culling.
    #[must_use]
    pub fn with_transparency(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    #[inline]
    pub fn pos(&self) -> GridPos {
        self.pos
    }

    #[inline]
    pub fn shape(&self) -> &BlockShape {
        &self.shape
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    #[inline]
    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    #[inline]
    pub fn vertices(&self) -> &[Coordinate] {
        &self.verts
    }

    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// Shape-specific center in world space.
    #[inline]
    pub fn center(&self) -> Coordinate {
        coordinate::grid_origin(self.pos) + self.shape.center_offset()
    }

    /// Collision box: the shape's bounds, anchored at the block position.
    pub fn hitbox(&self) -> Hitbox {
        let (start, end) = self.shape.bounds();
        Hitbox::from_bounds(start, end).anchored(coordinate::grid_origin(self.pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::IVec3;

    #[test]
    fn cube_caches_eight_vertices_and_six_faces() {
        let block = Block::cube(IVec3::new(2, 0, -1), Color::RED);
        assert_eq!(block.vertices().len(), 8);
        assert_eq!(block.faces().len(), 6);
        assert_eq!(block.vertices()[0], Vec3::new(2.0, 0.0, -1.0));
        assert_eq!(block.vertices()[6], Vec3::new(3.0, 1.0, 0.0));
        assert_eq!(block.center(), Vec3::new(2.5, 0.5, -0.5));
        for face in block.faces() {
            assert_eq!(face.vertices().len(), 4);
            assert_eq!(face.color, Color::RED);
        }
    }

    #[test]
    fn cube_faces_point_outward() {
        let block = Block::cube(IVec3::ZERO, Color::WHITE);
        for face in block.faces() {
            let outward = face.center() - block.center();
            assert!(face.normal().dot(outward) > 0.0, "inward face {:?}", face);
        }
    }

    #[test]
    fn stair_faces_point_outward() {
        for direction in StairDirection::ALL {
            for bottom in [true, false] {
                let block = Block::stairs(IVec3::ZERO, Color::WHITE, direction, bottom);
                assert_eq!(block.faces().len(), 8);
                for face in block.faces() {
                    let outward = face.center() - block.center();
                    assert!(
                        face.normal().dot(outward) > 0.0,
                        "{direction} bottom={bottom}: inward face {:?}",
                        face.vertices()
                    );
                }
            }
        }
    }

    #[test]
    fn translucent_color_marks_block_transparent() {
        let glass = Block::cube(IVec3::ZERO, Color::rgba(200, 220, 255, 100));
        assert!(glass.is_transparent());
        let solid = Block::cube(IVec3::ZERO, Color::WHITE);
        assert!(!solid.is_transparent());
        assert!(solid.with_transparency(true).is_transparent());
    }

    #[test]
    fn slab_hitbox_covers_its_half() {
        let slab = Block::slab(IVec3::new(0, 3, 0), Color::WHITE, true);
        let hb = slab.hitbox();
        assert_eq!(hb.min(), Vec3::new(0.0, 3.0, 0.0));
        assert_eq!(hb.max(), Vec3::new(1.0, 3.5, 1.0));
    }

    #[test]
    fn model_block_uses_offsets() {
        let block = Block::model(
            IVec3::new(1, 1, 1),
            Color::WHITE,
            vec![vec![0, 1, 2]],
            vec![Vec3::ZERO, Vec3::X, Vec3::Z],
        )
        .unwrap();
        assert_eq!(block.vertices()[2], Vec3::new(1.0, 1.0, 2.0));
        assert_eq!(block.faces().len(), 1);
    }

    #[test]
    fn hand_built_model_shape_is_validated() {
        let offsets = vec![Vec3::ZERO, Vec3::X, Vec3::Z];
        let out_of_range = BlockShape::Model {
            facemap: vec![vec![0, 1, 5]],
            offsets: offsets.clone(),
        };
        assert_eq!(
            Block::new(IVec3::ZERO, out_of_range, Color::RED).unwrap_err(),
            GeometryError::VertexOutOfRange {
                face: 0,
                index: 5,
                vertex_count: 3
            }
        );

        let degenerate = BlockShape::Model {
            facemap: vec![vec![0, 1, 2], vec![0, 1]],
            offsets,
        };
        assert_eq!(
            Block::new(IVec3::ZERO, degenerate, Color::RED).unwrap_err(),
            GeometryError::DegenerateFace { face: 1, len: 2 }
        );
        assert!(Block::new(IVec3::ZERO, BlockShape::Cube, Color::RED).is_ok());
    }
}
