/// Visibility and ordering pipeline
/// Per block: backface cull -> sort faces far-to-near -> project -> draw.
/// Per frame: blocks are drawn far-to-near by their shape center
/// (painter's algorithm, no depth buffer).
use super::DrawSurface;
use crate::camera::Camera;
use crate::coordinate::Coordinate;
use crate::voxel::{Block, Color, Face};
use crate::world::World;
use glam::Vec2;
use std::cmp::Ordering;

/// Render toggles and styling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Stroke every drawn face.
    pub outline: bool,
    pub outline_color: Color,
    pub outline_width: f32,
    /// Draw each face's normal as a short segment from its center.
    pub debug_normals: bool,
    pub normal_color: Color,
    pub normal_width: f32,
    pub clear_color: Color,
    /// Marker radius (pixels) for points and entities.
    pub point_radius: f32,
    pub point_color: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            outline: true,
            outline_color: Color::BLACK,
            outline_width: 1.0,
            debug_normals: false,
            normal_color: Color::RED,
            normal_width: 2.0,
            clear_color: Color::SKY,
            point_radius: 5.0,
            point_color: Color::WHITE,
        }
    }
}

/// Per-frame counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub blocks: usize,
    /// Faces dropped by backface culling.
    pub faces_culled: usize,
    /// Faces dropped because a vertex fell outside the near/far range.
    pub faces_clipped: usize,
    pub faces_drawn: usize,
    pub points_drawn: usize,
}

impl std::ops::AddAssign for FrameStats {
    fn add_assign(&mut self, rhs: Self) {
        self.blocks += rhs.blocks;
        self.faces_culled += rhs.faces_culled;
        self.faces_clipped += rhs.faces_clipped;
        self.faces_drawn += rhs.faces_drawn;
        self.points_drawn += rhs.points_drawn;
    }
}

/// NDC -> pixels. Both axes scale by the surface width, so a non-square
/// surface keeps square pixels and crops vertically.
#[inline]
pub fn denormalize(ndc: Vec2, width: usize) -> Vec2 {
    let w = width as f32;
    Vec2::new((ndc.x + 1.0) * 0.5 * w, (1.0 - ndc.y) * 0.5 * w)
}

/// True when the face's normal points toward the camera.
#[inline]
pub fn faces_camera(camera: &Camera, face: &Face) -> bool {
    let to_face = face.center() - camera.pos();
    face.normal().dot(to_face) < 0.0
}

/// Faces that survive backface culling (all faces for transparent blocks),
/// in far-to-near order. Equal distances keep facemap order.
pub fn visible_faces<'a>(camera: &Camera, block: &'a Block) -> Vec<&'a Face> {
    let mut faces: Vec<&Face> = if block.is_transparent() {
        block.faces().iter().collect()
    } else {
        block
            .faces()
            .iter()
            .filter(|face| faces_camera(camera, face))
            .collect()
    };
    sort_far_to_near(&mut faces, |face| camera.zdist(face.center()));
    faces
}

/// Blocks in draw order: farthest shape center first. Ties break on grid
/// position so the order does not depend on map iteration.
pub fn order_blocks<'a, I>(camera: &Camera, blocks: I) -> Vec<&'a Block>
where
    I: IntoIterator<Item = &'a Block>,
{
    let mut keyed: Vec<(f32, &Block)> = blocks
        .into_iter()
        .map(|block| (camera.zdist(block.center()), block))
        .collect();
    keyed.sort_by(|(da, a), (db, b)| {
        db.partial_cmp(da)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.pos().to_array().cmp(&b.pos().to_array()))
    });
    keyed.into_iter().map(|(_, block)| block).collect()
}

#[inline]
fn sort_far_to_near<T>(items: &mut [T], distance: impl Fn(&T) -> f32) {
    items.sort_by(|a, b| distance(b).partial_cmp(&distance(a)).unwrap_or(Ordering::Equal));
}

pub struct Renderer {
    pub config: RenderConfig,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(RenderConfig::default())
    }
}

impl Renderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Clear, then draw every block far-to-near and every registered entity
    /// as a marker on top.
    pub fn render_world<S: DrawSurface>(
        &self,
        world: &World,
        camera: &Camera,
        surface: &mut S,
    ) -> FrameStats {
        surface.clear(self.config.clear_color);
        let mut stats = self.render_blocks(world.blocks(), camera, surface);
        let markers: Vec<Coordinate> = world
            .entities()
            .map(|(_, entity)| (entity.hitbox().min() + entity.hitbox().max()) * 0.5)
            .collect();
        stats.points_drawn += self.render_points(&markers, camera, surface);
        stats
    }

    /// Order and draw a set of blocks without clearing.
    pub fn render_blocks<'a, I, S>(&self, blocks: I, camera: &Camera, surface: &mut S) -> FrameStats
    where
        I: IntoIterator<Item = &'a Block>,
        S: DrawSurface,
    {
        let mut stats = FrameStats::default();
        for block in order_blocks(camera, blocks) {
            stats += self.render_block(block, camera, surface);
        }
        stats
    }

    pub fn render_block<S: DrawSurface>(
        &self,
        block: &Block,
        camera: &Camera,
        surface: &mut S,
    ) -> FrameStats {
        let faces = visible_faces(camera, block);
        let mut stats = FrameStats {
            blocks: 1,
            faces_culled: block.faces().len() - faces.len(),
            ..Default::default()
        };
        for face in faces {
            if self.render_face(face, camera, surface) {
                stats.faces_drawn += 1;
            } else {
                stats.faces_clipped += 1;
            }
        }
        stats
    }

    /// Draw one face. Skipped entirely (returns false) if any vertex fails
    /// to project.
    pub fn render_face<S: DrawSurface>(&self, face: &Face, camera: &Camera, surface: &mut S) -> bool {
        let width = surface.width();
        let Some(screen) = camera
            .project_face(face)
            .into_iter()
            .map(|p| p.map(|ndc| denormalize(ndc, width)))
            .collect::<Option<Vec<Vec2>>>()
        else {
            return false;
        };

        surface.fill_polygon(&screen, face.color);
        if self.config.outline {
            surface.stroke_polygon(&screen, self.config.outline_color, self.config.outline_width);
        }
        if self.config.debug_normals {
            self.render_normal(face, camera, surface);
        }
        true
    }

    /// Filled circles at each point that projects. Returns how many were drawn.
    pub fn render_points<S: DrawSurface>(
        &self,
        points: &[Coordinate],
        camera: &Camera,
        surface: &mut S,
    ) -> usize {
        let width = surface.width();
        let mut drawn = 0;
        for &point in points {
            if let Some(ndc) = camera.project(point) {
                surface.fill_circle(
                    denormalize(ndc, width),
                    self.config.point_radius,
                    self.config.point_color,
                );
                drawn += 1;
            }
        }
        drawn
    }

    fn render_normal<S: DrawSurface>(&self, face: &Face, camera: &Camera, surface: &mut S) {
        let center = face.center();
        let tip = center + face.normal() / 2.0;
        if let (Some(a), Some(b)) = (camera.project(center), camera.project(tip)) {
            let width = surface.width();
            surface.line(
                denormalize(a, width),
                denormalize(b, width),
                self.config.normal_color,
                self.config.normal_width,
            );
        }
    }
}
