/// Drawing collaborator the pipeline hands screen-space polygons to.
/// All points are already in the surface's pixel space.
use crate::voxel::Color;
use glam::Vec2;

pub trait DrawSurface {
    fn width(&self) -> usize;

    fn height(&self) -> usize;

    fn clear(&mut self, color: Color);

    /// Fill the polygon bounded by the ordered point loop.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color);

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Closed polyline through `points`.
    fn stroke_polygon(&mut self, points: &[Vec2], color: Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        for (i, &from) in points.iter().enumerate() {
            let to = points[(i + 1) % points.len()];
            self.line(from, to, color, width);
        }
    }
}
