/// CPU framebuffer for software rendering
/// Color only: draw order (painter's algorithm) decides visibility, so there
/// is no depth buffer. Pixels are stored row-major as 0xAARRGGBB, the layout
/// softbuffer presents directly.
use super::DrawSurface;
use crate::voxel::Color;
use glam::Vec2;

pub struct Framebuffer {
    pub width: usize,
    pub height: usize,
    pub color_buffer: Vec<u32>,
}

impl Framebuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            color_buffer: vec![0; width * height],
        }
    }

    /// Fill the whole buffer with a packed color
    #[inline]
    pub fn fill(&mut self, argb: u32) {
        self.color_buffer.fill(argb);
    }

    /// Write a pixel, ignoring out-of-bounds coordinates
    #[inline]
    pub fn set_pixel(&mut self, x: i64, y: i64, argb: u32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let index = y as usize * self.width + x as usize;
        self.color_buffer[index] = argb;
    }

    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.color_buffer[y * self.width + x])
        } else {
            None
        }
    }

    /// Get color buffer as slice
    pub fn color_buffer_slice(&self) -> &[u32] {
        &self.color_buffer
    }

    /// Count pixels equal to `argb` (test/debug helper)
    pub fn count_pixels(&self, argb: u32) -> usize {
        self.color_buffer.iter().filter(|&&c| c == argb).count()
    }

    /// Resize framebuffer
    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.color_buffer.resize(width * height, 0);
    }

    /// Fill pixels [x0, x1) of row y
    #[inline]
    fn fill_span(&mut self, y: usize, x0: i64, x1: i64, argb: u32) {
        let x0 = x0.max(0) as usize;
        let x1 = x1.min(self.width as i64);
        if x1 <= x0 as i64 {
            return;
        }
        let row = y * self.width;
        self.color_buffer[row + x0..row + x1 as usize].fill(argb);
    }

    /// Stamp a square brush of side `width` centered on `p`
    #[inline]
    fn stamp(&mut self, p: Vec2, width: f32, argb: u32) {
        if width <= 1.0 {
            self.set_pixel(p.x.floor() as i64, p.y.floor() as i64, argb);
            return;
        }
        let half = width * 0.5;
        let x0 = (p.x - half).round() as i64;
        let x1 = (p.x + half).round() as i64;
        let y0 = ((p.y - half).round() as i64).max(0);
        let y1 = ((p.y + half).round() as i64).min(self.height as i64);
        for y in y0..y1 {
            self.fill_span(y as usize, x0, x1, argb);
        }
    }
}

impl DrawSurface for Framebuffer {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn clear(&mut self, color: Color) {
        self.fill(color.to_argb());
    }

    /// Even-odd scanline fill sampled at pixel centers. Handles the concave
    /// hexagonal stair sides as well as quads.
    fn fill_polygon(&mut self, points: &[Vec2], color: Color) {
        if points.len() < 3 || self.height == 0 || points.iter().any(|p| !p.is_finite()) {
            return;
        }
        let argb = color.to_argb();

        let (min_y, max_y) = points
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
                (lo.min(p.y), hi.max(p.y))
            });
        let row_start = ((min_y - 0.5).ceil().max(0.0)) as usize;
        let row_end = ((max_y - 0.5).ceil().min(self.height as f32)).max(0.0) as usize;

        let mut crossings: Vec<f32> = Vec::with_capacity(points.len());
        for y in row_start..row_end {
            let sample_y = y as f32 + 0.5;
            crossings.clear();
            for (i, &a) in points.iter().enumerate() {
                let b = points[(i + 1) % points.len()];
                // Half-open so shared vertices are counted once
                if (a.y <= sample_y && sample_y < b.y) || (b.y <= sample_y && sample_y < a.y) {
                    let t = (sample_y - a.y) / (b.y - a.y);
                    crossings.push(a.x + t * (b.x - a.x));
                }
            }
            crossings.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
            for pair in crossings.chunks_exact(2) {
                let x0 = (pair[0] - 0.5).ceil() as i64;
                let x1 = (pair[1] - 0.5).ceil() as i64;
                self.fill_span(y, x0, x1, argb);
            }
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, color: Color, width: f32) {
        let pad = width.max(1.0);
        let bounds_max = Vec2::new(self.width as f32 + pad, self.height as f32 + pad);
        let Some((from, to)) = clip_segment(from, to, Vec2::splat(-pad), bounds_max) else {
            return;
        };
        let argb = color.to_argb();

        let delta = to - from;
        let steps = delta.x.abs().max(delta.y.abs()).ceil().max(1.0) as usize;
        let step = delta / steps as f32;
        let mut p = from;
        for _ in 0..=steps {
            self.stamp(p, width, argb);
            p += step;
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        if !center.is_finite() || radius <= 0.0 {
            return;
        }
        let argb = color.to_argb();
        let r2 = radius * radius;
        let y0 = ((center.y - radius).floor().max(0.0)) as usize;
        let y1 = ((center.y + radius).ceil().min(self.height as f32)).max(0.0) as usize;
        for y in y0..y1 {
            let dy = y as f32 + 0.5 - center.y;
            let span = r2 - dy * dy;
            if span < 0.0 {
                continue;
            }
            let half = span.sqrt();
            let x0 = (center.x - half - 0.5).ceil() as i64;
            let x1 = (center.x + half - 0.5).ceil() as i64;
            self.fill_span(y, x0, x1, argb);
        }
    }
}

/// Liang-Barsky clip of a segment to an axis-aligned rectangle.
/// Keeps line drawing bounded when projected points land far off-screen.
fn clip_segment(from: Vec2, to: Vec2, min: Vec2, max: Vec2) -> Option<(Vec2, Vec2)> {
    if !from.is_finite() || !to.is_finite() {
        return None;
    }
    let d = to - from;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;
    let checks = [
        (-d.x, from.x - min.x),
        (d.x, max.x - from.x),
        (-d.y, from.y - min.y),
        (d.y, max.y - from.y),
    ];
    for (p, q) in checks {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }
    Some((from + d * t0, from + d * t1))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Color = Color::BLACK;

    fn surface() -> Framebuffer {
        let mut fb = Framebuffer::new(20, 10);
        fb.clear(BG);
        fb
    }

    #[test]
    fn fills_axis_aligned_square() {
        let mut fb = surface();
        let square = [
            Vec2::new(2.0, 2.0),
            Vec2::new(6.0, 2.0),
            Vec2::new(6.0, 6.0),
            Vec2::new(2.0, 6.0),
        ];
        fb.fill_polygon(&square, Color::RED);
        assert_eq!(fb.count_pixels(Color::RED.to_argb()), 16);
        assert_eq!(fb.pixel(2, 2), Some(Color::RED.to_argb()));
        assert_eq!(fb.pixel(6, 6), Some(BG.to_argb()));
    }

    #[test]
    fn fills_concave_l_shape_without_notch() {
        let mut fb = surface();
        // L: 4x4 square with the top-right 2x2 removed
        let l_shape = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(4.0, 2.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
        ];
        fb.fill_polygon(&l_shape, Color::WHITE);
        assert_eq!(fb.count_pixels(Color::WHITE.to_argb()), 12);
        assert_eq!(fb.pixel(3, 0), Some(BG.to_argb()));
        assert_eq!(fb.pixel(3, 3), Some(Color::WHITE.to_argb()));
    }

    #[test]
    fn polygon_is_clipped_to_bounds() {
        let mut fb = surface();
        let huge = [
            Vec2::new(-1e6, -1e6),
            Vec2::new(1e6, -1e6),
            Vec2::new(1e6, 1e6),
            Vec2::new(-1e6, 1e6),
        ];
        fb.fill_polygon(&huge, Color::RED);
        assert_eq!(fb.count_pixels(Color::RED.to_argb()), 200);
    }

    #[test]
    fn draws_lines_and_circles() {
        let mut fb = surface();
        fb.line(Vec2::new(0.5, 5.5), Vec2::new(19.5, 5.5), Color::RED, 1.0);
        assert_eq!(fb.count_pixels(Color::RED.to_argb()), 20);

        fb.fill_circle(Vec2::new(10.0, 5.0), 2.0, Color::WHITE);
        assert_eq!(fb.pixel(10, 5), Some(Color::WHITE.to_argb()));
        assert_eq!(fb.pixel(10, 0), Some(BG.to_argb()));
    }

    #[test]
    fn far_off_screen_line_is_cheap_and_safe() {
        let mut fb = surface();
        fb.line(Vec2::new(-1e9, 5.5), Vec2::new(1e9, 5.5), Color::RED, 3.0);
        assert!(fb.count_pixels(Color::RED.to_argb()) >= 20);
        fb.line(Vec2::new(-1e9, -1e9), Vec2::new(-1e9, 1e9), Color::WHITE, 1.0);
        assert_eq!(fb.count_pixels(Color::WHITE.to_argb()), 0);
    }

    #[test]
    fn clip_segment_rejects_outside() {
        let outside = clip_segment(Vec2::splat(-5.0), Vec2::splat(-1.0), Vec2::ZERO, Vec2::ONE);
        assert!(outside.is_none());

        let (a, b) =
            clip_segment(Vec2::new(-1.0, 0.5), Vec2::new(2.0, 0.5), Vec2::ZERO, Vec2::ONE).unwrap();
        assert!(a.abs_diff_eq(Vec2::new(0.0, 0.5), 1e-6), "{a}");
        assert!(b.abs_diff_eq(Vec2::new(1.0, 0.5), 1e-6), "{b}");
    }
}
