/// Axis-aligned collision box stored as offsets from an owner position,
/// so it can follow a moving owner by re-anchoring instead of rebuilding.
use crate::coordinate::Coordinate;
use crate::error::ConfigError;
use glam::Vec3;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hitbox {
    start: Vec3,
    end: Vec3,
    pos: Coordinate,
}

impl Hitbox {
    /// Box spanning `start..end` relative to its anchor (initially the origin).
    pub fn new(start: Vec3, end: Vec3) -> Result<Self, ConfigError> {
        if start.cmpgt(end).any() {
            return Err(ConfigError::InvertedHitbox { start, end });
        }
        Ok(Self::from_bounds(start, end))
    }

    /// Unchecked constructor for bounds already known to be ordered.
    #[inline]
    pub(crate) fn from_bounds(start: Vec3, end: Vec3) -> Self {
        debug_assert!(start.cmple(end).all());
        Self {
            start,
            end,
            pos: Coordinate::ZERO,
        }
    }

    /// Same offsets, anchored at `pos`.
    #[inline]
    #[must_use]
    pub fn anchored(self, pos: Coordinate) -> Self {
        Self { pos, ..self }
    }

    #[inline]
    pub fn pos(&self) -> Coordinate {
        self.pos
    }

    #[inline]
    pub fn start(&self) -> Vec3 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec3 {
        self.end
    }

    /// World-space minimum corner.
    #[inline]
    pub fn min(&self) -> Vec3 {
        self.pos + self.start
    }

    /// World-space maximum corner.
    #[inline]
    pub fn max(&self) -> Vec3 {
        self.pos + self.end
    }

    /// Strict overlap on all three axes. Shared faces or edges do not collide.
    #[inline]
    pub fn collides(&self, other: &Hitbox) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_max.cmpgt(b_min).all() && b_max.cmpgt(a_min).all()
    }
}
