/// Perspective camera
/// Yaw/pitch in degrees, explicit translate -> yaw -> pitch -> divide projection
use crate::angle;
use crate::coordinate::Coordinate;
use crate::error::ConfigError;
use crate::voxel::Face;
use glam::{Vec2, Vec3};

/// Stand-in depth when a point lands exactly on the camera plane.
const DEPTH_EPSILON: f32 = 1e-6;

/// Lens parameters, validated by [`Camera::with_config`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraConfig {
    /// Field of view in degrees.
    pub fov: f32,
    pub near: f32,
    pub far: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 90.0,
            near: 0.1,
            far: 1000.0,
        }
    }
}

impl CameraConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.fov > 0.0 && self.fov < 180.0) {
            return Err(ConfigError::FieldOfView { fov: self.fov });
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(ConfigError::ClipPlanes {
                near: self.near,
                far: self.far,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pos: Coordinate,
    yaw: f32,
    pitch: f32,
    config: CameraConfig,
}

impl Camera {
    /// Camera at `pos` with the default lens, looking down +z.
    pub fn new(pos: Coordinate) -> Self {
        Self {
            pos,
            yaw: 0.0,
            pitch: 0.0,
            config: CameraConfig::default(),
        }
    }

    pub fn with_config(pos: Coordinate, config: CameraConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(pos)
        })
    }

    /// Camera with a starting orientation; angles are wrapped/clamped.
    #[must_use]
    pub fn facing(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = angle::wrap_yaw(yaw);
        self.pitch = angle::clamp_pitch(pitch);
        self
    }

    #[inline]
    pub fn pos(&self) -> Coordinate {
        self.pos
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    #[inline]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Translate by a delta. No bounds checking.
    #[inline]
    pub fn move_by(&mut self, delta: Vec3) {
        self.pos += delta;
    }

    pub fn rotate(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw = angle::wrap_yaw(self.yaw + dyaw);
        self.pitch = angle::clamp_pitch(self.pitch + dpitch);
    }

    #[inline]
    pub fn teleport(&mut self, pos: Coordinate) {
        self.pos = pos;
    }

    /// World point -> camera space (x, y, depth). Yaw is applied in full
    /// before pitch, and pitch consumes the yaw-rotated depth.
    #[inline]
    pub fn to_camera_space(&self, point: Coordinate) -> Vec3 {
        let t = point - self.pos;
        let (cy, sy) = (angle::cos(self.yaw), angle::sin(self.yaw));
        let (cp, sp) = (angle::cos(self.pitch), angle::sin(self.pitch));

        let rx = t.x * cy - t.z * sy;
        let rz = t.x * sy + t.z * cy;

        let ry = t.y * cp - rz * sp;
        let rz = t.y * sp + rz * cp;

        Vec3::new(rx, ry, rz)
    }

    /// Project to normalized device coordinates. `None` when the camera-space
    /// depth falls outside [near, far]. Points outside the horizontal or
    /// vertical field of view are returned unclamped.
    pub fn project(&self, point: Coordinate) -> Option<Vec2> {
        let r = self.to_camera_space(point);
        if r.z < self.config.near || r.z > self.config.far {
            return None;
        }
        let depth = if r.z == 0.0 { DEPTH_EPSILON } else { r.z };
        let scale = angle::tan(self.config.fov / 2.0);
        Some(Vec2::new(r.x / depth * scale, r.y / depth * scale))
    }

    /// Project every vertex of a face, keeping order and misses.
    pub fn project_face(&self, face: &Face) -> Vec<Option<Vec2>> {
        face.vertices().iter().map(|&v| self.project(v)).collect()
    }

    /// Euclidean distance from the eye.
    #[inline]
    pub fn zdist(&self, point: Coordinate) -> f32 {
        self.pos.distance(point)
    }

    /// Direction vector from yaw/pitch.
    pub fn normal(&self) -> Vec3 {
        let cp = angle::cos(self.pitch);
        Vec3::new(
            angle::cos(self.yaw) * cp,
            angle::sin(self.pitch),
            angle::sin(self.yaw) * cp,
        )
    }
}
