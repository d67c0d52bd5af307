/// Movable bodies: position, orientation, mounted cameras and a hitbox
/// resolved against the block grid once per tick.
pub mod player;

pub use player::{Player, PlayerConfig};

use crate::angle;
use crate::camera::{Camera, CameraConfig};
use crate::coordinate::{self, Coordinate, GridPos};
use crate::error::ConfigError;
use crate::physics::Hitbox;
use crate::world::World;
use glam::{IVec3, Vec3};

/// Named camera mount. An entity keeps every mounted camera in lockstep.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CameraSlot {
    FirstPerson,
    ThirdPerson,
}

impl CameraSlot {
    /// Next slot in view-cycling order.
    pub fn next(self) -> Self {
        match self {
            CameraSlot::FirstPerson => CameraSlot::ThirdPerson,
            CameraSlot::ThirdPerson => CameraSlot::FirstPerson,
        }
    }
}

#[derive(Clone, Debug)]
struct CameraMount {
    slot: CameraSlot,
    offset: Vec3,
    camera: Camera,
}

/// Construction parameters for an [`Entity`].
#[derive(Clone, Debug)]
pub struct EntityConfig {
    /// Eye position relative to the feet.
    pub cam_offset: Vec3,
    /// Collision box relative to the feet.
    pub hitbox: Hitbox,
    /// Grid offsets (from the destination cell) checked on every move.
    pub surrounding: Vec<IVec3>,
    pub camera: CameraConfig,
}

impl Default for EntityConfig {
    fn default() -> Self {
        Self {
            cam_offset: Vec3::new(0.0, 1.6, 0.0),
            hitbox: Hitbox::from_bounds(Vec3::new(-0.3, 0.0, -0.3), Vec3::new(0.3, 1.8, 0.3)),
            surrounding: standing_neighborhood(),
            camera: CameraConfig::default(),
        }
    }
}

/// 3x3 columns, one cell below the feet up to two above:
/// enough for a body under two blocks tall and one block wide.
pub fn standing_neighborhood() -> Vec<IVec3> {
    let mut offsets = Vec::with_capacity(36);
    for y in -1..=2 {
        for z in -1..=1 {
            for x in -1..=1 {
                offsets.push(IVec3::new(x, y, z));
            }
        }
    }
    offsets
}

#[derive(Clone, Debug)]
pub struct Entity {
    pos: Coordinate,
    yaw: f32,
    pitch: f32,
    cam_offset: Vec3,
    hitbox: Hitbox,
    surrounding: Vec<IVec3>,
    cameras: Vec<CameraMount>,
}

impl Entity {
    /// Entity at `pos` with a first-person camera at `pos + cam_offset`.
    pub fn new(pos: Coordinate, config: EntityConfig) -> Result<Self, ConfigError> {
        let camera = Camera::with_config(pos + config.cam_offset, config.camera)?;
        Ok(Self {
            pos,
            yaw: 0.0,
            pitch: 0.0,
            cam_offset: config.cam_offset,
            hitbox: config.hitbox.anchored(pos),
            surrounding: config.surrounding,
            cameras: vec![CameraMount {
                slot: CameraSlot::FirstPerson,
                offset: config.cam_offset,
                camera,
            }],
        })
    }

    /// Mount (or replace) a camera at `offset` from the feet, facing the
    /// entity's current orientation.
    pub fn mount_camera(
        &mut self,
        slot: CameraSlot,
        offset: Vec3,
        config: CameraConfig,
    ) -> Result<(), ConfigError> {
        let camera = Camera::with_config(self.pos + offset, config)?.facing(self.yaw, self.pitch);
        let mount = CameraMount {
            slot,
            offset,
            camera,
        };
        match self.cameras.iter_mut().find(|m| m.slot == slot) {
            Some(existing) => *existing = mount,
            None => self.cameras.push(mount),
        }
        Ok(())
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
    pub fn cam_offset(&self) -> Vec3 {
        self.cam_offset
    }

    /// Hitbox anchored at the current position.
    #[inline]
    pub fn hitbox(&self) -> Hitbox {
        self.hitbox
    }

    #[inline]
    pub fn surrounding(&self) -> &[IVec3] {
        &self.surrounding
    }

    pub fn camera(&self, slot: CameraSlot) -> Option<&Camera> {
        self.cameras
            .iter()
            .find(|m| m.slot == slot)
            .map(|m| &m.camera)
    }

    pub fn has_camera(&self, slot: CameraSlot) -> bool {
        self.camera(slot).is_some()
    }

    /// First-person camera, always mounted.
    pub fn primary_camera(&self) -> &Camera {
        &self.cameras[0].camera
    }

    /// Move by `delta`, resolving against `world`. Axes whose single-axis
    /// move would collide are zeroed so the remaining motion slides.
    /// Returns the delta actually applied.
    pub fn move_by(&mut self, world: &World, delta: Vec3) -> Vec3 {
        let snap = coordinate::grid_cell(self.pos + delta);
        let mut applied = delta;

        if self.blocked_at(world, snap, self.pos + delta) {
            for axis in 0..3 {
                let mut single = Vec3::ZERO;
                single[axis] = delta[axis];
                if self.blocked_at(world, snap, self.pos + single) {
                    applied[axis] = 0.0;
                }
            }
            log::trace!("move {delta} blocked at cell {snap}, applying {applied}");
        }

        self.translate(applied);
        applied
    }

    /// Walk `forward`/`right` units relative to the current yaw.
    pub fn walk(&mut self, world: &World, forward: f32, right: f32) -> Vec3 {
        let (c, s) = (angle::cos(self.yaw), angle::sin(self.yaw));
        let delta = Vec3::new(forward * s + right * c, 0.0, forward * c - right * s);
        self.move_by(world, delta)
    }

    /// Same wrap/clamp rule as the cameras, forwarded to every mount.
    pub fn rotate(&mut self, dyaw: f32, dpitch: f32) {
        self.yaw = angle::wrap_yaw(self.yaw + dyaw);
        self.pitch = angle::clamp_pitch(self.pitch + dpitch);
        for mount in &mut self.cameras {
            mount.camera.rotate(dyaw, dpitch);
        }
    }

    /// Jump to `pos` without collision; every camera follows at its offset.
    pub fn teleport(&mut self, pos: Coordinate) {
        self.pos = pos;
        self.hitbox = self.hitbox.anchored(pos);
        for mount in &mut self.cameras {
            mount.camera.teleport(pos + mount.offset);
        }
    }

    fn translate(&mut self, delta: Vec3) {
        self.pos += delta;
        self.hitbox = self.hitbox.anchored(self.pos);
        for mount in &mut self.cameras {
            mount.camera.move_by(delta);
        }
    }

    fn blocked_at(&self, world: &World, snap: GridPos, anchor: Coordinate) -> bool {
        let next = self.hitbox.anchored(anchor);
        self.surrounding.iter().any(|&offset| {
            world
                .get_block(snap + offset)
                .is_some_and(|block| block.hitbox().collides(&next))
        })
    }
}
