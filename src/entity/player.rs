/// The controlled entity: an [`Entity`] plus a chase camera mounted behind
/// the eye. The chase camera translates and turns with the player but does
/// not orbit; it stays at a fixed world-space offset.
use super::{CameraSlot, Entity, EntityConfig};
use crate::camera::Camera;
use crate::coordinate::Coordinate;
use crate::error::ConfigError;
use crate::world::World;
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct PlayerConfig {
    pub entity: EntityConfig,
    /// Distance of the third-person camera behind the eye (along -z).
    pub third_person_distance: f32,
    /// Height of the third-person camera above the eye.
    pub third_person_height: f32,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            entity: EntityConfig::default(),
            third_person_distance: 4.0,
            third_person_height: 1.0,
        }
    }
}

impl PlayerConfig {
    pub fn third_person_offset(&self) -> Vec3 {
        self.entity.cam_offset
            + Vec3::new(0.0, self.third_person_height, -self.third_person_distance)
    }
}

#[derive(Clone, Debug)]
pub struct Player {
    entity: Entity,
    third_person_offset: Vec3,
}

impl Player {
    pub fn new(pos: Coordinate, config: PlayerConfig) -> Result<Self, ConfigError> {
        let third_person_offset = config.third_person_offset();
        let camera_config = config.entity.camera;
        let mut entity = Entity::new(pos, config.entity)?;
        entity.mount_camera(CameraSlot::ThirdPerson, third_person_offset, camera_config)?;
        Ok(Self {
            entity,
            third_person_offset,
        })
    }

    #[inline]
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    #[inline]
    pub fn entity_mut(&mut self) -> &mut Entity {
        &mut self.entity
    }

    #[inline]
    pub fn pos(&self) -> Coordinate {
        self.entity.pos()
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.entity.yaw()
    }

    #[inline]
    pub fn pitch(&self) -> f32 {
        self.entity.pitch()
    }

    #[inline]
    pub fn third_person_offset(&self) -> Vec3 {
        self.third_person_offset
    }

    /// Camera mounted in `slot`, falling back to first person.
    pub fn camera(&self, slot: CameraSlot) -> &Camera {
        self.entity
            .camera(slot)
            .unwrap_or_else(|| self.entity.primary_camera())
    }

    #[inline]
    pub fn move_by(&mut self, world: &World, delta: Vec3) -> Vec3 {
        self.entity.move_by(world, delta)
    }

    #[inline]
    pub fn walk(&mut self, world: &World, forward: f32, right: f32) -> Vec3 {
        self.entity.walk(world, forward, right)
    }

    #[inline]
    pub fn rotate(&mut self, dyaw: f32, dpitch: f32) {
        self.entity.rotate(dyaw, dpitch);
    }

    #[inline]
    pub fn teleport(&mut self, pos: Coordinate) {
        self.entity.teleport(pos);
    }
}
