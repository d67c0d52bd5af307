/// Game session - owns the world, the player and runtime options
/// One `tick` per frame applies input; `render` draws through the active view.
use crate::camera::Camera;
use crate::coordinate::Coordinate;
use crate::entity::{CameraSlot, Player, PlayerConfig};
use crate::error::ConfigError;
use crate::input::{GameOptions, TickInput};
use crate::rendering::{DrawSurface, FrameStats, RenderConfig, Renderer};
use crate::world::World;
use glam::{Vec2, Vec3};

pub struct Session {
    pub world: World,
    pub player: Player,
    pub options: GameOptions,
    active_view: CameraSlot,
}

impl Session {
    pub fn new(world: World, spawn: Coordinate, config: PlayerConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            world,
            player: Player::new(spawn, config)?,
            options: GameOptions::default(),
            active_view: CameraSlot::FirstPerson,
        })
    }

    #[inline]
    pub fn active_view(&self) -> CameraSlot {
        self.active_view
    }

    pub fn toggle_view(&mut self) {
        self.active_view = self.active_view.next();
        log::debug!("switched to {:?} view", self.active_view);
    }

    pub fn active_camera(&self) -> &Camera {
        self.player.camera(self.active_view)
    }

    /// Apply one tick of input. Returns the total delta the player moved.
    pub fn tick(&mut self, input: &TickInput) -> Vec3 {
        if input.toggle_view {
            self.toggle_view();
        }

        let start = self.player.pos();
        if input.teleport_home {
            self.player.teleport(Vec3::ZERO);
            log::debug!("teleported from {start} to origin");
        }
        if input.axis_move != Vec3::ZERO {
            self.player.move_by(&self.world, input.axis_move);
        }
        if input.walk != Vec2::ZERO {
            self.player.walk(&self.world, input.walk.x, input.walk.y);
        }
        if input.look != Vec2::ZERO {
            let sensitivity = self.options.sensitivity;
            self.player
                .rotate(input.look.x * sensitivity, -input.look.y * sensitivity);
        }
        self.player.pos() - start
    }

    /// Draw the world through the active camera. In third person the player
    /// is marked as well. `options` decides outlines and debug normals; the
    /// rest of the style comes from `renderer`, which is left unchanged.
    pub fn render<S: DrawSurface>(&self, renderer: &Renderer, surface: &mut S) -> FrameStats {
        let renderer = Renderer::new(RenderConfig {
            outline: self.options.outline,
            debug_normals: self.options.debug_normals,
            ..renderer.config
        });

        let camera = self.active_camera();
        let mut stats = renderer.render_world(&self.world, camera, surface);
        if self.active_view == CameraSlot::ThirdPerson {
            let hitbox = self.player.entity().hitbox();
            let center = (hitbox.min() + hitbox.max()) * 0.5;
            stats.points_drawn += renderer.render_points(&[center], camera, surface);
        }
        stats
    }

    pub fn debug_line(&self) -> String {
        let pos = self.player.pos();
        format!(
            "pos ({:.2}, {:.2}, {:.2}) | yaw {:.1} | pitch {:.1} | {:?} | {} blocks",
            pos.x,
            pos.y,
            pos.z,
            self.player.yaw(),
            self.player.pitch(),
            self.active_view,
            self.world.block_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Framebuffer;
    use crate::voxel::{Block, Color};
    use glam::IVec3;

    fn session_on_floor() -> Session {
        let mut world = World::new();
        for x in -3..=3 {
            for z in -3..=3 {
                world.add_block(Block::cube(IVec3::new(x, 0, z), Color::WHITE));
            }
        }
        Session::new(world, Vec3::new(0.5, 1.0, 0.5), PlayerConfig::default()).unwrap()
    }

    #[test]
    fn tick_moves_and_stops_on_floor() {
        let mut session = session_on_floor();
        let moved = session.tick(&TickInput {
            axis_move: Vec3::new(0.1, -0.1, 0.0),
            ..Default::default()
        });
        assert!(moved.abs_diff_eq(Vec3::new(0.1, 0.0, 0.0), 1e-6), "{moved}");
    }

    #[test]
    fn mouse_turns_with_sensitivity() {
        let mut session = session_on_floor();
        session.tick(&TickInput {
            look: Vec2::new(50.0, 100.0),
            ..Default::default()
        });
        assert!((session.player.yaw() - 10.0).abs() < 1e-4);
        assert!((session.player.pitch() + 20.0).abs() < 1e-4);
        assert_eq!(session.active_camera().yaw(), session.player.yaw());
    }

    #[test]
    fn home_and_view_toggle() {
        let mut session = session_on_floor();
        session.tick(&TickInput {
            teleport_home: true,
            toggle_view: true,
            ..Default::default()
        });
        assert_eq!(session.player.pos(), Vec3::ZERO);
        assert_eq!(session.active_view(), CameraSlot::ThirdPerson);
        let behind = session.player.pos() + session.player.third_person_offset();
        assert!(session.active_camera().pos().abs_diff_eq(behind, 1e-6));
        assert!(session.debug_line().contains("ThirdPerson"));
    }

    #[test]
    fn render_draws_floor_and_player_marker() {
        let mut session = session_on_floor();
        let renderer = Renderer::new(RenderConfig {
            point_radius: 3.0,
            ..Default::default()
        });
        let mut fb = Framebuffer::new(64, 64);

        let first = session.render(&renderer, &mut fb);
        assert!(first.faces_drawn > 0);
        assert_eq!(first.points_drawn, 0);

        session.toggle_view();
        session.options.outline = false;
        session.options.debug_normals = true;
        let third = session.render(&renderer, &mut fb);
        assert_eq!(third.points_drawn, 1);
        // Options apply per frame without touching the caller's renderer
        assert!(renderer.config.outline);
        assert!(!renderer.config.debug_normals);
        assert_eq!(renderer.config.point_radius, 3.0);
    }
}
