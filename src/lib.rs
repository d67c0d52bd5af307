/// Voxel Painter - painter's-algorithm software renderer for a block world
/// Blocks of a few shapes on an integer grid, a yaw/pitch perspective camera,
/// and a player resolved against the grid with per-axis AABB collision.
pub mod angle;
pub mod camera;
pub mod coordinate;
pub mod entity;
pub mod error;
pub mod input;
pub mod physics;
pub mod rendering;
pub mod scene;
pub mod session;
pub mod voxel;
pub mod world;

pub use camera::{Camera, CameraConfig};
pub use coordinate::{Coordinate, GridPos};
pub use entity::{CameraSlot, Entity, EntityConfig, Player, PlayerConfig};
pub use error::{ConfigError, GeometryError, ParseDirectionError};
pub use input::{GameOptions, InputState, Key, TickInput};
pub use physics::Hitbox;
pub use rendering::{DrawSurface, FrameStats, Framebuffer, RenderConfig, Renderer};
pub use session::Session;
pub use voxel::{Block, BlockShape, Color, Face, StairDirection};
pub use world::{EntityId, World};
