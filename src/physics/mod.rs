/// Collision primitives for discrete per-tick movement
pub mod hitbox;

pub use hitbox::Hitbox;
