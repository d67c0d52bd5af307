/// Block geometry: shapes, cached faces and colors
pub mod block;
pub mod color;
pub mod face;
pub mod shape;

pub use block::Block;
pub use color::Color;
pub use face::Face;
pub use shape::{BlockShape, StairDirection, BOX_FACEMAP, STAIRS_FACEMAP};
