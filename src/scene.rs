/// Scene construction - the showcase layout and a noise heightmap patch
use crate::coordinate::Coordinate;
use crate::error::GeometryError;
use crate::voxel::{Block, Color, StairDirection};
use crate::world::World;
use glam::{IVec3, Vec3};
use noise::{NoiseFn, Perlin};

pub const GRASS: Color = Color::rgb(112, 168, 101);
pub const OCHRE: Color = Color::rgb(190, 168, 50);
pub const SKY_BLUE_BLOCK: Color = Color::rgb(100, 150, 255);
pub const WOOD: Color = Color::rgb(150, 75, 0);
pub const STONE: Color = Color::rgb(128, 128, 128);

/// Every block variant side by side along +x, over a grass floor.
pub fn demo_world() -> Result<World, GeometryError> {
    let mut world = World::new();
    world.add_block(Block::cube(IVec3::ZERO, Color::RED));
    world.add_block(Block::cube(IVec3::new(1, 3, 5), SKY_BLUE_BLOCK));

    for x in -3..6 {
        for z in 3..8 {
            world.add_block(Block::cube(IVec3::new(x, 0, z), GRASS));
        }
    }

    world.add_block(Block::slab(IVec3::new(0, 2, 0), GRASS, true));
    world.add_block(Block::slab(IVec3::new(1, 2, 0), GRASS, false));

    world.add_block(Block::stairs(
        IVec3::new(4, 2, 0),
        GRASS,
        StairDirection::North,
        true,
    ));
    world.add_block(Block::stairs(
        IVec3::new(6, 2, 0),
        OCHRE,
        StairDirection::North,
        false,
    ));
    for (x, direction) in [
        (8, StairDirection::South),
        (10, StairDirection::East),
        (12, StairDirection::West),
    ] {
        world.add_block(Block::stairs(IVec3::new(x, 2, 0), OCHRE, direction, true));
    }

    world.add_block(Block::vertical_slab(IVec3::new(14, 2, 0), OCHRE, true));
    world.add_block(Block::vertical_slab(IVec3::new(16, 2, 0), OCHRE, false));

    let (facemap, offsets) = wedge();
    world.add_block(Block::model(IVec3::new(18, 2, 0), WOOD, facemap, offsets)?);

    Ok(world)
}

/// Corners of the unit cell at the origin, drawn as markers.
pub fn demo_points() -> Vec<Coordinate> {
    vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 1.0, 0.0),
        Vec3::new(0.0, 1.0, 0.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
        Vec3::new(0.0, 1.0, 1.0),
    ]
}

/// Ramp rising toward +z: a triangular prism with outward winding.
pub fn wedge() -> (Vec<Vec<usize>>, Vec<Vec3>) {
    let offsets = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 1.0),
        Vec3::new(0.0, 0.0, 1.0),
        Vec3::new(0.0, 1.0, 1.0),
        Vec3::new(1.0, 1.0, 1.0),
    ];
    let facemap = vec![
        vec![0, 1, 2, 3], // bottom
        vec![3, 2, 5, 4], // back
        vec![0, 4, 5, 1], // slope
        vec![0, 3, 4],
        vec![1, 5, 2],
    ];
    (facemap, offsets)
}

/// Surface height of the noise field at a column
pub fn terrain_height(perlin: &Perlin, x: i32, z: i32) -> i32 {
    let scale = 0.08;
    let noise_value = perlin.get([x as f64 * scale, z as f64 * scale]);
    (noise_value * 6.0).round() as i32
}

/// One surface cube per column over a (2r+1)^2 patch centered on the origin.
/// Higher columns turn to stone.
pub fn terrain(seed: u32, radius: i32) -> World {
    let perlin = Perlin::new(seed);
    let mut world = World::new();
    for z in -radius..=radius {
        for x in -radius..=radius {
            let y = terrain_height(&perlin, x, z);
            let color = if y > 2 { STONE } else { GRASS };
            world.add_block(Block::cube(IVec3::new(x, y, z), color));
        }
    }
    log::debug!(
        "generated terrain seed {seed} radius {radius}: {} blocks",
        world.block_count()
    );
    world
}
