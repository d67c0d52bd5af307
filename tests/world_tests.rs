/// World registry behaviour and scene construction.
use glam::{IVec3, Vec3};
use voxel_painter::*;

#[test]
fn one_block_per_cell() {
    let mut world = World::new();
    let pos = IVec3::new(0, 2, 0);
    assert!(world.add_block(Block::slab(pos, Color::WHITE, true)));
    assert!(!world.add_block(Block::cube(pos, Color::RED)));
    assert_eq!(world.get_block(pos).unwrap().shape().name(), "slab");

    let replaced = world.set_block(Block::cube(pos, Color::RED)).unwrap();
    assert_eq!(replaced.shape().name(), "slab");
    assert_eq!(world.block_count(), 1);
}

#[test]
fn lookups_by_fractional_position_go_through_the_grid() {
    let mut world = World::new();
    world.add_block(Block::cube(IVec3::new(-1, 0, 2), Color::RED));
    let cell = coordinate::grid_cell(Vec3::new(-0.1, 0.9, 2.999));
    assert_eq!(cell, IVec3::new(-1, 0, 2));
    assert!(world.get_block(cell).is_some());
}

#[test]
fn registered_entities_move_against_blocks() {
    let mut world = scene::demo_world().unwrap();
    // Standing on the grass floor at y = 0
    let id = world.add_entity(
        Entity::new(Vec3::new(0.5, 1.0, 5.5), EntityConfig::default()).unwrap(),
    );
    let applied = world.move_entity(id, Vec3::new(0.0, -0.2, 0.2)).unwrap();
    assert_eq!(applied.y, 0.0);
    assert!((applied.z - 0.2).abs() < 1e-6);
    assert_eq!(world.entities().count(), 1);
    assert_eq!(world.entity(id).unwrap().pos().y, 1.0);
}

#[test]
fn clear_empties_everything() {
    let mut world = scene::terrain(3, 2);
    assert_eq!(world.block_count(), 25);
    world.add_entity(Entity::new(Vec3::ZERO, EntityConfig::default()).unwrap());
    world.clear();
    assert_eq!(world.block_count(), 0);
    assert_eq!(world.entity_count(), 0);
}
