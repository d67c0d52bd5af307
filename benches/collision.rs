/// Benchmark suite for movement resolution
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use glam::{IVec3, Vec3};
use voxel_painter::*;

fn floor_world() -> World {
    let mut world = World::new();
    for x in -8..=8 {
        for z in -8..=8 {
            world.add_block(Block::cube(IVec3::new(x, 0, z), Color::WHITE));
        }
    }
    world
}

fn bench_free_move(c: &mut Criterion) {
    let world = World::new();
    c.bench_function("move_free", |b| {
        let mut player = Player::new(Vec3::ZERO, PlayerConfig::default()).unwrap();
        b.iter(|| player.move_by(&world, black_box(Vec3::new(0.01, 0.0, 0.01))));
    });
}

fn bench_blocked_move(c: &mut Criterion) {
    let world = floor_world();
    c.bench_function("move_slide_on_floor", |b| {
        let mut player = Player::new(Vec3::new(0.5, 1.0, 0.5), PlayerConfig::default()).unwrap();
        b.iter(|| {
            let applied = player.move_by(&world, black_box(Vec3::new(0.05, -0.1, 0.0)));
            player.teleport(Vec3::new(0.5, 1.0, 0.5));
            applied
        });
    });
}

fn bench_hitbox_collides(c: &mut Criterion) {
    let a = Hitbox::new(Vec3::ZERO, Vec3::ONE).unwrap();
    let b_box = a.anchored(Vec3::new(0.5, 0.5, 0.5));
    c.bench_function("hitbox_collides", |b| {
        b.iter(|| black_box(&a).collides(black_box(&b_box)));
    });
}

criterion_group!(benches, bench_free_move, bench_blocked_move, bench_hitbox_collides);
criterion_main!(benches);
