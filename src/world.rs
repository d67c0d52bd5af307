/// Block world and entity registry
/// Blocks are keyed by integer grid cell, at most one per cell.
use crate::coordinate::GridPos;
use crate::entity::Entity;
use crate::voxel::Block;
use glam::Vec3;
use std::collections::HashMap;
use std::fmt;

/// Registry handle for an entity. Never reused within one world.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u64);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entity#{}", self.0)
    }
}

#[derive(Default)]
pub struct World {
    blocks: HashMap<GridPos, Block>,
    entities: HashMap<EntityId, Entity>,
    next_entity_id: u64,
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `block` if its cell is free. An occupied cell is left untouched
    /// and the conflict is logged. Returns whether the block was inserted.
    pub fn add_block(&mut self, block: Block) -> bool {
        let pos = block.pos();
        if self.blocks.contains_key(&pos) {
            log::warn!(
                "block already exists at {pos}, ignoring new {}",
                block.shape().name()
            );
            return false;
        }
        self.blocks.insert(pos, block);
        true
    }

    /// Insert or overwrite. Returns the displaced block.
    pub fn set_block(&mut self, block: Block) -> Option<Block> {
        self.blocks.insert(block.pos(), block)
    }

    /// Remove the block at `pos` if any.
    pub fn remove_block(&mut self, pos: GridPos) -> Option<Block> {
        self.blocks.remove(&pos)
    }

    #[inline]
    pub fn get_block(&self, pos: GridPos) -> Option<&Block> {
        self.blocks.get(&pos)
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.values()
    }

    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    pub fn add_entity(&mut self, entity: Entity) -> EntityId {
        let id = EntityId(self.next_entity_id);
        self.next_entity_id += 1;
        self.entities.insert(id, entity);
        id
    }

    /// Idempotent: removing an unknown id returns `None`.
    pub fn remove_entity(&mut self, id: EntityId) -> Option<Entity> {
        self.entities.remove(&id)
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    pub fn entity_mut(&mut self, id: EntityId) -> Option<&mut Entity> {
        self.entities.get_mut(&id)
    }

    pub fn entities(&self) -> impl Iterator<Item = (EntityId, &Entity)> {
        self.entities.iter().map(|(&id, entity)| (id, entity))
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Move a registered entity against this world's blocks.
    /// Returns the applied delta, or `None` for an unknown id.
    pub fn move_entity(&mut self, id: EntityId, delta: Vec3) -> Option<Vec3> {
        let mut entity = self.entities.remove(&id)?;
        let applied = entity.move_by(self, delta);
        self.entities.insert(id, entity);
        Some(applied)
    }

    /// Drop every block and entity. Ids keep counting up.
    pub fn clear(&mut self) {
        self.blocks.clear();
        self.entities.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::EntityConfig;
    use crate::voxel::{BlockShape, Color};
    use glam::IVec3;

    #[test]
    fn add_block_keeps_existing_on_conflict() {
        let mut world = World::new();
        let pos = IVec3::new(1, 2, 3);
        assert!(world.add_block(Block::cube(pos, Color::RED)));
        assert!(!world.add_block(Block::slab(pos, Color::WHITE, true)));

        let kept = world.get_block(pos).unwrap();
        assert_eq!(kept.color(), Color::RED);
        assert_eq!(kept.shape(), &BlockShape::Cube);
        assert_eq!(world.block_count(), 1);
    }

    #[test]
    fn set_block_overwrites() {
        let mut world = World::new();
        let pos = IVec3::ZERO;
        world.add_block(Block::cube(pos, Color::RED));
        let old = world.set_block(Block::cube(pos, Color::WHITE));
        assert_eq!(old.map(|b| b.color()), Some(Color::RED));
        assert_eq!(world.get_block(pos).unwrap().color(), Color::WHITE);
    }

    #[test]
    fn removed_block_is_gone() {
        let mut world = World::new();
        let pos = IVec3::new(-4, 0, 9);
        world.add_block(Block::cube(pos, Color::RED));
        assert!(world.remove_block(pos).is_some());
        assert!(world.get_block(pos).is_none());
        assert!(world.remove_block(pos).is_none());
    }

    #[test]
    fn entity_ids_are_never_reused() {
        let mut world = World::new();
        let a = world.add_entity(Entity::new(Vec3::ZERO, EntityConfig::default()).unwrap());
        assert!(world.remove_entity(a).is_some());
        assert!(world.remove_entity(a).is_none());
        let b = world.add_entity(Entity::new(Vec3::ONE, EntityConfig::default()).unwrap());
        assert_ne!(a, b);
        world.clear();
        let c = world.add_entity(Entity::new(Vec3::ONE, EntityConfig::default()).unwrap());
        assert_ne!(b, c);
        assert_eq!(world.entity_count(), 1);
    }

    #[test]
    fn move_entity_resolves_against_blocks() {
        let mut world = World::new();
        world.add_block(Block::cube(IVec3::ZERO, Color::WHITE));
        let id = world.add_entity(
            Entity::new(Vec3::new(0.5, 1.0, 0.5), EntityConfig::default()).unwrap(),
        );
        let applied = world.move_entity(id, Vec3::new(0.0, -0.5, 0.0)).unwrap();
        assert_eq!(applied, Vec3::ZERO);
        assert_eq!(world.entity(id).unwrap().pos(), Vec3::new(0.5, 1.0, 0.5));

        world.entity_mut(id).unwrap().teleport(Vec3::new(0.5, 3.0, 0.5));
        let applied = world.move_entity(id, Vec3::new(0.0, -0.5, 0.0)).unwrap();
        assert_eq!(applied, Vec3::new(0.0, -0.5, 0.0));

        world.remove_entity(id);
        assert!(world.move_entity(id, Vec3::X).is_none());
        assert!(world.entity_mut(id).is_none());
    }
}
