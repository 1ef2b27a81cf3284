//! Shared fixture for aura tests

use crate::world::blocks::{register_basic_blocks, BlockProperties};
use crate::world::core::registry_operations::{create_block_registry, register_block};
use crate::world::core::{
    BlockId, BlockRegistryData, CapabilitySet, CapabilityTag, ChunkPos, Location, VoxelPos,
    WorldId,
};
use crate::world::data_types::{ExtendedObject, WorldData};
use crate::world::world_operations::{load_chunk, place_extended_object, set_block};

/// A world with chunks loaded over -8..=7 on every axis and one block type per capability
pub struct AuraFixture {
    pub world: WorldData,
    pub blocks: BlockRegistryData,
    pub absorber_block: BlockId,
    pub emitter_block: BlockId,
    pub passive_emitter_block: BlockId,
    pub controller_block: BlockId,
}

impl AuraFixture {
    pub fn new() -> Self {
        let mut blocks = create_block_registry();
        register_basic_blocks(&mut blocks).expect("Failed to register basic blocks");

        let mut aura_block = |name: &str, tags: &[CapabilityTag]| {
            let props = BlockProperties {
                name: name.to_string(),
                capabilities: CapabilitySet::of(tags),
            };
            register_block(&mut blocks, &format!("aura:{}", name), props)
                .expect("Failed to register aura block")
        };

        let absorber_block = aura_block("absorber", &[CapabilityTag::Absorber]);
        let emitter_block = aura_block("emitter", &[CapabilityTag::Emitter]);
        let passive_emitter_block =
            aura_block("passive_emitter", &[CapabilityTag::PassiveEmitter]);
        let controller_block = aura_block("controller", &[]);

        let mut world = WorldData::new(WorldId::OVERWORLD, 8).expect("Failed to create world");
        for x in -1..=0 {
            for y in -1..=0 {
                for z in -1..=0 {
                    load_chunk(&mut world, ChunkPos::new(x, y, z));
                }
            }
        }

        Self {
            world,
            blocks,
            absorber_block,
            emitter_block,
            passive_emitter_block,
            controller_block,
        }
    }

    pub fn loc(&self, x: i32, y: i32, z: i32) -> Location {
        Location::new(self.world.id, x, y, z)
    }

    pub fn place_block(&mut self, x: i32, y: i32, z: i32, block: BlockId) -> Location {
        set_block(&mut self.world, VoxelPos::new(x, y, z), block).expect("Failed to set block");
        self.loc(x, y, z)
    }

    pub fn attach(&mut self, loc: Location, object: ExtendedObject) {
        place_extended_object(&mut self.world, loc.pos, object)
            .expect("Failed to place extended object");
    }

    /// Controller block plus its pooled extended object
    pub fn place_controller(&mut self, x: i32, y: i32, z: i32, capacity: u32, burst: u32) -> Location {
        let loc = self.place_block(x, y, z, self.controller_block);
        self.attach(loc, ExtendedObject::controller("aura:controller", capacity, burst));
        loc
    }
}
