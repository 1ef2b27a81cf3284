//! Example walking an aura network end to end
//!
//! Builds a small in-memory world with absorbers, emitters and two
//! controllers, drains aura through the service, then upgrades a wand.

use aura_engine::{
    constants::core::CHUNK_SIZE,
    items::{create_item_registry, create_stack, register_item, ItemCapabilities, ItemProperties},
    upgrades::{create_upgrade_registry, register_upgrade, UpgradeDefinition},
    world::{
        blocks::{register_basic_blocks, BlockProperties},
        core::registry_operations::{create_block_registry, register_block},
        get_extended_object, load_filled_chunk, load_chunk, log_world_stats, place_extended_object,
        set_block, ChunkPos, WorldErrorContext,
    },
    AuraConfig, AuraService, BlockId, CapabilitySet, CapabilityTag, ExtendedObject, Location,
    VoxelPos, WorldData, WorldId,
};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    println!("Aura Network Example");
    println!("====================");

    // Block types
    let mut blocks = create_block_registry();
    register_basic_blocks(&mut blocks)?;
    let mut aura_block = |name: &str, tags: &[CapabilityTag]| {
        register_block(
            &mut blocks,
            &format!("aura:{}", name),
            BlockProperties {
                name: name.to_string(),
                capabilities: CapabilitySet::of(tags),
            },
        )
    };
    let absorber = aura_block("absorber", &[CapabilityTag::Absorber])?;
    let emitter = aura_block("emitter", &[CapabilityTag::Emitter])?;
    let crystal = aura_block("crystal", &[CapabilityTag::PassiveEmitter])?;
    let controller = aura_block("controller", &[])?;

    // A stone floor with the network on top
    let mut world = WorldData::new(WorldId::OVERWORLD, CHUNK_SIZE)?;
    load_filled_chunk(&mut world, ChunkPos::new(0, -1, 0), BlockId::STONE);
    load_chunk(&mut world, ChunkPos::new(0, 0, 0));

    let layout = [
        (VoxelPos::new(4, 0, 4), absorber),
        (VoxelPos::new(12, 0, 12), absorber),
        (VoxelPos::new(5, 0, 4), emitter),
        (VoxelPos::new(4, 1, 4), crystal),
        (VoxelPos::new(6, 0, 6), controller),
        (VoxelPos::new(1, 0, 1), controller),
    ];
    for (pos, block) in layout {
        set_block(&mut world, pos, block)?;
    }
    place_extended_object(
        &mut world,
        VoxelPos::new(6, 0, 6),
        ExtendedObject::controller("aura:controller", 40, 15),
    )?;
    place_extended_object(
        &mut world,
        VoxelPos::new(1, 0, 1),
        ExtendedObject::controller("aura:controller", 100, 50),
    )?;
    log_world_stats(&world);

    // Items and upgrades
    let mut items = create_item_registry();
    let wand = register_item(
        &mut items,
        "aura:force_wand",
        ItemProperties {
            name: "aura:force_wand".to_string(),
            max_stack_size: 1,
            capabilities: ItemCapabilities::BOTH,
        },
    )?;
    let mut upgrades = create_upgrade_registry();
    register_upgrade(
        &mut upgrades,
        UpgradeDefinition {
            name: "upgrade.speed".to_string(),
            display_name: "Speed".to_string(),
            max_level: 5,
        },
    )?;

    let config = AuraConfig {
        default_scan_radius: 4,
        ..AuraConfig::default()
    };
    let service = AuraService::new(config, blocks, items, upgrades)?;

    // Surveys and requests
    let near = Location::new(world.id, 4, 0, 4);
    let survey = service.survey(&world, near, None)?;
    println!("\nSurvey around {} (radius {}):", survey.origin, survey.radius);
    println!("  absorbers:        {}", survey.absorbers.len());
    println!("  emitters:         {}", survey.emitters.len());
    println!("  passive emitters: {}", survey.passive_emitters.len());
    println!("  controller:       {}", survey.controller.location());

    println!("\nRequests from {}:", near);
    for _ in 0..4 {
        let outcome = service.request_aura(&mut world, near, None)?;
        println!("  {} aura from {}", outcome.amount, outcome.source);
    }
    let pool = get_extended_object(&world, VoxelPos::new(6, 0, 6))
        .and_then(|object| object.aura_pool)
        .world_context("controller pool at 6,0,6")?;
    println!("  controller left with {}/{}", pool.stored, pool.capacity);

    let remote = Location::new(world.id, 12, 0, 12);
    let outcome = service.request_aura(&mut world, remote, None)?;
    println!(
        "\nRequest from {}: {} aura (passive: {})",
        remote, outcome.amount, outcome.passive
    );

    let emitter = Location::new(world.id, 5, 0, 4);
    match service.request_aura(&mut world, emitter, None) {
        Ok(_) => println!("Emitter unexpectedly absorbed aura"),
        Err(e) => println!("Emitter request rejected: {}", e),
    }

    // Upgrade ledger
    let mut stack = create_stack(wand, 1);
    for _ in 0..3 {
        service.add_upgrade_to_stack(&mut stack, "upgrade.speed")?;
    }
    service.add_upgrade_to_stack(&mut stack, "upgrade.unknown")?;
    service.remove_upgrade_from_stack(&mut stack, "upgrade.unknown")?;

    println!("\nWand upgrades:");
    for line in service.refresh_upgrade_display(&mut stack)? {
        println!("  {}", line);
    }
    for entry in service.get_upgrades_from_stack(&stack)? {
        println!("  stored: {} level {}", entry.name, entry.level);
    }

    Ok(())
}
