//! Items and their persisted metadata

// Data structures
pub mod item_data;
pub mod metadata;
// Pure functions
pub mod item_operations;

pub use item_data::{ItemCapabilities, ItemId, ItemProperties, ItemRegistryData, ItemStack};
pub use item_operations::{
    create_item_registry, create_stack, describe_stack, get_item_capabilities, get_item_id,
    get_item_properties, register_item,
};
pub use metadata::{
    decode_metadata, encode_metadata, get_compound, get_list, get_or_create_compound,
    get_or_create_list, metadata_to_json, MetadataCompound, MetadataValue,
};
