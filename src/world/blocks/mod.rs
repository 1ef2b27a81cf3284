//! Block definitions

pub mod basic_blocks;
pub mod block_data;

pub use basic_blocks::register_basic_blocks;
pub use block_data::BlockProperties;
