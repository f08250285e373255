//! Storage adapters implementing the repository ports.

mod memory;

pub use memory::{InMemoryBattles, InMemoryRoster};
