//! Entities - stateful objects with identity that live inside the aggregate.

mod fighter;

pub use fighter::{
    FighterProfile, FighterState, COMBO_MAX, ENERGY_MAX, STARTING_ENERGY, ULTRA_MAX,
};
