//! Item system: effect registry, item types, loot generation, and owned-effect grouping.

pub mod effects;
pub mod generation;
pub mod loadout;
pub mod types;

pub use effects::*;
pub use generation::*;
pub use loadout::*;
pub use types::*;
