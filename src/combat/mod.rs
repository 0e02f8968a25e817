//! Combat: monsters, exchange resolution, and the events it reports.

pub mod events;
pub mod logic;
pub mod types;

pub use events::*;
pub use logic::*;
pub use types::*;
