//! Data types shared by the engine and its collaborators.
//!
//! Everything that crosses the core boundary is defined here: the item
//! facade, rarity and influence tags, and dated price tables.

mod item;
mod rarity;
mod rates;

pub use item::*;
pub use rarity::*;
pub use rates::*;
