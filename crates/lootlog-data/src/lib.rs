//! Data types at the lootlog core boundary.
//!
//! # Quick Start
//!
//! For convenient imports, use the prelude:
//!
//! ```
//! use lootlog_data::prelude::*;
//! ```
//!
//! This re-exports the item facade, rarity and influence tags, dated price
//! tables and the [`RatesClient`](client::RatesClient) used to fetch them.

pub mod client;
pub mod error;
pub mod models;
pub mod prelude;
pub mod retry;
