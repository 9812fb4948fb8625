//! Prelude module for convenient imports.
//!
//! ```
//! use lootlog_data::prelude::*;
//!
//! let item = Item::new("Exalted Orb", Rarity::Currency);
//! assert_eq!(item.stack_size, 1);
//! ```

// Client types
pub use crate::client::RatesClient;
pub use crate::retry::RetryConfig;

// Error types
pub use crate::error::{ApiError, Error, Result};

// Data models
pub use crate::models::{
    sockets_from_api, ApiSocket, Influence, Item, PriceHistory, PriceTable, Rarity,
};
