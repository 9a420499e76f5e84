//! Item storage
//!
//! Items are plain string values stored under their id with no expiration.

mod store;
mod types;

pub use store::ItemStore;
pub use types::Item;
