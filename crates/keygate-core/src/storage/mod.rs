//! Key-value store backends
//!
//! This module provides two backends:
//! 1. Redis (networked, used in production)
//! 2. In-memory map with expiration (tests and local runs)

mod traits;
mod memory;
mod redis_store;

pub use traits::KeyValueStore;
pub use memory::MemoryStore;
pub use redis_store::RedisStore;
