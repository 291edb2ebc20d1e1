//! FuelEU Pool Allocator
//!
//! Redistributes compliance surplus across a declared group of ships for
//! one year. Allocation moves balance between members and never creates or
//! destroys it: `sum(cbAfter) == sum(cbBefore)` for every pool.

pub mod allocator;
pub mod error;
pub mod pool;

pub use allocator::{allocate, PoolRegistry};
pub use error::{PoolError, PoolResult};
pub use pool::{MemberBalance, Pool, PoolMember};
