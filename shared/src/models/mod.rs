//! Data models
//!
//! Shared between the marketplace backend and its clients (via API).
//! IDs are opaque strings assigned by the server.

pub mod cart;
pub mod delivery;
pub mod mission;
pub mod notification;
pub mod order;
pub mod product;
pub mod review;
pub mod role;

// Re-exports
pub use cart::*;
pub use delivery::*;
pub use mission::*;
pub use notification::*;
pub use order::*;
pub use product::*;
pub use review::*;
pub use role::*;
