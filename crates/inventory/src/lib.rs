//! Inventory domain module.
//!
//! The mutable state of one customer's move: rooms with per-room item counts
//! and a chosen box size, a side list of items not assigned to any room, and
//! the session's custom item registry. Implemented purely as deterministic
//! domain logic (no IO, no HTTP, no storage).

pub mod inventory;
pub mod room;
pub mod snapshot;

pub use inventory::{Inventory, SEED_ROOM_NAMES};
pub use room::Room;
pub use snapshot::{InventorySnapshot, ItemCount, RestoredInventory, RoomSnapshot};
