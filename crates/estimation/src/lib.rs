//! Estimation pipeline for the move inventory.
//!
//! Derives everything the customer sees from the inventory state in one
//! synchronous pass: raw furniture volume, packed-box counts, the smallest
//! adequate vehicle class, and a per-room breakdown. Results are always
//! rebuilt from the current inventory state; nothing here caches, stores or
//! mutates.

pub mod packing;
pub mod project;
pub mod recommend;
pub mod resolve;
pub mod volume;

pub use packing::{BoxCounts, SMALL_ITEM_THRESHOLD_M3};
pub use project::{
    EstimationResult, Estimator, ItemBreakdown, RoomBreakdown, SectionBreakdown, Warning,
};
pub use recommend::{Recommendation, recommend};
pub use resolve::ItemResolver;
pub use volume::{ItemVolume, SectionVolume, furniture_volume, section_volume};
