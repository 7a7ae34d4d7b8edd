//! Core data structures for ploidy resolution.
//!
//! - [`Region`]: a genomic region identified by a sequence name and a
//!   half-open `[start, end)` interval.
//! - [`SexRegistry`]: bidirectional mapping between sex labels and dense
//!   integer ids, assigned in first-seen order.
//! - [`RegionIntervalMap`]: per-chromosome interval index with an arbitrary
//!   payload attached to every region.
//! - [`typedef`]: type aliases for positions, ploidy values and sex ids.

mod interval_map;
mod region;
mod sex_registry;
pub mod typedef;

pub use interval_map::RegionIntervalMap;
pub use region::Region;
pub use sex_registry::SexRegistry;
