//! Deferred multi-key ordering.
//!
//! Ordering is an explicit wrapper `{ source, comparator chain }`. Nothing is
//! compared until a cursor is requested; at that point the source is
//! snapshotted and stably sorted by the chain.

pub mod chain;
pub mod merge;
pub mod ordered;

pub use chain::{ascending, compare_chain, descending, LessThan};
pub use merge::stable_sort;
pub use ordered::OrderedSequence;
