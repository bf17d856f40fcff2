//! Hash joins. The inner side is grouped by key into a `Lookup` before the
//! first outer element is pulled; outer elements then stream.

pub mod hash;

pub use hash::{group_join, group_join_groupings, join, join_pairs};
