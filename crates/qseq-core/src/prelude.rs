//! Convenient re-exports for downstream crates.

pub use crate::config::QueryConfig;
pub use crate::cursor::Cursor;
pub use crate::error::{Error, Result};
pub use crate::grouping::Grouping;
pub use crate::sequence::{from, Sequence};
