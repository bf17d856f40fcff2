#![forbid(unsafe_code)]
//! qseq-core: cursors, re-iterable sequences, groupings, errors and config.
//!
//! Design intent:
//! - A `Sequence<T>` is nothing but a cursor factory. Building one never pulls
//!   an element; every effect happens while a `Cursor` is being drained.
//! - Single-threaded: factories are shared through `Rc`, not `Arc`.
//! - Operators live in `qseq-operators`; this crate stays free of them.

pub mod config;
pub mod cursor;
pub mod error;
pub mod grouping;
pub mod metrics;
pub mod prelude;
pub mod sequence;

pub use config::QueryConfig;
pub use cursor::Cursor;
pub use error::{Error, Result};
pub use grouping::Grouping;
pub use sequence::{from, Sequence};
