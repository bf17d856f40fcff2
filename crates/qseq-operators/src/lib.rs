#![forbid(unsafe_code)]
//! qseq-operators: lazy query operators over `qseq_core::Sequence`.
//!
//! Design intent:
//! - Every operator is stateless to construct and stateful only inside the
//!   cursor it hands out. Constructing a chain never pulls an element.
//! - Streaming operators pull from their parent one element at a time and
//!   never past what the consumer asked for.
//! - Eager operators (reverse, ordering, group/join builds) buffer through
//!   `buffer::materialize` so capacity hints and tracing apply uniformly.
//! - The `Query` trait is the whole surface; each family lives in its own
//!   module as free functions over `Sequence`.

pub mod aggregate;
pub mod buffer;
pub mod combine;
pub mod filter;
pub mod group;
pub mod join;
pub mod map;
pub mod set;
pub mod slice;
pub mod sort;
pub mod traits;

pub use sort::{LessThan, OrderedSequence};
pub use traits::Query;
