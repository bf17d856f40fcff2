#![forbid(unsafe_code)]
//! qseq: lazily-evaluated query operators over re-iterable sequences.
//!
//! ```
//! use qseq::prelude::*;
//!
//! let evens: Vec<i32> = qseq::from(0..10)
//!     .filter(|x| x % 2 == 0)
//!     .select(|x| x * 10)
//!     .to_array();
//! assert_eq!(evens, vec![0, 20, 40, 60, 80]);
//! ```
//!
//! Building a chain pulls nothing; a terminal operator or a `for` loop drives
//! it. Eager operators (`reverse`, `order_by`, `group_by`, joins) buffer only
//! when enumerated.

pub use qseq_core::{config, cursor, error, grouping, metrics, sequence};
pub use qseq_core::{from, Cursor, Error, Grouping, QueryConfig, Result, Sequence};
pub use qseq_operators::{aggregate, combine, filter, group, join, map, set, slice, sort};
pub use qseq_operators::{LessThan, OrderedSequence, Query};

pub mod prelude {
    pub use qseq_core::prelude::*;
    pub use qseq_operators::{OrderedSequence, Query};
}
