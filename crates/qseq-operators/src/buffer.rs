//! Buffering for eager operators.

use qseq_core::{metrics, QueryConfig};

/// Drain `iter` into a vector, reserving per the global config.
pub fn materialize<T, I>(op: &'static str, iter: I) -> Vec<T>
where
    I: Iterator<Item = T>,
{
    let cap = QueryConfig::global().capacity_for(iter.size_hint());
    let mut items = Vec::with_capacity(cap);
    items.extend(iter);
    metrics::materialized(op, items.len());
    items
}
