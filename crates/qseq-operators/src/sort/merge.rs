//! Stable merge sort driven by a comparator chain.
//!
//! Only ever asks "does the right head strictly precede the left head", so a
//! chain that is not a strict weak order yields some permutation of the input
//! instead of a panic.

use std::cmp::Ordering;

use super::chain::{compare_chain, LessThan};

/// Sort `items` by `chain`, keeping source order among equal elements.
pub fn stable_sort<T>(mut items: Vec<T>, chain: &[LessThan<T>]) -> Vec<T> {
    if items.len() < 2 || chain.is_empty() {
        return items;
    }
    let right = items.split_off(items.len() / 2);
    merge(stable_sort(items, chain), stable_sort(right, chain), chain)
}

fn merge<T>(left: Vec<T>, right: Vec<T>, chain: &[LessThan<T>]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let take_right = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => compare_chain(chain, r, l) == Ordering::Less,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        out.extend(if take_right { right.next() } else { left.next() });
    }
    out
}
