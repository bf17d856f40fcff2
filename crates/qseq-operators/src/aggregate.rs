//! Terminal operators. These force enumeration (fully or until decided) and
//! return plain values.
//!
//! Forcing a value out of an empty or ambiguous source returns an `Error`
//! rather than aborting; nothing here catches errors raised upstream.

use std::collections::HashMap;
use std::hash::Hash;

use qseq_core::{Error, Result};

pub fn first<T>(mut items: impl Iterator<Item = T>) -> Result<T> {
    items.next().ok_or(Error::Empty { op: "first" })
}

pub fn first_where<T>(
    mut items: impl Iterator<Item = T>,
    predicate: impl Fn(&T) -> bool,
) -> Result<T> {
    items
        .find(|x| predicate(x))
        .ok_or(Error::NoMatch { op: "first_where" })
}

pub fn last<T>(items: impl Iterator<Item = T>) -> Result<T> {
    items.last().ok_or(Error::Empty { op: "last" })
}

pub fn last_where<T>(
    items: impl Iterator<Item = T>,
    predicate: impl Fn(&T) -> bool,
) -> Result<T> {
    items
        .filter(|x| predicate(x))
        .last()
        .ok_or(Error::NoMatch { op: "last_where" })
}

/// The only element. Fails on an empty source and on a second element.
pub fn single<T>(mut items: impl Iterator<Item = T>) -> Result<T> {
    let only = items.next().ok_or(Error::Empty { op: "single" })?;
    if items.next().is_some() {
        return Err(Error::MoreThanOne { op: "single" });
    }
    Ok(only)
}

/// The only matching element. Stops pulling at the second match.
pub fn single_where<T>(
    mut items: impl Iterator<Item = T>,
    predicate: impl Fn(&T) -> bool,
) -> Result<T> {
    let only = items
        .find(|x| predicate(x))
        .ok_or(Error::NoMatch { op: "single_where" })?;
    if items.any(|x| predicate(&x)) {
        return Err(Error::MoreThanOne { op: "single_where" });
    }
    Ok(only)
}

pub fn element_at<T>(mut items: impl Iterator<Item = T>, index: usize) -> Result<T> {
    items.nth(index).ok_or(Error::IndexOutOfRange { index })
}

/// Fold without a seed; the first element seeds the accumulator.
pub fn reduce<T>(mut items: impl Iterator<Item = T>, combine: impl Fn(T, T) -> T) -> Result<T> {
    let seed = items.next().ok_or(Error::Empty { op: "reduce" })?;
    Ok(items.fold(seed, combine))
}

/// Smallest key. Ties keep the first element reaching the extreme.
pub fn min<T, K: PartialOrd>(items: impl Iterator<Item = T>, key: impl Fn(&T) -> K) -> Result<K> {
    extreme(items, key, |candidate, best| candidate < best, "min").map(|(_, k)| k)
}

pub fn max<T, K: PartialOrd>(items: impl Iterator<Item = T>, key: impl Fn(&T) -> K) -> Result<K> {
    extreme(items, key, |candidate, best| candidate > best, "max").map(|(_, k)| k)
}

/// Element with the smallest key; the first one wins ties.
pub fn argmin<T, K: PartialOrd>(
    items: impl Iterator<Item = T>,
    key: impl Fn(&T) -> K,
) -> Result<T> {
    extreme(items, key, |candidate, best| candidate < best, "argmin").map(|(x, _)| x)
}

pub fn argmax<T, K: PartialOrd>(
    items: impl Iterator<Item = T>,
    key: impl Fn(&T) -> K,
) -> Result<T> {
    extreme(items, key, |candidate, best| candidate > best, "argmax").map(|(x, _)| x)
}

fn extreme<T, K>(
    mut items: impl Iterator<Item = T>,
    key: impl Fn(&T) -> K,
    better: impl Fn(&K, &K) -> bool,
    op: &'static str,
) -> Result<(T, K)> {
    let first = items.next().ok_or(Error::Empty { op })?;
    let first_key = key(&first);
    Ok(items.fold((first, first_key), |best, x| {
        let k = key(&x);
        // strict comparison: an equal key never displaces the current best
        if better(&k, &best.1) {
            (x, k)
        } else {
            best
        }
    }))
}

/// Pairwise equality; lengths must match too.
pub fn sequence_equal_by<T>(
    mut left: impl Iterator<Item = T>,
    mut right: impl Iterator<Item = T>,
    equality: impl Fn(&T, &T) -> bool,
) -> bool {
    loop {
        match (left.next(), right.next()) {
            (Some(a), Some(b)) if equality(&a, &b) => {}
            (None, None) => return true,
            _ => return false,
        }
    }
}

/// Later pairs overwrite earlier ones with the same key.
pub fn to_dictionary<T, K, V>(
    items: impl Iterator<Item = T>,
    key_value: impl Fn(T) -> (K, V),
) -> HashMap<K, V>
where
    K: Hash + Eq,
{
    items.map(key_value).collect()
}
