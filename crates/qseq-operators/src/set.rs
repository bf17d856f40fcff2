//! Set algebra: distinct / except / intersect / union.
//!
//! Each operator comes in two strategies:
//! - `*_by(equality)`: arbitrary equality, no hashing possible, so membership
//!   is a linear scan of an accumulated list. O(N²) / O(N·M).
//! - `*_by_key(key)`: a hashable key per element, backed by a `HashSet`.
//!   O(N) / O(N+M).
//!
//! The "other" side of except/intersect is buffered on the first pull of a
//! cursor, so a one-shot `other` is only drained once per enumeration.

use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;

use qseq_core::{metrics, QueryConfig, Sequence};

use crate::combine::concat;

/// Accumulated list for equality-based membership tests.
struct SeenList<T> {
    op: &'static str,
    items: Vec<T>,
    warn_len: usize,
    warned: bool,
}

impl<T: Clone> SeenList<T> {
    fn new(op: &'static str) -> Self {
        Self {
            op,
            items: Vec::new(),
            warn_len: QueryConfig::global().linear_scan_warn_len,
            warned: false,
        }
    }

    fn contains(&self, x: &T, equality: &dyn Fn(&T, &T) -> bool) -> bool {
        self.items.iter().any(|seen| equality(seen, x))
    }

    /// Record `x` unless an equal element was seen; true when it was new.
    fn insert_if_new(&mut self, x: &T, equality: &dyn Fn(&T, &T) -> bool) -> bool {
        if self.contains(x, equality) {
            return false;
        }
        self.push(x.clone());
        true
    }

    fn push(&mut self, x: T) {
        self.items.push(x);
        if !self.warned && self.items.len() > self.warn_len {
            self.warned = true;
            metrics::linear_scan(self.op, self.items.len());
        }
    }
}

/// First occurrence of each element under `equality`; later duplicates are
/// suppressed.
pub fn distinct_by<T, E>(source: Sequence<T>, equality: E) -> Sequence<T>
where
    T: Clone + 'static,
    E: Fn(&T, &T) -> bool + 'static,
{
    let equality = Rc::new(equality);
    Sequence::from_factory(move || {
        let equality = Rc::clone(&equality);
        let mut seen = SeenList::new("distinct_by");
        source
            .cursor()
            .filter(move |x| seen.insert_if_new(x, &*equality))
    })
}

/// First occurrence of each key.
pub fn distinct_by_key<T, K, F>(source: Sequence<T>, key: F) -> Sequence<T>
where
    T: 'static,
    K: Hash + Eq + 'static,
    F: Fn(&T) -> K + 'static,
{
    let key = Rc::new(key);
    Sequence::from_factory(move || {
        let key = Rc::clone(&key);
        let mut seen = HashSet::new();
        source.cursor().filter(move |x| seen.insert(key(x)))
    })
}

/// Distinct elements of `source` with no equal element in `other`.
pub fn except_by<T, E>(source: Sequence<T>, other: Sequence<T>, equality: E) -> Sequence<T>
where
    T: Clone + 'static,
    E: Fn(&T, &T) -> bool + 'static,
{
    let equality = Rc::new(equality);
    let eq = Rc::clone(&equality);
    let distinct = distinct_by(source, move |a, b| eq(a, b));
    Sequence::from_factory(move || {
        let equality = Rc::clone(&equality);
        let other = other.clone();
        let mut excluded: Option<SeenList<T>> = None;
        distinct.cursor().filter(move |x| {
            let excluded = excluded.get_or_insert_with(|| buffer_list("except_by", &other));
            !excluded.contains(x, &*equality)
        })
    })
}

/// Elements of `source` whose key is absent from `other`, each key once.
pub fn except_by_key<T, K, F>(source: Sequence<T>, other: Sequence<T>, key: F) -> Sequence<T>
where
    T: 'static,
    K: Hash + Eq + 'static,
    F: Fn(&T) -> K + 'static,
{
    let key = Rc::new(key);
    Sequence::from_factory(move || {
        let key = Rc::clone(&key);
        let other = other.clone();
        let mut seen: Option<HashSet<K>> = None;
        source.cursor().filter(move |x| {
            // Keys of `other` seed the seen-set, so both exclusion and
            // self-deduplication are a single insert.
            let seen = seen.get_or_insert_with(|| other.cursor().map(|o| key(&o)).collect());
            seen.insert(key(x))
        })
    })
}

/// Distinct elements of `source` with an equal element in `other`.
pub fn intersect_by<T, E>(source: Sequence<T>, other: Sequence<T>, equality: E) -> Sequence<T>
where
    T: Clone + 'static,
    E: Fn(&T, &T) -> bool + 'static,
{
    let equality = Rc::new(equality);
    let eq = Rc::clone(&equality);
    let distinct = distinct_by(source, move |a, b| eq(a, b));
    Sequence::from_factory(move || {
        let equality = Rc::clone(&equality);
        let other = other.clone();
        let mut allowed: Option<SeenList<T>> = None;
        distinct.cursor().filter(move |x| {
            let allowed = allowed.get_or_insert_with(|| buffer_list("intersect_by", &other));
            allowed.contains(x, &*equality)
        })
    })
}

/// Elements of `source` whose key occurs in `other`. A matched key is spent:
/// later elements of `source` with the same key are excluded.
pub fn intersect_by_key<T, K, F>(source: Sequence<T>, other: Sequence<T>, key: F) -> Sequence<T>
where
    T: 'static,
    K: Hash + Eq + 'static,
    F: Fn(&T) -> K + 'static,
{
    let key = Rc::new(key);
    Sequence::from_factory(move || {
        let key = Rc::clone(&key);
        let other = other.clone();
        let mut available: Option<HashSet<K>> = None;
        source.cursor().filter(move |x| {
            let available =
                available.get_or_insert_with(|| other.cursor().map(|o| key(&o)).collect());
            available.remove(&key(x))
        })
    })
}

/// `distinct(source)` followed by the distinct elements of `other` that are
/// not in `source`.
pub fn union_by<T, E>(source: Sequence<T>, other: Sequence<T>, equality: E) -> Sequence<T>
where
    T: Clone + 'static,
    E: Fn(&T, &T) -> bool + 'static,
{
    let equality = Rc::new(equality);
    let (e1, e2, e3) = (
        Rc::clone(&equality),
        Rc::clone(&equality),
        Rc::clone(&equality),
    );
    let head = distinct_by(source.clone(), move |a, b| e1(a, b));
    let rest = except_by(
        distinct_by(other, move |a, b| e2(a, b)),
        source,
        move |a, b| e3(a, b),
    );
    concat(head, rest)
}

pub fn union_by_key<T, K, F>(source: Sequence<T>, other: Sequence<T>, key: F) -> Sequence<T>
where
    T: 'static,
    K: Hash + Eq + 'static,
    F: Fn(&T) -> K + 'static,
{
    let key = Rc::new(key);
    let (k1, k2, k3) = (Rc::clone(&key), Rc::clone(&key), Rc::clone(&key));
    let head = distinct_by_key(source.clone(), move |x| k1(x));
    let rest = except_by_key(
        distinct_by_key(other, move |x| k2(x)),
        source,
        move |x| k3(x),
    );
    concat(head, rest)
}

fn buffer_list<T: Clone + 'static>(op: &'static str, other: &Sequence<T>) -> SeenList<T> {
    let mut list = SeenList::new(op);
    for x in other {
        list.push(x);
    }
    list
}
