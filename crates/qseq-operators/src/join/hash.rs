//! Inner join and group join over a hashed inner lookup.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use qseq_core::{Grouping, Sequence};

use crate::group::Lookup;

fn build_inner<U, K, IK>(
    op: &'static str,
    inner: &Sequence<U>,
    inner_key: &IK,
) -> HashMap<K, Rc<[U]>>
where
    U: 'static,
    K: Hash + Eq + Clone,
    IK: Fn(&U) -> K,
{
    Lookup::build(op, inner.cursor(), inner_key, |u| u).into_shared()
}

/// Inner join: one result per (outer, matching inner) pair, in inner-group
/// order, before the next outer element is pulled. Outer elements without a
/// match produce nothing.
pub fn join<T, U, K, R, OK, IK, RF>(
    outer: Sequence<T>,
    inner: Sequence<U>,
    outer_key: OK,
    inner_key: IK,
    result: RF,
) -> Sequence<R>
where
    T: Clone + 'static,
    U: Clone + 'static,
    K: Hash + Eq + Clone + 'static,
    R: 'static,
    OK: Fn(&T) -> K + 'static,
    IK: Fn(&U) -> K + 'static,
    RF: Fn(T, U) -> R + 'static,
{
    let outer_key = Rc::new(outer_key);
    let inner_key = Rc::new(inner_key);
    let result = Rc::new(result);
    Sequence::from_factory(move || {
        let (outer_key, inner_key, result) = (
            Rc::clone(&outer_key),
            Rc::clone(&inner_key),
            Rc::clone(&result),
        );
        let inner = inner.clone();
        let mut outer = outer.cursor();
        let mut lookup: Option<HashMap<K, Rc<[U]>>> = None;
        // (outer element, its matches, next match position)
        let mut current: Option<(T, Rc<[U]>, usize)> = None;
        std::iter::from_fn(move || {
            let lookup = lookup.get_or_insert_with(|| build_inner("join", &inner, &*inner_key));
            loop {
                if let Some((o, matches, pos)) = current.as_mut() {
                    if let Some(u) = matches.get(*pos) {
                        *pos += 1;
                        return Some(result(o.clone(), u.clone()));
                    }
                }
                current = None;
                let o = outer.next()?;
                if let Some(matches) = lookup.get(&outer_key(&o)) {
                    current = Some((o, Rc::clone(matches), 0));
                }
            }
        })
    })
}

/// `join` with the `(outer, inner)` pair as result.
pub fn join_pairs<T, U, K, OK, IK>(
    outer: Sequence<T>,
    inner: Sequence<U>,
    outer_key: OK,
    inner_key: IK,
) -> Sequence<(T, U)>
where
    T: Clone + 'static,
    U: Clone + 'static,
    K: Hash + Eq + Clone + 'static,
    OK: Fn(&T) -> K + 'static,
    IK: Fn(&U) -> K + 'static,
{
    join(outer, inner, outer_key, inner_key, |o, i| (o, i))
}

/// Exactly one result per outer element, with its (possibly empty) matches.
pub fn group_join<T, U, K, R, OK, IK, RF>(
    outer: Sequence<T>,
    inner: Sequence<U>,
    outer_key: OK,
    inner_key: IK,
    result: RF,
) -> Sequence<R>
where
    T: 'static,
    U: Clone + 'static,
    K: Hash + Eq + Clone + 'static,
    R: 'static,
    OK: Fn(&T) -> K + 'static,
    IK: Fn(&U) -> K + 'static,
    RF: Fn(T, Sequence<U>) -> R + 'static,
{
    let outer_key = Rc::new(outer_key);
    let inner_key = Rc::new(inner_key);
    let result = Rc::new(result);
    Sequence::from_factory(move || {
        let (outer_key, inner_key, result) = (
            Rc::clone(&outer_key),
            Rc::clone(&inner_key),
            Rc::clone(&result),
        );
        let inner = inner.clone();
        let mut outer = outer.cursor();
        let mut lookup: Option<HashMap<K, Rc<[U]>>> = None;
        std::iter::from_fn(move || {
            let lookup =
                lookup.get_or_insert_with(|| build_inner("group_join", &inner, &*inner_key));
            let o = outer.next()?;
            let matches = match lookup.get(&outer_key(&o)) {
                Some(matches) => Sequence::from_shared(Rc::clone(matches)),
                None => Sequence::empty(),
            };
            Some(result(o, matches))
        })
    })
}

/// `group_join` producing a `Grouping` keyed by the outer element.
pub fn group_join_groupings<T, U, K, OK, IK>(
    outer: Sequence<T>,
    inner: Sequence<U>,
    outer_key: OK,
    inner_key: IK,
) -> Sequence<Grouping<T, U>>
where
    T: 'static,
    U: Clone + 'static,
    K: Hash + Eq + Clone + 'static,
    OK: Fn(&T) -> K + 'static,
    IK: Fn(&U) -> K + 'static,
{
    group_join(outer, inner, outer_key, inner_key, Grouping::new)
}
