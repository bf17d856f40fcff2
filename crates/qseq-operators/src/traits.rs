//! The `Query` trait: the full operator surface over anything that can hand
//! out a `Sequence`.
//!
//! Implementors provide `sequence()`; every operator has a default built on
//! the free functions of the operator modules. `OrderedSequence` overrides
//! the ordering and filtering entry points so that `then_by` extends its
//! comparator chain and filters run before the sort.
//!
//! Lazy operators return a new `Sequence` and pull nothing. Terminal
//! operators force enumeration; the ones that can fail return
//! `qseq_core::Result`.

use std::collections::HashMap;
use std::hash::Hash;

use qseq_core::{Cursor, Grouping, Result, Sequence};

use crate::sort::{self, LessThan, OrderedSequence};
use crate::{aggregate, combine, filter, group, join, map, set, slice};

pub trait Query<T: Clone + 'static>: Sized {
    /// What `filter` hands back. Ordered sequences stay ordered so a later
    /// `then_by` still extends their chain.
    type Filtered: Query<T>;

    /// The re-iterable view this queryable enumerates.
    fn sequence(&self) -> Sequence<T>;

    fn cursor(&self) -> Cursor<T> {
        self.sequence().cursor()
    }

    // ---- projection ------------------------------------------------------

    fn select<V, F>(&self, selector: F) -> Sequence<V>
    where
        V: 'static,
        F: Fn(T) -> V + 'static,
    {
        map::select(self.sequence(), selector)
    }

    fn select_indexed<V, F>(&self, selector: F) -> Sequence<V>
    where
        V: 'static,
        F: Fn(T, usize) -> V + 'static,
    {
        map::select_indexed(self.sequence(), selector)
    }

    /// Alias of `select`.
    fn map<V, F>(&self, selector: F) -> Sequence<V>
    where
        V: 'static,
        F: Fn(T) -> V + 'static,
    {
        self.select(selector)
    }

    fn select_many<S, F>(&self, selector: F) -> Sequence<S::Item>
    where
        S: IntoIterator + 'static,
        S::Item: 'static,
        S::IntoIter: 'static,
        F: Fn(T) -> S + 'static,
    {
        map::select_many(self.sequence(), selector)
    }

    fn select_many_indexed<S, F>(&self, selector: F) -> Sequence<S::Item>
    where
        S: IntoIterator + 'static,
        S::Item: 'static,
        S::IntoIter: 'static,
        F: Fn(T, usize) -> S + 'static,
    {
        map::select_many_indexed(self.sequence(), selector)
    }

    fn select_many_with<S, R, F, G>(&self, selector: F, result: G) -> Sequence<R>
    where
        S: IntoIterator + 'static,
        S::IntoIter: 'static,
        R: 'static,
        F: Fn(T) -> S + 'static,
        G: Fn(S::Item) -> R + 'static,
    {
        map::select_many_with(self.sequence(), selector, result)
    }

    fn select_many_indexed_with<S, R, F, G>(&self, selector: F, result: G) -> Sequence<R>
    where
        S: IntoIterator + 'static,
        S::IntoIter: 'static,
        R: 'static,
        F: Fn(T, usize) -> S + 'static,
        G: Fn(S::Item) -> R + 'static,
    {
        map::select_many_indexed_with(self.sequence(), selector, result)
    }

    // ---- filtering and slicing ------------------------------------------

    fn filter<P>(&self, predicate: P) -> Self::Filtered
    where
        P: Fn(&T) -> bool + 'static;

    /// Alias of `filter`.
    fn where_true<P>(&self, predicate: P) -> Self::Filtered
    where
        P: Fn(&T) -> bool + 'static,
    {
        self.filter(predicate)
    }

    fn take(&self, n: usize) -> Sequence<T> {
        slice::take(self.sequence(), n)
    }

    fn skip(&self, n: usize) -> Sequence<T> {
        slice::skip(self.sequence(), n)
    }

    fn take_while<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        slice::take_while(self.sequence(), predicate)
    }

    fn skip_while<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        slice::skip_while(self.sequence(), predicate)
    }

    /// Eager: buffers the whole source per enumeration.
    fn reverse(&self) -> Sequence<T> {
        slice::reverse(self.sequence())
    }

    // ---- combination -----------------------------------------------------

    fn concat(&self, other: impl Into<Sequence<T>>) -> Sequence<T> {
        combine::concat(self.sequence(), other.into())
    }

    fn zip<U, R, F>(&self, other: impl Into<Sequence<U>>, combiner: F) -> Sequence<R>
    where
        U: 'static,
        R: 'static,
        F: Fn(T, U) -> R + 'static,
    {
        combine::zip(self.sequence(), other.into(), combiner)
    }

    // ---- set algebra -----------------------------------------------------

    fn distinct(&self) -> Sequence<T>
    where
        T: Hash + Eq,
    {
        self.distinct_by_key(T::clone)
    }

    fn distinct_by<E>(&self, equality: E) -> Sequence<T>
    where
        E: Fn(&T, &T) -> bool + 'static,
    {
        set::distinct_by(self.sequence(), equality)
    }

    fn distinct_by_key<K, F>(&self, key: F) -> Sequence<T>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        set::distinct_by_key(self.sequence(), key)
    }

    fn except(&self, other: impl Into<Sequence<T>>) -> Sequence<T>
    where
        T: Hash + Eq,
    {
        self.except_by_key(other, T::clone)
    }

    fn except_by<E>(&self, other: impl Into<Sequence<T>>, equality: E) -> Sequence<T>
    where
        E: Fn(&T, &T) -> bool + 'static,
    {
        set::except_by(self.sequence(), other.into(), equality)
    }

    fn except_by_key<K, F>(&self, other: impl Into<Sequence<T>>, key: F) -> Sequence<T>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        set::except_by_key(self.sequence(), other.into(), key)
    }

    fn intersect(&self, other: impl Into<Sequence<T>>) -> Sequence<T>
    where
        T: Hash + Eq,
    {
        self.intersect_by_key(other, T::clone)
    }

    fn intersect_by<E>(&self, other: impl Into<Sequence<T>>, equality: E) -> Sequence<T>
    where
        E: Fn(&T, &T) -> bool + 'static,
    {
        set::intersect_by(self.sequence(), other.into(), equality)
    }

    fn intersect_by_key<K, F>(&self, other: impl Into<Sequence<T>>, key: F) -> Sequence<T>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        set::intersect_by_key(self.sequence(), other.into(), key)
    }

    fn union(&self, other: impl Into<Sequence<T>>) -> Sequence<T>
    where
        T: Hash + Eq,
    {
        self.union_by_key(other, T::clone)
    }

    fn union_by<E>(&self, other: impl Into<Sequence<T>>, equality: E) -> Sequence<T>
    where
        E: Fn(&T, &T) -> bool + 'static,
    {
        set::union_by(self.sequence(), other.into(), equality)
    }

    fn union_by_key<K, F>(&self, other: impl Into<Sequence<T>>, key: F) -> Sequence<T>
    where
        K: Hash + Eq + 'static,
        F: Fn(&T) -> K + 'static,
    {
        set::union_by_key(self.sequence(), other.into(), key)
    }

    // ---- grouping and joins ---------------------------------------------

    fn group_by<K, KF>(&self, key: KF) -> Sequence<Grouping<K, T>>
    where
        K: Hash + Eq + Clone + 'static,
        KF: Fn(&T) -> K + 'static,
    {
        group::group_by(self.sequence(), key)
    }

    fn group_by_with<K, V, KF, EF>(&self, key: KF, element: EF) -> Sequence<Grouping<K, V>>
    where
        K: Hash + Eq + Clone + 'static,
        V: Clone + 'static,
        KF: Fn(&T) -> K + 'static,
        EF: Fn(T) -> V + 'static,
    {
        group::group_by_with(self.sequence(), key, element)
    }

    fn group_by_with_result<K, V, R, KF, EF, RF>(
        &self,
        key: KF,
        element: EF,
        result: RF,
    ) -> Sequence<R>
    where
        K: Hash + Eq + Clone + 'static,
        V: Clone + 'static,
        R: 'static,
        KF: Fn(&T) -> K + 'static,
        EF: Fn(T) -> V + 'static,
        RF: Fn(K, Sequence<V>) -> R + 'static,
    {
        group::group_by_with_result(self.sequence(), key, element, result)
    }

    fn join<U, K, R, OK, IK, RF>(
        &self,
        inner: impl Into<Sequence<U>>,
        outer_key: OK,
        inner_key: IK,
        result: RF,
    ) -> Sequence<R>
    where
        U: Clone + 'static,
        K: Hash + Eq + Clone + 'static,
        R: 'static,
        OK: Fn(&T) -> K + 'static,
        IK: Fn(&U) -> K + 'static,
        RF: Fn(T, U) -> R + 'static,
    {
        join::join(self.sequence(), inner.into(), outer_key, inner_key, result)
    }

    fn join_pairs<U, K, OK, IK>(
        &self,
        inner: impl Into<Sequence<U>>,
        outer_key: OK,
        inner_key: IK,
    ) -> Sequence<(T, U)>
    where
        U: Clone + 'static,
        K: Hash + Eq + Clone + 'static,
        OK: Fn(&T) -> K + 'static,
        IK: Fn(&U) -> K + 'static,
    {
        join::join_pairs(self.sequence(), inner.into(), outer_key, inner_key)
    }

    fn group_join<U, K, R, OK, IK, RF>(
        &self,
        inner: impl Into<Sequence<U>>,
        outer_key: OK,
        inner_key: IK,
        result: RF,
    ) -> Sequence<R>
    where
        U: Clone + 'static,
        K: Hash + Eq + Clone + 'static,
        R: 'static,
        OK: Fn(&T) -> K + 'static,
        IK: Fn(&U) -> K + 'static,
        RF: Fn(T, Sequence<U>) -> R + 'static,
    {
        join::group_join(self.sequence(), inner.into(), outer_key, inner_key, result)
    }

    fn group_join_groupings<U, K, OK, IK>(
        &self,
        inner: impl Into<Sequence<U>>,
        outer_key: OK,
        inner_key: IK,
    ) -> Sequence<Grouping<T, U>>
    where
        U: Clone + 'static,
        K: Hash + Eq + Clone + 'static,
        OK: Fn(&T) -> K + 'static,
        IK: Fn(&U) -> K + 'static,
    {
        join::group_join_groupings(self.sequence(), inner.into(), outer_key, inner_key)
    }

    // ---- ordering --------------------------------------------------------

    fn order_by<K, F>(&self, key: F) -> OrderedSequence<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        OrderedSequence::new(self.sequence(), vec![sort::ascending(key)])
    }

    fn order_by_descending<K, F>(&self, key: F) -> OrderedSequence<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        OrderedSequence::new(self.sequence(), vec![sort::descending(key)])
    }

    /// Order by a raw less-than predicate.
    fn order_by_comparator<L>(&self, less: L) -> OrderedSequence<T>
    where
        L: Fn(&T, &T) -> bool + 'static,
    {
        let less: LessThan<T> = std::rc::Rc::new(less);
        OrderedSequence::new(self.sequence(), vec![less])
    }

    /// On an unordered queryable this starts a new single-key order; only an
    /// `OrderedSequence` appends a secondary key.
    fn then_by<K, F>(&self, key: F) -> OrderedSequence<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        self.order_by(key)
    }

    fn then_by_descending<K, F>(&self, key: F) -> OrderedSequence<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        self.order_by_descending(key)
    }

    // ---- materialization -------------------------------------------------

    fn to_array(&self) -> Vec<T> {
        self.cursor().collect()
    }

    fn to_dictionary<K, V, F>(&self, key_value: F) -> HashMap<K, V>
    where
        K: Hash + Eq,
        F: Fn(T) -> (K, V),
    {
        aggregate::to_dictionary(self.cursor(), key_value)
    }

    fn to_dictionary_by<K, V, KF, VF>(&self, key: KF, value: VF) -> HashMap<K, V>
    where
        K: Hash + Eq,
        KF: Fn(&T) -> K,
        VF: Fn(T) -> V,
    {
        aggregate::to_dictionary(self.cursor(), |x| (key(&x), value(x)))
    }

    fn to_dictionary_by_key<K, KF>(&self, key: KF) -> HashMap<K, T>
    where
        K: Hash + Eq,
        KF: Fn(&T) -> K,
    {
        aggregate::to_dictionary(self.cursor(), |x| (key(&x), x))
    }

    // ---- quantifiers -----------------------------------------------------

    fn count(&self) -> usize {
        self.cursor().count()
    }

    /// True when the source has at least one element; pulls at most one.
    fn any(&self) -> bool {
        self.cursor().next().is_some()
    }

    fn any_where(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.cursor().any(|x| predicate(&x))
    }

    /// Vacuously true on an empty source.
    fn all(&self, predicate: impl Fn(&T) -> bool) -> bool {
        self.cursor().all(|x| predicate(&x))
    }

    fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        self.cursor().any(|x| x == *value)
    }

    fn contains_by(&self, value: &T, equality: impl Fn(&T, &T) -> bool) -> bool {
        self.cursor().any(|x| equality(&x, value))
    }

    fn contains_by_key<K: PartialEq>(&self, value: &T, key: impl Fn(&T) -> K) -> bool {
        let wanted = key(value);
        self.cursor().any(|x| key(&x) == wanted)
    }

    // ---- element access --------------------------------------------------

    fn first(&self) -> Result<T> {
        aggregate::first(self.cursor())
    }

    fn first_or_none(&self) -> Option<T> {
        self.cursor().next()
    }

    fn first_or_default(&self, default: T) -> T {
        self.first_or_none().unwrap_or(default)
    }

    fn first_where(&self, predicate: impl Fn(&T) -> bool) -> Result<T> {
        aggregate::first_where(self.cursor(), predicate)
    }

    fn first_where_or_none(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.cursor().find(|x| predicate(x))
    }

    fn first_where_or_default(&self, default: T, predicate: impl Fn(&T) -> bool) -> T {
        self.first_where_or_none(predicate).unwrap_or(default)
    }

    fn last(&self) -> Result<T> {
        aggregate::last(self.cursor())
    }

    fn last_or_none(&self) -> Option<T> {
        self.cursor().last()
    }

    fn last_or_default(&self, default: T) -> T {
        self.last_or_none().unwrap_or(default)
    }

    fn last_where(&self, predicate: impl Fn(&T) -> bool) -> Result<T> {
        aggregate::last_where(self.cursor(), predicate)
    }

    fn last_where_or_none(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.cursor().filter(|x| predicate(x)).last()
    }

    fn last_where_or_default(&self, default: T, predicate: impl Fn(&T) -> bool) -> T {
        self.last_where_or_none(predicate).unwrap_or(default)
    }

    fn single(&self) -> Result<T> {
        aggregate::single(self.cursor())
    }

    /// `None` both for an empty source and for more than one element.
    fn single_or_none(&self) -> Option<T> {
        self.single().ok()
    }

    fn single_where(&self, predicate: impl Fn(&T) -> bool) -> Result<T> {
        aggregate::single_where(self.cursor(), predicate)
    }

    /// `None` both for no match and for more than one match.
    fn single_where_or_none(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.single_where(predicate).ok()
    }

    fn element_at(&self, index: usize) -> Result<T> {
        aggregate::element_at(self.cursor(), index)
    }

    fn element_at_or_none(&self, index: usize) -> Option<T> {
        self.cursor().nth(index)
    }

    fn element_at_or_default(&self, index: usize, default: T) -> T {
        self.element_at_or_none(index).unwrap_or(default)
    }

    // ---- folds -----------------------------------------------------------

    fn reduce(&self, combine: impl Fn(T, T) -> T) -> Result<T> {
        aggregate::reduce(self.cursor(), combine)
    }

    /// Seeded fold; an empty source returns `initial`.
    fn reduce_seeded<R>(&self, initial: R, combine: impl Fn(R, T) -> R) -> R {
        self.cursor().fold(initial, combine)
    }

    fn reduce_seeded_with_result<C, R>(
        &self,
        initial: C,
        combine: impl Fn(C, T) -> C,
        result: impl FnOnce(C) -> R,
    ) -> R {
        result(self.reduce_seeded(initial, combine))
    }

    /// Alias of `reduce`.
    fn aggregate(&self, combine: impl Fn(T, T) -> T) -> Result<T> {
        self.reduce(combine)
    }

    fn aggregate_seeded<R>(&self, initial: R, combine: impl Fn(R, T) -> R) -> R {
        self.reduce_seeded(initial, combine)
    }

    fn aggregate_seeded_with_result<C, R>(
        &self,
        initial: C,
        combine: impl Fn(C, T) -> C,
        result: impl FnOnce(C) -> R,
    ) -> R {
        self.reduce_seeded_with_result(initial, combine, result)
    }

    fn min<K: PartialOrd>(&self, key: impl Fn(&T) -> K) -> Result<K> {
        aggregate::min(self.cursor(), key)
    }

    fn max<K: PartialOrd>(&self, key: impl Fn(&T) -> K) -> Result<K> {
        aggregate::max(self.cursor(), key)
    }

    fn argmin<K: PartialOrd>(&self, key: impl Fn(&T) -> K) -> Result<T> {
        aggregate::argmin(self.cursor(), key)
    }

    fn argmax<K: PartialOrd>(&self, key: impl Fn(&T) -> K) -> Result<T> {
        aggregate::argmax(self.cursor(), key)
    }

    // ---- comparison ------------------------------------------------------

    fn sequence_equal(&self, other: impl Into<Sequence<T>>) -> bool
    where
        T: PartialEq,
    {
        self.sequence_equal_by(other, |a, b| a == b)
    }

    fn sequence_equal_by(
        &self,
        other: impl Into<Sequence<T>>,
        equality: impl Fn(&T, &T) -> bool,
    ) -> bool {
        aggregate::sequence_equal_by(self.cursor(), other.into().cursor(), equality)
    }
}

impl<T: Clone + 'static> Query<T> for Sequence<T> {
    type Filtered = Sequence<T>;

    fn sequence(&self) -> Sequence<T> {
        self.clone()
    }

    fn filter<P>(&self, predicate: P) -> Sequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        filter::filter(self.clone(), predicate)
    }
}

impl<K, V: Clone + 'static> Query<V> for Grouping<K, V> {
    type Filtered = Sequence<V>;

    fn sequence(&self) -> Sequence<V> {
        self.values.clone()
    }

    fn filter<P>(&self, predicate: P) -> Sequence<V>
    where
        P: Fn(&V) -> bool + 'static,
    {
        filter::filter(self.values.clone(), predicate)
    }
}
