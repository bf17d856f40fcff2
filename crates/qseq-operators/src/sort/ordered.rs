//! `OrderedSequence`: a source plus a comparator chain.
//!
//! - `order_by*` restart from the unsorted source with a single comparator.
//! - `then_by*` append to the chain (first comparator = primary key).
//! - `filter` pushes the predicate under the wrapper, so discarded elements
//!   are never sorted, and keeps the chain.
//!
//! Every enumeration re-snapshots the source and stably re-sorts it, so the
//! result reflects the source as it is at enumeration time.

use std::fmt;
use std::rc::Rc;

use qseq_core::{Cursor, Sequence};

use crate::buffer::materialize;
use crate::filter::filter;
use crate::traits::Query;

use super::chain::{ascending, descending, LessThan};
use super::merge::stable_sort;

pub struct OrderedSequence<T> {
    source: Sequence<T>,
    comparators: Rc<[LessThan<T>]>,
}

impl<T> Clone for OrderedSequence<T> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            comparators: Rc::clone(&self.comparators),
        }
    }
}

impl<T> fmt::Debug for OrderedSequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderedSequence")
            .field("keys", &self.comparators.len())
            .finish_non_exhaustive()
    }
}

impl<T: Clone + 'static> OrderedSequence<T> {
    pub fn new(source: Sequence<T>, comparators: Vec<LessThan<T>>) -> Self {
        Self {
            source,
            comparators: comparators.into(),
        }
    }

    /// The unsorted source the chain applies to.
    pub fn source(&self) -> &Sequence<T> {
        &self.source
    }

    /// Number of sort keys in the chain.
    pub fn key_count(&self) -> usize {
        self.comparators.len()
    }

    /// Snapshot the source, stably sort it, and hand out a cursor over the
    /// snapshot.
    pub fn cursor(&self) -> Cursor<T> {
        let items = materialize("order_by", self.source.cursor());
        Cursor::new(stable_sort(items, &self.comparators).into_iter())
    }

    pub fn iter(&self) -> Cursor<T> {
        self.cursor()
    }

    /// Filter the source, keeping the comparator chain.
    pub fn filter<P>(&self, predicate: P) -> OrderedSequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        Self {
            source: filter(self.source.clone(), predicate),
            comparators: Rc::clone(&self.comparators),
        }
    }

    pub fn where_true<P>(&self, predicate: P) -> OrderedSequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        OrderedSequence::filter(self, predicate)
    }

    fn appended(&self, less: LessThan<T>) -> Self {
        let mut chain = self.comparators.to_vec();
        chain.push(less);
        Self::new(self.source.clone(), chain)
    }
}

impl<T: Clone + 'static> Query<T> for OrderedSequence<T> {
    type Filtered = OrderedSequence<T>;

    fn sequence(&self) -> Sequence<T> {
        let this = self.clone();
        Sequence::from_factory(move || this.cursor())
    }

    fn cursor(&self) -> Cursor<T> {
        OrderedSequence::cursor(self)
    }

    fn filter<P>(&self, predicate: P) -> OrderedSequence<T>
    where
        P: Fn(&T) -> bool + 'static,
    {
        OrderedSequence::filter(self, predicate)
    }

    fn order_by<K, F>(&self, key: F) -> OrderedSequence<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(self.source.clone(), vec![ascending(key)])
    }

    fn order_by_descending<K, F>(&self, key: F) -> OrderedSequence<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        Self::new(self.source.clone(), vec![descending(key)])
    }

    fn order_by_comparator<L>(&self, less: L) -> OrderedSequence<T>
    where
        L: Fn(&T, &T) -> bool + 'static,
    {
        Self::new(self.source.clone(), vec![Rc::new(less) as LessThan<T>])
    }

    fn then_by<K, F>(&self, key: F) -> OrderedSequence<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        self.appended(ascending(key))
    }

    fn then_by_descending<K, F>(&self, key: F) -> OrderedSequence<T>
    where
        K: PartialOrd,
        F: Fn(&T) -> K + 'static,
    {
        self.appended(descending(key))
    }
}

impl<T: Clone + 'static> From<OrderedSequence<T>> for Sequence<T> {
    fn from(ordered: OrderedSequence<T>) -> Self {
        ordered.sequence()
    }
}

impl<T: Clone + 'static> From<&OrderedSequence<T>> for Sequence<T> {
    fn from(ordered: &OrderedSequence<T>) -> Self {
        ordered.sequence()
    }
}

impl<T: Clone + 'static> IntoIterator for OrderedSequence<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Cursor<T> {
        OrderedSequence::cursor(&self)
    }
}

impl<T: Clone + 'static> IntoIterator for &OrderedSequence<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Cursor<T> {
        OrderedSequence::cursor(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qseq_core::from;
    use std::cell::Cell;

    #[test]
    fn ascending_and_descending() {
        let s = from(vec![1, 3, 4, 2, 5, 6, 9, 8, 7, 0]);
        assert_eq!(s.order_by(|x| *x).to_array(), (0..10).collect::<Vec<_>>());
        assert_eq!(
            s.order_by_descending(|x| *x).to_array(),
            (0..10).rev().collect::<Vec<_>>()
        );
    }

    #[test]
    fn then_by_appends_secondary_key() {
        let pairs = vec![
            (0, 1),
            (1, 1),
            (2, 0),
            (1, 0),
            (3, 1),
            (2, 1),
            (0, 0),
            (3, 0),
        ];
        let sorted = from(pairs).order_by(|p| p.0).then_by(|p| p.1).to_array();
        assert_eq!(
            sorted,
            vec![
                (0, 0),
                (0, 1),
                (1, 0),
                (1, 1),
                (2, 0),
                (2, 1),
                (3, 0),
                (3, 1)
            ]
        );
    }

    #[test]
    fn order_by_on_ordered_restarts_chain() {
        let s = from(vec![(1, 'b'), (0, 'a'), (1, 'a')])
            .order_by(|p| p.1)
            .order_by(|p| p.0);
        assert_eq!(s.key_count(), 1);
        // ties on the new key keep source order, not the discarded order
        assert_eq!(s.to_array(), vec![(0, 'a'), (1, 'b'), (1, 'a')]);
    }

    #[test]
    fn filter_runs_before_sort_and_keeps_chain() {
        let comparisons = Rc::new(Cell::new(0));
        let c = Rc::clone(&comparisons);
        let ordered = from(0..100).order_by_comparator(move |a: &i32, b: &i32| {
            c.set(c.get() + 1);
            b < a
        });
        let filtered = ordered.filter(|x| *x < 3);
        assert_eq!(filtered.key_count(), 1);
        assert_eq!(filtered.to_array(), vec![2, 1, 0]);
        // sorting three survivors needs only a handful of comparisons
        assert!(comparisons.get() < 20);
    }

    #[test]
    fn reflects_source_at_enumeration_time() {
        let data = Rc::new(std::cell::RefCell::new(vec![3, 1]));
        let d = Rc::clone(&data);
        let source = Sequence::from_factory(move || d.borrow().clone().into_iter());
        let ordered = source.order_by(|x| *x);
        assert_eq!(ordered.to_array(), vec![1, 3]);
        data.borrow_mut().push(0);
        assert_eq!(ordered.to_array(), vec![0, 1, 3]);
    }
}
