//! `Grouping<K, V>`: a key plus the sequence of its members.
//!
//! Produced by `group_by` / `group_join_groupings`. Iterating a grouping
//! iterates its values.

use std::fmt;
use std::rc::Rc;

use crate::cursor::Cursor;
use crate::sequence::Sequence;

#[derive(Clone)]
pub struct Grouping<K, V> {
    pub key: K,
    pub values: Sequence<V>,
}

impl<K, V: Clone + 'static> Grouping<K, V> {
    pub fn new(key: K, values: Sequence<V>) -> Self {
        Self { key, values }
    }

    /// A grouping over an already-buffered member list.
    pub fn from_members(key: K, members: Rc<[V]>) -> Self {
        Self {
            key,
            values: Sequence::from_shared(members),
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn values(&self) -> &Sequence<V> {
        &self.values
    }

    pub fn cursor(&self) -> Cursor<V> {
        self.values.cursor()
    }
}

impl<K: fmt::Debug, V> fmt::Debug for Grouping<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grouping")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

impl<K, V: 'static> IntoIterator for Grouping<K, V> {
    type Item = V;
    type IntoIter = Cursor<V>;

    fn into_iter(self) -> Cursor<V> {
        self.values.cursor()
    }
}

impl<K, V: 'static> IntoIterator for &Grouping<K, V> {
    type Item = V;
    type IntoIter = Cursor<V>;

    fn into_iter(self) -> Cursor<V> {
        self.values.cursor()
    }
}

impl<K, V> From<Grouping<K, V>> for Sequence<V> {
    fn from(g: Grouping<K, V>) -> Self {
        g.values
    }
}
