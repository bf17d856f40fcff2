//! Restartable sequences: a shared cursor factory.
//!
//! Calling the factory twice yields two independent cursors over logically the
//! same data. That holds for everything built from re-iterable sources and
//! deterministic operators; a wrapped one-shot iterator (`Sequence::once`) is
//! drained by its first enumeration.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cursor::Cursor;

type Factory<T> = dyn Fn() -> Cursor<T>;

pub struct Sequence<T> {
    factory: Rc<Factory<T>>,
}

impl<T> Clone for Sequence<T> {
    fn clone(&self) -> Self {
        Self {
            factory: Rc::clone(&self.factory),
        }
    }
}

impl<T> fmt::Debug for Sequence<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sequence").finish_non_exhaustive()
    }
}

impl<T: 'static> Sequence<T> {
    /// Wrap a raw cursor factory. Nothing is invoked until enumeration.
    pub fn from_factory<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = T> + 'static,
    {
        Self {
            factory: Rc::new(move || Cursor::new(factory())),
        }
    }

    /// Wrap any re-iterable source. Each enumeration clones `source` and
    /// iterates the clone, so the source itself is never consumed.
    pub fn new<S>(source: S) -> Self
    where
        S: IntoIterator<Item = T> + Clone + 'static,
        S::IntoIter: 'static,
    {
        Self::from_factory(move || source.clone().into_iter())
    }

    /// A sequence over a shared snapshot; enumeration clones elements out.
    pub fn from_shared(items: Rc<[T]>) -> Self
    where
        T: Clone,
    {
        Self::from_factory(move || SharedIter {
            items: Rc::clone(&items),
            pos: 0,
        })
    }

    /// Wrap a one-shot iterator. The first enumeration drains it; every later
    /// enumeration is empty.
    pub fn once<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        let slot = Rc::new(RefCell::new(Some(iter)));
        Self {
            factory: Rc::new(move || match slot.borrow_mut().take() {
                Some(iter) => Cursor::new(iter),
                None => Cursor::empty(),
            }),
        }
    }

    pub fn empty() -> Self {
        Self::from_factory(std::iter::empty)
    }

    /// Obtain a fresh cursor positioned before the first element.
    pub fn cursor(&self) -> Cursor<T> {
        (self.factory)()
    }

    pub fn iter(&self) -> Cursor<T> {
        self.cursor()
    }
}

/// The single entry point: wrap any re-iterable source into a `Sequence`.
pub fn from<S>(source: S) -> Sequence<S::Item>
where
    S: IntoIterator + Clone + 'static,
    S::Item: 'static,
    S::IntoIter: 'static,
{
    Sequence::new(source)
}

impl<T: Clone + 'static> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self::from_shared(items.into())
    }
}

impl<T: Clone + 'static> From<Rc<[T]>> for Sequence<T> {
    fn from(items: Rc<[T]>) -> Self {
        Self::from_shared(items)
    }
}

impl<T> From<&Sequence<T>> for Sequence<T> {
    fn from(s: &Sequence<T>) -> Self {
        s.clone()
    }
}

impl<T: 'static> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Cursor<T> {
        self.cursor()
    }
}

impl<T: 'static> IntoIterator for &Sequence<T> {
    type Item = T;
    type IntoIter = Cursor<T>;

    fn into_iter(self) -> Cursor<T> {
        self.cursor()
    }
}

struct SharedIter<T> {
    items: Rc<[T]>,
    pos: usize,
}

impl<T: Clone> Iterator for SharedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let item = self.items.get(self.pos)?.clone();
        self.pos += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.items.len().saturating_sub(self.pos);
        (left, Some(left))
    }
}
