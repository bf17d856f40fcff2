//! One-shot, pull-based element producers.
//!
//! A `Cursor` is owned by exactly one enumeration. It is a boxed iterator so
//! operators can be written with the std adapters and still be named.

use std::fmt;

pub struct Cursor<T> {
    inner: Box<dyn Iterator<Item = T>>,
}

impl<T: 'static> Cursor<T> {
    pub fn new<I>(iter: I) -> Self
    where
        I: Iterator<Item = T> + 'static,
    {
        Self {
            inner: Box::new(iter),
        }
    }

    /// Build a cursor from a pull closure; `None` signals exhaustion.
    pub fn from_fn<F>(pull: F) -> Self
    where
        F: FnMut() -> Option<T> + 'static,
    {
        Self::new(std::iter::from_fn(pull))
    }

    pub fn empty() -> Self {
        Self::new(std::iter::empty())
    }
}

impl<T> Cursor<T> {
    /// Pull the next element, or `None` once the cursor is exhausted.
    #[inline]
    pub fn pull(&mut self) -> Option<T> {
        self.inner.next()
    }
}

impl<T> Iterator for Cursor<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.pull()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> fmt::Debug for Cursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor").finish_non_exhaustive()
    }
}
