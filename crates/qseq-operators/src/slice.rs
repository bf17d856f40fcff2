//! Positional operators: take/skip (by count or predicate) and reverse.
//!
//! Counts are `usize`, so a negative count cannot be expressed.

use std::rc::Rc;

use qseq_core::Sequence;

use crate::buffer::materialize;

/// Yield at most `n` elements. Once `n` have been yielded the parent is not
/// pulled again.
pub fn take<T: 'static>(source: Sequence<T>, n: usize) -> Sequence<T> {
    Sequence::from_factory(move || source.cursor().take(n))
}

/// Discard the first `n` parent elements on the first pull, then pass through.
pub fn skip<T: 'static>(source: Sequence<T>, n: usize) -> Sequence<T> {
    Sequence::from_factory(move || source.cursor().skip(n))
}

/// Pass elements through until `predicate` first fails; after that the
/// cursor stays exhausted and the predicate is not consulted again.
pub fn take_while<T, P>(source: Sequence<T>, predicate: P) -> Sequence<T>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let predicate = Rc::new(predicate);
    Sequence::from_factory(move || {
        let predicate = Rc::clone(&predicate);
        source.cursor().take_while(move |x| predicate(x))
    })
}

/// Drop elements while `predicate` holds; from the first failure on every
/// element passes through untested.
pub fn skip_while<T, P>(source: Sequence<T>, predicate: P) -> Sequence<T>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let predicate = Rc::new(predicate);
    Sequence::from_factory(move || {
        let predicate = Rc::clone(&predicate);
        source.cursor().skip_while(move |x| predicate(x))
    })
}

/// Eager: buffers the whole source when a cursor is requested, then yields it
/// back to front.
pub fn reverse<T: 'static>(source: Sequence<T>) -> Sequence<T> {
    Sequence::from_factory(move || materialize("reverse", source.cursor()).into_iter().rev())
}
