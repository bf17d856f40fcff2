//! Projection: `select` and its flattening variant `select_many`.

use std::rc::Rc;

use qseq_core::Sequence;

/// Apply `selector` to each element; it runs exactly once per element pulled.
pub fn select<T, V, F>(source: Sequence<T>, selector: F) -> Sequence<V>
where
    T: 'static,
    V: 'static,
    F: Fn(T) -> V + 'static,
{
    let selector = Rc::new(selector);
    Sequence::from_factory(move || {
        let selector = Rc::clone(&selector);
        source.cursor().map(move |x| selector(x))
    })
}

/// Like `select`, also passing the zero-based position. The counter restarts
/// with every enumeration.
pub fn select_indexed<T, V, F>(source: Sequence<T>, selector: F) -> Sequence<V>
where
    T: 'static,
    V: 'static,
    F: Fn(T, usize) -> V + 'static,
{
    let selector = Rc::new(selector);
    Sequence::from_factory(move || {
        let selector = Rc::clone(&selector);
        source
            .cursor()
            .enumerate()
            .map(move |(i, x)| selector(x, i))
    })
}

/// Expand each element into an inner sequence and flatten.
///
/// The current inner cursor is drained completely (through `result`) before
/// the next outer element is pulled. The index passed to `selector` is the
/// outer position.
pub fn select_many_indexed_with<T, S, R, F, G>(
    source: Sequence<T>,
    selector: F,
    result: G,
) -> Sequence<R>
where
    T: 'static,
    S: IntoIterator + 'static,
    S::IntoIter: 'static,
    R: 'static,
    F: Fn(T, usize) -> S + 'static,
    G: Fn(S::Item) -> R + 'static,
{
    let selector = Rc::new(selector);
    let result = Rc::new(result);
    Sequence::from_factory(move || {
        let selector = Rc::clone(&selector);
        let result = Rc::clone(&result);
        source
            .cursor()
            .enumerate()
            .flat_map(move |(i, x)| selector(x, i))
            .map(move |inner| result(inner))
    })
}

pub fn select_many_with<T, S, R, F, G>(source: Sequence<T>, selector: F, result: G) -> Sequence<R>
where
    T: 'static,
    S: IntoIterator + 'static,
    S::IntoIter: 'static,
    R: 'static,
    F: Fn(T) -> S + 'static,
    G: Fn(S::Item) -> R + 'static,
{
    select_many_indexed_with(source, move |x, _| selector(x), result)
}

pub fn select_many<T, S, F>(source: Sequence<T>, selector: F) -> Sequence<S::Item>
where
    T: 'static,
    S: IntoIterator + 'static,
    S::Item: 'static,
    S::IntoIter: 'static,
    F: Fn(T) -> S + 'static,
{
    select_many_indexed_with(source, move |x, _| selector(x), |inner| inner)
}

pub fn select_many_indexed<T, S, F>(source: Sequence<T>, selector: F) -> Sequence<S::Item>
where
    T: 'static,
    S: IntoIterator + 'static,
    S::Item: 'static,
    S::IntoIter: 'static,
    F: Fn(T, usize) -> S + 'static,
{
    select_many_indexed_with(source, selector, |inner| inner)
}
