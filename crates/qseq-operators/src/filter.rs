//! Predicate filtering.

use std::rc::Rc;

use qseq_core::Sequence;

/// Pass through the elements for which `predicate` holds.
///
/// Each pull keeps pulling the parent until a match or exhaustion; the
/// predicate runs once per parent element pulled.
pub fn filter<T, P>(source: Sequence<T>, predicate: P) -> Sequence<T>
where
    T: 'static,
    P: Fn(&T) -> bool + 'static,
{
    let predicate = Rc::new(predicate);
    Sequence::from_factory(move || {
        let predicate = Rc::clone(&predicate);
        source.cursor().filter(move |x| predicate(x))
    })
}
