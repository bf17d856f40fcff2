//! Binary streaming operators: concat and zip.

use std::rc::Rc;

use qseq_core::Sequence;

/// All of `first`, then all of `second`. The second cursor is only created
/// once the first is exhausted.
pub fn concat<T: 'static>(first: Sequence<T>, second: Sequence<T>) -> Sequence<T> {
    Sequence::from_factory(move || {
        let second = second.clone();
        first
            .cursor()
            .chain(std::iter::once(second).flat_map(|s| s.cursor()))
    })
}

/// Pair elements step by step. Every step pulls one element from each side,
/// so the step that finds one side exhausted still pulls the other once.
pub fn zip<T, U, R, F>(left: Sequence<T>, right: Sequence<U>, combiner: F) -> Sequence<R>
where
    T: 'static,
    U: 'static,
    R: 'static,
    F: Fn(T, U) -> R + 'static,
{
    let combiner = Rc::new(combiner);
    Sequence::from_factory(move || {
        let combiner = Rc::clone(&combiner);
        let mut left = left.cursor();
        let mut right = right.cursor();
        std::iter::from_fn(move || {
            let a = left.pull();
            let b = right.pull();
            Some(combiner(a?, b?))
        })
        .fuse()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use qseq_core::from;

    #[test]
    fn concat_keeps_both_orders() {
        let s = concat(from(vec![1, 2, 3]), from(vec![4, 5, 6]));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn zip_pulls_both_sides_each_step() {
        use std::cell::Cell;
        let pulls = Rc::new(Cell::new(0));
        let p = Rc::clone(&pulls);
        let right = Sequence::from_factory(move || {
            let p = Rc::clone(&p);
            (0..10).inspect(move |_| p.set(p.get() + 1))
        });
        let s = zip(from(vec!['a', 'b']), right, |c, n| (c, n));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec![('a', 0), ('b', 1)]);
        // two paired steps plus the step that found the left side exhausted
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn zip_shorter_side_wins() {
        let s = zip(from(0..10), from(vec!["a", "b"]), |n, s| format!("{s}{n}"));
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["a0", "b1"]);
    }
}
