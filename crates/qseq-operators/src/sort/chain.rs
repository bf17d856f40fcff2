//! Comparator chains built from less-than predicates.

use std::cmp::Ordering;
use std::rc::Rc;

/// A strict "a sorts before b" predicate.
pub type LessThan<T> = Rc<dyn Fn(&T, &T) -> bool>;

/// `key(a) < key(b)`. Keys not comparable with themselves (NaN) sort after
/// every other key.
pub fn ascending<T, K, F>(key: F) -> LessThan<T>
where
    T: 'static,
    K: PartialOrd,
    F: Fn(&T) -> K + 'static,
{
    Rc::new(move |a: &T, b: &T| ranked_before(&key(a), &key(b), |x, y| x < y))
}

/// `key(a) > key(b)`. Incomparable keys still sort last.
pub fn descending<T, K, F>(key: F) -> LessThan<T>
where
    T: 'static,
    K: PartialOrd,
    F: Fn(&T) -> K + 'static,
{
    Rc::new(move |a: &T, b: &T| ranked_before(&key(a), &key(b), |x, y| x > y))
}

fn ranked_before<K: PartialOrd>(a: &K, b: &K, before: impl Fn(&K, &K) -> bool) -> bool {
    match (is_comparable(a), is_comparable(b)) {
        (true, true) => before(a, b),
        (true, false) => true,
        (false, _) => false,
    }
}

fn is_comparable<K: PartialOrd>(k: &K) -> bool {
    k.partial_cmp(k).is_some()
}

/// Composite ordering: the first comparator that separates `a` and `b` in
/// either direction decides; if none does they are equal.
pub fn compare_chain<T>(chain: &[LessThan<T>], a: &T, b: &T) -> Ordering {
    for less in chain {
        if less(a, b) {
            return Ordering::Less;
        }
        if less(b, a) {
            return Ordering::Greater;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_separating_comparator_decides() {
        let chain: Vec<LessThan<(i32, i32)>> = vec![
            ascending(|p: &(i32, i32)| p.0),
            descending(|p: &(i32, i32)| p.1),
        ];
        assert_eq!(compare_chain(&chain, &(0, 9), &(1, 0)), Ordering::Less);
        assert_eq!(compare_chain(&chain, &(1, 0), &(1, 9)), Ordering::Greater);
        assert_eq!(compare_chain(&chain, &(1, 3), &(1, 3)), Ordering::Equal);
    }

    #[test]
    fn incomparable_keys_rank_last() {
        let up = vec![ascending(|x: &f64| *x)];
        assert_eq!(compare_chain(&up, &f64::NAN, &1.0), Ordering::Greater);
        assert_eq!(compare_chain(&up, &1.0, &f64::NAN), Ordering::Less);
        assert_eq!(compare_chain(&up, &f64::NAN, &f64::NAN), Ordering::Equal);

        let down = vec![descending(|x: &f64| *x)];
        assert_eq!(compare_chain(&down, &f64::NAN, &-1.0), Ordering::Greater);
        assert_eq!(compare_chain(&down, &2.0, &1.0), Ordering::Less);
    }
}
