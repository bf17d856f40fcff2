//! Grouping: eager build, lazy emit.
//!
//! On the first pull the whole source is consumed into a `Lookup`; groupings
//! are then handed out one per pull in first-seen key order. `HashMap` has no
//! stable iteration order, so the lookup keeps an index into an ordered list.

use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use qseq_core::{metrics, Grouping, QueryConfig, Sequence};

/// Key -> members, in first-seen key order, members in source order.
pub struct Lookup<K, V> {
    index: HashMap<K, usize>,
    groups: Vec<(K, Vec<V>)>,
}

impl<K: Hash + Eq + Clone, V> Lookup<K, V> {
    pub fn build<T, I, KF, EF>(op: &'static str, items: I, key: KF, element: EF) -> Self
    where
        I: Iterator<Item = T>,
        KF: Fn(&T) -> K,
        EF: Fn(T) -> V,
    {
        let cap = QueryConfig::global().buffer_capacity_hint;
        let mut lookup = Lookup {
            index: HashMap::with_capacity(cap),
            groups: Vec::with_capacity(cap),
        };
        let mut total = 0usize;
        for item in items {
            let k = key(&item);
            let v = element(item);
            match lookup.index.get(&k) {
                Some(&slot) => lookup.groups[slot].1.push(v),
                None => {
                    lookup.index.insert(k.clone(), lookup.groups.len());
                    lookup.groups.push((k, vec![v]));
                }
            }
            total += 1;
        }
        metrics::materialized(op, total);
        lookup
    }

    /// Freeze into shared member lists keyed for probing (joins).
    pub fn into_shared(self) -> HashMap<K, Rc<[V]>> {
        self.groups
            .into_iter()
            .map(|(k, members)| (k, Rc::from(members)))
            .collect()
    }
}

impl<K: Hash + Eq + Clone, V: Clone + 'static> Lookup<K, V> {
    /// Groupings in first-seen key order.
    pub fn into_groupings(self) -> Vec<Grouping<K, V>> {
        self.groups
            .into_iter()
            .map(|(k, members)| Grouping::from_members(k, Rc::from(members)))
            .collect()
    }
}

/// Group elements by `key`, projecting each member through `element`.
pub fn group_by_with<T, K, V, KF, EF>(
    source: Sequence<T>,
    key: KF,
    element: EF,
) -> Sequence<Grouping<K, V>>
where
    T: 'static,
    K: Hash + Eq + Clone + 'static,
    V: Clone + 'static,
    KF: Fn(&T) -> K + 'static,
    EF: Fn(T) -> V + 'static,
{
    let key = Rc::new(key);
    let element = Rc::new(element);
    Sequence::from_factory(move || {
        let source = source.clone();
        let key = Rc::clone(&key);
        let element = Rc::clone(&element);
        let mut groups: Option<std::vec::IntoIter<Grouping<K, V>>> = None;
        std::iter::from_fn(move || {
            groups
                .get_or_insert_with(|| {
                    Lookup::build("group_by", source.cursor(), |x| key(x), |x| element(x))
                        .into_groupings()
                        .into_iter()
                })
                .next()
        })
    })
}

pub fn group_by<T, K, KF>(source: Sequence<T>, key: KF) -> Sequence<Grouping<K, T>>
where
    T: Clone + 'static,
    K: Hash + Eq + Clone + 'static,
    KF: Fn(&T) -> K + 'static,
{
    group_by_with(source, key, |x| x)
}

/// Group, then map every `(key, members)` pair through `result`.
pub fn group_by_with_result<T, K, V, R, KF, EF, RF>(
    source: Sequence<T>,
    key: KF,
    element: EF,
    result: RF,
) -> Sequence<R>
where
    T: 'static,
    K: Hash + Eq + Clone + 'static,
    V: Clone + 'static,
    R: 'static,
    KF: Fn(&T) -> K + 'static,
    EF: Fn(T) -> V + 'static,
    RF: Fn(K, Sequence<V>) -> R + 'static,
{
    crate::map::select(group_by_with(source, key, element), move |g| {
        result(g.key, g.values)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use qseq_core::from;

    #[test]
    fn groups_in_first_seen_key_order() {
        let groups: Vec<_> = group_by(from(vec![5, 2, 4, 1, 3]), |x| x % 2).iter().collect();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].key, 1);
        assert_eq!(groups[0].values.iter().collect::<Vec<_>>(), vec![5, 1, 3]);
        assert_eq!(groups[1].key, 0);
        assert_eq!(groups[1].values.iter().collect::<Vec<_>>(), vec![2, 4]);
    }

    #[test]
    fn element_selector_projects_members() {
        let s = group_by_with_result(
            from(vec!["apple", "avocado", "banana"]),
            |w| w.chars().next(),
            |w| w.len(),
            |k, lens| (k, lens.iter().sum::<usize>()),
        );
        assert_eq!(
            s.iter().collect::<Vec<_>>(),
            vec![(Some('a'), 12), (Some('b'), 6)]
        );
    }

    #[test]
    fn build_waits_for_first_pull() {
        use std::cell::Cell;
        let calls = Rc::new(Cell::new(0));
        let c = Rc::clone(&calls);
        let s = group_by(from(0..4), move |x| {
            c.set(c.get() + 1);
            *x
        });
        let mut cursor = s.cursor();
        assert_eq!(calls.get(), 0);
        let _ = cursor.next();
        assert_eq!(calls.get(), 4);
    }
}
