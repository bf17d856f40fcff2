//! Grouping and join behavior: partitioning, key order, join cardinality.

mod common;

use std::collections::HashSet;

use common::sample_sources;
use qseq::prelude::*;

#[test]
fn test_group_by_partitions_source() {
    for src in sample_sources() {
        let s = qseq::from(src.clone());
        let groups = s.group_by(|x| x % 4).to_array();

        // every element lands in exactly one group, in source order
        let total: usize = groups.iter().map(|g| g.count()).sum();
        assert_eq!(total, src.len());

        let keys: Vec<i64> = groups.iter().map(|g| g.key).collect();
        let unique: HashSet<_> = keys.iter().collect();
        assert_eq!(unique.len(), keys.len(), "keys are distinct");

        for g in &groups {
            let expected: Vec<i64> = src.iter().copied().filter(|x| x % 4 == g.key).collect();
            assert_eq!(g.to_array(), expected);
        }
    }
}

#[test]
fn test_group_keys_in_first_seen_order() {
    let words = qseq::from(vec!["pear", "fig", "plum", "kiwi", "lime", "date"]);
    let keys: Vec<usize> = words.group_by(|w| w.len()).select(|g| g.key).to_array();
    assert_eq!(keys, vec![4, 3]);

    let firsts: Vec<char> = words
        .group_by(|w| w.chars().next().unwrap_or(' '))
        .select(|g| g.key)
        .to_array();
    assert_eq!(firsts, vec!['p', 'f', 'k', 'l', 'd']);
}

#[test]
fn test_group_by_with_element_and_result() {
    let sales = qseq::from(vec![("north", 3), ("south", 5), ("north", 4), ("east", 1)]);
    let totals = sales.group_by_with_result(
        |s| s.0,
        |s| s.1,
        |region, amounts| (region, amounts.reduce_seeded(0, |a, b| a + b)),
    );
    assert_eq!(
        totals.to_array(),
        vec![("north", 7), ("south", 5), ("east", 1)]
    );

    let by_region = sales.group_by_with(|s| s.0, |s| s.1).to_array();
    assert_eq!(by_region[0].to_array(), vec![3, 4]);
}

#[test]
fn test_groupings_are_reenumerable() {
    let groups = qseq::from(0..6).group_by(|x| x % 2);
    let first = groups.first().expect("non-empty");
    assert_eq!(first.to_array(), vec![0, 2, 4]);
    assert_eq!(first.to_array(), vec![0, 2, 4]);
    assert_eq!(groups.count(), 2);
}

#[test]
fn test_join_half_keys_cardinality() {
    let pairs = qseq::from(0..10)
        .join(qseq::from(0..10), |o| *o, |i| i / 2, |half, whole| (half, whole))
        .to_array();
    assert_eq!(pairs.len(), 10);
    assert!(pairs.iter().all(|(half, whole)| whole / 2 == *half));
    // outer 0..=4 each match two inner values; 5..=9 match none
    assert_eq!(pairs.iter().filter(|(half, _)| *half == 3).count(), 2);
    assert!(pairs.iter().all(|(half, _)| *half < 5));
}

#[test]
fn test_join_order_follows_outer_then_inner() {
    let people = qseq::from(vec![(1, "ann"), (2, "ben"), (3, "cat")]);
    let pets = qseq::from(vec![("rex", 2), ("tom", 1), ("kit", 2)]);
    let owned = people
        .join(pets, |p| p.0, |pet| pet.1, |p, pet| format!("{}:{}", p.1, pet.0))
        .to_array();
    assert_eq!(owned, vec!["ann:tom", "ben:rex", "ben:kit"]);
}

#[test]
fn test_join_pairs_with_duplicate_outer_keys() {
    let s = qseq::from(vec!['a', 'a']).join_pairs(qseq::from(vec![1, 2]), |_| 0, |_| 0);
    assert_eq!(s.count(), 4);
}

#[test]
fn test_group_join_yields_one_result_per_outer() {
    let outer = qseq::from(vec![0, 1, 2, 3]);
    let inner = qseq::from(0..9);
    let counts = outer
        .group_join(inner.clone(), |o| *o, |i| i % 3, |o, matches| (o, matches.count()))
        .to_array();
    assert_eq!(counts, vec![(0, 3), (1, 3), (2, 3), (3, 0)]);

    let groupings = outer.group_join_groupings(inner, |o| *o, |i| i % 3).to_array();
    assert_eq!(groupings.len(), 4);
    assert_eq!(groupings[2].key, 2);
    assert_eq!(groupings[2].to_array(), vec![2, 5, 8]);
    assert!(!groupings[3].any());
}

#[test]
fn test_dictionary_from_groups() {
    let lookup = qseq::from(vec!["ox", "cat", "dog", "emu", "yak"])
        .group_by(|w| w.len())
        .to_dictionary(|g| (g.key, g.count()));
    assert_eq!(lookup.get(&2), Some(&1));
    assert_eq!(lookup.get(&3), Some(&4));
}
