//! Laziness: operators pull only what the consumer asks for.

mod common;

use common::{counted_range, Counter};
use qseq::prelude::*;

#[test]
fn test_filter_select_invoked_only_for_pulled_elements() {
    let predicate_calls = Counter::new();
    let selector_calls = Counter::new();
    let (p, s) = (predicate_calls.clone(), selector_calls.clone());

    let pipeline = qseq::from(0..1000)
        .filter(move |x| {
            p.bump();
            x % 2 == 0
        })
        .select(move |x| {
            s.bump();
            x * 3
        });

    assert_eq!(predicate_calls.get(), 0, "building the chain pulls nothing");

    let firsts: Vec<i32> = pipeline.take(5).to_array();
    assert_eq!(firsts, vec![0, 6, 12, 18, 24]);
    // 0..=8 were tested to produce five evens
    assert_eq!(predicate_calls.get(), 9);
    assert_eq!(selector_calls.get(), 5);
}

#[test]
fn test_each_enumeration_restarts() {
    let pulls = Counter::new();
    let s = counted_range(10, &pulls).select(|x| x + 1);
    assert_eq!(s.count(), 10);
    assert_eq!(s.count(), 10);
    assert_eq!(pulls.get(), 20);
}

#[test]
fn test_take_does_not_over_pull_parent() {
    let pulls = Counter::new();
    let s = counted_range(1_000, &pulls).take(3);
    assert_eq!(s.to_array(), vec![0, 1, 2]);
    assert_eq!(pulls.get(), 3);
}

#[test]
fn test_first_and_any_stop_early() {
    let pulls = Counter::new();
    let s = counted_range(1_000, &pulls);
    assert!(s.any());
    assert_eq!(s.first(), Ok(0));
    assert_eq!(s.first_where(|x| *x == 4), Ok(4));
    assert_eq!(pulls.get(), 1 + 1 + 5);
}

#[test]
fn test_select_many_drains_inner_before_next_outer() {
    let outer_pulls = Counter::new();
    let s = counted_range(100, &outer_pulls).select_many(|x| vec![x; 3]);
    let head = s.take(4).to_array();
    assert_eq!(head, vec![0, 0, 0, 1]);
    assert_eq!(outer_pulls.get(), 2);
}

#[test]
fn test_concat_order() {
    let s = qseq::from(vec![1, 2, 3]).concat(qseq::from(vec![4, 5, 6]));
    let mut expected = 1;
    for elem in &s {
        assert_eq!(elem, expected);
        expected += 1;
    }
    assert_eq!(expected, 7);
}

#[test]
fn test_concat_second_side_untouched_when_first_suffices() {
    let first = Counter::new();
    let second = Counter::new();
    let s = counted_range(5, &first).concat(counted_range(5, &second));
    assert_eq!(s.take(5).count(), 5);
    assert_eq!(second.get(), 0);
}

#[test]
fn test_zip_stops_at_shorter() {
    let pairs = qseq::from(0..3).zip(qseq::from(vec!['a', 'b']), |n, c| (n, c));
    assert_eq!(pairs.to_array(), vec![(0, 'a'), (1, 'b')]);
}

#[test]
fn test_round_trip_through_to_array() {
    let original = qseq::from(vec![5, 3, 8, 1, 9, 2]).skip(1).take_while(|x| *x != 2);
    let snapshot = original.to_array();
    let rewrapped = qseq::from(snapshot.clone());
    assert_eq!(rewrapped.to_array(), original.to_array());
    assert!(rewrapped.sequence_equal(&original));
    assert_eq!(snapshot, vec![3, 8, 1, 9]);
}

#[test]
fn test_group_by_builds_on_first_pull() {
    let pulls = Counter::new();
    let groups = counted_range(10, &pulls).group_by(|x| x % 3);
    let mut cursor = groups.cursor();
    assert_eq!(pulls.get(), 0);
    let first = cursor.next().expect("one group");
    assert_eq!(pulls.get(), 10);
    assert_eq!(first.key, 0);
}

#[test]
fn test_reverse_is_eager() {
    let pulls = Counter::new();
    let reversed = counted_range(10, &pulls).reverse();
    assert_eq!(pulls.get(), 0);
    assert_eq!(reversed.first(), Ok(9));
    assert_eq!(pulls.get(), 10);
    assert_eq!(qseq::from(vec![1, 2, 3, 4, 5]).reverse().to_array(), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_one_shot_source_is_drained_once() {
    let s = Sequence::once(vec![1, 2, 3].into_iter());
    assert_eq!(s.select(|x| x * 2).to_array(), vec![2, 4, 6]);
    assert_eq!(s.count(), 0);
}
