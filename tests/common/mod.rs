//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::rc::Rc;

use qseq::Sequence;

/// Shared call counter for closures handed to operators.
#[derive(Clone, Default)]
pub struct Counter(Rc<Cell<usize>>);

impl Counter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bump(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn get(&self) -> usize {
        self.0.get()
    }
}

/// `0..n` that counts every element its cursors produce.
pub fn counted_range(n: i64, pulls: &Counter) -> Sequence<i64> {
    let pulls = pulls.clone();
    Sequence::from_factory(move || {
        let pulls = pulls.clone();
        (0..n).inspect(move |_| pulls.bump())
    })
}

/// A handful of small sources with duplicates, used by property-style tests.
pub fn sample_sources() -> Vec<Vec<i64>> {
    vec![
        vec![],
        vec![1],
        vec![1, 1, 1, 1],
        vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5],
        (0..50).map(|x| (x * 7) % 13).collect(),
        (0..20).rev().chain(0..20).collect(),
    ]
}
