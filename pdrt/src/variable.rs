//! Renaming and generation of fresh variables.

use crate::pdrs::{PVar, Ref};
use alloc::{format, vec::Vec};
use fnv::FnvHashSet;

/// Return the target of the first pair whose source is `v`, or `v` if there is none.
///
/// ~~~
/// # use pdrt::variable::rename;
/// let pairs = [(1, 2), (1, 3), (2, 4)];
/// assert_eq!(rename(&1, &pairs), 2);
/// assert_eq!(rename(&5, &pairs), 5);
/// assert_eq!(rename(&5, &[]), 5);
/// ~~~
pub fn rename<V: PartialEq + Clone>(v: &V, pairs: &[(V, V)]) -> V {
    match pairs.iter().find(|(old, _)| old == v) {
        Some((_, new)) => new.clone(),
        None => v.clone(),
    }
}

/// Return `n` projection variables that are not `used`.
///
/// These are greater than all `used` ones, unless
/// this would exceed the largest projection variable;
/// in that case, the smallest unused ones are returned.
///
/// ~~~
/// # use pdrt::variable::fresh_pvars;
/// assert_eq!(fresh_pvars([3, 1], 2), vec![4, 5]);
/// assert_eq!(fresh_pvars([], 1), vec![1]);
/// assert_eq!(fresh_pvars([usize::MAX, 0], 2), vec![1, 2]);
/// ~~~
pub fn fresh_pvars(used: impl IntoIterator<Item = PVar>, n: usize) -> Vec<PVar> {
    let used: FnvHashSet<PVar> = used.into_iter().collect();
    let max = used.iter().copied().max().unwrap_or(0);
    match max.checked_add(n) {
        Some(_) => (1..=n).map(|i| max + i).collect(),
        None => unused(&used).take(n).collect(),
    }
}

/// Return a projection variable that is not `used`.
///
/// This is the same as the first of [`fresh_pvars`].
pub fn fresh_pvar(used: impl IntoIterator<Item = PVar>) -> PVar {
    let used: FnvHashSet<PVar> = used.into_iter().collect();
    let max = used.iter().copied().max().unwrap_or(0);
    match max.checked_add(1) {
        Some(pv) => pv,
        None => unused(&used).next().unwrap_or(max),
    }
}

fn unused(used: &FnvHashSet<PVar>) -> impl Iterator<Item = PVar> + '_ {
    (0..=PVar::MAX).filter(|pv| !used.contains(pv))
}

/// Return for every old referent a fresh referent that is neither used nor returned before.
///
/// A fresh referent consists of the alphabetic stem of the old one,
/// followed by the smallest index making it fresh.
///
/// ~~~
/// # use pdrt::{Ref, variable::fresh_refs};
/// let used = ["x", "x1", "y"].into_iter().map(Ref::from).collect();
/// let olds = ["x", "x1", "y"].map(Ref::from);
/// let fresh = ["x2", "x3", "y1"].map(Ref::from);
/// assert_eq!(fresh_refs(&olds, &used), fresh);
/// ~~~
pub fn fresh_refs(olds: &[Ref], used: &FnvHashSet<Ref>) -> Vec<Ref> {
    let mut fresh: Vec<Ref> = Vec::with_capacity(olds.len());
    for old in olds {
        let stem = old.0.trim_end_matches(|c: char| c.is_ascii_digit());
        let mut i = 1;
        let r = loop {
            let r = Ref(format!("{}{}", stem, i));
            if !used.contains(&r) && !fresh.contains(&r) {
                break r;
            }
            i += 1
        };
        fresh.push(r)
    }
    fresh
}

#[test]
fn fresh_never_used() {
    let used: FnvHashSet<Ref> = ["p1", "p2", "42"].into_iter().map(Ref::from).collect();
    let olds = ["p", "p", "p7", "42"].map(Ref::from);
    let fresh = fresh_refs(&olds, &used);
    assert_eq!(fresh.len(), olds.len());
    for (i, r) in fresh.iter().enumerate() {
        assert!(!used.contains(r));
        assert!(!fresh[..i].contains(r));
    }
    assert_eq!(fresh[0], Ref::from("p3"));
    assert_eq!(fresh[3], Ref::from("1"));

    assert_eq!(fresh_pvar([4, 9, 2]), 10);
    assert!(fresh_pvars([4, 9, 2], 0).is_empty());

    assert_eq!(fresh_pvar([PVar::MAX, 0, 1]), 2);
    assert_eq!(fresh_pvars([PVar::MAX - 1, 1], 2), [0, 2]);
}
