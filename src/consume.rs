//! Functions for driving sequences to a final value.
//!
//! Each function here is a thin entry point over the matching provided method
//! of [`Seq`], for callers that prefer `reduce(seq, 0, add)` over
//! `seq.reduce(0, add)`. All of them stop the source as early as their result
//! allows.

use crate::Seq;

/// Materialize every element, in yield order.
pub fn collect<S: Seq>(seq: S) -> Vec<S::Item> {
    seq.collect()
}

/// Count elements without retaining them.
pub fn count<S: Seq>(seq: S) -> usize {
    seq.count()
}

/// Fold left to right from `initial`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let data = [1, 2, 3, 4, 5];
/// assert_eq!(reduce(from_slice(&data), 0, |acc, x| acc + x), 15);
/// assert_eq!(reduce(from_slice(&data), 1, |acc, x| acc * x), 120);
/// ```
pub fn reduce<S, V, F>(seq: S, initial: V, combine: F) -> V
where
    S: Seq,
    F: FnMut(V, S::Item) -> V,
{
    seq.reduce(initial, combine)
}

/// `true` if `predicate` holds for some element. Stops at the first match.
pub fn any<S, P>(seq: S, predicate: P) -> bool
where
    S: Seq,
    P: FnMut(S::Item) -> bool,
{
    seq.any(predicate)
}

/// `true` if `predicate` holds for every element. Stops at the first miss.
pub fn all<S, P>(seq: S, predicate: P) -> bool
where
    S: Seq,
    P: FnMut(S::Item) -> bool,
{
    seq.all(predicate)
}
