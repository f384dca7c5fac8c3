//! Element-wise transformations.
//!
//! This module provides [`Map`], [`Inspect`], [`Copied`] and [`Cloned`]. Each
//! wraps one source and hands the consumer's answer straight back to it, so a
//! stop reaches the source on the very callback that produced it.

use crate::Seq;

/// Transforms each element of the wrapped sequence.
///
/// The transform runs only for elements that reach this stage, and never after
/// the consumer has stopped.
#[derive(Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

/// Create a sequence that applies `f` to every element of `source`.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let doubled = map(from_slice(&[1, 2, 3]), |x| x * 2);
/// assert_eq!(doubled.collect(), vec![2, 4, 6]);
/// ```
pub fn map<S, V, F>(source: S, f: F) -> Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> V,
{
    Map { source, f }
}

impl<S, V, F> Seq for Map<S, F>
where
    S: Seq,
    F: Fn(S::Item) -> V,
{
    type Item = V;

    fn drive<G>(&self, mut g: G) -> bool
    where
        G: FnMut(V) -> bool,
    {
        let f = &self.f;
        self.source.drive(|x| g(f(x)))
    }
}

/// Observes each element without changing it.
#[derive(Clone)]
pub struct Inspect<S, F> {
    source: S,
    f: F,
}

pub fn inspect<S, F>(source: S, f: F) -> Inspect<S, F>
where
    S: Seq,
    F: Fn(&S::Item),
{
    Inspect { source, f }
}

impl<S, F> Seq for Inspect<S, F>
where
    S: Seq,
    F: Fn(&S::Item),
{
    type Item = S::Item;

    fn drive<G>(&self, mut g: G) -> bool
    where
        G: FnMut(Self::Item) -> bool,
    {
        let f = &self.f;
        self.source.drive(|x| {
            f(&x);
            g(x)
        })
    }
}

/// Copies elements out of a sequence of references.
#[derive(Clone)]
pub struct Copied<S>(S);

pub fn copied<'a, S, T>(source: S) -> Copied<S>
where
    S: Seq<Item = &'a T>,
    T: Copy + 'a,
{
    Copied(source)
}

impl<'a, S, T> Seq for Copied<S>
where
    S: Seq<Item = &'a T>,
    T: Copy + 'a,
{
    type Item = T;

    fn drive<G>(&self, mut g: G) -> bool
    where
        G: FnMut(T) -> bool,
    {
        self.0.drive(|x| g(*x))
    }
}

/// Clones elements out of a sequence of references.
#[derive(Clone)]
pub struct Cloned<S>(S);

pub fn cloned<'a, S, T>(source: S) -> Cloned<S>
where
    S: Seq<Item = &'a T>,
    T: Clone + 'a,
{
    Cloned(source)
}

impl<'a, S, T> Seq for Cloned<S>
where
    S: Seq<Item = &'a T>,
    T: Clone + 'a,
{
    type Item = T;

    fn drive<G>(&self, mut g: G) -> bool
    where
        G: FnMut(T) -> bool,
    {
        self.0.drive(|x| g(x.clone()))
    }
}
