//! Core trait for push-style lazy sequences.
//!
//! This module defines the [`Seq`] trait, the single suspension mechanism every
//! other part of the crate is built on. A [`Seq`] is not a stored collection but
//! a capability: drive it with a callback and it calls the callback once per
//! element, in order, until the elements run out or the callback returns `false`.
//!
//! # The Seq Trait
//!
//! [`Seq::drive`] takes a callback `FnMut(Item) -> bool` and reports how the
//! traversal ended:
//! - `true`: the sequence was exhausted
//! - `false`: the consumer asked to stop
//!
//! Combinators forward both booleans by hand: the callback's answer goes back
//! to the upstream sequence, and the upstream's answer comes back out of
//! `drive`. That is all early termination needs, and nothing is buffered.
//!
//! # Examples
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let data = [1, 2, 3, 4];
//! let mut seen = Vec::new();
//! let exhausted = from_slice(&data).drive(|x| {
//!     seen.push(*x);
//!     *x < 2
//! });
//! assert!(!exhausted);
//! assert_eq!(seen, vec![1, 2]);
//! ```

use either::Either;

use crate::compose::{Chain, Cloned, Copied, Enumerate, Filter, Inspect, Map, Take, chain};

/// A lazy, push-style producer of elements.
///
/// Driving takes `&self`, so a sequence can be driven more than once. Sequences
/// over a fixed collection, and everything built from them with pure functions,
/// yield the same elements on every traversal.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let words = ["a", "bb", "ccc"];
/// let lengths = from_slice(&words).map(|w| w.len());
/// assert_eq!(lengths.collect(), vec![1, 2, 3]);
/// assert_eq!(lengths.collect(), vec![1, 2, 3]); // restartable
/// ```
pub trait Seq {
    /// Type of the elements pushed into the callback
    type Item;

    /// Push each element into `f` until exhausted or `f` returns `false`.
    ///
    /// Returns `true` if the sequence ran out of elements and `false` if `f`
    /// stopped it. Once `f` has returned `false` it is never called again
    /// during this traversal.
    fn drive<F>(&self, f: F) -> bool
    where
        F: FnMut(Self::Item) -> bool;

    /// Transform each element with `f`.
    fn map<V, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> V,
    {
        crate::compose::map(self, f)
    }

    /// Keep only elements for which `predicate` holds.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        crate::compose::filter(self, predicate)
    }

    /// Pair each element with its zero-based position in the traversal.
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        crate::compose::enumerate(self)
    }

    /// Yield at most `n` elements, stopping the source right after the last one.
    fn take(self, n: usize) -> Take<Self>
    where
        Self: Sized,
    {
        crate::compose::take(self, n)
    }

    /// Call `f` with a reference to each element before passing it on.
    fn inspect<F>(self, f: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        crate::compose::inspect(self, f)
    }

    /// Copy elements out of references.
    fn copied<'a, T>(self) -> Copied<Self>
    where
        Self: Sized + Seq<Item = &'a T>,
        T: Copy + 'a,
    {
        crate::compose::copied(self)
    }

    /// Clone elements out of references.
    fn cloned<'a, T>(self) -> Cloned<Self>
    where
        Self: Sized + Seq<Item = &'a T>,
        T: Clone + 'a,
    {
        crate::compose::cloned(self)
    }

    /// Drive this sequence to exhaustion, then `next`.
    fn chain<R>(self, next: R) -> Chain<Self, R>
    where
        Self: Sized,
        R: Seq<Item = Self::Item>,
    {
        chain(self, next)
    }

    /// Erase the concrete type so differently built sequences can be mixed.
    fn boxed<'a>(self) -> BoxSeq<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    /// Collect every element, in yield order, into a `Vec`.
    fn collect(&self) -> Vec<Self::Item> {
        self.collect_into()
    }

    /// Collect every element into any default-constructible, extendable container.
    fn collect_into<C>(&self) -> C
    where
        C: Default + Extend<Self::Item>,
    {
        let mut out = C::default();
        self.drive(|x| {
            out.extend(std::iter::once(x));
            true
        });
        out
    }

    /// Count elements without keeping them.
    fn count(&self) -> usize {
        let mut n = 0;
        self.drive(|_| {
            n += 1;
            true
        });
        n
    }

    /// Fold elements left to right, starting from `initial`.
    ///
    /// Returns `initial` unchanged when the sequence is empty.
    fn reduce<V, F>(&self, initial: V, mut combine: F) -> V
    where
        F: FnMut(V, Self::Item) -> V,
    {
        // refilled after every element; a panic in `combine` unwinds past the `expect`
        let mut acc = Some(initial);
        self.drive(|x| {
            acc = acc.take().map(|a| combine(a, x));
            true
        });
        acc.expect("accumulator is restored after every combine")
    }

    /// Returns `true` as soon as `predicate` holds for an element.
    fn any<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        let mut found = false;
        self.drive(|x| {
            found = predicate(x);
            !found
        });
        found
    }

    /// Returns `false` as soon as `predicate` fails for an element.
    ///
    /// An empty sequence satisfies every predicate.
    fn all<P>(&self, mut predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        let mut holds = true;
        self.drive(|x| {
            holds = predicate(x);
            holds
        });
        holds
    }

    /// Call `f` on every element.
    fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(Self::Item),
    {
        self.drive(|x| {
            f(x);
            true
        });
    }

    /// First element for which `predicate` holds.
    fn find<P>(&self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        let mut hit = None;
        self.drive(|x| {
            if predicate(&x) {
                hit = Some(x);
                false
            } else {
                true
            }
        });
        hit
    }

    /// Traversal index of the first element for which `predicate` holds.
    fn position<P>(&self, mut predicate: P) -> Option<usize>
    where
        P: FnMut(Self::Item) -> bool,
    {
        let mut index = 0;
        let mut hit = None;
        self.drive(|x| {
            if predicate(x) {
                hit = Some(index);
                return false;
            }
            index += 1;
            true
        });
        hit
    }

    /// First element, reading nothing past it.
    fn first(&self) -> Option<Self::Item> {
        let mut first = None;
        self.drive(|x| {
            first = Some(x);
            false
        });
        first
    }

    /// Last element, driving to exhaustion.
    fn last(&self) -> Option<Self::Item> {
        let mut last = None;
        self.drive(|x| {
            last = Some(x);
            true
        });
        last
    }
}

/// Object-safe form of [`Seq`].
///
/// [`Seq::drive`] is generic over its callback, so `dyn Seq` cannot exist.
/// Every `Seq` is also a `DynSeq`, which drives through a `&mut dyn FnMut`
/// instead; [`BoxSeq`] is built on it.
///
/// ```rust
/// use lazyseq::prelude::*;
/// use lazyseq::DynSeq;
///
/// let data = [1, 2, 3];
/// let erased: &dyn DynSeq<Item = &i32> = &from_slice(&data);
/// let mut seen = Vec::new();
/// assert!(!erased.drive_dyn(&mut |x| {
///     seen.push(*x);
///     *x < 2
/// }));
/// assert_eq!(seen, vec![1, 2]);
/// ```
pub trait DynSeq {
    /// Type of the elements pushed into the callback
    type Item;

    /// Same contract as [`Seq::drive`], with the callback behind a trait object.
    fn drive_dyn(&self, f: &mut dyn FnMut(Self::Item) -> bool) -> bool;
}

impl<S> DynSeq for S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn drive_dyn(&self, f: &mut dyn FnMut(Self::Item) -> bool) -> bool {
        self.drive(f)
    }
}

/// A type-erased sequence, created with [`Seq::boxed`].
pub type BoxSeq<'a, T> = Box<dyn DynSeq<Item = T> + 'a>;

impl<T> Seq for Box<dyn DynSeq<Item = T> + '_> {
    type Item = T;

    fn drive<F>(&self, mut f: F) -> bool
    where
        F: FnMut(T) -> bool,
    {
        (**self).drive_dyn(&mut f)
    }
}

impl<S> Seq for &S
where
    S: Seq + ?Sized,
{
    type Item = S::Item;

    fn drive<F>(&self, f: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        (**self).drive(f)
    }
}

/// `None` is the empty sequence.
impl<S> Seq for Option<S>
where
    S: Seq,
{
    type Item = S::Item;

    fn drive<F>(&self, f: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        match self {
            Some(s) => s.drive(f),
            None => true,
        }
    }
}

impl<L, R> Seq for Either<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn drive<F>(&self, f: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        match self {
            Either::Left(l) => l.drive(f),
            Either::Right(r) => r.drive(f),
        }
    }
}
