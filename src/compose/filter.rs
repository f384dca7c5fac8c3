use crate::Seq;

/// Passes on only the elements that satisfy a predicate.
///
/// Rejected elements are dropped and the source is told to keep going. Once
/// the consumer stops, the predicate is not called again.
#[derive(Clone)]
pub struct Filter<S, P> {
    source: S,
    predicate: P,
}

/// Create a sequence of the elements of `source` for which `predicate` holds.
///
/// ```
/// use lazyseq::prelude::*;
///
/// let data = [10, 15, 22, 30, 7];
/// let evens = filter(from_slice(&data), |x| **x % 2 == 0);
/// assert_eq!(evens.copied().collect(), vec![10, 22, 30]);
/// ```
pub fn filter<S, P>(source: S, predicate: P) -> Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    Filter { source, predicate }
}

impl<S, P> Seq for Filter<S, P>
where
    S: Seq,
    P: Fn(&S::Item) -> bool,
{
    type Item = S::Item;

    fn drive<G>(&self, mut g: G) -> bool
    where
        G: FnMut(Self::Item) -> bool,
    {
        let predicate = &self.predicate;
        self.source
            .drive(|x| if predicate(&x) { g(x) } else { true })
    }
}

/// Yields at most `n` elements of the wrapped sequence.
///
/// After the `n`-th element the source is told to stop, but the traversal
/// still counts as exhausted from the consumer's point of view.
#[derive(Clone)]
pub struct Take<S> {
    source: S,
    n: usize,
}

pub fn take<S: Seq>(source: S, n: usize) -> Take<S> {
    Take { source, n }
}

impl<S: Seq> Seq for Take<S> {
    type Item = S::Item;

    fn drive<G>(&self, mut g: G) -> bool
    where
        G: FnMut(Self::Item) -> bool,
    {
        if self.n == 0 {
            return true;
        }
        let mut remaining = self.n;
        let mut stopped = false;
        self.source.drive(|x| {
            if !g(x) {
                stopped = true;
                return false;
            }
            remaining -= 1;
            remaining > 0
        });
        !stopped
    }
}
