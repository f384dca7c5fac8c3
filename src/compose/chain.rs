use crate::Seq;

/// Drive the first sequence to exhaustion, then the second.
///
/// Both sides must yield the same element type but may otherwise differ.
pub fn chain<L, R>(l: L, r: R) -> Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    Chain(l, r)
}

/// Two sequences back to back.
///
/// Created via [`chain()`] or [`Seq::chain`]. If the consumer stops inside the
/// first sequence, the second is never driven.
#[derive(Clone)]
pub struct Chain<S1, S2>(S1, S2);

impl<L, R> Seq for Chain<L, R>
where
    L: Seq,
    R: Seq<Item = L::Item>,
{
    type Item = L::Item;

    fn drive<G>(&self, mut g: G) -> bool
    where
        G: FnMut(Self::Item) -> bool,
    {
        self.0.drive(&mut g) && self.1.drive(g)
    }
}

/// Concatenate any number of sequences of the same type.
///
/// Sequences are driven in order and empty ones contribute nothing. To mix
/// differently built sequences, [`boxed`](Seq::boxed) them first.
///
/// # Examples
///
/// ```
/// use lazyseq::prelude::*;
///
/// let (a, b) = ([1, 2], [3, 4]);
/// let joined = concat([from_slice(&a), from_slice(&b), from_slice(&[])]);
/// assert_eq!(joined.copied().collect(), vec![1, 2, 3, 4]);
///
/// let mixed = concat([
///     from_slice(&a).copied().boxed(),
///     from_slice(&b).copied().map(|x| x * 100).boxed(),
/// ]);
/// assert_eq!(mixed.collect(), vec![1, 2, 300, 400]);
/// ```
pub fn concat<I>(parts: I) -> Concat<I::Item>
where
    I: IntoIterator,
    I::Item: Seq,
{
    Concat {
        parts: parts.into_iter().collect(),
    }
}

/// Runs a list of sequences one after another.
///
/// Created via [`concat`]. When the consumer stops, the sequence that was
/// being driven sees the `false` from its own callback and no later sequence
/// is started.
#[derive(Clone)]
pub struct Concat<S> {
    parts: Vec<S>,
}

impl<S> Concat<S> {
    /// Number of concatenated sequences.
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}

impl<S: Seq> Seq for Concat<S> {
    type Item = S::Item;

    fn drive<G>(&self, mut g: G) -> bool
    where
        G: FnMut(Self::Item) -> bool,
    {
        for (segment, part) in self.parts.iter().enumerate() {
            if !part.drive(&mut g) {
                tracing::trace!(segment, of = self.parts.len(), "concat stopped by consumer");
                return false;
            }
        }
        true
    }
}
