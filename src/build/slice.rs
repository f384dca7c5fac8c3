use crate::Seq;

/// A sequence over a borrowed, fixed collection.
///
/// Yields `&T` in collection order. The collection is never copied, and no
/// element past the one that stopped the traversal is read.
#[derive(Debug)]
pub struct Slice<'a, T> {
    items: &'a [T],
}

impl<'a, T> Slice<'a, T> {
    pub const fn new(items: &'a [T]) -> Self {
        Self { items }
    }

    /// Length of the underlying collection.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// Manual impls: a derive would require `T: Clone`.
impl<T> Clone for Slice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Slice<'_, T> {}

/// Create a sequence over the elements of a fixed collection.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let data = vec![1, 2, 3];
/// let seq = from_slice(&data);
/// assert_eq!(seq.count(), 3);
/// assert_eq!(seq.copied().collect(), data);
/// ```
pub const fn from_slice<T>(items: &[T]) -> Slice<'_, T> {
    Slice::new(items)
}

impl<'a, T> Seq for Slice<'a, T> {
    type Item = &'a T;

    fn drive<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&'a T) -> bool,
    {
        for item in self.items {
            if !f(item) {
                return false;
            }
        }
        true
    }
}

impl<'a, T> From<&'a [T]> for Slice<'a, T> {
    fn from(items: &'a [T]) -> Self {
        Self::new(items)
    }
}

impl<'a, T> From<&'a Vec<T>> for Slice<'a, T> {
    fn from(items: &'a Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Slice<'a, T> {
    fn from(items: &'a [T; N]) -> Self {
        Self::new(items)
    }
}
