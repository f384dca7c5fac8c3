use crate::{Seq, error::SeqError, tuple::Tuple};

/// Pairwise sequence over two fixed collections.
///
/// Collections of unequal length produce a sequence that yields nothing. It is
/// not truncated to the shorter side. Use [`try_zip`] to get an error instead.
#[derive(Debug)]
pub struct Zip<'a, 'b, T, V> {
    left: &'a [T],
    right: &'b [V],
}

impl<T, V> Zip<'_, '_, T, V> {
    /// Returns `true` if the two collections differ in length, in which case
    /// driving this sequence yields nothing.
    pub const fn is_mismatched(&self) -> bool {
        self.left.len() != self.right.len()
    }

    /// Number of pairs this sequence yields when driven to exhaustion.
    pub const fn len(&self) -> usize {
        if self.is_mismatched() {
            0
        } else {
            self.left.len()
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T, V> Clone for Zip<'_, '_, T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Zip<'_, '_, T, V> {}

/// Pair up two collections element by element.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = zip(&[1, 2, 3], &["a", "b", "c"]).map(Tuple::copied);
/// assert_eq!(pairs.first(), Some(Tuple::new(1, "a")));
///
/// // unequal lengths: legal to build, yields nothing
/// assert_eq!(zip(&[1, 2, 3], &[4, 5]).count(), 0);
/// ```
pub fn zip<'a, 'b, T, V>(left: &'a [T], right: &'b [V]) -> Zip<'a, 'b, T, V> {
    let zipped = Zip { left, right };
    if zipped.is_mismatched() {
        tracing::debug!(
            left = left.len(),
            right = right.len(),
            "zip over collections of different lengths yields nothing"
        );
    }
    zipped
}

/// Like [`zip`], but refuses collections of different lengths.
pub fn try_zip<'a, 'b, T, V>(
    left: &'a [T],
    right: &'b [V],
) -> Result<Zip<'a, 'b, T, V>, SeqError> {
    if left.len() != right.len() {
        tracing::debug!(left = left.len(), right = right.len(), "rejecting zip");
        return Err(SeqError::LengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    Ok(Zip { left, right })
}

impl<'a, 'b, T, V> Seq for Zip<'a, 'b, T, V> {
    type Item = Tuple<&'a T, &'b V>;

    fn drive<F>(&self, mut f: F) -> bool
    where
        F: FnMut(Self::Item) -> bool,
    {
        if self.is_mismatched() {
            return true;
        }
        for (l, r) in self.left.iter().zip(self.right) {
            if !f(Tuple::new(l, r)) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zip_basic() {
        let got = zip(&[1, 2, 3], &["a", "b", "c"]).map(Tuple::copied).collect();
        assert_eq!(
            got,
            vec![Tuple::new(1, "a"), Tuple::new(2, "b"), Tuple::new(3, "c")]
        );
    }

    #[test]
    fn test_zip_empty() {
        let zipped = zip::<i32, i32>(&[], &[]);
        assert!(!zipped.is_mismatched());
        assert!(zipped.collect().is_empty());
    }

    #[test]
    fn test_zip_different_lengths_never_calls_back() {
        let zipped = zip(&[1, 2, 3], &[4, 5]);
        let mut calls = 0;
        let exhausted = zipped.drive(|_| {
            calls += 1;
            true
        });

        assert!(exhausted);
        assert_eq!(calls, 0);
        assert!(zipped.is_mismatched());
        assert_eq!(zipped.len(), 0);
    }

    #[test]
    fn test_zip_early_stop() {
        let mut got = Vec::new();
        zip(&[1, 2, 3, 4], &[10, 20, 30, 40]).drive(|t| {
            got.push(t.copied());
            false
        });
        assert_eq!(got, vec![Tuple::new(1, 10)]);
    }

    #[test]
    fn test_zip_generic_types() {
        #[derive(Debug, Clone, PartialEq)]
        struct A(i32);
        #[derive(Debug, Clone, PartialEq)]
        struct B(String);

        let s1 = [A(1), A(2)];
        let s2 = [B("x".into()), B("y".into())];
        let got = zip(&s1, &s2).map(|t| (t.left.clone(), t.right.clone())).collect();

        assert_eq!(got, vec![(A(1), B("x".into())), (A(2), B("y".into()))]);
    }

    #[test]
    fn test_try_zip_reports_lengths() {
        assert_eq!(
            try_zip(&[1, 2, 3], &[4, 5]).map(|z| z.len()),
            Err(SeqError::LengthMismatch { left: 3, right: 2 })
        );
        assert_eq!(try_zip(&[1, 2], &[4, 5]).map(|z| z.count()), Ok(2));
    }
}
