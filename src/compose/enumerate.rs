use crate::{Seq, tuple::Enumerated};

/// Pairs each element with its index in the traversal.
///
/// The counter lives on the stack of [`drive`](Seq::drive), so every traversal
/// starts again from 0.
#[derive(Clone)]
pub struct Enumerate<S>(S);

/// Create a sequence of [`Enumerated`] elements.
///
/// ```
/// use lazyseq::prelude::*;
///
/// let data = ['a', 'b'];
/// let indexed = enumerate(from_slice(&data).copied()).collect();
/// assert_eq!(indexed, vec![Enumerated::new(0, 'a'), Enumerated::new(1, 'b')]);
/// ```
pub fn enumerate<S: Seq>(source: S) -> Enumerate<S> {
    Enumerate(source)
}

impl<S: Seq> Seq for Enumerate<S> {
    type Item = Enumerated<S::Item>;

    fn drive<G>(&self, mut g: G) -> bool
    where
        G: FnMut(Self::Item) -> bool,
    {
        let mut index = 0;
        self.0.drive(|value| {
            let item = Enumerated::new(index, value);
            index += 1;
            g(item)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::build::from_slice;

    #[test]
    fn test_indices_follow_yield_order_not_values() {
        let data = [50, 7, 12, 3, 8];
        let got: Vec<_> = from_slice(&data)
            .copied()
            .filter(|x| x % 2 == 0)
            .enumerate()
            .map(Enumerated::into_pair)
            .collect();

        assert_eq!(got, vec![(0, 50), (1, 12), (2, 8)]);
    }

    #[test]
    fn test_counter_restarts_per_traversal() {
        let data = ["p", "q"];
        let seq = from_slice(&data).enumerate().map(|e| e.index);
        assert_eq!(seq.collect(), vec![0, 1]);
        assert_eq!(seq.collect(), vec![0, 1]);
    }

    #[test]
    fn test_enumerate_early_stop() {
        let data = [1, 2, 3];
        let mut last = None;
        let exhausted = from_slice(&data).enumerate().drive(|e| {
            last = Some(e.index);
            e.index < 1
        });
        assert!(!exhausted);
        assert_eq!(last, Some(1));
    }
}
