/// An ordered pair, the element type produced by [`zip`](crate::zip).
///
/// # Examples
///
/// ```rust
/// use lazyseq::Tuple;
///
/// let pair = Tuple::new(1, "a");
/// assert_eq!(pair.left, 1);
/// assert_eq!(pair.right, "a");
/// assert_eq!(pair.into_pair(), (1, "a"));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tuple<T, V> {
    /// Element taken from the first collection
    pub left: T,
    /// Element taken from the second collection
    pub right: V,
}

impl<T, V> Tuple<T, V> {
    #[inline]
    pub const fn new(left: T, right: V) -> Self {
        Self { left, right }
    }

    /// Converts into a plain `(left, right)` tuple.
    #[inline]
    pub fn into_pair(self) -> (T, V) {
        (self.left, self.right)
    }

    /// Swaps the two sides.
    ///
    /// ```rust
    /// use lazyseq::Tuple;
    ///
    /// assert_eq!(Tuple::new(1, 'x').swap(), Tuple::new('x', 1));
    /// ```
    #[inline]
    pub fn swap(self) -> Tuple<V, T> {
        Tuple::new(self.right, self.left)
    }
}

impl<'a, 'b, T: Copy, V: Copy> Tuple<&'a T, &'b V> {
    /// Maps a `Tuple<&T, &V>` to a `Tuple<T, V>` by copying both sides.
    ///
    /// ```rust
    /// use lazyseq::Tuple;
    ///
    /// let (a, b) = (3, 'c');
    /// assert_eq!(Tuple::new(&a, &b).copied(), Tuple::new(3, 'c'));
    /// ```
    #[inline]
    pub fn copied(self) -> Tuple<T, V> {
        Tuple::new(*self.left, *self.right)
    }
}

impl<T, V> From<(T, V)> for Tuple<T, V> {
    fn from((left, right): (T, V)) -> Self {
        Self::new(left, right)
    }
}

impl<T, V> From<Tuple<T, V>> for (T, V) {
    fn from(t: Tuple<T, V>) -> Self {
        t.into_pair()
    }
}

/// An element paired with its position in a traversal, produced by
/// [`Seq::enumerate`](crate::Seq::enumerate).
///
/// The index counts yielded elements starting at 0. It says nothing about the
/// element's position in the source collection once a filter sits upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Enumerated<V> {
    pub index: usize,
    pub value: V,
}

impl<V> Enumerated<V> {
    #[inline]
    pub const fn new(index: usize, value: V) -> Self {
        Self { index, value }
    }

    /// Converts into an `(index, value)` tuple.
    #[inline]
    pub fn into_pair(self) -> (usize, V) {
        (self.index, self.value)
    }

    /// Maps the value, keeping the index.
    ///
    /// ```rust
    /// use lazyseq::Enumerated;
    ///
    /// let e = Enumerated::new(2, 10);
    /// assert_eq!(e.map(|v| v * 3), Enumerated::new(2, 30));
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Enumerated<U>
    where
        F: FnOnce(V) -> U,
    {
        Enumerated::new(self.index, f(self.value))
    }
}
