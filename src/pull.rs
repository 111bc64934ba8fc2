/// Result of a single pull: either the next produced value or the exhaustion signal.
///
/// `Pull` plays the role that `Option` plays for [`Iterator::next`], but keeps the
/// vocabulary of producers so that combinators read naturally at call sites.
///
/// # Examples
///
/// ```rust
/// use lazyseq::Pull;
///
/// let next: Pull<i32> = Pull::Value(42);
/// let done: Pull<i32> = Pull::Exhausted;
///
/// assert_eq!(next.map(|x| x * 2), Pull::Value(84));
/// assert!(done.is_exhausted());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pull<T> {
    /// The producer computed another value
    Value(T),
    /// The producer has no more values and never will
    Exhausted,
}

impl<T> Pull<T> {
    /// Returns `true` if the pull produced a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert!(Pull::Value(1).is_value());
    /// assert!(!Pull::<i32>::Exhausted.is_value());
    /// ```
    #[inline]
    pub const fn is_value(&self) -> bool {
        matches!(self, Pull::Value(_))
    }

    /// Returns `true` if the pull reported exhaustion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert!(Pull::<i32>::Exhausted.is_exhausted());
    /// assert!(!Pull::Value(1).is_exhausted());
    /// ```
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Pull::Exhausted)
    }

    /// Converts from `Pull<T>` to `Option<T>`, consuming `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Value(7).value(), Some(7));
    /// assert_eq!(Pull::<i32>::Exhausted.value(), None);
    /// ```
    #[inline]
    pub fn value(self) -> Option<T> {
        match self {
            Pull::Value(v) => Some(v),
            Pull::Exhausted => None,
        }
    }

    /// Maps a `Pull<T>` to `Pull<U>` by applying a function to the produced value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Value(3).map(|v| v + 1), Pull::Value(4));
    /// assert_eq!(Pull::<i32>::Exhausted.map(|v| v + 1), Pull::Exhausted);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> Pull<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Pull::Value(v) => Pull::Value(f(v)),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Returns the produced value or a default.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Value(42).value_or(0), 42);
    /// assert_eq!(Pull::Exhausted.value_or(0), 0);
    /// ```
    #[inline]
    pub fn value_or(self, default: T) -> T {
        match self {
            Pull::Value(v) => v,
            Pull::Exhausted => default,
        }
    }

    /// Returns the produced value or computes it from a closure.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Value(42).value_or_else(|| 0), 42);
    /// assert_eq!(Pull::Exhausted.value_or_else(|| 0), 0);
    /// ```
    #[inline]
    pub fn value_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Pull::Value(v) => v,
            Pull::Exhausted => f(),
        }
    }

    /// Converts from `&Pull<T>` to `Pull<&T>`.
    #[inline]
    pub const fn as_ref(&self) -> Pull<&T> {
        match self {
            Pull::Value(v) => Pull::Value(v),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Converts from `&mut Pull<T>` to `Pull<&mut T>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// let mut x = Pull::Value(1);
    /// if let Pull::Value(v) = x.as_mut() {
    ///     *v = 10;
    /// }
    /// assert_eq!(x, Pull::Value(10));
    /// ```
    #[inline]
    pub fn as_mut(&mut self) -> Pull<&mut T> {
        match self {
            Pull::Value(v) => Pull::Value(v),
            Pull::Exhausted => Pull::Exhausted,
        }
    }

    /// Returns `true` if the pull produced a value equal to `other`.
    #[inline]
    pub fn contains<U>(&self, other: &U) -> bool
    where
        U: PartialEq<T>,
    {
        matches!(self, Pull::Value(v) if other == v)
    }

    /// Returns the produced value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics with `msg` if the pull reported exhaustion.
    ///
    /// ```should_panic
    /// use lazyseq::Pull;
    ///
    /// Pull::<i32>::Exhausted.expect_value("ran dry"); // panics with "ran dry"
    /// ```
    #[inline]
    pub fn expect_value(self, msg: &str) -> T {
        match self {
            Pull::Value(v) => v,
            Pull::Exhausted => panic!("{}", msg),
        }
    }

    /// Returns the produced value, consuming `self`.
    ///
    /// # Panics
    ///
    /// Panics if the pull reported exhaustion.
    ///
    /// ```rust
    /// use lazyseq::Pull;
    ///
    /// assert_eq!(Pull::Value(5).unwrap_value(), 5);
    /// ```
    #[inline]
    pub fn unwrap_value(self) -> T {
        match self {
            Pull::Value(v) => v,
            Pull::Exhausted => panic!("called `Pull::unwrap_value()` on an `Exhausted` value"),
        }
    }
}

impl<T> From<Option<T>> for Pull<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Pull::Value(v),
            None => Pull::Exhausted,
        }
    }
}

impl<T> From<Pull<T>> for Option<T> {
    fn from(pull: Pull<T>) -> Self {
        pull.value()
    }
}
