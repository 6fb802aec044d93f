//! Optional values.
//!
//! An [`Option<T>`] is either [`Some`], holding exactly one value of type `T`,
//! or [`None`], holding nothing. Narrowing to the payload is done by matching
//! on the variants:
//!
//! ```rust
//! use optres::{None, Option, Some};
//!
//! fn divide(numerator: i32, denominator: i32) -> Option<i32> {
//!     if denominator == 0 {
//!         None
//!     } else {
//!         Some(numerator / denominator)
//!     }
//! }
//!
//! match divide(6, 3) {
//!     Some(x) => assert_eq!(x, 2),
//!     None => unreachable!(),
//! }
//!
//! assert_eq!(divide(6, 3).map(|x| x + 1), Some(3));
//! assert_eq!(divide(6, 0).map(|x| x + 1), None);
//! ```
//!
//! Every combinator takes `self` by value (or borrows it, for [`Option::as_ref`] and
//! [`Option::iter`]) and builds a new value; nothing mutates a constructed `Option`.

use core::ptr::NonNull;

use crate::result::{Err, Ok, Result};

pub use self::Option::{None, Some};

/// Presence (`Some`) or absence (`None`) of a value.
///
/// `None` is declared first so that the derived ordering puts `None` below every `Some`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Option<T> {
    /// No value
    None,
    /// Some value `T`
    Some(T),
}

impl<T> Option<T> {
    /// Returns `true` if this is a `Some` value.
    #[inline]
    pub const fn is_some(&self) -> bool {
        matches!(self, Some(_))
    }

    /// Returns `true` if this is the `None` value. Exactly one of `is_some`/`is_none` holds.
    #[inline]
    pub const fn is_none(&self) -> bool {
        !self.is_some()
    }

    /// Returns `true` if this is `Some` and the value inside matches the predicate.
    pub fn is_some_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Some(x) => f(x),
            None => false,
        }
    }

    /// Returns `true` if this is `None`, or if the value inside matches the predicate.
    pub fn is_none_or(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Some(x) => f(x),
            None => true,
        }
    }

    /// Borrow the payload, producing an `Option<&T>` and leaving `self` in place.
    #[inline]
    pub const fn as_ref(&self) -> Option<&T> {
        match *self {
            Some(ref x) => Some(x),
            None => None,
        }
    }

    /// Returns the contained value, or `default` if this is `None`.
    ///
    /// `default` is evaluated by the caller before the call; use
    /// [`Option::unwrap_or_else`] when computing it is expensive.
    ///
    /// ```rust
    /// # use optres::{None, Option, Some};
    /// assert_eq!(Some("car").unwrap_or("bike"), "car");
    /// assert_eq!(None.unwrap_or("bike"), "bike");
    /// ```
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Some(x) => x,
            None => default,
        }
    }

    /// Returns the contained value, or computes one from `f`. `f` is only called on `None`.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Some(x) => x,
            None => f(),
        }
    }

    /// Returns the contained value, or `T::default()` on `None`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Some(x) => x,
            None => T::default(),
        }
    }

    /// Maps an `Option<T>` to an `Option<U>` by applying `f` to the contained value.
    ///
    /// ```rust
    /// # use optres::{None, Option, Some};
    /// let maybe_text: Option<&str> = Some("Hello, World!");
    /// assert_eq!(maybe_text.map(|s| s.len()), Some(13));
    ///
    /// let nothing: Option<&str> = None;
    /// assert_eq!(nothing.map(|s| s.len()), None);
    /// ```
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Option<U> {
        match self {
            Some(x) => Some(f(x)),
            None => None,
        }
    }

    /// Calls `f` with a reference to the contained value, if any, and returns `self` unchanged.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Some(ref x) = self {
            f(x);
        }
        self
    }

    /// Applies `f` to the contained value, or returns the eagerly evaluated `default`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Some(x) => f(x),
            None => default,
        }
    }

    /// Applies `f` to the contained value, or computes a fallback from `default`.
    /// Exactly one of the two closures is called.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce() -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Some(x) => f(x),
            None => default(),
        }
    }

    /// Transforms `Some(v)` into `Ok(v)` and `None` into `Err(err)`.
    ///
    /// ```rust
    /// # use optres::{Err, None, Ok, Option, Some};
    /// assert_eq!(Some("foo").ok_or(0), Ok("foo"));
    /// assert_eq!(Option::<&str>::None.ok_or(0), Err(0));
    /// ```
    #[inline]
    pub fn ok_or<E>(self, err: E) -> Result<T, E> {
        match self {
            Some(v) => Ok(v),
            None => Err(err),
        }
    }

    /// Transforms `Some(v)` into `Ok(v)` and `None` into `Err(err())`; `err` only runs on `None`.
    #[inline]
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, err: F) -> Result<T, E> {
        match self {
            Some(v) => Ok(v),
            None => Err(err()),
        }
    }

    /// Returns `None` if this is `None`, otherwise returns `optb` as is.
    pub fn and<U>(self, optb: Option<U>) -> Option<U> {
        match self {
            Some(_) => optb,
            None => None,
        }
    }

    /// Monadic bind: returns `None` if this is `None`, otherwise calls `f` with the
    /// contained value and returns its result.
    ///
    /// ```rust
    /// # use optres::{None, Option, Some};
    /// fn checked_sq(x: u32) -> Option<u32> {
    ///     match x.checked_mul(x) {
    ///         core::option::Option::Some(sq) => Some(sq),
    ///         core::option::Option::None => None,
    ///     }
    /// }
    ///
    /// assert_eq!(Some(2).and_then(checked_sq), Some(4));
    /// assert_eq!(Some(1_000_000).and_then(checked_sq), None);
    /// assert_eq!(None.and_then(checked_sq), None);
    /// ```
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Option<U>>(self, f: F) -> Option<U> {
        match self {
            Some(x) => f(x),
            None => None,
        }
    }

    /// Keeps `Some(v)` only if `predicate(&v)` holds.
    pub fn filter<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        if let Some(x) = self {
            if predicate(&x) {
                return Some(x);
            }
        }
        None
    }

    /// Returns `self` if it holds a value, otherwise `optb`.
    pub fn or(self, optb: Option<T>) -> Option<T> {
        match self {
            x @ Some(_) => x,
            None => optb,
        }
    }

    /// Returns `self` if it holds a value, otherwise calls `f`.
    pub fn or_else<F: FnOnce() -> Option<T>>(self, f: F) -> Option<T> {
        match self {
            x @ Some(_) => x,
            None => f(),
        }
    }

    /// Returns whichever of `self`, `optb` is `Some` when exactly one of them is,
    /// otherwise `None`.
    ///
    /// ```rust
    /// # use optres::{None, Option, Some};
    /// assert_eq!(Some(2).xor(None), Some(2));
    /// assert_eq!(None.xor(Some(2)), Some(2));
    /// assert_eq!(Some(2).xor(Some(2)), None);
    /// assert_eq!(Option::<u32>::None.xor(None), None);
    /// ```
    pub fn xor(self, optb: Option<T>) -> Option<T> {
        match (self, optb) {
            (a @ Some(_), None) | (None, a @ Some(_)) => a,
            _ => None,
        }
    }

    /// Pairs up two values if both are present.
    pub fn zip<U>(self, other: Option<U>) -> Option<(T, U)> {
        match (self, other) {
            (Some(a), Some(b)) => Some((a, b)),
            _ => None,
        }
    }

    /// Converts into the standard library's optional.
    pub fn into_std(self) -> core::option::Option<T> {
        self.into()
    }
}

impl<T, U> Option<(T, U)> {
    /// Splits an optional pair into a pair of optionals.
    pub fn unzip(self) -> (Option<T>, Option<U>) {
        match self {
            Some((a, b)) => (Some(a), Some(b)),
            None => (None, None),
        }
    }
}

impl<T: Copy> Option<&T> {
    /// Copies the borrowed value.
    pub fn copied(self) -> Option<T> {
        self.map(|&t| t)
    }
}

impl<T: Clone> Option<&T> {
    /// Clones the borrowed value.
    pub fn cloned(self) -> Option<T> {
        self.map(T::clone)
    }
}

impl<T, E> Option<Result<T, E>> {
    /// Swaps an optional result into a result of an optional.
    ///
    /// `None` becomes `Ok(None)`, `Some(Ok(v))` becomes `Ok(Some(v))` and
    /// `Some(Err(e))` becomes `Err(e)`. Inverse of [`Result::transpose`].
    #[inline]
    pub fn transpose(self) -> Result<Option<T>, E> {
        match self {
            Some(Ok(x)) => Ok(Some(x)),
            Some(Err(e)) => Err(e),
            None => Ok(None),
        }
    }
}

impl<T> Option<Option<T>> {
    /// Removes exactly one level of nesting.
    ///
    /// ```rust
    /// # use optres::{None, Option, Some};
    /// let x: Option<Option<Option<u32>>> = Some(Some(Some(6)));
    /// assert_eq!(x.flatten(), Some(Some(6)));
    /// assert_eq!(x.flatten().flatten(), Some(6));
    /// ```
    #[inline]
    pub fn flatten(self) -> Option<T> {
        match self {
            Some(inner) => inner,
            None => None,
        }
    }
}

impl<T> Default for Option<T> {
    /// Returns `None`.
    #[inline]
    fn default() -> Option<T> {
        None
    }
}

impl<T> From<core::option::Option<T>> for Option<T> {
    fn from(value: core::option::Option<T>) -> Self {
        match value {
            core::option::Option::Some(v) => Some(v),
            core::option::Option::None => None,
        }
    }
}

impl<T> From<Option<T>> for core::option::Option<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => core::option::Option::Some(v),
            None => core::option::Option::None,
        }
    }
}

/// Adapter from the language level optional: std `None` becomes `None`,
/// std `Some(v)` becomes `Some(v)`.
///
/// ```rust
/// # use optres::{from_undefinable, None, Option, Some};
/// let xs = [1, 2, 3];
/// assert_eq!(from_undefinable(xs.first()), Some(&1));
/// assert_eq!(from_undefinable::<u8>(core::option::Option::None), None);
/// ```
pub fn from_undefinable<T>(value: core::option::Option<T>) -> Option<T> {
    Option::from(value)
}

/// Adapter from the null pointer convention: a null pointer becomes `None`,
/// anything else becomes `Some` of the same address as a [`NonNull`].
///
/// The pointer is never dereferenced.
pub fn from_nullable<T: ?Sized>(ptr: *mut T) -> Option<NonNull<T>> {
    NonNull::new(ptr).into()
}
