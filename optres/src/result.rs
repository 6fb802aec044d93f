//! Fallible results.
//!
//! A [`Result<T, E>`] is either [`Ok`], holding a success value, or [`Err`],
//! holding an error value. The combinators mirror the ones on
//! [`Option`](crate::Option), except that the failure branch carries a payload:
//! fallbacks on `Result` receive the error where the `Option` ones take no
//! argument.

use crate::option::{None, Option, Some};

pub use self::Result::{Err, Ok};

/// Success (`Ok`) or failure (`Err`) of an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Result<T, E> {
    /// Contains the success value
    Ok(T),
    /// Contains the error value
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Returns `true` if this is an `Ok` value.
    #[inline]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Ok(_))
    }

    /// Returns `true` if this is an `Err` value. Exactly one of `is_ok`/`is_err` holds.
    #[inline]
    pub const fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if this is `Ok` and the success value matches the predicate.
    pub fn is_ok_and(self, f: impl FnOnce(T) -> bool) -> bool {
        match self {
            Ok(x) => f(x),
            Err(_) => false,
        }
    }

    /// Returns `true` if this is `Err` and the error value matches the predicate.
    pub fn is_err_and(self, f: impl FnOnce(E) -> bool) -> bool {
        match self {
            Ok(_) => false,
            Err(e) => f(e),
        }
    }

    /// Converts into an `Option<T>`, discarding the error.
    ///
    /// ```rust
    /// # use optres::{Err, None, Ok, Result, Some};
    /// let x: Result<u32, &str> = Ok(2);
    /// assert_eq!(x.ok(), Some(2));
    ///
    /// let x: Result<u32, &str> = Err("Nothing here");
    /// assert_eq!(x.ok(), None);
    /// ```
    #[inline]
    pub fn ok(self) -> Option<T> {
        match self {
            Ok(x) => Some(x),
            Err(_) => None,
        }
    }

    /// Converts into an `Option<E>`, discarding the success value.
    #[inline]
    pub fn err(self) -> Option<E> {
        match self {
            Ok(_) => None,
            Err(e) => Some(e),
        }
    }

    /// Borrow both payload slots, producing a `Result<&T, &E>` and leaving `self` in place.
    #[inline]
    pub const fn as_ref(&self) -> Result<&T, &E> {
        match *self {
            Ok(ref x) => Ok(x),
            Err(ref e) => Err(e),
        }
    }

    /// Applies `f` to the success value, leaving an `Err` untouched.
    ///
    /// ```rust
    /// # use optres::{Err, Ok, Result};
    /// let parsed: Result<i32, &str> = Ok(5);
    /// assert_eq!(parsed.map(|i| i * 2), Ok(10));
    ///
    /// let failed: Result<i32, &str> = Err("not a number");
    /// assert_eq!(failed.map(|i| i * 2), Err("not a number"));
    /// ```
    #[inline]
    pub fn map<U, F: FnOnce(T) -> U>(self, op: F) -> Result<U, E> {
        match self {
            Ok(t) => Ok(op(t)),
            Err(e) => Err(e),
        }
    }

    /// Applies `f` to the success value, or returns the eagerly evaluated `default`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, default: U, f: F) -> U {
        match self {
            Ok(t) => f(t),
            Err(_) => default,
        }
    }

    /// Applies `f` to the success value, or `default` to the error value.
    ///
    /// ```rust
    /// # use optres::{Err, Ok, Result};
    /// let k = 21;
    ///
    /// let x: Result<&str, &str> = Ok("foo");
    /// assert_eq!(x.map_or_else(|_e| k * 2, |v| v.len()), 3);
    ///
    /// let x: Result<&str, &str> = Err("bar");
    /// assert_eq!(x.map_or_else(|e| e.len() + k, |v| v.len()), 24);
    /// ```
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Ok(t) => f(t),
            Err(e) => default(e),
        }
    }

    /// Applies `op` to the error value, leaving an `Ok` untouched.
    #[inline]
    pub fn map_err<F, O: FnOnce(E) -> F>(self, op: O) -> Result<T, F> {
        match self {
            Ok(t) => Ok(t),
            Err(e) => Err(op(e)),
        }
    }

    /// Calls `f` with a reference to the success value, if any, and returns `self` unchanged.
    pub fn inspect<F: FnOnce(&T)>(self, f: F) -> Self {
        if let Ok(ref t) = self {
            f(t);
        }
        self
    }

    /// Calls `f` with a reference to the error value, if any, and returns `self` unchanged.
    pub fn inspect_err<F: FnOnce(&E)>(self, f: F) -> Self {
        if let Err(ref e) = self {
            f(e);
        }
        self
    }

    /// Returns `res` if this is `Ok`, otherwise this `Err`.
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Ok(_) => res,
            Err(e) => Err(e),
        }
    }

    /// Calls `op` with the success value; an `Err` short circuits and `op` is not called.
    #[inline]
    pub fn and_then<U, F: FnOnce(T) -> Result<U, E>>(self, op: F) -> Result<U, E> {
        match self {
            Ok(t) => op(t),
            Err(e) => Err(e),
        }
    }

    /// Returns this `Ok`, otherwise `res`.
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Ok(v) => Ok(v),
            Err(_) => res,
        }
    }

    /// Returns this `Ok`, otherwise calls `op` with the error value.
    pub fn or_else<F, O: FnOnce(E) -> Result<T, F>>(self, op: O) -> Result<T, F> {
        match self {
            Ok(t) => Ok(t),
            Err(e) => op(e),
        }
    }

    /// Returns the success value, or the eagerly evaluated `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Ok(t) => t,
            Err(_) => default,
        }
    }

    /// Returns the success value, or computes one from the error value.
    #[inline]
    pub fn unwrap_or_else<F: FnOnce(E) -> T>(self, op: F) -> T {
        match self {
            Ok(t) => t,
            Err(e) => op(e),
        }
    }

    /// Returns the success value, or `T::default()` on `Err`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Ok(x) => x,
            Err(_) => Default::default(),
        }
    }

    /// Converts into the standard library's result.
    pub fn into_std(self) -> core::result::Result<T, E> {
        self.into()
    }
}

impl<T: Copy, E> Result<&T, E> {
    /// Copies the borrowed success value.
    pub fn copied(self) -> Result<T, E> {
        self.map(|&t| t)
    }
}

impl<T: Clone, E> Result<&T, E> {
    /// Clones the borrowed success value.
    pub fn cloned(self) -> Result<T, E> {
        self.map(T::clone)
    }
}

impl<T, E> Result<Option<T>, E> {
    /// Swaps a result of an optional into an optional result.
    ///
    /// `Ok(None)` becomes `None`, `Ok(Some(v))` becomes `Some(Ok(v))` and
    /// `Err(e)` becomes `Some(Err(e))`. Inverse of [`Option::transpose`].
    ///
    /// ```rust
    /// # use optres::{Err, None, Ok, Option, Result, Some};
    /// let x: Result<Option<i32>, &str> = Ok(Some(5));
    /// let y: Option<Result<i32, &str>> = Some(Ok(5));
    /// assert_eq!(x.transpose(), y);
    /// assert_eq!(y.transpose(), x);
    /// ```
    #[inline]
    pub fn transpose(self) -> Option<Result<T, E>> {
        match self {
            Ok(Some(x)) => Some(Ok(x)),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

impl<T, E> Result<Result<T, E>, E> {
    /// Removes one level of nesting.
    pub fn flatten(self) -> Result<T, E> {
        self.and_then(|inner| inner)
    }
}

impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            core::result::Result::Ok(t) => Ok(t),
            core::result::Result::Err(e) => Err(e),
        }
    }
}

impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        match value {
            Ok(t) => core::result::Result::Ok(t),
            Err(e) => core::result::Result::Err(e),
        }
    }
}
