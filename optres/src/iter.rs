//! Iteration over the zero-or-one payload of an [`Option`] or the success
//! payload of a [`Result`], and short circuiting collection into either.

use core::iter::FusedIterator;
use core::option::Option as StdOption;

use crate::option::{None, Option, Some};
use crate::result::{Err, Ok, Result};

/// Borrowing iterator over at most one element.
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: StdOption<&'a T>,
}

// no `T: Clone` bound, only the reference is copied
impl<T> Clone for Iter<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        Iter { inner: self.inner }
    }
}

/// Owning iterator over at most one element.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: StdOption<T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> StdOption<&'a T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, StdOption::Some(n))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> StdOption<&'a T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> StdOption<T> {
        self.inner.take()
    }

    #[inline]
    fn size_hint(&self) -> (usize, StdOption<usize>) {
        let n = usize::from(self.inner.is_some());
        (n, StdOption::Some(n))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> StdOption<T> {
        self.inner.take()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}

impl<T> Option<T> {
    /// Iterates over the contained value, if any.
    ///
    /// ```rust
    /// # use optres::{None, Option, Some};
    /// let x = Some(4);
    /// assert_eq!(x.iter().next(), core::option::Option::Some(&4));
    ///
    /// let x: Option<u32> = None;
    /// assert_eq!(x.iter().count(), 0);
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().into(),
        }
    }
}

impl<T, E> Result<T, E> {
    /// Iterates over the success value, if any.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.as_ref().ok().into(),
        }
    }
}

impl<T> IntoIterator for Option<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self.into() }
    }
}

impl<'a, T> IntoIterator for &'a Option<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter {
            inner: self.ok().into(),
        }
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Collects every `Some` payload into `V`, or returns `None` at the first `None`.
/// No elements are pulled from the source after that first `None`.
///
/// ```rust
/// # use optres::{None, Option, Some};
/// let items = vec![Some(1), Some(2), Some(3)];
/// let collected: Option<Vec<i32>> = items.into_iter().collect();
/// assert_eq!(collected, Some(vec![1, 2, 3]));
///
/// let items = vec![Some(1), None, Some(3)];
/// let collected: Option<Vec<i32>> = items.into_iter().collect();
/// assert_eq!(collected, None);
/// ```
impl<A, V: FromIterator<A>> FromIterator<Option<A>> for Option<V> {
    fn from_iter<I: IntoIterator<Item = Option<A>>>(iter: I) -> Option<V> {
        let mut hit_none = false;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Some(a) => StdOption::Some(a),
                None => {
                    hit_none = true;
                    StdOption::None
                }
            })
            .collect();

        if hit_none {
            None
        } else {
            Some(collected)
        }
    }
}

/// Collects every `Ok` payload into `V`, or returns the first `Err`.
/// No elements are pulled from the source after that first `Err`.
impl<A, E, V: FromIterator<A>> FromIterator<Result<A, E>> for Result<V, E> {
    fn from_iter<I: IntoIterator<Item = Result<A, E>>>(iter: I) -> Result<V, E> {
        let mut error = StdOption::None;
        let collected: V = iter
            .into_iter()
            .map_while(|item| match item {
                Ok(a) => StdOption::Some(a),
                Err(e) => {
                    error = StdOption::Some(e);
                    StdOption::None
                }
            })
            .collect();

        match error {
            StdOption::Some(e) => Err(e),
            StdOption::None => Ok(collected),
        }
    }
}
