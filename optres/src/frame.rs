use crate::option::Option;
use crate::result::{Err, Ok, Result};

/// A single 'frame' holding zero or more values that can be mapped over via `map_frame`.
///
/// # Motivation
///
/// `Option` and `Result` both expose `map`, but as inherent methods they can't be
/// abstracted over. This trait lets generic code (law checks, adapters, the async
/// combinators) treat either container as a functor.
///
/// # Implementing this trait
///
/// Rust does not allow implementing a trait for a partially applied type: we can
/// implement a trait for `Option<usize>` but not for just `Option`. The convention is
/// to implement it for the container applied to the uninhabited [`PartiallyApplied`]
/// marker, eg `Option<PartiallyApplied>` with `Frame<X> = Option<X>`.
///
/// # Use
///
/// ```rust
/// use optres::{MappableFrame, Ok, Option, PartiallyApplied, Result, Some};
///
/// fn double<F: MappableFrame>(frame: F::Frame<i32>) -> F::Frame<i32> {
///     F::map_frame(frame, |n| n * 2)
/// }
///
/// assert_eq!(double::<Option<PartiallyApplied>>(Some(21)), Some(42));
/// assert_eq!(double::<Result<PartiallyApplied, &str>>(Ok(4)), Ok(8));
/// ```
pub trait MappableFrame {
    /// the frame type that is mapped over by `map_frame`
    type Frame<X>;

    /// Apply some function `f` to each element inside a frame
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B>;
}

/// A [`MappableFrame`] that can also be mapped with a fallible function, stopping at
/// the first error. For containers holding at most one element this is `map`
/// followed by `transpose`.
pub trait TryMappableFrame: MappableFrame {
    /// Apply some fallible function `f` to each element inside a frame, returning the first error
    fn try_map_frame<A, B, E>(
        input: Self::Frame<A>,
        f: impl FnMut(A) -> Result<B, E>,
    ) -> Result<Self::Frame<B>, E>;
}

/// "An uninhabited type used to define [`MappableFrame`] instances for partially-applied types."
///
/// For example: the MappableFrame instance for `Option<A>` cannot be written over the
/// partially-applied type `Option`, so instead we write it over `Option<PartiallyApplied>`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PartiallyApplied {}

impl MappableFrame for Option<PartiallyApplied> {
    type Frame<X> = Option<X>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        input.map(f)
    }
}

impl TryMappableFrame for Option<PartiallyApplied> {
    #[inline(always)]
    fn try_map_frame<A, B, E>(
        input: Self::Frame<A>,
        f: impl FnMut(A) -> Result<B, E>,
    ) -> Result<Self::Frame<B>, E> {
        input.map(f).transpose()
    }
}

// the error slot is fixed, only the success slot is mapped
impl<E> MappableFrame for Result<PartiallyApplied, E> {
    type Frame<X> = Result<X, E>;

    #[inline(always)]
    fn map_frame<A, B>(input: Self::Frame<A>, f: impl FnMut(A) -> B) -> Self::Frame<B> {
        input.map(f)
    }
}

impl<E0> TryMappableFrame for Result<PartiallyApplied, E0> {
    #[inline(always)]
    fn try_map_frame<A, B, E>(
        input: Self::Frame<A>,
        mut f: impl FnMut(A) -> Result<B, E>,
    ) -> Result<Self::Frame<B>, E> {
        match input {
            Ok(a) => f(a).map(Ok),
            Err(e) => Ok(Err(e)),
        }
    }
}
