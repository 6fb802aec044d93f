use futures::{future::BoxFuture, FutureExt};

use crate::frame::{MappableFrame, PartiallyApplied};
use crate::option::{None, Option, Some};
use crate::result::{Err, Ok, Result};

/// A [`MappableFrame`] whose elements can be mapped by a fallible async function.
pub trait AsyncMappableFrame: MappableFrame {
    fn map_frame_async<'a, A, B, E>(
        input: Self::Frame<A>,
        f: impl Fn(A) -> BoxFuture<'a, Result<B, E>> + Send + Sync + 'a,
    ) -> BoxFuture<'a, Result<Self::Frame<B>, E>>
    where
        E: Send + 'a,
        A: Send + 'a,
        B: Send + 'a;
}

impl AsyncMappableFrame for Option<PartiallyApplied> {
    fn map_frame_async<'a, A, B, E>(
        input: Self::Frame<A>,
        f: impl Fn(A) -> BoxFuture<'a, Result<B, E>> + Send + Sync + 'a,
    ) -> BoxFuture<'a, Result<Self::Frame<B>, E>>
    where
        E: Send + 'a,
        A: Send + 'a,
        B: Send + 'a,
    {
        async move {
            match input {
                Some(a) => f(a).await.map(Some),
                None => Ok(None),
            }
        }
        .boxed()
    }
}

// the frame's own error slot has to outlive any 'a, hence 'static
impl<E0: Send + 'static> AsyncMappableFrame for Result<PartiallyApplied, E0> {
    fn map_frame_async<'a, A, B, E>(
        input: Self::Frame<A>,
        f: impl Fn(A) -> BoxFuture<'a, Result<B, E>> + Send + Sync + 'a,
    ) -> BoxFuture<'a, Result<Self::Frame<B>, E>>
    where
        E: Send + 'a,
        A: Send + 'a,
        B: Send + 'a,
    {
        async move {
            match input {
                Ok(a) => f(a).await.map(Ok),
                Err(e) => Ok(Err(e)),
            }
        }
        .boxed()
    }
}
