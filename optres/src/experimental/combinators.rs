use core::future::Future;

use futures::future::OptionFuture;

use crate::option::{None, Option, Some};
use crate::result::{Err, Ok, Result};

impl<T> Option<T> {
    /// Async counterpart of [`Option::map`].
    pub async fn map_async<U, F, Fut>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Some(x) => Some(f(x).await),
            None => None,
        }
    }

    /// Async counterpart of [`Option::and_then`].
    pub async fn and_then_async<U, F, Fut>(self, f: F) -> Option<U>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Option<U>>,
    {
        match self {
            Some(x) => f(x).await,
            None => None,
        }
    }

    /// Async counterpart of [`Option::or_else`].
    pub async fn or_else_async<F, Fut>(self, f: F) -> Option<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        match self {
            x @ Some(_) => x,
            None => f().await,
        }
    }
}

impl<Fut: Future> Option<Fut> {
    /// Awaits the contained future, if there is one.
    ///
    /// `Some(fut)` resolves to `Some(fut.await)`, `None` resolves to `None` immediately.
    pub async fn transpose_future(self) -> Option<Fut::Output> {
        OptionFuture::from(self.into_std()).await.into()
    }
}

impl<T, E> Result<T, E> {
    /// Async counterpart of [`Result::map`].
    pub async fn map_async<U, F, Fut>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = U>,
    {
        match self {
            Ok(t) => Ok(op(t).await),
            Err(e) => Err(e),
        }
    }

    /// Async counterpart of [`Result::map_err`].
    pub async fn map_err_async<G, O, Fut>(self, op: O) -> Result<T, G>
    where
        O: FnOnce(E) -> Fut,
        Fut: Future<Output = G>,
    {
        match self {
            Ok(t) => Ok(t),
            Err(e) => Err(op(e).await),
        }
    }

    /// Async counterpart of [`Result::and_then`].
    pub async fn and_then_async<U, F, Fut>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Fut,
        Fut: Future<Output = Result<U, E>>,
    {
        match self {
            Ok(t) => op(t).await,
            Err(e) => Err(e),
        }
    }

    /// Async counterpart of [`Result::or_else`].
    pub async fn or_else_async<G, O, Fut>(self, op: O) -> Result<T, G>
    where
        O: FnOnce(E) -> Fut,
        Fut: Future<Output = Result<T, G>>,
    {
        match self {
            Ok(t) => Ok(t),
            Err(e) => op(e).await,
        }
    }
}
