use std::fmt;
use std::future::{ready, Future, IntoFuture};
use std::pin::Pin;
use anyhow::{Error, Result};
use super::chain::resolve;

pub type Deferred<T> = Pin<Box<dyn Future<Output = Result<T>> + Send + 'static>>;

/// A value that is either available now or settles on a later turn.
///
/// Callers branch on the variant instead of probing for a continuation
/// method: `Value` is resolved on the current turn, `Deferred` only once the
/// returned future is driven to completion.
pub enum Maybe<T> {
    Value(T),
    Deferred(Deferred<T>),
}

impl<T: Send + 'static> Maybe<T> {
    pub fn value(value: T) -> Self {
        Self::Value(value)
    }

    pub fn deferred<F>(future: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        Self::Deferred(Box::pin(future))
    }

    pub fn rejected<E: Into<Error>>(error: E) -> Self {
        let error = error.into();
        Self::Deferred(Box::pin(ready(Err(error))))
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }

    pub fn then<R, F>(self, callback: F) -> Result<Maybe<R>>
    where
        R: Send + 'static,
        F: FnOnce(T) -> Result<Maybe<R>> + Send + 'static,
    {
        resolve(self, callback)
    }

    /// Like `then` for callbacks that cannot fail and return a plain value.
    pub fn map<R, F>(self, callback: F) -> Maybe<R>
    where
        R: Send + 'static,
        F: FnOnce(T) -> R + Send + 'static,
    {
        match self {
            Self::Value(v)    => Maybe::Value(callback(v)),
            Self::Deferred(d) => Maybe::deferred(async move {
                Ok(callback(d.await?))
            }),
        }
    }
}

impl<T: Send + 'static> From<T> for Maybe<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T: Send + 'static> IntoFuture for Maybe<T> {
    type Output     = Result<T>;
    type IntoFuture = Deferred<T>;

    fn into_future(self) -> Self::IntoFuture {
        match self {
            Self::Value(v)    => Box::pin(ready(Ok(v))),
            Self::Deferred(d) => d,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v)    => f.debug_tuple("Value").field(v).finish(),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}
