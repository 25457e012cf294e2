use anyhow::Result;
use tracing::trace;
use super::maybe::Maybe;

/// Invoke `callback` with `value`, now if it is a plain value or as a
/// continuation if it is deferred.
///
/// The result is not normalized: a plain value yields exactly what the
/// callback returned on this turn, including a synchronous `Err`. Only a
/// deferred input produces a new deferred, settling to the callback's
/// eventual result or to the input's rejection.
pub fn resolve<T, R, F>(value: Maybe<T>, callback: F) -> Result<Maybe<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    F: FnOnce(T) -> Result<Maybe<R>> + Send + 'static,
{
    match value {
        Maybe::Value(v)    => callback(v),
        Maybe::Deferred(d) => Ok(Maybe::deferred(async move {
            callback(d.await?)?.await
        })),
    }
}

/// Resolve every element in order and hand the results to `callback`.
///
/// Plain elements are consumed on the current turn. The first deferred
/// element suspends the walk; every later element is inspected only after
/// the one before it settled. The call stays synchronous iff no element is
/// deferred. The first failure ends the walk and the partial results are
/// dropped.
pub fn resolve_all<T, R, I, F>(values: I, callback: F) -> Result<Maybe<R>>
where
    T: Send + 'static,
    R: Send + 'static,
    I: IntoIterator<Item = Maybe<T>>,
    I::IntoIter: ExactSizeIterator + Send + 'static,
    F: FnOnce(Vec<T>) -> Result<Maybe<R>> + Send + 'static,
{
    let mut values   = values.into_iter();
    let total        = values.len();
    let mut resolved = Vec::with_capacity(total);

    while let Some(value) = values.next() {
        if let Maybe::Value(v) = value {
            resolved.push(v);
            continue;
        }

        trace!(index = resolved.len(), total, "sequence suspended");

        return resolve(value, move |first| {
            resolved.push(first);
            Ok(Maybe::deferred(async move {
                for value in values {
                    resolved.push(value.await?);
                }
                callback(resolved)?.await
            }))
        });
    }

    callback(resolved)
}
