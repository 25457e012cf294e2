use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use anyhow::{anyhow, Error, Result};
use tokio::sync::oneshot::{channel, Receiver, Sender};
use tracing::debug;
use super::maybe::Maybe;

pub struct Resolver<T> {
    tx: Sender<Result<T>>,
}

pub struct Pending<T> {
    rx: Receiver<Result<T>>,
}

pub fn deferred<T>() -> (Resolver<T>, Pending<T>) {
    let (tx, rx) = channel();
    (Resolver { tx }, Pending { rx })
}

impl<T> Resolver<T> {
    pub fn resolve(self, value: T) {
        self.send(Ok(value));
    }

    pub fn reject<E: Into<Error>>(self, error: E) {
        self.send(Err(error.into()));
    }

    pub fn is_abandoned(&self) -> bool {
        self.tx.is_closed()
    }

    fn send(self, result: Result<T>) {
        match self.tx.send(result) {
            Ok(()) => (),
            Err(_) => debug!("deferred abandoned before settling"),
        }
    }
}

impl<T: Send + 'static> Pending<T> {
    pub fn into_maybe(self) -> Maybe<T> {
        Maybe::deferred(self)
    }
}

impl<T> Future for Pending<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(r))  => Poll::Ready(r),
            Poll::Ready(Err(_)) => Poll::Ready(Err(anyhow!("resolver dropped"))),
            Poll::Pending       => Poll::Pending,
        }
    }
}
