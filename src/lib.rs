//! Resolve values that may or may not be deferred, synchronously when
//! possible and without wrapping plain results.

pub use resolve::{resolve, resolve_all, Deferred, Maybe};

#[cfg(feature = "tokio")]
pub use resolve::{deferred, Pending, Resolver};

pub mod resolve;
