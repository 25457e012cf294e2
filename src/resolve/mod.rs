pub use chain::resolve;
pub use chain::resolve_all;

pub use maybe::Deferred;
pub use maybe::Maybe;

#[cfg(feature = "tokio")]
pub use channel::{deferred, Pending, Resolver};

mod chain;
mod maybe;
#[cfg(feature = "tokio")]
mod channel;
