use std::time::Duration;
use anyhow::Result;
use tokio::time::sleep;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, registry};
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use maybe::{deferred, resolve_all, Maybe};

#[tokio::main]
async fn main() -> Result<()> {
    let mut filter = EnvFilter::from_default_env();
    filter = filter.add_directive(LevelFilter::WARN.into());
    let print = fmt::layer().compact();
    registry().with(filter).with(print).init();

    let plain = vec![Maybe::value("a"), Maybe::value("b")];
    let result = resolve_all(plain, |vals| Ok(Maybe::value(vals.join(""))))?;
    println!("plain    deferred={} -> {:?}", result.is_deferred(), result.await?);

    let (resolver, pending) = deferred();
    tokio::spawn(async move {
        sleep(Duration::from_millis(10)).await;
        resolver.resolve("b");
    });

    let mixed  = vec![Maybe::value("a"), pending.into_maybe(), Maybe::value("c")];
    let result = resolve_all(mixed, |vals| Ok(Maybe::value(vals.join(""))))?;
    println!("mixed    deferred={} -> {:?}", result.is_deferred(), result.await?);

    Ok(())
}
