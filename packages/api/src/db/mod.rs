//! # Database module: PostgreSQL connection pool management
//!
//! Entirely gated behind `#[cfg(feature = "server")]` so that client (WASM)
//! builds never pull in SQLx or Tokio networking code.
//!
//! The pool is a lazy, process-wide singleton backed by a
//! [`tokio::sync::OnceCell`]. The first call to [`get_pool`] reads
//! [`DbSettings`] from the environment (via `dotenvy`), connects, and caches
//! the pool for every later caller. A failed first attempt is not cached, so
//! the next request tries again.
//!
//! - [`get_pool`]: returns `&'static PgPool`, initialising it on first use.
//! - [`migrate`]: applies `packages/api/migrations`.

#[cfg(feature = "server")]
mod pool;

#[cfg(feature = "server")]
pub use pool::{get_pool, migrate, DbSettings};
