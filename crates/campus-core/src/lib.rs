//! Core types, store trait and managers for the Campus administration backend.
//!
//! This crate is deliberately free of HTTP and database dependencies. The
//! storage backend and the REST surface depend on it, never the other way
//! around.

// We intentionally use native `async fn` in traits (stabilised in Rust 1.75).
// Suppress the advisory lint about `Send` bounds on the returned futures.
#![allow(async_fn_in_trait)]

pub mod buzz;
pub mod credentials;
pub mod error;
pub mod faculty;
pub mod store;
pub mod validate;

pub use error::{Error, Result};
