//! Core library for the `urlfetch` CLI.
//!
//! Fetches a list of URLs either sequentially with blocking requests or
//! concurrently on a single-threaded async runtime, then reports per-URL and
//! total elapsed time so the two strategies can be compared.
pub mod app;
pub mod args;
pub mod config;
pub mod entry;
pub mod error;
pub mod http;
pub mod logger;
