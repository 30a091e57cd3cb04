//! Built-in target data and the resolved run configuration.
pub mod targets;
pub mod types;

#[cfg(test)]
mod tests;

pub use types::FetchConfig;
