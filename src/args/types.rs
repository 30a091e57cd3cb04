use clap::ValueEnum;

/// Selects which fetch path a run uses.
///
/// The value names mirror the two client styles being compared: a blocking
/// session per request, or one async client per spawned task.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum FetchType {
    /// Sequential blocking requests.
    Requests,
    /// Concurrent requests on a single-threaded async runtime.
    Aiohttp,
}
