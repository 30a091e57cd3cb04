//! HTTP fetch paths and per-URL timing.
mod client;
mod concurrent;
mod sequential;
mod timing;
mod user_agent;


pub use client::{
    AsyncFetchPort, BlockingFetchPort, FetchOutcome, ReqwestAsyncPort, ReqwestBlockingPort,
};
pub use concurrent::ConcurrentFetcher;
pub use sequential::SequentialFetcher;
pub use timing::{FetchRun, TimingRecord, UrlTiming};
pub use user_agent::pick_user_agent;
