use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlTiming {
    pub url: String,
    pub elapsed: Duration,
}

/// Per-URL elapsed times for one run, in first-insertion order.
///
/// Keys are unique: recording a URL again replaces its earlier duration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimingRecord {
    entries: Vec<UrlTiming>,
}

impl TimingRecord {
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, url: &str, elapsed: Duration) {
        match self.entries.iter_mut().find(|entry| entry.url == url) {
            Some(entry) => entry.elapsed = elapsed,
            None => self.entries.push(UrlTiming {
                url: url.to_owned(),
                elapsed,
            }),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &UrlTiming> {
        self.entries.iter()
    }

    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.url.as_str())
    }

    #[must_use]
    pub fn max_elapsed(&self) -> Option<Duration> {
        self.entries.iter().map(|entry| entry.elapsed).max()
    }

    #[must_use]
    pub fn sum_elapsed(&self) -> Duration {
        self.entries
            .iter()
            .fold(Duration::ZERO, |acc, entry| acc.saturating_add(entry.elapsed))
    }
}

/// Outcome of one fetch run: per-URL timings plus wall-clock total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRun {
    pub timings: TimingRecord,
    pub total: Duration,
}
