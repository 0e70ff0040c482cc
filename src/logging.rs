//! Invocation-scoped logging.
//!
//! Logs go to a file through a `tracing-subscriber` fmt layer. The
//! subscriber is installed for the current thread only and removed when the
//! returned guard drops. A tag set (level, target, callsite name) goes quiet
//! once it has already been logged more than [`MAX_REPEATS`] times, so at most
//! `MAX_REPEATS + 1` of its events reach the file per run.

use crate::error::{PlotError, Result};
use std::collections::HashMap;
use std::fs::File;
use std::hash::Hash;
use std::path::Path;
use std::sync::Mutex;
use tracing::dispatcher::DefaultGuard;
use tracing::{Level, Metadata, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::{Context, Filter};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Earlier occurrences of one tag set tolerated before it goes quiet.
pub const MAX_REPEATS: usize = 10;

/// Level used when `--log-level` is not given.
pub const DEFAULT_LEVEL: &str = "debug";

/// Counts occurrences per key and admits the first `limit + 1` of each.
#[derive(Debug)]
pub struct TagLimiter<K> {
    limit: usize,
    seen: Mutex<HashMap<K, usize>>,
}

impl<K: Hash + Eq> TagLimiter<K> {
    /// Admit a key while it has been seen at most `limit` times before.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            seen: Mutex::new(HashMap::new()),
        }
    }

    /// Record one occurrence of `key`; true unless more than `limit` came before.
    pub fn admit(&self, key: K) -> bool {
        let mut seen = match self.seen.lock() {
            Ok(seen) => seen,
            Err(poisoned) => poisoned.into_inner(),
        };
        let count = seen.entry(key).or_insert(0);
        let previous = *count;
        *count += 1;
        previous <= self.limit
    }
}

type Tag = (Level, String, String);

/// Per-layer filter that drops events whose tag set has been seen more than
/// [`MAX_REPEATS`] times.
#[derive(Debug)]
pub struct RateLimit {
    limiter: TagLimiter<Tag>,
}

impl RateLimit {
    /// Filter admitting `limit + 1` events per tag set.
    pub fn new(limit: usize) -> Self {
        Self {
            limiter: TagLimiter::new(limit),
        }
    }
}

impl<S> Filter<S> for RateLimit {
    fn enabled(&self, meta: &Metadata<'_>, _cx: &Context<'_, S>) -> bool {
        if !meta.is_event() {
            return true;
        }
        self.limiter.admit((
            *meta.level(),
            meta.target().to_string(),
            meta.name().to_string(),
        ))
    }
}

/// Build a subscriber writing to `writer` at `level` (an `EnvFilter`
/// directive such as `info` or `csvplot=trace`).
pub fn subscriber<W>(writer: W, level: &str) -> Result<impl Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let env = EnvFilter::try_new(level)
        .map_err(|e| PlotError::invalid_parameter("log-level", e.to_string()))?;
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_filter(RateLimit::new(MAX_REPEATS))
        .with_filter(env);
    Ok(tracing_subscriber::registry().with(layer))
}

/// Start logging to `path` for the current thread.
///
/// The file is truncated. Logging stops when the guard is dropped.
pub fn init(path: &Path, level: &str) -> Result<DefaultGuard> {
    let file = File::create(path).map_err(|e| PlotError::file_write(path.to_path_buf(), e))?;
    let subscriber = subscriber(Mutex::new(file), level)?;
    Ok(tracing::subscriber::set_default(subscriber))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Buffer {
        type Writer = Buffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl Buffer {
        fn lines(&self) -> Vec<String> {
            let bytes = self.0.lock().unwrap().clone();
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .map(str::to_string)
                .collect()
        }
    }

    #[test]
    fn limiter_admits_until_seen_more_than_limit() {
        let limiter = TagLimiter::new(2);
        assert!(limiter.admit("a"));
        assert!(limiter.admit("a"));
        assert!(limiter.admit("a"));
        assert!(!limiter.admit("a"));
        assert!(limiter.admit("b"));
    }

    #[test]
    fn repeated_events_are_cut_off() {
        let buffer = Buffer::default();
        let subscriber = subscriber(buffer.clone(), "debug").unwrap();
        tracing::subscriber::with_default(subscriber, || {
            for i in 0..15 {
                tracing::warn!("zero count encountered {}", i);
            }
            tracing::info!("different callsite");
        });

        let lines = buffer.lines();
        let repeated = lines.iter().filter(|l| l.contains("zero count")).count();
        assert_eq!(repeated, MAX_REPEATS + 1);
        assert!(lines.iter().any(|l| l.contains("different callsite")));
    }

    #[test]
    fn level_filters_before_counting() {
        let buffer = Buffer::default();
        let subscriber = subscriber(buffer.clone(), "warn").unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!("hidden");
            tracing::warn!("shown");
        });

        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("shown"));
    }

    #[test]
    fn bad_level_is_rejected() {
        let err = subscriber(Buffer::default(), "csvplot=loud").err().unwrap();
        assert!(matches!(err, PlotError::InvalidParameter { name: "log-level", .. }));
    }

    #[test]
    fn init_writes_to_file_until_guard_drops() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        {
            let _guard = init(&path, "info").unwrap();
            tracing::info!("inside");
        }
        tracing::info!("outside");

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("inside"));
        assert!(!text.contains("outside"));
    }
}
