//! Session Logger
//!
//! A `tracing` layer that formats each event into one line, keeps the most
//! recent lines in a circular buffer and hands every line to a sink (the
//! browser console in the app, a closure in tests).

use std::collections::VecDeque;
use std::fmt::{self, Write};
use std::sync::{Arc, Mutex};

use chrono::Local;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub const DEFAULT_CAPACITY: usize = 500;

/// Shared circular buffer of formatted log lines
#[derive(Clone, Debug)]
pub struct LogBuffer {
    inner: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self { inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))), capacity }
    }

    pub fn push(&self, line: String) {
        // a poisoned lock only means a panic mid-push; the lines are still usable
        let mut lines = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Oldest first
    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&self) {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    /// All lines joined with newlines
    pub fn dump(&self) -> String {
        self.lines().join("\n")
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

type Sink = Box<dyn Fn(&Level, &str) + Send + Sync>;

pub struct SessionLayer {
    buffer: LogBuffer,
    sink: Sink,
}

impl SessionLayer {
    pub fn new<F>(buffer: LogBuffer, sink: F) -> Self
    where
        F: Fn(&Level, &str) + Send + Sync + 'static,
    {
        Self { buffer, sink: Box::new(sink) }
    }

    pub fn buffer(&self) -> &LogBuffer {
        &self.buffer
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: String,
}

impl LineVisitor {
    fn field(&mut self, name: &str, value: fmt::Arguments<'_>) {
        let _ = write!(self.fields, " {}={}", name, value);
    }

    fn finish(self) -> String {
        self.message + &self.fields
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message.push_str(value);
        } else {
            self.field(field.name(), format_args!("{}", value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            let _ = write!(self.message, "{:?}", value);
        } else {
            self.field(field.name(), format_args!("{:?}", value));
        }
    }
}

impl<S: Subscriber> Layer<S> for SessionLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let meta = event.metadata();
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let line = format!(
            "{} [{} {}] {}",
            Local::now().format("%H:%M:%S%.3f"),
            meta.level(),
            meta.target(),
            visitor.finish()
        );
        (self.sink)(meta.level(), &line);
        self.buffer.push(line);
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub capacity: usize,
    pub max_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self { capacity: DEFAULT_CAPACITY, max_level: LevelFilter::DEBUG }
    }
}

/// Install the layer as the global subscriber with the default config
pub fn init<F>(sink: F) -> LogBuffer
where
    F: Fn(&Level, &str) + Send + Sync + 'static,
{
    init_with(Config::default(), sink)
}

/// Install with an explicit config. A second call keeps the first
/// subscriber and returns a buffer that stays empty.
pub fn init_with<F>(config: Config, sink: F) -> LogBuffer
where
    F: Fn(&Level, &str) + Send + Sync + 'static,
{
    let buffer = LogBuffer::new(config.capacity);
    let subscriber = tracing_subscriber::registry()
        .with(config.max_level)
        .with(SessionLayer::new(buffer.clone(), sink));
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        tracing::warn!("global subscriber already installed");
    }
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::{debug, info, warn};
    use tracing_subscriber::registry;

    fn capture(capacity: usize, max_level: LevelFilter, f: impl FnOnce()) -> (LogBuffer, Vec<String>) {
        let buffer = LogBuffer::new(capacity);
        let sunk = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&sunk);
        let layer = SessionLayer::new(buffer.clone(), move |level: &Level, line: &str| {
            sink_lines.lock().unwrap().push(format!("{}|{}", level, line));
        });
        tracing::subscriber::with_default(registry().with(max_level).with(layer), f);
        let sunk = sunk.lock().unwrap().clone();
        (buffer, sunk)
    }

    #[test]
    fn test_event_formats_message_and_fields() {
        let (buffer, sunk) = capture(10, LevelFilter::DEBUG, || {
            info!(key = "escala.waypoints", count = 3, "saved record");
        });
        let lines = buffer.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("[INFO session_logger::tests] saved record key=escala.waypoints count=3"));
        assert_eq!(sunk.len(), 1);
        assert!(sunk[0].starts_with("INFO|"));
    }

    #[test]
    fn test_buffer_keeps_most_recent_lines() {
        let (buffer, _) = capture(3, LevelFilter::DEBUG, || {
            for i in 0..5 {
                warn!(i, "tick");
            }
        });
        let lines = buffer.lines();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].ends_with("tick i=2"));
        assert!(lines[2].ends_with("tick i=4"));
        assert_eq!(buffer.capacity(), 3);
    }

    #[test]
    fn test_level_filter_drops_verbose_events() {
        let (buffer, sunk) = capture(10, LevelFilter::INFO, || {
            debug!("hidden");
            info!("shown");
        });
        assert_eq!(buffer.len(), 1);
        assert_eq!(sunk.len(), 1);
        assert!(buffer.dump().ends_with("shown"));
    }

    #[test]
    fn test_clear_empties_buffer() {
        let buffer = LogBuffer::new(2);
        buffer.push("a".into());
        assert!(!buffer.is_empty());
        buffer.clear();
        assert!(buffer.is_empty());
    }
}
