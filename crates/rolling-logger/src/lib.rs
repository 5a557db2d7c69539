//! Rolling Logger
//!
//! `tracing` subscriber for the browser: every event is formatted with a
//! local timestamp, mirrored to the devtools console and kept in a bounded
//! ring of recent lines so the page can show them.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::util::SubscriberInitExt;

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("a global subscriber is already installed: {0}")]
    AlreadyInstalled(String),
}

/// Bounded buffer of the most recent log lines, oldest first
#[derive(Clone, Debug)]
pub struct LogBuffer {
    lines: Arc<Mutex<VecDeque<String>>>,
    capacity: usize,
}

impl LogBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            lines: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&self, line: String) {
        let Ok(mut lines) = self.lines.lock() else {
            return;
        };
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    pub fn recent_lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .map(|lines| lines.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Layer that formats events into a [`LogBuffer`] and the console
pub struct RollingLayer {
    app_name: String,
    buffer: LogBuffer,
}

impl RollingLayer {
    pub fn new(app_name: impl Into<String>, buffer: LogBuffer) -> Self {
        Self {
            app_name: app_name.into(),
            buffer,
        }
    }
}

#[derive(Default)]
struct LineVisitor {
    message: String,
    fields: Vec<String>,
}

impl LineVisitor {
    fn finish(self) -> String {
        if self.fields.is_empty() {
            self.message
        } else {
            format!("{} {}", self.message, self.fields.join(" "))
        }
    }
}

impl Visit for LineVisitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        if field.name() == "message" {
            self.message = value.to_string();
        } else {
            self.fields.push(format!("{}={}", field.name(), value));
        }
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{:?}", value);
        } else {
            self.fields.push(format!("{}={:?}", field.name(), value));
        }
    }
}

impl<S: Subscriber> Layer<S> for RollingLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = LineVisitor::default();
        event.record(&mut visitor);

        let meta = event.metadata();
        let line = format!(
            "{} {:>5} [{}] {}: {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            meta.level(),
            self.app_name,
            meta.target(),
            visitor.finish()
        );

        emit(meta.level(), &line);
        self.buffer.push(line);
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: &Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match *level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::DEBUG | Level::TRACE => web_sys::console::debug_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: &Level, line: &str) {
    eprintln!("{line}");
}

/// Install the global subscriber. Returns the buffer that receives every
/// line at or above `level`.
pub fn init_logger(app_name: &str, level: Level) -> Result<LogBuffer, LoggerError> {
    let buffer = LogBuffer::new(DEFAULT_CAPACITY);

    tracing_subscriber::registry()
        .with(LevelFilter::from_level(level))
        .with(RollingLayer::new(app_name, buffer.clone()))
        .try_init()
        .map_err(|e| LoggerError::AlreadyInstalled(e.to_string()))?;

    tracing::info!(app = app_name, %level, "Logger initialized");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::registry::Registry;

    #[test]
    fn test_buffer_drops_oldest() {
        let buffer = LogBuffer::new(2);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        buffer.push("c".to_string());
        assert_eq!(buffer.recent_lines(), vec!["b", "c"]);
    }

    #[test]
    fn test_zero_capacity_keeps_last_line() {
        let buffer = LogBuffer::new(0);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.recent_lines(), vec!["b"]);
    }

    #[test]
    fn test_layer_formats_events() {
        let buffer = LogBuffer::new(10);
        let subscriber = Registry::default()
            .with(LevelFilter::INFO)
            .with(RollingLayer::new("Pedidos", buffer.clone()));

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(count = 3, "Orders loaded");
            tracing::debug!("filtered out");
            tracing::error!(step = "list_orders", "Gateway call failed");
        });

        let lines = buffer.recent_lines();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains(" INFO [Pedidos] "));
        assert!(lines[0].ends_with("Orders loaded count=3"));
        assert!(lines[1].contains("ERROR [Pedidos] "));
        assert!(lines[1].ends_with("Gateway call failed step=list_orders"));
    }
}
