//! Routes `tracing` output to the browser console.

use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleMethod {
    Error,
    Warn,
    Debug,
    Log,
}

impl ConsoleMethod {
    fn for_level(level: Level) -> Self {
        match level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::DEBUG | Level::TRACE => ConsoleMethod::Debug,
            _ => ConsoleMethod::Log,
        }
    }

    fn emit(self, line: &str) {
        let line = JsValue::from_str(line);
        match self {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Debug => web_sys::console::debug_1(&line),
            ConsoleMethod::Log => web_sys::console::log_1(&line),
        }
    }
}

/// Buffers one formatted event and hands it to `console.*` on drop.
pub(crate) struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn for_level(level: Level) -> Self {
        ConsoleWriter {
            method: ConsoleMethod::for_level(level),
            buffer: Vec::new(),
        }
    }

    /// Drain the buffered event as one line without its trailing newline.
    fn take_line(&mut self) -> Option<String> {
        if self.buffer.is_empty() {
            return None;
        }
        let bytes = std::mem::take(&mut self.buffer);
        Some(String::from_utf8_lossy(&bytes).trim_end().to_string())
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            self.method.emit(&line);
        }
    }
}

pub(crate) struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::for_level(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::for_level(*meta.level())
    }
}

/// Install the console subscriber. Timestamps are left to the devtools.
pub(crate) fn init_tracing(level: &str) {
    let filter = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("debug"));
    let installed = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(ConsoleMakeWriter)
                .without_time()
                .with_ansi(false)
                .with_target(true)
                .with_filter(filter),
        )
        .try_init();
    if installed.is_err() {
        web_sys::console::warn_1(&JsValue::from_str(
            "tracing subscriber already installed; keeping the existing one",
        ));
    }
}
