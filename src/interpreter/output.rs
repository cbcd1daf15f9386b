//! Output sink for the `print` statement.
//!
//! The interpreter writes program output through a [`PrintSink`] rather
//! than straight to standard output, so tests can capture what a program
//! printed without spawning a process. The binary uses [`StdoutSink`];
//! tests use [`CollectSink`].

use std::cell::RefCell;
use std::rc::Rc;

/// Destination for `print` output.
pub trait PrintSink {
    /// Writes one printed value followed by a newline.
    fn write_line(&mut self, line: &str);
}

/// A `PrintSink` that writes to standard output.
#[derive(Debug, Default)]
pub struct StdoutSink;

impl PrintSink for StdoutSink {
    fn write_line(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// A `PrintSink` that collects output into a shared buffer.
///
/// Clones share the buffer, so a test can keep one handle while the
/// interpreter owns another.
#[derive(Debug, Clone, Default)]
pub struct CollectSink {
    buffer: Rc<RefCell<String>>,
}

impl CollectSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        CollectSink::default()
    }

    /// Returns everything written so far.
    pub fn output(&self) -> String {
        self.buffer.borrow().clone()
    }
}

impl PrintSink for CollectSink {
    fn write_line(&mut self, line: &str) {
        let mut buffer = self.buffer.borrow_mut();
        buffer.push_str(line);
        buffer.push('\n');
    }
}
