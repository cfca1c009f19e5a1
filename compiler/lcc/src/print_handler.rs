//! Where `print` output goes.
//!
//! The binary writes values to stdout; tests capture them in a buffer.
//! The handler is shared behind an `Arc` so a test can keep a handle to the
//! buffer while the session owns another.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Destination for printed values. Enum dispatch, no vtable.
pub enum PrintHandlerImpl {
    /// Each line goes straight to stdout.
    Stdout,
    /// Lines accumulate in memory.
    Buffer(Mutex<String>),
}

impl PrintHandlerImpl {
    /// Print a line (with newline).
    ///
    /// A closed stdout is not an evaluation error, so write failures are dropped.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => {
                let _ = writeln!(std::io::stdout().lock(), "{msg}");
            }
            Self::Buffer(buf) => {
                let mut buf = buf.lock();
                buf.push_str(msg);
                buf.push('\n');
            }
        }
    }

    /// Captured output. Always empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(buf) => buf.lock().clone(),
        }
    }

    pub fn flush(&self) {
        if matches!(self, Self::Stdout) {
            let _ = std::io::stdout().lock().flush();
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandlerImpl>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Stdout)
}

/// Handler that records every printed line, for tests.
pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandlerImpl::Buffer(Mutex::new(String::new())))
}
