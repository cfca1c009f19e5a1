//! Plain-text diagnostics for a terminal or any `Write` sink.
//!
//! ```text
//! error[E1002]: dependency cycle: `A` depends on itself
//!   --> line 3
//!   = note: `A` was reached again while its own value was being computed
//!   = help: remove one of the operations on the cycle
//! ```

use std::io::{self, Write};

use crate::{Diagnostic, Severity};

use super::DiagnosticEmitter;

/// Visual role of a piece of output. Each maps to one ANSI sequence.
#[derive(Copy, Clone)]
enum Style {
    Error,
    Warning,
    Help,
    Emphasis,
    Location,
}

impl Style {
    fn ansi(self) -> &'static str {
        match self {
            Style::Error => "\x1b[1;31m",
            Style::Warning => "\x1b[1;33m",
            Style::Help => "\x1b[1;32m",
            Style::Emphasis => "\x1b[1m",
            Style::Location => "\x1b[1;34m",
        }
    }

    fn for_severity(severity: Severity) -> Self {
        match severity {
            Severity::Error => Style::Error,
            Severity::Warning => Style::Warning,
        }
    }
}

const RESET: &str = "\x1b[0m";

/// `--color` setting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color only when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Whether to emit ANSI sequences. `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=<mode>` flag.
    pub fn from_flag(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Renders diagnostics as text, optionally colored.
///
/// Write failures are swallowed: a closed stderr must not turn a reported
/// problem into a second one.
pub struct TerminalEmitter<W: Write> {
    out: W,
    ansi: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(out: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            out,
            ansi: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the emitter and return its writer.
    pub fn into_inner(self) -> W {
        self.out
    }

    fn paint(&mut self, style: Style, text: &str) -> io::Result<()> {
        if self.ansi {
            write!(self.out, "{}{text}{RESET}", style.ansi())
        } else {
            self.out.write_all(text.as_bytes())
        }
    }

    /// `  = <label>: <text>` detail line under the header.
    fn detail(&mut self, style: Style, label: &str, text: &str) -> io::Result<()> {
        self.out.write_all(b"  = ")?;
        self.paint(style, label)?;
        writeln!(self.out, ": {text}")
    }

    fn render(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        let severity = diagnostic.severity.to_string();
        self.paint(Style::for_severity(diagnostic.severity), &severity)?;
        self.paint(Style::Emphasis, &format!("[{}]", diagnostic.code))?;
        writeln!(self.out, ": {}", diagnostic.message)?;

        if let Some(line) = diagnostic.line {
            self.out.write_all(b"  --> ")?;
            self.paint(Style::Location, &format!("line {line}"))?;
            writeln!(self.out)?;
        }
        for note in &diagnostic.notes {
            self.detail(Style::Emphasis, "note", note)?;
        }
        for suggestion in &diagnostic.suggestions {
            self.detail(Style::Help, "help", suggestion)?;
        }
        Ok(())
    }

    fn render_summary(&mut self, errors: usize, warnings: usize) -> io::Result<()> {
        let warning_text = counted(warnings, "warning", "emitted");
        match (errors, warnings) {
            (0, 0) => Ok(()),
            (0, _) => {
                self.paint(Style::Warning, "warning")?;
                writeln!(self.out, ": {warning_text}")
            }
            (_, 0) => {
                self.paint(Style::Error, "error")?;
                writeln!(self.out, ": {}", counted(errors, "command", "failed"))
            }
            _ => {
                self.paint(Style::Error, "error")?;
                writeln!(
                    self.out,
                    ": {}; {warning_text}",
                    counted(errors, "command", "failed")
                )
            }
        }
    }
}

/// `1 command failed`, `2 commands failed`.
fn counted(count: usize, noun: &str, verb: &str) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{plural} {verb}")
}

impl TerminalEmitter<io::Stderr> {
    /// Emitter writing to stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        let _ = self.render(diagnostic);
    }

    fn flush(&mut self) {
        let _ = self.out.flush();
    }

    fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        let _ = self.render_summary(error_count, warning_count);
    }
}
