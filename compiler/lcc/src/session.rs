//! Command session: feeds input lines through the parser into the engine.
//!
//! A session owns one `Engine` for its whole lifetime. Each line is parsed,
//! then either appended as a record (define), answered as a query (print),
//! or ends the run (quit). Problems are rendered as diagnostics and the
//! session moves on to the next line, except for a dependency cycle under
//! `CyclePolicy::Abort`.

use std::io::BufRead;
use std::process::ExitCode;

use lc_diagnostic::emitter::DiagnosticEmitter;
use lc_diagnostic::Diagnostic;
use lc_eval::{Engine, EvalError};
use lc_ir::{Operation, TokenClass};

use crate::command::{parse_command, Command};
use crate::print_handler::SharedPrintHandler;
use crate::problem::{
    command_error_to_diagnostic, dead_definition_warning, eval_error_to_diagnostic, read_error,
};

/// What to do when a `print` hits a dependency cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CyclePolicy {
    /// Report the cycle and continue with the next command.
    #[default]
    Report,
    /// Report the cycle and stop the run with a failing exit status.
    Abort,
}

/// What the session does after one line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
    Abort,
}

/// How a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Input was exhausted.
    Finished,
    /// A `quit` command was read.
    Quit,
    /// A dependency cycle stopped the run under `CyclePolicy::Abort`.
    Aborted,
    /// The input could not be read.
    ReadFailed,
}

impl Outcome {
    pub fn is_success(self) -> bool {
        matches!(self, Outcome::Finished | Outcome::Quit)
    }

    pub fn exit_code(self) -> ExitCode {
        if self.is_success() {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// A running command session.
pub struct Session<E: DiagnosticEmitter> {
    engine: Engine,
    policy: CyclePolicy,
    output: SharedPrintHandler,
    emitter: E,
    input_name: Option<String>,
    error_count: usize,
    warning_count: usize,
}

impl<E: DiagnosticEmitter> Session<E> {
    pub fn new(emitter: E, output: SharedPrintHandler, policy: CyclePolicy) -> Self {
        Session {
            engine: Engine::new(),
            policy,
            output,
            emitter,
            input_name: None,
            error_count: 0,
            warning_count: 0,
        }
    }

    /// Name the input in read-failure diagnostics. Unnamed input is stdin.
    #[must_use]
    pub fn with_input_name(mut self, name: impl Into<String>) -> Self {
        self.input_name = Some(name.into());
        self
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Process every line of `reader` until it is exhausted or the run stops.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(input = self.input_name.as_deref().unwrap_or("<stdin>"))
    )]
    pub fn run<R: BufRead>(&mut self, reader: R) -> Outcome {
        let outcome = self.run_lines(reader);
        tracing::debug!(?outcome, errors = self.error_count, "session finished");
        self.output.flush();
        self.emitter.flush();
        outcome
    }

    /// Invalid UTF-8 is replaced with U+FFFD, so the parser rejects the line
    /// and the run continues. Only a failing reader ends the run early.
    fn run_lines<R: BufRead>(&mut self, mut reader: R) -> Outcome {
        let mut buf = Vec::new();
        let mut line_no = 0;
        loop {
            buf.clear();
            match reader.read_until(b'\n', &mut buf) {
                Ok(0) => return Outcome::Finished,
                Ok(_) => {}
                Err(err) => {
                    let diag = read_error(self.input_name.as_deref(), &err);
                    self.report(diag);
                    return Outcome::ReadFailed;
                }
            }
            line_no += 1;
            let line = String::from_utf8_lossy(&buf);
            match self.execute_line(line_no, &line) {
                Flow::Continue => {}
                Flow::Quit => return Outcome::Quit,
                Flow::Abort => return Outcome::Aborted,
            }
        }
    }

    /// Parse and execute one line. `line_no` is 1-based.
    pub fn execute_line(&mut self, line_no: usize, line: &str) -> Flow {
        match parse_command(line) {
            Ok(None) => Flow::Continue,
            Ok(Some(command)) => self.execute(line_no, command),
            Err(err) => {
                self.report(command_error_to_diagnostic(&err).with_line(line_no));
                Flow::Continue
            }
        }
    }

    fn execute(&mut self, line_no: usize, command: Command<'_>) -> Flow {
        match command {
            Command::Quit => {
                tracing::debug!(line = line_no, "quit");
                Flow::Quit
            }
            Command::Define {
                target,
                operand,
                source,
            } => {
                if let TokenClass::Literal(value) = target {
                    self.report(dead_definition_warning(&value.to_string()).with_line(line_no));
                }
                let target = self.engine.resolve(target);
                let source = self.engine.resolve(source);
                self.engine.define(Operation::new(target, operand, source));
                Flow::Continue
            }
            Command::Print(register) => match self.engine.query(register) {
                Ok(value) => {
                    self.output.println(&value.to_string());
                    Flow::Continue
                }
                Err(err) => {
                    let abort = matches!(err, EvalError::CycleDetected(_))
                        && self.policy == CyclePolicy::Abort;
                    self.report(eval_error_to_diagnostic(&err).with_line(line_no));
                    if abort {
                        tracing::debug!(line = line_no, "aborting on dependency cycle");
                        Flow::Abort
                    } else {
                        Flow::Continue
                    }
                }
            },
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.is_error() {
            self.error_count += 1;
        } else {
            self.warning_count += 1;
        }
        self.emitter.emit(&diagnostic);
    }

    /// Print the error/warning totals.
    pub fn emit_summary(&mut self) {
        self.emitter.emit_summary(self.error_count, self.warning_count);
        self.emitter.flush();
    }

    pub fn into_emitter(self) -> E {
        self.emitter
    }
}
