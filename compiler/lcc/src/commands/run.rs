//! The default command: process a stream of calculator commands.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};

use lc_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};

use crate::options::{Input, RunOptions};
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::problem::read_error;
use crate::session::{Outcome, Session};

/// Run with stdout for values and stderr for diagnostics.
pub fn run_input(options: &RunOptions) -> Outcome {
    let emitter = TerminalEmitter::stderr(options.color, io::stderr().is_terminal());
    let (outcome, _) = run_with(options, emitter, stdout_handler());
    outcome
}

/// Run against explicit sinks, handing the emitter back afterwards.
///
/// File input ends with an error/warning summary; interactive stdin does not.
pub fn run_with<E: DiagnosticEmitter>(
    options: &RunOptions,
    mut emitter: E,
    output: SharedPrintHandler,
) -> (Outcome, E) {
    match &options.input {
        Input::Stdin => {
            let mut session = Session::new(emitter, output, options.cycle_policy);
            let outcome = session.run(io::stdin().lock());
            (outcome, session.into_emitter())
        }
        Input::File(path) => {
            let name = path.display().to_string();
            let file = match File::open(path) {
                Ok(file) => file,
                Err(err) => {
                    emitter.emit(&read_error(Some(&name), &err));
                    emitter.flush();
                    return (Outcome::ReadFailed, emitter);
                }
            };
            let mut session =
                Session::new(emitter, output, options.cycle_policy).with_input_name(name);
            let outcome = session.run(BufReader::new(file));
            session.emit_summary();
            (outcome, session.into_emitter())
        }
    }
}
