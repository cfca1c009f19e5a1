//! Helpers for running sessions with captured stdout and stderr.

use std::sync::Arc;

use lc_diagnostic::emitter::{ColorMode, TerminalEmitter};
use lcc::commands::run_with;
use lcc::options::{Input, RunOptions};
use lcc::print_handler::buffer_handler;
use lcc::{CyclePolicy, Outcome, Session};

pub type CapturedEmitter = TerminalEmitter<Vec<u8>>;

pub struct Captured {
    pub outcome: Outcome,
    pub stdout: String,
    pub stderr: String,
}

pub fn plain_emitter() -> CapturedEmitter {
    TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
}

fn stderr_of(emitter: CapturedEmitter) -> String {
    String::from_utf8(emitter.into_inner()).expect("diagnostics are UTF-8")
}

/// Feed `script` to a fresh session.
pub fn run_script(script: &str, policy: CyclePolicy) -> Captured {
    let output = buffer_handler();
    let mut session = Session::new(plain_emitter(), Arc::clone(&output), policy);
    let outcome = session.run(script.as_bytes());
    Captured {
        outcome,
        stdout: output.get_output(),
        stderr: stderr_of(session.into_emitter()),
    }
}

/// Run a file through the same entry point the binary uses.
pub fn run_file(path: &std::path::Path, policy: CyclePolicy) -> Captured {
    let options = RunOptions {
        input: Input::File(path.to_path_buf()),
        cycle_policy: policy,
        color: ColorMode::Never,
    };
    let output = buffer_handler();
    let (outcome, emitter) = run_with(&options, plain_emitter(), Arc::clone(&output));
    Captured {
        outcome,
        stdout: output.get_output(),
        stderr: stderr_of(emitter),
    }
}
