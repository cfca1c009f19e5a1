//! Command-line parsing for the `lazycalc` binary.

use std::path::PathBuf;

use lc_diagnostic::emitter::ColorMode;

use crate::session::CyclePolicy;

/// Where commands are read from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Input {
    #[default]
    Stdin,
    File(PathBuf),
}

/// Options for processing one command stream.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunOptions {
    pub input: Input,
    pub cycle_policy: CyclePolicy,
    pub color: ColorMode,
}

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CliCommand {
    Run(RunOptions),
    Explain(String),
    Help,
    Version,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("unknown option '{0}'")]
    UnknownFlag(String),
    #[error("unexpected argument '{0}': only one input file may be given")]
    TooManyInputs(String),
    #[error("missing error code after '--explain'")]
    MissingExplainCode,
    #[error("invalid color mode '{0}' (expected auto, always, or never)")]
    InvalidColor(String),
}

/// Parse the arguments that follow the program name.
///
/// `help`, `version`, and `--explain` are only recognized in first position;
/// anything else is a run with optional flags and at most one input path.
pub fn parse_args(args: &[String]) -> Result<CliCommand, UsageError> {
    match args.first().map(String::as_str) {
        Some("help" | "--help" | "-h") => return Ok(CliCommand::Help),
        Some("version" | "--version" | "-V") => return Ok(CliCommand::Version),
        Some("--explain" | "explain") => {
            return args
                .get(1)
                .map(|code| CliCommand::Explain(code.clone()))
                .ok_or(UsageError::MissingExplainCode);
        }
        _ => {}
    }

    let mut options = RunOptions::default();
    for arg in args {
        if arg == "--abort-on-cycle" {
            options.cycle_policy = CyclePolicy::Abort;
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color =
                ColorMode::from_flag(mode).ok_or_else(|| UsageError::InvalidColor(mode.to_string()))?;
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownFlag(arg.clone()));
        } else if options.input != Input::Stdin {
            return Err(UsageError::TooManyInputs(arg.clone()));
        } else {
            options.input = Input::File(PathBuf::from(arg));
        }
    }
    Ok(CliCommand::Run(options))
}

#[cfg(test)]
mod tests;
