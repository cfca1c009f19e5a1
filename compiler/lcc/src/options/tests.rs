use super::*;
use pretty_assertions::assert_eq;

fn parse(args: &[&str]) -> Result<CliCommand, UsageError> {
    let args: Vec<String> = args.iter().map(|a| (*a).to_string()).collect();
    parse_args(&args)
}

#[test]
fn no_arguments_reads_stdin() {
    assert_eq!(parse(&[]), Ok(CliCommand::Run(RunOptions::default())));
}

#[test]
fn file_with_flags() {
    assert_eq!(
        parse(&["--abort-on-cycle", "calc.txt", "--color=never"]),
        Ok(CliCommand::Run(RunOptions {
            input: Input::File(PathBuf::from("calc.txt")),
            cycle_policy: CyclePolicy::Abort,
            color: ColorMode::Never,
        }))
    );
}

#[test]
fn info_commands() {
    assert_eq!(parse(&["-h"]), Ok(CliCommand::Help));
    assert_eq!(parse(&["help"]), Ok(CliCommand::Help));
    assert_eq!(parse(&["--version"]), Ok(CliCommand::Version));
    assert_eq!(
        parse(&["--explain", "E1002"]),
        Ok(CliCommand::Explain("E1002".to_string()))
    );
    assert_eq!(parse(&["--explain"]), Err(UsageError::MissingExplainCode));
}

#[test]
fn usage_errors() {
    assert_eq!(
        parse(&["a.txt", "b.txt"]),
        Err(UsageError::TooManyInputs("b.txt".to_string()))
    );
    assert_eq!(
        parse(&["--fast"]),
        Err(UsageError::UnknownFlag("--fast".to_string()))
    );
    assert_eq!(
        parse(&["--color=rainbow"]),
        Err(UsageError::InvalidColor("rainbow".to_string()))
    );
}
