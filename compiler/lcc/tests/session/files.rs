use std::io::Write;

use lcc::{CyclePolicy, Outcome};
use pretty_assertions::assert_eq;

use crate::common::run_file;

fn script_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn runs_a_script_file() {
    let file = script_file("A add 2\nA multiply 21\nprint A\n");
    let run = run_file(file.path(), CyclePolicy::Report);
    assert_eq!(run.outcome, Outcome::Finished);
    assert_eq!(run.stdout, "42\n");
    assert_eq!(run.stderr, "");
}

#[test]
fn file_run_ends_with_a_summary() {
    let file = script_file("print nope\n1 add 1\nprint 1\n");
    let run = run_file(file.path(), CyclePolicy::Report);
    assert_eq!(run.outcome, Outcome::Finished);
    assert_eq!(run.stdout, "1\n");
    assert!(run
        .stderr
        .ends_with("error: 1 command failed; 1 warning emitted\n"));
}

#[test]
fn abort_exits_through_the_file_runner() {
    let file = script_file("A add A\nprint A\nprint 1\n");
    let run = run_file(file.path(), CyclePolicy::Abort);
    assert_eq!(run.outcome, Outcome::Aborted);
    assert!(!run.outcome.is_success());
    assert_eq!(run.stdout, "");
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let run = run_file(&path, CyclePolicy::Report);
    assert_eq!(run.outcome, Outcome::ReadFailed);
    assert_eq!(
        run.stderr,
        format!("error[E9001]: cannot find file '{}'\n", path.display())
    );
}
