use lcc::{CyclePolicy, Outcome};
use pretty_assertions::assert_eq;

use crate::common::run_script;

const LEDGER: &str = "\
result add revenue
result subtract costs
revenue add 200
costs add salaries
salaries add 20
costs add 10
print result
print costs
QUIT
print salaries
";

#[test]
fn ledger_example() {
    let run = run_script(LEDGER, CyclePolicy::Report);
    assert_eq!(run.outcome, Outcome::Quit);
    assert_eq!(run.stdout, "170\n30\n");
    assert_eq!(run.stderr, "");
}

#[test]
fn shared_dependencies_are_not_cycles() {
    let script = "\
D add 1
B add D
C add D
A add B
A add C
print A
";
    let run = run_script(script, CyclePolicy::Report);
    assert_eq!(run.stdout, "2\n");
    assert_eq!(run.stderr, "");
}

#[test]
fn overflow_wraps() {
    let script = "\
big add 9223372036854775807
big add 1
print big
";
    let run = run_script(script, CyclePolicy::Report);
    assert_eq!(run.stdout, "-9223372036854775808\n");
}

#[test]
fn subtract_below_zero() {
    let run = run_script("n subtract 5\nn multiply 3\nprint n\n", CyclePolicy::Report);
    assert_eq!(run.stdout, "-15\n");
}

#[test]
fn errors_interleave_with_output() {
    let script = "\
a add 1
print a
print b
a add one two
print a
";
    let run = run_script(script, CyclePolicy::Report);
    assert_eq!(run.outcome, Outcome::Finished);
    assert_eq!(run.stdout, "1\n1\n");
    assert!(run.stderr.contains("error[E1001]: register `b` does not exist\n  --> line 3\n"));
    assert!(run.stderr.contains("error[E0001]"));
    assert!(run.stderr.contains("  --> line 4\n"));
}

#[test]
fn cycle_policies() {
    let script = "\
x add y
y add z
z add x
print y
print 7
";
    let report = run_script(script, CyclePolicy::Report);
    assert_eq!(report.outcome, Outcome::Finished);
    assert_eq!(report.stdout, "7\n");
    assert!(report.stderr.contains("`y` depends on itself"));

    let abort = run_script(script, CyclePolicy::Abort);
    assert_eq!(abort.outcome, Outcome::Aborted);
    assert_eq!(abort.stdout, "");
    assert!(abort.stderr.contains("error[E1002]"));
}

#[test]
fn breaking_a_cycle_is_not_possible_later() {
    // Records are append-only: once a cycle exists it stays.
    let script = "\
A add B
B add A
print A
B add 1
print A
";
    let run = run_script(script, CyclePolicy::Report);
    assert_eq!(run.stdout, "");
    assert_eq!(run.stderr.matches("error[E1002]").count(), 2);
}
