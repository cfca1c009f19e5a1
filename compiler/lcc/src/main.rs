//! lazycalc CLI
//!
//! Lazy register calculator.

use std::process::ExitCode;

use lcc::commands::{explain_error, run_input};
use lcc::logging::init_tracing;
use lcc::options::{parse_args, CliCommand};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args) {
        Ok(CliCommand::Run(options)) => run_input(&options).exit_code(),
        Ok(CliCommand::Explain(code)) => explain_error(&code),
        Ok(CliCommand::Help) => {
            print_usage();
            ExitCode::SUCCESS
        }
        Ok(CliCommand::Version) => {
            println!("lazycalc {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("Run `lazycalc --help` for usage.");
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    println!("lazycalc (lazy register calculator)");
    println!();
    println!("Usage: lazycalc [options] [file]");
    println!();
    println!("Reads commands from <file>, or from standard input if no file is given.");
    println!();
    println!("Commands:");
    println!("  <register> add <register>       Add to a register when it is printed");
    println!("  <register> subtract <register>  Subtract from a register");
    println!("  <register> multiply <register>  Multiply a register");
    println!("  print <register>                Evaluate and print a register");
    println!("  quit                            Stop reading input");
    println!();
    println!("Options:");
    println!("  --abort-on-cycle     Stop at the first dependency cycle (exit 1)");
    println!("  --color=<mode>       Diagnostic colors: auto, always, never");
    println!("  --explain <code>     Explain an error code (e.g., E1002)");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Environment:");
    println!("  LAZYCALC_LOG         Tracing filter, e.g. `lc_eval=trace`");
    println!();
    println!("Examples:");
    println!("  lazycalc calc.txt");
    println!("  echo 'A add 2' | lazycalc");
    println!("  lazycalc --explain E1001");
}
