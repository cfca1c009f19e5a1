//! Command handlers for the `lazycalc` binary.

mod explain;
mod run;

pub use explain::explain_error;
pub use run::{run_input, run_with};
