//! VB-005: VCFX (first-party) invocation grammar.

use super::{escape_make, words};
use crate::core::types::{Invocation, Task};

/// Build the command for a registry tool.
///
/// `Stdin` tools read the dataset through a redirect; `FileArg` tools take
/// it as `-i <input>`. `args` go between the binary and the input either way.
pub fn command(task: &Task, variable: &str, invocation: Invocation) -> String {
    let tool = format!("$({})", variable);
    let args = task.args().map(escape_make).unwrap_or_default();
    let input = task.input_path();
    let redirect = match invocation {
        Invocation::Stdin => "<",
        Invocation::FileArg => "-i",
    };
    words([tool.as_str(), args.as_str(), redirect, input.as_str()])
}
