//! VB-006: bcftools invocation grammar — `<command> <input>`.

use super::{escape_make, name_mentions, words};
use crate::core::types::Task;

pub const VARIABLE: &str = "BCFTOOLS";
pub const PROBE: &str = "bcftools";

/// bcftools has no subcommand that prints a bare record count. A task whose
/// name mentions `count` and that sets no command is counted as the number
/// of body lines from `view -H`.
pub fn count_policy(task: &Task) -> bool {
    task.command().is_none() && name_mentions(&task.name, "count")
}

pub fn command(task: &Task) -> String {
    let tool = format!("$({})", VARIABLE);
    let input = task.input_path();
    if count_policy(task) {
        return format!("{} view -H {} | wc -l", tool, input);
    }
    let sub = task.command().map(escape_make).unwrap_or_default();
    words([tool.as_str(), sub.as_str(), input.as_str()])
}
