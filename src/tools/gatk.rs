//! VB-008: GATK invocation grammar — `<command> -I <input>`.

use super::{escape_make, name_mentions, words};
use crate::core::types::Task;

pub const VARIABLE: &str = "GATK";
pub const PROBE: &str = "gatk";

/// A `*count*` task with no command runs the `CountVariants` tool.
pub fn count_policy(task: &Task) -> bool {
    task.command().is_none() && name_mentions(&task.name, "count")
}

pub fn command(task: &Task) -> String {
    let tool = format!("$({})", VARIABLE);
    let input = task.input_path();
    let sub = if count_policy(task) {
        "CountVariants".to_string()
    } else {
        task.command().map(escape_make).unwrap_or_default()
    };
    words([tool.as_str(), sub.as_str(), "-I", input.as_str()])
}
