//! VB-007: vcftools invocation grammar — `--vcf <input> <command> --stdout`.

use super::{escape_make, name_mentions, words};
use crate::core::types::Task;

pub const VARIABLE: &str = "VCFTOOLS";
pub const PROBE: &str = "vcftools";

/// Without an explicit command, a task named `*count*` asks for `--counts`,
/// the closest vcftools gets to a per-site count.
pub fn count_policy(task: &Task) -> bool {
    task.command().is_none() && name_mentions(&task.name, "count")
}

pub fn command(task: &Task) -> String {
    let tool = format!("$({})", VARIABLE);
    let input = task.input_path();
    let flags = if count_policy(task) {
        "--counts".to_string()
    } else {
        task.command().map(escape_make).unwrap_or_default()
    };
    // vcftools logs progress to stderr; the benchmark only keeps stdout
    words([
        tool.as_str(),
        "--vcf",
        input.as_str(),
        flags.as_str(),
        "--stdout",
        "2>/dev/null",
    ])
}
