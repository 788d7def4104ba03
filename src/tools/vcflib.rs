//! VB-009: vcflib invocation grammar.
//!
//! vcflib ships one executable per operation (`vcfstats`, `vcffilter`, ...)
//! so the task's command selects the program and the program name is what
//! the build probes for. Each program gets its own `VCFLIB_<program>`
//! variable; the input is a bare positional argument at the end.

use super::{escape_make, name_mentions, words};
use crate::core::types::Task;

pub const VARIABLE_PREFIX: &str = "VCFLIB_";

/// Programs that always get a variable, whether or not a task uses them.
pub const DEFAULT_PROGRAMS: &[&str] = &["vcfstats", "vcffilter"];

/// Which vcflib program a task runs.
///
/// The first word of `command` wins when it starts with a letter. Otherwise
/// (no command, or a command that opens with a flag) a task named
/// `*filter*` runs `vcffilter` and anything else runs `vcfstats`.
pub fn program_policy(task: &Task) -> String {
    if let Some((program, _)) = split_program(task) {
        return program.to_string();
    }
    if name_mentions(&task.name, "filter") {
        "vcffilter".to_string()
    } else {
        "vcfstats".to_string()
    }
}

/// `command` as (program, arguments), when its first word names a program.
fn split_program(task: &Task) -> Option<(&str, &str)> {
    let command = task.command()?;
    if !command.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(
        command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(p, rest)| (p, rest.trim())),
    )
}

pub fn variable(program: &str) -> String {
    format!("{}{}", VARIABLE_PREFIX, program)
}

/// Executable name checked at build time.
pub fn probe(task: &Task) -> String {
    program_policy(task)
}

pub fn command(task: &Task) -> String {
    let program = program_policy(task);
    let tool = format!("$({})", variable(&program));
    let rest = match split_program(task) {
        Some((_, rest)) => escape_make(rest),
        None => task.command().map(escape_make).unwrap_or_default(),
    };
    let args = task.args().map(escape_make).unwrap_or_default();
    let input = task.input_path();
    words([tool.as_str(), rest.as_str(), args.as_str(), input.as_str()])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(name: &str, command: Option<&str>, args: Option<&str>) -> Task {
        Task {
            name: name.to_string(),
            tool: "VCFLIB".to_string(),
            input: "d.vcf".to_string(),
            args: args.map(str::to_string),
            command: command.map(str::to_string),
        }
    }

    #[test]
    fn test_vb009_default_program() {
        let t = make_task("vcflib_stats", None, None);
        assert_eq!(program_policy(&t), "vcfstats");
        assert_eq!(command(&t), "$(VCFLIB_vcfstats) $(DATA_DIR)/d.vcf");
        assert_eq!(probe(&t), "vcfstats");
    }

    #[test]
    fn test_vb009_filter_name_policy() {
        let t = make_task("vcflib_filter_qual", None, Some("-f 'QUAL > 30'"));
        assert_eq!(program_policy(&t), "vcffilter");
        assert_eq!(
            command(&t),
            "$(VCFLIB_vcffilter) -f 'QUAL > 30' $(DATA_DIR)/d.vcf"
        );
    }

    #[test]
    fn test_vb009_command_selects_program() {
        let t = make_task("vcflib_af", Some("vcfkeepinfo AF"), None);
        assert_eq!(program_policy(&t), "vcfkeepinfo");
        assert_eq!(
            command(&t),
            "$(VCFLIB_vcfkeepinfo) AF $(DATA_DIR)/d.vcf"
        );
    }

    #[test]
    fn test_vb009_leading_flag_keeps_name_policy() {
        let t = make_task("p3", Some("-f 'QUAL > 30'"), None);
        assert_eq!(program_policy(&t), "vcfstats");
        assert_eq!(probe(&t), "vcfstats");
        assert_eq!(
            command(&t),
            "$(VCFLIB_vcfstats) -f 'QUAL > 30' $(DATA_DIR)/d.vcf"
        );

        let t = make_task("vcflib_filter_qual", Some("-f 'QUAL > 30'"), None);
        assert_eq!(probe(&t), "vcffilter");
        assert_eq!(
            command(&t),
            "$(VCFLIB_vcffilter) -f 'QUAL > 30' $(DATA_DIR)/d.vcf"
        );
    }

    #[test]
    fn test_vb009_program_only_command() {
        let t = make_task("vcflib_x", Some("vcfhetcount"), None);
        assert_eq!(program_policy(&t), "vcfhetcount");
        assert_eq!(command(&t), "$(VCFLIB_vcfhetcount) $(DATA_DIR)/d.vcf");
    }

    #[test]
    fn test_vb009_variable_name() {
        assert_eq!(variable("vcffilter"), "VCFLIB_vcffilter");
    }
}
