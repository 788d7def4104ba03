//! VB-012: Rule emission — wrap a synthesized command in a build rule.
//!
//! Every task becomes exactly one rule targeting `results/<name>.csv` with
//! the task's input as its only prerequisite. Third-party rules carry a
//! guard: when the probed executable is missing at build time the rule
//! writes a skip marker and a zero timing instead of failing.

use super::codegen;
use super::registry::ToolRegistry;
use super::types::{BuildRule, Guard, RecipeStep, Task, ToolFamily};
use tracing::{debug, warn};

/// Timing value written when a task is skipped.
pub const SKIPPED_TIME: &str = "0";

/// Resolve, synthesize, and emit the rule for one task.
pub fn compile_task(task: &Task, registry: &ToolRegistry) -> BuildRule {
    let family = codegen::resolve_family(&task.tool, registry);
    if let ToolFamily::Generic(id) = &family {
        warn!(task = %task.name, tool = %id, "unknown tool, using generic invocation");
    }
    let command = codegen::command(task, &family);
    let rule = emit_rule(task, &family, command);
    debug!(
        task = %task.name,
        family = %family,
        conditional = rule.is_conditional(),
        "emitted rule"
    );
    rule
}

/// Build the rule for a task whose command is already synthesized.
pub fn emit_rule(task: &Task, family: &ToolFamily, command: String) -> BuildRule {
    let target = task.target();
    let guard = codegen::presence_probe(task, family).map(|probe| Guard {
        fallback: skip_steps(&task.name, &probe, &target),
        probe,
    });
    BuildRule {
        steps: vec![RecipeStep::TimedRun {
            command,
            output: target.clone(),
        }],
        target,
        prerequisites: vec![task.input_path()],
        guard,
    }
}

/// Placeholder result and timing for a task whose tool is absent.
pub fn skip_steps(name: &str, probe: &str, target: &str) -> Vec<RecipeStep> {
    vec![
        RecipeStep::WriteLiteral {
            content: format!("Skipping {}: {} not available", name, probe),
            path: target.to_string(),
        },
        RecipeStep::WriteLiteral {
            content: SKIPPED_TIME.to_string(),
            path: format!("{}.time", target),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_task(name: &str, tool: &str, input: &str, command: Option<&str>) -> Task {
        Task {
            name: name.to_string(),
            tool: tool.to_string(),
            input: input.to_string(),
            args: None,
            command: command.map(str::to_string),
        }
    }

    #[test]
    fn test_vb012_first_party_unconditional() {
        let reg = ToolRegistry::vcfx();
        let t = make_task("t1", "VCFX_variant_counter", "a.vcf", None);
        let rule = compile_task(&t, &reg);
        assert_eq!(rule.target, "results/t1.csv");
        assert_eq!(rule.prerequisites, vec!["$(DATA_DIR)/a.vcf"]);
        assert!(!rule.is_conditional());
        assert_eq!(
            rule.steps,
            vec![RecipeStep::TimedRun {
                command: "$(VCFX_VARIANT_COUNTER) < $(DATA_DIR)/a.vcf".to_string(),
                output: "results/t1.csv".to_string(),
            }]
        );
    }

    #[test]
    fn test_vb012_third_party_guarded() {
        let reg = ToolRegistry::vcfx();
        let t = make_task("t2", "VCFTOOLS", "b.vcf", Some("--freq"));
        let rule = compile_task(&t, &reg);
        let guard = rule.guard.as_ref().unwrap();
        assert_eq!(guard.probe, "vcftools");
        assert_eq!(
            guard.fallback,
            vec![
                RecipeStep::WriteLiteral {
                    content: "Skipping t2: vcftools not available".to_string(),
                    path: "results/t2.csv".to_string(),
                },
                RecipeStep::WriteLiteral {
                    content: "0".to_string(),
                    path: "results/t2.csv.time".to_string(),
                },
            ]
        );
        match &rule.steps[0] {
            RecipeStep::TimedRun { command, .. } => assert!(command.contains("--freq --stdout")),
            other => panic!("unexpected step {:?}", other),
        }
    }

    #[test]
    fn test_vb012_generic_unconditional() {
        let reg = ToolRegistry::vcfx();
        let t = make_task("t3", "PLINK2", "c.vcf", None);
        let rule = compile_task(&t, &reg);
        assert!(!rule.is_conditional());
        assert_eq!(
            rule.steps[0],
            RecipeStep::TimedRun {
                command: "$(PLINK2) $(DATA_DIR)/c.vcf".to_string(),
                output: "results/t3.csv".to_string(),
            }
        );
    }

    #[test]
    fn test_vb012_gatk_probe() {
        let reg = ToolRegistry::vcfx();
        let t = make_task("g", "GATK", "c.vcf", Some("CountVariants"));
        let rule = compile_task(&t, &reg);
        assert_eq!(rule.guard.unwrap().probe, "gatk");
    }

    #[test]
    fn test_vb012_single_prerequisite() {
        let reg = ToolRegistry::vcfx();
        for tool in ["VCFX_sorter", "BCFTOOLS", "VCFLIB", "OTHER"] {
            let t = make_task("x", tool, "in.vcf", None);
            let rule = compile_task(&t, &reg);
            assert_eq!(rule.prerequisites.len(), 1);
            assert!(!rule.prerequisites[0].starts_with("results/"));
        }
    }
}
