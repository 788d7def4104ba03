//! VB-010: Command synthesis — dispatch a task to its tool-family handler.
//!
//! Resolution order: the first-party registry, then the fixed third-party
//! families, then the generic `$(ID) <input>` fallback. Synthesis is pure;
//! nothing here reads the filesystem or the environment.

use super::registry::ToolRegistry;
use super::types::{Task, ToolFamily};
use crate::tools;

/// Map a catalog tool identifier to its family.
pub fn resolve_family(tool: &str, registry: &ToolRegistry) -> ToolFamily {
    if let Some(resolved) = registry.resolve(tool) {
        return ToolFamily::FirstParty {
            variable: resolved.entry.variable.clone(),
            invocation: resolved.invocation,
        };
    }
    third_party_family(tool).unwrap_or_else(|| ToolFamily::Generic(tool.to_string()))
}

/// The third-party family named by `tool`, if any (ASCII case-insensitive).
pub fn third_party_family(tool: &str) -> Option<ToolFamily> {
    match tool.to_ascii_uppercase().as_str() {
        "BCFTOOLS" => Some(ToolFamily::Bcftools),
        "VCFTOOLS" => Some(ToolFamily::Vcftools),
        "GATK" => Some(ToolFamily::Gatk),
        "VCFLIB" => Some(ToolFamily::Vcflib),
        _ => None,
    }
}

/// Synthesize the invocation for a task.
pub fn command(task: &Task, family: &ToolFamily) -> String {
    match family {
        ToolFamily::FirstParty {
            variable,
            invocation,
        } => tools::vcfx::command(task, variable, *invocation),
        ToolFamily::Bcftools => tools::bcftools::command(task),
        ToolFamily::Vcftools => tools::vcftools::command(task),
        ToolFamily::Gatk => tools::gatk::command(task),
        ToolFamily::Vcflib => tools::vcflib::command(task),
        ToolFamily::Generic(id) => format!("$({}) {}", id, task.input_path()),
    }
}

/// Executable the build checks for before running the task, or `None` for
/// families that are assumed present.
pub fn presence_probe(task: &Task, family: &ToolFamily) -> Option<String> {
    match family {
        ToolFamily::Bcftools => Some(tools::bcftools::PROBE.to_string()),
        ToolFamily::Vcftools => Some(tools::vcftools::PROBE.to_string()),
        ToolFamily::Gatk => Some(tools::gatk::PROBE.to_string()),
        ToolFamily::Vcflib => Some(tools::vcflib::probe(task)),
        ToolFamily::FirstParty { .. } | ToolFamily::Generic(_) => None,
    }
}
