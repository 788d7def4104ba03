//! VB-013: Graph assembly — one document from a validated catalog.
//!
//! Order is fixed: layout variables, first-party binaries (registry order),
//! third-party overrides, task and output lists, rules (catalog order), then
//! the default and clean targets. Assembly is a single pass over the
//! catalog; the same catalog always yields the same graph.

use super::parser::LoadedCatalog;
use super::registry::{ToolRegistry, BIN_DIR_VAR};
use super::rules;
use super::types::*;
use crate::tools;
use tracing::info;

/// Name of the aggregate target.
pub const DEFAULT_TARGET: &str = "all";

/// Name of the cleanup target.
pub const CLEAN_TARGET: &str = "clean";

/// Assemble the build graph for a loaded catalog.
pub fn assemble(loaded: &LoadedCatalog, registry: &ToolRegistry) -> BuildGraph {
    let catalog = &loaded.catalog;

    let rules: Vec<BuildRule> = catalog
        .tasks
        .iter()
        .map(|task| rules::compile_task(task, registry))
        .collect();

    let graph = BuildGraph {
        catalog_digest: loaded.digest.clone(),
        variables: variable_blocks(catalog, registry),
        tasks: catalog.tasks.iter().map(|t| t.name.clone()).collect(),
        outputs: catalog.tasks.iter().map(Task::target).collect(),
        rules,
        default_target: DEFAULT_TARGET.to_string(),
        clean: CleanTarget {
            name: CLEAN_TARGET.to_string(),
            patterns: vec!["results/*.csv".to_string(), "results/*.time".to_string()],
        },
    };

    info!(
        tasks = graph.tasks.len(),
        conditional = graph.rules.iter().filter(|r| r.is_conditional()).count(),
        "assembled build graph"
    );
    graph
}

fn variable_blocks(catalog: &TaskCatalog, registry: &ToolRegistry) -> Vec<VariableBlock> {
    let layout = &catalog.layout;
    vec![
        VariableBlock {
            comment: None,
            variables: vec![
                Variable::simple("ROOT_DIR", &layout.root_dir),
                Variable::simple("DATA_DIR", &layout.data_dir),
                Variable::simple("RESULTS_DIR", &layout.results_dir),
                Variable::simple("BENCH_SCRIPTS", &layout.bench_scripts),
                Variable::overridable(BIN_DIR_VAR, &layout.bin_dir),
            ],
        },
        VariableBlock {
            comment: None,
            variables: registry
                .entries()
                .map(|e| Variable::simple(&e.variable, e.binary_path()))
                .collect(),
        },
        VariableBlock {
            comment: Some("Comparison tools (if available)".to_string()),
            variables: third_party_variables(catalog),
        },
    ]
}

/// Overridable third-party commands, plus one variable per extra vcflib
/// program the catalog uses.
fn third_party_variables(catalog: &TaskCatalog) -> Vec<Variable> {
    let mut vars = vec![
        Variable::overridable(tools::bcftools::VARIABLE, tools::bcftools::PROBE),
        Variable::overridable(tools::vcftools::VARIABLE, tools::vcftools::PROBE),
        Variable::overridable(tools::gatk::VARIABLE, tools::gatk::PROBE),
    ];

    let mut programs: Vec<String> = tools::vcflib::DEFAULT_PROGRAMS
        .iter()
        .map(|p| p.to_string())
        .collect();
    for task in &catalog.tasks {
        if super::codegen::third_party_family(&task.tool) == Some(ToolFamily::Vcflib) {
            let program = tools::vcflib::program_policy(task);
            if !programs.contains(&program) {
                programs.push(program);
            }
        }
    }
    vars.extend(
        programs
            .iter()
            .map(|p| Variable::overridable(tools::vcflib::variable(p), p)),
    );
    vars
}
