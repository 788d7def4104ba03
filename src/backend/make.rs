//! VB-015: GNU Make backend.
//!
//! Recipes call the `run-task` macro defined by the including Makefile:
//! `$(call run-task,<command>,<output>)` runs the command, captures stdout
//! into `<output>`, and records the elapsed time in `<output>.time`.
//! Guarded rules become one `@if command -v ...; then ...; else ...; fi`
//! shell block so a missing tool never fails the build.

use super::Backend;
use crate::core::types::*;
use crate::error::Result;

/// Macro that times a command and captures its output.
pub const RUN_MACRO: &str = "run-task";

/// GNU Make serializer.
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeBackend;

impl Backend for MakeBackend {
    fn name(&self) -> &'static str {
        "make"
    }

    fn render(&self, graph: &BuildGraph) -> Result<String> {
        Ok(render_makefile(graph))
    }
}

/// Render the complete fragment.
pub fn render_makefile(graph: &BuildGraph) -> String {
    let mut out = String::new();
    out.push_str("# Auto-generated from tasks.yaml - do not edit manually\n");
    out.push_str(&format!("# catalog: {}\n", graph.catalog_digest));

    for (i, block) in graph.variables.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if let Some(comment) = &block.comment {
            out.push_str(&format!("# {}\n", comment));
        }
        for var in &block.variables {
            out.push_str(&render_variable(var));
            out.push('\n');
        }
        if i == 0 {
            // `$(call)` splits on commas and stops at an unbalanced paren;
            // commands spell those three through variables
            out.push_str("comma := ,\n");
            out.push_str("lparen := (\n");
            out.push_str("rparen := )\n");
            out.push_str(&format!(".DEFAULT_GOAL := {}\n", graph.default_target));
        }
    }

    out.push('\n');
    out.push_str(&list_variable("TASKS", &graph.tasks));
    out.push('\n');
    out.push_str(&list_variable("OUTPUTS", &graph.outputs));

    for rule in &graph.rules {
        out.push('\n');
        out.push_str(&render_rule(rule));
    }

    out.push('\n');
    out.push_str(&format!(".PHONY: {} {}\n", graph.default_target, graph.clean.name));
    out.push('\n');
    out.push_str("# Default target\n");
    out.push_str(&format!("{}: $(OUTPUTS)\n", graph.default_target));
    out.push('\n');
    out.push_str("# Clean target\n");
    out.push_str(&format!("{}:\n", graph.clean.name));
    out.push_str(&format!("\trm -rf {}\n", graph.clean.patterns.join(" ")));
    out
}

fn render_variable(var: &Variable) -> String {
    let op = match var.kind {
        VarKind::Simple => ":=",
        VarKind::Default => "?=",
    };
    format!("{} {} {}", var.name, op, var.value)
}

fn list_variable(name: &str, items: &[String]) -> String {
    let line = format!("{} := {}", name, items.join(" "));
    format!("{}\n", line.trim_end())
}

/// Render one rule block, newline-terminated.
pub fn render_rule(rule: &BuildRule) -> String {
    let mut out = format!("{}: {}\n", rule.target, rule.prerequisites.join(" "));
    match &rule.guard {
        None => {
            for step in &rule.steps {
                out.push_str(&format!("\t{}\n", render_step(step)));
            }
        }
        Some(guard) => {
            out.push_str(&format!(
                "\t@if command -v {} >/dev/null 2>&1; then \\\n",
                guard.probe
            ));
            for step in &rule.steps {
                out.push_str(&format!("\t\t{}; \\\n", render_step(step)));
            }
            out.push_str("\telse \\\n");
            for step in &guard.fallback {
                out.push_str(&format!("\t\t{}; \\\n", render_step(step)));
            }
            out.push_str("\tfi\n");
        }
    }
    out
}

fn render_step(step: &RecipeStep) -> String {
    match step {
        RecipeStep::TimedRun { command, output } => format!(
            "$(call {},{},{})",
            RUN_MACRO,
            escape_call_arg(command),
            output
        ),
        RecipeStep::WriteLiteral { content, path } => {
            format!("echo \"{}\" > {}", double_quote_body(content), path)
        }
    }
}

/// Make a command safe as a `$(call)` argument.
///
/// Commas and parens outside variable references go through `$(comma)`,
/// `$(lparen)` and `$(rparen)`. References such as `$(DATA_DIR)` are copied
/// through untouched; `$$` is a literal dollar and never opens one.
fn escape_call_arg(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '$' => {
                out.push('$');
                match chars.peek() {
                    Some('$') => {
                        out.push('$');
                        chars.next();
                    }
                    Some('(') => {
                        for r in chars.by_ref() {
                            out.push(r);
                            if r == ')' {
                                break;
                            }
                        }
                    }
                    _ => {}
                }
            }
            ',' => out.push_str("$(comma)"),
            '(' => out.push_str("$(lparen)"),
            ')' => out.push_str("$(rparen)"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text for a double-quoted shell string inside a make recipe.
fn double_quote_body(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' | '"' | '`' => {
                out.push('\\');
                out.push(c);
            }
            '$' => out.push_str("\\$$"),
            _ => out.push(c),
        }
    }
    out
}
