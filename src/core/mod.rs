//! Core compiler logic — types, loading, synthesis, rule emission, assembly.

pub mod codegen;
pub mod graph;
pub mod parser;
pub mod registry;
pub mod rules;
pub mod types;

use crate::error::Result;
use std::path::Path;

/// Load `path` and assemble its build graph with the VCFX registry.
pub fn compile_file(path: &Path) -> Result<types::BuildGraph> {
    let loaded = parser::load_catalog(path)?;
    Ok(graph::assemble(&loaded, &registry::ToolRegistry::vcfx()))
}
