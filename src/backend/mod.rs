//! Backends — serialize a `BuildGraph` into a concrete document.
//!
//! Synthesis and rule emission never see backend syntax; adding a build
//! tool means adding a module here.

pub mod json;
pub mod make;

use crate::core::types::BuildGraph;
use crate::error::Result;

/// A build-description serializer.
pub trait Backend {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Render the whole document. Either the full text is returned or
    /// nothing is.
    fn render(&self, graph: &BuildGraph) -> Result<String>;
}

/// Output format selectable from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    /// GNU Make fragment (consumed by the benchmark Makefile)
    #[default]
    Make,
    /// The build graph as pretty-printed JSON
    Json,
}

/// Backend for a format.
pub fn backend_for(format: Format) -> Box<dyn Backend> {
    match format {
        Format::Make => Box::new(make::MakeBackend),
        Format::Json => Box::new(json::JsonBackend),
    }
}
