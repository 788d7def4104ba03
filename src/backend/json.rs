//! VB-016: JSON backend — the build graph as data, for tooling that wants
//! to inspect rules without parsing make syntax.

use super::Backend;
use crate::core::types::BuildGraph;
use crate::error::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBackend;

impl Backend for JsonBackend {
    fn name(&self) -> &'static str {
        "json"
    }

    fn render(&self, graph: &BuildGraph) -> Result<String> {
        let mut text = serde_json::to_string_pretty(graph)?;
        text.push('\n');
        Ok(text)
    }
}
