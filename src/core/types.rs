//! VB-001: Catalog, tool-family, and build-graph types.
//!
//! The catalog types mirror the YAML task document. The build-graph types are
//! backend-neutral: a `BuildGraph` carries everything a serializer needs and
//! nothing about any one build tool's syntax.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Task catalog (tasks.yaml)
// ============================================================================

/// Root of a task catalog document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCatalog {
    /// Benchmark tasks, in declaration order
    #[serde(default)]
    pub tasks: Vec<Task>,

    /// Directory layout of the generated fragment
    #[serde(default)]
    pub layout: Layout,
}

/// One benchmark task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique name, used to derive `results/<name>.csv`
    pub name: String,

    /// Tool identifier (`VCFX_*`, `BCFTOOLS`, `VCFTOOLS`, `GATK`, `VCFLIB`, ...)
    pub tool: String,

    /// Dataset path relative to the data directory
    pub input: String,

    /// Extra arguments for first-party tools
    #[serde(default, deserialize_with = "scalar_string")]
    pub args: Option<String>,

    /// Sub-command or flag fragment for third-party tools
    #[serde(default, deserialize_with = "scalar_string")]
    pub command: Option<String>,
}

impl Task {
    /// Result artifact produced by this task's rule.
    pub fn target(&self) -> String {
        format!("results/{}.csv", self.name)
    }

    /// Input path as seen by the build tool.
    pub fn input_path(&self) -> String {
        format!("$(DATA_DIR)/{}", self.input)
    }

    /// `args`, or `None` when unset or blank.
    pub fn args(&self) -> Option<&str> {
        non_blank(self.args.as_deref())
    }

    /// `command`, or `None` when unset or blank.
    pub fn command(&self) -> Option<&str> {
        non_blank(self.command.as_deref())
    }
}

fn non_blank(s: Option<&str>) -> Option<&str> {
    s.map(str::trim).filter(|s| !s.is_empty())
}

/// Accept any YAML scalar (`args: 10`, `args: --x`) as a string.
fn scalar_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;
    let value = Option::<serde_yaml_ng::Value>::deserialize(deserializer)?;
    match value {
        None => Ok(None),
        Some(serde_yaml_ng::Value::Sequence(_)) | Some(serde_yaml_ng::Value::Mapping(_)) => {
            Err(D::Error::custom("expected a string, found a sequence or mapping"))
        }
        Some(v) => Ok(Some(yaml_value_to_string(&v))),
    }
}

/// Convert a scalar serde_yaml_ng::Value to a string.
pub fn yaml_value_to_string(val: &serde_yaml_ng::Value) -> String {
    match val {
        serde_yaml_ng::Value::String(s) => s.clone(),
        serde_yaml_ng::Value::Number(n) => n.to_string(),
        serde_yaml_ng::Value::Bool(b) => b.to_string(),
        serde_yaml_ng::Value::Null => String::new(),
        other => format!("{:?}", other),
    }
}

// ============================================================================
// Layout
// ============================================================================

/// Directory variables written at the top of the fragment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    #[serde(default = "default_root_dir")]
    pub root_dir: String,

    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_results_dir")]
    pub results_dir: String,

    #[serde(default = "default_bench_scripts")]
    pub bench_scripts: String,

    /// Emitted with `?=`, overridable from the make command line
    #[serde(default = "default_bin_dir")]
    pub bin_dir: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            root_dir: default_root_dir(),
            data_dir: default_data_dir(),
            results_dir: default_results_dir(),
            bench_scripts: default_bench_scripts(),
            bin_dir: default_bin_dir(),
        }
    }
}

fn default_root_dir() -> String {
    "$(abspath ..)".to_string()
}

fn default_data_dir() -> String {
    "$(ROOT_DIR)/benchmarks/data".to_string()
}

fn default_results_dir() -> String {
    "$(ROOT_DIR)/benchmarks/results".to_string()
}

fn default_bench_scripts() -> String {
    "$(ROOT_DIR)/benchmarks/scripts".to_string()
}

fn default_bin_dir() -> String {
    "$(ROOT_DIR)/build/src".to_string()
}

// ============================================================================
// Tool families
// ============================================================================

/// How a first-party tool receives its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Invocation {
    /// `$(TOOL) [args] < input`
    Stdin,
    /// `$(TOOL) [args] -i input`
    FileArg,
}

/// Closed set of invocation grammars a task can dispatch to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolFamily {
    /// VCFX tool from the registry, always built alongside the benchmarks
    FirstParty {
        variable: String,
        invocation: Invocation,
    },
    Bcftools,
    Vcftools,
    Gatk,
    Vcflib,
    /// Unrecognized identifier, invoked as `$(ID) input`
    Generic(String),
}

impl ToolFamily {
    /// Third-party families are presence-checked at build time.
    pub fn is_third_party(&self) -> bool {
        matches!(self, Self::Bcftools | Self::Vcftools | Self::Gatk | Self::Vcflib)
    }
}

impl fmt::Display for ToolFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FirstParty { variable, .. } => write!(f, "vcfx:{}", variable),
            Self::Bcftools => write!(f, "bcftools"),
            Self::Vcftools => write!(f, "vcftools"),
            Self::Gatk => write!(f, "gatk"),
            Self::Vcflib => write!(f, "vcflib"),
            Self::Generic(id) => write!(f, "generic:{}", id),
        }
    }
}

// ============================================================================
// Build graph
// ============================================================================

/// One recipe action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum RecipeStep {
    /// Run `command` through the timed-run helper, capturing stdout into
    /// `output` and elapsed time into `<output>.time`
    TimedRun { command: String, output: String },
    /// Write `content` into `path`
    WriteLiteral { content: String, path: String },
}

/// Build-time presence check guarding a rule's steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guard {
    /// Executable name looked up on `PATH`
    pub probe: String,

    /// Steps run instead when the probe fails; they never fail the build
    pub fallback: Vec<RecipeStep>,
}

/// A single build-graph node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRule {
    pub target: String,
    pub prerequisites: Vec<String>,
    pub steps: Vec<RecipeStep>,
    #[serde(default)]
    pub guard: Option<Guard>,
}

impl BuildRule {
    pub fn is_conditional(&self) -> bool {
        self.guard.is_some()
    }
}

/// Assignment flavor of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VarKind {
    /// Always assigned (`:=`)
    Simple,
    /// Assigned unless already set (`?=`)
    Default,
}

/// A named variable binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
    pub value: String,
    pub kind: VarKind,
}

impl Variable {
    pub fn simple(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: VarKind::Simple,
        }
    }

    pub fn overridable(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: VarKind::Default,
        }
    }
}

/// A group of variables rendered together, with an optional heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableBlock {
    #[serde(default)]
    pub comment: Option<String>,
    pub variables: Vec<Variable>,
}

/// Target that removes generated artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanTarget {
    pub name: String,
    pub patterns: Vec<String>,
}

/// The assembled document, ready for a backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildGraph {
    /// `blake3:<hex>` of the catalog text the graph was compiled from
    pub catalog_digest: String,
    pub variables: Vec<VariableBlock>,
    pub tasks: Vec<String>,
    pub outputs: Vec<String>,
    pub rules: Vec<BuildRule>,
    pub default_target: String,
    pub clean: CleanTarget,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vb001_catalog_parse() {
        let yaml = r#"
tasks:
  - name: count_small
    tool: VCFX_variant_counter
    input: small.vcf
  - name: bcf_stats
    tool: BCFTOOLS
    input: small.vcf
    command: stats
"#;
        let catalog: TaskCatalog = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(catalog.tasks.len(), 2);
        assert_eq!(catalog.tasks[0].name, "count_small");
        assert_eq!(catalog.tasks[1].command(), Some("stats"));
        assert_eq!(catalog.layout, Layout::default());
    }

    #[test]
    fn test_vb001_missing_tasks_key_is_empty() {
        let catalog: TaskCatalog = serde_yaml_ng::from_str("layout: {}").unwrap();
        assert!(catalog.tasks.is_empty());
    }

    #[test]
    fn test_vb001_numeric_args_become_strings() {
        let yaml = r#"
name: sub
tool: VCFX_subsampler
input: a.vcf
args: 100
"#;
        let task: Task = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(task.args(), Some("100"));
    }

    #[test]
    fn test_vb001_sequence_args_rejected() {
        let yaml = r#"
name: sub
tool: VCFX_subsampler
input: a.vcf
args: [1, 2]
"#;
        assert!(serde_yaml_ng::from_str::<Task>(yaml).is_err());
    }

    #[test]
    fn test_vb001_blank_args_are_absent() {
        let yaml = r#"
name: t
tool: VCFX_sorter
input: a.vcf
args: "   "
command:
"#;
        let task: Task = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(task.args(), None);
        assert_eq!(task.command(), None);
    }

    #[test]
    fn test_vb001_task_paths() {
        let task = Task {
            name: "t1".to_string(),
            tool: "VCFX_sorter".to_string(),
            input: "medium.vcf".to_string(),
            args: None,
            command: None,
        };
        assert_eq!(task.target(), "results/t1.csv");
        assert_eq!(task.input_path(), "$(DATA_DIR)/medium.vcf");
    }

    #[test]
    fn test_vb001_layout_partial_override() {
        let yaml = r#"
bin_dir: /opt/vcfx/bin
"#;
        let layout: Layout = serde_yaml_ng::from_str(yaml).unwrap();
        assert_eq!(layout.bin_dir, "/opt/vcfx/bin");
        assert_eq!(layout.data_dir, "$(ROOT_DIR)/benchmarks/data");
    }

    #[test]
    fn test_vb001_family_display() {
        assert_eq!(ToolFamily::Gatk.to_string(), "gatk");
        assert_eq!(
            ToolFamily::Generic("PLINK".to_string()).to_string(),
            "generic:PLINK"
        );
        assert!(ToolFamily::Vcflib.is_third_party());
        assert!(!ToolFamily::Generic("X".to_string()).is_third_party());
    }

    #[test]
    fn test_vb001_recipe_step_serde_tag() {
        let step = RecipeStep::WriteLiteral {
            content: "0".to_string(),
            path: "results/t.csv.time".to_string(),
        };
        let json = serde_json::to_string(&step).unwrap();
        assert!(json.contains("\"step\":\"write_literal\""));
    }
}
