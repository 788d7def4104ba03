//! VB-003: First-party tool registry.
//!
//! An immutable table of the VCFX tools the benchmarks know how to invoke.
//! Each entry maps a tool identifier to its make variable, binary path, and
//! input convention. The table is built once and passed by reference to
//! whatever needs it; declaration order is preserved because the generated
//! variable block follows it.

use super::types::Invocation;
use indexmap::IndexMap;

/// Make variable holding the VCFX build output directory.
pub const BIN_DIR_VAR: &str = "VCFX_BIN_DIR";

const VCFX_TOOLS: &[&str] = &[
    "VCFX_af_subsetter",
    "VCFX_alignment_checker",
    "VCFX_allele_balance_calc",
    "VCFX_allele_balance_filter",
    "VCFX_allele_counter",
    "VCFX_allele_freq_calc",
    "VCFX_ancestry_assigner",
    "VCFX_ancestry_inferrer",
    "VCFX_annotation_extractor",
    "VCFX_compressor",
    "VCFX_concordance_checker",
    "VCFX_cross_sample_concordance",
    "VCFX_custom_annotator",
    "VCFX_diff_tool",
    "VCFX_distance_calculator",
    "VCFX_dosage_calculator",
    "VCFX_duplicate_remover",
    "VCFX_fasta_converter",
    "VCFX_field_extractor",
    "VCFX_file_splitter",
    "VCFX_format_converter",
    "VCFX_genotype_query",
    "VCFX_gl_filter",
    "VCFX_haplotype_extractor",
    "VCFX_haplotype_phaser",
    "VCFX_header_parser",
    "VCFX_hwe_tester",
    "VCFX_impact_filter",
    "VCFX_inbreeding_calculator",
    "VCFX_indel_normalizer",
    "VCFX_indexer",
    "VCFX_info_aggregator",
    "VCFX_info_parser",
    "VCFX_info_summarizer",
    "VCFX_ld_calculator",
    "VCFX_merger",
    "VCFX_metadata_summarizer",
    "VCFX_missing_data_handler",
    "VCFX_missing_detector",
    "VCFX_multiallelic_splitter",
    "VCFX_nonref_filter",
    "VCFX_outlier_detector",
    "VCFX_phase_checker",
    "VCFX_phase_quality_filter",
    "VCFX_phred_filter",
    "VCFX_population_filter",
    "VCFX_position_subsetter",
    "VCFX_probability_filter",
    "VCFX_quality_adjuster",
    "VCFX_record_filter",
    "VCFX_ref_comparator",
    "VCFX_reformatter",
    "VCFX_region_subsampler",
    "VCFX_sample_extractor",
    "VCFX_sorter",
    "VCFX_subsampler",
    "VCFX_sv_handler",
    "VCFX_validator",
    "VCFX_variant_classifier",
    "VCFX_variant_counter",
];

/// A first-party tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolEntry {
    /// Binary and directory name, e.g. `VCFX_sorter`
    pub name: String,
    /// Make variable, e.g. `VCFX_SORTER`
    pub variable: String,
    pub invocation: Invocation,
}

impl ToolEntry {
    pub fn new(name: &str, invocation: Invocation) -> Self {
        Self {
            name: name.to_string(),
            variable: name.to_ascii_uppercase(),
            invocation,
        }
    }

    /// Binary location relative to the bin-dir variable.
    pub fn binary_path(&self) -> String {
        format!("$({})/{}/{}", BIN_DIR_VAR, self.name, self.name)
    }
}

/// A catalog identifier that reuses another entry's binary with a
/// different input convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolAlias {
    pub alias: String,
    pub target: String,
    pub invocation: Invocation,
}

/// Registry lookup result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved<'a> {
    pub entry: &'a ToolEntry,
    pub invocation: Invocation,
}

/// Ordered first-party tool table. Keys are lower-cased identifiers.
#[derive(Debug, Clone, Default)]
pub struct ToolRegistry {
    tools: IndexMap<String, ToolEntry>,
    aliases: IndexMap<String, ToolAlias>,
}

impl ToolRegistry {
    /// The VCFX tool suite. Every tool reads VCF on stdin; the validator
    /// can also memory-map a named file, exposed as `VCFX_validator_mmap`.
    pub fn vcfx() -> Self {
        let mut registry = Self::default();
        for name in VCFX_TOOLS {
            registry.insert(ToolEntry::new(name, Invocation::Stdin));
        }
        registry.insert_alias(ToolAlias {
            alias: "VCFX_validator_mmap".to_string(),
            target: "VCFX_validator".to_string(),
            invocation: Invocation::FileArg,
        });
        registry
    }

    /// Add a tool. A later entry with the same identifier replaces the
    /// earlier one in place.
    pub fn insert(&mut self, entry: ToolEntry) {
        self.tools.insert(entry.name.to_ascii_lowercase(), entry);
    }

    pub fn insert_alias(&mut self, alias: ToolAlias) {
        self.aliases.insert(alias.alias.to_ascii_lowercase(), alias);
    }

    /// Look up a catalog tool identifier, ignoring ASCII case.
    pub fn resolve(&self, tool: &str) -> Option<Resolved<'_>> {
        let key = tool.to_ascii_lowercase();
        if let Some(entry) = self.tools.get(&key) {
            return Some(Resolved {
                entry,
                invocation: entry.invocation,
            });
        }
        let alias = self.aliases.get(&key)?;
        let entry = self.tools.get(&alias.target.to_ascii_lowercase())?;
        Some(Resolved {
            entry,
            invocation: alias.invocation,
        })
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &ToolEntry> {
        self.tools.values()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
