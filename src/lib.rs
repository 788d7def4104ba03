//! vcfx-bench — compile a VCFX benchmark task catalog into a build graph.
//!
//! Each task names a tool, an input dataset, and optional arguments. First-party
//! VCFX tools become plain rules; third-party tools become rules that check for
//! the executable at build time and record a skip marker when it is missing.

pub mod backend;
pub mod cli;
pub mod core;
pub mod error;
pub mod tools;

pub use error::{Error, Result};
