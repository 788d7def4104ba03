//! VB-017: Command-line entry — compile a task catalog to a rule document.

use crate::backend::{self, Format};
use crate::core::{compile_file, types::BuildGraph};
use crate::error::{Error, Result};
use clap::Args;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct CompileArgs {
    /// Task catalog (tasks.yaml)
    #[arg(value_name = "TASKS.yaml")]
    pub tasks: PathBuf,

    /// Write the document here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Make)]
    pub format: Format,

    /// Validate the catalog and print a summary without emitting anything
    #[arg(long)]
    pub check: bool,
}

/// Run a compile. Nothing is written unless the whole document rendered.
pub fn dispatch(args: CompileArgs) -> Result<()> {
    let graph = compile_file(&args.tasks)?;

    if args.check {
        eprintln!("{}", summary(&args.tasks, &graph));
        return Ok(());
    }

    let backend = backend::backend_for(args.format);
    let document = backend.render(&graph)?;
    info!(backend = backend.name(), bytes = document.len(), "rendered document");

    match &args.output {
        Some(path) => write_atomic(path, &document),
        None => write_stdout(&document),
    }
}

fn summary(path: &Path, graph: &BuildGraph) -> String {
    let conditional = graph.rules.iter().filter(|r| r.is_conditional()).count();
    format!(
        "OK: {} ({} tasks, {} conditional)",
        path.display(),
        graph.rules.len(),
        conditional
    )
}

/// Write to a temp file next to `path`, then rename over it.
fn write_atomic(path: &Path, document: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(write_err(parent))?;
    }
    let mut tmp_name = path.as_os_str().to_owned();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);
    std::fs::write(&tmp_path, document).map_err(write_err(&tmp_path))?;
    std::fs::rename(&tmp_path, path).map_err(write_err(path))?;
    info!(path = %path.display(), "wrote document");
    Ok(())
}

fn write_err(path: &Path) -> impl FnOnce(std::io::Error) -> Error {
    let path = path.to_path_buf();
    move |source| Error::Write { path, source }
}

fn write_stdout(document: &str) -> Result<()> {
    let stdout = std::io::stdout();
    let mut lock = stdout.lock();
    lock.write_all(document.as_bytes())
        .and_then(|()| lock.flush())
        .map_err(|source| Error::Write {
            path: PathBuf::from("<stdout>"),
            source,
        })
}
