//! vcfx-bench CLI — task catalog in, Make fragment out.

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "vcfx-bench",
    version,
    about = "Compile a VCFX benchmark task catalog into a Make rule graph"
)]
struct Cli {
    #[command(flatten)]
    args: vcfx_bench::cli::CompileArgs,
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("vcfx_bench=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Help and version are successful exits; every other usage error is 1.
fn usage_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(usage_exit_code(e.kind()));
        }
    };

    init_logging();
    if let Err(e) = vcfx_bench::cli::dispatch(cli.args) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
