use bookbinder::{BindError, Binder, Config, RunSummary};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookbinder")]
#[command(about = "Summarizes line-tagged library files into per-file book summaries")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Paths to the library files: 'bookbinder TTL.txt WOO.txt'
    #[arg(required = true)]
    input_files: Vec<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    let binder = Binder::new(config);

    let mut summary = RunSummary::default();
    for path in &cli.input_files {
        let outcome = binder.bind(path);
        match &outcome {
            Ok(output) => println!("✅ Lines written to {}", output.display()),
            Err(BindError::MissingFile { path }) => {
                println!("⚠️  File {} does not exist", path.display());
            }
            Err(err) => eprintln!("✗ {}", err),
        }
        summary.record(&outcome);
    }
    summary.print_summary();

    Ok(())
}
