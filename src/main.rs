//! CLI entry point for projtree

use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use env_logger::Env;
use projtree::StructureBuilder;

#[derive(Parser, Debug)]
#[command(name = "projtree")]
#[command(about = "Generate a project directory structure")]
#[command(version)]
#[command(
    after_help = "The tree on stdout is byte-identical to the file written by --output: \
                  it ends with the last entry's newline, with no extra blank line."
)]
struct Args {
    /// Base directory to analyze
    base_dir: PathBuf,

    /// Files/folders to ignore, matched by exact name at any depth
    #[arg(long = "ignore", value_name = "NAME", num_args = 0..)]
    ignore: Vec<String>,

    /// Save the output to this file instead of printing it
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf>,

    /// Log traversal details to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Set up logging once, before any work. RUST_LOG takes precedence.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let builder = StructureBuilder::new(&args.base_dir, &args.ignore);
    log::debug!(
        "rendering {} ignoring {} name(s)",
        builder.root().display(),
        builder.ignore_set().len()
    );

    match &args.output {
        Some(output) => {
            builder.save_to_file(output)?;
            println!("Project structure written to: {}", output.display());
        }
        None => {
            let structure = builder.render()?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(structure.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("projtree: {}", e);
        process::exit(1);
    }
}
