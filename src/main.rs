use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, bail};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use dirtree::cli::Cli;
use dirtree::core::{render_tree, write_line};
use dirtree::fs::RealFileSystem;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing();
    debug!("Parsed CLI arguments: {cli:?}");

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dirtree: {err:#}");
            ExitCode::from(1)
        }
    }
}

/// Logs go to stderr, filtered by `RUST_LOG` (default `warn`).
fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .compact()
        .init();
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    let root = &cli.dir;
    let metadata = tokio::fs::metadata(root)
        .await
        .with_context(|| root.display().to_string())?;
    if !metadata.is_dir() {
        bail!("{}: Not a directory", root.display());
    }

    let options = cli.tree_options();
    let root_name = dirtree::root_display_name(root);

    let mut out = BufWriter::new(io::stdout().lock());
    let walked = render_tree(&RealFileSystem, root, &root_name, &options, &mut |line| {
        write_line(&mut out, &line)
    })
    .await;
    let result = walked.and_then(|()| out.flush().context("writing output"));

    match result {
        Err(err) if is_broken_pipe(&err) => Ok(()),
        result => result,
    }
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::BrokenPipe)
}
