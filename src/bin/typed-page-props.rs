#![allow(clippy::print_stdout, clippy::print_stderr)]

//! Types the props of Next.js App Router pages and layouts.
//!
//! ```bash
//! # report what would change
//! typed-page-props app/
//!
//! # rewrite in place
//! typed-page-props --write app/
//!
//! # trace resolution
//! TYPED_PROPS_LOG=typed_props=trace typed-page-props app/blog/page.tsx
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use rayon::prelude::*;
use tracing_subscriber::EnvFilter;

use typed_props::base::{LineIndex, Position};
use typed_props::error::{CodemodError, Result};
use typed_props::project::collect_route_files;
use typed_props::transform::{TransformOptions, commit_edits, plan};

/// Replace the first parameter type of default-exported page and layout
/// components with `PageProps<"/route">` / `LayoutProps<"/route">`.
#[derive(Debug, Parser)]
#[command(name = "typed-page-props", version, about)]
struct Args {
    /// Files or directories to process
    #[arg(default_value = ".")]
    paths: Vec<PathBuf>,

    /// Write changes back to disk instead of only reporting them
    #[arg(long)]
    write: bool,

    /// Use this route for every file instead of inferring it from the project
    #[arg(long, value_name = "ROUTE")]
    route: Option<String>,
}

/// One rewritten file.
struct Change {
    position: Position,
    annotation: String,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let options = match &args.route {
        Some(route) => TransformOptions::new().with_route(route.clone()),
        None => TransformOptions::new(),
    };

    let mut files = Vec::new();
    for path in &args.paths {
        match collect_route_files(path) {
            Ok(found) => files.extend(found),
            Err(error) => {
                eprintln!("error: {error}");
                return ExitCode::FAILURE;
            }
        }
    }
    files.sort();
    files.dedup();
    tracing::debug!(files = files.len(), "collected route files");

    // SyntaxNode is not Send, so each file is parsed and rewritten on its own worker
    let results: Vec<(PathBuf, Result<Option<Change>>)> = files
        .into_par_iter()
        .map(|path| {
            let result = process(&path, &options, args.write);
            (path, result)
        })
        .collect();

    let mut changed = 0;
    let mut failed = 0;
    for (path, result) in &results {
        match result {
            Ok(Some(change)) => {
                changed += 1;
                println!("{}:{}: {}", path.display(), change.position, change.annotation);
            }
            Ok(None) => {}
            Err(error) => {
                failed += 1;
                eprintln!("error: {error}");
            }
        }
    }

    let unchanged = results.len() - changed - failed;
    let mode = if args.write { "written" } else { "dry run, pass --write to apply" };
    eprintln!("{changed} changed, {unchanged} unchanged, {failed} failed ({mode})");

    if failed > 0 {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn process(path: &Path, options: &TransformOptions, write: bool) -> Result<Option<Change>> {
    let source = fs::read_to_string(path).map_err(|e| CodemodError::io(path, e))?;
    let Some(rewrite) = plan(&source, path, options)? else {
        return Ok(None);
    };

    let position = LineIndex::new(&source).position(rewrite.edit.range.start());
    let annotation = rewrite.edit.replacement.clone();
    let result = commit_edits(&source, vec![rewrite.edit])?;
    if result == source {
        return Ok(None);
    }

    if write {
        fs::write(path, &result).map_err(|e| CodemodError::io(path, e))?;
    }
    Ok(Some(Change {
        position,
        annotation,
    }))
}

/// Log to stderr when `TYPED_PROPS_LOG` or `RUST_LOG` is set.
///
/// `TYPED_PROPS_LOG` takes precedence; both use `RUST_LOG` syntax.
fn init_tracing() {
    let filter = match std::env::var("TYPED_PROPS_LOG") {
        Ok(directives) => EnvFilter::builder().parse_lossy(directives),
        Err(_) if std::env::var("RUST_LOG").is_ok() => EnvFilter::from_default_env(),
        Err(_) => return,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
