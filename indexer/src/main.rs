use anyhow::{Context, Result};
use clap::Parser;
use loupe_core::{build_corpus, vars};
use scraper::Html;
use std::fs;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "loupe-indexer")]
#[command(about = "Build a TF-IDF index over a directory of documents", long_about = None)]
struct Args {
    /// Root directory to index
    dir: PathBuf,
    /// Output index file
    #[arg(long, default_value = "index.vars")]
    output: PathBuf,
}

/// Parse a markup file and concatenate all of its text nodes.
///
/// html5ever parses anything without complaint, so in practice the only
/// failures here are files that cannot be read as UTF-8 text.
fn extract_text(path: &Path) -> Result<String> {
    let raw = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let doc = Html::parse_document(&raw);
    Ok(doc.root_element().text().collect::<Vec<_>>().join(" "))
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let index = build_corpus(&args.dir, extract_text)?;
    tracing::info!(
        num_docs = index.docs.len(),
        num_terms = index.doc_freq.len(),
        "corpus indexed"
    );

    vars::save(&args.output, &index)?;
    tracing::info!(output = %args.output.display(), "index build complete");
    Ok(())
}
