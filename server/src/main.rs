use anyhow::Result;
use clap::Parser;
use loupe_core::{vars, RankConfig};
use loupe_server::{build_app, parse_address};
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::net::TcpListener;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "loupe-server")]
#[command(about = "Serve ranked search over a persisted TF-IDF index", long_about = None)]
struct Args {
    /// Listen address as host:port
    #[arg(default_value = "0.0.0.0:8888")]
    address: String,
    /// Index file produced by loupe-indexer
    #[arg(default_value = "index.vars")]
    index: PathBuf,
    /// Directory with the static search page
    #[arg(long, default_value = "assets")]
    assets: PathBuf,
    /// Maximum results per query
    #[arg(long, default_value_t = 20)]
    limit: usize,
    /// IDF denominator (historical default 1)
    #[arg(long, default_value_t = 1)]
    idf_denominator: u32,
}

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let args = Args::parse();

    let index = vars::load(&args.index)?;
    tracing::info!(
        index = %args.index.display(),
        num_docs = index.docs.len(),
        "index loaded"
    );

    let config = RankConfig { limit: args.limit, idf_denominator: args.idf_denominator };
    let app = build_app(index, config, args.assets);

    let (host, port) = parse_address(&args.address);
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
