use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Boolean DAAT queries with TF-IDF ranking over a TSV corpus", long_about = None)]
struct Cli {
    /// Corpus file: one `doc_id<TAB>text` row per line
    #[arg(long)]
    corpus: PathBuf,
    /// Query file: one whitespace-separated query per line
    #[arg(long)]
    queries: PathBuf,
    /// Output report path
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();
    let cli = Cli::parse();
    searcher::run_files(&cli.corpus, &cli.queries, &cli.output)
}
