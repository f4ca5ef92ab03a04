//! Clause risk CLI entrypoint.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use mimalloc::MiMalloc;
use tracing_subscriber::EnvFilter;

use clause_risk::config::RiskConfig;
use clause_risk::ingest::{self, TextRecord};
use clause_risk::pipeline::RiskPipeline;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[derive(Debug, Parser)]
#[command(name = "clause-risk", version, about = "Score a document against reference risk clauses")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Match document chunks to reference clauses and report the document risk level.
    Analyze(AnalyzeArgs),
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// JSON array of reference clauses (`{"text": .., "embedding": [..]?}`).
    #[arg(long)]
    clauses: PathBuf,

    /// JSON array of document chunks, embedded or text-only.
    #[arg(long, conflicts_with = "document", required_unless_present = "document")]
    chunks: Option<PathBuf>,

    /// Plain `.txt` document, split into sentence chunks.
    #[arg(long)]
    document: Option<PathBuf>,

    /// Write the full report as JSON.
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write one CSV row per matched chunk.
    #[arg(long)]
    csv: Option<PathBuf>,

    #[arg(long)]
    top_k: Option<usize>,

    /// Similarity must exceed this to count as a match.
    #[arg(long)]
    threshold: Option<f32>,

    /// Search clauses on the rayon thread pool.
    #[arg(long)]
    parallel: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Analyze(args) => run_analyze(args),
    };

    if let Err(err) = result {
        tracing::error!(error = %format!("{err:#}"), "Analysis failed");
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run_analyze(args: AnalyzeArgs) -> anyhow::Result<()> {
    let mut config = RiskConfig::from_env().context("reading CLAUSE_RISK_* environment")?;
    if let Some(top_k) = args.top_k {
        config.top_k = top_k;
    }
    if let Some(threshold) = args.threshold {
        config.match_threshold = threshold;
    }
    config.parallel |= args.parallel;

    tracing::info!(
        top_k = config.top_k,
        threshold = config.match_threshold,
        parallel = config.parallel,
        "clause-risk starting"
    );

    let pipeline = RiskPipeline::new(config)?;
    let embedder = pipeline.default_embedder();

    let clause_records = ingest::load_records(&args.clauses)?;
    let chunk_records = load_chunk_records(&args, pipeline.config().min_chunk_chars)?;

    let report = pipeline.analyze_records(chunk_records, clause_records, &embedder)?;
    println!("{}", report.render_summary());

    if let Some(path) = &args.report {
        report.write_json(path)?;
    }
    if let Some(path) = &args.csv {
        report.write_csv(path)?;
    }
    Ok(())
}

fn load_chunk_records(args: &AnalyzeArgs, min_chars: usize) -> anyhow::Result<Vec<TextRecord>> {
    match (&args.chunks, &args.document) {
        (Some(path), _) => Ok(ingest::load_records(path)?),
        (None, Some(path)) => load_document_records(path, min_chars),
        (None, None) => anyhow::bail!("either --chunks or --document is required"),
    }
}

fn load_document_records(path: &Path, min_chars: usize) -> anyhow::Result<Vec<TextRecord>> {
    let text = ingest::load_document(path)?;
    Ok(ingest::chunk_document(&text, min_chars))
}
