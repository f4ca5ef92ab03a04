//! End-to-end run: index → match → dedupe → classify → aggregate.
//!
//! Every stage is a pure function of its inputs. The only ordering that matters for
//! reproducibility is fixed by [`dedupe`]: its output order is the order the aggregator
//! sums in, whether or not matching ran in parallel.

mod error;


pub use error::PipelineError;

use tracing::info;

use crate::config::RiskConfig;
use crate::document::{Chunk, Clause};
use crate::embedding::{Embedder, HashEmbedder};
use crate::index::VectorIndex;
use crate::ingest::{self, TextRecord};
use crate::matching::{Matcher, dedupe};
use crate::report::RiskReport;
use crate::risk::{Aggregator, DocumentRiskSummary, RiskClassifier};

#[derive(Debug, Clone)]
pub struct RiskPipeline {
    config: RiskConfig,
    matcher: Matcher,
    aggregator: Aggregator,
}

impl RiskPipeline {
    /// Validates `config` and wires the stages.
    pub fn new(config: RiskConfig) -> Result<Self, PipelineError> {
        config.validate()?;

        let matcher = Matcher::new(config.match_config())?;
        let classifier = RiskClassifier::new(config.breakpoints);
        let aggregator = Aggregator::new(classifier, config.weights);

        Ok(Self {
            config,
            matcher,
            aggregator,
        })
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    pub fn classifier(&self) -> &RiskClassifier {
        self.aggregator.classifier()
    }

    /// Scores `chunks` against `clauses`.
    ///
    /// An empty `chunks` slice fails with an empty-index error. No match above the
    /// threshold is not a failure: the summary comes back with `tier == None`.
    pub fn run(
        &self,
        chunks: &[Chunk],
        clauses: &[Clause],
    ) -> Result<DocumentRiskSummary, PipelineError> {
        let index = VectorIndex::build(chunks)?;
        let candidates = self.matcher.match_all(clauses, &index)?;
        let best = dedupe(&candidates);
        let annotated = self.classifier().annotate(best);
        Ok(self.aggregator.aggregate(annotated))
    }

    /// Runs and joins the result back to texts.
    pub fn analyze(
        &self,
        chunks: &[Chunk],
        clauses: &[Clause],
    ) -> Result<RiskReport, PipelineError> {
        info!(
            chunks = chunks.len(),
            clauses = clauses.len(),
            "Starting clause risk analysis"
        );

        let summary = self.run(chunks, clauses)?;
        let report = RiskReport::new(self.config.clone(), summary, chunks, clauses)?;

        info!(verdict = %report.summary.verdict(), "Analysis complete");
        Ok(report)
    }

    /// Embeds text records that lack vectors with `embedder`, then analyzes.
    pub fn analyze_records(
        &self,
        chunk_records: Vec<TextRecord>,
        clause_records: Vec<TextRecord>,
        embedder: &dyn Embedder,
    ) -> Result<RiskReport, PipelineError> {
        let chunks = ingest::embed_chunks(chunk_records, embedder)?;
        let clauses = ingest::embed_clauses(clause_records, embedder)?;
        self.analyze(&chunks, &clauses)
    }

    /// Builds the hash embedder this config describes.
    pub fn default_embedder(&self) -> HashEmbedder {
        HashEmbedder::new(self.config.embedding_dim).unwrap_or_default()
    }
}
