//! Run reports: the summary joined back to clause and chunk texts.
//!
//! A report is self-contained; rendering or persisting it never needs the index or the
//! original records.

mod error;


pub use error::ReportError;

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::RiskConfig;
use crate::document::{Chunk, Clause, text_by_id};
use crate::risk::{DocumentRiskSummary, RiskTier};

pub const CSV_HEADER: &str =
    "clause,matched_text,similarity,risk_level,document_risk_score,document_risk_level";

/// One best match with its texts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub clause_id: usize,
    pub clause: String,
    pub chunk_id: usize,
    pub matched_text: String,
    pub similarity: f32,
    pub risk_level: RiskTier,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub generated_at: DateTime<Utc>,
    pub config: RiskConfig,
    pub summary: DocumentRiskSummary,
    pub rows: Vec<ReportRow>,
}

impl RiskReport {
    /// Joins every match in `summary` to its clause and chunk text, keeping match order.
    pub fn new(
        config: RiskConfig,
        summary: DocumentRiskSummary,
        chunks: &[Chunk],
        clauses: &[Clause],
    ) -> Result<Self, ReportError> {
        let rows = summary
            .matches
            .iter()
            .map(|m| {
                let clause = text_by_id(clauses, m.clause_id, |c| (c.id, c.text.as_str()))
                    .ok_or(ReportError::UnknownClause {
                        clause_id: m.clause_id,
                    })?;
                let matched_text = text_by_id(chunks, m.chunk_id, |c| (c.id, c.text.as_str()))
                    .ok_or(ReportError::UnknownChunk {
                        chunk_id: m.chunk_id,
                    })?;

                Ok(ReportRow {
                    clause_id: m.clause_id,
                    clause: clause.to_string(),
                    chunk_id: m.chunk_id,
                    matched_text: matched_text.to_string(),
                    similarity: m.similarity,
                    risk_level: m.risk_tier,
                })
            })
            .collect::<Result<Vec<_>, ReportError>>()?;

        Ok(Self {
            generated_at: Utc::now(),
            config,
            summary,
            rows,
        })
    }

    pub fn to_json_string(&self) -> Result<String, ReportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// One line per match after the header. A no-match report is header-only.
    pub fn to_csv_string(&self) -> String {
        let mut out = String::with_capacity(CSV_HEADER.len() + 1 + self.rows.len() * 128);
        out.push_str(CSV_HEADER);
        out.push('\n');

        let doc_level = self
            .summary
            .tier
            .map(|tier| tier.label())
            .unwrap_or_default();

        for row in &self.rows {
            let _ = writeln!(
                out,
                "{},{},{},{},{},{}",
                csv_field(&row.clause),
                csv_field(&row.matched_text),
                row.similarity,
                row.risk_level.label(),
                self.summary.weighted_score,
                doc_level,
            );
        }
        out
    }

    pub fn write_json(&self, path: &Path) -> Result<(), ReportError> {
        write_file(path, &self.to_json_string()?)?;
        info!(path = %path.display(), "JSON report written");
        Ok(())
    }

    pub fn write_csv(&self, path: &Path) -> Result<(), ReportError> {
        write_file(path, &self.to_csv_string())?;
        info!(path = %path.display(), rows = self.rows.len(), "CSV report written");
        Ok(())
    }

    /// Console rendering of the summary.
    pub fn render_summary(&self) -> String {
        let Some(tier) = self.summary.tier else {
            return "No matches found above threshold. No risk calculated.".to_string();
        };

        let counts = &self.summary.counts;
        let mut out = String::new();
        let _ = writeln!(out, "========= Document Risk Summary =========");
        let _ = writeln!(
            out,
            "Weighted Document Risk Score: {:.4}",
            self.summary.weighted_score
        );
        let _ = writeln!(out, "Final Risk Level: {}", tier);
        let _ = writeln!(
            out,
            "Identified {} risky clause matches:",
            self.summary.matches.len()
        );
        for t in RiskTier::ALL {
            let _ = writeln!(out, "  • {} {}", counts.get(t), t);
        }
        out
    }
}

fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    fs::write(path, contents).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// RFC 4180 quoting: fields with commas, quotes or line breaks are wrapped in quotes
/// and inner quotes doubled.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}
