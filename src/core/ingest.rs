//! Batch ingestion: parse a raw dump, dedupe by content hash, persist
//! punches with insert-if-absent semantics.

use crate::config::rules::NameRules;
use crate::core::classify::TimeClassifier;
use crate::core::extract::{LineExtractor, LineOutcome};
use crate::core::normalize::NameNormalizer;
use crate::db::log::log_op;
use crate::db::pool::DbPool;
use crate::db::queries::{self, InsertOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::batch::RawLogBatch;
use crate::models::punch::PunchEvent;
use crate::models::status::EmploymentStatus;
use chrono::{NaiveDate, NaiveTime};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// One successfully parsed punch line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedPunch {
    pub employee: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
}

/// Result of a full parse pass over a raw dump.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedLog {
    pub punches: Vec<ParsedPunch>,
    pub matched_lines: usize,
    pub skipped_lines: usize,
}

impl ParsedLog {
    /// employee → date → times; employees alphabetical, dates and times
    /// ascending. The stable grouping used for persistence and display.
    pub fn grouped(&self) -> BTreeMap<String, BTreeMap<NaiveDate, Vec<NaiveTime>>> {
        let mut out: BTreeMap<String, BTreeMap<NaiveDate, Vec<NaiveTime>>> = BTreeMap::new();
        for p in &self.punches {
            out.entry(p.employee.clone())
                .or_default()
                .entry(p.date)
                .or_default()
                .push(p.time);
        }
        for days in out.values_mut() {
            for times in days.values_mut() {
                times.sort();
            }
        }
        out
    }
}

/// Free-text log parser: line extraction, name normalization, time parsing.
pub struct LogParser {
    extractor: LineExtractor,
    normalizer: NameNormalizer,
    classifier: TimeClassifier,
}

impl LogParser {
    pub fn new(rules: NameRules) -> Self {
        Self {
            extractor: LineExtractor::new(),
            normalizer: NameNormalizer::new(rules),
            classifier: TimeClassifier::new(),
        }
    }

    /// Parse a whole dump. Unparsable lines are dropped one by one and
    /// counted; they never fail the batch. Line order does not matter and
    /// different employees' punches may interleave.
    pub fn parse(&self, raw: &str) -> ParsedLog {
        let mut parsed = ParsedLog::default();

        for line in raw.lines() {
            match self.extractor.split_line(line) {
                LineOutcome::Skipped => {
                    if !line.trim().is_empty() {
                        parsed.skipped_lines += 1;
                    }
                }
                LineOutcome::Matched { name, datetime } => {
                    match self.classifier.parse_datetime(datetime) {
                        Ok((date, time)) => {
                            parsed.matched_lines += 1;
                            parsed.punches.push(ParsedPunch {
                                employee: self.normalizer.normalize(name),
                                date,
                                time,
                            });
                        }
                        Err(_) => parsed.skipped_lines += 1,
                    }
                }
            }
        }

        parsed
    }

    /// Canonicalize a user-typed employee name with the same rules the
    /// ingest pipeline applies, so lookups hit the stored join key.
    pub fn canonical_name(&self, raw: &str) -> String {
        self.normalizer.normalize(raw)
    }
}

/// SHA-256 of the exact submitted text, hex-encoded.
pub fn content_hash(raw: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(raw.as_bytes());
    hex::encode(hasher.finalize())
}

/// Summary returned to the caller after an ingest attempt.
#[derive(Debug)]
pub struct IngestSummary {
    pub batch_id: i64,
    pub already_saved: bool,
    pub record_count: i64,
    pub inserted: usize,
    pub duplicates: usize,
    pub parsed: ParsedLog,
}

/// High-level business logic for the `ingest`, `raw` and `reprocess`
/// commands.
pub struct IngestLogic;

impl IngestLogic {
    /// Ingest a raw dump under the given batch label.
    ///
    /// A batch whose content hash is already on file is parsed fresh from
    /// the STORED text, so current normalization rules always apply, but
    /// nothing is persisted again: no new batch row, no punch inserts.
    pub fn ingest(
        pool: &mut DbPool,
        rules: &NameRules,
        raw: &str,
        label: &str,
    ) -> AppResult<IngestSummary> {
        if raw.trim().is_empty() {
            return Err(AppError::Validation("log text must not be empty".into()));
        }
        if label.trim().is_empty() {
            return Err(AppError::Validation("batch label must not be empty".into()));
        }

        let hash = content_hash(raw);
        let parser = LogParser::new(rules.clone());

        if let Some(batch) = queries::find_batch_by_hash(&pool.conn, &hash)? {
            let parsed = parser.parse(&batch.raw_log);
            return Ok(IngestSummary {
                batch_id: batch.id,
                already_saved: true,
                record_count: batch.record_count,
                inserted: 0,
                duplicates: 0,
                parsed,
            });
        }

        let parsed = parser.parse(raw);
        let record_count = parsed.punches.len() as i64;

        let batch_id = queries::insert_batch(&pool.conn, label, raw, &hash, record_count)?;

        let mut inserted = 0;
        let mut duplicates = 0;

        for (employee, days) in parsed.grouped() {
            // roster snapshot taken at first insert; INSERT OR IGNORE keeps
            // existing rows untouched on conflict
            let status = if rules.is_permanent(&employee) {
                EmploymentStatus::Permanent
            } else {
                EmploymentStatus::JobOrder
            };

            for (date, times) in days {
                for time in times {
                    let punch = PunchEvent::new(employee.clone(), date, time, status);
                    match queries::insert_punch_if_absent(&pool.conn, &punch)? {
                        InsertOutcome::Inserted => inserted += 1,
                        InsertOutcome::AlreadyExists => duplicates += 1,
                    }
                }
            }
        }

        log_op(
            &pool.conn,
            "ingest",
            label,
            &format!(
                "batch {batch_id}: {record_count} records, {inserted} inserted, {duplicates} duplicates, {} lines skipped",
                parsed.skipped_lines
            ),
        )?;

        Ok(IngestSummary {
            batch_id,
            already_saved: false,
            record_count,
            inserted,
            duplicates,
            parsed,
        })
    }

    /// Return a batch's stored raw text unmodified, ready to be resubmitted
    /// through the pipeline.
    pub fn raw_text(pool: &mut DbPool, id: i64) -> AppResult<String> {
        let batch = queries::get_batch(&pool.conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("batch {id}")))?;
        Ok(batch.raw_log)
    }

    /// Re-run the current parser over a stored batch without persisting
    /// anything. Useful after a normalization-rule change.
    pub fn reprocess(
        pool: &mut DbPool,
        rules: &NameRules,
        id: i64,
    ) -> AppResult<(RawLogBatch, ParsedLog)> {
        let batch = queries::get_batch(&pool.conn, id)?
            .ok_or_else(|| AppError::NotFound(format!("batch {id}")))?;
        let parsed = LogParser::new(rules.clone()).parse(&batch.raw_log);
        Ok((batch, parsed))
    }
}
