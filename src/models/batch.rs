use serde::Serialize;

/// One raw-text submission, content-addressed by its SHA-256 hash.
/// Created once per unique hash and immutable afterwards; `reprocess`
/// re-feeds the stored text through the current parser.
#[derive(Debug, Clone, Serialize)]
pub struct RawLogBatch {
    pub id: i64,
    pub label: String,
    pub raw_log: String,
    pub hash: String,
    pub record_count: i64,
    pub uploaded_at: String, // ISO 8601 timestamp
}
