//! Summary record assembly and export.
//!
//! Finished sessions are reduced to a metrics struct and wrapped in a
//! [`SummaryRecord`] envelope: identity, timestamps, client context, and
//! the QC block travel next to the metrics so an exported document is
//! self-describing. Metrics are stored as a JSON value so one record type
//! covers every task.

use serde::{Deserialize, Serialize};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

use super::platform;
use super::qc::QualityFlags;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to serialize summary metrics: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("failed to format timestamp: {0}")]
    Timestamp(#[from] time::error::Format),
}

/// Where and when the record was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    pub platform: String,
    pub tz: String,
}

impl ClientInfo {
    pub fn capture() -> Self {
        Self {
            platform: platform::platform_string(),
            tz: local_offset_label(),
        }
    }
}

fn local_offset_label() -> String {
    match time::UtcOffset::current_local_offset() {
        Ok(offset) if !offset.is_utc() => {
            let (h, m, _) = offset.as_hms();
            format!("UTC{:+03}:{:02}", h, m.abs())
        }
        _ => "UTC".to_string(),
    }
}

/// One finished run, ready for export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub id: String,
    pub task: String,
    pub created_at: String,
    pub client: ClientInfo,
    pub metrics: serde_json::Value,
    pub qc: QualityFlags,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SummaryRecord {
    pub fn new(
        task: &str,
        metrics: &impl Serialize,
        qc: QualityFlags,
    ) -> Result<Self, StorageError> {
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            task: task.to_string(),
            created_at: OffsetDateTime::now_utc().format(&Rfc3339)?,
            client: ClientInfo::capture(),
            metrics: serde_json::to_value(metrics)?,
            qc,
            notes: None,
        })
    }
}

/// Pretty-printed JSON document holding a batch of records.
pub fn export_document(records: &[SummaryRecord]) -> Result<String, StorageError> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Parse a previously exported document.
pub fn import_document(raw: &str) -> Result<Vec<SummaryRecord>, StorageError> {
    Ok(serde_json::from_str(raw)?)
}
