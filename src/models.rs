//! Typed records returned by the ingestion-job endpoints
//!
//! Only the fields the SDK itself inspects are typed. Everything else the
//! server sends is kept in `extra` so nothing is lost on a round trip.

use crate::types::JsonObject;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an ingestion job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IngestionJobStatus {
    Pending,
    Running,
    Succeeded,
    Failed,
    Cancelled,
    /// Any status this SDK version does not know about
    #[serde(other)]
    Unknown,
}

impl IngestionJobStatus {
    /// Wire name of the status
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Running => "running",
            Self::Succeeded => "succeeded",
            Self::Failed => "failed",
            Self::Cancelled => "cancelled",
            Self::Unknown => "unknown",
        }
    }

    /// Whether the job has stopped and will not change again
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed | Self::Cancelled)
    }
}

impl std::fmt::Display for IngestionJobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One ingestion job as listed by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngestionJob {
    /// Job identifier
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<IngestionJobStatus>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    /// Remaining fields, untouched
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl IngestionJob {
    /// Create a job record with only an id
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: None,
            created_at: None,
            updated_at: None,
            extra: JsonObject::new(),
        }
    }

    /// Whether the job has reached a terminal status
    pub fn is_finished(&self) -> bool {
        self.status.is_some_and(|s| s.is_terminal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_job() {
        let job: IngestionJob = serde_json::from_value(json!({
            "id": "job-1",
            "status": "running",
            "created_at": "2024-03-01T10:00:00Z",
            "engine_id": "e-1",
            "table_name": "events"
        }))
        .unwrap();

        assert_eq!(job.id, "job-1");
        assert_eq!(job.status, Some(IngestionJobStatus::Running));
        assert_eq!(
            job.created_at,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(job.updated_at, None);
        assert_eq!(job.extra.get("engine_id"), Some(&json!("e-1")));
        assert_eq!(job.extra.len(), 2);
        assert!(!job.is_finished());
    }

    #[test]
    fn test_unknown_status_is_preserved_as_unknown() {
        let job: IngestionJob =
            serde_json::from_value(json!({"id": "job-2", "status": "throttled"})).unwrap();
        assert_eq!(job.status, Some(IngestionJobStatus::Unknown));
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(IngestionJobStatus::Succeeded.is_terminal());
        assert!(IngestionJobStatus::Failed.is_terminal());
        assert!(IngestionJobStatus::Cancelled.is_terminal());
        assert!(!IngestionJobStatus::Pending.is_terminal());
        assert!(!IngestionJobStatus::Unknown.is_terminal());
    }

    #[test]
    fn test_serialize_keeps_extra_fields() {
        let mut job = IngestionJob::new("job-3");
        job.status = Some(IngestionJobStatus::Cancelled);
        job.extra.insert("catalog_id".to_string(), json!("c-9"));

        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(
            value,
            json!({"id": "job-3", "status": "cancelled", "catalog_id": "c-9"})
        );
    }

    #[test]
    fn test_status_display() {
        assert_eq!(IngestionJobStatus::Succeeded.to_string(), "succeeded");
    }
}
