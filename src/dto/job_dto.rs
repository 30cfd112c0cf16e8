use serde::Deserialize;
use serde_json::Value as JsonValue;

use crate::models::job::Job;

/// The jobs endpoint has answered with a bare list as well as wrapped in
/// `results` or `jobs`. Records stay raw so each one is parsed on its own.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum JobListEnvelope {
    List(Vec<JsonValue>),
    Results { results: Vec<JsonValue> },
    Jobs { jobs: Vec<JsonValue> },
    Other(JsonValue),
}

impl JobListEnvelope {
    /// Parses every record, dropping (and logging) only the ones that fail.
    pub fn into_jobs(self) -> Vec<Job> {
        let records = match self {
            JobListEnvelope::List(records)
            | JobListEnvelope::Results { results: records }
            | JobListEnvelope::Jobs { jobs: records } => records,
            JobListEnvelope::Other(value) => {
                tracing::warn!(?value, "Unrecognized job list payload, treating as empty");
                return Vec::new();
            }
        };

        records
            .into_iter()
            .enumerate()
            .filter_map(|(index, record)| match serde_json::from_value::<Job>(record) {
                Ok(job) => Some(job),
                Err(e) => {
                    tracing::warn!(index, error = %e, "Skipping malformed job record");
                    None
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_every_known_shape() {
        let bare: JobListEnvelope = serde_json::from_str(r#"[{"id": 1}]"#).unwrap();
        let paged: JobListEnvelope =
            serde_json::from_str(r#"{"count": 1, "results": [{"id": 1}]}"#).unwrap();
        let wrapped: JobListEnvelope = serde_json::from_str(r#"{"jobs": [{"id": 1}]}"#).unwrap();

        for envelope in [bare, paged, wrapped] {
            assert_eq!(envelope.into_jobs().len(), 1);
        }
    }

    #[test]
    fn malformed_record_only_drops_itself() {
        let envelope: JobListEnvelope = serde_json::from_str(
            r#"{"results": [
                {"id": 1, "title": "Driver"},
                {"id": 2, "title": "Clerk"},
                {"id": 3, "title": "Mechanic", "salary": "negotiable"}
            ]}"#,
        )
        .unwrap();

        let ids: Vec<String> = envelope
            .into_jobs()
            .into_iter()
            .map(|job| job.id.to_string())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }

    #[test]
    fn unknown_shape_is_empty() {
        let other: JobListEnvelope = serde_json::from_str(r#"{"detail": "ok"}"#).unwrap();
        assert!(other.into_jobs().is_empty());
    }
}
