//! Log-backed submission sink

use super::traits::SubmitSink;
use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

/// Sink that emits one structured log record per submission.
///
/// Each record is stamped with a fresh v4 submission id and the UTC
/// hand-off time; the payload is the mapping serialized as a flat JSON
/// object.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

#[async_trait]
impl SubmitSink for LogSink {
    async fn submit(&mut self, values: &FormValues) -> Result<()> {
        let payload = serde_json::to_string(values)?;
        tracing::info!(
            submission_id = %Uuid::new_v4(),
            submitted_at = %Utc::now().to_rfc3339(),
            %payload,
            "form submitted"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FormSchema;

    #[tokio::test]
    async fn test_submit_accepts_all_empty_mapping() {
        let mut sink = LogSink;
        let values = FormValues::for_schema(&FormSchema::sample());
        assert!(sink.submit(&values).await.is_ok());
    }

    #[tokio::test]
    async fn test_submit_accepts_populated_mapping() {
        let mut sink = LogSink;
        let mut values = FormValues::for_schema(&FormSchema::sample());
        values.set_text("name", "Ada".to_string());
        values.toggle("interests", "technology");
        assert!(sink.submit(&values).await.is_ok());
    }
}
