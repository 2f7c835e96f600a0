//! Trait abstraction for the submission sink to enable mocking in tests

use crate::state::FormValues;
use anyhow::Result;
use async_trait::async_trait;

/// Trait for the external collaborator that receives submitted form data.
///
/// The sink accepts the flat key/value mapping (checkbox fields as lists of
/// strings, everything else as strings); no acknowledgment is consumed.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmitSink: Send + Sync {
    /// Hand over the collected field values
    async fn submit(&mut self, values: &FormValues) -> Result<()>;
}
