//! The boundary to the diagnostic service.
//!
//! The submission logic depends on [`DiagnosisGateway`] only, so tests can
//! swap the network for an in-memory fake.

use async_trait::async_trait;
use medassist_common::diagnosis::DiagnosisResponse;
use medassist_common::error::SubmitError;

mod http;

pub use http::HttpGateway;

#[async_trait]
pub trait DiagnosisGateway: Send + Sync {
    /// Sends the symptom text as-is and returns the ranked diagnoses.
    async fn diagnose(&self, symptoms: &str) -> Result<DiagnosisResponse, SubmitError>;
}
