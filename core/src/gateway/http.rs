use std::error::Error as _;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::debug;

use medassist_common::config::Config;
use medassist_common::diagnosis::{DiagnoseRequest, DiagnosisResponse, HealthStatus};
use medassist_common::error::SubmitError;

use super::DiagnosisGateway;

/// [`DiagnosisGateway`] over HTTP/JSON.
///
/// No retries. A timeout only applies when [`Config::timeout`] is set.
pub struct HttpGateway {
    client: Client,
    diagnose_url: String,
    health_url: String,
}

impl HttpGateway {
    pub fn new(cfg: &Config) -> reqwest::Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            diagnose_url: cfg.diagnose_url(),
            health_url: cfg.health_url(),
        })
    }

    pub fn diagnose_url(&self) -> &str {
        &self.diagnose_url
    }

    /// Queries `GET /health`.
    pub async fn health(&self) -> Result<HealthStatus, SubmitError> {
        fetch(self.client.get(&self.health_url)).await
    }
}

#[async_trait]
impl DiagnosisGateway for HttpGateway {
    async fn diagnose(&self, symptoms: &str) -> Result<DiagnosisResponse, SubmitError> {
        debug!("POST {} ({} bytes of symptoms)", self.diagnose_url, symptoms.len());
        let request = self
            .client
            .post(&self.diagnose_url)
            .json(&DiagnoseRequest { symptoms });
        fetch(request).await
    }
}

async fn fetch<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, SubmitError> {
    let response = request
        .send()
        .await
        .map_err(|e| SubmitError::Transport(describe(&e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(SubmitError::Status(status.as_u16()));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| SubmitError::Decode(describe(&e)))
}

/// Flattens the error and its sources into one line.
fn describe(err: &reqwest::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}
