//! # Diagnosis Wire Model
//!
//! Plain value records matching the JSON exchanged with the diagnostic
//! service. Field names are the wire names, so serde needs no renames.
//!
//! Entries are kept in the order the service returned them. Nothing in the
//! client sorts by [`DiagnosisEntry::rank`].

use serde::{Deserialize, Serialize};

/// Body of `POST /diagnose`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiagnoseRequest<'a> {
    pub symptoms: &'a str,
}

/// One candidate diagnosis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisEntry {
    /// 1-based priority assigned by the service. Only drives the badge.
    pub rank: i64,
    /// Display name.
    pub diagnosis: String,
    /// ICD-10 classification code, free format.
    pub icd10_code: String,
    /// Free text, may be empty.
    #[serde(default)]
    pub explanation: String,
}

/// Successful reply of `POST /diagnose`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisResponse {
    pub diagnoses: Vec<DiagnosisEntry>,
}

impl DiagnosisResponse {
    pub fn is_empty(&self) -> bool {
        self.diagnoses.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnoses.len()
    }
}

/// Reply of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(default)]
    pub pipeline_ready: bool,
}

impl HealthStatus {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}
