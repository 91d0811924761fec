#![cfg(test)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

use medassist_common::error::SubmitError;
use medassist_core::gateway::{DiagnosisGateway, HttpGateway};
use medassist_core::shell::{self, PageShell, Section};
use medassist_core::submission::SubmissionControl;

use super::server::{config, dead_url, serve};

fn three_diagnoses() -> Value {
    json!({
        "diagnoses": [
            { "rank": 2, "diagnosis": "Angina pectoris", "icd10_code": "I20", "explanation": "Exertional chest pain" },
            { "rank": 1, "diagnosis": "Essential hypertension", "icd10_code": "I10", "explanation": "BP 160/100" },
            { "rank": 1, "diagnosis": "Heart failure", "icd10_code": "I50", "explanation": "" }
        ]
    })
}

#[tokio::test]
async fn posts_symptoms_as_json_and_keeps_service_order() -> anyhow::Result<()> {
    let seen: Arc<Mutex<Option<Value>>> = Arc::new(Mutex::new(None));
    let router = Router::new().route(
        "/diagnose",
        post({
            let seen = seen.clone();
            move |Json(body): Json<Value>| {
                let seen = seen.clone();
                async move {
                    *seen.lock().unwrap() = Some(body);
                    Json(three_diagnoses())
                }
            }
        }),
    );
    let gateway = HttpGateway::new(&config(serve(router).await?)?)?;

    let response = gateway.diagnose(" chest pain\nswollen ankles ").await?;

    assert_eq!(
        seen.lock().unwrap().clone(),
        Some(json!({ "symptoms": " chest pain\nswollen ankles " }))
    );
    let codes: Vec<&str> = response.diagnoses.iter().map(|d| d.icd10_code.as_str()).collect();
    assert_eq!(codes, ["I20", "I10", "I50"]);
    Ok(())
}

#[tokio::test]
async fn server_error_reports_status_and_clears_loading() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/diagnose",
        post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "pipeline exploded") }),
    );
    let gateway = Arc::new(HttpGateway::new(&config(serve(router).await?)?)?);

    let (sink, mut events) = shell::event_channel();
    let mut control = SubmissionControl::new(gateway, sink);
    control.set_text("fever");
    assert!(control.submit().await);

    let mut page = PageShell::new();
    page.drain(&mut events);
    assert_eq!(page.error(), Some("HTTP 500"));
    assert!(!page.is_loading());
    assert!(!control.is_loading());
    assert!(page.sections().contains(&Section::Error("HTTP 500".into())));
    Ok(())
}

#[tokio::test]
async fn validation_rejection_is_reported_by_status() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/diagnose",
        post(|| async {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "detail": "symptoms field must not be empty." })),
            )
        }),
    );
    let gateway = HttpGateway::new(&config(serve(router).await?)?)?;

    let err = gateway.diagnose("x").await.unwrap_err();
    assert_eq!(err, SubmitError::Status(422));
    assert_eq!(err.user_message(), "HTTP 422");
    Ok(())
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/diagnose",
        post(|| async { Json(json!({ "results": [] })) }),
    );
    let gateway = HttpGateway::new(&config(serve(router).await?)?)?;

    let err = gateway.diagnose("cough").await.unwrap_err();
    assert!(matches!(err, SubmitError::Decode(_)), "got {err:?}");
    assert!(!err.user_message().is_empty());
    Ok(())
}

#[tokio::test]
async fn unreachable_service_is_a_transport_error() -> anyhow::Result<()> {
    let gateway = HttpGateway::new(&config(dead_url().await?)?)?;

    let err = gateway.diagnose("cough").await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)), "got {err:?}");
    assert!(!err.user_message().is_empty());
    Ok(())
}

#[tokio::test]
async fn overlapping_triggers_send_one_request() -> anyhow::Result<()> {
    let hits = Arc::new(AtomicUsize::new(0));
    let router = Router::new().route(
        "/diagnose",
        post({
            let hits = hits.clone();
            move || {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    tokio::time::sleep(Duration::from_millis(200)).await;
                    Json(json!({ "diagnoses": [] }))
                }
            }
        }),
    );
    let gateway = Arc::new(HttpGateway::new(&config(serve(router).await?)?)?);

    let (sink, mut events) = shell::event_channel();
    let mut control = SubmissionControl::new(gateway, sink);
    control.set_text("dizziness");

    let first = control.trigger().expect("first trigger starts a request");
    let task = tokio::spawn(first.run());
    assert!(control.trigger().is_none());
    assert!(!control.submit().await);
    task.await?;

    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let mut page = PageShell::new();
    page.drain(&mut events);
    assert!(!page.is_loading());
    assert_eq!(page.result().map(|r| r.is_empty()), Some(true));
    Ok(())
}

#[tokio::test]
async fn health_reports_pipeline_readiness() -> anyhow::Result<()> {
    let router = Router::new().route(
        "/health",
        get(|| async { Json(json!({ "status": "ok", "pipeline_ready": true })) }),
    );
    let gateway = HttpGateway::new(&config(serve(router).await?)?)?;

    let health = gateway.health().await?;
    assert!(health.is_ok());
    assert!(health.pipeline_ready);
    Ok(())
}
