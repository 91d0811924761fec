//! # Submission Control
//!
//! Owns the symptom buffer and sends it to the [`DiagnosisGateway`].
//!
//! At most one request per control is in flight. [`SubmissionControl::trigger`]
//! claims an [`InFlightToken`] with a compare-exchange; a second trigger fails
//! to claim it and does nothing. Dropping the token clears the flag and
//! reports `Loading(false)`, so the loading state resets on every exit path,
//! including a submission future that is dropped before completion.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::gateway::DiagnosisGateway;
use crate::shell::{EventSink, ShellEvent};

pub struct SubmissionControl {
    buffer: String,
    gateway: Arc<dyn DiagnosisGateway>,
    in_flight: Arc<AtomicBool>,
    events: EventSink,
}

impl SubmissionControl {
    pub fn new(gateway: Arc<dyn DiagnosisGateway>, events: EventSink) -> Self {
        Self {
            buffer: String::new(),
            gateway,
            in_flight: Arc::new(AtomicBool::new(false)),
            events,
        }
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    pub fn push(&mut self, c: char) {
        self.buffer.push(c);
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Whether a trigger right now would start a request.
    pub fn can_submit(&self) -> bool {
        !self.buffer.trim().is_empty() && !self.is_loading()
    }

    /// Starts a submission of the current buffer.
    ///
    /// Returns `None` without side effects when the buffer is blank or a
    /// request is already in flight. Otherwise `Loading(true)` and a cleared
    /// error have been reported by the time this returns, and the caller
    /// drives the returned [`Submission`] to completion.
    pub fn trigger(&self) -> Option<Submission> {
        if self.buffer.trim().is_empty() {
            debug!("Ignoring submit: symptom text is blank");
            return None;
        }

        let Some(token) = InFlightToken::acquire(&self.in_flight, &self.events) else {
            debug!("Ignoring submit: a request is already in flight");
            return None;
        };

        Some(Submission {
            symptoms: self.buffer.clone(),
            gateway: Arc::clone(&self.gateway),
            events: self.events.clone(),
            token,
        })
    }

    /// Triggers and awaits in one step. Returns whether a request was made.
    pub async fn submit(&self) -> bool {
        match self.trigger() {
            Some(submission) => {
                submission.run().await;
                true
            }
            None => false,
        }
    }
}

/// A request that has claimed the in-flight slot.
pub struct Submission {
    symptoms: String,
    gateway: Arc<dyn DiagnosisGateway>,
    events: EventSink,
    token: InFlightToken,
}

impl Submission {
    pub fn symptoms(&self) -> &str {
        &self.symptoms
    }

    /// Sends the request and reports the outcome; the token drops last.
    pub async fn run(self) {
        let Submission {
            symptoms,
            gateway,
            events,
            token,
        } = self;

        match gateway.diagnose(&symptoms).await {
            Ok(response) => {
                debug!("Received {} diagnoses", response.len());
                events.emit(ShellEvent::Result(response));
            }
            Err(e) => {
                warn!("Diagnosis request failed: {e}");
                events.emit(ShellEvent::Error(Some(e.user_message())));
            }
        }

        drop(token);
    }
}

/// Proof that this submission holds the control's in-flight slot.
pub struct InFlightToken {
    flag: Arc<AtomicBool>,
    events: EventSink,
}

impl InFlightToken {
    fn acquire(flag: &Arc<AtomicBool>, events: &EventSink) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;

        events.emit(ShellEvent::Loading(true));
        events.emit(ShellEvent::Error(None));

        Some(Self {
            flag: Arc::clone(flag),
            events: events.clone(),
        })
    }
}

impl Drop for InFlightToken {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
        self.events.emit(ShellEvent::Loading(false));
    }
}
