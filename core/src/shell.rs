//! # Page Shell
//!
//! Owns the three pieces of session state and decides which sections of the
//! page are visible. Nothing else mutates the state: children send
//! [`ShellEvent`]s through an [`EventSink`] and the owner feeds them to
//! [`PageShell::apply`].

use medassist_common::diagnosis::DiagnosisResponse;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::trace;

use crate::view::{self, ResultsView};

/// A state transition reported by the submission control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    Loading(bool),
    Error(Option<String>),
    Result(DiagnosisResponse),
}

/// Sending half handed to children. Cheap to clone.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: UnboundedSender<ShellEvent>,
}

impl EventSink {
    /// Events sent after the shell is gone are dropped.
    pub fn emit(&self, event: ShellEvent) {
        if let Err(e) = self.tx.send(event) {
            trace!("Shell is gone, dropping {:?}", e.0);
        }
    }
}

pub type ShellEvents = UnboundedReceiver<ShellEvent>;

pub fn event_channel() -> (EventSink, ShellEvents) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSink { tx }, rx)
}

/// One visible block of the page, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    Header,
    Form,
    Loading,
    Error(String),
    Results(ResultsView),
    Disclaimer,
}

#[derive(Debug, Clone, Default)]
pub struct PageShell {
    result: Option<DiagnosisResponse>,
    loading: bool,
    error: Option<String>,
}

impl PageShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, event: ShellEvent) {
        match event {
            ShellEvent::Loading(loading) => self.loading = loading,
            ShellEvent::Error(error) => self.error = error,
            // A new result leaves a stale error in place; only the next
            // submission start clears it.
            ShellEvent::Result(result) => self.result = Some(result),
        }
    }

    /// Applies every event already queued, without waiting.
    pub fn drain(&mut self, events: &mut ShellEvents) -> usize {
        let mut applied = 0;
        while let Ok(event) = events.try_recv() {
            self.apply(event);
            applied += 1;
        }
        applied
    }

    pub fn result(&self) -> Option<&DiagnosisResponse> {
        self.result.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Visible sections: header, form, loading, error, results, disclaimer.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = vec![Section::Header, Section::Form];

        if self.loading {
            sections.push(Section::Loading);
        }
        if let Some(error) = &self.error {
            sections.push(Section::Error(error.clone()));
        }
        if let Some(result) = self.result.as_ref().filter(|_| !self.loading) {
            sections.push(Section::Results(view::render_results(result)));
        }

        sections.push(Section::Disclaimer);
        sections
    }
}
