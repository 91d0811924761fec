//! Full-screen symptom form.
//!
//! One `select!` loop owns the page shell and the submission control. Key
//! presses arrive from a reader thread, state transitions from submission
//! tasks, and a ticker drives the spinner and the card entrance.

use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::event::{self, Event, KeyEvent};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::debug;

use crate::terminal::keys::{self, FormAction};
use crate::terminal::page::{self, FormState, PageOptions};
use crate::terminal::screen::Screen;
use medassist_common::config::Config;
use medassist_core::gateway::HttpGateway;
use medassist_core::shell::{self, PageShell, ShellEvent};
use medassist_core::submission::SubmissionControl;
use medassist_core::view::CARD_STAGGER;

const TICK: Duration = Duration::from_millis(100);
const MAX_WIDTH: usize = 88;

enum Input {
    Key(KeyEvent),
    Resize,
}

pub async fn interactive(cfg: &Config) -> anyhow::Result<()> {
    let gateway = Arc::new(HttpGateway::new(cfg).context("failed to build HTTP client")?);
    let (sink, mut events) = shell::event_channel();
    let mut control = SubmissionControl::new(gateway, sink);
    let mut shell = PageShell::new();

    let mut screen = Screen::enter().context("failed to enter full-screen mode")?;
    let mut inputs = spawn_input_reader();
    let mut ticker = tokio::time::interval(TICK);

    let mut spinner_frame: usize = 0;
    let mut result_at: Option<Instant> = None;
    let mut dirty = true;

    loop {
        if dirty {
            let form = FormState {
                text: control.text(),
                can_submit: control.can_submit(),
                loading: control.is_loading(),
                controls: true,
            };
            let opts = PageOptions {
                width: screen.width(MAX_WIDTH).min(MAX_WIDTH),
                spinner_frame,
                reveal: result_at.map(|at| at.elapsed()),
                compact: cfg.quiet > 0,
            };
            screen.draw(&page::render(&shell, &form, &opts))?;
            dirty = false;
        }

        tokio::select! {
            input = inputs.recv() => {
                let Some(input) = input else {
                    debug!("Input reader stopped");
                    break;
                };
                if let Input::Key(key) = input {
                    match keys::action_for(&key) {
                        FormAction::Quit => break,
                        FormAction::Submit => {
                            if let Some(submission) = control.trigger() {
                                tokio::spawn(submission.run());
                            }
                        }
                        FormAction::Insert(c) if !control.is_loading() => control.push(c),
                        FormAction::Newline if !control.is_loading() => control.push('\n'),
                        FormAction::Backspace if !control.is_loading() => control.backspace(),
                        _ => {}
                    }
                }
                dirty = true;
            }
            Some(event) = events.recv() => {
                if matches!(event, ShellEvent::Result(_)) {
                    result_at = Some(Instant::now());
                }
                shell.apply(event);
                dirty = true;
            }
            _ = ticker.tick() => {
                if shell.is_loading() || still_revealing(&shell, result_at) {
                    spinner_frame = spinner_frame.wrapping_add(1);
                    dirty = true;
                }
            }
        }
    }

    drop(screen);
    Ok(())
}

/// True until the last card's entrance delay has passed.
fn still_revealing(shell: &PageShell, result_at: Option<Instant>) -> bool {
    let (Some(at), Some(result)) = (result_at, shell.result()) else {
        return false;
    };
    let cards = u32::try_from(result.len()).unwrap_or(u32::MAX);
    at.elapsed() <= CARD_STAGGER.saturating_mul(cards)
}

/// Blocking terminal reads on their own thread, forwarded to the loop.
fn spawn_input_reader() -> UnboundedReceiver<Input> {
    let (tx, rx) = mpsc::unbounded_channel();

    thread::spawn(move || {
        loop {
            let input = match event::read() {
                Ok(Event::Key(key)) => Input::Key(key),
                Ok(Event::Resize(..)) => Input::Resize,
                Ok(_) => continue,
                Err(e) => {
                    debug!("Terminal read failed: {e}");
                    break;
                }
            };
            if tx.send(input).is_err() {
                break;
            }
        }
    });

    rx
}
