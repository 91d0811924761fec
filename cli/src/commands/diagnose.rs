use std::io::{self, IsTerminal, Read};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Context;
use colored::*;
use tracing::{Instrument, info};

use crate::mprint;
use crate::terminal::page::{self, FormState, PageOptions};
use crate::terminal::{colors, print, spinner};
use medassist_common::config::Config;
use medassist_core::gateway::HttpGateway;
use medassist_core::shell::{self, PageShell};
use medassist_core::submission::SubmissionControl;

pub async fn diagnose(words: Vec<String>, cfg: &Config) -> anyhow::Result<()> {
    let symptoms = read_symptoms(words)?;

    let gateway = Arc::new(HttpGateway::new(cfg).context("failed to build HTTP client")?);
    info!("Sending symptoms to {}", gateway.diagnose_url());

    let (sink, mut events) = shell::event_channel();
    let mut control = SubmissionControl::new(gateway, sink);
    control.set_text(symptoms);

    let Some(submission) = control.trigger() else {
        anyhow::bail!("no symptoms given: pass them as arguments or pipe them on stdin");
    };

    let start_time: Instant = Instant::now();
    submission.run().instrument(spinner::loading_span()).await;

    let mut shell = PageShell::new();
    shell.drain(&mut events);

    let form = FormState {
        text: control.text(),
        can_submit: control.can_submit(),
        loading: shell.is_loading(),
        controls: false,
    };
    let opts = PageOptions {
        compact: cfg.quiet > 0,
        ..PageOptions::default()
    };

    print::header("diagnosis", cfg.quiet);
    print::lines(&page::render(&shell, &form, &opts));

    if let Some(error) = shell.error() {
        anyhow::bail!("diagnosis request failed: {error}");
    }

    print_summary(&shell, start_time, cfg);
    Ok(())
}

fn read_symptoms(words: Vec<String>) -> anyhow::Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut stdin = io::stdin();
    if stdin.is_terminal() {
        return Ok(String::new());
    }

    let mut text = String::new();
    stdin
        .read_to_string(&mut text)
        .context("failed to read symptoms from stdin")?;
    Ok(text)
}

fn print_summary(shell: &PageShell, start_time: Instant, cfg: &Config) {
    if cfg.quiet > 1 {
        return;
    }

    let count = shell.result().map_or(0, |r| r.len());
    let hypotheses: ColoredString = format!("{count} hypotheses").bold().green();
    let elapsed: ColoredString = format!("{:.2}s", start_time.elapsed().as_secs_f64())
        .bold()
        .yellow();
    let output = format!("Diagnosis complete: {hypotheses} in {elapsed}").color(colors::TEXT_DEFAULT);

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output.to_string());
        }
        _ => {
            mprint!();
            print::print_status(output.to_string());
        }
    }
}
