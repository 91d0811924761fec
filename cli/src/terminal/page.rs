//! Turns the shell's sections into terminal lines.
//!
//! Used by both the one-shot command (lines go through [`print`]) and the
//! interactive screen (lines are drawn directly).
//!
//! [`print`]: crate::terminal::print

use std::time::Duration;

use colored::*;
use medassist_core::shell::{PageShell, Section};
use medassist_core::view::{CardView, ResultsView};

use crate::terminal::{colors, format, print, spinner};

const KICKER: &str = "CLINICAL PROTOCOLS · ICD-10";
const TITLE: &str = "Diagnosis Assistant";
const INTRO: &str = "Describe the patient's history and symptoms. The service ranks the most \
likely diagnoses against the official national clinical protocols.";
const PLACEHOLDER: &str = "Describe the patient's symptoms, e.g. chest pain, shortness of breath \
on exertion, swollen ankles. BP 160/100. Symptoms for 2 weeks.";
const SUBMIT_HINT: &str = "Ctrl+Enter to submit · Esc to quit";
const DISCLAIMER: &str = "⚠ Intended for clinical decision support only. Does not replace a \
physician's consultation. Based on national clinical protocols.";

const CARD_INDENT: usize = 7;

/// What the form section shows.
pub struct FormState<'a> {
    pub text: &'a str,
    pub can_submit: bool,
    pub loading: bool,
    /// Submit hint and button label; off for one-shot output.
    pub controls: bool,
}

pub struct PageOptions {
    pub width: usize,
    pub spinner_frame: usize,
    /// Time since the current result arrived. Cards whose entrance delay
    /// has not elapsed yet stay hidden. `None` shows every card.
    pub reveal: Option<Duration>,
    /// Drops the static header and disclaimer.
    pub compact: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            width: print::TOTAL_WIDTH,
            spinner_frame: 0,
            reveal: None,
            compact: false,
        }
    }
}

pub fn render(shell: &PageShell, form: &FormState<'_>, opts: &PageOptions) -> Vec<String> {
    let mut lines = Vec::new();

    for section in shell.sections() {
        match section {
            Section::Header if !opts.compact => header(&mut lines, opts.width),
            Section::Form => form_box(&mut lines, form, opts.width),
            Section::Loading => lines.push(format!(
                "{} {}",
                spinner::frame(opts.spinner_frame).color(colors::ACCENT),
                spinner::LOADING_MESSAGE.color(colors::MUTED)
            )),
            Section::Error(message) => error_banner(&mut lines, &message),
            Section::Results(view) => results(&mut lines, &view, opts),
            Section::Disclaimer if !opts.compact => disclaimer(&mut lines, opts.width),
            _ => {}
        }
    }

    lines
}

fn header(lines: &mut Vec<String>, width: usize) {
    lines.push(KICKER.color(colors::ACCENT).to_string());
    lines.push(format!("{}", TITLE.color(colors::PRIMARY).bold()));
    for line in format::wrap(INTRO, width) {
        lines.push(line.color(colors::MUTED).to_string());
    }
    lines.push(String::new());
}

fn form_box(lines: &mut Vec<String>, form: &FormState<'_>, width: usize) {
    let inner = width.saturating_sub(4).max(1);
    let edge = |s: &str| s.color(colors::SEPARATOR).to_string();

    lines.push(edge(&format!("┌{}┐", "─".repeat(inner + 2))));

    let (body, muted) = if form.text.is_empty() {
        (format::wrap(PLACEHOLDER, inner), true)
    } else {
        (format::wrap(form.text, inner), false)
    };
    for line in body {
        let pad = " ".repeat(inner.saturating_sub(console::measure_text_width(&line)));
        let text = if muted {
            line.color(colors::MUTED).italic()
        } else {
            line.color(colors::TEXT_DEFAULT)
        };
        lines.push(format!("{} {}{} {}", edge("│"), text, pad, edge("│")));
    }

    lines.push(edge(&format!("└{}┘", "─".repeat(inner + 2))));

    if form.controls {
        let button = if form.loading {
            "[ Analyzing... ]".color(colors::MUTED)
        } else if form.can_submit {
            "[ Diagnose → ]".color(colors::ACCENT).bold()
        } else {
            "[ Diagnose → ]".color(colors::MUTED)
        };
        let gap = width
            .saturating_sub(console::measure_text_width(SUBMIT_HINT))
            .saturating_sub(console::measure_text_width(&button.to_string()))
            .max(1);
        lines.push(format!(
            "{}{}{}",
            SUBMIT_HINT.color(colors::MUTED),
            " ".repeat(gap),
            button
        ));
    }
    lines.push(String::new());
}

fn error_banner(lines: &mut Vec<String>, message: &str) {
    lines.push(format!(
        "{} {}",
        "[-]".color(colors::ERROR).bold(),
        format!("Error: {message}").color(colors::ERROR)
    ));
    lines.push(String::new());
}

fn results(lines: &mut Vec<String>, view: &ResultsView, opts: &PageOptions) {
    match view {
        ResultsView::Empty { message } => {
            lines.push(message.color(colors::MUTED).italic().to_string());
        }
        ResultsView::Listed { header, cards } => {
            lines.push(print::rule(header, opts.width));
            lines.push(String::new());
            for keyed in cards {
                if opts.reveal.is_some_and(|elapsed| keyed.card.delay > elapsed) {
                    break;
                }
                card(lines, &keyed.card, opts.width);
            }
        }
    }
}

fn card(lines: &mut Vec<String>, card: &CardView, width: usize) {
    let badge = format::rank_colored(&format!("{:>4}", card.badge), card.color).bold();
    let code = format::rank_colored(&format!("[{}]", card.code), card.color);
    lines.push(format!(
        " {}  {}  {}",
        badge,
        card.name.color(colors::PRIMARY).bold(),
        code
    ));

    let indent = " ".repeat(CARD_INDENT);
    for line in format::wrap(&card.explanation, width.saturating_sub(CARD_INDENT)) {
        lines.push(format!("{}{}", indent, line.color(colors::MUTED)));
    }
    lines.push(String::new());
}

fn disclaimer(lines: &mut Vec<String>, width: usize) {
    lines.push("─".repeat(width).color(colors::SEPARATOR).to_string());
    for line in format::wrap(DISCLAIMER, width) {
        lines.push(line.color(colors::MUTED).to_string());
    }
}
