use indicatif::ProgressStyle;
use tracing::{Span, info_span};
use tracing_indicatif::span_ext::IndicatifSpanExt;

pub const LOADING_MESSAGE: &str = "Analyzing symptoms...";

pub const TICKS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

/// Tick string for the `n`th frame, wrapping around.
pub fn frame(n: usize) -> &'static str {
    TICKS[n % TICKS.len()]
}

pub fn loading_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.green} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(TICKS)
}

/// A span that shows the loading spinner for as long as it is entered.
pub fn loading_span() -> Span {
    let span = info_span!("diagnose", indicatif.pb_show = true);
    span.pb_set_style(&loading_style());
    span.pb_set_message(LOADING_MESSAGE);
    span
}
