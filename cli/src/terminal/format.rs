use colored::*;
use medassist_common::palette::RankColor;
use unicode_width::UnicodeWidthStr;

pub fn rank_colored(text: &str, color: RankColor) -> ColoredString {
    let (r, g, b) = color.rgb();
    text.truecolor(r, g, b)
}

/// Greedy word wrap on display width. Explicit newlines start a new line,
/// blank lines are kept, and words longer than `width` get a line of their own.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = UnicodeWidthStr::width(word);
            if line_width > 0 && line_width + 1 + word_width > width {
                out.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if line_width > 0 {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        out.push(line);
    }

    if text.ends_with('\n') {
        out.push(String::new());
    }
    out
}
