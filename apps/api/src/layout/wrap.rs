//! Greedy word wrap driven by font metrics.
//!
//! Callers advance the layout cursor by `lines.len() * line_height`, so the
//! line count must come from measured widths and never from character counts.

use crate::layout::font_metrics::FontMetricTable;

/// Splits `text` into lines no wider than `max_width` mm at `size_pt`.
///
/// Explicit newlines start a new paragraph; an empty paragraph yields an empty
/// line. Runs of whitespace collapse to a single space. A word wider than the
/// whole line is broken between characters.
pub fn wrap_text(
    text: &str,
    metrics: &FontMetricTable,
    size_pt: f32,
    max_width: f32,
) -> Vec<String> {
    let space_w = metrics.space_width_mm(size_pt);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut current = String::new();
        let mut current_width = 0.0_f32;

        for word in paragraph.split_whitespace() {
            let word_w = metrics.text_width(word, size_pt);

            if word_w > max_width {
                // Flush what we have, then hard-break the long word.
                if !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                }
                let mut pieces = break_word(word, metrics, size_pt, max_width);
                // The tail piece stays open so following words can join it.
                current = pieces.pop().unwrap_or_default();
                current_width = metrics.text_width(&current, size_pt);
                lines.extend(pieces);
                continue;
            }

            if current.is_empty() {
                current.push_str(word);
                current_width = word_w;
            } else if current_width + space_w + word_w > max_width {
                lines.push(std::mem::replace(&mut current, word.to_string()));
                current_width = word_w;
            } else {
                current.push(' ');
                current.push_str(word);
                current_width += space_w + word_w;
            }
        }

        lines.push(current);
    }

    lines
}

/// Breaks a single word into chunks that each fit `max_width`. Every chunk holds
/// at least one character, even if that character alone is too wide.
fn break_word(word: &str, metrics: &FontMetricTable, size_pt: f32, max_width: f32) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut current = String::new();
    let mut current_width = 0.0_f32;

    for ch in word.chars() {
        let mut buf = [0u8; 4];
        let ch_w = metrics.text_width(ch.encode_utf8(&mut buf), size_pt);
        if !current.is_empty() && current_width + ch_w > max_width {
            pieces.push(std::mem::take(&mut current));
            current_width = 0.0;
        }
        current.push(ch);
        current_width += ch_w;
    }
    if !current.is_empty() {
        pieces.push(current);
    }
    pieces
}
