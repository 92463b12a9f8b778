use unicode_segmentation::UnicodeSegmentation;

use crate::util::unicode;

/// Wrap text into lines of at most `width` terminal cells.
///
/// Break rules, in priority order: after whitespace, then character wrap if
/// a single token is wider than the line. Hard newlines in the input are
/// respected. Returns at least one line (possibly empty).
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }
    let mut out = Vec::new();
    for logical in text.split('\n') {
        wrap_line(logical, width, &mut out);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

fn wrap_line(line: &str, width: usize, out: &mut Vec<String>) {
    if unicode::display_width(line) <= width {
        out.push(line.to_string());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0;
    let mut last_break: Option<usize> = None; // byte offset in `current` after a space

    for g in line.graphemes(true) {
        let gw = unicode::grapheme_display_width(g);
        if current_width + gw > width {
            if let Some(at) = last_break {
                let rest = current.split_off(at);
                out.push(current.trim_end().to_string());
                current = rest;
            } else if !current.is_empty() {
                // Single token wider than the line: character wrap
                out.push(std::mem::take(&mut current));
            }
            current_width = unicode::display_width(&current);
            last_break = None;
        }
        current.push_str(g);
        current_width += gw;
        if g.chars().all(char::is_whitespace) {
            last_break = Some(current.len());
        }
    }
    out.push(current.trim_end().to_string());
}
