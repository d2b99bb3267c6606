use console::{measure_text_width, AnsiCodeIterator};

/// Draws a border, with an optional title, around finished text.
#[cfg_attr(test, mockall::automock)]
pub trait BoxRenderer {
    /// `title` may be empty. `width` is the full outer width in columns.
    fn render(&self, title: &str, body: &str, width: usize) -> String;
}

/// Box-drawing border. Long lines wrap; the box grows to fit its title.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineBox;

const RESET: &str = "\u{1b}[0m";

impl LineBox {
    /// Split `line` into rows no wider than `width` display columns.
    ///
    /// Escape codes take no space. Styles still open at a break are closed
    /// and reopened on the next row.
    fn wrap(line: &str, width: usize) -> Vec<String> {
        if measure_text_width(line) <= width {
            return vec![line.to_string()];
        }

        let mut rows = Vec::new();
        let mut row = String::new();
        let mut row_width = 0;
        let mut active = String::new();

        for (part, is_ansi) in AnsiCodeIterator::new(line) {
            if is_ansi {
                if part == RESET {
                    active.clear();
                } else {
                    active.push_str(part);
                }
                row.push_str(part);
                continue;
            }

            for ch in part.chars() {
                let mut buf = [0u8; 4];
                let ch_width = measure_text_width(ch.encode_utf8(&mut buf));
                if row_width > 0 && row_width + ch_width > width {
                    if !active.is_empty() {
                        row.push_str(RESET);
                    }
                    rows.push(std::mem::take(&mut row));
                    row.push_str(&active);
                    row_width = 0;
                }
                row.push(ch);
                row_width += ch_width;
            }
        }

        if !row.is_empty() {
            rows.push(row);
        }
        rows
    }
}

impl BoxRenderer for LineBox {
    fn render(&self, title: &str, body: &str, width: usize) -> String {
        let title_width = measure_text_width(title);
        let width = if title.is_empty() {
            width.max(5)
        } else {
            width.max(title_width + 6)
        };
        let inner = width - 2;
        let content = inner - 2;

        let mut output = String::new();

        // Top edge, title embedded
        output.push('┌');
        if title.is_empty() {
            output.push_str(&"─".repeat(inner));
        } else {
            output.push_str("─ ");
            output.push_str(title);
            output.push(' ');
            output.push_str(&"─".repeat(inner - title_width - 3));
        }
        output.push_str("┐\n");

        for line in body.lines().flat_map(|line| Self::wrap(line, content)) {
            let pad = content.saturating_sub(measure_text_width(&line));
            output.push_str("│ ");
            output.push_str(&line);
            output.push_str(&" ".repeat(pad));
            output.push_str(" │\n");
        }

        output.push('└');
        output.push_str(&"─".repeat(inner));
        output.push('┘');

        output
    }
}
