use console::Style;

pub const NULL_PLACEHOLDER: &str = "(null)";
pub const ELLIPSIS: &str = "...";

/// Helper for consistent indentation
pub struct IndentationHelper;

impl IndentationHelper {
    pub const STEP: &'static str = "  ";

    pub fn indent_for_depth(depth: usize) -> String {
        Self::STEP.repeat(depth)
    }

    /// Prefix every non-empty line of `text` with `level` steps.
    pub fn indent(text: &str, level: usize) -> String {
        let indent = Self::indent_for_depth(level);
        text.lines()
            .map(|line| {
                if line.is_empty() {
                    String::new()
                } else {
                    format!("{}{}", indent, line)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indent every line but the first by one step, so a multi-line
    /// fragment hangs under the label it was appended to.
    pub fn hang(text: &str) -> String {
        match text.split_once('\n') {
            Some((first, rest)) => format!("{}\n{}", first, Self::indent(rest, 1)),
            None => text.to_string(),
        }
    }
}

/// Styles for the pieces of a dump. Disabled palettes return text untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            style.force_styling(true).apply_to(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn type_name(&self, text: &str) -> String {
        self.paint(text, Style::new().cyan())
    }

    pub fn member(&self, text: &str) -> String {
        self.paint(text, Style::new().bold())
    }

    pub fn number(&self, text: &str) -> String {
        self.paint(text, Style::new().yellow())
    }

    pub fn string(&self, text: &str) -> String {
        self.paint(text, Style::new().green())
    }

    pub fn enumeration(&self, text: &str) -> String {
        self.paint(text, Style::new().magenta())
    }

    pub fn placeholder(&self, text: &str) -> String {
        self.paint(text, Style::new().dim())
    }

    pub fn error(&self, text: &str) -> String {
        self.paint(text, Style::new().red())
    }

    /// `{type} {name}`, or just the type when there is no name.
    pub fn prefix(&self, type_name: &str, name: &str) -> String {
        if name.is_empty() {
            self.type_name(type_name)
        } else {
            format!("{} {}", self.type_name(type_name), self.member(name))
        }
    }
}
