//! Rendering of parse results and errors for the terminal or as JSON.
use crate::*;
use itertools::Itertools as _;
use std::fmt::Display;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const RED: &str = "\x1b[31m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    pub color: bool,
}

impl Style {
    pub fn from_config(config: &Config) -> Self {
        Self {
            color: config.color,
        }
    }

    fn paint(&self, code: &str, text: impl Display) -> String {
        if self.color {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }
}

/// Machine-readable outcome for one script.
#[derive(Debug, serde::Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Report<'a> {
    Parsed {
        label: &'a str,
        statements: &'a [Statement<'a>],
    },
    Expanded {
        label: &'a str,
        script: &'a str,
    },
    Failed {
        label: &'a str,
        message: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        syntax: Option<&'a SyntaxError>,
    },
}

impl<'a> Report<'a> {
    pub fn failed(label: &'a str, error: &'a Error) -> Self {
        Report::Failed {
            label,
            message: error.to_string(),
            syntax: error.as_syntax(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// One block per statement: a header with its lines and kind, the metadata
/// attached to it, then its text indented.
pub fn render_statements(label: &str, statements: &[Statement<'_>], style: Style) -> String {
    statements
        .iter()
        .map(|statement| {
            let mut out = format!(
                "{} {}",
                style.paint(
                    BOLD,
                    format_args!("{label}:{}-{}", statement.start.line, statement.end.line)
                ),
                style.paint(CYAN, statement.kind),
            );
            if statement.returns_cursors {
                out.push_str(&format!(" {}", style.paint(YELLOW, "[cursors]")));
            }
            if let Some(description) = statement.description {
                let note = style.paint(DIM, format_args!("-- {description}"));
                out.push_str(&format!("\n    {note}"));
            }
            for import in &statement.imports {
                let note = style.paint(DIM, format_args!("-- import {import}"));
                out.push_str(&format!("\n    {note}"));
            }
            for line in statement.text.lines() {
                out.push_str(&format!("\n    {line}"));
            }
            out
        })
        .join("\n\n")
}

/// Header line plus the source window. Without colour this is exactly the
/// error's alternate `Display`.
pub fn render_syntax_error(error: &SyntaxError, style: Style) -> String {
    let kind = style.paint(RED, format_args!("{}", error.kind()));
    let Some(location) = error.location() else {
        let label = style.paint(BOLD, error.label());
        return format!("{label}: {kind}: {}", error.message());
    };

    let mut out = format!(
        "{} - {kind}: {}",
        style.paint(
            BOLD,
            format_args!("{}:{}:{}", error.label(), location.row, location.column)
        ),
        error.message()
    );
    let lines = error.snippet_lines();
    if lines.is_empty() {
        return out;
    }

    let gutter = gutter_width(lines);
    let window = lines
        .iter()
        .map(|line| match line {
            SnippetLine::Source { row, text } => {
                format!("{} {text}", style.paint(DIM, format_args!("{row:>gutter$} |")))
            }
            SnippetLine::Marker { pad, width } => format!(
                "{} {pad}{}",
                style.paint(DIM, format_args!("{:>gutter$} |", "")),
                style.paint(RED, underline(*width))
            ),
        })
        .join("\n");
    out.push_str("\n\n");
    out.push_str(&window);
    out
}

/// Any pipeline error: syntax errors get their window, others one line.
pub fn render_error(label: &str, error: &Error, style: Style) -> String {
    match error.as_syntax() {
        Some(syntax) => render_syntax_error(syntax, style),
        None => format!("{}: {error}", style.paint(BOLD, label)),
    }
}
