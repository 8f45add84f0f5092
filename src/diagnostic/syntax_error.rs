use crate::*;
use itertools::Itertools as _;
use std::fmt;

pub type SyntaxResult<T> = std::result::Result<T, SyntaxError>;

/// Lines of source shown above and below the offending line.
pub const CONTEXT_LINES: usize = 3;

/// Stage that rejected the script.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    #[display("LexError")]
    Lex,
    #[display("PreprocessError")]
    Preprocess,
    #[display("ParseError")]
    Parse,
}

/// One line of the rendered context window.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SnippetLine {
    Source { row: usize, text: String },
    /// Underline placed below the offending column. `pad` keeps tabs so the
    /// marker lines up with the source line above it.
    Marker { pad: String, width: usize },
}

/// A positioned error with a pre-rendered source context.
///
/// Everything is computed in the constructor; the value is immutable
/// afterwards. Construction never fails: if the offset cannot be located in
/// the script, the error degrades to its bare message with `row`/`column` 0
/// and an empty snippet.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SyntaxError {
    kind: ErrorKind,
    message: String,
    label: String,
    offset: usize,
    location: Option<Location>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    expected: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    received: Option<String>,
    lines: Vec<SnippetLine>,
    snippet: String,
}

impl SyntaxError {
    pub fn new(
        kind: ErrorKind,
        message: impl Into<String>,
        label: &str,
        script: &str,
        offset: usize,
    ) -> Self {
        Self::spanning(kind, message, label, script, offset, 1)
    }

    /// Like [`SyntaxError::new`] with an underline `width` characters wide.
    pub fn spanning(
        kind: ErrorKind,
        message: impl Into<String>,
        label: &str,
        script: &str,
        offset: usize,
        width: usize,
    ) -> Self {
        let (location, lines) = match context(&LineMap::new(script), offset, width) {
            Ok((location, lines)) => (Some(location), lines),
            Err(e) => {
                warn!("{label}: no source context for error: {e}");
                (None, Vec::new())
            }
        };
        let snippet = render(&lines);

        Self {
            kind,
            message: message.into(),
            label: label.to_string(),
            offset,
            location,
            expected: Vec::new(),
            received: None,
            lines,
            snippet,
        }
    }

    /// Error underlining `token`.
    pub fn at_token(
        kind: ErrorKind,
        message: impl Into<String>,
        label: &str,
        script: &str,
        token: &Token<'_>,
    ) -> Self {
        Self::spanning(kind, message, label, script, token.start, token.width())
    }

    /// `Expected "A" or "B" but received "x".` for `received`, or for the end
    /// of the script when `received` is `None`.
    pub fn unexpected(
        kind: ErrorKind,
        expected: &[&str],
        received: Option<&Token<'_>>,
        label: &str,
        script: &str,
    ) -> Self {
        let (offset, width, text) = match received {
            Some(token) => (token.start, token.width(), token.text),
            None => (script.len(), 1, END_OF_INPUT),
        };
        let message = expected_message(expected, text);
        Self {
            expected: expected.iter().map(ToString::to_string).collect(),
            received: Some(text.to_string()),
            ..Self::spanning(kind, message, label, script, offset, width)
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn location(&self) -> Option<Location> {
        self.location
    }

    /// 1-based row, 0 when the offset could not be located.
    pub fn row(&self) -> usize {
        self.location.map_or(0, |l| l.row)
    }

    /// 0-based column in characters.
    pub fn column(&self) -> usize {
        self.location.map_or(0, |l| l.column)
    }

    pub fn expected(&self) -> &[String] {
        &self.expected
    }

    pub fn received(&self) -> Option<&str> {
        self.received.as_deref()
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn snippet_lines(&self) -> &[SnippetLine] {
        &self.lines
    }
}

/// `{label}:{row}:{column} - {kind}: {message}`; the alternate form (`{:#}`)
/// appends the snippet.
impl fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.location {
            Some(Location { row, column }) => write!(
                f,
                "{}:{row}:{column} - {}: {}",
                self.label, self.kind, self.message
            )?,
            None => write!(f, "{}: {}: {}", self.label, self.kind, self.message)?,
        }
        if f.alternate() && !self.snippet.is_empty() {
            write!(f, "\n\n{}", self.snippet)?;
        }
        Ok(())
    }
}

impl std::error::Error for SyntaxError {}

pub const END_OF_INPUT: &str = "end of input";

pub fn expected_message(expected: &[&str], received: &str) -> String {
    let expected = expected.iter().map(|e| format!("\"{e}\"")).join(" or ");
    format!("Expected {expected} but received \"{received}\".")
}

/// `^` followed by `~` up to `width` characters.
pub fn underline(width: usize) -> String {
    format!("^{}", "~".repeat(width.saturating_sub(1)))
}

/// Width of the row-number gutter for a set of lines.
pub fn gutter_width(lines: &[SnippetLine]) -> usize {
    lines
        .iter()
        .filter_map(|line| match line {
            SnippetLine::Source { row, .. } => Some(*row),
            SnippetLine::Marker { .. } => None,
        })
        .max()
        .unwrap_or(0)
        .to_string()
        .len()
}

fn context(
    lines: &LineMap<'_>,
    offset: usize,
    width: usize,
) -> std::result::Result<(Location, Vec<SnippetLine>), PositionError> {
    let location = lines.locate(offset)?;
    let first = location.row.saturating_sub(CONTEXT_LINES).max(1);
    let last = (location.row + CONTEXT_LINES).min(lines.line_count());

    let mut out = Vec::with_capacity(last - first + 2);
    for row in first..=last {
        let text = lines.line(row).unwrap_or_default();
        out.push(SnippetLine::Source {
            row,
            text: text.to_string(),
        });
        if row == location.row {
            let pad = lines
                .prefix(location)
                .unwrap_or_default()
                .chars()
                .map(|c| if c == '\t' { '\t' } else { ' ' })
                .collect();
            out.push(SnippetLine::Marker {
                pad,
                width: width.max(1),
            });
        }
    }
    Ok((location, out))
}

fn render(lines: &[SnippetLine]) -> String {
    let gutter = gutter_width(lines);
    lines
        .iter()
        .map(|line| match line {
            SnippetLine::Source { row, text } => format!("{row:>gutter$} | {text}"),
            SnippetLine::Marker { pad, width } => {
                format!("{:>gutter$} | {pad}{}", "", underline(*width))
            }
        })
        .join("\n")
}
