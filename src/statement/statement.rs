use crate::*;
use std::fmt;

/// Byte offset of a statement boundary and its 1-based line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
}

/// Object created by a `CREATE` statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CreateKind {
    #[display("TABLE")]
    Table,
    #[display("SCHEMA")]
    Schema,
    #[display("FUNCTION")]
    Function,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StatementKind {
    Select,
    Create { target: CreateKind, or_replace: bool },
    /// Any other statement, named by its leading keyword.
    Other { keyword: Keyword },
}

impl StatementKind {
    pub fn create_target(&self) -> Option<CreateKind> {
        match self {
            StatementKind::Create { target, .. } => Some(*target),
            _ => None,
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatementKind::Select => write!(f, "SELECT"),
            StatementKind::Create {
                target,
                or_replace: true,
            } => write!(f, "CREATE OR REPLACE {target}"),
            StatementKind::Create { target, .. } => write!(f, "CREATE {target}"),
            StatementKind::Other { keyword } => write!(f, "{keyword}"),
        }
    }
}

/// One top-level statement of a script.
///
/// `text` is `script[start.offset..=end.offset]`: from the leading keyword
/// through the terminating `;`. Metadata comes from the comments and
/// directives directly above the statement.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Statement<'a> {
    pub kind: StatementKind,
    pub start: Position,
    pub end: Position,
    pub text: &'a str,
    /// Plain comments, without their `--`.
    pub comments: Vec<&'a str>,
    pub returns_cursors: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub imports: Vec<&'a str>,
    /// Where the first attached comment starts; editors anchor annotations
    /// here rather than on the statement itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Position>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_display() {
        let create = |target, or_replace| StatementKind::Create { target, or_replace };
        assert_eq!(StatementKind::Select.to_string(), "SELECT");
        assert_eq!(create(CreateKind::Table, false).to_string(), "CREATE TABLE");
        assert_eq!(
            create(CreateKind::Function, true).to_string(),
            "CREATE OR REPLACE FUNCTION"
        );
        let other = StatementKind::Other {
            keyword: Keyword::Insert,
        };
        assert_eq!(other.to_string(), "INSERT");
        assert_eq!(other.create_target(), None);
    }

    #[test]
    fn kind_serializes_tagged() {
        let kind = StatementKind::Create {
            target: CreateKind::Schema,
            or_replace: false,
        };
        assert_eq!(
            serde_json::to_string(&kind).unwrap(),
            r#"{"type":"create","target":"SCHEMA","or_replace":false}"#
        );
        assert_eq!(
            serde_json::to_string(&StatementKind::Other {
                keyword: Keyword::Declare
            })
            .unwrap(),
            r#"{"type":"other","keyword":"DECLARE"}"#
        );
    }
}
