//! Token model tying a `TokenKind` to its source text.
//!
//! A `Token` borrows the exact slice it was scanned from, so the original
//! casing is always available, and records the byte offset of its first
//! character. Row/column are never stored: they are recomputed on demand with
//! a `LineMap`, because preprocessing can move text around before a script is
//! tokenized for parsing.
//!
//! See sibling modules:
//! - `keyword.rs`    for the `Keyword` enum.
//! - `token_kind.rs` for `TokenKind` classification.
//! - `tokenizer.rs`  for producing `Vec<Token>` from a raw script.
use crate::diagnostic::{LineMap, Location, PositionError};
use crate::sql::{keyword::Keyword, token_kind::TokenKind};

/// A lexical token with its text and starting byte offset.
///
/// Invariants:
/// - `text` is `script[start..start + text.len()]`
/// - tokens of one script are ordered by `start` and never overlap
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    pub start: usize,
}

impl<'a> Token<'a> {
    /// Construct a new token.
    pub const fn new(kind: TokenKind, text: &'a str, start: usize) -> Self {
        Self { kind, text, start }
    }

    /// Exclusive end offset.
    pub const fn end(&self) -> usize {
        self.start + self.text.len()
    }

    /// Byte length of this token.
    pub const fn len(&self) -> usize {
        self.text.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Width in characters, used for underlining.
    pub fn width(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns the identifier text if this token is an identifier.
    pub fn ident(&self) -> Option<&'a str> {
        self.kind.is_ident().then_some(self.text)
    }

    /// Returns the word text for identifiers and keywords alike.
    pub fn word(&self) -> Option<&'a str> {
        self.kind.is_word().then_some(self.text)
    }

    /// Returns true if this token represents a given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        self.kind.is_keyword(kw)
    }

    pub fn keyword(&self) -> Option<Keyword> {
        self.kind.keyword()
    }

    /// True if `next` starts exactly where this token ends.
    pub fn touches(&self, next: &Token<'_>) -> bool {
        self.end() == next.start
    }

    /// Row/column of the first character.
    pub fn location(&self, lines: &LineMap<'_>) -> Result<Location, PositionError> {
        lines.locate(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::{keyword::Keyword, token_kind::TokenKind};

    #[test]
    fn length_and_span() {
        let t = Token::new(TokenKind::Punctuation(','), ",", 5);
        assert_eq!(t.len(), 1);
        assert_eq!(t.end(), 6);
        assert!(!t.is_empty());
    }

    #[test]
    fn ident_access() {
        let t = Token::new(TokenKind::Ident, "Users", 0);
        assert_eq!(t.ident(), Some("Users"));
        assert_eq!(t.word(), Some("Users"));
    }

    #[test]
    fn keyword_detection() {
        let t = Token::new(TokenKind::Keyword(Keyword::Select), "select", 0);
        assert!(t.is_keyword(Keyword::Select));
        assert!(!t.is_keyword(Keyword::From));
        assert_eq!(t.ident(), None);
        assert_eq!(t.word(), Some("select"));
    }

    #[test]
    fn adjacency() {
        let a = Token::new(TokenKind::OpenGroup('{'), "{", 3);
        let b = Token::new(TokenKind::OpenGroup('{'), "{", 4);
        let c = Token::new(TokenKind::OpenGroup('{'), "{", 6);
        assert!(a.touches(&b));
        assert!(!b.touches(&c));
    }

    #[test]
    fn location_is_computed_lazily() {
        let sql = "SELECT\n  1;";
        let lines = LineMap::new(sql);
        let one = Token::new(TokenKind::Number, "1", 9);
        let location = one.location(&lines).expect("in bounds");
        assert_eq!((location.row, location.column), (2, 2));
    }
}
