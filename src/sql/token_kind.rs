//! Token kind definitions for the script tokenizer.
//!
//! Each `TokenKind` variant represents a lexical atom discovered during the
//! single scanning pass. The text of a token lives on `Token` itself; kinds
//! only carry what comparisons need (the keyword, the punctuation char, the
//! directive tag), so the parser never re-normalizes strings.
//!
//! See `keyword.rs` for the `Keyword` enum and `tokenizer.rs` for tokenization.

use crate::sql::keyword::Keyword;

/// Tool-level tag found inside a `--` line comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Directive {
    #[display("@returns")]
    Returns,
    #[display("@describe")]
    Describe,
    #[display("@import")]
    Import,
}

impl Directive {
    /// Tags in the order a comment is tested against them.
    pub const ALL: [Self; 3] = [Directive::Returns, Directive::Describe, Directive::Import];

    pub const fn tag(self) -> &'static str {
        match self {
            Directive::Returns => "@returns",
            Directive::Describe => "@describe",
            Directive::Import => "@import",
        }
    }

    /// Classify a comment by substring containment of a tag.
    pub fn classify(comment: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| comment.contains(d.tag()))
    }
}

/// Classification for a token produced by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, serde::Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum TokenKind {
    /// Recognized SQL keyword.
    #[display("keyword")]
    Keyword(Keyword),
    /// Identifier, qualified name (`schema.function`) or bare word.
    #[display("identifier")]
    Ident,
    /// Run of decimal digits.
    #[display("number")]
    Number,
    /// One of `. , ; = " ' *`.
    #[display("punctuation")]
    Punctuation(char),
    /// `(`, `[` or `{`.
    #[display("open group")]
    OpenGroup(char),
    /// `)`, `]` or `}`.
    #[display("close group")]
    CloseGroup(char),
    /// `+` or a lone `-`.
    #[display("arithmetic")]
    Arithmetic(char),
    /// `:=`.
    #[display("assignment")]
    Assignment,
    /// `::`.
    #[display("cast")]
    Cast,
    /// `--` comment without a directive tag.
    #[display("comment")]
    Comment,
    /// `--` comment carrying a directive tag.
    #[display("directive")]
    Directive(Directive),
    /// `@`, the start of a template definition.
    #[display("reference marker")]
    RefMarker,
    /// `$$` or `$tag$`.
    #[display("dollar quote")]
    DollarQuote,
    /// Any other single character we do not specially classify.
    #[display("other")]
    Other(char),
}

impl TokenKind {
    /// True if this token is the given keyword.
    pub fn is_keyword(&self, kw: Keyword) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == kw)
    }

    pub fn keyword(&self) -> Option<Keyword> {
        match self {
            TokenKind::Keyword(kw) => Some(*kw),
            _ => None,
        }
    }

    /// Convenience: returns true if this token represents any identifier.
    pub fn is_ident(&self) -> bool {
        matches!(self, TokenKind::Ident)
    }

    /// Identifiers and keywords both come from a letter-initiated word run.
    pub fn is_word(&self) -> bool {
        matches!(self, TokenKind::Ident | TokenKind::Keyword(_))
    }

    /// Plain comments and directive comments.
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Comment | TokenKind::Directive(_))
    }

    pub fn is_open(&self, c: char) -> bool {
        matches!(self, TokenKind::OpenGroup(p) if *p == c)
    }

    pub fn is_close(&self, c: char) -> bool {
        matches!(self, TokenKind::CloseGroup(p) if *p == c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::keyword::Keyword;

    #[test]
    fn keyword_detection() {
        let tk = TokenKind::Keyword(Keyword::Select);
        assert!(tk.is_keyword(Keyword::Select));
        assert!(!tk.is_keyword(Keyword::From));
        assert_eq!(tk.keyword(), Some(Keyword::Select));
        assert!(tk.is_word());
    }

    #[test]
    fn group_helpers() {
        assert!(TokenKind::OpenGroup('{').is_open('{'));
        assert!(!TokenKind::OpenGroup('(').is_open('{'));
        assert!(TokenKind::CloseGroup('}').is_close('}'));
    }

    #[test]
    fn trivia_classification() {
        assert!(TokenKind::Comment.is_trivia());
        assert!(TokenKind::Directive(Directive::Import).is_trivia());
        assert!(!TokenKind::Ident.is_trivia());
    }

    #[test]
    fn directive_classification_order() {
        assert_eq!(
            Directive::classify("-- @returns cursors"),
            Some(Directive::Returns)
        );
        assert_eq!(
            Directive::classify("-- @describe yearly report"),
            Some(Directive::Describe)
        );
        assert_eq!(
            Directive::classify("-- @import ./shared.sql"),
            Some(Directive::Import)
        );
        assert_eq!(
            Directive::classify("-- @returns and @describe"),
            Some(Directive::Returns)
        );
        assert_eq!(Directive::classify("-- plain"), None);
    }
}
