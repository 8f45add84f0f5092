//! SQL tokenization: the first stage of every script pipeline.
//!
//! Modules:
//! - `keyword`    : PostgreSQL keyword table with grammar categories.
//! - `token_kind` : Classification of lexical atoms.
//! - `token`      : Token struct pairing a `TokenKind` with its source slice.
//! - `tokenizer`  : Single pass O(n) tokenizer producing a `Vec<Token>`.
//!
//! Design Principles:
//! 1. Never drop input: unrecognized characters become `Other` tokens and are
//!    rejected (or ignored) by whichever stage consumes them.
//! 2. Preserve original casing; keywords are normalized once, at scan time.
//! 3. Offsets are byte offsets into the scanned script and are converted to
//!    row/column only when needed.
//!
//! NOTE: This is **not** a full SQL grammar. It classifies just enough to
//! bound statements and resolve template markers.

pub mod keyword;
pub mod token;
pub mod token_kind;
pub mod tokenizer;

pub use keyword::Keyword;
pub use token::Token;
pub use token_kind::{Directive, TokenKind};
pub use tokenizer::{DEFAULT_LABEL, Tokenizer, tokenize};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_and_access() {
        let tokens = tokenize("SELECT col FROM tbl").unwrap();
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::Select)));
        assert!(tokens.iter().any(|t| t.is_keyword(Keyword::From)));
        assert!(tokens.iter().any(|t| t.ident() == Some("col")));
        assert!(tokens.iter().any(|t| t.ident() == Some("tbl")));
    }

    #[test]
    fn directives_and_words() {
        let toks = tokenize("-- @describe x\nFROM X").unwrap();
        assert_eq!(toks[0].kind, TokenKind::Directive(Directive::Describe));
        assert!(toks[1].is_keyword(Keyword::From));
        assert!(toks.iter().any(|t| t.ident() == Some("X")));
    }

    #[test]
    fn labelled_tokenizer_reports_label() {
        let err = Tokenizer::new("a : b")
            .with_label("queries/report.sql")
            .tokenize()
            .unwrap_err();
        assert_eq!(err.label(), "queries/report.sql");
    }
}
