//! Statement segmentation of tokenized scripts.
//!
//! - `statement` : `Statement`, its `Position`s and `StatementKind`.
//! - `metadata`  : Buffer of comments/directives awaiting the next statement.
//! - `parser`    : The segmenter turning `Vec<Token>` into `Vec<Statement>`.

crate::reexport!(metadata);
crate::reexport!(parser);
crate::reexport!(statement);
crate::reexport!(parser_tests, test);
