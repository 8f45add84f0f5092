use crate::*;

/// Comments and directives seen since the last statement, waiting to be
/// attached to the next one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata<'a> {
    pub comments: Vec<&'a str>,
    pub returns_cursors: bool,
    pub description: Option<&'a str>,
    pub imports: Vec<&'a str>,
    /// Offset of the first buffered token.
    pub header: Option<usize>,
}

impl<'a> Metadata<'a> {
    /// Buffer a `Comment` or `Directive` token. Other kinds are ignored.
    ///
    /// Comments accumulate; a later `@returns` or `@describe` overwrites an
    /// earlier one; imports accumulate.
    pub fn push(&mut self, token: &Token<'a>) {
        match token.kind {
            TokenKind::Comment => self.comments.push(comment_text(token.text)),
            TokenKind::Directive(Directive::Returns) => {
                self.returns_cursors = token.text.to_ascii_lowercase().contains("cursor");
            }
            TokenKind::Directive(directive @ Directive::Describe) => {
                self.description = Some(payload(token.text, directive));
            }
            TokenKind::Directive(directive @ Directive::Import) => {
                self.imports.push(payload(token.text, directive));
            }
            _ => return,
        }
        self.header.get_or_insert(token.start);
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none()
    }

    /// Hand the buffer over, leaving it empty.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }
}

fn comment_text(text: &str) -> &str {
    text.trim_start_matches('-').trim()
}

/// Text after the directive's tag, trimmed.
fn payload(text: &str, directive: Directive) -> &str {
    text.find(directive.tag())
        .map_or("", |i| text[i + directive.tag().len()..].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(sql: &str) -> Metadata<'_> {
        let mut metadata = Metadata::default();
        for token in tokenize(sql).unwrap() {
            metadata.push(&token);
        }
        metadata
    }

    #[test]
    fn collects_comments_and_directives() {
        let metadata = buffer(
            "-- first\n--second  \n-- @describe  Yearly totals \n-- @import a.sql\n-- @import b.sql",
        );
        assert_eq!(metadata.comments, ["first", "second"]);
        assert_eq!(metadata.description, Some("Yearly totals"));
        assert_eq!(metadata.imports, ["a.sql", "b.sql"]);
        assert!(!metadata.returns_cursors);
        assert_eq!(metadata.header, Some(0));
    }

    #[test]
    fn last_returns_wins() {
        assert!(buffer("-- @returns rows\n-- @returns Cursors").returns_cursors);
        assert!(!buffer("-- @returns cursors\n-- @returns rows").returns_cursors);
    }

    #[test]
    fn cursors_anywhere_in_the_returns_comment() {
        assert!(buffer("-- cursors: @returns").returns_cursors);
        assert!(buffer("-- @returns refcursor").returns_cursors);
        assert!(!buffer("-- @returns a table").returns_cursors);
    }

    #[test]
    fn take_empties_the_buffer() {
        let mut metadata = buffer("-- note");
        assert!(!metadata.is_empty());
        let taken = metadata.take();
        assert_eq!(taken.comments, ["note"]);
        assert!(metadata.is_empty());
        assert_eq!(metadata, Metadata::default());
    }

    #[test]
    fn ignores_other_tokens() {
        let metadata = buffer("SELECT 1;");
        assert!(metadata.is_empty());
    }
}
