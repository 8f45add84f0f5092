use crate::*;

/// Split a token stream into statements.
///
/// `tokens` must come from `sql`; `label` only names the script in errors.
pub fn parse<'a>(
    tokens: &[Token<'a>],
    sql: &'a str,
    label: &str,
) -> SyntaxResult<Vec<Statement<'a>>> {
    Parser::new(tokens, sql, label).parse()
}

/// Statement segmenter over a token stream.
///
/// Between statements, comments and directives are buffered for the next
/// statement and stray `;` are skipped. A keyword starts a statement:
/// - `SELECT` and anything but `CREATE` run to the next `;` outside a
///   dollar-quoted string.
/// - `CREATE` must be followed by `[OR REPLACE] SCHEMA | TABLE | FUNCTION`.
///   Functions additionally balance their `BEGIN`/`END` blocks before a `;`
///   can close them.
///
/// Any other token between statements is an error. There is no recovery: the
/// first error ends the parse.
pub struct Parser<'t, 'a> {
    tokens: &'t [Token<'a>],
    sql: &'a str,
    label: &'t str,
    lines: LineMap<'a>,
    pos: usize,
    pending: Metadata<'a>,
}

/// Dollar quote opened inside a function body.
#[derive(Debug, Clone, Copy)]
struct Quote<'a> {
    tag: &'a str,
    /// Opened after the outermost block closed, as in `END $$;`.
    after_block: bool,
}

impl<'t, 'a> Parser<'t, 'a> {
    pub fn new(tokens: &'t [Token<'a>], sql: &'a str, label: &'t str) -> Self {
        Self {
            tokens,
            sql,
            label,
            lines: LineMap::new(sql),
            pos: 0,
            pending: Metadata::default(),
        }
    }

    pub fn parse(mut self) -> SyntaxResult<Vec<Statement<'a>>> {
        let mut statements = Vec::new();

        while let Some(token) = self.next() {
            if token.kind.is_trivia() {
                self.pending.push(&token);
                continue;
            }
            let (kind, end) = match token.kind {
                TokenKind::Punctuation(';') => continue,
                TokenKind::Keyword(Keyword::Create) => {
                    let kind = self.create()?;
                    let end = match kind.create_target() {
                        Some(CreateKind::Function) => self.function_body()?,
                        _ => self.terminator()?,
                    };
                    (kind, end)
                }
                TokenKind::Keyword(Keyword::Select) => {
                    (StatementKind::Select, self.terminator()?)
                }
                TokenKind::Keyword(keyword) => {
                    trace!(
                        "{}: {keyword} ({}) starts a generic statement",
                        self.label,
                        keyword.category()
                    );
                    (StatementKind::Other { keyword }, self.terminator()?)
                }
                _ => return Err(self.unexpected(&["SELECT", "CREATE"], Some(&token))),
            };

            let statement = self.finish(kind, &token, &end)?;
            debug!(
                "{}: {} statement on lines {}-{}",
                self.label, statement.kind, statement.start.line, statement.end.line
            );
            statements.push(statement);
        }

        if !self.pending.is_empty() {
            trace!("{}: trailing comments not attached to a statement", self.label);
        }
        Ok(statements)
    }

    /// After `CREATE`: `[OR REPLACE] SCHEMA | TABLE | FUNCTION`.
    fn create(&mut self) -> SyntaxResult<StatementKind> {
        let mut token = self.next();
        let mut or_replace = false;
        if token.and_then(|t| t.keyword()) == Some(Keyword::Or) {
            let replace = self.next();
            if replace.and_then(|t| t.keyword()) != Some(Keyword::Replace) {
                return Err(self.unexpected(&["REPLACE"], replace.as_ref()));
            }
            or_replace = true;
            token = self.next();
        }

        let target = match token.and_then(|t| t.keyword()) {
            Some(Keyword::Schema) => CreateKind::Schema,
            Some(Keyword::Table) => CreateKind::Table,
            Some(Keyword::Function) => CreateKind::Function,
            _ => {
                let expected: &[&str] = if or_replace {
                    &["SCHEMA", "TABLE", "FUNCTION"]
                } else {
                    &["OR", "SCHEMA", "TABLE", "FUNCTION"]
                };
                return Err(self.unexpected(expected, token.as_ref()));
            }
        };
        Ok(StatementKind::Create { target, or_replace })
    }

    /// Consume through the next `;` outside a dollar-quoted string.
    fn terminator(&mut self) -> SyntaxResult<Token<'a>> {
        let mut quote: Option<&'a str> = None;
        while let Some(token) = self.next() {
            match (token.kind, quote) {
                (TokenKind::DollarQuote, Some(tag)) if tag == token.text => quote = None,
                (TokenKind::DollarQuote, None) => quote = Some(token.text),
                (TokenKind::Punctuation(';'), None) => return Ok(token),
                _ => {}
            }
        }
        Err(self.unexpected(&[";"], None))
    }

    /// Consume a function through the `;` that follows its outermost block.
    ///
    /// `BEGIN` and `CASE` open a block, `END` closes one. `END IF` and
    /// `END LOOP` close nothing and `END CASE` closes its `CASE`. Outside a
    /// dollar quote, a `DECLARE` section stays open until the next `BEGIN`.
    fn function_body(&mut self) -> SyntaxResult<Token<'a>> {
        let mut depth = 0usize;
        let mut declaring = false;
        let mut block_closed = false;
        let mut quote: Option<Quote<'a>> = None;

        while let Some(token) = self.next() {
            match token.kind {
                TokenKind::DollarQuote => match quote {
                    Some(open) if open.tag == token.text => quote = None,
                    Some(_) => {}
                    None => {
                        quote = Some(Quote {
                            tag: token.text,
                            after_block: block_closed,
                        })
                    }
                },
                TokenKind::Keyword(Keyword::Declare) if quote.is_none() => declaring = true,
                TokenKind::Keyword(Keyword::Begin) => {
                    declaring = false;
                    depth += 1;
                }
                TokenKind::Keyword(Keyword::Case) => depth += 1,
                TokenKind::Keyword(Keyword::End) => {
                    if self.eat_end_qualifier() {
                        continue;
                    }
                    let Some(next) = depth.checked_sub(1) else {
                        return Err(SyntaxError::at_token(
                            ErrorKind::Parse,
                            "Found END without a matching BEGIN.",
                            self.label,
                            self.sql,
                            &token,
                        ));
                    };
                    depth = next;
                    block_closed |= depth == 0;
                }
                TokenKind::Punctuation(';')
                    if depth == 0 && !declaring && quote.is_none_or(|open| open.after_block) =>
                {
                    return Ok(token);
                }
                _ => {}
            }
        }
        Err(self.unexpected(&[";"], None))
    }

    /// After `END`: skips `IF`/`LOOP` (returns true) or `CASE` (returns false,
    /// the `END` still closes the `CASE` block).
    fn eat_end_qualifier(&mut self) -> bool {
        let Some(next) = self.peek() else {
            return false;
        };
        match next.keyword() {
            Some(Keyword::If) => {
                self.pos += 1;
                true
            }
            Some(Keyword::Case) => {
                self.pos += 1;
                false
            }
            _ if next.text.eq_ignore_ascii_case("LOOP") => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn finish(
        &mut self,
        kind: StatementKind,
        start: &Token<'a>,
        end: &Token<'a>,
    ) -> SyntaxResult<Statement<'a>> {
        let metadata = self.pending.take();
        let text = self
            .sql
            .get(start.start..end.end())
            .ok_or_else(|| self.error("Statement lies outside of the script.", start.start))?;

        Ok(Statement {
            kind,
            start: self.position(start.start)?,
            end: self.position(end.start)?,
            text,
            comments: metadata.comments,
            returns_cursors: metadata.returns_cursors,
            description: metadata.description,
            imports: metadata.imports,
            header: metadata.header.map(|offset| self.position(offset)).transpose()?,
        })
    }

    fn position(&self, offset: usize) -> SyntaxResult<Position> {
        let location = self
            .lines
            .locate(offset)
            .map_err(|e| self.error(e.to_string(), offset))?;
        Ok(Position {
            offset,
            line: location.row,
        })
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.tokens.get(self.pos).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek()?;
        self.pos += 1;
        Some(token)
    }

    fn error(&self, message: impl Into<String>, offset: usize) -> SyntaxError {
        SyntaxError::new(ErrorKind::Parse, message, self.label, self.sql, offset)
    }

    fn unexpected(&self, expected: &[&str], received: Option<&Token<'_>>) -> SyntaxError {
        SyntaxError::unexpected(ErrorKind::Parse, expected, received, self.label, self.sql)
    }
}
