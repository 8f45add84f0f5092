use crate::*;

/// Every definition and reference marker of a script, in source order.
#[derive(Debug, Default)]
pub struct Markers {
    pub definitions: Vec<Definition>,
    pub references: Vec<Reference>,
}

/// Walks the token stream of a raw script looking for template markers.
///
/// `@` opens a definition; two touching `{` tokens open a reference and two
/// touching `}` tokens close it. Any other token is plain SQL and is skipped.
/// Inside a definition body single braces are counted so that the body ends
/// at its matching `}`.
pub struct Scanner<'a> {
    sql: &'a str,
    label: &'a str,
    tokens: Vec<Token<'a>>,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(sql: &'a str, label: &'a str) -> SyntaxResult<Self> {
        let tokens = Tokenizer::new(sql).with_label(label).tokenize()?;
        Ok(Self {
            sql,
            label,
            tokens,
            pos: 0,
        })
    }

    pub fn scan(mut self) -> SyntaxResult<Markers> {
        let mut markers = Markers::default();
        while let Some(token) = self.peek(0) {
            if token.kind == TokenKind::RefMarker {
                self.definition(&mut markers)?;
            } else if self.at_reference_open() {
                let reference = self.reference(None)?;
                markers.references.push(reference);
            } else {
                self.pos += 1;
            }
        }
        Ok(markers)
    }

    fn definition(&mut self, markers: &mut Markers) -> SyntaxResult<()> {
        let Some(marker) = self.next() else {
            return Ok(());
        };

        let first = self.expect_word("name")?;
        let (tag, name) = match self.peek(0).and_then(|t| t.word()) {
            Some(name) => {
                self.pos += 1;
                (Some(first.to_string()), name)
            }
            None => (None, first),
        };
        self.expect_group('{', "{")?;

        let mut depth = 0usize;
        let mut body: Option<(usize, usize)> = None;
        loop {
            if self.at_reference_open() {
                let reference = self.reference(Some(name))?;
                extend(&mut body, reference.open_offset, reference.close_offset);
                markers.references.push(reference);
                continue;
            }

            let Some(token) = self.next() else {
                return Err(SyntaxError::at_token(
                    ErrorKind::Preprocess,
                    "Definition not terminated.",
                    self.label,
                    self.sql,
                    &marker,
                ));
            };
            match token.kind {
                TokenKind::CloseGroup('}') if depth == 0 => {
                    let body = body.map_or("", |(start, end)| &self.sql[start..end]);
                    trace!("{}: definition {name} ({} bytes)", self.label, body.len());
                    markers.definitions.push(Definition {
                        name: name.to_string(),
                        tag,
                        start: marker.start,
                        end: token.end(),
                        body: body.to_string(),
                    });
                    return Ok(());
                }
                TokenKind::CloseGroup('}') => depth -= 1,
                TokenKind::OpenGroup('{') => depth += 1,
                _ => {}
            }
            extend(&mut body, token.start, token.end());
        }
    }

    /// Consumes `{{ name }}` with the scanner on the first `{`.
    fn reference(&mut self, owner: Option<&str>) -> SyntaxResult<Reference> {
        let open = self.tokens[self.pos];
        self.pos += 2;

        let name = self.expect_word("name")?;
        let first = self.expect_group('}', "}}")?;
        let last = self.expect_group('}', "}}")?;
        if !first.touches(&last) {
            return Err(self.unexpected(&["}}"], Some(&last)));
        }

        Ok(Reference {
            name: name.to_string(),
            open_offset: open.start,
            close_offset: last.end(),
            raw: self.sql[open.start..last.end()].to_string(),
            substitution: String::new(),
            owner: owner.map(ToString::to_string),
        })
    }

    fn at_reference_open(&self) -> bool {
        match (self.peek(0), self.peek(1)) {
            (Some(first), Some(second)) => {
                first.kind == TokenKind::OpenGroup('{')
                    && second.kind == TokenKind::OpenGroup('{')
                    && first.touches(&second)
            }
            _ => false,
        }
    }

    fn peek(&self, ahead: usize) -> Option<Token<'a>> {
        self.tokens.get(self.pos + ahead).copied()
    }

    fn next(&mut self) -> Option<Token<'a>> {
        let token = self.peek(0)?;
        self.pos += 1;
        Some(token)
    }

    fn expect_word(&mut self, expected: &str) -> SyntaxResult<&'a str> {
        let token = self.next();
        token
            .and_then(|t| t.word())
            .ok_or_else(|| self.unexpected(&[expected], token.as_ref()))
    }

    fn expect_group(&mut self, brace: char, expected: &str) -> SyntaxResult<Token<'a>> {
        let token = self.next();
        token
            .filter(|t| t.kind.is_open(brace) || t.kind.is_close(brace))
            .ok_or_else(|| self.unexpected(&[expected], token.as_ref()))
    }

    fn unexpected(&self, expected: &[&str], received: Option<&Token<'_>>) -> SyntaxError {
        SyntaxError::unexpected(ErrorKind::Preprocess, expected, received, self.label, self.sql)
    }
}

fn extend(span: &mut Option<(usize, usize)>, start: usize, end: usize) {
    *span = Some(span.map_or((start, end), |(first, _)| (first, end)));
}
