use crate::*;
use std::{iter::Peekable, str::CharIndices};

/// Label used when a caller has no file path for the script.
pub const DEFAULT_LABEL: &str = "<script>";

/// Tokenize a script labelled [`DEFAULT_LABEL`].
pub fn tokenize(sql: &str) -> SyntaxResult<Vec<Token<'_>>> {
    Tokenizer::new(sql).tokenize()
}

/// Single pass SQL tokenizer producing a flat stream of `Token`s.
///
/// Behavior:
/// - Skips whitespace without emitting tokens.
/// - Aggregates `[A-Za-z_]` initiated runs of `[A-Za-z_./]` into words,
///   upper-cases each word once to classify it against the keyword table.
/// - Digit runs become `Number`; `4.5` is `Number`, `.`, `Number`.
/// - `--` comments run to the end of the line and are classified by the
///   directive tag they contain.
/// - Only `:` not followed by `=` or `:` is an error. Everything else that is
///   not recognized becomes `Other(char)` for the parser to reject.
///
/// Complexity:
/// - O(n) time, O(t) space where `t` is number of tokens.
pub struct Tokenizer<'a> {
    sql: &'a str,
    label: &'a str,
    chars: Peekable<CharIndices<'a>>,
}

impl<'a> Tokenizer<'a> {
    pub fn new(sql: &'a str) -> Self {
        Self {
            sql,
            label: DEFAULT_LABEL,
            chars: sql.char_indices().peekable(),
        }
    }

    /// Source label reported by lex errors.
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    pub fn tokenize(mut self) -> SyntaxResult<Vec<Token<'a>>> {
        let mut out = Vec::new();

        while let Some((start, c)) = self.chars.next() {
            if c.is_whitespace() {
                continue;
            }

            let kind = match c {
                c if c.is_ascii_alphabetic() || c == '_' => {
                    let end = self.eat_while(is_word_char);
                    let upper = self.sql[start..end].to_ascii_uppercase();
                    Keyword::from_upper(&upper)
                        .map(TokenKind::Keyword)
                        .unwrap_or(TokenKind::Ident)
                }
                c if c.is_ascii_digit() => {
                    self.eat_while(|ch| ch.is_ascii_digit());
                    TokenKind::Number
                }
                '.' | ',' | ';' | '=' | '"' | '\'' | '*' => TokenKind::Punctuation(c),
                '(' | '[' | '{' => TokenKind::OpenGroup(c),
                ')' | ']' | '}' => TokenKind::CloseGroup(c),
                '-' if self.eat_if('-') => {
                    let end = self.eat_while(|ch| ch != '\n' && ch != '\r');
                    Directive::classify(&self.sql[start..end])
                        .map(TokenKind::Directive)
                        .unwrap_or(TokenKind::Comment)
                }
                '-' | '+' => TokenKind::Arithmetic(c),
                ':' if self.eat_if('=') => TokenKind::Assignment,
                ':' if self.eat_if(':') => TokenKind::Cast,
                ':' => return Err(self.colon_error()),
                '@' => TokenKind::RefMarker,
                '$' if self.eat_dollar_quote() => TokenKind::DollarQuote,
                other => TokenKind::Other(other),
            };

            let end = self.offset();
            out.push(Token::new(kind, &self.sql[start..end], start));
        }

        trace!("{}: {} tokens", self.label, out.len());
        Ok(out)
    }

    /// Offset of the next unconsumed character.
    fn offset(&mut self) -> usize {
        self.chars.peek().map_or(self.sql.len(), |(i, _)| *i)
    }

    fn eat_if(&mut self, expected: char) -> bool {
        self.chars.next_if(|(_, ch)| *ch == expected).is_some()
    }

    /// Consume while `pred` holds and return the end offset of the run.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> usize {
        while self.chars.next_if(|(_, ch)| pred(*ch)).is_some() {}
        self.offset()
    }

    /// Called after a `$`. Consumes the rest of `$$` or `$tag$`, or nothing.
    ///
    /// A tag starts with a letter or `_` and may continue with digits, so
    /// `$1` stays a `$` followed by a number.
    fn eat_dollar_quote(&mut self) -> bool {
        let mut ahead = self.chars.clone();
        if ahead
            .next_if(|(_, ch)| ch.is_ascii_alphabetic() || *ch == '_')
            .is_some()
        {
            while ahead
                .next_if(|(_, ch)| ch.is_ascii_alphanumeric() || *ch == '_')
                .is_some()
            {}
        }
        if ahead.next_if(|(_, ch)| *ch == '$').is_some() {
            self.chars = ahead;
            return true;
        }
        false
    }

    /// The offending character is the one after the `:`.
    fn colon_error(&mut self) -> SyntaxError {
        let (offset, received) = match self.chars.peek() {
            Some((i, ch)) => (*i, ch.to_string()),
            None => (self.sql.len(), "end of input".to_string()),
        };
        SyntaxError::new(
            ErrorKind::Lex,
            expected_message(&["="], &received),
            self.label,
            self.sql,
            offset,
        )
    }
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '.' | '/')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kinds(sql: &str) -> Vec<TokenKind> {
        tokenize(sql)
            .expect("tokenizes")
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    fn texts(sql: &str) -> Vec<&str> {
        tokenize(sql)
            .expect("tokenizes")
            .into_iter()
            .map(|t| t.text)
            .collect()
    }

    #[test]
    fn basic_select_sequence() {
        let toks = tokenize("SELECT * FROM my_schema.myfunction()").unwrap();
        let expected = [
            (TokenKind::Keyword(Keyword::Select), "SELECT", 0),
            (TokenKind::Punctuation('*'), "*", 7),
            (TokenKind::Keyword(Keyword::From), "FROM", 9),
            (TokenKind::Ident, "my_schema.myfunction", 14),
            (TokenKind::OpenGroup('('), "(", 34),
            (TokenKind::CloseGroup(')'), ")", 35),
        ];
        let actual = toks
            .iter()
            .map(|t| (t.kind, t.text, t.start))
            .collect::<Vec<_>>();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case("SELECT")]
    #[case("select")]
    #[case("SeLeCt")]
    fn keywords_are_case_insensitive_and_keep_case(#[case] sql: &str) {
        let toks = tokenize(sql).unwrap();
        assert_eq!(toks.len(), 1);
        assert!(toks[0].is_keyword(Keyword::Select));
        assert_eq!(toks[0].text, sql);
    }

    #[test]
    fn preserves_case_for_identifiers() {
        let toks = tokenize("From MyTable").unwrap();
        assert!(toks[0].is_keyword(Keyword::From));
        assert_eq!(toks[1].ident(), Some("MyTable"));
    }

    #[test]
    fn decimal_splits_into_three_tokens() {
        assert_eq!(
            kinds("4.5"),
            [
                TokenKind::Number,
                TokenKind::Punctuation('.'),
                TokenKind::Number
            ]
        );
        assert_eq!(texts("4.5"), ["4", ".", "5"]);
    }

    #[test]
    fn digits_end_a_word() {
        assert_eq!(texts("col1"), ["col", "1"]);
    }

    #[rstest]
    #[case("-- plain comment", TokenKind::Comment)]
    #[case("-- @returns cursors", TokenKind::Directive(Directive::Returns))]
    #[case("--@describe Yearly summary", TokenKind::Directive(Directive::Describe))]
    #[case("-- @import ./common.sql", TokenKind::Directive(Directive::Import))]
    fn comments_are_classified(#[case] sql: &str, #[case] kind: TokenKind) {
        let toks = tokenize(sql).unwrap();
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0].kind, kind);
        assert_eq!(toks[0].text, sql);
    }

    #[test]
    fn comment_stops_before_newline() {
        let toks = tokenize("-- one\r\nSELECT").unwrap();
        assert_eq!(toks[0].text, "-- one");
        assert!(toks[1].is_keyword(Keyword::Select));
        assert_eq!(toks[1].start, 8);
    }

    #[test]
    fn lone_minus_is_arithmetic() {
        assert_eq!(
            kinds("1 - 2 + 3"),
            [
                TokenKind::Number,
                TokenKind::Arithmetic('-'),
                TokenKind::Number,
                TokenKind::Arithmetic('+'),
                TokenKind::Number
            ]
        );
    }

    #[test]
    fn minus_at_end_of_input() {
        assert_eq!(kinds("-"), [TokenKind::Arithmetic('-')]);
    }

    #[test]
    fn assignment_and_cast() {
        assert_eq!(
            kinds("x := y::int"),
            [
                TokenKind::Ident,
                TokenKind::Assignment,
                TokenKind::Ident,
                TokenKind::Cast,
                TokenKind::Keyword(Keyword::Int)
            ]
        );
    }

    #[rstest]
    #[case("a : b", 3, 1, 3)]
    #[case("a :", 3, 1, 3)]
    fn bare_colon_is_a_lex_error(
        #[case] sql: &str,
        #[case] offset: usize,
        #[case] row: usize,
        #[case] column: usize,
    ) {
        let err = tokenize(sql).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Lex);
        assert_eq!(err.offset(), offset);
        assert_eq!((err.row(), err.column()), (row, column));
        assert!(err.message().starts_with("Expected \"=\""), "{}", err.message());
    }

    #[test]
    fn groups_and_markers() {
        assert_eq!(
            kinds("@q {{name}} [1]"),
            [
                TokenKind::RefMarker,
                TokenKind::Ident,
                TokenKind::OpenGroup('{'),
                TokenKind::OpenGroup('{'),
                TokenKind::Ident,
                TokenKind::CloseGroup('}'),
                TokenKind::CloseGroup('}'),
                TokenKind::OpenGroup('['),
                TokenKind::Number,
                TokenKind::CloseGroup(']'),
            ]
        );
    }

    #[rstest]
    #[case("$$", &["$$"])]
    #[case("$body$ x $body$", &["$body$", "x", "$body$"])]
    #[case("$fn1$ x $fn1$", &["$fn1$", "x", "$fn1$"])]
    #[case("$_2$", &["$_2$"])]
    #[case("$1", &["$", "1"])]
    #[case("$1$", &["$", "1", "$"])]
    #[case("$ab", &["$", "ab"])]
    fn dollar_quotes(#[case] sql: &str, #[case] expected: &[&str]) {
        assert_eq!(texts(sql), expected);
    }

    #[test]
    fn unknown_characters_become_other() {
        assert_eq!(
            kinds("a > b / é"),
            [
                TokenKind::Ident,
                TokenKind::Other('>'),
                TokenKind::Ident,
                TokenKind::Other('/'),
                TokenKind::Other('é'),
            ]
        );
    }

    #[test]
    fn offsets_are_bytes_on_char_boundaries() {
        let sql = "é SELECT";
        let toks = tokenize(sql).unwrap();
        assert_eq!(toks[1].start, 3);
        assert_eq!(&sql[toks[1].start..toks[1].end()], "SELECT");
    }

    #[test]
    fn tokens_are_ordered_and_disjoint() {
        let sql = "-- @returns cursors\nSELECT a.b, \"c\" FROM t WHERE x = 'y' AND n := 4.5;";
        let toks = tokenize(sql).unwrap();
        for pair in toks.windows(2) {
            assert!(pair[0].end() <= pair[1].start, "{pair:?}");
        }
        for t in &toks {
            assert_eq!(&sql[t.start..t.end()], t.text);
        }
    }

    #[test]
    fn single_punctuation_yields_one_token_per_char() {
        use rand::{Rng, seq::IndexedRandom};

        const ALPHABET: &[char] = &['.', ',', ';', '=', '"', '\'', '*', '(', ')', '[', ']'];
        const SPACES: &[&str] = &[" ", "\t", "\n", "  "];
        let mut rng = rand::rng();

        for _ in 0..50 {
            let len = rng.random_range(1..40);
            let chars = (0..len)
                .map(|_| *ALPHABET.choose(&mut rng).unwrap())
                .collect::<Vec<_>>();
            let mut sql = String::new();
            for c in &chars {
                sql.push(*c);
                sql.push_str(SPACES.choose(&mut rng).unwrap());
            }

            let toks = tokenize(&sql).unwrap();
            assert_eq!(toks.len(), chars.len(), "{sql:?}");
            for (tok, c) in toks.iter().zip(&chars) {
                assert_eq!(tok.text.chars().next(), Some(*c));
            }
            assert!(toks.windows(2).all(|w| w[0].start < w[1].start));
        }
    }

    #[test]
    fn empty_and_whitespace_only() {
        assert!(tokenize("").unwrap().is_empty());
        assert!(tokenize(" \t\n\r\n ").unwrap().is_empty());
    }
}
