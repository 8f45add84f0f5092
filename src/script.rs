use crate::*;
use std::{collections::BTreeMap, path::Path};

/// A script and its expanded source, ready to be tokenized and parsed.
///
/// Token offsets, statement positions and error locations all refer to
/// `source`, the script after template expansion. When preprocessing is off
/// `source` is the raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlScript {
    label: String,
    raw: String,
    source: String,
    definitions: BTreeMap<String, Definition>,
}

impl SqlScript {
    /// Preprocess `raw` right away.
    pub fn new(label: impl Into<String>, raw: impl Into<String>) -> Result<Self> {
        let (label, raw) = (label.into(), raw.into());
        let Preprocessed {
            script,
            definitions,
            ..
        } = preprocess(&raw, &label)?;
        Ok(Self {
            label,
            raw,
            source: script,
            definitions,
        })
    }

    /// Take `raw` as is; template markers are left for the tokenizer.
    pub fn verbatim(label: impl Into<String>, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self {
            label: label.into(),
            source: raw.clone(),
            raw,
            definitions: BTreeMap::new(),
        }
    }

    /// Build a script the way `config` asks for.
    pub fn with_config(
        label: impl Into<String>,
        raw: impl Into<String>,
        config: &Config,
    ) -> Result<Self> {
        if config.preprocess {
            Self::new(label, raw)
        } else {
            Ok(Self::verbatim(label, raw))
        }
    }

    pub async fn read(path: impl AsRef<Path>, config: &Config) -> Result<Self> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path).await?;
        debug!("read {} ({} bytes)", path.display(), raw.len());
        Self::with_config(path.display().to_string(), raw, config)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn definitions(&self) -> &BTreeMap<String, Definition> {
        &self.definitions
    }

    pub fn is_expanded(&self) -> bool {
        self.raw != self.source
    }

    pub fn reindented(&self) -> String {
        reindent(&self.source)
    }

    pub fn tokens(&self) -> Result<Vec<Token<'_>>> {
        Ok(Tokenizer::new(&self.source)
            .with_label(&self.label)
            .tokenize()?)
    }

    pub fn statements(&self) -> Result<Vec<Statement<'_>>> {
        let tokens = self.tokens()?;
        Ok(parse(&tokens, &self.source, &self.label)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use confique::Config as _;

    #[test]
    fn templates_expand_before_parsing() -> Result {
        common_init();
        let script = SqlScript::new("users.sql", TEMPLATE_SQL)?;
        assert!(script.is_expanded());
        assert_eq!(script.definitions().len(), 2);

        let statements = script.statements()?;
        assert_eq!(statements.len(), 2);
        assert_eq!(statements[0].text, "SELECT id, created_at, updated_at FROM users;");
        assert!(statements[0].returns_cursors);
        assert_eq!(statements[1].text, "SELECT created_at, updated_at FROM logins;");
        for statement in &statements {
            let span = &script.source()[statement.start.offset..=statement.end.offset];
            assert_eq!(span, statement.text);
        }
        Ok(())
    }

    #[test]
    fn verbatim_scripts_skip_expansion() {
        let script = SqlScript::verbatim("raw.sql", "@x{1}\nSELECT 1;");
        assert!(!script.is_expanded());
        assert!(script.definitions().is_empty());
        let err = script.statements().unwrap_err();
        let syntax = err.as_syntax().expect("syntax error");
        assert_eq!(syntax.kind(), ErrorKind::Parse);
        assert_eq!(syntax.offset(), 0);
        assert_eq!(syntax.label(), "raw.sql");
    }

    #[test]
    fn errors_carry_the_script_label() {
        let err = SqlScript::new("broken.sql", "SELECT {{nope}};").unwrap_err();
        let syntax = err.as_syntax().expect("syntax error");
        assert_eq!(syntax.kind(), ErrorKind::Preprocess);
        assert_eq!(syntax.label(), "broken.sql");
        assert_eq!(syntax.offset(), 7);
    }

    #[test]
    fn lex_errors_surface_from_tokens() {
        let script = SqlScript::verbatim("lex.sql", "SELECT a : b;");
        let err = script.tokens().unwrap_err();
        assert_eq!(err.as_syntax().map(|e| e.kind()), Some(ErrorKind::Lex));
    }

    #[tokio::test]
    async fn reads_files_with_config() -> Result {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("report.sql");
        tokio::fs::write(&path, MULTI_SQL).await?;

        let config = Config::builder().load().map_err(|e| Error::Config(e.to_string()))?;
        let script = SqlScript::read(&path, &config).await?;
        assert_eq!(script.label(), path.display().to_string());
        assert_eq!(script.statements()?.len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn missing_files_are_io_errors() {
        let config = Config::builder().load().unwrap();
        let err = SqlScript::read("/definitely/not/here.sql", &config)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
