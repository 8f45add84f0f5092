//! Template preprocessing of raw scripts.
//!
//! A script may declare reusable fragments with `@name{...}` (optionally
//! `@tag name{...}`) and use them with `{{name}}`:
//!
//! ```text
//! @columns{id, name}
//! SELECT {{columns}} FROM users;
//! ```
//!
//! Modules:
//! - `definition` : `Definition` and `Reference` records.
//! - `scanner`    : Finds markers in the token stream of the raw script.
//! - `format`     : `reindent`, used on expanded output.
//!
//! Declarations are removed from the output and every reference is replaced
//! with the fully expanded body of its definition. Definitions may be used
//! before they are declared. Cycles, duplicates and unknown names are errors.
use std::collections::{BTreeMap, HashMap};

use crate::*;
use itertools::Itertools as _;

crate::reexport!(definition);
crate::reexport!(format);
crate::reexport!(scanner);

/// Result of [`preprocess`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Preprocessed {
    /// The script with declarations removed and references substituted.
    pub script: String,
    pub definitions: BTreeMap<String, Definition>,
    /// Every reference in source order, top-level and nested alike.
    pub references: Vec<Reference>,
}

impl Preprocessed {
    /// True when the script held no markers at all.
    pub fn is_passthrough(&self) -> bool {
        self.definitions.is_empty() && self.references.is_empty()
    }
}

/// Expand template markers in `sql`. `label` only names the script in errors.
pub fn preprocess(sql: &str, label: &str) -> SyntaxResult<Preprocessed> {
    let Markers {
        definitions,
        mut references,
    } = Scanner::new(sql, label)?.scan()?;

    let mut table = BTreeMap::new();
    for definition in &definitions {
        if table.contains_key(&definition.name) {
            return Err(SyntaxError::spanning(
                ErrorKind::Preprocess,
                format!("Definition \"{}\" is already defined.", definition.name),
                label,
                sql,
                definition.start,
                1 + definition.name.chars().count(),
            ));
        }
        table.insert(definition.name.clone(), definition.clone());
    }

    let expanded = Expander::new(sql, label, &table, &references).run()?;
    for reference in &mut references {
        reference.substitution = expanded
            .get(&reference.name)
            .cloned()
            .unwrap_or_default();
    }

    // Declarations are excised in source order; `removed` shifts each span by
    // what earlier excisions already took out.
    let mut script = sql.to_string();
    let mut removed = 0;
    for definition in &definitions {
        script.replace_range(definition.start - removed..definition.end - removed, "");
        removed += definition.declared_len();
    }

    for reference in references
        .iter()
        .filter(|r| r.is_top_level())
        .unique_by(|r| r.raw.as_str())
    {
        script = script.replace(&reference.raw, &reference.substitution);
    }

    let preprocessed = Preprocessed {
        script,
        definitions: table,
        references,
    };
    if preprocessed.is_passthrough() {
        trace!("{label}: no template markers");
    } else {
        debug!(
            "{label}: {} definitions, {} references",
            preprocessed.definitions.len(),
            preprocessed.references.len()
        );
    }
    Ok(preprocessed)
}

/// Expands every referenced definition once, depth first.
struct Expander<'a> {
    sql: &'a str,
    label: &'a str,
    definitions: &'a BTreeMap<String, Definition>,
    references: &'a [Reference],
    expanded: HashMap<String, String>,
    stack: Vec<&'a str>,
}

impl<'a> Expander<'a> {
    fn new(
        sql: &'a str,
        label: &'a str,
        definitions: &'a BTreeMap<String, Definition>,
        references: &'a [Reference],
    ) -> Self {
        Self {
            sql,
            label,
            definitions,
            references,
            expanded: HashMap::new(),
            stack: Vec::new(),
        }
    }

    /// Top-level references go first so that cycles are reported in the
    /// order a reader follows them.
    fn run(mut self) -> SyntaxResult<HashMap<String, String>> {
        let references = self.references;
        for reference in references.iter().sorted_by_key(|r| !r.is_top_level()) {
            self.expand(reference)?;
        }
        Ok(self.expanded)
    }

    fn expand(&mut self, via: &'a Reference) -> SyntaxResult<String> {
        if let Some(done) = self.expanded.get(&via.name) {
            return Ok(done.clone());
        }
        let (definitions, references) = (self.definitions, self.references);
        let Some(definition) = definitions.get(&via.name) else {
            return Err(self.error(via, format!("Reference \"{}\" is not defined.", via.name)));
        };
        if self.stack.contains(&via.name.as_str()) {
            let chain = self.stack.iter().chain([&via.name.as_str()]).join(" -> ");
            return Err(self.error(
                via,
                format!("Definition \"{}\" references itself: {chain}.", via.name),
            ));
        }

        self.stack.push(&via.name);
        let mut body = definition.body.clone();
        let nested = references
            .iter()
            .filter(|r| r.owner.as_ref() == Some(&definition.name));
        for reference in nested {
            let substitution = self.expand(reference)?;
            body = body.replace(&reference.raw, &substitution);
        }
        self.stack.pop();

        trace!("{}: expanded {}", self.label, via.name);
        self.expanded.insert(via.name.clone(), body.clone());
        Ok(body)
    }

    fn error(&self, at: &Reference, message: String) -> SyntaxError {
        SyntaxError::spanning(
            ErrorKind::Preprocess,
            message,
            self.label,
            self.sql,
            at.open_offset,
            at.width(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn expand(sql: &str) -> String {
        preprocess(sql, DEFAULT_LABEL).unwrap().script
    }

    fn failure(sql: &str) -> SyntaxError {
        preprocess(sql, "t.sql").unwrap_err()
    }

    #[test]
    fn greeting_round_trip() {
        let out = preprocess("@greeting{Hello}\n{{greeting}}, world", DEFAULT_LABEL).unwrap();
        assert_eq!(out.script.trim(), "Hello, world");
        assert_eq!(out.definitions.len(), 1);
        assert_eq!(out.definitions["greeting"].body, "Hello");
        assert_eq!(out.references[0].substitution, "Hello");

        let again = preprocess(&out.script, DEFAULT_LABEL).unwrap();
        assert_eq!(again.script, out.script);
        assert!(again.is_passthrough());
    }

    #[rstest]
    #[case("SELECT 1;")]
    #[case("")]
    #[case("SELECT '{' || '}';\n-- @describe x\nSELECT 2;")]
    fn scripts_without_markers_pass_through(#[case] sql: &str) {
        assert_eq!(expand(sql), sql);
    }

    #[test]
    fn unresolved_reference_points_at_marker() {
        let err = failure("{{missing}}");
        assert_eq!(err.kind(), ErrorKind::Preprocess);
        assert_eq!(err.offset(), 0);
        assert_eq!((err.row(), err.column()), (1, 0));
        assert_eq!(err.message(), "Reference \"missing\" is not defined.");
        assert!(err.snippet().ends_with("1 | {{missing}}\n  | ^~~~~~~~~~~"));
    }

    #[test]
    fn unterminated_definition() {
        let err = failure("SELECT 1;\n@cols{ id, name");
        assert_eq!(err.message(), "Definition not terminated.");
        assert_eq!((err.row(), err.column()), (2, 0));
    }

    #[test]
    fn forward_and_nested_references() {
        let sql = "SELECT {{cols}} FROM t;\n@cols{id, {{more}}}\n@more{name}";
        assert_eq!(expand(sql), "SELECT id, name FROM t;\n\n");
    }

    #[test]
    fn every_occurrence_is_replaced() {
        let sql = "@t{users}SELECT * FROM {{t}}; DELETE FROM {{t}};";
        assert_eq!(expand(sql), "SELECT * FROM users; DELETE FROM users;");
    }

    #[test]
    fn tagged_definition() {
        let sql = "@sql cols{id, name}\nSELECT {{cols}} FROM t;";
        let out = preprocess(sql, DEFAULT_LABEL).unwrap();
        assert_eq!(out.definitions["cols"].tag.as_deref(), Some("sql"));
        assert_eq!(out.script, "\nSELECT id, name FROM t;");
    }

    #[test]
    fn excision_keeps_surrounding_text() {
        let sql = "a @x{1} b @y{2} c {{x}}{{y}}";
        assert_eq!(expand(sql), "a  b  c 12");
    }

    #[rstest]
    #[case("@a{ {{a}} }\n{{a}}", "a -> a")]
    #[case("@a{{{b}}}\n@b{{{a}}}\n{{a}}", "a -> b -> a")]
    fn cycles_are_rejected(#[case] sql: &str, #[case] chain: &str) {
        let err = failure(sql);
        assert_eq!(err.kind(), ErrorKind::Preprocess);
        assert!(
            err.message().ends_with(&format!("references itself: {chain}.")),
            "{}",
            err.message()
        );
    }

    #[test]
    fn duplicates_are_rejected() {
        let err = failure("@a{1}\n@a{2}");
        assert_eq!(err.message(), "Definition \"a\" is already defined.");
        assert_eq!((err.row(), err.column()), (2, 0));
    }

    #[test]
    fn unused_definitions_still_resolve() {
        let err = failure("@a{ {{nope}} }\nSELECT 1;");
        assert_eq!(err.message(), "Reference \"nope\" is not defined.");
        assert_eq!(err.offset(), 4);
    }
}
