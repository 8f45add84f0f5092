#![cfg(test)]
crate::reexport!(fixtures);
pub use rstest::*;

pub(crate) fn common_init() {
    use std::sync::Once;
    use tracing_subscriber::EnvFilter;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        // Only initialize once for all tests
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env()) // <- reads RUST_LOG
            .with_test_writer() // ensures it integrates with `cargo test` output
            .init();
    });
}

mod pipeline_tests {
    use super::{super::*, *};

    #[test]
    fn fixtures_tokenize_and_parse() -> Result {
        common_init();
        for sql in [MULTI_SQL, FUNCTION_SQL, MIXED_SQL] {
            let tokens = tokenize(sql)?;
            let statements = parse(&tokens, sql, DEFAULT_LABEL)?;
            assert!(!statements.is_empty());
        }
        Ok(())
    }

    #[rstest]
    #[case(TEMPLATE_SQL, 2)]
    #[case(MULTI_SQL, 3)]
    fn script_statement_counts(#[case] sql: &str, #[case] expected: usize) -> Result {
        common_init();
        let script = SqlScript::new("fixture.sql", sql)?;
        assert_eq!(script.statements()?.len(), expected);
        Ok(())
    }
}
