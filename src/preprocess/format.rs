use crate::*;
use itertools::Itertools as _;

pub const INDENT: &str = "    ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Level {
    Declare,
    Block,
    Paren,
}

/// Re-indents an expanded script, four spaces per level.
///
/// `BEGIN`, `DECLARE`, `IF`, `ELSE`/`ELSIF`/`ELSEIF` and lines ending in `(`
/// open a level; lines starting with `)`, `END` or `ELSE` close one. A
/// `BEGIN` right after a `DECLARE` section replaces it. Blank lines are kept
/// empty and the trailing newline, if any, is preserved.
pub fn reindent(script: &str) -> String {
    let mut levels: Vec<Level> = Vec::new();
    let body = script
        .lines()
        .map(|line| {
            let line = line.trim();
            if line.is_empty() {
                return String::new();
            }

            let word = leading_word(line);
            let closes = line.starts_with(')')
                || matches!(word.as_str(), "END" | "ELSE" | "ELSIF" | "ELSEIF");
            if closes || (word == "BEGIN" && levels.last() == Some(&Level::Declare)) {
                levels.pop();
            }

            let out = format!("{}{line}", INDENT.repeat(levels.len()));

            match word.as_str() {
                "DECLARE" => levels.push(Level::Declare),
                "BEGIN" | "IF" | "ELSE" | "ELSIF" | "ELSEIF" => levels.push(Level::Block),
                _ if line.ends_with('(') => levels.push(Level::Paren),
                _ => {}
            }
            out
        })
        .join("\n");

    if !levels.is_empty() {
        trace!("reindent: {} unclosed levels", levels.len());
    }
    if script.ends_with('\n') {
        body + "\n"
    } else {
        body
    }
}

fn leading_word(line: &str) -> String {
    line.split(|c: char| !c.is_ascii_alphabetic())
        .next()
        .unwrap_or_default()
        .to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_function_body() {
        let script = "CREATE FUNCTION f() RETURNS int AS $$\nDECLARE\nx int;\nBEGIN\nIF x > 1 THEN\nRETURN 1;\nELSE\nRETURN 2;\nEND IF;\nEND;\n$$ LANGUAGE plpgsql;\n";
        let expected = "CREATE FUNCTION f() RETURNS int AS $$\nDECLARE\n    x int;\nBEGIN\n    IF x > 1 THEN\n        RETURN 1;\n    ELSE\n        RETURN 2;\n    END IF;\nEND;\n$$ LANGUAGE plpgsql;\n";
        assert_eq!(reindent(script), expected);
    }

    #[test]
    fn indents_parenthesised_lists() {
        let script = "CREATE TABLE t (\n      id int,\nname text\n   );";
        assert_eq!(
            reindent(script),
            "CREATE TABLE t (\n    id int,\n    name text\n);"
        );
    }

    #[test]
    fn blank_lines_stay_empty() {
        assert_eq!(reindent("SELECT 1;\n   \nSELECT 2;"), "SELECT 1;\n\nSELECT 2;");
    }

    #[test]
    fn unbalanced_closers_do_not_underflow() {
        assert_eq!(reindent("END;\n)\nSELECT 1;"), "END;\n)\nSELECT 1;");
    }
}
