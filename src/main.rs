reexport!(testing, test);
reexport!(config);
reexport!(diagnostic);
reexport!(error);
reexport!(preprocess);
reexport!(report);
reexport!(script);
reexport!(sql);
reexport!(statement);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

use std::{path::PathBuf, process::ExitCode};
use tokio::{io::AsyncReadExt, task::JoinSet};
use tracing_subscriber::EnvFilter;

/// Where a script comes from.
#[derive(Debug, Clone)]
enum Input {
    Stdin,
    File(PathBuf),
}

impl Input {
    fn label(&self) -> String {
        match self {
            Input::Stdin => "<stdin>".to_string(),
            Input::File(path) => path.display().to_string(),
        }
    }

    async fn script(&self, config: &Config) -> Result<SqlScript> {
        match self {
            Input::Stdin => {
                let mut raw = String::new();
                tokio::io::stdin().read_to_string(&mut raw).await?;
                SqlScript::with_config(self.label(), raw, config)
            }
            Input::File(path) => SqlScript::read(path, config).await,
        }
    }
}

/// Rendered output of one input and whether it failed.
struct Outcome {
    index: usize,
    output: String,
    failed: bool,
}

async fn run(index: usize, input: Input, config: &'static Config) -> Outcome {
    let label = input.label();
    let style = Style::from_config(config);
    let result = match input.script(config).await {
        Ok(script) => render(&script, config, style),
        Err(e) => Err(e),
    };

    match result {
        Ok(output) => Outcome {
            index,
            output,
            failed: false,
        },
        Err(e) => {
            info!("{label}: {e}");
            let output = if config.json {
                Report::failed(&label, &e)
                    .to_json()
                    .unwrap_or_else(|err| err.to_string())
            } else {
                render_error(&label, &e, style)
            };
            Outcome {
                index,
                output,
                failed: true,
            }
        }
    }
}

fn render(script: &SqlScript, config: &Config, style: Style) -> Result<String> {
    if config.expand {
        if !script.is_expanded() {
            debug!("{}: no templates to expand", script.label());
        }
        let source = if config.reindent {
            script.reindented()
        } else {
            script.source().to_string()
        };
        if !config.json {
            return Ok(source);
        }
        return Report::Expanded {
            label: script.label(),
            script: &source,
        }
        .to_json();
    }

    let statements = script.statements()?;
    if config.json {
        Report::Parsed {
            label: script.label(),
            statements: &statements,
        }
        .to_json()
    } else {
        Ok(render_statements(script.label(), &statements, style))
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match config() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let mut inputs = std::env::args()
        .skip(1)
        .map(|arg| Input::File(PathBuf::from(arg)))
        .collect::<Vec<_>>();
    if inputs.is_empty() {
        inputs.push(Input::Stdin);
    }

    let mut tasks = JoinSet::new();
    for (index, input) in inputs.into_iter().enumerate() {
        tasks.spawn(run(index, input, config));
    }

    let mut outcomes = Vec::new();
    let mut failed = false;
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => {
                error!("script task failed: {e}");
                failed = true;
            }
        }
    }

    outcomes.sort_by_key(|o| o.index);
    for outcome in outcomes {
        if outcome.failed {
            failed = true;
            eprintln!("{}", outcome.output);
        } else {
            println!("{}", outcome.output);
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATED: &str = "@cols{a, b}\nSELECT {{cols}} FROM t;";

    fn config(json: bool, expand: bool, reindent: bool) -> Config {
        Config {
            preprocess: true,
            color: false,
            json,
            expand,
            reindent,
        }
    }

    #[test]
    fn expand_prints_the_expanded_source() -> Result {
        let script = SqlScript::new("t.sql", TEMPLATED)?;
        let output = render(&script, &config(false, true, false), Style::default())?;
        assert_eq!(output, "\nSELECT a, b FROM t;");
        assert_eq!(output, script.source());
        Ok(())
    }

    #[test]
    fn reindent_formats_the_expanded_source() -> Result {
        let sql = "CREATE FUNCTION f() RETURNS int AS $$\nBEGIN\nRETURN 1;\nEND;\n$$ LANGUAGE plpgsql;\n";
        let script = SqlScript::new("f.sql", sql)?;
        let output = render(&script, &config(false, true, true), Style::default())?;
        assert_eq!(
            output,
            "CREATE FUNCTION f() RETURNS int AS $$\nBEGIN\n    RETURN 1;\nEND;\n$$ LANGUAGE plpgsql;\n"
        );
        Ok(())
    }

    #[test]
    fn expand_as_json() -> Result {
        let script = SqlScript::new("t.sql", TEMPLATED)?;
        let output = render(&script, &config(true, true, false), Style::default())?;
        let value: serde_json::Value = serde_json::from_str(&output)?;
        assert_eq!(value["status"], "expanded");
        assert_eq!(value["label"], "t.sql");
        assert_eq!(value["script"], script.source());
        Ok(())
    }

    #[test]
    fn statements_by_default() -> Result {
        let script = SqlScript::new("t.sql", TEMPLATED)?;
        let output = render(&script, &config(false, false, false), Style::default())?;
        assert_eq!(output, "t.sql:2-2 SELECT\n    SELECT a, b FROM t;");
        Ok(())
    }
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
