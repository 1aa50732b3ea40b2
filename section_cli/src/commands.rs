//! Interactive session commands.
//!
//! One line of input parses into one [`SessionCommand`], which then runs
//! against the [`Session`] owned by the REPL loop.

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use section_core::errors::CalcError;
use section_core::session::Session;
use section_core::shapes::ShapeKind;

use crate::render;

pub const HELP: &str = "\
Commands:
  shape <key>              select a shape (see `section_cli shapes`)
  set <sym>=<value>...     enter dimensions in mm, e.g. `set r_o=50 r_i=40`
  clear                    forget all entered dimensions
  show                     show inputs and the live result
  equations                show the governing equations for the current shape
  save                     keep the current result
  list                     list saved results
  export [dir]             write saved results to CSV
  help                     show this help
  quit                     leave the session
";

/// Errors from parsing or running a session command.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type `help` for a list of commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error(transparent)]
    Calc(#[from] CalcError),
}

/// Hint printed after errors caused by a mistyped shape, symbol or value
pub const INPUT_HINT: &str = "Run `section_cli shapes` to list every shape and its parameters.";

impl CommandError {
    /// Lines written to stderr for this error. `verbose` adds the error's
    /// JSON form.
    pub fn report_lines(&self, verbose: bool) -> Vec<String> {
        let CommandError::Calc(e) = self else {
            return vec![format!("Error: {}", self)];
        };

        let mut lines = vec![format!("Error [{}]: {}", e.error_code(), e)];
        if e.is_input_error() {
            lines.push(INPUT_HINT.to_string());
        }
        if verbose {
            if let Ok(json) = serde_json::to_string_pretty(e) {
                lines.push(json);
            }
        }
        lines
    }
}

/// One parsed line of session input.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Shape(ShapeKind),
    /// `(symbol, raw text)` pairs
    Set(Vec<(String, String)>),
    Clear,
    Show,
    Equations,
    Save,
    List,
    Export(Option<PathBuf>),
    Help,
    Quit,
}

/// What the REPL should do after a command.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Print(String),
    Quit,
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(SessionCommand::Show);
        };
        let rest: Vec<&str> = words.collect();

        match verb.to_lowercase().as_str() {
            "shape" => match rest.as_slice() {
                [key] => Ok(SessionCommand::Shape(key.parse()?)),
                _ => Err(CommandError::Usage("shape <key>")),
            },
            "set" => parse_assignments(&rest).map(SessionCommand::Set),
            "clear" => Ok(SessionCommand::Clear),
            "show" => Ok(SessionCommand::Show),
            "equations" | "eq" => Ok(SessionCommand::Equations),
            "save" => Ok(SessionCommand::Save),
            "list" | "ls" => Ok(SessionCommand::List),
            "export" => match rest.as_slice() {
                [] => Ok(SessionCommand::Export(None)),
                [dir] => Ok(SessionCommand::Export(Some(PathBuf::from(dir)))),
                _ => Err(CommandError::Usage("export [dir]")),
            },
            "help" | "?" => Ok(SessionCommand::Help),
            "quit" | "exit" | "q" => Ok(SessionCommand::Quit),
            other => Err(CommandError::UnknownCommand(other.to_string())),
        }
    }
}

/// Parse `sym=value` words. The value text is kept raw; it is parsed
/// permissively when the result is computed.
pub fn parse_assignments(words: &[&str]) -> Result<Vec<(String, String)>, CommandError> {
    if words.is_empty() {
        return Err(CommandError::Usage("set <sym>=<value>..."));
    }

    words
        .iter()
        .map(|word| match word.split_once('=') {
            Some((symbol, value)) if !symbol.is_empty() => Ok((symbol.to_string(), value.to_string())),
            _ => Err(CommandError::Usage("set <sym>=<value>...")),
        })
        .collect()
}

impl SessionCommand {
    /// Run the command against `session`.
    pub fn execute(&self, session: &mut Session) -> Result<Outcome, CommandError> {
        let text = match self {
            SessionCommand::Shape(shape) => {
                session.select_shape(*shape);
                show(session)
            }
            SessionCommand::Set(pairs) => {
                // Check every symbol first so a typo leaves the inputs untouched
                let shape = session.shape();
                if let Some((symbol, _)) = pairs.iter().find(|(symbol, _)| shape.parameter(symbol).is_none()) {
                    return Err(CalcError::unknown_parameter(shape.display_name(), symbol.as_str()).into());
                }
                for (symbol, value) in pairs {
                    session.set_input(symbol, value.as_str())?;
                }
                show(session)
            }
            SessionCommand::Clear => {
                session.clear_inputs();
                show(session)
            }
            SessionCommand::Show => show(session),
            SessionCommand::Equations => render::equations_listing(session.shape()),
            SessionCommand::Save => {
                let saved = session.save();
                let shape = saved.shape;
                format!("Saved result #{} ({}).\n", session.saved().len(), shape.display_name())
            }
            SessionCommand::List => render::saved_list(session.saved()),
            SessionCommand::Export(dir) => match session.export_to_dir(dir.as_deref()) {
                Ok(path) => format!("Exported {} result(s) to {}\n", session.saved().len(), path.display()),
                Err(CalcError::NothingToExport) => "Nothing to export yet. Use `save` first.\n".to_string(),
                Err(e) => return Err(e.into()),
            },
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Print(text))
    }
}

/// Inputs, live result, and the reason when the result is the zero default.
fn show(session: &Session) -> String {
    let mut text = render::session_inputs(session);
    text.push('\n');
    match session.try_current_result() {
        Ok(result) => text.push_str(&render::result_table(session.shape(), &result)),
        Err(reason) => {
            text.push_str(&render::result_table(session.shape(), &session.current_result()));
            text.push_str(&format!("  (result is zero: {})\n", reason));
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use section_core::session::SessionSettings;

    fn run(session: &mut Session, line: &str) -> Result<Outcome, CommandError> {
        line.parse::<SessionCommand>()?.execute(session)
    }

    fn printed(outcome: Outcome) -> String {
        match outcome {
            Outcome::Print(text) => text,
            Outcome::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("shape solidSquare".parse::<SessionCommand>().unwrap(), SessionCommand::Shape(ShapeKind::SolidSquare));
        assert_eq!(
            "shape circular-hollow".parse::<SessionCommand>().unwrap(),
            SessionCommand::Shape(ShapeKind::CircularHollow)
        );
        assert_eq!(
            "set r_o=50 r_i=40".parse::<SessionCommand>().unwrap(),
            SessionCommand::Set(vec![("r_o".into(), "50".into()), ("r_i".into(), "40".into())])
        );
        assert_eq!("SAVE".parse::<SessionCommand>().unwrap(), SessionCommand::Save);
        assert_eq!("export".parse::<SessionCommand>().unwrap(), SessionCommand::Export(None));
        assert_eq!(
            "export out/csv".parse::<SessionCommand>().unwrap(),
            SessionCommand::Export(Some(PathBuf::from("out/csv")))
        );
        assert_eq!("".parse::<SessionCommand>().unwrap(), SessionCommand::Show);
        assert_eq!("quit".parse::<SessionCommand>().unwrap(), SessionCommand::Quit);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("frobnicate".parse::<SessionCommand>(), Err(CommandError::UnknownCommand(_))));
        assert!(matches!("shape".parse::<SessionCommand>(), Err(CommandError::Usage(_))));
        assert!(matches!("set".parse::<SessionCommand>(), Err(CommandError::Usage(_))));
        assert!(matches!("set r 10".parse::<SessionCommand>(), Err(CommandError::Usage(_))));
        assert!(matches!("set =10".parse::<SessionCommand>(), Err(CommandError::Usage(_))));
        assert!(matches!(
            "shape hexagon".parse::<SessionCommand>(),
            Err(CommandError::Calc(CalcError::UnknownShape { .. }))
        ));
    }

    #[test]
    fn test_set_keeps_raw_text() {
        let pairs = parse_assignments(&["r=12abc", "r_i="]).unwrap();
        assert_eq!(pairs, vec![("r".into(), "12abc".into()), ("r_i".into(), String::new())]);
    }

    #[test]
    fn test_set_and_show() {
        let mut session = Session::default();
        let text = printed(run(&mut session, "set r=10").unwrap());
        assert!(text.contains("7.85e+3"));
        assert!(!text.contains("result is zero"));
    }

    #[test]
    fn test_show_explains_zero_result() {
        let mut session = Session::default();
        run(&mut session, "shape rectangleHollow").unwrap();
        let text = printed(run(&mut session, "set b_o=100 h_o=200 b_i=150 h_i=100").unwrap());
        assert!(text.contains("result is zero"));
    }

    #[test]
    fn test_set_with_unknown_symbol_changes_nothing() {
        let mut session = Session::default();
        let err = run(&mut session, "set r=10 r_o=5").unwrap_err();
        assert!(matches!(err, CommandError::Calc(CalcError::UnknownParameter { .. })));
        assert!(session.input("r").is_none());
    }

    #[test]
    fn test_save_and_list() {
        let mut session = Session::default();
        run(&mut session, "set r=10").unwrap();
        assert_eq!(printed(run(&mut session, "save").unwrap()), "Saved result #1 (Solid Circle).\n");
        run(&mut session, "save").unwrap();

        assert_eq!(session.saved().len(), 2);
        let list = printed(run(&mut session, "list").unwrap());
        assert_eq!(list.lines().count(), 3);
    }

    #[test]
    fn test_export_without_saves_is_a_no_op() {
        let mut session = Session::new(SessionSettings::default());
        let text = printed(run(&mut session, "export").unwrap());
        assert!(text.contains("Nothing to export"));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = std::env::temp_dir().join(format!("section_cli_export_{}", std::process::id()));
        let mut session = Session::default();
        run(&mut session, "set r=10").unwrap();
        run(&mut session, "save").unwrap();

        let text = printed(run(&mut session, &format!("export {}", dir.display())).unwrap());
        assert!(text.starts_with("Exported 1 result(s)"));

        let files: Vec<_> = std::fs::read_dir(&dir).unwrap().collect();
        assert_eq!(files.len(), 1);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_report_lines() {
        let err = CommandError::from(CalcError::unknown_parameter("Solid Circle", "r_o"));
        let lines = err.report_lines(false);
        assert_eq!(lines[0], "Error [UNKNOWN_PARAMETER]: 'r_o' is not a parameter of Solid Circle");
        assert_eq!(lines[1], INPUT_HINT);
        assert_eq!(lines.len(), 2);

        let verbose = err.report_lines(true);
        assert_eq!(verbose.len(), 3);
        assert!(verbose[2].contains("\"type\": \"UnknownParameter\""));

        let file = CommandError::from(CalcError::file_error("write", "out.csv", "denied"));
        assert!(!file.report_lines(false).contains(&INPUT_HINT.to_string()));

        let usage = CommandError::Usage("export [dir]");
        assert_eq!(usage.report_lines(true), vec!["Error: Usage: export [dir]".to_string()]);
    }

    #[test]
    fn test_quit() {
        let mut session = Session::default();
        assert_eq!(run(&mut session, "quit").unwrap(), Outcome::Quit);
    }
}
