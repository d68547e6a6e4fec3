//! Event script parsing.
//!
//! One command per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! tool rectangle|circle|none
//! down left|right|middle X Y
//! up left|right|middle X Y
//! move X Y
//! key NAME
//! ```

use shapedit_core::{InputEvent, Key, KeyEvent, MouseButton, PendingShapeKind, PointerEvent, Position};
use thiserror::Error;

/// Script parse errors. Line numbers are 1-based.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("line {line}: unknown command `{command}`")]
    UnknownCommand { line: usize, command: String },
    #[error("line {line}: missing {expected}")]
    MissingArgument { line: usize, expected: &'static str },
    #[error("line {line}: invalid {what} `{value}`")]
    InvalidValue {
        line: usize,
        what: &'static str,
        value: String,
    },
    #[error("line {line}: unexpected trailing `{rest}`")]
    TrailingInput { line: usize, rest: String },
}

/// A single scripted action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptCommand {
    /// Tool-selector click: arm the next shape kind.
    Tool(PendingShapeKind),
    /// Raw input event for the canvas.
    Input(InputEvent),
}

/// Parse a whole script.
pub fn parse_script(source: &str) -> Result<Vec<ScriptCommand>, ScriptError> {
    source
        .lines()
        .enumerate()
        .filter_map(|(index, raw)| {
            let text = raw.split('#').next().unwrap_or("").trim();
            (!text.is_empty()).then(|| parse_line(index + 1, text))
        })
        .collect()
}

struct Tokens<'a> {
    line: usize,
    inner: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn next(&mut self, expected: &'static str) -> Result<&'a str, ScriptError> {
        self.inner.next().ok_or(ScriptError::MissingArgument {
            line: self.line,
            expected,
        })
    }

    fn coordinate(&mut self, what: &'static str) -> Result<i32, ScriptError> {
        let value = self.next(what)?;
        value.parse().map_err(|_| ScriptError::InvalidValue {
            line: self.line,
            what,
            value: value.to_string(),
        })
    }

    fn position(&mut self) -> Result<Position, ScriptError> {
        Ok(Position::new(self.coordinate("x")?, self.coordinate("y")?))
    }

    fn button(&mut self) -> Result<MouseButton, ScriptError> {
        let name = self.next("button")?;
        MouseButton::from_name(name).ok_or_else(|| ScriptError::InvalidValue {
            line: self.line,
            what: "button",
            value: name.to_string(),
        })
    }

    fn finish(mut self) -> Result<(), ScriptError> {
        let rest: Vec<&str> = self.inner.by_ref().collect();
        if rest.is_empty() {
            Ok(())
        } else {
            Err(ScriptError::TrailingInput {
                line: self.line,
                rest: rest.join(" "),
            })
        }
    }
}

fn parse_line(line: usize, text: &str) -> Result<ScriptCommand, ScriptError> {
    let mut tokens = Tokens {
        line,
        inner: text.split_whitespace(),
    };

    let command = match tokens.next("command")? {
        "tool" => {
            let name = tokens.next("tool name")?;
            let kind = PendingShapeKind::from_name(name).ok_or_else(|| ScriptError::InvalidValue {
                line,
                what: "tool",
                value: name.to_string(),
            })?;
            ScriptCommand::Tool(kind)
        }
        "down" => {
            let button = tokens.button()?;
            let position = tokens.position()?;
            ScriptCommand::Input(PointerEvent::Down { position, button }.into())
        }
        "up" => {
            let button = tokens.button()?;
            let position = tokens.position()?;
            ScriptCommand::Input(PointerEvent::Up { position, button }.into())
        }
        "move" => {
            let position = tokens.position()?;
            ScriptCommand::Input(PointerEvent::Move { position }.into())
        }
        "key" => {
            let name = tokens.next("key name")?;
            ScriptCommand::Input(KeyEvent::Pressed(Key::from_name(name)).into())
        }
        other => {
            return Err(ScriptError::UnknownCommand {
                line,
                command: other.to_string(),
            });
        }
    };

    tokens.finish()?;
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_commands() {
        let script = "\
# build a rectangle and drag it
tool rectangle
down left 100 100
down right 100 100   # select
move 103 100
up right 103 100
key Delete
";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 6);
        assert_eq!(commands[0], ScriptCommand::Tool(PendingShapeKind::Rectangle));
        assert_eq!(
            commands[2],
            ScriptCommand::Input(InputEvent::Pointer(PointerEvent::Down {
                position: Position::new(100, 100),
                button: MouseButton::Right,
            }))
        );
        assert_eq!(
            commands[5],
            ScriptCommand::Input(InputEvent::Key(KeyEvent::Pressed(Key::Delete)))
        );
    }

    #[test]
    fn test_negative_coordinates() {
        let commands = parse_script("move -5 -7").unwrap();
        assert_eq!(
            commands[0],
            ScriptCommand::Input(InputEvent::Pointer(PointerEvent::Move {
                position: Position::new(-5, -7),
            }))
        );
    }

    #[test]
    fn test_unknown_command() {
        let err = parse_script("tool circle\n\njump 1 2").unwrap_err();
        assert_eq!(
            err,
            ScriptError::UnknownCommand {
                line: 3,
                command: "jump".to_string()
            }
        );
        assert_eq!(err.to_string(), "line 3: unknown command `jump`");
    }

    #[test]
    fn test_missing_and_invalid_arguments() {
        assert_eq!(
            parse_script("move 1").unwrap_err(),
            ScriptError::MissingArgument { line: 1, expected: "y" }
        );
        assert_eq!(
            parse_script("down left one 2").unwrap_err(),
            ScriptError::InvalidValue {
                line: 1,
                what: "x",
                value: "one".to_string()
            }
        );
        assert!(matches!(
            parse_script("down back 1 2").unwrap_err(),
            ScriptError::InvalidValue { what: "button", .. }
        ));
        assert!(matches!(
            parse_script("tool triangle").unwrap_err(),
            ScriptError::InvalidValue { what: "tool", .. }
        ));
    }

    #[test]
    fn test_trailing_input() {
        assert_eq!(
            parse_script("key Delete now").unwrap_err(),
            ScriptError::TrailingInput {
                line: 1,
                rest: "now".to_string()
            }
        );
    }
}
