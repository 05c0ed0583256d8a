use std::error::Error;
use std::fmt;

use crate::controllers::explorer::ports::input_source::BackendInput;
use crate::core::navigation::NavigationCommand;

const QUIT_TOKEN: &str = "quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptParseError {
    UnknownToken { token: String, position: usize },
}

impl fmt::Display for ScriptParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownToken { token, position } => write!(
                f,
                "unknown command {:?} at position {}; expected one of {}, {}",
                token,
                position,
                NavigationCommand::ALL
                    .iter()
                    .map(|command| command.script_name())
                    .collect::<Vec<_>>()
                    .join(", "),
                QUIT_TOKEN
            ),
        }
    }
}

impl Error for ScriptParseError {}

/// Parses a comma-separated command script.
///
/// Tokens are matched case-insensitively after trimming; empty tokens are
/// skipped so trailing commas are harmless. `position` in errors counts
/// non-empty tokens from zero.
pub fn parse_script(script: &str) -> Result<Vec<BackendInput>, ScriptParseError> {
    script
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| parse_token(token, position))
        .collect()
}

fn parse_token(token: &str, position: usize) -> Result<BackendInput, ScriptParseError> {
    if token.eq_ignore_ascii_case(QUIT_TOKEN) {
        return Ok(BackendInput::Quit);
    }

    NavigationCommand::ALL
        .iter()
        .find(|command| token.eq_ignore_ascii_case(command.script_name()))
        .map(|&command| BackendInput::Command(command))
        .ok_or_else(|| ScriptParseError::UnknownToken {
            token: token.to_string(),
            position,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_command_name() {
        let inputs = parse_script("up,down,left,right,zoom,zoom-out,reset,quit").unwrap();

        assert_eq!(
            inputs,
            vec![
                BackendInput::Command(NavigationCommand::PanUp),
                BackendInput::Command(NavigationCommand::PanDown),
                BackendInput::Command(NavigationCommand::PanLeft),
                BackendInput::Command(NavigationCommand::PanRight),
                BackendInput::Command(NavigationCommand::ZoomIn),
                BackendInput::Command(NavigationCommand::ZoomOut),
                BackendInput::Command(NavigationCommand::Reset),
                BackendInput::Quit,
            ]
        );
    }

    #[test]
    fn tolerates_case_and_whitespace() {
        let inputs = parse_script("  Zoom , LEFT,\tzoom-OUT ,").unwrap();

        assert_eq!(
            inputs,
            vec![
                BackendInput::Command(NavigationCommand::ZoomIn),
                BackendInput::Command(NavigationCommand::PanLeft),
                BackendInput::Command(NavigationCommand::ZoomOut),
            ]
        );
    }

    #[test]
    fn empty_script_has_no_inputs() {
        assert_eq!(parse_script("").unwrap(), vec![]);
        assert_eq!(parse_script(" , ,").unwrap(), vec![]);
    }

    #[test]
    fn unknown_token_reports_position() {
        let err = parse_script("up, sideways, down").unwrap_err();

        assert_eq!(
            err,
            ScriptParseError::UnknownToken {
                token: "sideways".to_string(),
                position: 1
            }
        );
        assert!(err.to_string().contains("zoom-out"));
    }
}
