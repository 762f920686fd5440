//! Operator input parsing.

use groundlink_common::{Command, FailureMode};

pub const HELP: &str = "\
commands:
  arm | takeoff | land         flight commands
  reset                        restore the vehicle's default state
  status                       fetch status now and show it
  mission <WP1, WP2, ...>      upload a mission
  clear                        clear the mission
  inject <mode>                gps_loss | low_battery | motor_fail | reset
  view                         show the last fetched status
  log                          show the command log
  help | quit";

#[derive(Debug, Clone, PartialEq)]
pub enum ConsoleCommand {
    Dispatch(Command),
    /// Raw waypoint text, validated by the mission editor.
    Mission(String),
    Status,
    View,
    Log,
    Help,
    Quit,
}

/// `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<ConsoleCommand>, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(v, r)| (v, r.trim()))
        .unwrap_or((line, ""));

    let cmd = match verb.to_ascii_lowercase().as_str() {
        "arm" => ConsoleCommand::Dispatch(Command::Arm),
        "takeoff" => ConsoleCommand::Dispatch(Command::Takeoff),
        "land" => ConsoleCommand::Dispatch(Command::Land),
        "reset" => ConsoleCommand::Dispatch(Command::Reset),
        "clear" => ConsoleCommand::Dispatch(Command::ClearMission),
        "inject" => {
            if rest.is_empty() {
                return Err("usage: inject <gps_loss|low_battery|motor_fail|reset>".into());
            }
            ConsoleCommand::Dispatch(Command::InjectFailure(rest.parse::<FailureMode>()?))
        }
        "mission" => ConsoleCommand::Mission(rest.to_string()),
        "status" => ConsoleCommand::Status,
        "view" => ConsoleCommand::View,
        "log" => ConsoleCommand::Log,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" => ConsoleCommand::Quit,
        other => return Err(format!("unknown command: {other} (try `help`)")),
    };
    Ok(Some(cmd))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_lines_ignored() {
        assert_eq!(parse_line("   "), Ok(None));
    }

    #[test]
    fn flight_commands() {
        assert_eq!(parse_line("arm"), Ok(Some(ConsoleCommand::Dispatch(Command::Arm))));
        assert_eq!(parse_line(" TAKEOFF "), Ok(Some(ConsoleCommand::Dispatch(Command::Takeoff))));
        assert_eq!(parse_line("clear"), Ok(Some(ConsoleCommand::Dispatch(Command::ClearMission))));
    }

    #[test]
    fn mission_keeps_raw_text() {
        assert_eq!(
            parse_line("mission WP1, WP2,  , WP3"),
            Ok(Some(ConsoleCommand::Mission("WP1, WP2,  , WP3".into())))
        );
        // Validation is left to the mission editor.
        assert_eq!(parse_line("mission"), Ok(Some(ConsoleCommand::Mission(String::new()))));
    }

    #[test]
    fn inject_modes() {
        assert_eq!(
            parse_line("inject low_battery"),
            Ok(Some(ConsoleCommand::Dispatch(Command::InjectFailure(FailureMode::LowBattery))))
        );
        assert!(parse_line("inject").is_err());
        assert!(parse_line("inject meteor").is_err());
    }

    #[test]
    fn unknown_verb() {
        let err = parse_line("hover 10").unwrap_err();
        assert!(err.contains("hover"));
    }
}
