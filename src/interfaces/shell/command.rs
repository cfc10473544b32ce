//! Shell command parsing

use std::str::FromStr;

use thiserror::Error;

use crate::domain::spot::SpotFilter;

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Help,
    /// List spots under the active filter
    Spots,
    Filter(SpotFilter),
    /// Marker tap: focus, or unfocus when already focused
    Tap(u32),
    Focus(u32),
    Unfocus,
    /// Focus the first visible spot
    Nearest,
    /// Open the slot picker for the focused spot
    Book,
    Slot(String),
    Hours(i64),
    MoreTime,
    LessTime,
    Confirm,
    Cancel,
    /// Dismiss the confirmation
    Done,
    State,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command '{0}' (type 'help')")]
    Unknown(String),

    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("invalid argument for '{command}': {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

fn spot_id(command: &'static str, arg: Option<&str>) -> Result<u32, ParseCommandError> {
    let arg = arg.ok_or(ParseCommandError::MissingArgument {
        command,
        expected: "a spot id",
    })?;
    arg.parse().map_err(|_| ParseCommandError::InvalidArgument {
        command,
        reason: format!("'{}' is not a spot id", arg),
    })
}

impl FromStr for ShellCommand {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(ParseCommandError::Empty)?.to_lowercase();
        let rest: Vec<&str> = words.collect();
        let arg = rest.first().copied();

        let command = match head.as_str() {
            "help" | "?" => Self::Help,
            "spots" | "ls" => Self::Spots,
            "filter" => {
                // Labels may contain spaces ("EV Charging")
                let label = rest.join(" ");
                if label.is_empty() {
                    return Err(ParseCommandError::MissingArgument {
                        command: "filter",
                        expected: "a filter name",
                    });
                }
                let filter = label
                    .parse()
                    .map_err(|reason| ParseCommandError::InvalidArgument {
                        command: "filter",
                        reason,
                    })?;
                Self::Filter(filter)
            }
            "tap" => Self::Tap(spot_id("tap", arg)?),
            "focus" => Self::Focus(spot_id("focus", arg)?),
            "unfocus" => Self::Unfocus,
            "nearest" | "bookme" => Self::Nearest,
            "book" => Self::Book,
            "slot" => {
                let id = arg.ok_or(ParseCommandError::MissingArgument {
                    command: "slot",
                    expected: "a slot id",
                })?;
                Self::Slot(id.to_string())
            }
            "hours" => {
                let value = arg.ok_or(ParseCommandError::MissingArgument {
                    command: "hours",
                    expected: "a number of hours",
                })?;
                let hours = value
                    .parse()
                    .map_err(|_| ParseCommandError::InvalidArgument {
                        command: "hours",
                        reason: format!("'{}' is not a number", value),
                    })?;
                Self::Hours(hours)
            }
            "+" => Self::MoreTime,
            "-" => Self::LessTime,
            "confirm" => Self::Confirm,
            "cancel" | "close" => Self::Cancel,
            "done" => Self::Done,
            "state" => Self::State,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(ParseCommandError::Unknown(other.to_string())),
        };
        Ok(command)
    }
}

pub const HELP: &str = "\
Browsing
  spots                 list spots under the active filter
  filter <name>         all | covered | open | ev-charging | cheap
  tap <id>              focus a spot, or release it if focused
  focus <id> / unfocus
  nearest               focus the first visible spot
  book                  open the slot picker for the focused spot
Slot picker
  slot <id>             choose a slot (e.g. slot 07)
  hours <n>  /  +  /  - set or step the duration (1-12h)
  confirm               book the selected slot
  cancel                close the picker
Confirmation
  done                  dismiss and return to browsing
Other
  state                 print the booking state as JSON
  quit";
