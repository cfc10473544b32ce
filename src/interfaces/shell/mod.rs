//! Interactive terminal shell
//!
//! Stands in for the mobile presentation layer: translates typed commands
//! into state machine commands and renders the resulting screens.

pub mod command;
pub mod render;

use chrono::{FixedOffset, Offset, Utc};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::application::{BookingStateMachine, QuickPick, SpotBrowser, TapOutcome};
use crate::domain::booking::Phase;
use crate::domain::error::BookingError;
use crate::domain::slot::{SlotDescriptor, SlotState};

pub use command::{ParseCommandError, ShellCommand, HELP};

/// What the shell loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    Continue(String),
    Exit,
}

pub struct Shell {
    machine: BookingStateMachine,
    browser: SpotBrowser,
    currency: String,
    offset: FixedOffset,
}

impl Shell {
    pub fn new(
        machine: BookingStateMachine,
        browser: SpotBrowser,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            machine,
            browser,
            currency: currency.into(),
            offset: Utc.fix(),
        }
    }

    /// UTC offset used for dates and times on the confirmation
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.offset = offset;
        self
    }

    pub fn machine(&self) -> &BookingStateMachine {
        &self.machine
    }

    pub fn prompt(&self) -> String {
        let phase = match self.machine.phase() {
            Phase::Browsing => "browse",
            Phase::SlotPicking => "slots",
            Phase::Confirming => "booked",
        };
        format!("parkwise[{}]> ", phase)
    }

    pub fn execute_line(&mut self, line: &str) -> Flow {
        match line.parse::<ShellCommand>() {
            Ok(command) => self.execute(command),
            Err(ParseCommandError::Empty) => Flow::Continue(String::new()),
            Err(e) => Flow::Continue(format!("error: {}", e)),
        }
    }

    pub fn execute(&mut self, command: ShellCommand) -> Flow {
        debug!(?command, "Shell command");
        if command == ShellCommand::Quit {
            return Flow::Exit;
        }
        let output = match self.dispatch(command) {
            Ok(text) => text,
            Err(e) if e.is_user_facing() => render::SELECT_SLOT_PROMPT.to_string(),
            Err(e) => format!("error: {}", e),
        };
        Flow::Continue(output)
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<String, BookingError> {
        match command {
            ShellCommand::Help => Ok(HELP.to_string()),
            ShellCommand::Spots => Ok(self.spot_list()),
            ShellCommand::Filter(filter) => {
                self.browser.set_filter(filter);
                Ok(format!("Filter: {}\n{}", self.browser.filter(), self.spot_list()))
            }
            ShellCommand::Tap(spot_id) => match self.browser.tap(&mut self.machine, spot_id)? {
                TapOutcome::Focused(_) => Ok(self.focused_card()),
                TapOutcome::Unfocused(id) => Ok(format!("Spot {} released.", id)),
            },
            ShellCommand::Focus(spot_id) => {
                self.machine.focus_spot(spot_id)?;
                Ok(self.focused_card())
            }
            ShellCommand::Unfocus => {
                self.machine.unfocus_spot()?;
                Ok("No spot focused.".to_string())
            }
            ShellCommand::Nearest => match self.browser.quick_pick(&mut self.machine)? {
                QuickPick::Focused(_) => Ok(self.focused_card()),
                QuickPick::NoSpotsMatch => {
                    Ok("No Spots: No parking spots match your current filter.".to_string())
                }
            },
            ShellCommand::Book => {
                self.machine.open_slot_picker()?;
                Ok(self.picker())
            }
            ShellCommand::Slot(id) => {
                // Ids off the grid go through as disabled so the state
                // machine still reports phase errors first
                let slot = self
                    .machine
                    .selected_spot()
                    .and_then(|spot| BookingStateMachine::slot_grid(spot).find(&id).cloned())
                    .unwrap_or(SlotDescriptor {
                        id,
                        number: 0,
                        state: SlotState::Disabled,
                    });
                self.machine.select_slot(&slot)?;
                Ok(self.picker())
            }
            ShellCommand::Hours(hours) => {
                self.machine.set_duration(hours)?;
                Ok(self.picker())
            }
            ShellCommand::MoreTime => {
                self.machine.increment_duration()?;
                Ok(self.picker())
            }
            ShellCommand::LessTime => {
                self.machine.decrement_duration()?;
                Ok(self.picker())
            }
            ShellCommand::Confirm => {
                let record = self.machine.confirm_booking()?;
                Ok(render::confirmation(&record, &self.currency, self.offset))
            }
            ShellCommand::Cancel => {
                self.machine.cancel_slot_picker()?;
                Ok(self.focused_card())
            }
            ShellCommand::Done => {
                self.machine.dismiss_confirmation()?;
                Ok(self.spot_list())
            }
            ShellCommand::State => Ok(serde_json::to_string_pretty(&self.machine.current_state())
                .unwrap_or_else(|e| format!("error: {}", e))),
            ShellCommand::Quit => Ok(String::new()),
        }
    }

    fn spot_list(&self) -> String {
        let focused = self.machine.selected_spot().map(|s| s.id);
        render::spot_list(&self.browser.visible_spots(), focused, &self.currency)
    }

    fn focused_card(&self) -> String {
        match self.machine.selected_spot() {
            Some(spot) => render::spot_card(spot, &self.currency),
            None => "No spot focused.".to_string(),
        }
    }

    fn picker(&self) -> String {
        let snapshot = self.machine.current_state();
        match (self.machine.selected_spot(), self.machine.current_estimate()) {
            (Some(spot), Some(cost)) => render::slot_picker(
                spot,
                snapshot.selected_slot.as_ref(),
                &cost,
                &self.currency,
            ),
            _ => "No spot focused.".to_string(),
        }
    }
}

/// Read commands line by line until `quit` or end of input
pub async fn run_shell<R, W>(shell: &mut Shell, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();
    writer.write_all(shell.prompt().as_bytes()).await?;
    writer.flush().await?;

    while let Some(line) = lines.next_line().await? {
        match shell.execute_line(&line) {
            Flow::Exit => break,
            Flow::Continue(output) => {
                if !output.is_empty() {
                    writer.write_all(output.as_bytes()).await?;
                    writer.write_all(b"\n").await?;
                }
            }
        }
        writer.write_all(shell.prompt().as_bytes()).await?;
        writer.flush().await?;
    }
    writer.write_all(b"\n").await?;
    writer.flush().await
}
