use anyhow::Result;

use crate::domain::{
    events::{AppEvent, KeyInput},
    room::RoomContext,
    shell_state::ShellState,
};

use super::{
    contracts::{ChatChannel, ShellOrchestrator},
    join_room::join_room,
    receive_message::receive_message,
    send_message::{send_message, SendMessageCommand, SendMessageError},
};

const CHANNEL_JOIN_NOT_QUEUED: &str = "CHANNEL_JOIN_NOT_QUEUED";
const CHANNEL_SEND_NOT_QUEUED: &str = "CHANNEL_SEND_NOT_QUEUED";

pub struct DefaultShellOrchestrator<C>
where
    C: ChatChannel,
{
    state: ShellState,
    channel: C,
}

impl<C> DefaultShellOrchestrator<C>
where
    C: ChatChannel,
{
    /// Builds the orchestrator and immediately joins the room.
    pub fn start(channel: C, room: RoomContext) -> Self {
        if let Err(error) = join_room(&channel, &room) {
            tracing::warn!(
                code = CHANNEL_JOIN_NOT_QUEUED,
                error = ?error,
                room = room.room(),
                "join could not be queued on the channel"
            );
        }

        Self {
            state: ShellState::new(room),
            channel,
        }
    }

    fn handle_key(&mut self, key: KeyInput) {
        if key.ctrl {
            return;
        }
        if key.key == "enter" {
            self.submit();
            return;
        }

        let input = self.state.message_input_mut();
        match key.key.as_str() {
            "backspace" => input.delete_char_before(),
            "delete" => input.delete_char_at(),
            "left" => input.move_cursor_left(),
            "right" => input.move_cursor_right(),
            "home" => input.move_cursor_home(),
            "end" => input.move_cursor_end(),
            other => {
                let mut chars = other.chars();
                if let (Some(ch), None) = (chars.next(), chars.next()) {
                    if !input.insert_char(ch) {
                        tracing::debug!(
                            cursor = input.cursor_position(),
                            "message input is full; key dropped"
                        );
                    }
                }
            }
        }
    }

    fn submit(&mut self) {
        let command = SendMessageCommand {
            text: self.state.message_input().text().to_owned(),
        };

        match send_message(&self.channel, self.state.room(), command) {
            Ok(()) => self.state.message_input_mut().clear(),
            Err(SendMessageError::EmptyMessage) => {}
            Err(SendMessageError::ChannelClosed) => {
                tracing::warn!(
                    code = CHANNEL_SEND_NOT_QUEUED,
                    "chat message dropped: channel is closed"
                );
                self.state.message_input_mut().clear();
            }
        }
    }
}

impl<C> ShellOrchestrator for DefaultShellOrchestrator<C>
where
    C: ChatChannel,
{
    fn state(&self) -> &ShellState {
        &self.state
    }

    fn handle_event(&mut self, event: AppEvent) -> Result<()> {
        match event {
            AppEvent::Tick => {}
            AppEvent::QuitRequested => self.state.stop(),
            AppEvent::InputKey(key) => self.handle_key(key),
            AppEvent::MessageReceived(message) => {
                receive_message(self.state.display_list_mut(), message);
            }
            AppEvent::ConnectivityChanged(status) => {
                tracing::info!(status = status.as_label(), "channel connectivity changed");
                self.state.set_connectivity_status(status);
            }
        }

        Ok(())
    }
}
