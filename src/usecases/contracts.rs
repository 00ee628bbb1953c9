use anyhow::Result;

use crate::domain::{events::AppEvent, message::ClientEvent, shell_state::ShellState};

pub trait AppEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>>;
}

pub trait ShellOrchestrator {
    fn state(&self) -> &ShellState;
    fn handle_event(&mut self, event: AppEvent) -> Result<()>;
}

/// Errors the channel can report when handed an outgoing event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelEmitError {
    /// The connection task is gone; nothing more can be delivered.
    Closed,
}

/// Outgoing half of the messaging channel.
///
/// Emission is fire-and-forget: `Ok` means the event was queued in order,
/// not that the server received it.
pub trait ChatChannel {
    fn emit(&self, event: ClientEvent) -> Result<(), ChannelEmitError>;
}

impl<T: ChatChannel + ?Sized> ChatChannel for &T {
    fn emit(&self, event: ClientEvent) -> Result<(), ChannelEmitError> {
        (*self).emit(event)
    }
}

impl<T: ChatChannel + ?Sized> ChatChannel for Box<T> {
    fn emit(&self, event: ClientEvent) -> Result<(), ChannelEmitError> {
        (**self).emit(event)
    }
}
