use std::cell::RefCell;

use crate::{
    domain::message::ClientEvent,
    usecases::contracts::{ChannelEmitError, ChatChannel},
};

/// Channel double that records every emitted event in order.
#[derive(Debug, Default)]
pub struct RecordingChannel {
    emitted: RefCell<Vec<ClientEvent>>,
    closed: bool,
}

impl RecordingChannel {
    pub fn closed() -> Self {
        Self {
            emitted: RefCell::new(Vec::new()),
            closed: true,
        }
    }

    pub fn emitted(&self) -> Vec<ClientEvent> {
        self.emitted.borrow().clone()
    }

    pub fn sent_texts(&self) -> Vec<String> {
        self.emitted
            .borrow()
            .iter()
            .filter_map(|event| match event {
                ClientEvent::ChatMessage(message) => Some(message.message.clone()),
                ClientEvent::Join(_) => None,
            })
            .collect()
    }
}

impl ChatChannel for RecordingChannel {
    fn emit(&self, event: ClientEvent) -> Result<(), ChannelEmitError> {
        if self.closed {
            return Err(ChannelEmitError::Closed);
        }
        self.emitted.borrow_mut().push(event);
        Ok(())
    }
}
