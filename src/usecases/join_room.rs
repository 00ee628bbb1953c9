//! Announces room membership once the client starts.

use crate::domain::{
    message::{ClientEvent, JoinRequest},
    room::RoomContext,
};

use super::contracts::{ChannelEmitError, ChatChannel};

pub fn join_room(channel: &dyn ChatChannel, room: &RoomContext) -> Result<(), ChannelEmitError> {
    channel.emit(ClientEvent::Join(JoinRequest {
        room: room.room().to_owned(),
    }))
}
