//! Use case for submitting a message to the joined room.

use crate::domain::{
    message::{ClientEvent, OutgoingChatMessage},
    room::RoomContext,
};

use super::contracts::{ChannelEmitError, ChatChannel};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendMessageError {
    /// Message text is empty after trimming whitespace.
    EmptyMessage,
    /// The channel no longer accepts events.
    ChannelClosed,
}

/// Sends trimmed text to the room described by `room`.
///
/// Whitespace-only text is rejected before anything reaches the channel.
pub fn send_message(
    channel: &dyn ChatChannel,
    room: &RoomContext,
    command: SendMessageCommand,
) -> Result<(), SendMessageError> {
    let text = command.text.trim_matches(is_blank);
    if text.is_empty() {
        return Err(SendMessageError::EmptyMessage);
    }

    channel
        .emit(ClientEvent::ChatMessage(OutgoingChatMessage::new(room, text)))
        .map_err(map_emit_error)
}

/// Whitespace plus the byte-order mark, which `char::is_whitespace` omits.
fn is_blank(ch: char) -> bool {
    ch.is_whitespace() || ch == '\u{feff}'
}

fn map_emit_error(error: ChannelEmitError) -> SendMessageError {
    match error {
        ChannelEmitError::Closed => SendMessageError::ChannelClosed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::RecordingChannel;

    fn room() -> RoomContext {
        RoomContext::new("room-5-9", "9", "5")
    }

    fn command(text: &str) -> SendMessageCommand {
        SendMessageCommand {
            text: text.to_owned(),
        }
    }

    #[test]
    fn rejects_empty_message_text() {
        let channel = RecordingChannel::default();

        let result = send_message(&channel, &room(), command(""));

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
        assert!(channel.emitted().is_empty());
    }

    #[test]
    fn rejects_whitespace_only_message() {
        let channel = RecordingChannel::default();

        let result = send_message(&channel, &room(), command("  \n\t "));

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
        assert!(channel.emitted().is_empty());
    }

    #[test]
    fn rejects_byte_order_mark_only_message() {
        let channel = RecordingChannel::default();

        let result = send_message(&channel, &room(), command("\u{feff} \u{feff}"));

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
        assert!(channel.emitted().is_empty());
    }

    #[test]
    fn strips_byte_order_marks_around_text() {
        let channel = RecordingChannel::default();

        send_message(&channel, &room(), command("\u{feff}hi\u{feff}"))
            .expect("send should succeed");

        assert_eq!(channel.sent_texts(), vec!["hi".to_owned()]);
    }

    #[test]
    fn emits_one_chat_message_with_room_context() {
        let channel = RecordingChannel::default();

        send_message(&channel, &room(), command("hello")).expect("send should succeed");

        assert_eq!(
            channel.emitted(),
            vec![ClientEvent::ChatMessage(OutgoingChatMessage {
                room: "room-5-9".to_owned(),
                message: "hello".to_owned(),
                receiver_id: "9".to_owned(),
                product_id: "5".to_owned(),
            })]
        );
    }

    #[test]
    fn trims_whitespace_before_sending() {
        let channel = RecordingChannel::default();

        send_message(&channel, &room(), command("  hello world  ")).expect("send should succeed");

        assert_eq!(channel.sent_texts(), vec!["hello world".to_owned()]);
    }

    #[test]
    fn maps_closed_channel() {
        let channel = RecordingChannel::closed();

        let result = send_message(&channel, &room(), command("hello"));

        assert_eq!(result, Err(SendMessageError::ChannelClosed));
    }
}
