use crate::domain::{
    display_list::{DisplayEntry, DisplayList},
    message::IncomingChatMessage,
};

/// Appends a received chat message to the display list, newest last.
pub fn receive_message(display_list: &mut DisplayList, message: IncomingChatMessage) {
    let entry: DisplayEntry = message.into();
    tracing::debug!(
        entry = %entry.display_text(),
        position = display_list.len(),
        "chat message received"
    );
    display_list.append(entry);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_one_entry_per_message() {
        let mut list = DisplayList::default();

        receive_message(
            &mut list,
            IncomingChatMessage {
                username: "Alice".to_owned(),
                message: "hi".to_owned(),
                timestamp: Some("10:00".to_owned()),
            },
        );

        assert_eq!(list.len(), 1);
        assert_eq!(list.entries()[0].display_text(), "Alice: hi 10:00");
        assert_eq!(list.scroll_index(), Some(0));
    }
}
