/// Identifiers that scope a chat session, read once at startup.
///
/// Values are opaque to the client and forwarded as given; empty strings are
/// accepted and simply produce an inert session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoomContext {
    room: String,
    receiver_id: String,
    product_id: String,
}

impl RoomContext {
    pub fn new(
        room: impl Into<String>,
        receiver_id: impl Into<String>,
        product_id: impl Into<String>,
    ) -> Self {
        Self {
            room: room.into(),
            receiver_id: receiver_id.into(),
            product_id: product_id.into(),
        }
    }

    pub fn room(&self) -> &str {
        &self.room
    }

    pub fn receiver_id(&self) -> &str {
        &self.receiver_id
    }

    pub fn product_id(&self) -> &str {
        &self.product_id
    }
}
