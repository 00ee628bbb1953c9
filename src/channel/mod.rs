//! Channel layer: Socket.IO transport to the room server.

mod connection;
mod protocol;

pub use connection::SocketChannel;

/// Returns the channel module name for smoke checks.
pub fn module_name() -> &'static str {
    "channel"
}
