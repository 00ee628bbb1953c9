//! Socket.IO framing over Engine.IO v4 websocket text frames.
//!
//! An Engine.IO frame starts with a one-digit packet type; type `4` carries a
//! Socket.IO packet whose own type digit follows, then an optional
//! `/namespace,` prefix, an optional ack id, and a JSON body:
//!
//! ```text
//! 0{"sid":"..","pingInterval":25000,"pingTimeout":20000}   open
//! 2 / 3                                                    ping / pong
//! 40 / 40{"sid":".."}                                      namespace connect
//! 42["chat_message",{"username":"..","message":".."}]      event
//! ```

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::domain::message::ClientEvent;

/// Namespace connect request for the default namespace.
pub const CONNECT_FRAME: &str = "40";
/// Namespace disconnect for the default namespace.
pub const DISCONNECT_FRAME: &str = "41";
/// Engine.IO heartbeat reply.
pub const PONG_FRAME: &str = "3";

const DEFAULT_PING_INTERVAL_MS: u64 = 25_000;
const DEFAULT_PING_TIMEOUT_MS: u64 = 20_000;

/// Engine.IO open packet payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Handshake {
    pub sid: String,
    #[serde(default)]
    pub ping_interval: u64,
    #[serde(default)]
    pub ping_timeout: u64,
}

impl Handshake {
    /// Longest silence tolerated between two server pings, in milliseconds.
    pub fn heartbeat_window_ms(&self) -> u64 {
        let interval = match self.ping_interval {
            0 => DEFAULT_PING_INTERVAL_MS,
            value => value,
        };
        let timeout = match self.ping_timeout {
            0 => DEFAULT_PING_TIMEOUT_MS,
            value => value,
        };
        interval.saturating_add(timeout)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum InboundFrame {
    Open(Handshake),
    Close,
    Ping,
    Connected,
    ConnectError(String),
    Disconnected,
    Event {
        name: String,
        payload: Option<Value>,
    },
    /// A well-formed packet the client has no use for (pong, noop, acks, ...).
    Ignored(&'static str),
}

#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("empty frame")]
    Empty,
    #[error("unknown engine packet type `{0}`")]
    UnknownEnginePacket(char),
    #[error("unknown socket packet type `{0}`")]
    UnknownSocketPacket(char),
    #[error("invalid JSON body: {0}")]
    Json(#[from] serde_json::Error),
    #[error("event body must be an array starting with the event name")]
    MalformedEvent,
}

pub fn decode_frame(frame: &str) -> Result<InboundFrame, ProtocolError> {
    let mut chars = frame.chars();
    let packet_type = chars.next().ok_or(ProtocolError::Empty)?;
    let body = chars.as_str();

    match packet_type {
        '0' => Ok(InboundFrame::Open(serde_json::from_str(body)?)),
        '1' => Ok(InboundFrame::Close),
        '2' => Ok(InboundFrame::Ping),
        '3' => Ok(InboundFrame::Ignored("pong")),
        '4' => decode_socket_packet(body),
        '5' => Ok(InboundFrame::Ignored("upgrade")),
        '6' => Ok(InboundFrame::Ignored("noop")),
        other => Err(ProtocolError::UnknownEnginePacket(other)),
    }
}

pub fn encode_event(event: &ClientEvent) -> Result<String, serde_json::Error> {
    let body = Value::Array(vec![Value::from(event.name()), event.payload()?]);
    Ok(format!("42{body}"))
}

fn decode_socket_packet(packet: &str) -> Result<InboundFrame, ProtocolError> {
    let mut chars = packet.chars();
    let packet_type = chars.next().ok_or(ProtocolError::Empty)?;
    let body = strip_namespace_and_ack(chars.as_str());

    match packet_type {
        '0' => Ok(InboundFrame::Connected),
        '1' => Ok(InboundFrame::Disconnected),
        '2' => decode_event(body),
        '3' => Ok(InboundFrame::Ignored("ack")),
        '4' => Ok(InboundFrame::ConnectError(connect_error_message(body))),
        '5' => Ok(InboundFrame::Ignored("binary_event")),
        '6' => Ok(InboundFrame::Ignored("binary_ack")),
        other => Err(ProtocolError::UnknownSocketPacket(other)),
    }
}

fn strip_namespace_and_ack(body: &str) -> &str {
    let body = if body.starts_with('/') {
        body.split_once(',').map_or("", |(_, rest)| rest)
    } else {
        body
    };
    body.trim_start_matches(|ch: char| ch.is_ascii_digit())
}

fn decode_event(body: &str) -> Result<InboundFrame, ProtocolError> {
    let value: Value = serde_json::from_str(body)?;
    let Value::Array(mut items) = value else {
        return Err(ProtocolError::MalformedEvent);
    };
    if items.is_empty() {
        return Err(ProtocolError::MalformedEvent);
    }

    let Value::String(name) = items.remove(0) else {
        return Err(ProtocolError::MalformedEvent);
    };
    let payload = (!items.is_empty()).then(|| items.remove(0));

    Ok(InboundFrame::Event { name, payload })
}

fn connect_error_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => fields
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(body)
            .to_owned(),
        Ok(Value::String(message)) => message,
        _ => body.to_owned(),
    }
}
