use std::{sync::mpsc::Sender, time::Duration};

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::{
    net::TcpStream,
    runtime::Runtime,
    sync::{mpsc, watch},
    task::JoinHandle,
    time::{sleep, timeout, Instant},
};
use tokio_tungstenite::{
    connect_async,
    tungstenite::{self, Message},
    MaybeTlsStream, WebSocketStream,
};

use crate::{
    domain::{
        events::{AppEvent, ConnectivityStatus},
        message::{ClientEvent, IncomingChatMessage, CHAT_MESSAGE_EVENT},
    },
    infra::{config::ChannelConfig, error::AppError},
    usecases::contracts::{ChannelEmitError, ChatChannel},
};

use super::protocol::{
    decode_frame, encode_event, Handshake, InboundFrame, ProtocolError, CONNECT_FRAME,
    DISCONNECT_FRAME, PONG_FRAME,
};

const CHANNEL_CONNECTED: &str = "CHANNEL_CONNECTED";
const CHANNEL_STOPPED: &str = "CHANNEL_STOPPED";
const CHANNEL_LOST: &str = "CHANNEL_LOST";
const CHANNEL_FRAME_MALFORMED: &str = "CHANNEL_FRAME_MALFORMED";
const CHANNEL_PAYLOAD_MALFORMED: &str = "CHANNEL_PAYLOAD_MALFORMED";

const SOCKET_IO_PATH: &str = "/socket.io/?EIO=4&transport=websocket";
const SHUTDOWN_GRACE: Duration = Duration::from_millis(500);

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

#[derive(Debug, Error)]
pub enum ChannelError {
    #[error("invalid channel URL: {0}")]
    InvalidUrl(String),
    #[error("websocket transport failed: {0}")]
    Transport(Box<tungstenite::Error>),
    #[error("timed out waiting for {0}")]
    Timeout(&'static str),
    #[error("protocol violation: {0}")]
    Protocol(#[from] ProtocolError),
    #[error("server rejected namespace connect: {0}")]
    ConnectRejected(String),
    #[error("server closed the connection")]
    ClosedByServer,
    #[error("no heartbeat from server within {0} ms")]
    HeartbeatLost(u64),
    #[error("failed to encode outgoing event: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("event consumer went away")]
    ConsumerGone,
}

fn transport(error: tungstenite::Error) -> ChannelError {
    ChannelError::Transport(Box::new(error))
}

/// Socket.IO connection to the room server, driven on a private runtime.
///
/// Inbound chat messages and connectivity changes are forwarded to
/// `event_tx`; outgoing events are queued and sent in emission order once the
/// namespace handshake completes.
#[derive(Debug)]
pub struct SocketChannel {
    outgoing_tx: mpsc::UnboundedSender<ClientEvent>,
    stop_tx: Option<watch::Sender<bool>>,
    task: Option<JoinHandle<()>>,
    runtime: Option<Runtime>,
}

impl SocketChannel {
    pub fn connect(config: &ChannelConfig, event_tx: Sender<AppEvent>) -> Result<Self, AppError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("roomchat-channel")
            .enable_all()
            .build()
            .map_err(AppError::ChannelRuntime)?;

        let (outgoing_tx, outgoing_rx) = mpsc::unbounded_channel();
        let (stop_tx, stop_rx) = watch::channel(false);
        let task = runtime.spawn(run_connection(
            config.clone(),
            outgoing_rx,
            event_tx,
            stop_rx,
        ));

        Ok(Self {
            outgoing_tx,
            stop_tx: Some(stop_tx),
            task: Some(task),
            runtime: Some(runtime),
        })
    }
}

impl ChatChannel for SocketChannel {
    fn emit(&self, event: ClientEvent) -> Result<(), ChannelEmitError> {
        self.outgoing_tx
            .send(event)
            .map_err(|_| ChannelEmitError::Closed)
    }
}

impl Drop for SocketChannel {
    fn drop(&mut self) {
        if let Some(stop_tx) = self.stop_tx.take() {
            let _ = stop_tx.send(true);
        }

        if let Some(runtime) = self.runtime.take() {
            // Give the task a chance to send the disconnect frame. The timer
            // must be created inside the runtime.
            if let Some(task) = self.task.take() {
                let _ = runtime.block_on(async { timeout(SHUTDOWN_GRACE, task).await });
            }
            runtime.shutdown_timeout(SHUTDOWN_GRACE);
        }
    }
}

/// Maps the configured base URL onto the Socket.IO websocket endpoint.
pub fn ws_url(base_url: &str) -> Result<String, ChannelError> {
    let base = base_url.trim_end_matches('/');

    let endpoint = if let Some(rest) = base.strip_prefix("http://") {
        format!("ws://{rest}")
    } else if let Some(rest) = base.strip_prefix("https://") {
        format!("wss://{rest}")
    } else if base.starts_with("ws://") || base.starts_with("wss://") {
        base.to_owned()
    } else {
        return Err(ChannelError::InvalidUrl(base_url.to_owned()));
    };

    Ok(format!("{endpoint}{SOCKET_IO_PATH}"))
}

async fn run_connection(
    config: ChannelConfig,
    outgoing_rx: mpsc::UnboundedReceiver<ClientEvent>,
    event_tx: Sender<AppEvent>,
    stop_rx: watch::Receiver<bool>,
) {
    publish_status(&event_tx, ConnectivityStatus::Connecting);

    match drive(&config, outgoing_rx, &event_tx, stop_rx).await {
        Ok(()) => tracing::info!(code = CHANNEL_STOPPED, "channel stopped"),
        Err(error) => tracing::warn!(
            code = CHANNEL_LOST,
            url = %config.url,
            error = %error,
            "channel connection ended"
        ),
    }

    publish_status(&event_tx, ConnectivityStatus::Disconnected);
}

async fn drive(
    config: &ChannelConfig,
    mut outgoing_rx: mpsc::UnboundedReceiver<ClientEvent>,
    event_tx: &Sender<AppEvent>,
    mut stop_rx: watch::Receiver<bool>,
) -> Result<(), ChannelError> {
    let url = ws_url(&config.url)?;
    let connect_timeout = Duration::from_millis(config.connect_timeout_ms);

    let (mut stream, _) = timeout(connect_timeout, connect_async(url.as_str()))
        .await
        .map_err(|_| ChannelError::Timeout("websocket connect"))?
        .map_err(transport)?;

    let handshake = timeout(connect_timeout, open_session(&mut stream))
        .await
        .map_err(|_| ChannelError::Timeout("socket.io handshake"))??;

    tracing::info!(
        code = CHANNEL_CONNECTED,
        sid = %handshake.sid,
        url = %url,
        "channel connected"
    );
    publish_status(event_tx, ConnectivityStatus::Connected);

    let window_ms = handshake.heartbeat_window_ms();
    let window = Duration::from_millis(window_ms);
    let heartbeat = sleep(window);
    tokio::pin!(heartbeat);

    loop {
        tokio::select! {
            changed = stop_rx.changed() => {
                if changed.is_err() || *stop_rx.borrow() {
                    let _ = stream.send(Message::text(DISCONNECT_FRAME.to_owned())).await;
                    let _ = stream.close(None).await;
                    return Ok(());
                }
            }
            outgoing = outgoing_rx.recv() => {
                let Some(event) = outgoing else {
                    let _ = stream.close(None).await;
                    return Ok(());
                };
                let frame = encode_event(&event)?;
                tracing::debug!(event = event.name(), "emitting channel event");
                stream.send(Message::text(frame)).await.map_err(transport)?;
            }
            _ = &mut heartbeat => return Err(ChannelError::HeartbeatLost(window_ms)),
            inbound = stream.next() => {
                let message = inbound.ok_or(ChannelError::ClosedByServer)?.map_err(transport)?;
                let text = match message {
                    Message::Text(text) => text,
                    Message::Close(_) => return Err(ChannelError::ClosedByServer),
                    _ => continue,
                };

                match decode_frame(text.as_str()) {
                    Ok(InboundFrame::Ping) => {
                        stream.send(Message::text(PONG_FRAME.to_owned())).await.map_err(transport)?;
                        heartbeat.as_mut().reset(Instant::now() + window);
                    }
                    Ok(InboundFrame::Event { name, payload }) => {
                        dispatch_event(event_tx, &name, payload)?;
                    }
                    Ok(InboundFrame::Disconnected | InboundFrame::Close) => {
                        return Err(ChannelError::ClosedByServer);
                    }
                    Ok(other) => tracing::debug!(frame = ?other, "ignoring channel frame"),
                    Err(error) => tracing::warn!(
                        code = CHANNEL_FRAME_MALFORMED,
                        error = %error,
                        "dropping malformed channel frame"
                    ),
                }
            }
        }
    }
}

/// Waits for the Engine.IO open packet, then connects the default namespace.
async fn open_session(stream: &mut WsStream) -> Result<Handshake, ChannelError> {
    let handshake = loop {
        match next_frame(stream).await? {
            InboundFrame::Open(handshake) => break handshake,
            other => tracing::debug!(frame = ?other, "frame before open packet"),
        }
    };

    stream
        .send(Message::text(CONNECT_FRAME.to_owned()))
        .await
        .map_err(transport)?;

    loop {
        match next_frame(stream).await? {
            InboundFrame::Connected => return Ok(handshake),
            InboundFrame::ConnectError(message) => {
                return Err(ChannelError::ConnectRejected(message))
            }
            InboundFrame::Ping => stream
                .send(Message::text(PONG_FRAME.to_owned()))
                .await
                .map_err(transport)?,
            InboundFrame::Close | InboundFrame::Disconnected => {
                return Err(ChannelError::ClosedByServer)
            }
            other => tracing::debug!(frame = ?other, "frame before namespace connect"),
        }
    }
}

async fn next_frame(stream: &mut WsStream) -> Result<InboundFrame, ChannelError> {
    loop {
        let message = stream
            .next()
            .await
            .ok_or(ChannelError::ClosedByServer)?
            .map_err(transport)?;

        match message {
            Message::Text(text) => return Ok(decode_frame(text.as_str())?),
            Message::Close(_) => return Err(ChannelError::ClosedByServer),
            _ => {}
        }
    }
}

fn dispatch_event(
    event_tx: &Sender<AppEvent>,
    name: &str,
    payload: Option<serde_json::Value>,
) -> Result<(), ChannelError> {
    if name != CHAT_MESSAGE_EVENT {
        tracing::debug!(event = name, "ignoring unhandled channel event");
        return Ok(());
    }

    let payload = payload.unwrap_or(serde_json::Value::Null);
    match serde_json::from_value::<IncomingChatMessage>(payload) {
        Ok(message) => event_tx
            .send(AppEvent::MessageReceived(message))
            .map_err(|_| ChannelError::ConsumerGone),
        Err(error) => {
            tracing::warn!(
                code = CHANNEL_PAYLOAD_MALFORMED,
                event = name,
                error = %error,
                "dropping chat message with malformed payload"
            );
            Ok(())
        }
    }
}

fn publish_status(event_tx: &Sender<AppEvent>, status: ConnectivityStatus) {
    let _ = event_tx.send(AppEvent::ConnectivityChanged(status));
}
