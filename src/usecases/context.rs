use tracing_appender::non_blocking::WorkerGuard;

use crate::{domain::room::RoomContext, infra::config::AppConfig};

#[derive(Debug)]
pub struct AppContext {
    pub config: AppConfig,
    pub room: RoomContext,
    /// Flushes buffered log lines when the context is dropped.
    pub log_guard: Option<WorkerGuard>,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let room = RoomContext::new(
            config.room.room_id.clone(),
            config.room.receiver_id.clone(),
            config.room.product_id.clone(),
        );

        Self {
            config,
            room,
            log_guard: None,
        }
    }
}
