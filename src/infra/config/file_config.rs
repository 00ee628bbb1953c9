use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, ChannelConfig, LogConfig, RoomConfig};

#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    pub logging: Option<FileLogConfig>,
    pub channel: Option<FileChannelConfig>,
    pub room: Option<FileRoomConfig>,
}

impl FileConfig {
    pub fn merge_into(self, config: &mut AppConfig) {
        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(channel) = self.channel {
            channel.merge_into(&mut config.channel);
        }

        if let Some(room) = self.room {
            room.merge_into(&mut config.room);
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
    pub file: Option<PathBuf>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }

        if let Some(file) = self.file {
            config.file = file;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileChannelConfig {
    pub url: Option<String>,
    pub connect_timeout_ms: Option<u64>,
}

impl FileChannelConfig {
    fn merge_into(self, config: &mut ChannelConfig) {
        if let Some(url) = self.url {
            config.url = url;
        }

        if let Some(timeout_ms) = self.connect_timeout_ms {
            config.connect_timeout_ms = timeout_ms;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileRoomConfig {
    pub room_id: Option<String>,
    pub receiver_id: Option<String>,
    pub product_id: Option<String>,
}

impl FileRoomConfig {
    fn merge_into(self, config: &mut RoomConfig) {
        if let Some(room_id) = self.room_id {
            config.room_id = room_id;
        }

        if let Some(receiver_id) = self.receiver_id {
            config.receiver_id = receiver_id;
        }

        if let Some(product_id) = self.product_id {
            config.product_id = product_id;
        }
    }
}
