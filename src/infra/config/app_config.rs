use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AppConfig {
    pub logging: LogConfig,
    pub channel: ChannelConfig,
    pub room: RoomConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
    pub file: PathBuf,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            file: PathBuf::from("roomchat.log"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChannelConfig {
    /// Server base URL; `http(s)://` and `ws(s)://` are both accepted.
    pub url: String,
    pub connect_timeout_ms: u64,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            url: "http://127.0.0.1:5000".to_owned(),
            connect_timeout_ms: 5_000,
        }
    }
}

/// Identifiers the hosting context supplies for the chat session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct RoomConfig {
    pub room_id: String,
    pub receiver_id: String,
    pub product_id: String,
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ConfigOverrides {
    pub url: Option<String>,
    pub room_id: Option<String>,
    pub receiver_id: Option<String>,
    pub product_id: Option<String>,
}

impl ConfigOverrides {
    pub fn apply(self, config: &mut AppConfig) {
        if let Some(url) = self.url {
            config.channel.url = url;
        }

        if let Some(room_id) = self.room_id {
            config.room.room_id = room_id;
        }

        if let Some(receiver_id) = self.receiver_id {
            config.room.receiver_id = receiver_id;
        }

        if let Some(product_id) = self.product_id {
            config.room.product_id = product_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_only_given_values() {
        let mut config = AppConfig::default();
        config.room.receiver_id = "from-file".to_owned();

        ConfigOverrides {
            url: Some("ws://chat.local".to_owned()),
            room_id: Some("r9".to_owned()),
            receiver_id: None,
            product_id: None,
        }
        .apply(&mut config);

        assert_eq!(config.channel.url, "ws://chat.local");
        assert_eq!(config.room.room_id, "r9");
        assert_eq!(config.room.receiver_id, "from-file");
        assert_eq!(config.room.product_id, "");
    }
}
