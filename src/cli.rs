use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::infra::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "roomchat", about = "Terminal chat-room client (Socket.IO)")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Server base URL, e.g. http://127.0.0.1:5000
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Room to join
    #[arg(long, global = true)]
    pub room: Option<String>,

    /// Receiver id attached to every outgoing message
    #[arg(long, global = true)]
    pub receiver_id: Option<String>,

    /// Product id attached to every outgoing message
    #[arg(long, global = true)]
    pub product_id: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Join the room and start the TUI
    Run,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run)
    }

    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            url: self.url.clone(),
            room_id: self.room.clone(),
            receiver_id: self.receiver_id.clone(),
            product_id: self.product_id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::{Cli, Command};
    use crate::infra::config::ConfigOverrides;

    #[test]
    fn defaults_to_run_when_command_is_missing() {
        let cli = Cli::parse_from(["roomchat"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(cli.overrides(), ConfigOverrides::default());
    }

    #[test]
    fn parses_explicit_run_command() {
        let cli = Cli::parse_from(["roomchat", "run", "--config", "custom.toml"]);

        assert!(matches!(cli.command_or_default(), Command::Run));
        assert_eq!(
            cli.config
                .as_deref()
                .map(|p| p.to_string_lossy().to_string()),
            Some("custom.toml".to_owned())
        );
    }

    #[test]
    fn room_flags_become_config_overrides() {
        let cli = Cli::parse_from([
            "roomchat",
            "--url",
            "https://chat.example.com",
            "--room",
            "room-7-9",
            "--receiver-id",
            "9",
            "--product-id",
            "7",
        ]);

        let overrides = cli.overrides();

        assert_eq!(overrides.url.as_deref(), Some("https://chat.example.com"));
        assert_eq!(overrides.room_id.as_deref(), Some("room-7-9"));
        assert_eq!(overrides.receiver_id.as_deref(), Some("9"));
        assert_eq!(overrides.product_id.as_deref(), Some("7"));
    }
}
