use std::sync::mpsc;

use anyhow::Result;

use crate::{
    channel::{self, SocketChannel},
    cli::{Cli, Command},
    domain, infra, ui,
    usecases::{self, bootstrap, shell::DefaultShellOrchestrator},
};

pub fn run(cli: Cli) -> Result<()> {
    match cli.command_or_default() {
        Command::Run => {
            let context = bootstrap::bootstrap(cli.config.as_deref(), cli.overrides())?;

            tracing::debug!(
                ui = ui::module_name(),
                domain = domain::module_name(),
                channel = channel::module_name(),
                usecases = usecases::module_name(),
                infra = infra::module_name(),
                "module boundaries loaded"
            );

            if context.room.room().is_empty() {
                tracing::warn!("room id is empty; joining the unnamed room");
            }

            let (event_tx, event_rx) = mpsc::channel();
            let socket = SocketChannel::connect(&context.config.channel, event_tx)?;

            let mut orchestrator = DefaultShellOrchestrator::start(socket, context.room.clone());
            let mut event_source = ui::ChannelEventSource::new(ui::CrosstermEventSource, event_rx);

            ui::shell::start(&context, &mut event_source, &mut orchestrator)?;
        }
    }

    Ok(())
}
