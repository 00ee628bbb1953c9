use anyhow::Result;

use crate::{
    domain::shell_state::ShellState,
    usecases::{
        context::AppContext,
        contracts::{AppEventSource, ShellOrchestrator},
    },
};

use super::{terminal::TerminalSession, view};

pub fn start(
    context: &AppContext,
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
) -> Result<()> {
    tracing::info!(
        log_level = %context.config.logging.level,
        url = %context.config.channel.url,
        room = context.room.room(),
        "starting TUI shell"
    );

    let mut terminal = TerminalSession::new()?;
    run_loop(event_source, orchestrator, |state| {
        terminal.draw(|frame| view::render(frame, state))
    })?;

    tracing::info!("TUI shell stopped");
    Ok(())
}

fn run_loop<D>(
    event_source: &mut dyn AppEventSource,
    orchestrator: &mut dyn ShellOrchestrator,
    mut draw: D,
) -> Result<()>
where
    D: FnMut(&ShellState) -> Result<()>,
{
    while orchestrator.state().is_running() {
        draw(orchestrator.state())?;

        if let Some(event) = event_source.next_event()? {
            orchestrator.handle_event(event)?;
        }
    }

    Ok(())
}
