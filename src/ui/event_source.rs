use std::{
    sync::mpsc::{Receiver, TryRecvError},
    time::Duration,
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    domain::events::{AppEvent, KeyInput},
    usecases::contracts::AppEventSource,
};

const EVENT_POLL_TIMEOUT: Duration = Duration::from_millis(100);

#[derive(Default)]
pub struct CrosstermEventSource;

impl AppEventSource for CrosstermEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if !event::poll(EVENT_POLL_TIMEOUT)? {
            return Ok(Some(AppEvent::Tick));
        }

        match event::read()? {
            Event::Key(key) => Ok(map_key_event(key)),
            _ => Ok(None),
        }
    }
}

fn map_key_event(key: KeyEvent) -> Option<AppEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
        return Some(AppEvent::QuitRequested);
    }

    let name = match key.code {
        KeyCode::Char(ch) => ch.to_string(),
        KeyCode::Enter => "enter".to_owned(),
        KeyCode::Backspace => "backspace".to_owned(),
        KeyCode::Delete => "delete".to_owned(),
        KeyCode::Left => "left".to_owned(),
        KeyCode::Right => "right".to_owned(),
        KeyCode::Home => "home".to_owned(),
        KeyCode::End => "end".to_owned(),
        _ => return None,
    };

    Some(AppEvent::InputKey(KeyInput::new(name, ctrl)))
}

/// Merges events pushed by the channel task with an interactive source.
///
/// Queued channel events are handed out first and in arrival order; the inner
/// source is only polled once the queue is empty.
pub struct ChannelEventSource<S> {
    inner: S,
    channel_events: Receiver<AppEvent>,
    channel_open: bool,
}

impl<S> ChannelEventSource<S>
where
    S: AppEventSource,
{
    pub fn new(inner: S, channel_events: Receiver<AppEvent>) -> Self {
        Self {
            inner,
            channel_events,
            channel_open: true,
        }
    }
}

impl<S> AppEventSource for ChannelEventSource<S>
where
    S: AppEventSource,
{
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        if self.channel_open {
            match self.channel_events.try_recv() {
                Ok(event) => return Ok(Some(event)),
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    tracing::debug!("channel event queue closed");
                    self.channel_open = false;
                }
            }
        }

        self.inner.next_event()
    }
}

#[cfg(test)]
pub struct MockEventSource {
    queue: std::collections::VecDeque<AppEvent>,
}

#[cfg(test)]
impl MockEventSource {
    pub fn from(events: Vec<AppEvent>) -> Self {
        Self {
            queue: events.into(),
        }
    }
}

#[cfg(test)]
impl AppEventSource for MockEventSource {
    fn next_event(&mut self) -> Result<Option<AppEvent>> {
        Ok(self.queue.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::mpsc;

    use super::*;
    use crate::domain::{events::ConnectivityStatus, message::IncomingChatMessage};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    fn key_event(name: &str) -> Option<AppEvent> {
        Some(AppEvent::InputKey(KeyInput::new(name, false)))
    }

    #[test]
    fn esc_and_ctrl_c_request_quit() {
        assert_eq!(
            map_key_event(press(KeyCode::Esc, KeyModifiers::NONE)),
            Some(AppEvent::QuitRequested)
        );
        assert_eq!(
            map_key_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(AppEvent::QuitRequested)
        );
    }

    #[test]
    fn plain_q_is_typed_not_quit() {
        assert_eq!(
            map_key_event(press(KeyCode::Char('q'), KeyModifiers::NONE)),
            key_event("q")
        );
    }

    #[test]
    fn editing_keys_map_to_named_inputs() {
        assert_eq!(
            map_key_event(press(KeyCode::Enter, KeyModifiers::NONE)),
            key_event("enter")
        );
        assert_eq!(
            map_key_event(press(KeyCode::Backspace, KeyModifiers::NONE)),
            key_event("backspace")
        );
        assert_eq!(
            map_key_event(press(KeyCode::Home, KeyModifiers::NONE)),
            key_event("home")
        );
        assert_eq!(map_key_event(press(KeyCode::F(5), KeyModifiers::NONE)), None);
    }

    #[test]
    fn ctrl_chords_carry_the_ctrl_flag() {
        assert_eq!(
            map_key_event(press(KeyCode::Char('a'), KeyModifiers::CONTROL)),
            Some(AppEvent::InputKey(KeyInput::new("a", true)))
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let mut key = press(KeyCode::Char('x'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert_eq!(map_key_event(key), None);
    }

    #[test]
    fn channel_events_are_drained_before_inner_source() {
        let (tx, rx) = mpsc::channel();
        let message = IncomingChatMessage {
            username: "Alice".to_owned(),
            message: "hi".to_owned(),
            timestamp: None,
        };
        tx.send(AppEvent::ConnectivityChanged(ConnectivityStatus::Connected))
            .expect("queue must accept event");
        tx.send(AppEvent::MessageReceived(message.clone()))
            .expect("queue must accept event");

        let mut source =
            ChannelEventSource::new(MockEventSource::from(vec![AppEvent::QuitRequested]), rx);

        assert_eq!(
            source.next_event().expect("must read"),
            Some(AppEvent::ConnectivityChanged(ConnectivityStatus::Connected))
        );
        assert_eq!(
            source.next_event().expect("must read"),
            Some(AppEvent::MessageReceived(message))
        );
        assert_eq!(
            source.next_event().expect("must read"),
            Some(AppEvent::QuitRequested)
        );
    }

    #[test]
    fn closed_channel_falls_back_to_inner_source() {
        let (tx, rx) = mpsc::channel::<AppEvent>();
        drop(tx);

        let mut source = ChannelEventSource::new(MockEventSource::from(vec![AppEvent::Tick]), rx);

        assert_eq!(source.next_event().expect("must read"), Some(AppEvent::Tick));
        assert_eq!(source.next_event().expect("must read"), None);
    }
}
