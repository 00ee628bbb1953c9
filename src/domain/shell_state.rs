use super::{
    display_list::DisplayList, events::ConnectivityStatus,
    message_input_state::MessageInputState, room::RoomContext,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellState {
    running: bool,
    connectivity_status: ConnectivityStatus,
    room: RoomContext,
    display_list: DisplayList,
    message_input: MessageInputState,
}

impl ShellState {
    pub fn new(room: RoomContext) -> Self {
        Self {
            running: true,
            connectivity_status: ConnectivityStatus::Connecting,
            room,
            display_list: DisplayList::default(),
            message_input: MessageInputState::default(),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn connectivity_status(&self) -> ConnectivityStatus {
        self.connectivity_status
    }

    pub fn set_connectivity_status(&mut self, status: ConnectivityStatus) {
        self.connectivity_status = status;
    }

    pub fn room(&self) -> &RoomContext {
        &self.room
    }

    pub fn display_list(&self) -> &DisplayList {
        &self.display_list
    }

    pub fn display_list_mut(&mut self) -> &mut DisplayList {
        &mut self.display_list
    }

    pub fn message_input(&self) -> &MessageInputState {
        &self.message_input
    }

    pub fn message_input_mut(&mut self) -> &mut MessageInputState {
        &mut self.message_input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_running_and_connecting_with_empty_panels() {
        let state = ShellState::new(RoomContext::new("r1", "2", "3"));

        assert!(state.is_running());
        assert_eq!(state.connectivity_status(), ConnectivityStatus::Connecting);
        assert!(state.display_list().is_empty());
        assert!(state.message_input().is_empty());
        assert_eq!(state.room().room(), "r1");
    }

    #[test]
    fn stop_ends_the_session() {
        let mut state = ShellState::new(RoomContext::default());
        state.stop();

        assert!(!state.is_running());
    }
}
