// SPDX-License-Identifier: MPL-2.0
//! Overlay presentation state for the navigation menu on narrow windows.
//!
//! A deliberately small two-state machine. The state lives with the shell
//! and is never persisted: a fresh window always starts closed.

/// Whether the navigation drawer overlay is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    /// Flips the state. Bound to the burger control.
    pub fn toggle(&mut self) {
        *self = match self {
            DrawerState::Closed => DrawerState::Open,
            DrawerState::Open => DrawerState::Closed,
        };
    }

    /// Forces `Open`.
    pub fn open(&mut self) {
        *self = DrawerState::Open;
    }

    /// Forces `Closed`. No-op if already closed.
    pub fn close(&mut self) {
        *self = DrawerState::Closed;
    }

    pub fn is_open(self) -> bool {
        self == DrawerState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_closed() {
        assert_eq!(DrawerState::default(), DrawerState::Closed);
    }

    #[test]
    fn toggle_alternates_states() {
        let mut drawer = DrawerState::default();
        drawer.toggle();
        assert!(drawer.is_open());
        drawer.toggle();
        assert!(!drawer.is_open());
    }

    #[test]
    fn close_when_already_closed_is_a_no_op() {
        let mut drawer = DrawerState::default();
        drawer.close();
        assert_eq!(drawer, DrawerState::Closed);
    }

    #[test]
    fn open_forces_open() {
        let mut drawer = DrawerState::default();
        drawer.open();
        drawer.open();
        assert!(drawer.is_open());
    }
}
