use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Canonical movement directions for snake input.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// High-level input events consumed by the game controller.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum GameInput {
    Direction(Direction),
    ToggleRunning,
    Reset,
    Quit,
}

impl GameInput {
    /// Maps a terminal key press onto a game input. Other keys are ignored.
    #[must_use]
    pub fn from_key_event(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Self::Quit);
        }

        let input = match key.code {
            KeyCode::Up | KeyCode::Char('w' | 'W' | 'k') => Self::Direction(Direction::Up),
            KeyCode::Down | KeyCode::Char('s' | 'S' | 'j') => Self::Direction(Direction::Down),
            KeyCode::Left | KeyCode::Char('a' | 'A' | 'h') => Self::Direction(Direction::Left),
            KeyCode::Right | KeyCode::Char('d' | 'D' | 'l') => Self::Direction(Direction::Right),
            KeyCode::Char(' ' | 'p' | 'P') | KeyCode::Enter => Self::ToggleRunning,
            KeyCode::Char('r' | 'R') => Self::Reset,
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => Self::Quit,
            _ => return None,
        };

        Some(input)
    }
}

/// Returns whether a direction change is legal (no immediate 180° turns).
#[must_use]
pub fn direction_change_is_valid(current: Direction, next: Direction) -> bool {
    next != current.opposite()
}

/// Reads terminal events and turns them into [`GameInput`]s.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Waits up to `timeout` for one event and maps it.
    ///
    /// Returns `Ok(None)` on timeout or for events with no game meaning.
    pub fn poll_input(&mut self, timeout: Duration) -> io::Result<Option<GameInput>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }

        match event::read()? {
            Event::Key(key) => Ok(GameInput::from_key_event(key)),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

    use super::{Direction, GameInput, direction_change_is_valid};

    #[test]
    fn opposite_direction_is_correct() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::Right.opposite(), Direction::Left);
    }

    #[test]
    fn direction_change_rejects_reverse() {
        assert!(!direction_change_is_valid(Direction::Up, Direction::Down));
        assert!(!direction_change_is_valid(Direction::Right, Direction::Left));

        assert!(direction_change_is_valid(Direction::Up, Direction::Left));
        assert!(direction_change_is_valid(Direction::Up, Direction::Up));
    }

    #[test]
    fn arrow_and_letter_keys_map_to_inputs() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);

        assert_eq!(
            GameInput::from_key_event(press(KeyCode::Up)),
            Some(GameInput::Direction(Direction::Up))
        );
        assert_eq!(
            GameInput::from_key_event(press(KeyCode::Char('a'))),
            Some(GameInput::Direction(Direction::Left))
        );
        assert_eq!(
            GameInput::from_key_event(press(KeyCode::Char(' '))),
            Some(GameInput::ToggleRunning)
        );
        assert_eq!(
            GameInput::from_key_event(press(KeyCode::Char('r'))),
            Some(GameInput::Reset)
        );
        assert_eq!(
            GameInput::from_key_event(press(KeyCode::Esc)),
            Some(GameInput::Quit)
        );
        assert_eq!(GameInput::from_key_event(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn ctrl_c_quits_and_releases_are_ignored() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(GameInput::from_key_event(ctrl_c), Some(GameInput::Quit));

        let mut release = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert_eq!(GameInput::from_key_event(release), None);
    }
}
