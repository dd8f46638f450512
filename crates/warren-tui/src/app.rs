//! Application state and main UI controller.

use crossterm::event::{Event, KeyEventKind};
use ratatui::Frame;
use warren_core::dungeon::Dungeon;
use warren_core::player::{self, PlayerPose, ViewMode};
use warren_core::raycast;
use warren_core::view::{self, ViewBuffer};

use crate::display;
use crate::input::{is_quit, key_to_command};

/// Fallback viewport when the terminal size is unavailable.
pub const DEFAULT_VIEW_WIDTH: usize = 80;
pub const DEFAULT_VIEW_HEIGHT: usize = 24;

/// Application state: one dungeon, one player, one view mode. The viewport
/// is taken from the terminal once at startup and fixed for the run.
pub struct App {
    dungeon: Dungeon,
    pose: PlayerPose,
    mode: ViewMode,
    view_width: usize,
    view_height: usize,
    should_quit: bool,
}

impl App {
    pub fn new(dungeon: Dungeon, view_width: usize, view_height: usize) -> Self {
        let pose = dungeon.spawn;
        Self {
            dungeon,
            pose,
            mode: ViewMode::default(),
            view_width: view_width.max(1),
            view_height: view_height.max(1),
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn pose(&self) -> &PlayerPose {
        &self.pose
    }

    /// Apply one terminal event to the simulation.
    pub fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        // Release and repeat events would double every keypress on Windows.
        if key.kind != KeyEventKind::Press {
            return;
        }
        if is_quit(key) {
            self.should_quit = true;
            return;
        }
        if let Some(command) = key_to_command(key) {
            player::apply_command(
                &mut self.pose,
                &mut self.mode,
                &self.dungeon.grid,
                self.dungeon.tile_size,
                command,
            );
        }
    }

    /// Compose the current frame's character buffer.
    pub fn compose(&self) -> ViewBuffer {
        match self.mode {
            ViewMode::FirstPerson => {
                let columns = raycast::cast(
                    &self.dungeon.grid,
                    &self.pose,
                    self.view_width,
                    self.view_height,
                    self.dungeon.tile_size,
                );
                view::compose_first_person(&columns, self.view_height)
            }
            ViewMode::Overhead => view::compose_overhead(
                &self.dungeon.grid,
                &self.pose,
                self.dungeon.tile_size,
                self.view_width,
                self.view_height,
            ),
        }
    }

    pub fn render(&self, frame: &mut Frame) {
        display::render(frame, &self.compose(), self.mode);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use warren_core::dungeon::{generate, GenerationConfig};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn test_app() -> App {
        let dungeon = generate(&GenerationConfig::default()).unwrap();
        App::new(dungeon, DEFAULT_VIEW_WIDTH, DEFAULT_VIEW_HEIGHT)
    }

    #[test]
    fn starts_at_the_spawn_pose_in_first_person() {
        let app = test_app();
        assert_eq!(app.mode(), ViewMode::FirstPerson);
        assert_eq!(*app.pose(), app.dungeon.spawn);
    }

    #[test]
    fn quit_key_sets_the_flag() {
        let mut app = test_app();
        assert!(!app.should_quit());
        app.handle_event(press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn map_toggle_switches_composition() {
        let mut app = test_app();
        app.handle_event(press(KeyCode::Char('e')));
        assert_eq!(app.mode(), ViewMode::Overhead);
        let overhead = app.compose();
        assert_eq!(overhead.width(), DEFAULT_VIEW_WIDTH);
        assert_eq!(overhead.height(), DEFAULT_VIEW_HEIGHT);
        // The overhead view always shows the player marker.
        let mut found = false;
        for y in 0..DEFAULT_VIEW_HEIGHT {
            for x in 0..DEFAULT_VIEW_WIDTH {
                if overhead.get(x, y) == Some('P') {
                    found = true;
                }
            }
        }
        assert!(found, "player marker missing from overhead view");
    }

    #[test]
    fn rotation_changes_the_pose() {
        let mut app = test_app();
        let before = *app.pose();
        app.handle_event(press(KeyCode::Char('a')));
        assert_ne!(app.pose().angle, before.angle);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = test_app();
        let mut key = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_event(Event::Key(key));
        assert!(!app.should_quit());
    }
}
