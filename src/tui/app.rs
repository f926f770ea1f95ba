//! Application state and event handling.

use super::cues::Cues;
use super::input::{self, Action};
use crate::game::{ComputerTicket, GameMachine, Theme};
use crate::store::StateStore;
use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::debug;

/// Delay before the computer answers, so the human sees their own move
/// land first.
pub const COMPUTER_DELAY: Duration = Duration::from_millis(500);

/// Rotation period of the welcome-screen theme carousel.
const CAROUSEL_PERIOD: Duration = Duration::from_millis(2500);

const KONAMI: [KeyCode; 10] = [
    KeyCode::Up,
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::Char('b'),
    KeyCode::Char('a'),
];

/// Events delivered to the app from background tasks.
#[derive(Debug, Clone, Copy)]
pub enum AppEvent {
    /// A scheduled computer move's delay has elapsed.
    ComputerDue(ComputerTicket),
}

/// Which screen owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Landing screen with the theme carousel.
    Welcome,
    /// The board.
    Game,
}

/// Welcome-screen state: carousel rotation and Konami-code progress.
#[derive(Debug)]
pub struct Welcome {
    carousel: Theme,
    rotated_at: Instant,
    recent_keys: Vec<KeyCode>,
    konami_found: bool,
}

impl Welcome {
    fn new() -> Self {
        Self {
            carousel: Theme::default(),
            rotated_at: Instant::now(),
            recent_keys: Vec::new(),
            konami_found: false,
        }
    }

    /// Theme currently previewed by the carousel.
    pub fn carousel(&self) -> Theme {
        self.carousel
    }

    /// True once the Konami code has been entered.
    pub fn konami_found(&self) -> bool {
        self.konami_found
    }

    /// Compares the sliding window of recent keys against the code.
    fn advance_konami(&mut self, key: KeyCode) {
        self.recent_keys.push(key);
        if self.recent_keys.len() > KONAMI.len() {
            self.recent_keys.remove(0);
        }
        if self.recent_keys == KONAMI {
            self.konami_found = true;
        }
    }
}

/// Main application state.
pub struct App<S> {
    machine: GameMachine<S>,
    screen: Screen,
    welcome: Welcome,
    cues: Cues,
    events_tx: mpsc::UnboundedSender<AppEvent>,
    timer: Option<JoinHandle<()>>,
    should_quit: bool,
}

impl<S: StateStore> App<S> {
    /// Creates the app over a loaded machine.
    pub fn new(
        machine: GameMachine<S>,
        events_tx: mpsc::UnboundedSender<AppEvent>,
        skip_welcome: bool,
    ) -> Self {
        let mut app = Self {
            machine,
            screen: if skip_welcome {
                Screen::Game
            } else {
                Screen::Welcome
            },
            welcome: Welcome::new(),
            cues: Cues::default(),
            events_tx,
            timer: None,
            should_quit: false,
        };
        if app.screen == Screen::Game {
            app.arm_computer();
        }
        app
    }

    /// Handles one key press.
    pub fn handle_key(&mut self, key: KeyCode) {
        match self.screen {
            Screen::Welcome => self.handle_welcome_key(key),
            Screen::Game => self.handle_game_key(key),
        }
    }

    fn handle_welcome_key(&mut self, key: KeyCode) {
        self.welcome.advance_konami(key);
        match key {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter | KeyCode::Char('p') => {
                debug!("Leaving welcome screen");
                self.screen = Screen::Game;
                // A restored versus-computer round may already owe O a move.
                self.arm_computer();
            }
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyCode) {
        let Some(action) = input::map_key(key) else {
            return;
        };

        match action {
            Action::Quit => self.should_quit = true,
            Action::MoveFocus(dir) => self.machine.move_focus(dir),
            Action::Activate => {
                if let Some(transition) = self.machine.activate_focused() {
                    self.cues.play(transition);
                }
                self.arm_computer();
            }
            Action::PlaceAt(index) => {
                if let Some(transition) = self.machine.apply_move(index) {
                    self.cues.play(transition);
                }
                self.arm_computer();
            }
            Action::Undo => {
                self.machine.undo();
                self.arm_computer();
            }
            Action::NewRound => {
                self.machine.reset_round();
                self.arm_computer();
            }
            Action::ResetAll => {
                self.machine.reset_all();
                self.arm_computer();
            }
            Action::ToggleMode => {
                let mode = self.machine.mode().toggled();
                self.machine.set_mode(mode);
                self.arm_computer();
            }
            Action::CycleTheme => {
                let theme = self.machine.theme().next();
                self.machine.set_theme(theme);
            }
            Action::ToggleMute => {
                self.cues.toggle_mute();
            }
        }
    }

    /// Handles a background event.
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::ComputerDue(ticket) => {
                let mut rng = rand::rng();
                if let Some(transition) = self.machine.redeem_computer(ticket, &mut rng) {
                    self.cues.play(transition);
                }
                self.arm_computer();
            }
        }
    }

    /// Periodic housekeeping between input events.
    pub fn tick(&mut self) {
        if self.screen == Screen::Welcome && self.welcome.rotated_at.elapsed() >= CAROUSEL_PERIOD {
            self.welcome.carousel = self.welcome.carousel.next();
            self.welcome.rotated_at = Instant::now();
        }
    }

    /// Arms the computer-move timer when the machine says one is due.
    ///
    /// Any previously armed timer is aborted first; the ticket check in
    /// the machine keeps a racing fire harmless anyway.
    fn arm_computer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }

        if let Some(ticket) = self.machine.schedule_computer() {
            let tx = self.events_tx.clone();
            self.timer = Some(tokio::spawn(async move {
                tokio::time::sleep(COMPUTER_DELAY).await;
                let _ = tx.send(AppEvent::ComputerDue(ticket));
            }));
        }
    }

    /// Returns the machine, for rendering.
    pub fn machine(&self) -> &GameMachine<S> {
        &self.machine
    }

    /// Returns the active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the welcome-screen state.
    pub fn welcome(&self) -> &Welcome {
        &self.welcome
    }

    /// True while sound cues are muted.
    pub fn muted(&self) -> bool {
        self.cues.muted()
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

impl<S> Drop for App<S> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn konami_code_is_detected() {
        let mut welcome = Welcome::new();
        for key in KONAMI {
            welcome.advance_konami(key);
        }
        assert!(welcome.konami_found());
    }

    #[test]
    fn konami_mismatch_restarts_cleanly() {
        let mut welcome = Welcome::new();
        welcome.advance_konami(KeyCode::Up);
        welcome.advance_konami(KeyCode::Char('x'));
        assert!(!welcome.konami_found());

        // An Up after a mismatch starts a new attempt.
        welcome.advance_konami(KeyCode::Up);
        for key in &KONAMI[1..] {
            welcome.advance_konami(*key);
        }
        assert!(welcome.konami_found());
    }
}
