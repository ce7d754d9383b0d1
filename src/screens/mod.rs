//! Screen flow: menu, how-to, and gameplay.
//!
//! Exactly one screen is active at a time. Each variant carries only the
//! state that is meaningful while it is active, so leaving a screen drops
//! its data (returning to the menu discards the running session).

use crate::game::{Command, Difficulty, GameSession};

/// Labels shown in the main menu, in display order
pub const MENU_OPTIONS: [MenuItem; 5] = [
    MenuItem::PlayEasy,
    MenuItem::PlayMedium,
    MenuItem::PlayHard,
    MenuItem::HowTo,
    MenuItem::Quit,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    PlayEasy,
    PlayMedium,
    PlayHard,
    HowTo,
    Quit,
}

impl MenuItem {
    pub fn label(self) -> &'static str {
        match self {
            MenuItem::PlayEasy => "Play: Easy",
            MenuItem::PlayMedium => "Play: Medium",
            MenuItem::PlayHard => "Play: Hard",
            MenuItem::HowTo => "How to Play",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Main menu state: just the highlighted option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuScreen {
    pub selected: usize,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self { selected: 0 }
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + MENU_OPTIONS.len() - 1) % MENU_OPTIONS.len();
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % MENU_OPTIONS.len();
    }

    pub fn current(&self) -> MenuItem {
        MENU_OPTIONS[self.selected]
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}

/// The active screen
pub enum Screen {
    Menu(MenuScreen),
    HowTo,
    Game(GameSession),
}

/// What the shell should do after a command has been handled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Quit,
}

/// The screen state machine. Routes commands and frame ticks to the active
/// screen and performs transitions between screens.
pub struct ScreenFlow {
    pub screen: Screen,
}

impl ScreenFlow {
    /// Start at the main menu
    pub fn new() -> Self {
        Self {
            screen: Screen::Menu(MenuScreen::new()),
        }
    }

    /// Apply one logical command to the active screen.
    ///
    /// Commands with no meaning in the active screen are silently absorbed.
    /// Quit never transitions; it only tells the shell to terminate.
    pub fn handle_command(&mut self, command: Command) -> Signal {
        if command == Command::Quit {
            return Signal::Quit;
        }

        let next = match &mut self.screen {
            Screen::Menu(menu) => match command {
                Command::SelectionUp | Command::MoveUp => {
                    menu.select_prev();
                    None
                }
                Command::SelectionDown | Command::MoveDown => {
                    menu.select_next();
                    None
                }
                Command::Confirm => match menu.current() {
                    MenuItem::PlayEasy => {
                        Some(Screen::Game(GameSession::new(Difficulty::Easy)))
                    }
                    MenuItem::PlayMedium => {
                        Some(Screen::Game(GameSession::new(Difficulty::Medium)))
                    }
                    MenuItem::PlayHard => {
                        Some(Screen::Game(GameSession::new(Difficulty::Hard)))
                    }
                    MenuItem::HowTo => Some(Screen::HowTo),
                    MenuItem::Quit => return Signal::Quit,
                },
                _ => None,
            },
            Screen::HowTo => match command {
                Command::Back => Some(Screen::Menu(MenuScreen::new())),
                _ => None,
            },
            Screen::Game(session) => match command {
                Command::MoveUp | Command::MoveDown | Command::MoveLeft | Command::MoveRight => {
                    if let Some(direction) = command.direction() {
                        session.set_direction(direction);
                    }
                    None
                }
                Command::TogglePause => {
                    session.toggle_pause();
                    None
                }
                Command::Back => Some(Screen::Menu(MenuScreen::new())),
                Command::Confirm if !session.snake.alive => {
                    Some(Screen::Menu(MenuScreen::new()))
                }
                _ => None,
            },
        };

        if let Some(screen) = next {
            self.screen = screen;
        }
        Signal::Continue
    }

    /// Forward the per-frame time delta; only gameplay consumes time
    pub fn on_tick(&mut self, dt: f32) {
        if let Screen::Game(session) = &mut self.screen {
            session.on_tick(dt);
        }
    }
}

impl Default for ScreenFlow {
    fn default() -> Self {
        Self::new()
    }
}
