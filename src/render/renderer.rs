use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{GRID_COLS, GRID_ROWS, GameSession, Position};
use crate::screens::{MENU_OPTIONS, MenuScreen, Screen};

const HOW_TO_LINES: [&str; 7] = [
    "Goal: Eat food to grow and score points.",
    "Controls:",
    "  - Move: Arrow Keys or WASD",
    "  - Pause/Resume: P",
    "  - Back to Menu: Esc",
    "Scoring: +1 per food. Don't crash into yourself.",
    "Wrap-around: Going off one edge brings you to the other side.",
];

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Draw the active screen. Reads state only; all mutation happens in the
    /// screen flow.
    pub fn render(&self, frame: &mut Frame, screen: &Screen) {
        match screen {
            Screen::Menu(menu) => self.render_menu(frame, menu),
            Screen::HowTo => self.render_how_to(frame),
            Screen::Game(session) => self.render_game(frame, session),
        }
    }

    fn render_menu(&self, frame: &mut Frame, menu: &MenuScreen) {
        let mut lines = vec![
            Line::from(Span::styled(
                "Snake",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "Use Up/Down to select, Enter to confirm",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(""),
        ];

        for (i, item) in MENU_OPTIONS.iter().enumerate() {
            let style = if i == menu.selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            lines.push(Line::from(Span::styled(item.label(), style)));
        }

        let paragraph = Paragraph::new(lines).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double),
        );
        frame.render_widget(paragraph, frame.area());
    }

    fn render_how_to(&self, frame: &mut Frame) {
        let mut lines = vec![
            Line::from(Span::styled(
                "How to Play",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        for text in HOW_TO_LINES {
            lines.push(Line::from(Span::styled(
                text,
                Style::default().fg(Color::White),
            )));
        }
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Press Esc to return to Menu.",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, frame.area());
    }

    fn render_game(&self, frame: &mut Frame, session: &GameSession) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // HUD
                Constraint::Min(0),    // Game area
                Constraint::Length(1), // Controls
            ])
            .split(frame.area());

        frame.render_widget(self.render_hud(session), chunks[0]);

        if session.snake.alive {
            frame.render_widget(self.render_grid(session), chunks[1]);
        } else {
            frame.render_widget(self.render_game_over(session), chunks[1]);
        }

        frame.render_widget(self.render_controls(), chunks[2]);
    }

    fn render_hud(&self, session: &GameSession) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("Score: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Difficulty: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                session.difficulty.label(),
                Style::default().fg(Color::White),
            ),
        ];
        if session.paused && session.snake.alive {
            spans.push(Span::raw("    "));
            spans.push(Span::styled(
                "Paused",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
        }

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }

    fn render_grid(&self, session: &GameSession) -> Paragraph<'_> {
        let mut lines = Vec::new();

        for y in 0..GRID_ROWS {
            let mut spans = Vec::new();

            for x in 0..GRID_COLS {
                let pos = Position::new(x, y);

                let cell = if pos == session.snake.head() {
                    Span::styled(
                        "■ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if session.snake.body.contains(&pos) {
                    Span::styled("□ ", Style::default().fg(Color::Green))
                } else if pos == session.food.position {
                    Span::styled(
                        "O ",
                        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                    )
                } else {
                    Span::styled(". ", Style::default().fg(Color::DarkGray))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .title(" Snake "),
            )
            .alignment(Alignment::Center)
    }

    fn render_game_over(&self, session: &GameSession) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    session.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "Enter",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to return to the menu", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("P", Style::default().fg(Color::Cyan)),
            Span::raw(" to pause | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" for menu"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
