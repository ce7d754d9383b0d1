use std::io::{Stderr, stderr};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::time::{Instant, interval};

use crate::input::InputHandler;
use crate::render::Renderer;
use crate::screens::{ScreenFlow, Signal};

/// The terminal shell around the game core: raw-mode setup, the event loop,
/// and the frame clock. Input events reach the screen flow as they arrive,
/// so they always land before the frame's tick.
pub struct App {
    flow: ScreenFlow,
    input_handler: InputHandler,
    renderer: Renderer,
    should_quit: bool,
}

impl App {
    pub fn new() -> Self {
        Self {
            flow: ScreenFlow::new(),
            input_handler: InputHandler::new(),
            renderer: Renderer::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run event loop with cleanup
        let result = self.run_event_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        // Frames at ~60 FPS; the simulation rate comes from the session's
        // own accumulator, not from this interval.
        let mut frame_timer = interval(Duration::from_millis(16));
        let mut last_frame = Instant::now();

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Tick the simulation and render one frame
                _ = frame_timer.tick() => {
                    let dt = last_frame.elapsed().as_secs_f32();
                    last_frame = Instant::now();

                    self.flow.on_tick(dt);
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.flow.screen);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            if let Some(command) = self.input_handler.handle_key_event(key) {
                if self.flow.handle_command(command) == Signal::Quit {
                    self.should_quit = true;
                }
            }
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
