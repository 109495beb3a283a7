use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{Instant, Interval, MissedTickBehavior, interval, interval_at};

use crate::audio::AudioSession;
use crate::game::{Direction, GameEngine, GameState, GameStatus};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::{Menu, MenuItem, Renderer};

/// Render at ~30 FPS
const RENDER_INTERVAL: Duration = Duration::from_millis(33);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Playing,
}

/// Keyboard play in the terminal.
///
/// Input, the movement timer, the elapsed-time clock and rendering are all
/// driven from one `select!` loop, so every state mutation is serialised.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    audio: AudioSession,
    screen: Screen,
    start_menu: Menu,
    game_over_menu: Menu,
    should_quit: bool,
    /// Movement timer must be rebuilt with the current speed
    move_timer_stale: bool,
    /// Clock must restart on a whole period
    clock_stale: bool,
}

impl HumanMode {
    pub fn new(mut engine: GameEngine, audio: AudioSession) -> Self {
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            audio,
            screen: Screen::Start,
            start_menu: Menu::start(),
            game_over_menu: Menu::game_over(),
            should_quit: false,
            move_timer_stale: false,
            clock_stale: false,
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

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut move_timer = periodic(self.state.tick_interval());
        let mut clock_timer = periodic(self.clock_interval());
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = move_timer.tick() => {
                    self.on_move_tick();
                }

                // Elapsed-time clock
                _ = clock_timer.tick() => {
                    self.on_clock_tick();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        match self.screen {
                            Screen::Start => self.renderer.render_start(frame, &self.start_menu, &self.metrics),
                            Screen::Playing => self.renderer.render(frame, &self.state, &self.metrics, &self.game_over_menu),
                        }
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

            if self.move_timer_stale {
                move_timer = periodic(self.state.tick_interval());
                self.move_timer_stale = false;
            }
            if self.clock_stale {
                clock_timer = periodic(self.clock_interval());
                self.clock_stale = false;
            }
        }

        tracing::info!(
            games_played = self.metrics.games_played,
            high_score = self.metrics.high_score,
            "session ended"
        );
        Ok(())
    }

    fn clock_interval(&self) -> Duration {
        Duration::from_millis(self.engine.config().clock_interval_ms)
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            let action = self.input_handler.handle_key_event(key);
            self.apply(action);
        }
    }

    fn apply(&mut self, action: KeyAction) {
        if action == KeyAction::Quit {
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::Start => self.apply_on_start(action),
            Screen::Playing if self.state.is_over() => self.apply_on_game_over(action),
            Screen::Playing => self.apply_in_round(action),
        }
    }

    fn apply_on_start(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(Direction::Up) => self.start_menu.previous(),
            KeyAction::Steer(Direction::Down) => self.start_menu.next(),
            KeyAction::Select => match self.start_menu.selected() {
                MenuItem::NewGame => self.start_round(),
                _ => self.should_quit = true,
            },
            KeyAction::Restart => self.start_round(),
            _ => {}
        }
    }

    fn apply_in_round(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(direction) => {
                self.state.request_direction(direction);
            }
            KeyAction::TogglePause => self.toggle_pause(),
            KeyAction::Restart => self.start_round(),
            KeyAction::Back => self.back_to_start(),
            _ => {}
        }
    }

    fn apply_on_game_over(&mut self, action: KeyAction) {
        match action {
            KeyAction::Steer(Direction::Up) => self.game_over_menu.previous(),
            KeyAction::Steer(Direction::Down) => self.game_over_menu.next(),
            KeyAction::Select => match self.game_over_menu.selected() {
                MenuItem::Restart => self.start_round(),
                _ => self.back_to_start(),
            },
            KeyAction::Restart => self.start_round(),
            KeyAction::Back => self.back_to_start(),
            _ => {}
        }
    }

    fn on_move_tick(&mut self) {
        // Pause or game over may have landed while we waited
        if self.screen != Screen::Playing || !self.state.is_running() {
            return;
        }

        let result = self.engine.tick(&mut self.state);

        if result.speed_changed {
            tracing::debug!(tick_ms = self.state.tick_ms, "speed up");
            self.move_timer_stale = true;
        }
        if result.terminated {
            self.end_round();
        }
    }

    fn on_clock_tick(&mut self) {
        if self.screen == Screen::Playing {
            self.state.tick_clock();
        }
    }

    fn toggle_pause(&mut self) {
        match self.state.toggle_pause() {
            GameStatus::Paused => self.audio.paused(),
            GameStatus::Running => {
                // Resume on a whole period
                self.move_timer_stale = true;
                self.clock_stale = true;
                self.audio.resumed();
            }
            _ => {}
        }
        tracing::debug!(status = ?self.state.status, "pause toggled");
    }

    fn start_round(&mut self) {
        self.state = self.engine.reset();
        self.screen = Screen::Playing;
        self.game_over_menu = Menu::game_over();
        self.move_timer_stale = true;
        self.clock_stale = true;
        self.audio.round_started();
        tracing::info!(grid_size = self.state.grid_size, "round started");
    }

    fn end_round(&mut self) {
        self.metrics.on_game_over(self.state.score, self.state.elapsed_secs);
        self.audio.game_over();
        tracing::info!(
            score = self.state.score,
            elapsed_secs = self.state.elapsed_secs,
            status = ?self.state.status,
            "round ended"
        );
    }

    fn back_to_start(&mut self) {
        self.audio.exit_to_menu();
        self.screen = Screen::Start;
        self.start_menu = Menu::start();
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

/// Interval whose first tick is one full `period` from now
fn periodic(period: Duration) -> Interval {
    let mut timer = interval_at(Instant::now() + period, period);
    timer.set_missed_tick_behavior(MissedTickBehavior::Delay);
    timer
}
