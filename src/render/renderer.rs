use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::grid::{CellKind, classify_grid};
use super::menu::Menu;
use crate::game::{GameState, GameStatus, Position};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Title screen with the start menu
    pub fn render_start(&self, frame: &mut Frame, menu: &Menu, metrics: &GameMetrics) {
        let area = centered(frame.area(), 40, 12);

        let mut text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
        ];
        text.extend(menu_lines(menu));
        if metrics.games_played > 0 {
            text.push(Line::from(""));
            text.push(Line::from(vec![
                Span::styled("Best: ", Style::default().fg(Color::Yellow)),
                Span::styled(metrics.high_score.to_string(), Style::default().fg(Color::White)),
                Span::raw("   "),
                Span::styled("Longest: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    GameMetrics::format_time(metrics.longest_round_secs),
                    Style::default().fg(Color::White),
                ),
            ]));
        }

        let menu = Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Green)),
        );
        frame.render_widget(menu, area);
    }

    /// Play screen: stats header, board or game-over panel, controls footer
    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics, menu: &Menu) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        // Board is two terminal columns per cell plus borders
        let board_width = (state.grid_size as u16) * 2 + 2;
        let board_height = state.grid_size as u16 + 2;
        let game_area = centered(chunks[1], board_width, board_height);

        if state.is_over() {
            let game_over = self.render_game_over(state, menu);
            frame.render_widget(game_over, centered(chunks[1], 44, 12));
        } else {
            let grid = self.render_grid(state);
            frame.render_widget(grid, game_area);
        }

        let controls = self.render_controls(state.status);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let head = state.snake.head();
        let lines: Vec<Line> = classify_grid(state)
            .into_iter()
            .enumerate()
            .map(|(y, row)| {
                let spans: Vec<Span> = row
                    .into_iter()
                    .enumerate()
                    .map(|(x, kind)| {
                        let pos = Position::new(x as i32, y as i32);
                        match kind {
                            CellKind::Snake if pos == head => Span::styled(
                                "■ ",
                                Style::default()
                                    .fg(Color::Cyan)
                                    .add_modifier(Modifier::BOLD),
                            ),
                            CellKind::Snake => {
                                Span::styled("□ ", Style::default().fg(Color::Green))
                            }
                            CellKind::Food => Span::styled(
                                "O ",
                                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                            ),
                            CellKind::Empty => {
                                Span::styled(". ", Style::default().fg(Color::DarkGray))
                            }
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        let (title, border_color) = if state.is_paused() {
            (" Paused ", Color::Yellow)
        } else {
            (" Snake ", Color::White)
        };

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(border_color))
                .title(title),
        )
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(state.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(GameMetrics::format_time(state.elapsed_secs), value),
            Span::raw("    "),
            Span::styled("Tick: ", label),
            Span::styled(format!("{}ms", state.tick_ms), value),
            Span::raw("    "),
            Span::styled("Best: ", label),
            Span::styled(metrics.high_score.max(state.score).to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self, state: &GameState, menu: &Menu) -> Paragraph<'_> {
        let (headline, color) = match state.status {
            GameStatus::Won => ("BOARD CLEARED", Color::Green),
            _ => ("GAME OVER", Color::Red),
        };

        let mut text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    state.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("   "),
                Span::styled("Time: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    GameMetrics::format_time(state.elapsed_secs),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
        ];
        text.extend(menu_lines(menu));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self, status: GameStatus) -> Paragraph<'_> {
        let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Cyan));

        let line = match status {
            GameStatus::GameOver | GameStatus::Won => Line::from(vec![
                key("↑↓"),
                Span::raw(" choose | "),
                key("Enter"),
                Span::raw(" select | "),
                key("R"),
                Span::raw(" restart | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
            _ => Line::from(vec![
                key("↑↓←→"),
                Span::raw(" or "),
                key("WASD"),
                Span::raw(" to move | "),
                key("Space"),
                Span::raw(if status == GameStatus::Paused {
                    " resume | "
                } else {
                    " pause | "
                }),
                key("M"),
                Span::raw(" menu | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" to quit"),
            ]),
        };

        Paragraph::new(vec![line]).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn menu_lines(menu: &Menu) -> Vec<Line<'static>> {
    menu.items()
        .iter()
        .enumerate()
        .map(|(i, item)| {
            if i == menu.selected_index() {
                Line::from(Span::styled(
                    format!("> {} <", item.label()),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(Span::styled(
                    item.label(),
                    Style::default().fg(Color::Gray),
                ))
            }
        })
        .collect()
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Snake;
    use ratatui::{Terminal, backend::TestBackend};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 20, 10), Rect::new(40, 15, 20, 10));
        // Larger than the area: clamp
        assert_eq!(centered(area, 200, 80), area);
    }

    #[test]
    fn test_render_play_screen() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let state = GameState::new(Snake::new(Position::new(2, 2)), Position::new(0, 0), 5, 340);
        let renderer = Renderer::new();

        terminal
            .draw(|frame| {
                renderer.render(frame, &state, &GameMetrics::new(), &Menu::game_over());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Score:"));
        assert!(text.contains("340ms"));
        assert!(text.contains("■"));
        assert!(text.contains("O"));
    }

    #[test]
    fn test_render_game_over_screen() {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        let mut state = GameState::new(Snake::new(Position::new(2, 2)), Position::new(0, 0), 5, 340);
        state.status = GameStatus::GameOver;
        state.score = 15;

        terminal
            .draw(|frame| {
                Renderer::new().render(frame, &state, &GameMetrics::new(), &Menu::game_over());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("GAME OVER"));
        assert!(text.contains("15"));
        assert!(text.contains("Restart"));
    }

    #[test]
    fn test_render_start_screen() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();

        terminal
            .draw(|frame| {
                Renderer::new().render_start(frame, &Menu::start(), &GameMetrics::new());
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("SNAKE"));
        assert!(text.contains("New Game"));
        assert!(text.contains("Exit"));
        assert!(!text.contains("Best:"));
    }

    #[test]
    fn test_start_screen_shows_session_records() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut metrics = GameMetrics::new();
        metrics.on_game_over(25, 95);
        metrics.on_game_over(10, 30);

        terminal
            .draw(|frame| {
                Renderer::new().render_start(frame, &Menu::start(), &metrics);
            })
            .unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Best:"));
        assert!(text.contains("25"));
        assert!(text.contains("Longest:"));
        assert!(text.contains("01:35"));
    }
}
