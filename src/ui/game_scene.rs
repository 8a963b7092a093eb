//! The play field, status bar and info panel.

use super::game_common::{render_info_panel_frame, render_prompt_box, render_status_rows, split_scene};
use crate::game_events::Presentation;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use skyward::core::{GameConfig, GameSession, Prompt, Rect as WorldRect, SessionState};

const CONTROLS: [(&str, &str); 3] = [("[Enter]", "Start"), ("[Space/Up]", "Ascend"), ("[Q]", "Quit")];

/// What occupies a single terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Obstacle,
    Bird,
}

/// Render the whole game screen.
pub fn render_game_scene(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    config: &GameConfig,
    presentation: &Presentation,
) {
    let border_color = if presentation.flash {
        Color::Red
    } else {
        Color::Cyan
    };
    let layout = split_scene(
        frame,
        area,
        " Skyward ",
        border_color,
        24,
        (config.play_width, config.play_height),
    );

    render_play_field(frame, layout.field, session, config, presentation);
    render_status(frame, layout.status, session);
    render_info_panel(frame, layout.sidebar, session, config, presentation);

    match session.prompt() {
        Some(Prompt::PressToStart) => render_prompt_box(
            frame,
            layout.field,
            "SKYWARD",
            Color::Yellow,
            &[
                "Press Enter To Start".to_string(),
                format!("Highest Score: {}", session.high_score),
            ],
        ),
        Some(Prompt::GameOver) => {
            let mut body = vec![format!(
                "Score: {}   Best: {}",
                session.score, session.high_score
            )];
            if let Some(cause) = session.last_crash {
                body.push(cause.describe().to_string());
            }
            if presentation.new_high_score {
                body.push("New high score!".to_string());
            }
            body.push("Press Enter To Restart".to_string());
            render_prompt_box(frame, layout.field, "Game Over", Color::Red, &body);
        }
        None => {}
    }
}

/// Map a world coordinate to a cell index along an axis of `cells` cells.
fn world_to_cell(value: f64, world_size: f64, cells: u16) -> Option<u16> {
    if world_size <= 0.0 || value < 0.0 || value >= world_size {
        return None;
    }
    Some(((value / world_size) * cells as f64) as u16)
}

fn contains(rect: &WorldRect, x: f64, y: f64) -> bool {
    x >= rect.left && x < rect.right() && y >= rect.top && y < rect.bottom()
}

/// Classify every cell of a `width` x `height` grid.
fn build_grid(session: &GameSession, config: &GameConfig, width: u16, height: u16) -> Vec<Vec<Cell>> {
    let mut grid = vec![vec![Cell::Empty; width as usize]; height as usize];
    let cell_w = config.play_width / width as f64;
    let cell_h = config.play_height / height as f64;

    for (row, cells) in grid.iter_mut().enumerate() {
        let y = (row as f64 + 0.5) * cell_h;
        for (col, cell) in cells.iter_mut().enumerate() {
            let x = (col as f64 + 0.5) * cell_w;
            let inside = session.obstacles.iter().any(|pair| {
                contains(&pair.top_bounds(), x, y) || contains(&pair.bottom_bounds(), x, y)
            });
            if inside {
                *cell = Cell::Obstacle;
            }
        }
    }

    if session.bird_visible() {
        let bird = &session.bird;
        let col = world_to_cell(bird.x + bird.width / 2.0, config.play_width, width);
        let row = world_to_cell(bird.mid_y(), config.play_height, height);
        if let (Some(col), Some(row)) = (col, row) {
            grid[row as usize][col as usize] = Cell::Bird;
        }
    }

    grid
}

fn render_play_field(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    config: &GameConfig,
    presentation: &Presentation,
) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let bird_glyph = if presentation.flapping || session.bird.velocity < -1.0 {
        "▲"
    } else if session.bird.velocity > 4.0 {
        "▼"
    } else {
        "►"
    };
    let obstacle_style = Style::default().fg(Color::Green);
    let bird_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let lines: Vec<Line> = build_grid(session, config, area.width, area.height)
        .into_iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .into_iter()
                .map(|cell| match cell {
                    Cell::Empty => Span::raw(" "),
                    Cell::Obstacle => Span::styled("█", obstacle_style),
                    Cell::Bird => Span::styled(bird_glyph, bird_style),
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status(frame: &mut Frame, area: Rect, session: &GameSession) {
    let status = match session.state {
        SessionState::Idle => Line::from(Span::styled(
            "Press Enter to start!",
            Style::default().fg(Color::Yellow),
        )),
        SessionState::Running => Line::from(vec![
            Span::styled("Score ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                session.score.to_string(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        ]),
        SessionState::Ended => Line::from(Span::styled(
            format!("Game Over - Score: {}", session.score),
            Style::default().fg(Color::Red),
        )),
    };
    render_status_rows(frame, area, status, &CONTROLS);
}

fn render_info_panel(
    frame: &mut Frame,
    area: Rect,
    session: &GameSession,
    config: &GameConfig,
    presentation: &Presentation,
) {
    let inner = render_info_panel_frame(frame, area);
    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let value = Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(session.score.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Best:  ", label),
            Span::styled(
                session.high_score.to_string(),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Level: ", label),
            Span::styled(session.speed_level(config).to_string(), value),
        ]),
        Line::from(vec![
            Span::styled(" Speed: ", label),
            Span::styled(
                format!("{:.0}/{:.0}", session.obstacle_speed, config.max_speed),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Spawn: ", label),
            Span::styled(
                format!("{} ticks", session.spawn_interval),
                Style::default().fg(Color::Cyan),
            ),
        ]),
        Line::from(""),
    ];

    if presentation.level_up_visible() {
        lines.push(Line::from(Span::styled(
            " Faster!",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )));
    }
    if presentation.new_high_score && session.is_running() {
        lines.push(Line::from(Span::styled(
            " New best!",
            Style::default().fg(Color::Yellow),
        )));
    }
    if presentation.flash {
        lines.push(Line::from(Span::styled(
            " ! Careful !",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
