//! Shared layout pieces: outer frame, status bar, info panel and prompt box.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Screen areas for one frame of the game.
pub struct SceneLayout {
    /// Play field, shaped like the world so distances read the same both ways.
    pub field: Rect,
    /// Two rows under the field: status, then key hints.
    pub status: Rect,
    pub sidebar: Rect,
}

/// Frame the scene and carve it into field, status rows and sidebar.
///
/// ```text
/// ┌─ Skyward ─────────────────────────┬─ Info ──────┐
/// │      ┌ field (world aspect) ┐     │             │
/// │      └──────────────────────┘     │             │
/// │ status / key hints                │             │
/// └───────────────────────────────────┴─────────────┘
/// ```
pub fn split_scene(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    border_color: Color,
    sidebar_width: u16,
    world: (f64, f64),
) -> SceneLayout {
    frame.render_widget(Clear, area);
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let [left, sidebar] = split2(inner, Direction::Horizontal, Constraint::Length(sidebar_width));
    let [field_area, status] = split2(left, Direction::Vertical, Constraint::Length(2));

    SceneLayout {
        field: fit_to_world(field_area, world.0, world.1),
        status,
        sidebar,
    }
}

/// Split `area` in two: the first part takes what the fixed-size second part leaves.
fn split2(area: Rect, direction: Direction, second: Constraint) -> [Rect; 2] {
    let chunks = Layout::default()
        .direction(direction)
        .constraints([Constraint::Min(1), second])
        .split(area);
    [chunks[0], chunks[1]]
}

/// Largest rectangle centred in `area` whose on-screen shape matches a
/// `world_width` x `world_height` world.
pub fn fit_to_world(area: Rect, world_width: f64, world_height: f64) -> Rect {
    if area.width == 0 || area.height == 0 || world_width <= 0.0 || world_height <= 0.0 {
        return area;
    }
    let cols_per_row = world_width / world_height * CELL_ASPECT;
    // Nudge so exact fits are not lost to rounding
    const EPS: f64 = 1e-9;
    let full_height_width = (area.height as f64 * cols_per_row + EPS).floor();
    let (width, height) = if full_height_width <= area.width as f64 {
        (full_height_width.max(1.0) as u16, area.height)
    } else {
        let height = (area.width as f64 / cols_per_row + EPS).floor().max(1.0) as u16;
        (area.width, height)
    };
    centered_rect(area, width, height)
}

/// Status row (already styled by the caller) with a row of key hints under it.
pub fn render_status_rows(frame: &mut Frame, area: Rect, status: Line, hints: &[(&str, &str)]) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );
    if area.height < 2 {
        return;
    }

    let hint_spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| {
            [
                Span::styled(format!(" {} ", key), Style::default().fg(Color::Black).bg(Color::Gray)),
                Span::styled(format!(" {}   ", action), Style::default().fg(Color::DarkGray)),
            ]
        })
        .collect();
    frame.render_widget(
        Paragraph::new(Line::from(hint_spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Bordered info panel. Returns the inner area.
pub fn render_info_panel_frame(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Info ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Boxed message over the play area: a bold title and a few body lines.
pub fn render_prompt_box(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    title_color: Color,
    body: &[String],
) {
    let longest = body
        .iter()
        .map(|line| line.chars().count())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0) as u16;
    let rect = centered_rect(area, longest + 6, body.len() as u16 + 4);
    frame.render_widget(Clear, rect);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(title_color));
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let mut lines = vec![
        Line::from(Span::styled(
            title.to_string(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    lines.extend(
        body.iter()
            .map(|line| Line::from(Span::styled(line.clone(), Style::default().fg(Color::White)))),
    );

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}
