//! Catch game scene rendering.
//!
//! Uses a cell buffer for per-character color control: the 800x600 world is
//! scaled into a 2D grid of cells which is then stamped row-by-row as
//! Paragraph widgets.

use super::game_common::{create_scene_layout, render_info_panel_frame, render_status_bar};
use crate::catch::types::CatchGame;
use crate::config::GameConfig;
use crate::constants::{PLAYER_SPRITE_W, PLAY_HEIGHT, PLAY_WIDTH};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const LEAF_COLOR: Color = Color::Rgb(80, 200, 80);
const BRICK_COLOR: Color = Color::Rgb(200, 110, 60);
const BASKET_COLOR: Color = Color::LightYellow;
// Matches the original's green 32px score text.
const SCORE_COLOR: Color = Color::Rgb(0, 255, 0);

/// Render the whole catch scene: play field, status bar, info panel.
pub fn render_catch_scene(frame: &mut Frame, area: Rect, game: &CatchGame, config: &GameConfig) {
    let layout = create_scene_layout(frame, area, " Windfall ", Color::Green, 20);

    render_play_field(frame, layout.field, game, config);

    render_status_bar(
        frame,
        layout.status_bar,
        "Catch!",
        Color::Green,
        &[("[\u{2190}/\u{2192}]", "Move"), ("[Q/Esc]", "Quit")],
    );

    render_info_panel(frame, layout.info_panel, game, config);
}

/// Cell in the render buffer. The background color is uniform per scene,
/// so only the glyph and its foreground vary.
#[derive(Clone, Copy)]
struct Cell {
    ch: char,
    fg: Color,
}

/// Scale the world into the cell buffer and stamp basket, fallers, and the
/// score label.
fn render_play_field(frame: &mut Frame, area: Rect, game: &CatchGame, config: &GameConfig) {
    if area.height < 4 || area.width < 10 {
        return;
    }

    let render_width = area.width as usize;
    let render_height = area.height as usize;

    let (br, bg, bb) = config.background_rgb();
    let background = Color::Rgb(br, bg, bb);
    let mut buffer: Vec<Vec<Cell>> = vec![
        vec![
            Cell {
                ch: ' ',
                fg: Color::Reset,
            };
            render_width
        ];
        render_height
    ];

    let x_scale = render_width as f64 / PLAY_WIDTH;
    let y_scale = render_height as f64 / PLAY_HEIGHT;

    // ── Fallers ───────────────────────────────────────────────────────
    for (fallers, glyph, color) in [
        (&game.leaves, config.sprites.leaf, LEAF_COLOR),
        (&game.bricks, config.sprites.brick, BRICK_COLOR),
    ] {
        for faller in fallers {
            let col = (faller.x * x_scale).round() as i32;
            let row = (faller.y * y_scale).round() as i32;
            if col >= 0 && (col as usize) < render_width && row >= 0 && (row as usize) < render_height
            {
                buffer[row as usize][col as usize] = Cell {
                    ch: glyph,
                    fg: color,
                };
            }
        }
    }

    // ── Basket ────────────────────────────────────────────────────────
    let basket_w = ((PLAYER_SPRITE_W * game.player.scale) * x_scale)
        .round()
        .max(1.0) as i32;
    let basket_left = (game.player.x * x_scale).round() as i32 - basket_w / 2;
    let basket_row = ((game.player.y * y_scale).round() as i32)
        .clamp(0, render_height as i32 - 1) as usize;

    for dx in 0..basket_w {
        let col = basket_left + dx;
        if col >= 0 && (col as usize) < render_width {
            buffer[basket_row][col as usize] = Cell {
                ch: config.sprites.player,
                fg: BASKET_COLOR,
            };
        }
    }

    // ── Score label (top-left, like the original's 16,16 text) ────────
    for (i, ch) in game.score_label.chars().enumerate() {
        if i + 1 < render_width {
            buffer[0][i + 1] = Cell {
                ch,
                fg: SCORE_COLOR,
            };
        }
    }

    // ── Render buffer to terminal ─────────────────────────────────────
    for (row_idx, row_data) in buffer.iter().enumerate() {
        let mut spans: Vec<Span> = Vec::new();
        let mut current_fg = Color::Reset;
        let mut current_text = String::new();

        for &cell in row_data.iter() {
            if cell.fg != current_fg && !current_text.is_empty() {
                spans.push(Span::styled(
                    std::mem::take(&mut current_text),
                    Style::default().fg(current_fg).bg(background),
                ));
            }
            current_fg = cell.fg;
            current_text.push(cell.ch);
        }
        if !current_text.is_empty() {
            spans.push(Span::styled(
                current_text,
                Style::default().fg(current_fg).bg(background),
            ));
        }

        let line = Paragraph::new(Line::from(spans));
        let row_area = Rect::new(area.x, area.y + row_idx as u16, render_width as u16, 1);
        if row_area.y < area.y + area.height {
            frame.render_widget(line, row_area);
        }
    }
}

/// Info panel: score, fallers in flight, and a legend.
fn render_info_panel(frame: &mut Frame, area: Rect, game: &CatchGame, config: &GameConfig) {
    let inner = render_info_panel_frame(frame, area);

    let lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("Score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.score.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Falling: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                game.faller_count().to_string(),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Legend:",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!(" {} ", config.sprites.player),
                Style::default().fg(BASKET_COLOR),
            ),
            Span::styled("Basket", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {} ", config.sprites.leaf),
                Style::default().fg(LEAF_COLOR),
            ),
            Span::styled("Leaf  +10", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(vec![
            Span::styled(
                format!(" {} ", config.sprites.brick),
                Style::default().fg(BRICK_COLOR),
            ),
            Span::styled("Brick +25", Style::default().fg(Color::DarkGray)),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}
