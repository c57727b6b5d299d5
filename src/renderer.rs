use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::game::{Phase, Snapshot};
use crate::grid::{Cell, GridSize, is_out_of_bounds};
use crate::palette::Palette;
use crate::ui::hud::render_hud;
use crate::ui::menu::{render_game_over_menu, render_pause_menu, render_start_menu};

/// Terminal columns per board cell; keeps cells roughly square.
pub const CELL_WIDTH: u16 = 2;

const GLYPH_SEGMENT: &str = "██";
const GLYPH_FOOD: &str = "▐▌";
const GLYPH_EMPTY: &str = "  ";

/// Renders the full game frame from a snapshot.
pub fn render(frame: &mut Frame<'_>, snapshot: &Snapshot, palette: &Palette) {
    let area = frame.area();
    let play_area = render_hud(frame, area, snapshot, palette);

    let Some(board) = board_rect(play_area, snapshot.grid) else {
        frame.render_widget(
            Paragraph::new("Terminal too small for the board")
                .alignment(Alignment::Center)
                .style(Style::default().fg(palette.food)),
            play_area,
        );
        return;
    };

    let block = Block::bordered().border_style(Style::new().fg(palette.border));
    let inner = block.inner(board);
    frame.render_widget(block, board);

    render_board(frame, inner, snapshot, palette);
    render_food(frame, inner, snapshot, palette);
    render_snake(frame, inner, snapshot, palette);

    match snapshot.phase {
        Phase::Idle => render_start_menu(frame, board, snapshot.high_score, palette),
        Phase::Paused => render_pause_menu(frame, board),
        Phase::GameOver => render_game_over_menu(
            frame,
            board,
            snapshot.score,
            snapshot.high_score,
            snapshot.new_best,
            snapshot.end_reason,
        ),
        Phase::Running => {}
    }
}

/// Returns the bordered board rectangle centred in `area`, or `None` when the
/// board does not fit.
#[must_use]
pub fn board_rect(area: Rect, grid: GridSize) -> Option<Rect> {
    let width = grid.width().checked_mul(CELL_WIDTH)?.checked_add(2)?;
    let height = grid.height().checked_add(2)?;
    if width > area.width || height > area.height {
        return None;
    }

    Some(Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    })
}

fn render_board(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, palette: &Palette) {
    let style = Style::new().bg(palette.board_color(snapshot.tint));
    let buffer = frame.buffer_mut();

    for cell in snapshot.grid.cells() {
        if let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, cell) {
            buffer.set_string(x, y, GLYPH_EMPTY, style);
        }
    }
}

fn render_food(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, palette: &Palette) {
    let Some(food) = snapshot.food else {
        return;
    };
    let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, food) else {
        return;
    };

    let style = Style::new()
        .fg(palette.food)
        .bg(palette.board_color(snapshot.tint));
    frame.buffer_mut().set_string(x, y, GLYPH_FOOD, style);
}

fn render_snake(frame: &mut Frame<'_>, inner: Rect, snapshot: &Snapshot, palette: &Palette) {
    let buffer = frame.buffer_mut();

    for (index, segment) in snapshot.snake.iter().enumerate() {
        let Some((x, y)) = logical_to_terminal(inner, snapshot.grid, *segment) else {
            continue;
        };

        let style = if index == 0 {
            Style::new()
                .fg(palette.snake_head)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::new().fg(palette.snake_body)
        };
        buffer.set_string(x, y, GLYPH_SEGMENT, style);
    }
}

fn logical_to_terminal(inner: Rect, grid: GridSize, cell: Cell) -> Option<(u16, u16)> {
    if is_out_of_bounds(cell, grid) {
        return None;
    }

    let x_offset = u16::try_from(cell.x).ok()?.checked_mul(CELL_WIDTH)?;
    let y_offset = u16::try_from(cell.y).ok()?;

    let x = inner.x.saturating_add(x_offset);
    let y = inner.y.saturating_add(y_offset);
    if x >= inner.right() || y >= inner.bottom() {
        return None;
    }

    Some((x, y))
}
