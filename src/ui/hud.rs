use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::game::{Phase, Snapshot};
use crate::palette::Palette;

const SEPARATOR: &str = " │ ";

/// Renders the one-line HUD and returns the remaining play area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, palette: &Palette) -> Rect {
    let [play_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    frame.render_widget(
        Paragraph::new(info_line(snapshot, palette, usize::from(hud_area.width)))
            .alignment(Alignment::Center),
        hud_area,
    );

    play_area
}

/// Label for the start/pause trigger in the current phase.
#[must_use]
pub fn action_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Idle => "Start",
        Phase::Running => "Pause",
        Phase::Paused => "Resume",
        Phase::GameOver => "Play again",
    }
}

/// Key hint shown at the end of the HUD line.
fn hint_text(phase: Phase) -> String {
    let key = if phase == Phase::GameOver { "[R]" } else { "[Space]" };
    format!("{key} {}", action_label(phase))
}

fn info_line(snapshot: &Snapshot, palette: &Palette, available_width: usize) -> Line<'static> {
    let compact = line_width(snapshot, false) > available_width;
    let value_style = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);
    let best_style = if snapshot.new_best {
        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD)
    } else {
        value_style
    };
    let muted = Style::default().fg(palette.border);

    let labels = Labels::new(compact);
    let hint = hint_text(snapshot.phase);

    Line::from(vec![
        Span::styled(format!("{}: ", labels.score), muted),
        Span::styled(snapshot.score.to_string(), value_style),
        Span::styled(SEPARATOR, muted),
        Span::styled(format!("{}: ", labels.best), muted),
        Span::styled(snapshot.high_score.to_string(), best_style),
        Span::styled(SEPARATOR, muted),
        Span::styled(format!("{}: ", labels.length), muted),
        Span::styled(snapshot.snake.len().to_string(), value_style),
        Span::styled(SEPARATOR, muted),
        Span::styled(hint, Style::default().fg(palette.accent)),
    ])
}

struct Labels {
    score: &'static str,
    best: &'static str,
    length: &'static str,
}

impl Labels {
    fn new(compact: bool) -> Self {
        if compact {
            Self {
                score: "S",
                best: "Hi",
                length: "L",
            }
        } else {
            Self {
                score: "Score",
                best: "Best",
                length: "Length",
            }
        }
    }
}

fn line_width(snapshot: &Snapshot, compact: bool) -> usize {
    let labels = Labels::new(compact);
    let hint = hint_text(snapshot.phase);

    format!("{}: {}", labels.score, snapshot.score).width()
        + format!("{}: {}", labels.best, snapshot.high_score).width()
        + format!("{}: {}", labels.length, snapshot.snake.len()).width()
        + hint.width()
        + SEPARATOR.width() * 3
}

#[cfg(test)]
mod tests {
    use crate::game::{GameState, Phase};
    use crate::grid::GridSize;

    use super::{action_label, hint_text, line_width};

    #[test]
    fn action_label_tracks_phase() {
        assert_eq!(action_label(Phase::Idle), "Start");
        assert_eq!(action_label(Phase::Running), "Pause");
        assert_eq!(action_label(Phase::Paused), "Resume");
        assert_eq!(hint_text(Phase::GameOver), "[R] Play again");
    }

    #[test]
    fn compact_labels_are_narrower() {
        let snapshot = GameState::new_with_seed(GridSize::DEFAULT, 1234, 1).snapshot();

        // The separator glyph is one column wide even though it is three bytes.
        assert_eq!(
            line_width(&snapshot, false),
            "Score: 0".len() + "Best: 1234".len() + "Length: 3".len() + "[Space] Start".len() + 9
        );
        assert!(line_width(&snapshot, true) < line_width(&snapshot, false));
    }

    #[test]
    fn game_over_width_measures_the_reset_hint() {
        let mut state = GameState::new_with_seed(GridSize::DEFAULT, 0, 1);
        state.phase = Phase::GameOver;
        let snapshot = state.snapshot();

        assert_eq!(
            line_width(&snapshot, false),
            "Score: 0".len() + "Best: 0".len() + "Length: 3".len() + "[R] Play again".len() + 9
        );
    }
}
