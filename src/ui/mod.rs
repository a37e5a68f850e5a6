pub mod backdrop;
pub mod theme;

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Paragraph,
};

use crate::app::state::AppState;
use crate::engine::RunState;
use backdrop::Backdrop;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    if area.width < 20 || area.height < 6 {
        let warning = Paragraph::new("Terminal too small. Resize to at least 20x6.");
        frame.render_widget(warning, area);
        return;
    }

    frame.render_widget(
        Backdrop {
            canvas: state.session.canvas(),
            kind: state.session.variant(),
            mode: state.theme_mode(),
        },
        area,
    );

    render_condition_badge(frame, area, state);
}

fn render_condition_badge(frame: &mut Frame, area: Rect, state: &AppState) {
    let label = state
        .session
        .variant()
        .map_or("stopped", |kind| kind.label());
    let text = if state.session.run_state() == RunState::Paused {
        format!(" {label} ⏸ ")
    } else {
        format!(" {label} ")
    };
    let width = (text.chars().count() as u16).min(area.width);
    let badge_area = Rect {
        x: area.right().saturating_sub(width + 1),
        y: area.y,
        width,
        height: 1,
    };
    let badge = Paragraph::new(Line::from(text)).style(
        Style::default()
            .fg(Color::White)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(badge, badge_area);
}
