//! UI module: View components for the TUI.

pub mod calculator;
pub mod reference;

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::styles::Theme;

pub fn render_disclaimer(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(vec![Span::styled(
            "DISCLAIMER: Risk groups report observed outcome rates from the published score; they do not replace clinical judgement.",
            Theme::text_muted(),
        )]),
        Line::from(vec![Span::styled(
            "Patients with eGFR < 15 mL/min/1.73 m² are not covered by the score table.",
            Theme::text_muted(),
        )]),
    ];

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Theme::border());

    let p = Paragraph::new(text).block(block).wrap(Wrap { trim: true });

    f.render_widget(p, area);
}
