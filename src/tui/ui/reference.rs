//! Reference view: the score's point tables and risk-group outcomes.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
    Frame,
};

use crate::domain::{
    format_percent, ScoreBand, Setting, Sex, EGFR_BANDS, LOW_HEMOGLOBIN_POINTS,
    LOW_HEMOGLOBIN_THRESHOLD, PLACEHOLDER,
};
use crate::tui::styles::Theme;

/// Render the reference tables.
pub fn render_reference(f: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Tables
            Constraint::Length(3), // Footer
        ])
        .split(area);

    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", Theme::text()),
        Span::styled("Score Tables", Theme::title()),
        Span::styled(" │ Points and observed outcomes", Theme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );
    f.render_widget(header, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(chunks[1]);

    f.render_widget(points_table(), columns[0]);
    f.render_widget(prevalence_table(), columns[1]);

    let footer = Paragraph::new(Line::from(vec![
        Span::styled("[Esc] ", Theme::key_hint()),
        Span::styled("Back ", Theme::key_desc()),
        Span::styled("[Q] ", Theme::key_hint()),
        Span::styled("Quit", Theme::key_desc()),
    ]))
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );
    f.render_widget(footer, chunks[2]);
}

fn points_table() -> Table<'static> {
    let mut rows: Vec<Row> = Vec::new();

    for sex in Sex::ALL {
        rows.push(Row::new(vec![
            "Sex".to_string(),
            sex.label().to_string(),
            sex.points().to_string(),
        ]));
    }
    for setting in Setting::ALL {
        rows.push(Row::new(vec![
            "Setting".to_string(),
            setting.label().to_string(),
            setting.points().to_string(),
        ]));
    }
    rows.push(Row::new(vec![
        "Hemoglobin".to_string(),
        format!("< {LOW_HEMOGLOBIN_THRESHOLD} g/dL"),
        LOW_HEMOGLOBIN_POINTS.to_string(),
    ]));
    rows.push(Row::new(vec![
        "Hemoglobin".to_string(),
        format!("≥ {LOW_HEMOGLOBIN_THRESHOLD} g/dL"),
        "0".to_string(),
    ]));
    for band in &EGFR_BANDS {
        let points = band
            .points()
            .map_or_else(|| PLACEHOLDER.to_string(), |p| p.to_string());
        rows.push(Row::new(vec!["eGFR".to_string(), band.label().to_string(), points]));
    }

    Table::new(
        rows,
        [
            Constraint::Length(11),
            Constraint::Min(20),
            Constraint::Length(6),
        ],
    )
    .header(Row::new(vec!["Input", "Value", "Points"]).style(Theme::subtitle()))
    .style(Theme::text())
    .block(
        Block::default()
            .title(Span::styled(" Points ", Theme::subtitle()))
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    )
}

fn prevalence_table() -> Table<'static> {
    let rows: Vec<Row> = ScoreBand::ALL
        .iter()
        .map(|band| {
            let p = band.prevalence();
            Row::new(vec![
                band.label().to_string(),
                format_percent(p.any),
                format_percent(p.stage_2_3),
                format_percent(p.krt),
            ])
            .style(Theme::band(*band))
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(9),
            Constraint::Length(7),
        ],
    )
    .header(Row::new(vec!["Score", "Any AKI", "AKI 2/3", "KRT"]).style(Theme::subtitle()))
    .block(
        Block::default()
            .title(Span::styled(" Outcomes by risk group ", Theme::subtitle()))
            .borders(Borders::ALL)
            .border_style(Theme::border()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_render_reference_tables() {
        let backend = TestBackend::new(120, 30);
        let mut terminal = Terminal::new(backend).expect("Should create terminal");
        terminal
            .draw(|f| render_reference(f, f.area()))
            .expect("Should draw");

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();

        assert!(screen.contains("Inpatient, ICU"));
        assert!(screen.contains("< 15 (not in score table)"));
        assert!(screen.contains("48.7%"));
        assert!(screen.contains("16.5%"));
    }
}
