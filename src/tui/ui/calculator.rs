//! Calculator view: the four inputs with their points, and the result panel.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
    Frame,
};

use crate::application::{CalculatorService, NumericField};
use crate::domain::points_text;
use crate::tui::styles::Theme;

/// Form fields in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Sex,
    Setting,
    Hemoglobin,
    Egfr,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Sex,
        FormField::Setting,
        FormField::Hemoglobin,
        FormField::Egfr,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Sex => "Sex",
            Self::Setting => "Setting",
            Self::Hemoglobin => "Hemoglobin",
            Self::Egfr => "eGFR",
        }
    }

    /// The numeric field behind this form field, if it is one.
    #[must_use]
    pub fn numeric(self) -> Option<NumericField> {
        match self {
            Self::Hemoglobin => Some(NumericField::Hemoglobin),
            Self::Egfr => Some(NumericField::Egfr),
            Self::Sex | Self::Setting => None,
        }
    }

    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Sex => Self::Setting,
            Self::Setting => Self::Hemoglobin,
            Self::Hemoglobin => Self::Egfr,
            Self::Egfr => Self::Sex,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Self::Sex => Self::Egfr,
            Self::Setting => Self::Sex,
            Self::Hemoglobin => Self::Setting,
            Self::Egfr => Self::Hemoglobin,
        }
    }
}

/// Transient message in the footer (print outcome).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub message: String,
    pub is_error: bool,
}

/// View state of the calculator screen.
#[derive(Debug, Clone, Default)]
pub struct CalculatorViewState {
    pub focused: FormField,
    pub status: Option<StatusLine>,
}

/// Render the calculator screen.
pub fn render_calculator(
    f: &mut Frame,
    area: Rect,
    state: &CalculatorViewState,
    service: &CalculatorService,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Form + results
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(f, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .margin(1)
        .split(chunks[1]);

    render_fields(f, body[0], state, service);
    render_results(f, body[1], service);
    render_footer(f, chunks[2], state);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(" ", Theme::text()),
        Span::styled("AKI Risk Score", Theme::title()),
        Span::styled(" │ Sex · Setting · Hemoglobin · eGFR", Theme::text_secondary()),
    ]))
    .block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Theme::border()),
    );

    f.render_widget(header, area);
}

fn render_fields(
    f: &mut Frame,
    area: Rect,
    state: &CalculatorViewState,
    service: &CalculatorService,
) {
    let constraints: Vec<Constraint> = FormField::ALL
        .iter()
        .map(|_| Constraint::Length(4))
        .chain(std::iter::once(Constraint::Min(0)))
        .collect();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, field) in FormField::ALL.iter().copied().enumerate() {
        render_field(f, chunks[i], field, state.focused == field, service);
    }
}

fn render_field(
    f: &mut Frame,
    area: Rect,
    field: FormField,
    is_focused: bool,
    service: &CalculatorService,
) {
    let form = service.form();
    let inline = service.inline_points();

    let (border_style, title_style) = if is_focused {
        (Theme::border_focused(), Theme::focused())
    } else {
        (Theme::border(), Theme::text_secondary())
    };

    let block = Block::default()
        .title(Span::styled(format!(" {} ", field.label()), title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    let value_line = match field {
        FormField::Sex => selector_line(form.sex.label(), is_focused),
        FormField::Setting => selector_line(form.setting.label(), is_focused),
        FormField::Hemoglobin => numeric_line(form.hemoglobin.expose(), "g/dL (0-25)", is_focused),
        FormField::Egfr => numeric_line(form.egfr.expose(), "mL/min/1.73 m² (0-200)", is_focused),
    };

    let points_line = match field {
        FormField::Sex => Line::from(Span::styled(
            format!(" {}", points_text(Some(inline.sex))),
            Theme::text_secondary(),
        )),
        FormField::Setting => Line::from(Span::styled(
            format!(" {}", points_text(Some(inline.setting))),
            Theme::text_secondary(),
        )),
        FormField::Hemoglobin => Line::from(Span::styled(
            format!(" {}", points_text(inline.hemoglobin)),
            Theme::text_secondary(),
        )),
        FormField::Egfr => Line::from(vec![
            Span::styled(format!(" Category: {}", inline.egfr_label()), Theme::text_muted()),
            Span::styled(" │ ", Theme::text_muted()),
            Span::styled(points_text(inline.egfr()), Theme::text_secondary()),
        ]),
    };

    f.render_widget(Paragraph::new(vec![value_line, points_line]).block(block), area);
}

fn selector_line(label: &str, is_focused: bool) -> Line<'_> {
    if is_focused {
        Line::from(vec![
            Span::styled(" ◀ ", Theme::key_hint()),
            Span::styled(label, Theme::text()),
            Span::styled(" ▶", Theme::key_hint()),
        ])
    } else {
        Line::from(vec![Span::raw(" "), Span::styled(label, Theme::text())])
    }
}

fn numeric_line<'a>(value: &'a str, hint: &'a str, is_focused: bool) -> Line<'a> {
    let value = if value.is_empty() {
        Span::styled(hint, Theme::text_muted())
    } else {
        Span::styled(value, Theme::text())
    };

    Line::from(vec![
        Span::raw(" "),
        value,
        if is_focused {
            Span::styled("▌", Theme::cursor())
        } else {
            Span::raw("")
        },
    ])
}

fn render_results(f: &mut Frame, area: Rect, service: &CalculatorService) {
    let display = service.display();
    let band_style = display.band.map_or_else(Theme::text, Theme::band);

    let block = Block::default()
        .title(Span::styled(" Result ", Theme::subtitle()))
        .borders(Borders::ALL)
        .border_style(Theme::border_focused());

    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Score + group
            Constraint::Length(3), // Any AKI
            Constraint::Length(3), // AKI stage 2/3
            Constraint::Length(3), // KRT
            Constraint::Min(0),    // Note
        ])
        .margin(1)
        .split(inner);

    let summary = Paragraph::new(vec![
        Line::from(vec![
            Span::styled("Total score: ", Theme::text_secondary()),
            Span::styled(display.total_text(), band_style.add_modifier(Modifier::BOLD)),
        ]),
        Line::from(Span::styled(display.risk_group_text(), band_style)),
    ])
    .alignment(Alignment::Center);
    f.render_widget(summary, chunks[0]);

    let percents = display.percent_texts();
    let values = display
        .prevalence
        .map(|p| [p.any, p.stage_2_3, p.krt]);
    let titles = [" Any AKI ", " AKI stage 2/3 ", " KRT "];

    for (i, title) in titles.iter().enumerate() {
        let ratio = values.map_or(0.0, |v| (v[i] / 100.0).clamp(0.0, 1.0));
        let gauge = Gauge::default()
            .block(
                Block::default()
                    .title(Span::styled(*title, Theme::text_secondary()))
                    .borders(Borders::ALL)
                    .border_style(Theme::border()),
            )
            .gauge_style(band_style)
            .ratio(ratio)
            .label(percents[i].clone());
        f.render_widget(gauge, chunks[i + 1]);
    }

    if let Some(note) = &display.note {
        let note = Paragraph::new(vec![Line::from(vec![
            Span::styled("! ", Theme::danger()),
            Span::styled(note.as_str(), Theme::danger()),
        ])])
        .wrap(Wrap { trim: true });
        f.render_widget(note, chunks[4]);
    }
}

fn render_footer(f: &mut Frame, area: Rect, state: &CalculatorViewState) {
    let content = match &state.status {
        Some(status) => {
            let style = if status.is_error {
                Theme::danger()
            } else {
                Theme::success()
            };
            Line::from(Span::styled(status.message.clone(), style))
        }
        None => Line::from(vec![
            Span::styled("[↑↓] ", Theme::key_hint()),
            Span::styled("Field ", Theme::key_desc()),
            Span::styled("[←→] ", Theme::key_hint()),
            Span::styled("Choose ", Theme::key_desc()),
            Span::styled("[Enter] ", Theme::key_hint()),
            Span::styled("Calculate ", Theme::key_desc()),
            Span::styled("[R] ", Theme::key_hint()),
            Span::styled("Reset ", Theme::key_desc()),
            Span::styled("[P] ", Theme::key_hint()),
            Span::styled("Print ", Theme::key_desc()),
            Span::styled("[S] ", Theme::key_hint()),
            Span::styled("Sample ", Theme::key_desc()),
            Span::styled("[T] ", Theme::key_hint()),
            Span::styled("Tables ", Theme::key_desc()),
            Span::styled("[Q] ", Theme::key_hint()),
            Span::styled("Quit", Theme::key_desc()),
        ]),
    };

    let footer = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Theme::border()),
    );

    f.render_widget(footer, area);
}
