//! Rendering for the TUI dashboard.
//!
//! Layout: input form on the left, gauge and session history on the right,
//! status bar along the bottom.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Gauge, Paragraph, Row, Table};

use aqisense_core::gauge::bands;
use aqisense_types::AqiCategory;

use super::app::{App, DATE_FIELD, FORM_ROWS};
use crate::util::format_date;

/// Convert a category's display color into a terminal color.
fn category_color(category: AqiCategory) -> Color {
    let (r, g, b) = category.rgb();
    Color::Rgb(r, g, b)
}

/// Draw the complete TUI interface.
pub fn draw(frame: &mut Frame, app: &App) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header bar
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, main_layout[0]);

    let content_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(38), // Input form
            Constraint::Min(1),     // Gauge + history
        ])
        .split(main_layout[1]);

    draw_form(frame, content_layout[0], app);

    let right_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Gauge
            Constraint::Length(3), // Scale legend
            Constraint::Min(1),    // History
        ])
        .split(content_layout[1]);

    draw_gauge(frame, right_layout[0], app);
    draw_legend(frame, right_layout[1]);
    draw_history(frame, right_layout[2], app);

    draw_status_bar(frame, main_layout[2], app);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Line::from(vec![
        Span::styled(
            " AQI Predictor ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("single-session air quality estimation"),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Draw the input form, one row per field plus the date row.
fn draw_form(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines: Vec<Line> = Vec::with_capacity(FORM_ROWS);

    for (i, field) in app.fields.iter().enumerate() {
        let selected = i == app.selected;
        let marker = if selected { "▸ " } else { "  " };
        let value = format!("{:.*} {}", field.precision, field.value, field.unit);
        let style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{marker}{:<12}", field.label), style),
            Span::styled(format!("{value:>14}"), style),
        ]));
    }

    let date_selected = app.selected == DATE_FIELD;
    let marker = if date_selected { "▸ " } else { "  " };
    let style = if date_selected {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{marker}{:<12}", "Date"), style),
        Span::styled(format!("{:>14}", format_date(app.date)), style),
    ]));

    let form = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Measurements "),
    );
    frame.render_widget(form, area);
}

/// Draw the gauge for the most recent prediction.
fn draw_gauge(frame: &mut Frame, area: Rect, app: &App) {
    match &app.last_prediction {
        Some(prediction) => {
            let spec = prediction.gauge();
            let gauge = Gauge::default()
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!(" {} ", spec.title)),
                )
                .gauge_style(Style::default().fg(category_color(prediction.category)))
                .ratio(spec.fill_ratio())
                .label(format!("{:.1} / {:.0}", spec.value, spec.axis_max));
            frame.render_widget(gauge, area);
        }
        None => {
            let placeholder = Paragraph::new("Press Enter to run a prediction").block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Predicted AQI "),
            );
            frame.render_widget(placeholder, area);
        }
    }
}

/// Draw the six scale tiers as a colored legend.
fn draw_legend(frame: &mut Frame, area: Rect) {
    let mut spans: Vec<Span> = Vec::new();
    for band in bands() {
        spans.push(Span::styled(
            "■ ",
            Style::default().fg(category_color(band.category)),
        ));
        spans.push(Span::raw(format!("{}  ", band.category.label())));
    }
    let legend = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title(" Scale "));
    frame.render_widget(legend, area);
}

/// Draw the session history table, newest entry last.
fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let header = Row::new(["Date", "Heure", "AQI", "Qualité"])
        .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .history
        .records()
        .iter()
        .map(|record| {
            Row::new(vec![
                Span::raw(format_date(record.date)),
                Span::raw(format!("{}", record.hour)),
                Span::raw(format!("{:.1}", record.aqi)),
                Span::styled(
                    record.category.label(),
                    Style::default().fg(category_color(record.category)),
                ),
            ])
        })
        .collect();

    let title = format!(" Session history ({}) ", app.history.len());
    let table = Table::new(
        rows,
        [
            Constraint::Length(12),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Min(10),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let content = match &app.status {
        Some((message, _)) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(Span::styled(
            " ↑/↓ select  ←/→ adjust  PgUp/PgDn coarse  Enter predict  e export  r reset  q quit",
            Style::default().fg(Color::DarkGray),
        )),
    };
    frame.render_widget(Paragraph::new(content), area);
}
