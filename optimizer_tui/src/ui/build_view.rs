//! Build editing tab - the four panels of Build A or Build B

use crate::app::App;
use optimizer_core::{Comparison, Side};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, comparison: &Comparison, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);

    let side = app.current_tab.side().unwrap_or(Side::A);
    draw_fields(f, app, side, chunks[0]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(app.presets.len() as u16 + 3)])
        .split(chunks[1]);

    super::draw_summary(f, comparison, right[0]);
    draw_presets(f, app, right[1]);
}

fn draw_fields(f: &mut Frame, app: &App, side: Side, area: Rect) {
    let build = app.scenario.build(side);
    let rows = app.field_rows();

    let mut lines: Vec<Line> = Vec::new();
    let mut current_kind = None;
    let mut selected_line = 0;

    for (i, (kind, field)) in rows.iter().enumerate() {
        if current_kind != Some(*kind) {
            if current_kind.is_some() {
                lines.push(Line::from(""));
            }
            lines.push(super::section_header(kind.title()));
            current_kind = Some(*kind);
        }

        let selected = i == app.selected_row;
        if selected {
            selected_line = lines.len();
        }

        let value = build.section(*kind).get(*field);
        let value_text = match (&app.edit_buffer, selected) {
            (Some(buffer), true) => format!("{}_", buffer),
            _ => format!("{}", value),
        };
        let value_color = if value == 0.0 { Color::DarkGray } else { Color::White };

        let name_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if selected { "▶ " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(format!("{}{:24}", marker, field.label()), name_style),
            Span::styled(value_text, Style::default().fg(value_color)),
        ]));
    }

    // Keep the selected row on screen
    let visible = area.height.saturating_sub(2) as usize;
    let scroll = selected_line.saturating_sub(visible.saturating_sub(1));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ({}) ", side.name(), app.scenario.damage_type)),
        )
        .scroll((scroll as u16, 0));

    f.render_widget(paragraph, area);
}

fn draw_presets(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    for (i, preset) in app.presets.iter().enumerate() {
        let next = i == app.next_preset % app.presets.len().max(1);
        let style = if next {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::Gray)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} {:16}", if next { "p" } else { " " }, preset.label), style),
            Span::styled(
                preset.description.clone().unwrap_or_default(),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Quick Presets "));

    f.render_widget(paragraph, area);
}
