//! UI rendering

mod breakdown_view;
mod build_view;
mod help_view;
mod settings_view;

use crate::app::{App, Tab};
use optimizer_core::Comparison;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    let comparison = app.comparison();
    match app.current_tab {
        Tab::Settings => settings_view::draw(f, app, &comparison, chunks[1]),
        Tab::BuildA | Tab::BuildB => build_view::draw(f, app, &comparison, chunks[1]),
        Tab::Breakdown => breakdown_view::draw(f, app, &comparison, chunks[1]),
        Tab::Help => help_view::draw(f, app, chunks[1]),
    }

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("Tab", "Next tab"), ("s", "Swap"), ("r", "Reset"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Settings => vec![("↑/↓", "Select"), ("←/→", "Change"), ("0-9 Enter", "Type value")],
        Tab::BuildA | Tab::BuildB => vec![
            ("↑/↓", "Select"),
            ("←/→", "±1"),
            ("0-9 Enter", "Type value"),
            ("x", "Zero"),
            ("p", "Preset"),
        ],
        Tab::Breakdown => vec![("↑/↓", "Scroll"), ("w", "Save")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::White)));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(format!("[{}]", key), Style::default().fg(Color::Cyan)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", app.status)),
        )
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Attribute Optimizer "),
        )
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

pub fn section_header(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {} ═══", title),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

/// Color for a signed percentage
pub fn delta_color(percent: f64) -> Color {
    if percent > 0.0 {
        Color::Green
    } else if percent < 0.0 {
        Color::Red
    } else {
        Color::White
    }
}

pub fn multiplier_line(name: &str, multiplier: f64, bonus_percent: f64) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:20}", name), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.3}x", multiplier), Style::default().fg(Color::White)),
        Span::styled(
            format!(" ({:+.1}%)", bonus_percent),
            Style::default().fg(delta_color(bonus_percent)),
        ),
    ])
}

/// Result lines shared by the settings and build tabs
pub fn summary_lines(comparison: &Comparison) -> Vec<Line<'static>> {
    let a = &comparison.build_a;
    let b = &comparison.build_b;

    vec![
        section_header("Build A"),
        multiplier_line("Multiplier", a.multiplier, a.bonus_percent()),
        multiplier_line("Effective", a.effective_multiplier, a.effective_bonus_percent()),
        Line::from(""),
        section_header("Build B"),
        multiplier_line("Multiplier", b.multiplier, b.bonus_percent()),
        multiplier_line("Effective", b.effective_multiplier, b.effective_bonus_percent()),
        Line::from(""),
        section_header("Enemy"),
        Line::from(vec![
            Span::styled(format!("{:20}", "DEF Multiplier"), Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{:.3}x", comparison.enemy_def_multiplier),
                Style::default().fg(Color::White),
            ),
        ]),
        Line::from(vec![
            Span::styled(format!("{:20}", "Verdict"), Style::default().fg(Color::Gray)),
            Span::styled(
                comparison.penetration.label().to_string(),
                Style::default().fg(Color::Magenta),
            ),
        ]),
        Line::from(""),
        section_header("B vs A"),
        Line::from(Span::styled(
            format!("{:+.2}%", comparison.difference_percent),
            Style::default()
                .fg(delta_color(comparison.difference_percent))
                .add_modifier(Modifier::BOLD),
        )),
    ]
}

pub fn draw_summary(f: &mut Frame, comparison: &Comparison, area: Rect) {
    let paragraph = Paragraph::new(summary_lines(comparison))
        .block(Block::default().borders(Borders::ALL).title(" Result "));
    f.render_widget(paragraph, area);
}
