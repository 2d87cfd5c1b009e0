//! Multiplier breakdown tab - every term of both builds side by side

use crate::app::App;
use optimizer_core::{BuildResult, Comparison, MultiplierBreakdown};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, comparison: &Comparison, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_build(f, app, " Build A ", &comparison.build_a, comparison, chunks[0]);
    draw_build(f, app, " Build B ", &comparison.build_b, comparison, chunks[1]);
}

fn terms(breakdown: &MultiplierBreakdown) -> [(&'static str, f64); 9] {
    [
        ("Scaling", breakdown.scaling),
        ("Skill DMG", breakdown.skill),
        ("Skill DMG Boost", breakdown.skill_boost),
        ("DMG Boost", breakdown.general_boost),
        ("Weapon DMG Boost", breakdown.weapon_boost),
        ("Additional Boost", breakdown.additional_boost),
        ("Resolve", breakdown.resolve),
        ("Morale", breakdown.morale),
        ("CRIT", breakdown.crit),
    ]
}

fn term_line(name: &str, value: f64) -> Line<'static> {
    let color = if value > 1.0 {
        Color::Green
    } else if value < 1.0 {
        Color::Red
    } else {
        Color::DarkGray
    };
    Line::from(vec![
        Span::styled(format!("× {:18}", name), Style::default().fg(Color::Gray)),
        Span::styled(format!("{:.4}", value), Style::default().fg(color)),
    ])
}

fn draw_build(
    f: &mut Frame,
    app: &App,
    title: &str,
    result: &BuildResult,
    comparison: &Comparison,
    area: Rect,
) {
    let breakdown = &result.breakdown;
    let mut lines = vec![
        super::section_header("Inputs"),
        Line::from(format!(
            "  {} total: {:.1}%",
            app.scenario.scaling_type, breakdown.scaling_percent
        )),
        Line::from(format!("  HP ratio used: {:.2}", breakdown.hp_ratio)),
        Line::from(""),
        super::section_header("Terms"),
    ];

    for (name, value) in terms(breakdown) {
        lines.push(term_line(name, value));
    }

    lines.push(Line::from(""));
    lines.push(super::multiplier_line("= Build", result.multiplier, result.bonus_percent()));
    lines.push(term_line("Enemy DEF", comparison.enemy_def_multiplier));
    lines.push(super::multiplier_line(
        "= Effective",
        result.effective_multiplier,
        result.effective_bonus_percent(),
    ));

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title.to_string()))
        .scroll((app.breakdown_scroll as u16, 0));

    f.render_widget(paragraph, area);
}
