//! Shared settings tab

use crate::app::{App, Setting};
use optimizer_core::{Comparison, TrialStat};
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

    draw_settings(f, app, chunks[0]);
    super::draw_summary(f, comparison, chunks[1]);
}

fn setting_value(app: &App, setting: Setting) -> String {
    let scenario = &app.scenario;
    match setting {
        Setting::TrialRank => scenario.trial_rank.label().to_string(),
        Setting::DamageType => scenario.damage_type.name().to_string(),
        Setting::ScalingType => scenario.scaling_type.name().to_string(),
        Setting::CurrentHp => format!("{:.0}", scenario.current_hp_percent),
        Setting::CharacterLevel => scenario.character_level.to_string(),
        Setting::EnemyLevel => scenario.enemy_level.to_string(),
        Setting::EnemyDefense => scenario.enemy_defense.to_string(),
    }
}

fn draw_settings(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![super::section_header("Shared Settings")];

    for (i, setting) in Setting::all().iter().enumerate() {
        let selected = i == app.selected_setting;
        let value = match (&app.edit_buffer, selected) {
            (Some(buffer), true) => format!("{}_", buffer),
            _ => setting_value(app, *setting),
        };

        let name_style = if selected {
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if selected { "▶ " } else { "  " };

        lines.push(Line::from(vec![
            Span::styled(format!("{}{:18}", marker, setting.name()), name_style),
            Span::styled(value, Style::default().fg(Color::White)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(super::section_header("Trial Rank Bonus"));

    let bonuses = app.scenario.trial_rank.bonuses();
    if bonuses.is_empty() {
        lines.push(Line::from(Span::styled(
            "  No bonus",
            Style::default().fg(Color::DarkGray),
        )));
    }
    for (stat, value) in bonuses {
        let color = match stat {
            TrialStat::Shield => Color::Cyan,
            TrialStat::Def => Color::Blue,
            TrialStat::Hp => Color::Red,
            TrialStat::Atk => Color::Yellow,
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  {:10}", stat.label()), Style::default().fg(color)),
            Span::styled(format!("+{:.0}%", value), Style::default().fg(Color::White)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Settings "),
    );

    f.render_widget(paragraph, area);
}
