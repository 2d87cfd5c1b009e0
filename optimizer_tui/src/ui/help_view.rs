//! Help tab view

use crate::app::App;
use optimizer_core::calc::bonus_percent;
use optimizer_core::{calculate_multiplier, EvaluationContext, StatField, StatSection};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const CASE_STUDY_PERCENT: f64 = 10.0;

pub fn draw(f: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        super::section_header("Navigation"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("F1-F5", "Jump to tab (Settings/Build A/Build B/Calc/Help)"),
        key_line("↑/k  ↓/j", "Select row / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        super::section_header("Editing"),
        key_line("←/h  →/l", "Change setting, or step field by 1"),
        key_line("0-9 - .", "Type a value"),
        key_line("Enter / Esc", "Commit / cancel typed value"),
        key_line("x", "Zero the selected field"),
        key_line("p", "Apply the next quick preset to this build"),
        key_line("s", "Swap Build A and Build B"),
        key_line("r", "Reset all settings and builds"),
        key_line("w", "Save scenario to scenario.toml"),
        Line::from("  Presets come from presets.toml in the working directory when it exists."),
        Line::from(""),
        super::section_header("Formulas"),
        formula("Build", "Scaling × Skill × Skill Boost × DMG Boost × Weapon Boost × Additional × Resolve × Morale × CRIT"),
        formula("Scaling", "1 + (ATK% + Element ATK% | HP% | DEF% + Trial Rank bonus) / 100"),
        formula("CRIT", "1 + CRIT Level × CRIT DMG, level keeps rising past 100% chance"),
        formula("Resolve", "1 + R × 2 × ((1 - HP) × 2 + 1) × (1 - HP), HP floored at 25%"),
        formula("Morale", "1 + M × HP"),
        formula("Enemy DEF", "(300 + LevelΔ) / (300 + LevelΔ + DEF), LevelΔ in [-20, 0]"),
        Line::from(""),
        super::section_header("Case Studies"),
        case_line(StatField::Morale, &[100.0, 50.0]),
        case_line(StatField::Resolve, &[100.0, 50.0, 25.0]),
        Line::from(""),
        Line::from("  Skill hits ignore CRIT and Weapon DMG Boost."),
        Line::from("  Weapon hits ignore Skill DMG. Only Skill hits use Skill DMG Boost."),
        Line::from("  Resolve favors low HP, Morale favors high HP."),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}

/// Bonus from a 10% Morale or Resolve buff at each HP percentage
fn case_study(field: StatField, hp_points: &[f64]) -> Vec<String> {
    let section = StatSection::new().with(field, CASE_STUDY_PERCENT);
    hp_points
        .iter()
        .map(|hp| {
            let ctx = EvaluationContext::default().with_current_hp(*hp);
            let multiplier = calculate_multiplier(&[&section], &ctx);
            format!("{:+.1}% at {:.0}% HP", bonus_percent(multiplier), hp)
        })
        .collect()
}

fn case_line(field: StatField, hp_points: &[f64]) -> Line<'static> {
    let name = format!("{} {:.0}%", field.label().trim_end_matches(" %"), CASE_STUDY_PERCENT);
    let mut spans = vec![Span::styled(format!("  {:14}", name), Style::default().fg(Color::Yellow))];
    for cell in case_study(field, hp_points) {
        spans.push(Span::styled(format!("{:20}", cell), Style::default().fg(Color::White)));
    }
    Line::from(spans)
}

fn formula(name: &str, text: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:12}", name), Style::default().fg(Color::Yellow)),
        Span::styled(text.to_string(), Style::default().fg(Color::Gray)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_morale_case_study() {
        assert_eq!(
            case_study(StatField::Morale, &[100.0, 50.0]),
            vec!["+10.0% at 100% HP", "+5.0% at 50% HP"]
        );
    }

    #[test]
    fn test_resolve_case_study() {
        assert_eq!(
            case_study(StatField::Resolve, &[100.0, 50.0, 25.0]),
            vec!["+0.0% at 100% HP", "+20.0% at 50% HP", "+37.5% at 25% HP"]
        );
    }
}
