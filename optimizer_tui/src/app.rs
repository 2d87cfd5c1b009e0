//! Application state

use optimizer_core::{
    config::{load_presets, load_scenario, save_scenario},
    default_presets,
    section::fields_for,
    BuildPreset, Comparison, DamageType, ScalingType, Scenario, SectionKind, Side, StatField,
};
use std::path::{Path, PathBuf};

/// File written by the save key
pub const SAVE_PATH: &str = "scenario.toml";

/// Custom presets read at startup when present
pub const PRESETS_PATH: &str = "presets.toml";

/// Presets from `path` if it exists, otherwise the built-in set
pub fn presets_from(path: &Path) -> Vec<BuildPreset> {
    if !path.exists() {
        return default_presets();
    }
    match load_presets(path) {
        Ok(presets) if !presets.is_empty() => {
            tracing::info!(path = %path.display(), count = presets.len(), "custom presets loaded");
            presets
        }
        Ok(_) => {
            tracing::warn!(path = %path.display(), "preset file is empty, using built-in presets");
            default_presets()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "failed to load presets");
            default_presets()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Settings,
    BuildA,
    BuildB,
    Breakdown,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Settings, Tab::BuildA, Tab::BuildB, Tab::Breakdown, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Settings => "Settings",
            Tab::BuildA => "Build A",
            Tab::BuildB => "Build B",
            Tab::Breakdown => "Calc",
            Tab::Help => "Help",
        }
    }

    /// Build edited on this tab, if any
    pub fn side(&self) -> Option<Side> {
        match self {
            Tab::BuildA => Some(Side::A),
            Tab::BuildB => Some(Side::B),
            _ => None,
        }
    }
}

/// Shared setting rows on the settings tab
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    TrialRank,
    DamageType,
    ScalingType,
    CurrentHp,
    CharacterLevel,
    EnemyLevel,
    EnemyDefense,
}

impl Setting {
    pub fn all() -> &'static [Setting] {
        &[
            Setting::TrialRank,
            Setting::DamageType,
            Setting::ScalingType,
            Setting::CurrentHp,
            Setting::CharacterLevel,
            Setting::EnemyLevel,
            Setting::EnemyDefense,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Setting::TrialRank => "Trial Rank",
            Setting::DamageType => "Damage Type",
            Setting::ScalingType => "Scaling Type",
            Setting::CurrentHp => "Current HP %",
            Setting::CharacterLevel => "Character Level",
            Setting::EnemyLevel => "Enemy Level",
            Setting::EnemyDefense => "Enemy DEF",
        }
    }

    /// Whether a typed number can be entered for this setting
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            Setting::TrialRank | Setting::DamageType | Setting::ScalingType
        )
    }
}

fn cycle<T: Copy + PartialEq>(all: &[T], current: T, forward: bool) -> T {
    let idx = all.iter().position(|v| *v == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % all.len()
    } else {
        (idx + all.len() - 1) % all.len()
    };
    all[next]
}

pub struct App {
    pub current_tab: Tab,
    pub scenario: Scenario,
    pub presets: Vec<BuildPreset>,
    /// Preset applied by the next `p` press
    pub next_preset: usize,
    pub selected_setting: usize,
    pub selected_row: usize,
    /// Number being typed for the selected row
    pub edit_buffer: Option<String>,
    pub status: String,
    pub breakdown_scroll: usize,
}

impl App {
    pub fn new() -> Self {
        App {
            current_tab: Tab::Settings,
            scenario: Scenario::default(),
            presets: presets_from(Path::new(PRESETS_PATH)),
            next_preset: 0,
            selected_setting: 0,
            selected_row: 0,
            edit_buffer: None,
            status: "Ready.".to_string(),
            breakdown_scroll: 0,
        }
    }

    /// Start from a scenario file, falling back to defaults if it cannot be read
    pub fn with_scenario_file(path: &Path) -> Self {
        let mut app = App::new();
        match load_scenario(path) {
            Ok(scenario) => {
                tracing::info!(path = %path.display(), "scenario loaded");
                app.scenario = scenario;
                app.status = format!("Loaded {}", path.display());
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to load scenario");
                app.status = format!("Could not load {}: {}", path.display(), e);
            }
        }
        app
    }

    pub fn comparison(&self) -> Comparison {
        self.scenario.compare()
    }

    /// Editable (section, field) rows for a build tab under the current damage type
    pub fn field_rows(&self) -> Vec<(SectionKind, StatField)> {
        SectionKind::all()
            .iter()
            .flat_map(|kind| {
                fields_for(*kind, self.scenario.damage_type)
                    .iter()
                    .map(move |field| (*kind, *field))
            })
            .collect()
    }

    pub fn selected_field(&self) -> Option<(SectionKind, StatField)> {
        self.field_rows().get(self.selected_row).copied()
    }

    pub fn current_setting(&self) -> Setting {
        Setting::all()[self.selected_setting.min(Setting::all().len() - 1)]
    }

    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    pub fn next_tab(&mut self) {
        self.set_tab_to(cycle(Tab::all(), self.current_tab, true));
    }

    pub fn prev_tab(&mut self) {
        self.set_tab_to(cycle(Tab::all(), self.current_tab, false));
    }

    pub fn set_tab(&mut self, index: usize) {
        let tabs = Tab::all();
        if index < tabs.len() {
            self.set_tab_to(tabs[index]);
        }
    }

    fn set_tab_to(&mut self, tab: Tab) {
        self.edit_buffer = None;
        self.current_tab = tab;
    }

    pub fn show_help(&mut self) {
        self.set_tab_to(Tab::Help);
    }

    pub fn on_up(&mut self) {
        self.edit_buffer = None;
        match self.current_tab {
            Tab::Settings => {
                self.selected_setting = self.selected_setting.saturating_sub(1);
            }
            Tab::BuildA | Tab::BuildB => {
                self.selected_row = self.selected_row.saturating_sub(1);
            }
            Tab::Breakdown => {
                self.breakdown_scroll = self.breakdown_scroll.saturating_sub(1);
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        self.edit_buffer = None;
        match self.current_tab {
            Tab::Settings => {
                if self.selected_setting < Setting::all().len() - 1 {
                    self.selected_setting += 1;
                }
            }
            Tab::BuildA | Tab::BuildB => {
                if self.selected_row < self.field_rows().len().saturating_sub(1) {
                    self.selected_row += 1;
                }
            }
            Tab::Breakdown => {
                self.breakdown_scroll += 1;
            }
            Tab::Help => {}
        }
    }

    pub fn on_left(&mut self) {
        self.adjust(false);
    }

    pub fn on_right(&mut self) {
        self.adjust(true);
    }

    /// Step the selected setting or field up or down
    fn adjust(&mut self, up: bool) {
        self.edit_buffer = None;
        let sign = if up { 1 } else { -1 };

        if let Some(side) = self.current_tab.side() {
            if let Some((kind, field)) = self.selected_field() {
                self.scenario
                    .build_mut(side)
                    .section_mut(kind)
                    .add(field, sign as f64);
            }
            return;
        }

        if self.current_tab != Tab::Settings {
            return;
        }

        let setting = self.current_setting();
        let scenario = &mut self.scenario;
        match setting {
            Setting::TrialRank => {
                scenario.trial_rank = if up {
                    scenario.trial_rank.next()
                } else {
                    scenario.trial_rank.prev()
                };
            }
            Setting::DamageType => {
                scenario.damage_type = cycle(DamageType::all(), scenario.damage_type, up);
                self.clamp_selected_row();
            }
            Setting::ScalingType => {
                scenario.scaling_type = cycle(ScalingType::all(), scenario.scaling_type, up);
            }
            Setting::CurrentHp => {
                let hp = scenario.current_hp_percent + 5.0 * sign as f64;
                scenario.set_current_hp(hp);
            }
            Setting::CharacterLevel => {
                scenario.character_level = scenario.character_level.saturating_add(sign).max(0);
            }
            Setting::EnemyLevel => {
                scenario.enemy_level = scenario.enemy_level.saturating_add(sign).max(0);
            }
            Setting::EnemyDefense => {
                let defense = scenario.enemy_defense.saturating_add(10 * sign);
                scenario.set_enemy_defense(defense);
            }
        }
    }

    fn clamp_selected_row(&mut self) {
        let rows = self.field_rows().len();
        if self.selected_row >= rows {
            self.selected_row = rows.saturating_sub(1);
        }
    }

    /// Type a character into the value being edited
    pub fn on_char(&mut self, c: char) {
        let accepts_input = match self.current_tab {
            Tab::BuildA | Tab::BuildB => true,
            Tab::Settings => self.current_setting().is_numeric(),
            _ => false,
        };
        if !accepts_input || !(c.is_ascii_digit() || c == '-' || c == '.') {
            return;
        }
        self.edit_buffer.get_or_insert_with(String::new).push(c);
    }

    pub fn on_backspace(&mut self) {
        if let Some(buffer) = self.edit_buffer.as_mut() {
            buffer.pop();
        }
    }

    pub fn on_escape(&mut self) {
        self.edit_buffer = None;
    }

    /// Commit the typed value
    pub fn on_enter(&mut self) {
        let Some(buffer) = self.edit_buffer.take() else {
            return;
        };
        let Ok(value) = buffer.parse::<f64>() else {
            self.status = format!("'{}' is not a number", buffer);
            return;
        };

        if let Some(side) = self.current_tab.side() {
            if let Some((kind, field)) = self.selected_field() {
                self.scenario.build_mut(side).section_mut(kind).set(field, value);
                self.status = format!("{} {} = {}", side.name(), field.label(), value);
            }
            return;
        }

        if self.current_tab == Tab::Settings {
            let setting = self.current_setting();
            let scenario = &mut self.scenario;
            match setting {
                Setting::CurrentHp => scenario.set_current_hp(value),
                Setting::CharacterLevel => scenario.character_level = (value as i32).max(0),
                Setting::EnemyLevel => scenario.enemy_level = (value as i32).max(0),
                Setting::EnemyDefense => scenario.set_enemy_defense(value as i32),
                _ => {}
            }
        }
    }

    /// Zero the selected field
    pub fn zero_selected(&mut self) {
        self.edit_buffer = None;
        if let (Some(side), Some((kind, field))) = (self.current_tab.side(), self.selected_field()) {
            self.scenario.build_mut(side).section_mut(kind).set(field, 0.0);
        }
    }

    /// Apply the next preset to the build on the current tab
    pub fn cycle_preset(&mut self) {
        let Some(side) = self.current_tab.side() else {
            return;
        };
        if self.presets.is_empty() {
            self.status = "No presets available".to_string();
            return;
        }

        let idx = self.next_preset % self.presets.len();
        let preset = &self.presets[idx];
        self.scenario.apply_preset(preset, side);
        self.status = format!("Applied '{}' to {}", preset.label, side.name());
        self.next_preset = (idx + 1) % self.presets.len();
    }

    pub fn swap_builds(&mut self) {
        self.scenario.swap_builds();
        self.status = "Swapped Build A and Build B".to_string();
    }

    pub fn reset(&mut self) {
        self.scenario.reset();
        self.edit_buffer = None;
        self.selected_row = 0;
        self.next_preset = 0;
        self.status = "Reset all settings and builds".to_string();
    }

    pub fn save(&mut self) {
        self.save_to(&PathBuf::from(SAVE_PATH));
    }

    pub fn save_to(&mut self, path: &Path) {
        match save_scenario(&self.scenario, path) {
            Ok(()) => {
                tracing::info!(path = %path.display(), "scenario saved");
                self.status = format!("Saved {}", path.display());
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "failed to save scenario");
                self.status = format!("Save failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn on_tab(tab: Tab) -> App {
        let mut app = App::new();
        app.current_tab = tab;
        app
    }

    #[test]
    fn test_typed_value_sets_field() {
        let mut app = on_tab(Tab::BuildB);
        // First weapon row under Weapon damage is ATK %
        for c in "125.5".chars() {
            app.on_char(c);
        }
        app.on_enter();

        let value = app.scenario.build_b.weapon.get(StatField::AtkPercent);
        assert!((value - 125.5).abs() < f64::EPSILON);
        assert!(!app.is_editing());
    }

    #[test]
    fn test_invalid_input_is_ignored() {
        let mut app = on_tab(Tab::BuildA);
        app.on_char('a');
        assert!(!app.is_editing());

        app.on_char('-');
        app.on_enter();
        assert!(app.scenario.build_a.weapon.is_zero());
    }

    #[test]
    fn test_arrow_adjust_field() {
        let mut app = on_tab(Tab::BuildA);
        app.on_down();
        app.on_right();
        app.on_right();
        let (kind, field) = app.selected_field().unwrap();
        assert_eq!(kind, SectionKind::Weapon);
        assert_eq!(field, StatField::DmgBoost);
        assert!((app.scenario.build_a.weapon.get(field) - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_settings_adjust() {
        let mut app = on_tab(Tab::Settings);
        app.on_right();
        assert_eq!(app.scenario.trial_rank, optimizer_core::TrialRank::Lv15To19);

        app.selected_setting = 3;
        app.on_right();
        assert_eq!(app.scenario.current_hp_percent, 100.0);
        app.on_left();
        assert_eq!(app.scenario.current_hp_percent, 95.0);

        app.selected_setting = 6;
        for c in "-40".chars() {
            app.on_char(c);
        }
        app.on_enter();
        assert_eq!(app.scenario.enemy_defense, 0);
    }

    #[test]
    fn test_huge_typed_values_step_without_overflow() {
        let mut app = on_tab(Tab::Settings);
        for setting in [4, 5, 6] {
            app.selected_setting = setting;
            for c in "99999999999".chars() {
                app.on_char(c);
            }
            app.on_enter();
            app.on_right();
            app.on_left();
        }
        assert_eq!(app.scenario.character_level, i32::MAX - 1);
        assert_eq!(app.scenario.enemy_level, i32::MAX - 1);
        assert_eq!(app.scenario.enemy_defense, i32::MAX - 10);

        let cmp = app.comparison();
        assert!(cmp.enemy_def_multiplier.is_finite());
    }

    #[test]
    fn test_damage_type_change_clamps_rows() {
        let mut app = on_tab(Tab::BuildA);
        app.scenario.damage_type = DamageType::ConsonanceWeapon;
        app.selected_row = app.field_rows().len() - 1;

        app.current_tab = Tab::Settings;
        app.selected_setting = 1;
        app.on_right(); // Consonance Weapon -> Weapon
        assert_eq!(app.scenario.damage_type, DamageType::Weapon);
        assert!(app.selected_row < app.field_rows().len());
    }

    #[test]
    fn test_presets_cycle() {
        let mut app = on_tab(Tab::BuildA);
        app.cycle_preset();
        assert!((app.scenario.build_a.weapon.get(StatField::CritDmg) - 190.0).abs() < f64::EPSILON);
        app.cycle_preset();
        assert!((app.scenario.build_a.demon.get(StatField::Resolve) - 12.0).abs() < f64::EPSILON);
        assert!(app.scenario.build_b.weapon.is_zero());
    }

    #[test]
    fn test_swap_and_reset() {
        let mut app = on_tab(Tab::BuildA);
        app.cycle_preset();
        let before = app.comparison();
        app.swap_builds();
        let after = app.comparison();
        assert_eq!(before.build_a.multiplier, after.build_b.multiplier);

        app.reset();
        assert_eq!(app.scenario, Scenario::default());
    }

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}_{}", std::process::id(), name));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_custom_presets_file() {
        let path = temp_file(
            "custom_presets.toml",
            r#"
[[presets]]
id = "glass"
label = "Glass Cannon"

[presets.weapon]
critChance = 150
critDmg = 100
"#,
        );
        let presets = presets_from(&path);
        let _ = std::fs::remove_file(&path);

        assert_eq!(presets.len(), 1);
        assert_eq!(presets[0].id, "glass");

        let mut app = on_tab(Tab::BuildB);
        app.presets = presets;
        app.cycle_preset();
        assert!((app.comparison().build_b.multiplier - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_bad_presets_file_falls_back() {
        let path = temp_file("broken_presets.toml", "[[presets]]\nid = \"\"\nlabel = \"x\"\n");
        let presets = presets_from(&path);
        let _ = std::fs::remove_file(&path);
        assert_eq!(presets, default_presets());

        let missing = presets_from(Path::new("no/such/presets.toml"));
        assert_eq!(missing.len(), 3);
    }

    #[test]
    fn test_tab_navigation_wraps() {
        let mut app = App::new();
        app.prev_tab();
        assert_eq!(app.current_tab, Tab::Help);
        app.next_tab();
        assert_eq!(app.current_tab, Tab::Settings);
        app.set_tab(2);
        assert_eq!(app.current_tab, Tab::BuildB);
    }
}
