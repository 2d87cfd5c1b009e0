//! Trial rank bonuses - flat percentage bonuses granted by the player's trial rank

use crate::types::TrialStat;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Trial rank bracket, ordered from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub enum TrialRank {
    #[default]
    #[serde(rename = "Lv. 0–14")]
    Lv0To14,
    #[serde(rename = "Lv. 15–19")]
    Lv15To19,
    #[serde(rename = "Lv. 20–24")]
    Lv20To24,
    #[serde(rename = "Lv. 25–29")]
    Lv25To29,
    #[serde(rename = "Lv. 30–34")]
    Lv30To34,
    #[serde(rename = "Lv. 35–39")]
    Lv35To39,
    #[serde(rename = "Lv. 40–44")]
    Lv40To44,
    #[serde(rename = "Lv. 45–49")]
    Lv45To49,
    #[serde(rename = "Lv. 50–54")]
    Lv50To54,
    #[serde(rename = "Lv. 55–59")]
    Lv55To59,
    #[serde(rename = "Lv. 60–61")]
    Lv60To61,
    #[serde(rename = "Lv. 62–63")]
    Lv62To63,
    #[serde(rename = "Lv. 64")]
    Lv64,
    #[serde(rename = "Lv. 65")]
    Lv65,
}

const SHIELD_ONLY_10: &[(TrialStat, f64)] = &[(TrialStat::Shield, 10.0)];
const SHIELD_ONLY_15: &[(TrialStat, f64)] = &[(TrialStat::Shield, 15.0)];
const SHIELD_DEF_20: &[(TrialStat, f64)] = &[(TrialStat::Shield, 20.0), (TrialStat::Def, 20.0)];
const SHIELD_DEF_25: &[(TrialStat, f64)] = &[(TrialStat::Shield, 25.0), (TrialStat::Def, 25.0)];
const SHIELD_DEF_HP_30: &[(TrialStat, f64)] = &[
    (TrialStat::Shield, 30.0),
    (TrialStat::Def, 30.0),
    (TrialStat::Hp, 30.0),
];
const SHIELD_DEF_HP_40: &[(TrialStat, f64)] = &[
    (TrialStat::Shield, 40.0),
    (TrialStat::Def, 40.0),
    (TrialStat::Hp, 40.0),
];

macro_rules! all_four {
    ($name:ident, $value:expr) => {
        const $name: &[(TrialStat, f64)] = &[
            (TrialStat::Shield, $value),
            (TrialStat::Def, $value),
            (TrialStat::Hp, $value),
            (TrialStat::Atk, $value),
        ];
    };
}

all_four!(ALL_50, 50.0);
all_four!(ALL_75, 75.0);
all_four!(ALL_100, 100.0);
all_four!(ALL_150, 150.0);
all_four!(ALL_200, 200.0);
all_four!(ALL_250, 250.0);
all_four!(ALL_300, 300.0);

impl TrialRank {
    /// Get all ranks in ascending order
    pub fn all() -> &'static [TrialRank] {
        &[
            TrialRank::Lv0To14,
            TrialRank::Lv15To19,
            TrialRank::Lv20To24,
            TrialRank::Lv25To29,
            TrialRank::Lv30To34,
            TrialRank::Lv35To39,
            TrialRank::Lv40To44,
            TrialRank::Lv45To49,
            TrialRank::Lv50To54,
            TrialRank::Lv55To59,
            TrialRank::Lv60To61,
            TrialRank::Lv62To63,
            TrialRank::Lv64,
            TrialRank::Lv65,
        ]
    }

    /// Bracket label as shown in the rank selector
    pub fn label(&self) -> &'static str {
        match self {
            TrialRank::Lv0To14 => "Lv. 0–14",
            TrialRank::Lv15To19 => "Lv. 15–19",
            TrialRank::Lv20To24 => "Lv. 20–24",
            TrialRank::Lv25To29 => "Lv. 25–29",
            TrialRank::Lv30To34 => "Lv. 30–34",
            TrialRank::Lv35To39 => "Lv. 35–39",
            TrialRank::Lv40To44 => "Lv. 40–44",
            TrialRank::Lv45To49 => "Lv. 45–49",
            TrialRank::Lv50To54 => "Lv. 50–54",
            TrialRank::Lv55To59 => "Lv. 55–59",
            TrialRank::Lv60To61 => "Lv. 60–61",
            TrialRank::Lv62To63 => "Lv. 62–63",
            TrialRank::Lv64 => "Lv. 64",
            TrialRank::Lv65 => "Lv. 65",
        }
    }

    /// Bonuses granted at this rank, in table order
    pub fn bonuses(&self) -> &'static [(TrialStat, f64)] {
        match self {
            TrialRank::Lv0To14 => &[],
            TrialRank::Lv15To19 => SHIELD_ONLY_10,
            TrialRank::Lv20To24 => SHIELD_ONLY_15,
            TrialRank::Lv25To29 => SHIELD_DEF_20,
            TrialRank::Lv30To34 => SHIELD_DEF_25,
            TrialRank::Lv35To39 => SHIELD_DEF_HP_30,
            TrialRank::Lv40To44 => SHIELD_DEF_HP_40,
            TrialRank::Lv45To49 => ALL_50,
            TrialRank::Lv50To54 => ALL_75,
            TrialRank::Lv55To59 => ALL_100,
            TrialRank::Lv60To61 => ALL_150,
            TrialRank::Lv62To63 => ALL_200,
            TrialRank::Lv64 => ALL_250,
            TrialRank::Lv65 => ALL_300,
        }
    }

    /// Find a rank by its bracket label
    pub fn from_label(label: &str) -> Option<TrialRank> {
        TrialRank::all().iter().copied().find(|r| r.label() == label)
    }

    /// Flatten this rank's bonuses into a lookup map
    pub fn bonus_map(&self) -> TrialBonusMap {
        let mut map = TrialBonusMap::default();
        for (stat, value) in self.bonuses() {
            map.insert(stat.label(), *value);
        }
        map
    }

    /// Next rank up, wrapping to the lowest
    pub fn next(&self) -> TrialRank {
        let ranks = TrialRank::all();
        let idx = ranks.iter().position(|r| r == self).unwrap_or(0);
        ranks[(idx + 1) % ranks.len()]
    }

    /// Next rank down, wrapping to the highest
    pub fn prev(&self) -> TrialRank {
        let ranks = TrialRank::all();
        let idx = ranks.iter().position(|r| r == self).unwrap_or(0);
        ranks[(idx + ranks.len() - 1) % ranks.len()]
    }
}

impl fmt::Display for TrialRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Flat trial bonus lookup keyed by lower-cased stat label
///
/// Lookups are case-insensitive; absent stats give 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialBonusMap {
    values: HashMap<String, f64>,
}

impl TrialBonusMap {
    /// Set a bonus, overwriting any previous value for the same label
    pub fn insert(&mut self, label: &str, value: f64) {
        self.values.insert(label.to_lowercase(), value);
    }

    /// Bonus percentage for a stat label
    pub fn get(&self, label: &str) -> f64 {
        self.values
            .get(&label.to_lowercase())
            .copied()
            .unwrap_or(0.0)
    }

    /// Bonus percentage for a trial stat
    pub fn stat(&self, stat: TrialStat) -> f64 {
        self.get(stat.label())
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }
}

/// Resolve a rank label into its flat bonus map
///
/// An unknown label behaves like the zero-bonus rank.
pub fn trial_bonus_map(label: &str) -> TrialBonusMap {
    match TrialRank::from_label(label) {
        Some(rank) => rank.bonus_map(),
        None => {
            tracing::warn!(label, "unknown trial rank label, using no bonus");
            TrialBonusMap::default()
        }
    }
}
