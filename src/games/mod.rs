//! Exercise state machines played on the client.
//!
//! Each game is plain data driven by method calls; randomness comes from a
//! caller-supplied [`rand::Rng`] so sessions can be replayed in tests.
//! A finished exercise is reported to [`progress::Progress`], which turns it
//! into stars and category points for the save-progress call.

pub mod color;
pub mod drawing;
pub mod memory;
pub mod progress;
pub mod rhythm;
pub mod sensor;
pub mod syllables;

use crate::models::ExerciseInfo;
use serde::{Deserialize, Serialize};

/// Sensory area an exercise trains; one score column per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Visual,
    Auditory,
    Tactile,
    Memory,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Visual,
        Category::Auditory,
        Category::Tactile,
        Category::Memory,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Visual => "visual",
            Category::Auditory => "auditory",
            Category::Tactile => "tactile",
            Category::Memory => "memory",
        }
    }
}

/// Which state machine drives an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GameKind {
    ColorMatch,
    RhythmRepeat,
    SyllableTap,
    Drawing,
    MemoryMatch,
}

impl GameKind {
    pub fn as_str(self) -> &'static str {
        match self {
            GameKind::ColorMatch => "color-match",
            GameKind::RhythmRepeat => "rhythm-repeat",
            GameKind::SyllableTap => "syllable-tap",
            GameKind::Drawing => "drawing",
            GameKind::MemoryMatch => "memory-match",
        }
    }

    pub fn category(self) -> Category {
        match self {
            GameKind::ColorMatch => Category::Visual,
            GameKind::RhythmRepeat | GameKind::SyllableTap => Category::Auditory,
            GameKind::Drawing => Category::Tactile,
            GameKind::MemoryMatch => Category::Memory,
        }
    }
}

const CATALOGUE: [(GameKind, &str); 5] = [
    (GameKind::ColorMatch, "Find the matching color"),
    (GameKind::RhythmRepeat, "Repeat the rhythm"),
    (GameKind::SyllableTap, "Tap the syllables"),
    (GameKind::Drawing, "Draw with your finger"),
    (GameKind::MemoryMatch, "Find the pairs"),
];

pub fn catalogue() -> Vec<ExerciseInfo> {
    CATALOGUE
        .iter()
        .map(|(kind, title)| ExerciseInfo {
            category: kind.category().as_str().to_string(),
            title: title.to_string(),
            game: kind.as_str().to_string(),
        })
        .collect()
}
