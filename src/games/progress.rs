//! Star and score bookkeeping for one child's session.

use super::{Category, GameKind};
use crate::models::{SaveProgressRequest, User};
use serde::{Deserialize, Serialize};

const FULL_POINTS: i64 = 10;
const MISTAKE_PENALTY: i64 = 2;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    pub stars: i64,
    pub visual: i64,
    pub auditory: i64,
    pub tactile: i64,
    pub memory: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub category: Category,
    /// Share of the strongest category, 0-100.
    pub value: u8,
}

impl Progress {
    pub fn from_user(user: &User) -> Self {
        Self {
            stars: user.stars,
            visual: user.visual_score,
            auditory: user.auditory_score,
            tactile: user.tactile_score,
            memory: user.memory_score,
        }
    }

    pub fn score(&self, category: Category) -> i64 {
        match category {
            Category::Visual => self.visual,
            Category::Auditory => self.auditory,
            Category::Tactile => self.tactile,
            Category::Memory => self.memory,
        }
    }

    fn score_mut(&mut self, category: Category) -> &mut i64 {
        match category {
            Category::Visual => &mut self.visual,
            Category::Auditory => &mut self.auditory,
            Category::Tactile => &mut self.tactile,
            Category::Memory => &mut self.memory,
        }
    }

    /// Awards a star and category points for a finished exercise. Every
    /// completion earns at least one point. Returns the points awarded.
    pub fn complete(&mut self, kind: GameKind, mistakes: u32) -> i64 {
        let penalty = i64::from(mistakes).saturating_mul(MISTAKE_PENALTY);
        let points = (FULL_POINTS - penalty).max(1);
        self.stars = self.stars.saturating_add(1);
        let score = self.score_mut(kind.category());
        *score = score.saturating_add(points);
        points
    }

    pub fn to_request(&self, user_id: i64) -> SaveProgressRequest {
        SaveProgressRequest {
            user_id,
            stars: self.stars,
            visual: self.visual,
            auditory: self.auditory,
            tactile: self.tactile,
            memory: self.memory,
        }
    }

    pub fn profile(&self) -> Vec<ProfilePoint> {
        let best = Category::ALL
            .iter()
            .map(|category| self.score(*category))
            .max()
            .unwrap_or(0);

        Category::ALL
            .iter()
            .map(|category| {
                let value = if best <= 0 {
                    0
                } else {
                    let score = i128::from(self.score(*category).max(0));
                    (score * 100 / i128::from(best)) as u8
                };
                ProfilePoint {
                    category: *category,
                    value,
                }
            })
            .collect()
    }
}
