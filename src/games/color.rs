//! Color match: pick the option that matches the target swatch.

use rand::{Rng, seq::SliceRandom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Purple,
}

impl Color {
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Purple,
    ];

    pub fn hex(self) -> &'static str {
        match self {
            Color::Red => "#e74c3c",
            Color::Green => "#2ecc71",
            Color::Blue => "#4a90e2",
            Color::Yellow => "#f1c40f",
            Color::Orange => "#e67e22",
            Color::Purple => "#9b59b6",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorRound {
    pub target: Color,
    pub options: Vec<Color>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Correct,
    Wrong,
    Completed,
}

#[derive(Debug, Clone)]
pub struct ColorMatch {
    rounds: u32,
    completed: u32,
    mistakes: u32,
    option_count: usize,
    current: ColorRound,
}

impl ColorMatch {
    pub fn new<R: Rng>(rounds: u32, option_count: usize, rng: &mut R) -> Self {
        let option_count = option_count.clamp(2, Color::ALL.len());
        Self {
            rounds: rounds.max(1),
            completed: 0,
            mistakes: 0,
            option_count,
            current: deal_round(option_count, rng),
        }
    }

    pub fn round(&self) -> &ColorRound {
        &self.current
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn completed_rounds(&self) -> u32 {
        self.completed
    }

    pub fn is_complete(&self) -> bool {
        self.completed >= self.rounds
    }

    /// A wrong answer keeps the round open; a correct one deals the next.
    pub fn answer<R: Rng>(&mut self, color: Color, rng: &mut R) -> Answer {
        if self.is_complete() {
            return Answer::Completed;
        }
        if color != self.current.target {
            self.mistakes += 1;
            return Answer::Wrong;
        }

        self.completed += 1;
        if self.is_complete() {
            return Answer::Completed;
        }
        self.current = deal_round(self.option_count, rng);
        Answer::Correct
    }
}

fn deal_round<R: Rng>(option_count: usize, rng: &mut R) -> ColorRound {
    let mut options: Vec<Color> = Color::ALL.choose_multiple(rng, option_count).copied().collect();
    let target = options[rng.gen_range(0..options.len())];
    options.shuffle(rng);
    ColorRound { target, options }
}
