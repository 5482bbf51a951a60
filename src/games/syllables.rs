//! Syllable tapping: clap once per syllable of the shown word.

use rand::{Rng, seq::SliceRandom};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Word {
    pub text: &'static str,
    pub syllables: &'static [&'static str],
}

pub const WORDS: [Word; 6] = [
    Word { text: "kot", syllables: &["kot"] },
    Word { text: "mama", syllables: &["ma", "ma"] },
    Word { text: "lato", syllables: &["la", "to"] },
    Word { text: "banan", syllables: &["ba", "nan"] },
    Word { text: "samolot", syllables: &["sa", "mo", "lot"] },
    Word { text: "lokomotywa", syllables: &["lo", "ko", "mo", "ty", "wa"] },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    TooFew,
    TooMany,
}

#[derive(Debug, Clone)]
pub struct SyllableGame {
    words: Vec<Word>,
    current: usize,
    taps: usize,
    correct: u32,
}

impl SyllableGame {
    pub fn new<R: Rng>(rounds: usize, rng: &mut R) -> Self {
        let rounds = rounds.clamp(1, WORDS.len());
        let words = WORDS.choose_multiple(rng, rounds).copied().collect();
        Self {
            words,
            current: 0,
            taps: 0,
            correct: 0,
        }
    }

    pub fn word(&self) -> Option<&Word> {
        self.words.get(self.current)
    }

    /// Syllables revealed so far for the current word.
    pub fn highlighted(&self) -> &[&'static str] {
        match self.word() {
            Some(word) => &word.syllables[..self.taps.min(word.syllables.len())],
            None => &[],
        }
    }

    pub fn tap(&mut self) -> usize {
        if self.word().is_some() {
            self.taps += 1;
        }
        self.taps
    }

    /// Checks the tap count and moves on to the next word either way.
    pub fn submit(&mut self) -> Option<Verdict> {
        let expected = self.word()?.syllables.len();
        let verdict = match self.taps.cmp(&expected) {
            std::cmp::Ordering::Equal => {
                self.correct += 1;
                Verdict::Correct
            }
            std::cmp::Ordering::Less => Verdict::TooFew,
            std::cmp::Ordering::Greater => Verdict::TooMany,
        };
        self.current += 1;
        self.taps = 0;
        Some(verdict)
    }

    pub fn correct(&self) -> u32 {
        self.correct
    }

    pub fn is_complete(&self) -> bool {
        self.current >= self.words.len()
    }
}
