//! Rhythm repeat: listen to a growing sequence of tones and tap it back.
//!
//! Every round appends one random pad. The player must reproduce the whole
//! sequence from the start; a single wrong pad ends the game.

use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pad {
    Drum,
    Bell,
    Whistle,
    Clap,
}

impl Pad {
    pub const ALL: [Pad; 4] = [Pad::Drum, Pad::Bell, Pad::Whistle, Pad::Clap];

    /// Sine tone played when the pad lights up, in Hz.
    pub fn frequency(self) -> f32 {
        match self {
            Pad::Drum => 261.63,
            Pad::Bell => 329.63,
            Pad::Whistle => 392.0,
            Pad::Clap => 523.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TapOutcome {
    Continue,
    RoundComplete,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Repeating,
    Finished,
}

#[derive(Debug, Clone)]
pub struct RhythmGame {
    sequence: Vec<Pad>,
    position: usize,
    target_length: usize,
    phase: Phase,
}

impl RhythmGame {
    pub fn new<R: Rng>(target_length: usize, rng: &mut R) -> Self {
        let mut game = Self {
            sequence: Vec::with_capacity(target_length),
            position: 0,
            target_length: target_length.max(1),
            phase: Phase::Repeating,
        };
        game.extend(rng);
        game
    }

    /// The pads to play back to the child this round.
    pub fn sequence(&self) -> &[Pad] {
        &self.sequence
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Rounds fully repeated so far.
    pub fn rounds_cleared(&self) -> usize {
        if self.is_finished() && self.position == self.sequence.len() {
            self.sequence.len()
        } else {
            self.sequence.len() - 1
        }
    }

    pub fn tap<R: Rng>(&mut self, pad: Pad, rng: &mut R) -> TapOutcome {
        if self.is_finished() {
            return TapOutcome::Failed;
        }
        if self.sequence[self.position] != pad {
            self.phase = Phase::Finished;
            return TapOutcome::Failed;
        }

        self.position += 1;
        if self.position < self.sequence.len() {
            return TapOutcome::Continue;
        }
        if self.sequence.len() >= self.target_length {
            self.phase = Phase::Finished;
            return TapOutcome::Completed;
        }

        self.position = 0;
        self.extend(rng);
        TapOutcome::RoundComplete
    }

    fn extend<R: Rng>(&mut self, rng: &mut R) {
        let pad = Pad::ALL[rng.gen_range(0..Pad::ALL.len())];
        self.sequence.push(pad);
    }
}
