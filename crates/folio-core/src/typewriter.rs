//! Typewriter effect for the hero subtitle
//!
//! Types a phrase one character at a time, holds it, then erases back to
//! the prefix it shares with the next phrase and types the remainder.
//! Cycles forever. Time is supplied by the caller.

use std::time::Duration;

use crate::config::HeroConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypewriterPhase {
    Typing,
    Holding,
    Deleting,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    phrases: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    phase: TypewriterPhase,
    elapsed: Duration,
    type_interval: Duration,
    delete_interval: Duration,
    hold: Duration,
}

impl Typewriter {
    pub fn new(phrases: &[String], config: &HeroConfig) -> Self {
        let mut list: Vec<Vec<char>> = Vec::with_capacity(phrases.len());
        for phrase in phrases {
            let chars: Vec<char> = phrase.chars().collect();
            if list.last() != Some(&chars) {
                list.push(chars);
            }
        }
        // Wrapping from last to first must also change the text
        while list.len() > 1 && list.first() == list.last() {
            list.pop();
        }

        let min = Duration::from_millis(1);
        Self {
            phrases: list,
            index: 0,
            shown: 0,
            phase: TypewriterPhase::Typing,
            elapsed: Duration::ZERO,
            type_interval: Duration::from_millis(config.type_interval_ms).max(min),
            delete_interval: Duration::from_millis(config.delete_interval_ms).max(min),
            hold: Duration::from_millis(config.hold_ms),
        }
    }

    /// Currently visible text
    pub fn text(&self) -> String {
        self.phrases
            .get(self.index)
            .map(|p| p[..self.shown].iter().collect())
            .unwrap_or_default()
    }

    pub fn phase(&self) -> TypewriterPhase {
        self.phase
    }

    /// Index of the phrase being typed or erased
    pub fn phrase_index(&self) -> usize {
        self.index
    }

    /// Advance the animation clock
    pub fn advance(&mut self, dt: Duration) {
        if self.phrases.is_empty() {
            return;
        }
        self.elapsed += dt;

        loop {
            let current_len = self.phrases[self.index].len();
            match self.phase {
                TypewriterPhase::Typing => {
                    if self.shown >= current_len {
                        self.phase = TypewriterPhase::Holding;
                        continue;
                    }
                    if self.elapsed < self.type_interval {
                        break;
                    }
                    self.elapsed -= self.type_interval;
                    self.shown += 1;
                }
                TypewriterPhase::Holding => {
                    if self.phrases.len() == 1 || self.elapsed < self.hold {
                        break;
                    }
                    self.elapsed -= self.hold;
                    self.phase = TypewriterPhase::Deleting;
                }
                TypewriterPhase::Deleting => {
                    let next = (self.index + 1) % self.phrases.len();
                    let keep = common_prefix(&self.phrases[self.index], &self.phrases[next]);
                    if self.shown <= keep {
                        self.index = next;
                        self.shown = keep;
                        self.phase = TypewriterPhase::Typing;
                        continue;
                    }
                    if self.elapsed < self.delete_interval {
                        break;
                    }
                    self.elapsed -= self.delete_interval;
                    self.shown -= 1;
                }
            }
        }

        if self.phase == TypewriterPhase::Holding && self.phrases.len() == 1 {
            // Nothing will ever consume the clock
            self.elapsed = Duration::ZERO;
        }
    }
}

fn common_prefix(a: &[char], b: &[char]) -> usize {
    a.iter().zip(b).take_while(|(x, y)| x == y).count()
}
