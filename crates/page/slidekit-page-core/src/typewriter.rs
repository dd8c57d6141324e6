//! Looping typewriter as an explicit state machine.
//!
//! One phrase is typed a character at a time, held, deleted, and after a short
//! rest the next phrase starts. The host calls [`Typewriter::update`] with
//! elapsed time and renders the returned frame.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::config::TypewriterConfig;
use crate::error::{PageError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypewriterState {
    /// Not triggered yet.
    Idle,
    Typing,
    Holding,
    Deleting,
    Resting,
}

/// What the text element should show.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypewriterFrame {
    pub text: String,
    /// Cursor `blinking` class.
    pub blinking: bool,
    pub phrase_index: usize,
}

#[derive(Clone, Debug)]
pub struct Typewriter {
    phrases: Vec<String>,
    cfg: TypewriterConfig,
    state: TypewriterState,
    /// Byte offset of the next character to type in the current phrase.
    typed: usize,
    /// Time until the next step of the current state.
    wait_ms: u32,
    /// Elapsed time not yet spent on steps.
    carry_ms: u32,
    frame: TypewriterFrame,
}

impl Typewriter {
    pub fn new(phrases: Vec<String>, cfg: TypewriterConfig) -> Result<Self> {
        if phrases.is_empty() {
            return Err(PageError::EmptyPhrases);
        }
        if cfg.type_ms == 0 {
            return Err(PageError::InvalidTiming("type_ms"));
        }
        if cfg.delete_ms == 0 {
            return Err(PageError::InvalidTiming("delete_ms"));
        }
        Ok(Self {
            phrases,
            cfg,
            state: TypewriterState::Idle,
            typed: 0,
            wait_ms: 0,
            carry_ms: 0,
            frame: TypewriterFrame::default(),
        })
    }

    pub fn state(&self) -> TypewriterState {
        self.state
    }

    pub fn frame(&self) -> &TypewriterFrame {
        &self.frame
    }

    /// Start the loop. Only the first call has an effect.
    pub fn start(&mut self) -> bool {
        if self.state != TypewriterState::Idle {
            return false;
        }
        debug!("typewriter: start");
        self.begin_typing();
        true
    }

    /// Visibility notification for the host section; starts the loop the
    /// first time the visible fraction reaches the trigger threshold.
    pub fn on_visibility(&mut self, ratio: f32) -> bool {
        ratio > 0.0 && ratio >= self.cfg.trigger_threshold && self.start()
    }

    /// Advance by `dt_ms`, running every step that falls due.
    pub fn update(&mut self, dt_ms: u32) -> &TypewriterFrame {
        if self.state == TypewriterState::Idle {
            return &self.frame;
        }
        self.carry_ms = self.carry_ms.saturating_add(dt_ms);
        while self.carry_ms >= self.wait_ms {
            self.carry_ms -= self.wait_ms;
            self.step();
        }
        &self.frame
    }

    fn begin_typing(&mut self) {
        self.state = TypewriterState::Typing;
        self.typed = 0;
        self.frame.blinking = false;
        self.wait_ms = self.cfg.type_ms;
    }

    fn step(&mut self) {
        match self.state {
            TypewriterState::Idle => {}
            TypewriterState::Typing => {
                let phrase = &self.phrases[self.frame.phrase_index];
                match phrase[self.typed..].chars().next() {
                    Some(ch) => {
                        self.frame.text.push(ch);
                        self.typed += ch.len_utf8();
                    }
                    None => {
                        self.state = TypewriterState::Holding;
                        self.frame.blinking = true;
                        self.wait_ms = self.cfg.hold_ms;
                    }
                }
            }
            TypewriterState::Holding => {
                self.state = TypewriterState::Deleting;
                self.frame.blinking = false;
                self.wait_ms = self.cfg.delete_ms;
            }
            TypewriterState::Deleting => {
                if self.frame.text.pop().is_none() {
                    self.state = TypewriterState::Resting;
                    self.frame.blinking = true;
                    self.wait_ms = self.cfg.rest_ms;
                }
            }
            TypewriterState::Resting => {
                self.frame.phrase_index = (self.frame.phrase_index + 1) % self.phrases.len();
                debug!("typewriter: phrase {}", self.frame.phrase_index);
                self.begin_typing();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_zero_timing() {
        assert!(matches!(
            Typewriter::new(vec![], TypewriterConfig::default()),
            Err(PageError::EmptyPhrases)
        ));
        let cfg = TypewriterConfig {
            delete_ms: 0,
            ..TypewriterConfig::default()
        };
        assert!(matches!(
            Typewriter::new(vec!["a".into()], cfg),
            Err(PageError::InvalidTiming("delete_ms"))
        ));
    }

    #[test]
    fn idle_until_started() {
        let mut tw = Typewriter::new(vec!["hi".into()], TypewriterConfig::default()).unwrap();
        assert_eq!(tw.update(10_000).text, "");
        assert!(!tw.on_visibility(0.1));
        assert!(tw.on_visibility(0.25));
        assert!(!tw.start());
    }

    #[test]
    fn types_by_character_not_byte() {
        let mut tw = Typewriter::new(vec!["héé".into()], TypewriterConfig::default()).unwrap();
        tw.start();
        assert_eq!(tw.update(200).text, "hé");
        assert_eq!(tw.update(100).text, "héé");
        tw.update(100);
        assert_eq!(tw.state(), TypewriterState::Holding);
    }
}
