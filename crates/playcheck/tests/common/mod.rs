//! Scripted probe shared by the integration tests.
//!
//! `ScriptedProbe` simulates one media element on a virtual clock: sleeping
//! advances the clock instantly, so a 600 second timeout runs in microseconds.

#![allow(dead_code)]

use async_trait::async_trait;
use playcheck::{MediaCommand, Probe, ProbeError, ProbeResult};
use serde_json::{Value, json};
use std::sync::Mutex;
use std::time::Duration;

/// How the element reacts to play().
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayBehavior {
    Accept,
    Refuse,
}

#[derive(Debug, Default)]
struct State {
    clock: u64,
    played_at: Option<u64>,
    ended: bool,
    calls: Vec<&'static str>,
    sleeps: u64,
}

#[derive(Debug)]
pub struct ScriptedProbe {
    present: bool,
    play: PlayBehavior,
    ends_after: Option<u64>,
    vanishes_after: Option<u64>,
    current_time: Value,
    duration: Value,
    metadata_on_play: bool,
    fail_on: Option<&'static str>,
    state: Mutex<State>,
}

impl ScriptedProbe {
    /// An element that plays and never ends.
    pub fn new() -> Self {
        Self {
            present: true,
            play: PlayBehavior::Accept,
            ends_after: None,
            vanishes_after: None,
            current_time: json!(0.0),
            duration: json!(30.0),
            metadata_on_play: false,
            fail_on: None,
            state: Mutex::new(State::default()),
        }
    }

    /// No element matches.
    pub fn absent() -> Self {
        Self {
            present: false,
            ..Self::new()
        }
    }

    pub fn refusing_play(mut self) -> Self {
        self.play = PlayBehavior::Refuse;
        self
    }

    /// The element ends `secs` seconds after the first play() and stays ended.
    pub fn ending_after(mut self, secs: u64) -> Self {
        self.ends_after = Some(secs);
        self
    }

    /// The element already reports ended before any play().
    pub fn already_ended(self) -> Self {
        self.state.lock().unwrap().ended = true;
        self
    }

    /// The element is removed from the page `secs` seconds after play().
    pub fn vanishing_after(mut self, secs: u64) -> Self {
        self.vanishes_after = Some(secs);
        self
    }

    pub fn with_current_time(mut self, value: Value) -> Self {
        self.current_time = value;
        self
    }

    pub fn with_duration(mut self, value: Value) -> Self {
        self.duration = value;
        self
    }

    /// The duration reads as unknown until play() has been accepted.
    pub fn loading_metadata_on_play(mut self) -> Self {
        self.metadata_on_play = true;
        self
    }

    /// Every evaluation of the named command fails.
    pub fn failing_on(mut self, command: &'static str) -> Self {
        self.fail_on = Some(command);
        self
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn count(&self, command: &str) -> usize {
        self.calls().iter().filter(|c| **c == command).count()
    }

    pub fn sleeps(&self) -> u64 {
        self.state.lock().unwrap().sleeps
    }

    pub fn clock(&self) -> u64 {
        self.state.lock().unwrap().clock
    }

    fn gone(&self, state: &State) -> bool {
        match (self.vanishes_after, state.played_at) {
            (Some(after), Some(at)) => state.clock >= at + after,
            _ => false,
        }
    }
}

#[async_trait]
impl Probe for ScriptedProbe {
    async fn evaluate(&self, command: &MediaCommand<'_>) -> ProbeResult<Value> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(command.name());

        if self.fail_on == Some(command.name()) {
            return Err(ProbeError::Evaluation(format!(
                "Execution context was destroyed during {}",
                command.name()
            )));
        }

        let present = self.present && !self.gone(&state);
        let value = match command {
            MediaCommand::Exists { .. } => json!(present),
            MediaCommand::ReadDuration { .. } if present => {
                if self.metadata_on_play && state.played_at.is_none() {
                    Value::Null
                } else {
                    self.duration.clone()
                }
            }
            MediaCommand::ReadDuration { .. } => Value::Null,
            MediaCommand::Play { .. } => {
                let accepted = present && self.play == PlayBehavior::Accept;
                if accepted && state.played_at.is_none() {
                    state.played_at = Some(state.clock);
                }
                json!(accepted)
            }
            MediaCommand::EvaluateEnded { .. } if !present => json!(true),
            MediaCommand::EvaluateEnded { .. } => {
                if let (Some(after), Some(at)) = (self.ends_after, state.played_at) {
                    if state.clock >= at + after {
                        state.ended = true;
                    }
                }
                json!(state.ended)
            }
            MediaCommand::EvaluateCurrentTime { .. } if present => self.current_time.clone(),
            MediaCommand::EvaluateCurrentTime { .. } => Value::Null,
        };

        Ok(value)
    }

    async fn sleep(&self, duration: Duration) {
        let mut state = self.state.lock().unwrap();
        state.clock += duration.as_secs();
        state.sleeps += 1;
    }
}
