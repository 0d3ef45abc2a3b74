//! Scripted key timeline for headless runs.
//!
//! Format: comma-separated `TICK:+KEY` (press) or `TICK:-KEY` (release)
//! entries, e.g. `0:+forward,10:-forward,12:+a`. `KEY` is either a logical
//! key (`left`, `right`, `forward`, `backward`) or a host key name resolved
//! through the session's bindings. Events fire just before the given tick.

use drift_input::{KeyEvent, MoveKey};
use drift_kernel::Session;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("entry {0:?}: expected TICK:+KEY or TICK:-KEY")]
    Malformed(String),
    #[error("entry {0:?}: bad tick number")]
    BadTick(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub tick: u64,
    pub pressed: bool,
    pub key: String,
}

/// Parsed timeline, sorted by tick. Entries on the same tick keep their order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    steps: Vec<ScriptStep>,
}

impl Script {
    pub fn parse(text: &str) -> Result<Self, ScriptError> {
        let mut steps = Vec::new();
        for entry in text.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            let (tick, action) = entry
                .split_once(':')
                .ok_or_else(|| ScriptError::Malformed(entry.to_string()))?;
            let tick = tick
                .trim()
                .parse::<u64>()
                .map_err(|_| ScriptError::BadTick(entry.to_string()))?;
            let action = action.trim();
            let (pressed, key) = if let Some(k) = action.strip_prefix('+') {
                (true, k)
            } else if let Some(k) = action.strip_prefix('-') {
                (false, k)
            } else {
                return Err(ScriptError::Malformed(entry.to_string()));
            };
            if key.is_empty() {
                return Err(ScriptError::Malformed(entry.to_string()));
            }
            steps.push(ScriptStep {
                tick,
                pressed,
                key: key.to_string(),
            });
        }
        steps.sort_by_key(|s| s.tick);
        Ok(Self { steps })
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Queue every step scheduled for `tick` into the session.
    pub fn feed(&self, tick: u64, session: &mut Session) -> usize {
        let mut fed = 0;
        for step in self.steps.iter().filter(|s| s.tick == tick) {
            match step.key.parse::<MoveKey>() {
                Ok(key) => session.push(if step.pressed {
                    KeyEvent::Pressed(key)
                } else {
                    KeyEvent::Released(key)
                }),
                Err(()) => {
                    if !session.push_host(&step.key, step.pressed) {
                        tracing::warn!(key = %step.key, tick, "script key has no binding");
                        continue;
                    }
                }
            }
            fed += 1;
        }
        fed
    }
}
