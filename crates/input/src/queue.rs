use std::collections::VecDeque;

use crate::action::KeyEvent;
use crate::bindings::KeyBindings;
use crate::state::InputState;

/// FIFO of key events waiting to be applied.
///
/// Host callbacks push here whenever they fire; the owning loop drains the
/// queue into [`InputState`] once at the start of each tick, so state never
/// changes mid-update.
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pending: VecDeque<KeyEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(16),
        }
    }

    pub fn push(&mut self, event: KeyEvent) {
        self.pending.push_back(event);
    }

    /// Resolve a host key name and queue it. Keys with no binding are
    /// dropped; returns whether anything was queued.
    pub fn push_host(&mut self, bindings: &KeyBindings, host_key: &str, pressed: bool) -> bool {
        match bindings.resolve(host_key) {
            Some(key) => {
                self.push(if pressed {
                    KeyEvent::Pressed(key)
                } else {
                    KeyEvent::Released(key)
                });
                true
            }
            None => {
                tracing::trace!(host_key, "unbound key ignored");
                false
            }
        }
    }

    /// Apply every pending event in arrival order. Returns how many were applied.
    pub fn drain_into(&mut self, state: &mut InputState) -> usize {
        let n = self.pending.len();
        for event in self.pending.drain(..) {
            state.apply(event);
        }
        n
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
