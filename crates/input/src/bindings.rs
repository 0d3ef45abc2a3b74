use std::collections::BTreeMap;

use crate::action::MoveKey;

/// Errors from building key bindings.
#[derive(Debug, thiserror::Error)]
pub enum BindingError {
    #[error("unknown action {0:?} (expected left, right, forward or backward)")]
    UnknownAction(String),
    #[error("empty host key name")]
    EmptyKey,
}

/// Host key name to logical key. Lookups are case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyBindings {
    map: BTreeMap<String, MoveKey>,
}

impl Default for KeyBindings {
    /// WASD plus arrow keys.
    fn default() -> Self {
        let mut b = Self::empty();
        for (host, key) in [
            ("a", MoveKey::Left),
            ("d", MoveKey::Right),
            ("w", MoveKey::Forward),
            ("s", MoveKey::Backward),
            ("arrowleft", MoveKey::Left),
            ("arrowright", MoveKey::Right),
            ("arrowup", MoveKey::Forward),
            ("arrowdown", MoveKey::Backward),
        ] {
            b.bind(host, key);
        }
        b
    }
}

impl KeyBindings {
    pub fn empty() -> Self {
        Self {
            map: BTreeMap::new(),
        }
    }

    /// Defaults with `overrides` (host key -> action name) applied on top.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Result<Self, BindingError> {
        let mut b = Self::default();
        for (host, action) in overrides {
            if host.trim().is_empty() {
                return Err(BindingError::EmptyKey);
            }
            let key = action
                .parse::<MoveKey>()
                .map_err(|_| BindingError::UnknownAction(action.clone()))?;
            b.bind(host, key);
        }
        Ok(b)
    }

    pub fn bind(&mut self, host_key: &str, key: MoveKey) {
        self.map.insert(host_key.to_ascii_lowercase(), key);
    }

    pub fn resolve(&self, host_key: &str) -> Option<MoveKey> {
        // Avoid allocating for the common already-lowercase case.
        if host_key.bytes().any(|b| b.is_ascii_uppercase()) {
            self.map.get(&host_key.to_ascii_lowercase()).copied()
        } else {
            self.map.get(host_key).copied()
        }
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, MoveKey)> {
        self.map.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
