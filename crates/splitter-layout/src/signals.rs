use std::collections::HashMap;

use splitter_core::{ListenerId, SignalHub, SignalKind};

// ──────────────────────────────────────────────
// SignalRegistry
// ──────────────────────────────────────────────

/// In-process listener table. Hosts deliver a signal by asking which listeners
/// are registered for its kind and routing to those layouts, in registration
/// order.
#[derive(Debug, Default)]
pub struct SignalRegistry {
    listeners: HashMap<SignalKind, Vec<ListenerId>>,
}

impl SignalRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn listeners(&self, kind: SignalKind) -> &[ListenerId] {
        self.listeners.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_listening(&self, kind: SignalKind, listener: ListenerId) -> bool {
        self.listeners(kind).contains(&listener)
    }

    /// Total number of registrations across every signal kind.
    pub fn len(&self) -> usize {
        self.listeners.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl SignalHub for SignalRegistry {
    fn add_listener(&mut self, kind: SignalKind, listener: ListenerId) {
        self.listeners.entry(kind).or_default().push(listener);
    }

    fn remove_listener(&mut self, kind: SignalKind, listener: ListenerId) -> bool {
        let Some(list) = self.listeners.get_mut(&kind) else {
            return false;
        };
        let Some(index) = list.iter().position(|id| *id == listener) else {
            return false;
        };
        list.remove(index);
        if list.is_empty() {
            self.listeners.remove(&kind);
        }
        true
    }
}
