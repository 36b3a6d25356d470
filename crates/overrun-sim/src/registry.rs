//! Registry of live (spawned, not yet dying) enemies.
//!
//! The wave director watches this to detect wave clear, and the combat
//! systems iterate it instead of scanning pool slots. Handles are added on
//! spawn and removed the moment an enemy enters Dying, so a corpse waiting
//! out its release delay no longer counts toward the wave.

use tracing::debug;

use overrun_core::enums::EnemyKind;
use overrun_pool::Handle;

pub type EnemyHandle = Handle<EnemyKind>;

#[derive(Default)]
pub struct EnemyRegistry {
    handles: Vec<EnemyHandle>,
}

impl EnemyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a freshly spawned enemy. Re-registering is a logged no-op.
    pub fn register(&mut self, handle: EnemyHandle) {
        if self.handles.contains(&handle) {
            debug!(?handle, "enemy already registered, ignoring");
            return;
        }
        self.handles.push(handle);
    }

    /// Stop tracking an enemy. Unregistering an untracked handle is a no-op,
    /// so the death path stays idempotent.
    pub fn unregister(&mut self, handle: EnemyHandle) {
        self.handles.retain(|&h| h != handle);
    }

    pub fn contains(&self, handle: EnemyHandle) -> bool {
        self.handles.contains(&handle)
    }

    /// Wave-clear condition.
    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn clear(&mut self) {
        self.handles.clear();
    }

    /// Live handles in spawn order.
    pub fn handles(&self) -> &[EnemyHandle] {
        &self.handles
    }
}
