//! Partitioned entity pool for OVERRUN.
//!
//! One `Pool` owns every transient combat entity of a given shape (enemies,
//! projectiles), partitioned by a stable type key. Entities are never dropped
//! during play: `acquire` reuses an inactive slot or grows the partition by
//! exactly one, `release` resets the entity and re-enqueues it. The activity
//! flag lives in the partition, not in the entity, so nothing outside this
//! crate can corrupt the active/inactive bookkeeping.

use std::collections::{BTreeMap, VecDeque};
use std::fmt::Debug;

use thiserror::Error;
use tracing::{debug, warn};

/// Capability required of pooled entities: reset to a neutral state when
/// returning to the pool. Activation-time setup is the caller's job, since
/// it needs domain data (spawn position, prototype stats) the pool never sees.
pub trait Poolable {
    fn on_release(&mut self);
}

/// Pool misconfiguration. Callers treat these as logged no-ops; the tick
/// never aborts over them.
#[derive(Debug, Error)]
pub enum PoolError {
    #[error("no pool partition registered for {0}")]
    Unregistered(String),
}

/// Non-owning ticket into a pool partition. Cheap to copy; a stale handle
/// (entity released since) simply resolves to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Handle<K> {
    key: K,
    index: usize,
}

impl<K: Copy> Handle<K> {
    pub fn key(&self) -> K {
        self.key
    }

    pub fn index(&self) -> usize {
        self.index
    }
}

struct Partition<T> {
    slots: Vec<T>,
    active: Vec<bool>,
    free: VecDeque<usize>,
    factory: Box<dyn FnMut() -> T>,
}

impl<T: Poolable> Partition<T> {
    fn new(initial: usize, mut factory: Box<dyn FnMut() -> T>) -> Self {
        let mut slots = Vec::with_capacity(initial);
        let mut free = VecDeque::with_capacity(initial);
        for i in 0..initial {
            slots.push(factory());
            free.push_back(i);
        }
        Self {
            active: vec![false; initial],
            slots,
            free,
            factory,
        }
    }

    fn acquire(&mut self) -> usize {
        match self.free.pop_front() {
            Some(index) => {
                self.active[index] = true;
                index
            }
            None => {
                // Exhausted: grow by exactly one.
                let index = self.slots.len();
                self.slots.push((self.factory)());
                self.active.push(true);
                index
            }
        }
    }
}

/// Reusable-entity allocator keyed by entity-type identity.
///
/// Partitions are stored in key order so that iteration is deterministic
/// across engine instances with the same seed.
pub struct Pool<K, T> {
    partitions: BTreeMap<K, Partition<T>>,
}

impl<K, T> Default for Pool<K, T> {
    fn default() -> Self {
        Self {
            partitions: BTreeMap::new(),
        }
    }
}

impl<K, T> Pool<K, T>
where
    K: Copy + Ord + Debug,
    T: Poolable,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a partition with `initial` pre-allocated inactive entities.
    /// Idempotent: re-registering an existing key is a logged no-op.
    pub fn register(&mut self, key: K, initial: usize, factory: impl FnMut() -> T + 'static) {
        if self.partitions.contains_key(&key) {
            debug!(?key, "pool partition already registered, ignoring");
            return;
        }
        self.partitions
            .insert(key, Partition::new(initial, Box::new(factory)));
    }

    /// Move one entity from inactive to active, growing the partition by one
    /// if no inactive entity is available. Only fails for an unregistered key.
    pub fn acquire(&mut self, key: K) -> Result<Handle<K>, PoolError> {
        let partition = self
            .partitions
            .get_mut(&key)
            .ok_or_else(|| PoolError::Unregistered(format!("{key:?}")))?;
        let index = partition.acquire();
        Ok(Handle { key, index })
    }

    /// Return an entity to its partition: reset to neutral, flag inactive,
    /// re-enqueue. Double release and stale handles are logged no-ops.
    pub fn release(&mut self, handle: Handle<K>) {
        let Some(partition) = self.partitions.get_mut(&handle.key) else {
            warn!(key = ?handle.key, "release into unregistered partition ignored");
            return;
        };
        if handle.index >= partition.slots.len() {
            warn!(key = ?handle.key, index = handle.index, "release of unknown slot ignored");
            return;
        }
        if !partition.active[handle.index] {
            debug!(key = ?handle.key, index = handle.index, "double release ignored");
            return;
        }
        partition.slots[handle.index].on_release();
        partition.active[handle.index] = false;
        partition.free.push_back(handle.index);
    }

    /// Access an active entity. Inactive slots are not simulated and resolve
    /// to `None`, as do stale handles.
    pub fn get(&self, handle: Handle<K>) -> Option<&T> {
        let partition = self.partitions.get(&handle.key)?;
        if *partition.active.get(handle.index)? {
            partition.slots.get(handle.index)
        } else {
            None
        }
    }

    pub fn get_mut(&mut self, handle: Handle<K>) -> Option<&mut T> {
        let partition = self.partitions.get_mut(&handle.key)?;
        if *partition.active.get(handle.index)? {
            partition.slots.get_mut(handle.index)
        } else {
            None
        }
    }

    /// Visit every instance of a partition, active and inactive. Used by the
    /// upgrade propagator to overwrite per-instance stats; the visitor never
    /// sees the activity bookkeeping.
    pub fn for_each_of_type(
        &mut self,
        key: K,
        mut visitor: impl FnMut(&mut T),
    ) -> Result<(), PoolError> {
        let partition = self
            .partitions
            .get_mut(&key)
            .ok_or_else(|| PoolError::Unregistered(format!("{key:?}")))?;
        for slot in &mut partition.slots {
            visitor(slot);
        }
        Ok(())
    }

    /// Fill `buf` with every active handle across all partitions, in
    /// deterministic (key, slot) order. The buffer is reused tick to tick.
    pub fn collect_active_into(&self, buf: &mut Vec<Handle<K>>) {
        buf.clear();
        for (&key, partition) in &self.partitions {
            for (index, &active) in partition.active.iter().enumerate() {
                if active {
                    buf.push(Handle { key, index });
                }
            }
        }
    }

    pub fn is_active(&self, handle: Handle<K>) -> bool {
        self.partitions
            .get(&handle.key)
            .and_then(|p| p.active.get(handle.index).copied())
            .unwrap_or(false)
    }

    /// Total entities ever allocated for a key. Only grows, never shrinks.
    pub fn total_allocated(&self, key: K) -> usize {
        self.partitions.get(&key).map_or(0, |p| p.slots.len())
    }

    pub fn active_count(&self, key: K) -> usize {
        self.partitions
            .get(&key)
            .map_or(0, |p| p.active.iter().filter(|&&a| a).count())
    }

    pub fn inactive_count(&self, key: K) -> usize {
        self.partitions.get(&key).map_or(0, |p| p.free.len())
    }
}

#[cfg(test)]
mod tests;
