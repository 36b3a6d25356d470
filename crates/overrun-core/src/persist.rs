//! Persistence seam: plain integer key-value storage.
//!
//! The simulation writes the current wave number as it increases and the
//! high score at game over; everything else about storage (files, platform
//! prefs) is the embedder's concern.

use std::collections::HashMap;

/// Narrow key-value interface consumed by the engine.
pub trait ScoreStore {
    fn get_int(&self, key: &str, default: i32) -> i32;
    fn set_int(&mut self, key: &str, value: i32);
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: HashMap<String, i32>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ScoreStore for MemoryStore {
    fn get_int(&self, key: &str, default: i32) -> i32 {
        self.values.get(key).copied().unwrap_or(default)
    }

    fn set_int(&mut self, key: &str, value: i32) {
        self.values.insert(key.to_string(), value);
    }
}
