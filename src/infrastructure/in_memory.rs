//! In-memory render target.
//!
//! Records the last fragment per slot plus the full write log. Suitable for
//! tests and for hosts that collect fragments before emitting them.

use crate::domain::ports::RenderTarget;
use crate::domain::slots::DisplaySlot;
use anyhow::Result;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct RecorderState {
    slots: BTreeMap<DisplaySlot, String>,
    log: Vec<(DisplaySlot, String)>,
}

#[derive(Clone, Default)]
pub struct InMemoryRenderTarget {
    state: Arc<RwLock<RecorderState>>,
}

impl InMemoryRenderTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last fragment rendered into `slot`
    pub fn content(&self, slot: DisplaySlot) -> Option<String> {
        self.read(|state| state.slots.get(&slot).cloned())
    }

    /// Every write in order
    pub fn writes(&self) -> Vec<(DisplaySlot, String)> {
        self.read(|state| state.log.clone())
    }

    pub fn write_count(&self, slot: DisplaySlot) -> usize {
        self.read(|state| state.log.iter().filter(|(s, _)| *s == slot).count())
    }

    pub fn snapshot(&self) -> BTreeMap<DisplaySlot, String> {
        self.read(|state| state.slots.clone())
    }

    fn read<T>(&self, f: impl FnOnce(&RecorderState) -> T) -> T {
        let guard = self
            .state
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&guard)
    }
}

impl RenderTarget for InMemoryRenderTarget {
    fn render(&self, slot: DisplaySlot, fragment: &str) -> Result<()> {
        let mut state = self
            .state
            .write()
            .map_err(|e| anyhow::anyhow!("render state lock poisoned: {}", e))?;
        state.slots.insert(slot, fragment.to_string());
        state.log.push((slot, fragment.to_string()));
        Ok(())
    }
}
