use crate::domain::ports::RenderTarget;
use crate::domain::slots::DisplaySlot;
use anyhow::{Context, Result};
use std::io::{self, Stdout, Write};
use std::sync::Mutex;

/// Prints each fragment as `[slot-id] fragment` as soon as it is rendered
pub struct ConsoleRenderTarget<W: Write + Send = Stdout> {
    out: Mutex<W>,
}

impl ConsoleRenderTarget<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleRenderTarget<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> RenderTarget for ConsoleRenderTarget<W> {
    fn render(&self, slot: DisplaySlot, fragment: &str) -> Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|e| anyhow::anyhow!("console lock poisoned: {}", e))?;
        writeln!(out, "[{}] {}", slot.id(), fragment)
            .and_then(|_| out.flush())
            .with_context(|| format!("Failed to print {}", slot))
    }
}
