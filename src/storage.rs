use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::event::Event;

/// Wallet-keyed local mirror of recorded events, backed by one JSON file.
///
/// The whole structure is loaded once at startup and rewritten to disk after
/// every append. Last writer wins across processes: there is no lock around
/// the load-modify-persist cycle, and the single-writer assumption is part of
/// the contract.
pub struct MemoryLog {
    path: PathBuf,
    entries: BTreeMap<String, Vec<Event>>,
}

impl MemoryLog {
    pub fn load(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("cannot read memory log {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("malformed memory log {}", path.display()))?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path: path.to_path_buf(), entries })
    }

    /// Append one event under `wallet` (creating the key) and rewrite the file.
    pub fn append(&mut self, wallet: &str, event: Event) -> Result<()> {
        self.entries.entry(wallet.to_string()).or_default().push(event);
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let body = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, body)
            .with_context(|| format!("cannot write memory log {}", self.path.display()))?;
        Ok(())
    }

    pub fn events(&self, wallet: &str) -> &[Event] {
        self.entries.get(wallet).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn wallet_count(&self) -> usize {
        self.entries.len()
    }
}
