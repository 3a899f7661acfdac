//! Event recording flow: build the event, mirror it to the collaborators,
//! append it to the local log.

use std::path::Path;

use anyhow::Result;

use crate::event::{Event, KnowledgeDoc};
use crate::hub::{KnowledgeBase, MemoryHub};
use crate::logging::{self, obj, v_str, Domain, Level};
use crate::state::Config;
use crate::storage::MemoryLog;

pub struct EventRecorder {
    hub: Box<dyn MemoryHub>,
    kb: Box<dyn KnowledgeBase>,
    log: MemoryLog,
    agent_name: String,
}

impl EventRecorder {
    pub fn new(cfg: &Config, hub: Box<dyn MemoryHub>, kb: Box<dyn KnowledgeBase>) -> Result<Self> {
        let log = MemoryLog::load(Path::new(&cfg.memory_json_path))?;
        Ok(Self { hub, kb, log, agent_name: cfg.agent_name.clone() })
    }

    /// Record one wallet action.
    ///
    /// Collaborator failures are logged and swallowed: the hub and knowledge
    /// base are best-effort mirrors. A local log write failure propagates.
    pub async fn record(&mut self, wallet: &str, action: &str, strategy: &str, amount: &str) -> Result<()> {
        let event = Event::record(wallet, action, strategy, amount);

        if let Err(err) = self.hub.store_event(wallet, &event).await {
            logging::log(
                Level::Warn,
                Domain::Hub,
                "store_failed",
                obj(&[("wallet", v_str(wallet)), ("error", v_str(&err.to_string()))]),
            );
        }

        let doc = KnowledgeDoc::for_action(wallet, action, strategy, amount, &self.agent_name);
        if let Err(err) = self.kb.add_document(&doc).await {
            logging::log(
                Level::Warn,
                Domain::Knowledge,
                "add_document_failed",
                obj(&[("wallet", v_str(wallet)), ("error", v_str(&err.to_string()))]),
            );
        }

        self.log.append(wallet, event)?;
        logging::log(
            Level::Info,
            Domain::Recorder,
            "event_recorded",
            obj(&[
                ("wallet", v_str(wallet)),
                ("action", v_str(action)),
                ("strategy", v_str(strategy)),
                ("amount", v_str(amount)),
            ]),
        );
        Ok(())
    }

    pub fn local_log(&self) -> &MemoryLog {
        &self.log
    }
}
