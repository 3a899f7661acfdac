use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use sha2::{Digest, Sha256};

use super::{KnowledgeBase, MemoryHub};
use crate::error::CollaboratorError;
use crate::event::{Event, KnowledgeDoc};
use crate::state::Config;

// No request timeout and no retries: a hung collaborator hangs the process.

pub struct HttpMemoryHub {
    client: Client,
    base: String,
    account: String,
    agent: String,
}

impl HttpMemoryHub {
    pub fn new(cfg: &Config) -> Self {
        Self {
            client: Client::new(),
            base: cfg.hub_base.clone(),
            account: cfg.membase_account.clone(),
            agent: cfg.agent_name.clone(),
        }
    }
}

#[async_trait]
impl MemoryHub for HttpMemoryHub {
    async fn store_event(&self, wallet: &str, event: &Event) -> Result<(), CollaboratorError> {
        let url = format!("{}/api/v1/memory/{}/{}", self.base, self.account, wallet);
        let payload = json!({
            "name": self.agent,
            "content": event.content,
            "role": event.role,
            "metadata": event.metadata,
            "created_at": event.created_at,
        });

        let resp = self.client.post(&url).json(&payload).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CollaboratorError::Rejected { status: status.as_u16(), body });
        }
        Ok(())
    }
}

pub struct HttpKnowledgeBase {
    client: Client,
    base: String,
    account: String,
}

impl HttpKnowledgeBase {
    pub fn new(cfg: &Config) -> Self {
        Self {
            client: Client::new(),
            base: cfg.kb_base.clone(),
            account: cfg.membase_account.clone(),
        }
    }
}

/// Deterministic document id so re-submitting the same action for the same
/// wallet overwrites instead of duplicating.
pub fn doc_id(doc: &KnowledgeDoc) -> String {
    let mut hasher = Sha256::new();
    hasher.update(doc.metadata.wallet.as_bytes());
    hasher.update(b"|");
    hasher.update(doc.content.as_bytes());
    hex::encode(hasher.finalize())
}

#[async_trait]
impl KnowledgeBase for HttpKnowledgeBase {
    async fn add_document(&self, doc: &KnowledgeDoc) -> Result<(), CollaboratorError> {
        let url = format!("{}/api/v1/knowledge/documents", self.base);
        let payload = json!({
            "account": self.account,
            "doc_id": doc_id(doc),
            "content": doc.content,
            "metadata": doc.metadata,
        });

        let resp = self.client.post(&url).json(&payload).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(CollaboratorError::Rejected { status: status.as_u16(), body });
        }
        Ok(())
    }
}
