pub mod http;

use async_trait::async_trait;

use crate::error::CollaboratorError;
use crate::event::{Event, KnowledgeDoc};

/// Durable memory store, addressed by wallet. Transport is the
/// implementation's concern.
#[async_trait]
pub trait MemoryHub {
    async fn store_event(&self, wallet: &str, event: &Event) -> Result<(), CollaboratorError>;
}

/// Knowledge base accepting free-text documents with metadata.
#[async_trait]
pub trait KnowledgeBase {
    async fn add_document(&self, doc: &KnowledgeDoc) -> Result<(), CollaboratorError>;
}

// Stub implementation to make integration explicit.
pub struct NullHub;

#[async_trait]
impl MemoryHub for NullHub {
    async fn store_event(&self, _wallet: &str, _event: &Event) -> Result<(), CollaboratorError> {
        Ok(())
    }
}

#[async_trait]
impl KnowledgeBase for NullHub {
    async fn add_document(&self, _doc: &KnowledgeDoc) -> Result<(), CollaboratorError> {
        Ok(())
    }
}
