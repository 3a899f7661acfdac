use serde::{Deserialize, Serialize};

use crate::logging::ts_now;

/// Role tag carried on every recorded event.
pub const EVENT_ROLE: &str = "assistant";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub wallet: String,
    pub strategy: String,
    pub amount: String,
    /// Lowercased form of the action, kept for table display downstream.
    pub last_action: String,
}

/// One recorded wallet action. Immutable once built: appended to the local
/// log and mirrored to the hub, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub content: String,
    pub role: String,
    pub metadata: EventMetadata,
    pub created_at: String,
}

impl Event {
    pub fn record(wallet: &str, action: &str, strategy: &str, amount: &str) -> Self {
        Self {
            content: format!("User performed {} of {} BNB with strategy {}", action, amount, strategy),
            role: EVENT_ROLE.to_string(),
            metadata: EventMetadata {
                wallet: wallet.to_string(),
                strategy: strategy.to_string(),
                amount: amount.to_string(),
                last_action: action.to_lowercase(),
            },
            created_at: ts_now(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocMetadata {
    pub wallet: String,
    pub action: String,
    pub source: String,
}

/// Free-text knowledge document derived from a recorded action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeDoc {
    pub content: String,
    pub metadata: DocMetadata,
}

impl KnowledgeDoc {
    pub fn for_action(wallet: &str, action: &str, strategy: &str, amount: &str, source: &str) -> Self {
        Self {
            content: format!("Executed {} strategy via {} of {} BNB", strategy, action, amount),
            metadata: DocMetadata {
                wallet: wallet.to_string(),
                action: action.to_string(),
                source: source.to_string(),
            },
        }
    }
}
