//! Chat and action-log records attached to a case.
//!
//! Both logs are append-only lists; nothing in the status engine depends on
//! them except the "new log messages" indicator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who performed an action or sent a message.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActorType {
    Agent,
    Workshop,
    System,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    CaseCreated,
    StatusChanged,
    FileUploaded,
    InvoiceReviewed,
    PartsAdded,
    CalibrationUpdated,
    InsuranceUpdated,
    ImageUploaded,
    StageChanged,
    NoteAdded,
    SmsSent,
    Other,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionLogEntry {
    pub id: String,
    pub action_type: ActionType,
    pub actor: String,
    pub actor_type: ActorType,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatAttachment {
    pub id: String,
    pub name: String,
    pub url: String,
    #[serde(rename = "type")]
    pub content_type: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub sender: String,
    pub sender_type: ActorType,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<ChatAttachment>,
}
