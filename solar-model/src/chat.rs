use serde::{Deserialize, Serialize};
use ts_rs::TS;
use utoipa::ToSchema;

/// Who wrote a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "./chat.ts")]
pub enum Sender {
    User,
    Ai,
}

impl Sender {
    /// Role name used by the text-generation service (`user` or `model`).
    pub fn service_role(&self) -> &'static str {
        match self {
            Sender::User => "user",
            Sender::Ai => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema, TS)]
#[ts(export, export_to = "./chat.ts")]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        ChatMessage {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        ChatMessage {
            sender: Sender::Ai,
            text: text.into(),
        }
    }
}
