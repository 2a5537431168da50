//! Model-provider seam and chat message types.
//!
//! The analysis pipeline treats every hosted model as an opaque
//! `text -> text` collaborator with unspecified latency and occasional
//! rate-limit failures. [`ChatModel`] is that seam; production code uses
//! the OpenAI-compatible client in [`openai`], while tests substitute a
//! scripted fake.

use async_trait::async_trait;
use serde::Serialize;

use crate::error::Result;

pub mod openai;

pub use openai::{OpenAiChatModel, OpenAiConfig};

/// One chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    /// Sampling temperature (0.0 for deterministic verification calls)
    pub temperature: f32,

    /// Ordered conversation messages
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Builds the common system-plus-user request shape.
    pub fn new(temperature: f32, system: impl Into<String>, user: MessageContent) -> Self {
        Self {
            temperature,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: MessageContent::Text(system.into()),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: user,
                },
            ],
        }
    }
}

/// One conversation message.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    /// `system`, `user`, or `assistant`
    pub role: String,

    /// Plain text or multi-part content
    pub content: MessageContent,
}

/// Message content: plain text or parts mixing text and inline images.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text content
    Text(String),

    /// Multi-part content for vision requests
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Builds a text-plus-image part list for a vision request.
    pub fn with_image(text: impl Into<String>, image_data_url: impl Into<String>) -> Self {
        Self::Parts(vec![
            ContentPart::Text { text: text.into() },
            ContentPart::ImageUrl {
                image_url: ImageUrl {
                    url: image_data_url.into(),
                },
            },
        ])
    }
}

/// One part of a multi-part message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Text segment
    Text { text: String },

    /// Inline or remote image reference
    ImageUrl { image_url: ImageUrl },
}

/// Image reference wrapper used by the chat completion API.
#[derive(Debug, Clone, Serialize)]
pub struct ImageUrl {
    /// Remote URL or base64 `data:` URL
    pub url: String,
}

/// Opaque chat completion collaborator.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Runs one completion and returns the model's text output.
    async fn complete(&self, request: ChatRequest) -> Result<String>;
}
