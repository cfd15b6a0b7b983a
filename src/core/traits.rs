use std::sync::Arc;

use async_trait::async_trait;

use super::{
    error::LlmError,
    options::ChatOptions,
    types::{ChatMessage, ChatResponse, ChatResponseGen, ChatResponseStream},
};

/// A chat-capable model client.
///
/// Implementations own transport, authentication, retries and timeouts.
/// Callers only see the responses and errors they report.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Single-turn chat, blocking the calling thread.
    fn chat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponse, LlmError>;

    /// Streaming chat, driven by the caller.
    fn stream_chat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponseGen, LlmError>;

    async fn achat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponse, LlmError>;

    async fn astream_chat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponseStream, LlmError>;
}

#[async_trait]
impl<M> ChatModel for Arc<M>
where
    M: ChatModel + ?Sized,
{
    fn chat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponse, LlmError> {
        (**self).chat(messages, options)
    }

    fn stream_chat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponseGen, LlmError> {
        (**self).stream_chat(messages, options)
    }

    async fn achat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponse, LlmError> {
        (**self).achat(messages, options).await
    }

    async fn astream_chat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponseStream, LlmError> {
        (**self).astream_chat(messages, options).await
    }
}
