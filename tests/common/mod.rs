#![allow(dead_code)]

use std::sync::{
    Arc, Mutex,
    atomic::{AtomicUsize, Ordering},
};

use async_trait::async_trait;
use futures::stream;
use rsai_multimodal::{
    ChatMessage, ChatModel, ChatOptions, ChatResponse, ChatResponseGen, ChatResponseStream,
    FinishReason, LanguageModelUsage, LlmError,
};
use serde_json::json;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallKind {
    Chat,
    StreamChat,
    AChat,
    AStreamChat,
}

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub kind: CallKind,
    pub messages: Vec<ChatMessage>,
    pub options: ChatOptions,
}

/// Chat model double that replies with canned text and records every call.
pub struct MockChatModel {
    reply: String,
    open_error: Option<fn() -> LlmError>,
    stream_error: Option<(usize, fn() -> LlmError)>,
    custom_stream: Mutex<Option<ChatResponseStream>>,
    calls: Mutex<Vec<RecordedCall>>,
    pulled: Arc<AtomicUsize>,
}

impl MockChatModel {
    pub fn replying(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            open_error: None,
            stream_error: None,
            custom_stream: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
            pulled: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Every chat operation fails before producing anything.
    pub fn failing(error: fn() -> LlmError) -> Self {
        Self {
            open_error: Some(error),
            ..Self::replying("")
        }
    }

    /// Streams fail with `error` in place of increment number `index`.
    pub fn failing_stream_at(mut self, index: usize, error: fn() -> LlmError) -> Self {
        self.stream_error = Some((index, error));
        self
    }

    /// The next async stream call returns `stream` instead of canned increments.
    pub fn with_stream(self, stream: ChatResponseStream) -> Self {
        *self.custom_stream.lock().unwrap() = Some(stream);
        self
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of increments pulled from sync streams so far.
    pub fn pulled(&self) -> usize {
        self.pulled.load(Ordering::SeqCst)
    }

    pub fn reply(&self) -> ChatResponse {
        ChatResponse {
            message: ChatMessage::assistant(self.reply.clone()),
            delta: None,
            raw: Some(json!({ "id": "chatcmpl-mock", "model": "mock-vision" })),
            usage: Some(usage()),
            finish_reason: Some(FinishReason::Stop),
        }
    }

    /// One increment per word, each carrying the text so far.
    pub fn increments(&self) -> Vec<Result<ChatResponse, LlmError>> {
        let words: Vec<&str> = self.reply.split_inclusive(' ').collect();
        let last = words.len().saturating_sub(1);
        let mut so_far = String::new();

        words
            .iter()
            .enumerate()
            .map(|(index, word)| {
                if let Some((fail_at, error)) = self.stream_error {
                    if index == fail_at {
                        return Err(error());
                    }
                }
                so_far.push_str(word);
                let mut chunk =
                    ChatResponse::new(ChatMessage::assistant(so_far.clone())).with_delta(*word);
                if index == last {
                    chunk.finish_reason = Some(FinishReason::Stop);
                    chunk.usage = Some(usage());
                }
                Ok(chunk)
            })
            .collect()
    }

    fn record(
        &self,
        kind: CallKind,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<(), LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            kind,
            messages: messages.to_vec(),
            options: options.clone(),
        });
        match self.open_error {
            Some(error) => Err(error()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ChatModel for MockChatModel {
    fn chat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponse, LlmError> {
        self.record(CallKind::Chat, messages, options)?;
        Ok(self.reply())
    }

    fn stream_chat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponseGen, LlmError> {
        self.record(CallKind::StreamChat, messages, options)?;
        let pulled = Arc::clone(&self.pulled);
        Ok(Box::new(self.increments().into_iter().inspect(move |_| {
            pulled.fetch_add(1, Ordering::SeqCst);
        })))
    }

    async fn achat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponse, LlmError> {
        self.record(CallKind::AChat, messages, options)?;
        tokio::task::yield_now().await;
        Ok(self.reply())
    }

    async fn astream_chat(
        &self,
        messages: &[ChatMessage],
        options: &ChatOptions,
    ) -> Result<ChatResponseStream, LlmError> {
        self.record(CallKind::AStreamChat, messages, options)?;
        tokio::task::yield_now().await;
        if let Some(stream) = self.custom_stream.lock().unwrap().take() {
            return Ok(stream);
        }
        Ok(Box::pin(stream::iter(self.increments())))
    }
}

pub fn usage() -> LanguageModelUsage {
    LanguageModelUsage {
        prompt_tokens: 85,
        completion_tokens: 6,
        total_tokens: 91,
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
