//! Completion-style entry points over a chat model.
//!
//! Every call builds one user message from the prompt and images, hands it to
//! the wrapped [`ChatModel`] and converts the reply into completion shape.
//! Nothing is kept between calls.

use tracing::{Span, debug, field};

use crate::core::{
    ChatMessage, ChatModel, ChatOptions, CompletionResponse, CompletionResponseGen,
    CompletionResponseStream, ContentBlock, LlmError, TextBlock,
    convert::{
        astream_chat_response_to_completion_response, chat_response_to_completion_response,
        stream_chat_response_to_completion_response,
    },
};

use super::inputs::ImageInputs;

/// Builds the user turn for a prompt and its images.
///
/// Without images the message is plain text with no explicit blocks.
/// Otherwise it holds a text block with the prompt followed by one image
/// block per input, in input order.
pub fn build_user_message(prompt: &str, image_inputs: ImageInputs) -> ChatMessage {
    let mut message = ChatMessage::user(prompt);
    if image_inputs.is_empty() {
        debug!("No images supplied, sending text-only message");
        return message;
    }

    debug!(
        kind = image_inputs.kind(),
        count = image_inputs.len(),
        "Attaching images to user message"
    );

    message.blocks.reserve(image_inputs.len() + 1);
    message.blocks.push(TextBlock::new(prompt).into());
    message
        .blocks
        .extend(image_inputs.into_blocks().into_iter().map(ContentBlock::Image));

    message
}

/// Prompt + images completion client backed by a chat model.
pub struct MultiModalCompletion<M: ChatModel> {
    model: M,
}

impl<M: ChatModel> MultiModalCompletion<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn class_name() -> &'static str {
        "multi_modal_completion"
    }

    pub fn chat_model(&self) -> &M {
        &self.model
    }

    pub fn into_inner(self) -> M {
        self.model
    }

    /// Blocks until the chat model answers.
    #[tracing::instrument(
        name = "complete",
        skip_all,
        fields(prompt_len = prompt.len(), images = field::Empty),
        err
    )]
    pub fn complete(
        &self,
        prompt: &str,
        image_inputs: impl Into<ImageInputs>,
        options: &ChatOptions,
    ) -> Result<CompletionResponse, LlmError> {
        let messages = [self.user_message(prompt, image_inputs.into())];
        let response = self.model.chat(&messages, options)?;

        Ok(chat_response_to_completion_response(response))
    }

    /// Returns an iterator that pulls one chat increment per item.
    #[tracing::instrument(
        name = "stream_complete",
        skip_all,
        fields(prompt_len = prompt.len(), images = field::Empty),
        err
    )]
    pub fn stream_complete(
        &self,
        prompt: &str,
        image_inputs: impl Into<ImageInputs>,
        options: &ChatOptions,
    ) -> Result<CompletionResponseGen, LlmError> {
        let messages = [self.user_message(prompt, image_inputs.into())];
        let stream = self.model.stream_chat(&messages, options)?;

        Ok(stream_chat_response_to_completion_response(stream))
    }

    #[tracing::instrument(
        name = "acomplete",
        skip_all,
        fields(prompt_len = prompt.len(), images = field::Empty),
        err
    )]
    pub async fn acomplete(
        &self,
        prompt: &str,
        image_inputs: impl Into<ImageInputs>,
        options: &ChatOptions,
    ) -> Result<CompletionResponse, LlmError> {
        let messages = [self.user_message(prompt, image_inputs.into())];
        let response = self.model.achat(&messages, options).await?;

        Ok(chat_response_to_completion_response(response))
    }

    /// Dropping the returned stream stops polling the chat stream.
    #[tracing::instrument(
        name = "astream_complete",
        skip_all,
        fields(prompt_len = prompt.len(), images = field::Empty),
        err
    )]
    pub async fn astream_complete(
        &self,
        prompt: &str,
        image_inputs: impl Into<ImageInputs>,
        options: &ChatOptions,
    ) -> Result<CompletionResponseStream, LlmError> {
        let messages = [self.user_message(prompt, image_inputs.into())];
        let stream = self.model.astream_chat(&messages, options).await?;

        Ok(astream_chat_response_to_completion_response(stream))
    }

    fn user_message(&self, prompt: &str, image_inputs: ImageInputs) -> ChatMessage {
        Span::current().record("images", image_inputs.len());
        build_user_message(prompt, image_inputs)
    }
}

impl<M: ChatModel + std::fmt::Debug> std::fmt::Debug for MultiModalCompletion<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MultiModalCompletion")
            .field("model", &self.model)
            .finish()
    }
}
