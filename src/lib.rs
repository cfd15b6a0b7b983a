//! # rsai-multimodal
//!
//! Completion-style prompting for chat models that accept images.
//!
//! A [`MultiModalCompletion`] wraps any [`ChatModel`]. Each call turns a prompt
//! and its images into one user message, sends it through the model and maps
//! the chat reply back into a [`CompletionResponse`]. Transport, retries and
//! authentication stay with the chat model, and its errors reach the caller
//! untouched.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rsai_multimodal::{ChatModel, ChatOptions, ImageNode, MultiModalCompletion};
//!
//! # async fn run(model: impl ChatModel) -> Result<(), rsai_multimodal::LlmError> {
//! let completion = MultiModalCompletion::new(model);
//!
//! let nodes = vec![ImageNode::new("apple").with_url("https://example.com/apple.png")];
//! let response = completion
//!     .acomplete("Describe this image", nodes, &ChatOptions::new().max_tokens(300))
//!     .await?;
//!
//! println!("{}", response.text);
//! # Ok(())
//! # }
//! ```

pub mod completions;
pub mod core;

pub use completions::{ImageInput, ImageInputs, MultiModalCompletion, build_user_message};
pub use crate::core::{
    ChatMessage, ChatModel, ChatOptions, ChatResponse, ChatResponseGen, ChatResponseStream,
    ChatRole, CompletionResponse, CompletionResponseGen, CompletionResponseStream, ContentBlock,
    FinishReason, ImageBlock, ImageDetail, ImageNode, LanguageModelUsage, LlmError, TextBlock,
};
