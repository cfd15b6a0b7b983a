pub mod convert;
pub mod error;
pub mod options;
pub mod traits;
pub mod types;

pub use error::LlmError;
pub use options::ChatOptions;
pub use traits::ChatModel;
pub use types::{
    ChatMessage, ChatResponse, ChatResponseGen, ChatResponseStream, ChatRole, CompletionResponse,
    CompletionResponseGen, CompletionResponseStream, ContentBlock, FinishReason, ImageBlock,
    ImageDetail, ImageNode, LanguageModelUsage, TextBlock,
};
