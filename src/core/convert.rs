//! Pure conversions between chat and completion shapes.

use futures::StreamExt;

use super::types::{
    ChatResponse, ChatResponseGen, ChatResponseStream, CompletionResponse, CompletionResponseGen,
    CompletionResponseStream, ImageBlock, ImageNode,
};

pub fn chat_response_to_completion_response(response: ChatResponse) -> CompletionResponse {
    CompletionResponse {
        text: response.message.text().unwrap_or_default(),
        delta: response.delta,
        raw: response.raw,
        usage: response.usage,
        finish_reason: response.finish_reason,
        additional_kwargs: response.message.additional_kwargs,
    }
}

/// Maps each chat increment to a completion increment as it is pulled.
pub fn stream_chat_response_to_completion_response(
    stream: ChatResponseGen,
) -> CompletionResponseGen {
    Box::new(stream.map(|item| item.map(chat_response_to_completion_response)))
}

/// Maps each chat increment to a completion increment as it is polled.
///
/// Dropping the returned stream drops the chat stream with it.
pub fn astream_chat_response_to_completion_response(
    stream: ChatResponseStream,
) -> CompletionResponseStream {
    Box::pin(stream.map(|item| item.map(chat_response_to_completion_response)))
}

/// Builds the image block for a node, keeping every image source it carries.
pub fn image_node_to_image_block(node: &ImageNode) -> ImageBlock {
    ImageBlock {
        image: node.image.clone(),
        path: node.image_path.clone(),
        url: node.image_url.clone(),
        image_mimetype: node.image_mimetype.clone(),
        detail: None,
    }
}
