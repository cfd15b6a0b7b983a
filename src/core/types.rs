use std::path::PathBuf;
use std::pin::Pin;

use bytes::Bytes;
use futures::Stream;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::LlmError;

/// Lazily produced chat increments, driven by the caller.
pub type ChatResponseGen = Box<dyn Iterator<Item = Result<ChatResponse, LlmError>> + Send>;

/// Chat increments produced asynchronously.
pub type ChatResponseStream = Pin<Box<dyn Stream<Item = Result<ChatResponse, LlmError>> + Send>>;

pub type CompletionResponseGen =
    Box<dyn Iterator<Item = Result<CompletionResponse, LlmError>> + Send>;

pub type CompletionResponseStream =
    Pin<Box<dyn Stream<Item = Result<CompletionResponse, LlmError>> + Send>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

impl std::fmt::Display for ChatRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatRole::System => write!(f, "system"),
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// A single conversation turn.
///
/// `content` is the implicit text of the turn. `blocks` holds explicit,
/// ordered content and is empty for plain text messages.
///
/// When `blocks` is non-empty it is the full content of the turn and
/// `content` only mirrors its text, so chat models should send the blocks
/// and ignore `content`. Otherwise `content` is the whole turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub blocks: Vec<ContentBlock>,

    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub additional_kwargs: Map<String, Value>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: Some(content.into()),
            blocks: Vec::new(),
            additional_kwargs: Map::new(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    pub fn with_block(mut self, block: impl Into<ContentBlock>) -> Self {
        self.blocks.push(block.into());
        self
    }

    /// Text of the turn: `content` when set, else the text blocks joined
    /// with newlines. `None` when the turn carries no text at all.
    pub fn text(&self) -> Option<String> {
        if let Some(content) = &self.content {
            return Some(content.clone());
        }

        let texts: Vec<&str> = self.text_blocks().map(|block| block.text.as_str()).collect();
        if texts.is_empty() {
            None
        } else {
            Some(texts.join("\n"))
        }
    }

    pub fn text_blocks(&self) -> impl Iterator<Item = &TextBlock> {
        self.blocks.iter().filter_map(|block| match block {
            ContentBlock::Text(text) => Some(text),
            ContentBlock::Image(_) => None,
        })
    }

    pub fn image_blocks(&self) -> impl Iterator<Item = &ImageBlock> {
        self.blocks.iter().filter_map(|block| match block {
            ContentBlock::Image(image) => Some(image),
            ContentBlock::Text(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "block_type", rename_all = "lowercase")]
pub enum ContentBlock {
    Text(TextBlock),
    Image(ImageBlock),
}

impl From<TextBlock> for ContentBlock {
    fn from(block: TextBlock) -> Self {
        ContentBlock::Text(block)
    }
}

impl From<ImageBlock> for ContentBlock {
    fn from(block: ImageBlock) -> Self {
        ContentBlock::Image(block)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    pub text: String,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Resolution hint forwarded to vision models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDetail {
    Auto,
    Low,
    High,
}

/// An image reference in the form chat models accept.
///
/// `image` carries base64 text exactly as supplied; nothing here encodes or
/// decodes image data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImageBlock {
    #[serde(default, with = "base64_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<Bytes>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_mimetype: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<ImageDetail>,
}

impl ImageBlock {
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Default::default()
        }
    }

    /// `data` is base64 text; raw image bytes must be encoded by the caller.
    pub fn from_base64(data: impl Into<String>, mimetype: impl Into<String>) -> Self {
        Self {
            image: Some(Bytes::from(data.into())),
            image_mimetype: Some(mimetype.into()),
            ..Default::default()
        }
    }

    pub fn with_detail(mut self, detail: ImageDetail) -> Self {
        self.detail = Some(detail);
        self
    }
}

/// Base64 payloads are ASCII, so they travel as JSON strings.
mod base64_text {
    use bytes::Bytes;
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};

    pub fn serialize<S>(value: &Option<Bytes>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(bytes) => {
                let text = std::str::from_utf8(bytes).map_err(S::Error::custom)?;
                serializer.serialize_some(text)
            }
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Bytes>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = Option::<String>::deserialize(deserializer)?;
        match text {
            Some(text) if text.is_empty() => Err(D::Error::custom("empty image payload")),
            Some(text) => Ok(Some(Bytes::from(text))),
            None => Ok(None),
        }
    }
}

/// A document-like node that carries an image together with where it came from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageNode {
    pub id: String,
    /// Text extracted from or describing the image.
    pub text: String,
    /// Base64 image payload.
    pub image: Option<Bytes>,
    pub image_path: Option<PathBuf>,
    pub image_url: Option<String>,
    pub image_mimetype: Option<String>,
    pub metadata: Map<String, Value>,
}

impl ImageNode {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// `data` is base64 text; raw image bytes must be encoded by the caller.
    pub fn with_image(mut self, data: impl Into<String>) -> Self {
        self.image = Some(Bytes::from(data.into()));
        self
    }

    pub fn with_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.image_path = Some(path.into());
        self
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn with_mimetype(mut self, mimetype: impl Into<String>) -> Self {
        self.image_mimetype = Some(mimetype.into());
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LanguageModelUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter(String),
    ToolCalls,
    Error,
    Other,
}

/// A chat model reply, or one increment of a streamed reply.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    pub message: ChatMessage,
    /// Text added by this increment when streaming.
    pub delta: Option<String>,
    /// Provider payload the response was parsed from.
    pub raw: Option<Value>,
    pub usage: Option<LanguageModelUsage>,
    pub finish_reason: Option<FinishReason>,
}

impl ChatResponse {
    pub fn new(message: ChatMessage) -> Self {
        Self {
            message,
            delta: None,
            raw: None,
            usage: None,
            finish_reason: None,
        }
    }

    pub fn with_delta(mut self, delta: impl Into<String>) -> Self {
        self.delta = Some(delta.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompletionResponse {
    pub text: String,
    pub delta: Option<String>,
    pub raw: Option<Value>,
    pub usage: Option<LanguageModelUsage>,
    pub finish_reason: Option<FinishReason>,
    pub additional_kwargs: Map<String, Value>,
}
