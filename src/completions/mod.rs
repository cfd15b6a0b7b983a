//! Completion API over chat models.
//!
//! Turns a prompt plus images into a single user turn and maps chat replies
//! back into completion responses, for blocking, streaming and async callers.

pub mod client;
pub mod inputs;

pub use client::{MultiModalCompletion, build_user_message};
pub use inputs::{ImageInput, ImageInputs};
