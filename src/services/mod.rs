pub mod eval_service;
pub mod file_helpers;
pub mod model_service;
pub mod report_service;

pub use model_service::{ChatModel, OpenAiChatModel};
