pub mod prompts;

pub use prompts::{DELIMITER, REFUSAL_MESSAGE};
