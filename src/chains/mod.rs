//! Chain composition.
//!
//! A chain is an explicit pipeline over the model boundary: render the human
//! template, call the model, post-process the raw completion. The stages run
//! in that fixed order on every invocation; a constructed chain is immutable
//! and reusable across calls.

pub mod assistant;
pub mod grader;

pub use assistant::{assistant_chain, AssistantChain};
pub use grader::GraderChain;

/// Final pipeline stage: extracts the caller-facing text from the raw model
/// completion.
pub trait OutputParser: Send + Sync {
    fn parse(&self, raw: &str) -> String;
}

/// Default parser: the completion is already plain text, so just trim the
/// surrounding whitespace.
pub struct StrOutputParser;

impl OutputParser for StrOutputParser {
    fn parse(&self, raw: &str) -> String {
        raw.trim().to_string()
    }
}

/// Substitutes every `{key}` occurrence in the template. Templates without
/// the placeholder pass through unchanged.
pub(crate) fn render_template(template: &str, key: &str, value: &str) -> String {
    template.replace(&format!("{{{}}}", key), value)
}
