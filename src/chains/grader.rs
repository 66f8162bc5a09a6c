use std::sync::Arc;

use crate::{
    chains::{render_template, OutputParser, StrOutputParser},
    constants::prompts::{
        FORMAT_GRADER_SYSTEM_PROMPT, FORMAT_GRADER_USER_TEMPLATE,
        GROUNDING_GRADER_SYSTEM_PROMPT, GROUNDING_GRADER_USER_TEMPLATE,
        NARRATIVE_GRADER_SYSTEM_PROMPT, NARRATIVE_GRADER_USER_TEMPLATE,
    },
    errors::AppResult,
    services::ChatModel,
};

/// Model-graded evaluator: a second model call that judges the assistant's
/// output against a rubric. Variants share the same pipeline and differ only
/// in rubric text and requested verdict shape.
///
/// The verdict is returned as-is. The oracle is not contractually bound to
/// the requested token, so callers apply their own substring or equality
/// checks rather than structured parsing.
pub struct GraderChain {
    system_message: String,
    human_template: String,
    model: Arc<dyn ChatModel>,
    output_parser: Arc<dyn OutputParser>,
}

impl GraderChain {
    fn new(
        system_message: &str,
        human_template: &str,
        model: Arc<dyn ChatModel>,
    ) -> Self {
        Self {
            system_message: system_message.to_string(),
            human_template: human_template.to_string(),
            model,
            output_parser: Arc::new(StrOutputParser),
        }
    }

    /// Y/N verdict: does the output look like a quiz in the expected
    /// `Question N:####` format, regardless of content.
    pub fn format_grader(model: Arc<dyn ChatModel>) -> Self {
        Self::new(
            FORMAT_GRADER_SYSTEM_PROMPT,
            FORMAT_GRADER_USER_TEMPLATE,
            model,
        )
    }

    /// Y/N verdict: does the quiz only reference facts present in the
    /// question bank.
    pub fn grounding_grader(model: Arc<dyn ChatModel>) -> Self {
        Self::new(
            GROUNDING_GRADER_SYSTEM_PROMPT,
            GROUNDING_GRADER_USER_TEMPLATE,
            model,
        )
    }

    /// Free-text judgment with a leading Yes/No decision, used for the HTML
    /// report where a human reads the explanation.
    pub fn narrative_grader(model: Arc<dyn ChatModel>) -> Self {
        Self::new(
            NARRATIVE_GRADER_SYSTEM_PROMPT,
            NARRATIVE_GRADER_USER_TEMPLATE,
            model,
        )
    }

    pub fn with_output_parser(mut self, output_parser: Arc<dyn OutputParser>) -> Self {
        self.output_parser = output_parser;
        self
    }

    /// Embeds the reference data and the assistant output into the rubric
    /// message and asks the model for a verdict.
    pub async fn invoke(&self, context: &str, agent_response: &str) -> AppResult<String> {
        let user_message = render_template(&self.human_template, "context", context);
        let user_message = render_template(&user_message, "agent_response", agent_response);
        let raw = self.model.complete(&self.system_message, &user_message).await?;
        Ok(self.output_parser.parse(&raw))
    }
}
