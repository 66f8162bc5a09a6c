use std::sync::Arc;

use crate::{
    chains::{render_template, OutputParser, StrOutputParser},
    config::Config,
    constants::prompts::{assistant_system_message, ASSISTANT_HUMAN_TEMPLATE},
    errors::AppResult,
    services::{file_helpers::read_file_into_string, ChatModel, OpenAiChatModel},
};

/// The quiz assistant: a reusable pipeline of system message, human
/// template, model client, and output parser. Each collaborator can be
/// swapped out for tests; `new` fills in production defaults.
pub struct AssistantChain {
    system_message: String,
    human_template: String,
    model: Arc<dyn ChatModel>,
    output_parser: Arc<dyn OutputParser>,
}

impl AssistantChain {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self {
            system_message: assistant_system_message(None),
            human_template: ASSISTANT_HUMAN_TEMPLATE.to_string(),
            model,
            output_parser: Arc::new(StrOutputParser),
        }
    }

    pub fn with_system_message(mut self, system_message: impl Into<String>) -> Self {
        self.system_message = system_message.into();
        self
    }

    pub fn with_human_template(mut self, human_template: impl Into<String>) -> Self {
        self.human_template = human_template.into();
        self
    }

    pub fn with_model(mut self, model: Arc<dyn ChatModel>) -> Self {
        self.model = model;
        self
    }

    pub fn with_output_parser(mut self, output_parser: Arc<dyn OutputParser>) -> Self {
        self.output_parser = output_parser;
        self
    }

    /// Runs the pipeline stages in order: render the human message, call
    /// the model, post-process the completion.
    pub async fn invoke(&self, question: &str) -> AppResult<String> {
        let user_message = render_template(&self.human_template, "question", question);
        let raw = self.model.complete(&self.system_message, &user_message).await?;
        Ok(self.output_parser.parse(&raw))
    }
}

/// Production factory: loads the quiz bank from the configured path (empty
/// content if missing), assembles the system prompt around it, and wires up
/// a fresh OpenAI client. Invoked per call so no client state is shared
/// implicitly between chains.
pub fn assistant_chain(config: &Config) -> AppResult<AssistantChain> {
    let quiz_bank = read_file_into_string(&config.quiz_bank_path);
    let system_message = assistant_system_message(quiz_bank.as_deref());
    let model = Arc::new(OpenAiChatModel::from_config(config));

    Ok(AssistantChain::new(model).with_system_message(system_message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::model_service::MockChatModel;

    #[tokio::test]
    async fn test_invoke_renders_template_and_parses_output() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .withf(|system, user| {
                system == "You are a quiz generator" && user == "Generate a quiz about Geography"
            })
            .times(1)
            .returning(|_, _| Ok("  Question 1:#### What is the capital of France?\n".to_string()));

        let chain = AssistantChain::new(Arc::new(model))
            .with_system_message("You are a quiz generator");

        let answer = chain
            .invoke("Generate a quiz about Geography")
            .await
            .unwrap();

        assert_eq!(answer, "Question 1:#### What is the capital of France?");
    }

    #[tokio::test]
    async fn test_custom_human_template_is_rendered() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .withf(|_, user| user == "Please answer: quiz me")
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        let chain = AssistantChain::new(Arc::new(model))
            .with_human_template("Please answer: {question}");

        let answer = chain.invoke("quiz me").await.unwrap();
        assert_eq!(answer, "ok");
    }

    #[tokio::test]
    async fn test_default_system_message_carries_instructions() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .withf(|system, _| system.contains("Step 1:") && system.contains("* Geography"))
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        let chain = AssistantChain::new(Arc::new(model));
        chain.invoke("anything").await.unwrap();
    }

    #[tokio::test]
    async fn test_production_factory_loads_bank_into_prompt() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .withf(|system, user| {
                system.contains("Subject: Leonardo DaVinci")
                    && system.contains("Step 2:####")
                    && user == "quiz me"
            })
            .times(1)
            .returning(|_, _| Ok("ok".to_string()));

        // The factory reads quiz_bank.txt from the configured path and bakes
        // it into the system prompt; only the oracle is swapped out here.
        let chain = assistant_chain(&Config::test_config())
            .unwrap()
            .with_model(Arc::new(model));

        chain.invoke("quiz me").await.unwrap();
    }

    #[tokio::test]
    async fn test_with_model_swaps_the_oracle() {
        let mut first = MockChatModel::new();
        first.expect_complete().times(0);

        let mut second = MockChatModel::new();
        second
            .expect_complete()
            .times(1)
            .returning(|_, _| Ok("from the replacement".to_string()));

        let chain = AssistantChain::new(Arc::new(first)).with_model(Arc::new(second));

        assert_eq!(chain.invoke("q").await.unwrap(), "from the replacement");
    }

    #[tokio::test]
    async fn test_chain_is_reusable_across_invocations() {
        let mut model = MockChatModel::new();
        model
            .expect_complete()
            .times(2)
            .returning(|_, _| Ok("stable".to_string()));

        let chain = AssistantChain::new(Arc::new(model));
        assert_eq!(chain.invoke("first").await.unwrap(), "stable");
        assert_eq!(chain.invoke("second").await.unwrap(), "stable");
    }
}
