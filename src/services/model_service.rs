use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestSystemMessageArgs, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::{config::Config, errors::AppResult};

/// Boundary to the text-completion oracle. Everything downstream treats the
/// model as opaque: a system message and a user message go in, free text
/// comes out.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, system_message: &str, user_message: &str) -> AppResult<String>;
}

/// Production `ChatModel` backed by the OpenAI chat-completion API.
///
/// Temperature is pinned by configuration (0 throughout) to request
/// maximally deterministic completions, though the oracle is still not
/// guaranteed byte-identical across calls.
pub struct OpenAiChatModel {
    client: Client<OpenAIConfig>,
    model_name: String,
    temperature: f32,
}

impl OpenAiChatModel {
    pub fn from_config(config: &Config) -> Self {
        let openai_config =
            OpenAIConfig::new().with_api_key(config.openai_api_key.expose_secret());

        Self {
            client: Client::with_config(openai_config),
            model_name: config.model_name.clone(),
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, system_message: &str, user_message: &str) -> AppResult<String> {
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .temperature(self.temperature)
            .messages([
                ChatCompletionRequestSystemMessageArgs::default()
                    .content(system_message)
                    .build()?
                    .into(),
                ChatCompletionRequestUserMessageArgs::default()
                    .content(user_message)
                    .build()?
                    .into(),
            ])
            .build()?;

        let response = self.client.chat().create(request).await?;

        let content = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .unwrap_or_default();

        Ok(content)
    }
}
